//! Sesión efímera: el estado que el generador muta mientras produce fases.
//!
//! Orden fijo de fases:
//! 1. Respiración (inhala) y respiración (exhala).
//! 2. Poses: mientras `elapsed < target` y el pool no esté vacío.
//! 3. Savasana.
//!
//! La selección de poses es perezosa: cada `next()` en la etapa de poses
//! extrae una candidata del pool y avanza el acumulador.

use log::debug;
use rand::Rng;
use std::iter::FusedIterator;
use uuid::Uuid;
use yoga_domain::{Chakra, Pose};

use super::pool::CandidatePool;
use super::timing::SessionTiming;
use crate::constants::{MIN_POSES_PER_SESSION, SAVASANA_LABEL};
use crate::errors::SessionError;
use crate::lookup::PoseLookup;
use crate::phase::{PhaseEvent, PhaseKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Inhale,
    Exhale,
    Poses,
    Done,
}

#[derive(Debug)]
pub struct Session<R: Rng> {
    id: Uuid,
    chakra: Chakra,
    timing: SessionTiming,
    target_seconds: u64,
    pool: CandidatePool,
    elapsed_seconds: u64,
    stage: Stage,
    emitted: usize,
    poses_emitted: usize,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Valida la precondición y arma la sesión. No produce ninguna fase.
    ///
    /// Un chakra desconocido no es un error distinto: equivale a un pool vacío
    /// y termina en `InsufficientPoses`.
    pub fn prepare<L>(lookup: &L,
                      chakra: &str,
                      target_seconds: u64,
                      timing: SessionTiming,
                      rng: R)
                      -> Result<Self, SessionError>
        where L: PoseLookup + ?Sized
    {
        let parsed: Chakra = match chakra.parse() {
            Ok(c) => c,
            Err(_) => {
                debug!("session:prepare unknown chakra={chakra:?}");
                return Err(SessionError::InsufficientPoses { chakra: chakra.trim().to_string(),
                                                              found: 0,
                                                              required: MIN_POSES_PER_SESSION });
            }
        };
        let matching: Vec<Pose> = lookup.list_poses_by_chakra(parsed)?
                                        .into_iter()
                                        .filter(|p| p.chakra() == parsed)
                                        .collect();
        if matching.len() < MIN_POSES_PER_SESSION {
            debug!("session:prepare insufficient chakra={parsed} found={}", matching.len());
            return Err(SessionError::InsufficientPoses { chakra: parsed.to_string(),
                                                          found: matching.len(),
                                                          required: MIN_POSES_PER_SESSION });
        }
        let id = Uuid::new_v4();
        debug!("session:prepare id={id} chakra={parsed} target={target_seconds}s pool={}",
               matching.len());
        Ok(Self { id,
                  chakra: parsed,
                  timing,
                  target_seconds,
                  pool: CandidatePool::new(matching),
                  elapsed_seconds: 0,
                  stage: Stage::Inhale,
                  emitted: 0,
                  poses_emitted: 0,
                  rng })
    }

    pub fn id(&self) -> Uuid { self.id }
    pub fn chakra(&self) -> Chakra { self.chakra }
    pub fn timing(&self) -> &SessionTiming { &self.timing }
    pub fn target_seconds(&self) -> u64 { self.target_seconds }
    pub fn elapsed_seconds(&self) -> u64 { self.elapsed_seconds }
    pub fn remaining_candidates(&self) -> usize { self.pool.len() }

    fn phase(&mut self, kind: PhaseKind, label: String, countdown_seconds: u64, pose: Option<Pose>) -> PhaseEvent {
        let ev = PhaseEvent { index: self.emitted,
                              kind,
                              label,
                              countdown_seconds,
                              pose };
        self.emitted += 1;
        ev
    }

    fn next_pose(&mut self) -> Option<PhaseEvent> {
        if self.elapsed_seconds >= self.target_seconds {
            return None;
        }
        let pose = self.pool.draw(&mut self.rng)?;
        self.poses_emitted += 1;
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(self.timing.per_pose_cost());
        let label = format!("Starting pose {}: {}", self.poses_emitted, pose.name());
        let seconds = self.timing.pose_seconds;
        Some(self.phase(PhaseKind::Pose, label, seconds, Some(pose)))
    }
}

impl<R: Rng> Iterator for Session<R> {
    type Item = PhaseEvent;

    fn next(&mut self) -> Option<PhaseEvent> {
        let breath = self.timing.breath_seconds;
        match self.stage {
            Stage::Inhale => {
                self.stage = Stage::Exhale;
                Some(self.phase(PhaseKind::Breath, "Round 1 of breath: Inhale".into(), breath, None))
            }
            Stage::Exhale => {
                self.stage = Stage::Poses;
                Some(self.phase(PhaseKind::Breath, "Round 1 of breath: Exhale".into(), breath, None))
            }
            Stage::Poses => match self.next_pose() {
                Some(ev) => Some(ev),
                None => {
                    debug!("session:poses-done id={} poses={} elapsed={}s remaining_pool={}",
                           self.id,
                           self.poses_emitted,
                           self.elapsed_seconds,
                           self.pool.len());
                    self.stage = Stage::Done;
                    let rest = self.timing.rest_seconds;
                    Some(self.phase(PhaseKind::Rest, SAVASANA_LABEL.into(), rest, None))
                }
            },
            Stage::Done => None,
        }
    }
}

impl<R: Rng> FusedIterator for Session<R> {}
