//! Recorre una `Session` en tiempo real.
//!
//! Contrato:
//! - Las fases corren en el orden que produce la sesión; cada una bloquea
//!   hasta que su cuenta regresiva llega a 0.
//! - Cada tick se notifica al sink (N, N-1, ..., 0); entre ticks se espera una
//!   unidad con el `Pacer`.
//! - Después de cada pose se espera la pausa de transición.
//! - La `CancelFlag` se consulta antes de pedir la siguiente fase y antes de
//!   cada espera; si está activa la sesión termina con
//!   `SessionOutcome::Cancelled` sin sortear más poses.

use chrono::Utc;
use log::{debug, info};
use rand::Rng;

use super::cancel::CancelFlag;
use super::pacer::Pacer;
use super::sink::PhaseSink;
use crate::phase::{Countdown, PhaseKind};
use crate::session::{Session, SessionOutcome, SessionReport};

pub struct SessionRunner<P: Pacer> {
    pacer: P,
    cancel: CancelFlag,
}

impl<P: Pacer> SessionRunner<P> {
    pub fn new(pacer: P) -> Self {
        Self { pacer,
               cancel: CancelFlag::new() }
    }

    /// Usa una bandera compartida (p.ej. con el handler de Ctrl-C).
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_flag(&self) -> &CancelFlag { &self.cancel }

    pub fn pacer(&self) -> &P { &self.pacer }

    /// Espera `units` unidades de a una, cortando si se cancela.
    /// Devuelve `false` si se canceló.
    fn wait(&mut self, units: u64) -> bool {
        for _ in 0..units {
            if self.cancel.is_cancelled() {
                return false;
            }
            self.pacer.wait_units(1);
        }
        !self.cancel.is_cancelled()
    }

    pub fn run<R, S>(&mut self, mut session: Session<R>, sink: &mut S) -> SessionReport
        where R: Rng,
              S: PhaseSink + ?Sized
    {
        let started_at = Utc::now();
        let transition = session.timing().transition_seconds;
        let mut poses = Vec::new();
        let mut phases_completed = 0;
        let mut outcome = SessionOutcome::Completed;
        info!("session:run:start id={} chakra={} target={}s",
              session.id(),
              session.chakra(),
              session.target_seconds());

        'phases: loop {
            if self.cancel.is_cancelled() {
                outcome = SessionOutcome::Cancelled;
                break;
            }
            let Some(phase) = session.next() else {
                break;
            };
            sink.phase_started(&phase);
            if let Some(p) = &phase.pose {
                poses.push(p.name().to_string());
            }
            let mut ticks = Countdown::new(phase.countdown_seconds);
            if let Some(first) = ticks.next() {
                sink.tick(&phase, first);
            }
            for remaining in ticks {
                if !self.wait(1) {
                    outcome = SessionOutcome::Cancelled;
                    break 'phases;
                }
                sink.tick(&phase, remaining);
            }
            sink.phase_finished(&phase);
            phases_completed += 1;
            debug!("session:phase:done index={} kind={}", phase.index, phase.kind);

            if phase.kind == PhaseKind::Pose && transition > 0 {
                sink.transition(transition);
                if !self.wait(transition) {
                    outcome = SessionOutcome::Cancelled;
                    break;
                }
            }
        }

        let report = SessionReport { session_id: session.id(),
                                     chakra: session.chakra(),
                                     target_seconds: session.target_seconds(),
                                     elapsed_seconds: session.elapsed_seconds(),
                                     poses,
                                     phases_completed,
                                     outcome,
                                     started_at,
                                     finished_at: Utc::now() };
        info!("session:run:done id={} outcome={:?} poses={} phases={}",
              report.session_id,
              report.outcome,
              report.poses.len(),
              report.phases_completed);
        sink.session_finished(&report);
        report
    }
}
