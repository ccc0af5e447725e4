//! Datos iniciales: catálogo canónico de poses y plantillas de flow.
//!
//! `seed_all` inserta todo en una sola transacción:
//! - 49 poses (7 por chakra).
//! - 7 plantillas de flow (una por chakra).
//! - `POSES_PER_FLOW` vínculos por flow, elegidos al azar entre las poses de
//!   su mismo chakra, sin repetir dentro del flow.

use diesel::prelude::*;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

use crate::error::PersistenceError;
use crate::migrations::reset_schema;
use crate::models::{FlowRow, NewFlowPoseRow, NewFlowRow, NewPoseRow, PoseRow};
use crate::schema::{flow_poses, flows, poses};
use crate::sqlite::ConnectionProvider;

pub const POSES_PER_FLOW: usize = 5;

/// (nombre, chakra, dificultad)
pub const SEED_POSES: [(&str, &str, &str); 49] = [("Conquer Breath", "Root", "Easy"),
                                                  ("Easy Pose", "Sacral", "Easy"),
                                                  ("Staff Pose", "Solar Plexus", "Easy"),
                                                  ("Cat Pose", "Heart", "Easy"),
                                                  ("Sphinx Pose", "Throat", "Intermediate"),
                                                  ("Warrior 1 Pose", "Third Eye", "Intermediate"),
                                                  ("Gate Pose", "Crown", "Intermediate"),
                                                  ("Extended Side Angle Pose", "Root", "Intermediate"),
                                                  ("Wide Legged Forward Bend", "Sacral", "Intermediate"),
                                                  ("Wide-Angle Seated Forward Bend", "Solar Plexus", "Intermediate"),
                                                  ("Reclining Bound Angle Pose", "Heart", "Intermediate"),
                                                  ("Hero Pose", "Throat", "Intermediate"),
                                                  ("Chair Pose", "Third Eye", "Intermediate"),
                                                  ("Mountain Pose", "Crown", "Easy"),
                                                  ("Bharadvaja's Twist", "Root", "Intermediate"),
                                                  ("Salutation Seal", "Sacral", "Easy"),
                                                  ("Corpse Pose", "Solar Plexus", "Easy"),
                                                  ("Standing Forward Bend", "Heart", "Intermediate"),
                                                  ("Seated Forward Bend", "Throat", "Intermediate"),
                                                  ("Childs Pose", "Third Eye", "Easy"),
                                                  ("Cobra Pose", "Crown", "Intermediate"),
                                                  ("Plank Pose", "Root", "Intermediate"),
                                                  ("Happy Baby Pose", "Sacral", "Easy"),
                                                  ("Low Lunge", "Solar Plexus", "Intermediate"),
                                                  ("High Lunge", "Heart", "Intermediate"),
                                                  ("Standing Half Forward Bend", "Throat", "Intermediate"),
                                                  ("Root Bond", "Third Eye", "Intermediate"),
                                                  ("Garland Pose", "Crown", "Intermediate"),
                                                  ("Extended Puppy Pose", "Root", "Intermediate"),
                                                  ("Lion Pose", "Sacral", "Intermediate"),
                                                  ("Intense Side Stretch", "Solar Plexus", "Intermediate"),
                                                  ("Locust Pose", "Heart", "Intermediate"),
                                                  ("Heron Pose", "Throat", "Intermediate"),
                                                  ("Fish Pose", "Third Eye", "Intermediate"),
                                                  ("Legs-Up-The-Wall Pose", "Crown", "Easy"),
                                                  ("Cow Face Pose", "Root", "Intermediate"),
                                                  ("Warrior II Pose", "Sacral", "Intermediate"),
                                                  ("Tree Pose", "Solar Plexus", "Intermediate"),
                                                  ("Downward Facing Dog", "Heart", "Intermediate"),
                                                  ("Half Lord of the Fishes Pose", "Throat", "Intermediate"),
                                                  ("Bridge Pose", "Third Eye", "Intermediate"),
                                                  ("Four Limbed Staff", "Crown", "Intermediate"),
                                                  ("Standing Forward Bend", "Root", "Intermediate"),
                                                  ("Pigeon Pose Head Down", "Sacral", "Intermediate"),
                                                  ("Lotus Pose", "Solar Plexus", "Advanced"),
                                                  ("Warrior III", "Heart", "Intermediate"),
                                                  ("Cow Pose", "Throat", "Easy"),
                                                  ("Upward Facing Dog", "Third Eye", "Intermediate"),
                                                  ("Shoulder Stand", "Crown", "Intermediate")];

/// (chakra, duración en minutos, dificultad)
pub const SEED_FLOWS: [(&str, i32, &str); 7] = [("Root", 30, "Easy"),
                                                ("Sacral", 20, "Easy"),
                                                ("Solar Plexus", 40, "Easy"),
                                                ("Heart", 30, "Easy"),
                                                ("Throat", 20, "Easy"),
                                                ("Third Eye", 40, "Intermediate"),
                                                ("Crown", 30, "Intermediate")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub poses: usize,
    pub flows: usize,
    pub links: usize,
}

/// Borra y recrea las tablas.
pub fn reset<P: ConnectionProvider + ?Sized>(provider: &P) -> Result<(), PersistenceError> {
    let mut conn = provider.connection()?;
    reset_schema(&mut conn)?;
    info!("seed:reset done");
    Ok(())
}

/// Carga el catálogo inicial. Con `reset_first` recrea las tablas antes;
/// sin él, rechaza una base que ya tiene poses (`AlreadySeeded`).
pub fn seed_all<P, R>(provider: &P, reset_first: bool, rng: &mut R) -> Result<SeedSummary, PersistenceError>
    where P: ConnectionProvider + ?Sized,
          R: Rng + ?Sized
{
    if reset_first {
        reset(provider)?;
    }
    let mut conn = provider.connection()?;
    let summary = conn.transaction(|tx| {
                          let existing: i64 = poses::table.count().get_result(tx)?;
                          if existing > 0 {
                              return Err(PersistenceError::AlreadySeeded(existing));
                          }

                          let pose_rows: Vec<NewPoseRow> =
                              SEED_POSES.iter()
                                        .map(|&(name, chakra, difficulty)| NewPoseRow { name, chakra, difficulty })
                                        .collect();
                          let n_poses = diesel::insert_into(poses::table).values(&pose_rows).execute(tx)?;

                          let flow_rows: Vec<NewFlowRow> =
                              SEED_FLOWS.iter()
                                        .map(|&(chakra, duration, difficulty)| NewFlowRow { chakra,
                                                                                            duration,
                                                                                            difficulty })
                                        .collect();
                          let n_flows = diesel::insert_into(flows::table).values(&flow_rows).execute(tx)?;

                          let stored_poses: Vec<PoseRow> = poses::table.select(PoseRow::as_select()).load(tx)?;
                          let stored_flows: Vec<FlowRow> = flows::table.select(FlowRow::as_select()).load(tx)?;
                          let links = pick_flow_poses(&stored_flows, &stored_poses, rng);
                          let n_links = diesel::insert_into(flow_poses::table).values(&links).execute(tx)?;

                          Ok(SeedSummary { poses: n_poses,
                                           flows: n_flows,
                                           links: n_links })
                      })?;
    info!("seed:done poses={} flows={} links={}", summary.poses, summary.flows, summary.links);
    Ok(summary)
}

/// Elige hasta `POSES_PER_FLOW` poses distintas del mismo chakra para cada flow.
fn pick_flow_poses<R: Rng + ?Sized>(flows: &[FlowRow], poses: &[PoseRow], rng: &mut R) -> Vec<NewFlowPoseRow> {
    let mut by_chakra: HashMap<&str, Vec<i32>> = HashMap::new();
    for p in poses {
        by_chakra.entry(p.chakra.as_str()).or_default().push(p.id);
    }
    let mut links = Vec::new();
    for flow in flows {
        let Some(candidates) = by_chakra.get(flow.chakra.as_str()) else {
            debug!("seed:flow_poses no poses for chakra={}", flow.chakra);
            continue;
        };
        links.extend(candidates.choose_multiple(rng, POSES_PER_FLOW)
                               .map(|pose_id| NewFlowPoseRow { flow_id: flow.id,
                                                               pose_id: *pose_id }));
    }
    links
}
