//! Subcomandos no interactivos.
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use yoga_core::PhaseSink;
use yoga_domain::{Chakra, Difficulty, Flow};
use yoga_persistence::seed;

use crate::app::AppContext;
use crate::cli::Command;
use crate::errors::AppError;
use crate::menu::tables;

pub fn execute(ctx: &AppContext,
               command: Command,
               out: &mut dyn Write,
               sink: &mut dyn PhaseSink)
               -> Result<(), AppError> {
    match command {
        Command::Init => {
            let poses = ctx.poses().count()?;
            let flows = ctx.flows().count()?;
            writeln!(out, "Database ready ({poses} poses, {flows} flow templates).")?;
        }
        Command::Seed { reset } => {
            let summary = seed::seed_all(ctx.provider(), reset, &mut StdRng::from_entropy())?;
            writeln!(out,
                     "Seeded {} poses, {} flow templates and {} flow/pose links.",
                     summary.poses, summary.flows, summary.links)?;
        }
        Command::Poses { chakra, json } => {
            let poses = match chakra {
                Some(chakra) => ctx.poses().list_by_chakra(chakra)?,
                None => ctx.poses().get_all()?,
            };
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&poses)?)?;
            } else {
                print_lines(out, tables::pose_table(&poses), "No yoga poses found.")?;
            }
        }
        Command::Flows { chakra,
                         duration,
                         difficulty,
                         json, } => {
            let flows = find_flows(ctx, chakra, duration, difficulty)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&flows)?)?;
            } else {
                print_lines(out, tables::flow_table(&flows), "No yoga flows found.")?;
            }
        }
        Command::Practice { flow,
                            chakra,
                            minutes,
                            json,
                            .. } => {
            let (chakra, minutes) = match (flow, chakra, minutes) {
                (Some(id), _, _) => {
                    let flow = ctx.flows().find_by_id(id)?.ok_or(AppError::FlowNotFound(id))?;
                    (flow.chakra(), flow.duration_minutes())
                }
                (None, Some(chakra), Some(minutes)) => (chakra, minutes),
                _ => return Err(AppError::InvalidArgs("use --flow ID or --chakra C --minutes M".into())),
            };
            let report = ctx.practice(chakra, minutes, sink)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            }
            if !report.is_completed() {
                return Err(AppError::Interrupted);
            }
        }
    }
    Ok(())
}

/// Aplica los filtros dados; el primero se resuelve en la base y el resto
/// sobre el resultado.
pub fn find_flows(ctx: &AppContext,
                  chakra: Option<Chakra>,
                  duration: Option<u32>,
                  difficulty: Option<Difficulty>)
                  -> Result<Vec<Flow>, AppError> {
    let repo = ctx.flows();
    let mut flows = match (chakra, duration, difficulty) {
        (Some(c), _, _) => repo.filter_by_chakra(c)?,
        (None, Some(d), _) => repo.filter_by_duration(d)?,
        (None, None, Some(d)) => repo.filter_by_difficulty(d)?,
        (None, None, None) => repo.get_all()?,
    };
    flows.retain(|f| {
             chakra.map_or(true, |c| f.chakra() == c)
             && duration.map_or(true, |d| f.duration_minutes() == d)
             && difficulty.map_or(true, |d| f.difficulty() == d)
         });
    info!("commands:flows matched={}", flows.len());
    Ok(flows)
}

fn print_lines(out: &mut dyn Write, lines: Option<Vec<String>>, empty: &str) -> Result<(), AppError> {
    match lines {
        Some(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        None => writeln!(out, "{empty}")?,
    }
    Ok(())
}
