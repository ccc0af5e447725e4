//! "Begin Practice": buscar una plantilla y practicarla.
use console::style;
use log::info;
use yoga_core::SessionError;
use yoga_domain::flow::parse_duration;
use yoga_domain::{Chakra, Difficulty, Flow};

use super::{ask_id, recover, section, show_options, Ui, CHOICE_PROMPT, INVALID_CHOICE};
use crate::app::AppContext;
use crate::errors::AppError;

const GENERATE_PROMPT: &str = "Enter the ID of the flow template you want to generate";

pub(super) fn search_flows(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    loop {
        section(ui, "Search Flow Templates")?;
        show_options(ui,
                     &["Display all templates",
                       "Filter templates by chakra",
                       "Filter templates by duration",
                       "Filter templates by difficulty",
                       "Back to Main Menu"])?;
        let listed = match super::parse_choice(&ui.ask(CHOICE_PROMPT)?, 5) {
            Some(1) => super::flows::list_flows(ctx, ui),
            Some(2) => by_chakra(ctx, ui),
            Some(3) => by_duration(ctx, ui),
            Some(4) => by_difficulty(ctx, ui),
            Some(_) => return Ok(()),
            None => {
                ui.say(INVALID_CHOICE)?;
                continue;
            }
        };
        // Un filtro con entrada inválida no ofrece generar.
        match listed {
            Ok(()) => {
                let id = ask_id(ui, GENERATE_PROMPT)?;
                begin_practice(ctx, ui, id)?;
            }
            Err(err) => recover(ui, Err(err))?,
        }
    }
}

fn print_flows(ui: &mut dyn Ui, flows: &[Flow], heading: String, empty: String) -> Result<(), AppError> {
    if flows.is_empty() {
        return ui.say(&empty);
    }
    ui.say(&heading)?;
    flows.iter().try_for_each(|f| ui.say(&f.to_string()))
}

fn by_chakra(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    let input = ui.ask(&format!("Enter the chakra to filter by ({})", Chakra::choices()))?;
    let chakra: Chakra = input.parse()?;
    let flows = ctx.flows().filter_by_chakra(chakra)?;
    print_flows(ui,
                &flows,
                format!("Yoga Flows with Chakra '{chakra}':"),
                format!("No yoga flows found with Chakra '{chakra}'."))
}

fn by_duration(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    let input = ui.ask("Enter the duration to filter by")?;
    let minutes = parse_duration(&input)?;
    let flows = ctx.flows().filter_by_duration(minutes)?;
    print_flows(ui,
                &flows,
                format!("Yoga Flows with Duration '{minutes}' minutes:"),
                format!("No yoga flows found with Duration '{minutes}' minutes."))
}

fn by_difficulty(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    let input = ui.ask("Enter the difficulty level to filter by")?;
    let difficulty: Difficulty = input.parse()?;
    let flows = ctx.flows().filter_by_difficulty(difficulty)?;
    print_flows(ui,
                &flows,
                format!("Yoga Flows with Difficulty Level '{difficulty}':"),
                format!("No yoga flows found with Difficulty '{difficulty}'."))
}

/// Genera y recorre la sesión de la plantilla `id`.
pub(super) fn begin_practice(ctx: &AppContext, ui: &mut dyn Ui, id: Option<i32>) -> Result<(), AppError> {
    let flow = match id {
        Some(id) => ctx.flows().find_by_id(id)?,
        None => None,
    };
    let Some(flow) = flow else {
        return ui.say("Flow not found.");
    };
    let stars = "* ".repeat(24);
    ui.say(&style(format!("\n{stars}\n\n     Generating your unique yoga flow...\n\n{stars}\n")).bold()
                                                                                           .to_string())?;
    info!("menu:practice flow={}", flow.id());
    match ctx.practice(flow.chakra(), flow.duration_minutes(), ui.sink()) {
        Ok(_) => Ok(()),
        Err(AppError::Session(err @ SessionError::InsufficientPoses { .. })) => {
            ui.say(&err.to_string())?;
            ui.say("Please choose a different flow or add more poses for this chakra.")
        }
        Err(err) => Err(err),
    }
}
