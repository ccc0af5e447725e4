//! "Manage Flows": listar, crear y borrar plantillas.
use log::info;
use yoga_domain::{Chakra, NewFlow, ALLOWED_DURATIONS};

use super::{ask_id, recover, section, show_options, tables, Ui, CHOICE_PROMPT, INVALID_CHOICE};
use crate::app::AppContext;
use crate::errors::AppError;

pub(super) fn manage_flows(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    loop {
        section(ui, "Manage Flows")?;
        show_options(ui,
                     &["Display all flow templates",
                       "Create a new flow template",
                       "Delete a flow template by ID",
                       "Back to Main Menu"])?;
        let result = match super::parse_choice(&ui.ask(CHOICE_PROMPT)?, 4) {
            Some(1) => list_flows(ctx, ui),
            Some(2) => create_flow(ctx, ui),
            Some(3) => delete_flow(ctx, ui),
            Some(_) => return Ok(()),
            None => ui.say(INVALID_CHOICE),
        };
        recover(ui, result)?;
    }
}

pub(super) fn list_flows(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    match tables::flow_table(&ctx.flows().get_all()?) {
        Some(lines) => lines.iter().try_for_each(|l| ui.say(l)),
        None => ui.say("No yoga flows found."),
    }
}

fn duration_choices() -> String {
    let values: Vec<String> = ALLOWED_DURATIONS.iter().map(u32::to_string).collect();
    let (last, rest) = values.split_last().map(|(l, r)| (l.clone(), r.join(", "))).unwrap_or_default();
    format!("{rest}, or {last} minutes")
}

fn create_flow(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    let chakra = ui.ask(&format!("Enter the chakra of the flow ({})", Chakra::choices()))?;
    let duration = ui.ask(&format!("Enter the duration of the flow ({})", duration_choices()))?;
    let difficulty = ui.ask("Enter the difficulty of the flow (Easy, Intermediate, or Advanced)")?;
    let new = NewFlow::parse(&chakra, &duration, &difficulty)?;
    let flow = ctx.flows().create(&new)?;
    info!("menu:flows:create id={}", flow.id());
    ui.say("Yoga flow created successfully!")
}

fn delete_flow(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    let deleted = match ask_id(ui, "Enter the ID of the flow template you want to delete")? {
        Some(id) => ctx.flows().delete(id)?,
        None => false,
    };
    if deleted {
        ui.say("Yoga flow deleted successfully!")
    } else {
        ui.say("Flow not found.")
    }
}
