//! "Manage Poses": listar, crear, actualizar y borrar poses.
use log::info;
use yoga_domain::{Chakra, NewPose, PoseUpdate};
use yoga_persistence::PersistenceError;

use super::{ask_id, recover, section, show_options, tables, Ui, CHOICE_PROMPT, INVALID_CHOICE};
use crate::app::AppContext;
use crate::errors::AppError;

pub(super) fn manage_poses(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    loop {
        section(ui, "Manage Poses")?;
        show_options(ui,
                     &["Display all poses",
                       "Create a new pose",
                       "Update a pose by ID",
                       "Delete a pose by ID",
                       "Back to Main Menu"])?;
        let result = match super::parse_choice(&ui.ask(CHOICE_PROMPT)?, 5) {
            Some(1) => list_poses(ctx, ui),
            Some(2) => create_pose(ctx, ui),
            Some(3) => update_pose(ctx, ui),
            Some(4) => delete_pose(ctx, ui),
            Some(_) => return Ok(()),
            None => ui.say(INVALID_CHOICE),
        };
        recover(ui, result)?;
    }
}

fn list_poses(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    match tables::pose_table(&ctx.poses().get_all()?) {
        Some(lines) => lines.iter().try_for_each(|l| ui.say(l)),
        None => ui.say("No yoga poses found."),
    }
}

fn create_pose(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    let name = ui.ask("Enter the name of the pose")?;
    let chakra = ui.ask(&format!("Enter the chakra of the pose ({})", Chakra::choices()))?;
    let difficulty = ui.ask("Enter the difficulty of the pose (Easy, Intermediate, Advanced)")?;
    let new = NewPose::parse(&name, &chakra, &difficulty)?;
    let pose = ctx.poses().create(&new)?;
    info!("menu:poses:create id={}", pose.id());
    ui.say("Yoga pose added successfully!")
}

fn update_pose(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    let id = ask_id(ui, "Enter the ID of the pose you want to update")?;
    let name = ui.ask("Enter the updated name of the pose")?;
    let chakra = ui.ask("Enter the updated chakra of the pose")?;
    let difficulty = ui.ask("Enter the updated difficulty of the pose")?;
    let update = PoseUpdate::from_input(&name, &chakra, &difficulty)?;
    if update.is_empty() {
        return ui.say("No updates provided. Pose remains unchanged.");
    }
    let Some(id) = id else {
        return ui.say("Pose not found.");
    };
    match ctx.poses().update(id, &update) {
        Ok(_) => ui.say("Yoga pose updated successfully!"),
        Err(PersistenceError::NotFound) => ui.say("Pose not found."),
        Err(err) => Err(err.into()),
    }
}

fn delete_pose(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    let deleted = match ask_id(ui, "Enter the ID of the pose you want to delete")? {
        Some(id) => ctx.poses().delete(id)?,
        None => false,
    };
    if deleted {
        ui.say("Yoga pose deleted successfully!")
    } else {
        ui.say("Pose not found.")
    }
}
