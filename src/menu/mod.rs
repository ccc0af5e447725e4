//! Menú interactivo: práctica, gestión de flows y gestión de poses.
//!
//! Cada submenú es un bucle que lee una opción numérica, ejecuta la acción y
//! vuelve a mostrarse hasta que se elige "Back". Los errores de validación o
//! de restricciones se muestran y el bucle sigue; el resto se propaga.
mod flows;
mod poses;
mod practice;
pub mod tables;
pub mod ui;

pub use tables::{flow_table, pose_table};
pub use ui::{ScriptedUi, TerminalUi, Ui};

use console::style;
use yoga_persistence::PersistenceError;

use crate::app::AppContext;
use crate::errors::AppError;

pub const CHOICE_PROMPT: &str = "Enter your choice";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const SEPARATOR_WIDTH: usize = 40;

/// Interpreta la opción `1..=options`; cualquier otra cosa es `None`.
pub fn parse_choice(input: &str, options: u8) -> Option<u8> {
    input.trim().parse::<u8>().ok().filter(|n| (1..=options).contains(n))
}

/// Ejecuta el menú principal hasta "Exit" o hasta que se cierre la entrada.
pub fn run_main_menu(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    match main_menu(ctx, ui) {
        Err(AppError::InputClosed) => {
            log::debug!("menu:input closed");
            Ok(())
        }
        other => other,
    }
}

fn main_menu(ctx: &AppContext, ui: &mut dyn Ui) -> Result<(), AppError> {
    loop {
        ui.say(&banner())?;
        show_options(ui, &["Begin Practice", "Manage Flows", "Manage Poses", "Exit"])?;
        match parse_choice(&ui.ask(CHOICE_PROMPT)?, 4) {
            Some(1) => practice::search_flows(ctx, ui)?,
            Some(2) => flows::manage_flows(ctx, ui)?,
            Some(3) => poses::manage_poses(ctx, ui)?,
            Some(_) => {
                ui.say(&style("\nExiting... Goodbye!\n").bold().to_string())?;
                return Ok(());
            }
            None => ui.say(INVALID_CHOICE)?,
        }
    }
}

fn banner() -> String {
    let stars = "* ".repeat(17);
    format!("\n{stars}\n\n            Welcome to {}\n\n{stars}",
            style("YOGA FLOWS").cyan().bold())
}

fn section(ui: &mut dyn Ui, title: &str) -> Result<(), AppError> {
    ui.say(&"-".repeat(SEPARATOR_WIDTH))?;
    ui.say(&style(format!("\n{title}:\n")).bold().to_string())
}

fn show_options(ui: &mut dyn Ui, options: &[&str]) -> Result<(), AppError> {
    for (i, option) in options.iter().enumerate() {
        ui.say(&format!("{}. {option}", i + 1))?;
    }
    ui.say("")
}

/// Pregunta por un id numérico; texto no numérico es `None`.
fn ask_id(ui: &mut dyn Ui, prompt: &str) -> Result<Option<i32>, AppError> {
    Ok(ui.ask(prompt)?.parse().ok())
}

fn is_recoverable(err: &AppError) -> bool {
    matches!(err,
             AppError::Domain(_)
             | AppError::FlowNotFound(_)
             | AppError::Persistence(PersistenceError::UniqueViolation(_)
                                     | PersistenceError::CheckViolation(_)
                                     | PersistenceError::ForeignKeyViolation(_)
                                     | PersistenceError::NotFound))
}

/// Muestra los errores de entrada del usuario y deja pasar el resto.
fn recover(ui: &mut dyn Ui, result: Result<(), AppError>) -> Result<(), AppError> {
    match result {
        Err(err) if is_recoverable(&err) => {
            log::debug!("menu:recovered error={err}");
            ui.say(&err.to_string())
        }
        other => other,
    }
}
