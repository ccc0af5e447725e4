//! Entrada/salida de los menús.
//!
//! `Ui` separa los menús de la terminal real: `TerminalUi` usa `dialoguer`
//! cuando hay una TTY y lee líneas de stdin cuando no; `ScriptedUi` responde
//! con una lista fija y guarda lo impreso.
use console::Term;
use dialoguer::Input;
use std::collections::VecDeque;
use std::io::{self, BufRead};
use yoga_core::{PhaseSink, RecordingSink};

use crate::errors::AppError;
use crate::render::ConsoleRenderer;

pub trait Ui {
    /// Pregunta y devuelve la respuesta sin espacios sobrantes.
    fn ask(&mut self, prompt: &str) -> Result<String, AppError>;
    fn say(&mut self, line: &str) -> Result<(), AppError>;
    /// Destino de las fases cuando se practica desde el menú.
    fn sink(&mut self) -> &mut dyn PhaseSink;
}

pub struct TerminalUi {
    term: Term,
    renderer: ConsoleRenderer,
}

impl Default for TerminalUi {
    fn default() -> Self { Self::new(Term::stdout()) }
}

impl TerminalUi {
    pub fn new(term: Term) -> Self {
        Self { renderer: ConsoleRenderer::new(term.clone()),
               term }
    }

    fn read_plain_line(&self, prompt: &str) -> Result<String, AppError> {
        self.term.write_str(&format!("{prompt}: "))?;
        self.term.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl Ui for TerminalUi {
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        if !self.term.is_term() {
            return self.read_plain_line(prompt);
        }
        let answer = Input::<String>::new().with_prompt(prompt)
                                           .allow_empty(true)
                                           .interact_text_on(&self.term)
                                           .map_err(|err| match err {
                                               dialoguer::Error::IO(io) if io.kind() == io::ErrorKind::UnexpectedEof => {
                                                   AppError::InputClosed
                                               }
                                               other => AppError::Prompt(other),
                                           })?;
        Ok(answer.trim().to_string())
    }

    fn say(&mut self, line: &str) -> Result<(), AppError> {
        self.term.write_line(line)?;
        Ok(())
    }

    fn sink(&mut self) -> &mut dyn PhaseSink { &mut self.renderer }
}

/// Ui con respuestas predefinidas. Al agotarse devuelve `InputClosed`.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    answers: VecDeque<String>,
    /// Todo lo impreso, una entrada por línea (las preguntas con prefijo `? `).
    pub output: Vec<String>,
    pub sink: RecordingSink,
}

impl ScriptedUi {
    pub fn new<I, S>(answers: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { answers: answers.into_iter().map(Into::into).collect(),
               ..Default::default() }
    }

    pub fn printed(&self, needle: &str) -> bool { self.output.iter().any(|l| l.contains(needle)) }

    pub fn remaining_answers(&self) -> usize { self.answers.len() }
}

impl Ui for ScriptedUi {
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        self.output.push(format!("? {prompt}"));
        self.answers.pop_front().map(|a| a.trim().to_string()).ok_or(AppError::InputClosed)
    }

    fn say(&mut self, line: &str) -> Result<(), AppError> {
        self.output.extend(line.lines().map(str::to_string));
        Ok(())
    }

    fn sink(&mut self) -> &mut dyn PhaseSink { &mut self.sink }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_ui_replays_answers_then_closes() {
        let mut ui = ScriptedUi::new([" 2 ", "x"]);
        assert_eq!(ui.ask("Enter your choice").unwrap(), "2");
        assert_eq!(ui.ask("Enter your choice").unwrap(), "x");
        assert!(matches!(ui.ask("Enter your choice"), Err(AppError::InputClosed)));
        ui.say("a\nb").unwrap();
        assert!(ui.printed("? Enter your choice"));
        assert_eq!(ui.output.len(), 5);
    }
}
