//! Presentación en consola de una sesión en curso.
//!
//! `ConsoleRenderer` implementa `PhaseSink`: anuncia cada fase con su color,
//! redibuja la cuenta regresiva sobre la misma línea y cierra con el mensaje
//! de práctica completada.
use console::{style, Term};
use log::warn;
use std::io;
use yoga_core::constants::{CLOSING_WORD, COMPLETION_MESSAGE};
use yoga_core::{PhaseEvent, PhaseKind, PhaseSink, SessionReport};

pub struct ConsoleRenderer {
    term: Term,
}

impl Default for ConsoleRenderer {
    fn default() -> Self { Self::new(Term::stdout()) }
}

impl ConsoleRenderer {
    pub fn new(term: Term) -> Self { Self { term } }

    // Un fallo de escritura no debe cortar la sesión; se registra y se sigue.
    fn emit<F>(&self, what: &str, f: F)
        where F: FnOnce(&Term) -> io::Result<()>
    {
        if let Err(err) = f(&self.term) {
            warn!("render:{what} error={err}");
        }
    }
}

/// Vuelve al inicio de la línea y la borra (CR + EL2).
pub const CLEAR_LINE: &str = "\r\x1b[2K";

/// Cuadro de un tick: en una TTY reescribe la línea actual; fuera de ella
/// cada tick va en su propia línea.
pub fn tick_frame(phase: &PhaseEvent, remaining: u64, is_term: bool) -> String {
    let line = phase.remaining_line(remaining);
    if is_term {
        format!("{CLEAR_LINE}{line}")
    } else {
        format!("{}\n", line.trim_end())
    }
}

/// Encabezado de la fase con el color de su tipo.
pub fn phase_heading(phase: &PhaseEvent) -> String {
    let label = match phase.kind {
        PhaseKind::Breath => style(&phase.label).green(),
        PhaseKind::Pose => style(&phase.label).cyan().bold(),
        PhaseKind::Rest => style(&phase.label).magenta().bold(),
    };
    label.to_string()
}

/// Texto de cierre según cómo terminó la sesión.
pub fn closing_lines(report: &SessionReport) -> Vec<String> {
    if report.is_completed() {
        vec![style(COMPLETION_MESSAGE).bold().to_string(), style(CLOSING_WORD).cyan().bold().to_string()]
    } else {
        vec![format!("Practice interrupted after {} phase(s).", report.phases_completed)]
    }
}

impl PhaseSink for ConsoleRenderer {
    fn phase_started(&mut self, phase: &PhaseEvent) {
        let heading = phase_heading(phase);
        self.emit("phase_started", |t| {
                t.write_line("")?;
                t.write_line(&heading)
            });
    }

    fn tick(&mut self, phase: &PhaseEvent, remaining: u64) {
        let frame = tick_frame(phase, remaining, self.term.is_term());
        self.emit("tick", |t| {
                t.write_str(&frame)?;
                t.flush()
            });
    }

    fn phase_finished(&mut self, _phase: &PhaseEvent) {
        if self.term.is_term() {
            self.emit("phase_finished", |t| t.write_line(""));
        }
    }

    fn transition(&mut self, seconds: u64) {
        let line = style(format!("Transition... ({seconds} seconds)")).dim().to_string();
        self.emit("transition", |t| t.write_line(&line));
    }

    fn session_finished(&mut self, report: &SessionReport) {
        let lines = closing_lines(report);
        self.emit("session_finished", |t| {
                t.write_line("")?;
                for line in &lines {
                    t.write_line(line)?;
                }
                t.write_line("")
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;
    use yoga_core::SessionOutcome;
    use yoga_domain::Chakra;

    fn report(outcome: SessionOutcome) -> SessionReport {
        SessionReport { session_id: Uuid::new_v4(),
                        chakra: Chakra::Heart,
                        target_seconds: 60,
                        elapsed_seconds: 20,
                        poses: vec!["Camel Pose".into()],
                        phases_completed: 4,
                        outcome,
                        started_at: Utc::now(),
                        finished_at: Utc::now() }
    }

    #[test]
    fn completed_session_closes_with_namaste() {
        console::set_colors_enabled(false);
        let lines = closing_lines(&report(SessionOutcome::Completed));
        assert_eq!(lines, vec!["You have completed your practice!!".to_string(), "Namaste".to_string()]);
    }

    #[test]
    fn cancelled_session_reports_progress() {
        let lines = closing_lines(&report(SessionOutcome::Cancelled));
        assert_eq!(lines, vec!["Practice interrupted after 4 phase(s).".to_string()]);
    }

    fn pose_phase() -> PhaseEvent {
        PhaseEvent { index: 2,
                     kind: PhaseKind::Pose,
                     label: "Starting pose 1: Camel Pose".into(),
                     countdown_seconds: 60,
                     pose: Some(yoga_domain::Pose::new(4,
                                                       "Camel Pose",
                                                       Chakra::Heart,
                                                       yoga_domain::Difficulty::Easy)) }
    }

    #[test]
    fn tty_ticks_overwrite_the_same_line() {
        let phase = pose_phase();
        let frames: Vec<String> = [60, 59, 0].iter().map(|&n| tick_frame(&phase, n, true)).collect();
        for frame in &frames {
            assert!(frame.starts_with(CLEAR_LINE), "{frame:?}");
            assert!(!frame.contains('\n'), "{frame:?}");
        }
        assert_eq!(frames[1], "\r\x1b[2KCamel Pose time remaining: 59 seconds ");
    }

    #[test]
    fn piped_ticks_are_plain_lines() {
        let frame = tick_frame(&pose_phase(), 0, false);
        assert_eq!(frame, "Camel Pose time remaining: 0 seconds\n");
    }

    #[test]
    fn heading_keeps_label_text() {
        console::set_colors_enabled(false);
        let phase = PhaseEvent { index: 2,
                                 kind: PhaseKind::Pose,
                                 label: "Starting pose 1: Camel Pose".into(),
                                 countdown_seconds: 60,
                                 pose: None };
        assert_eq!(phase_heading(&phase), "Starting pose 1: Camel Pose");
    }
}
