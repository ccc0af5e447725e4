//! Manejo de Ctrl-C: durante una sesión cancela la práctica en curso; fuera
//! de ella termina el proceso con código 130.
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use yoga_core::CancelFlag;

use crate::errors::{AppError, EXIT_INTERRUPTED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptAction {
    /// Se marcó la cancelación; el runner corta en el próximo tick.
    CancelSession,
    /// No hay sesión activa: salir del proceso.
    Exit,
}

/// Estado compartido entre el handler de señales y el hilo principal.
#[derive(Debug, Clone, Default)]
pub struct InterruptState {
    cancel: CancelFlag,
    in_session: Arc<AtomicBool>,
}

impl InterruptState {
    pub fn new() -> Self { Self::default() }

    pub fn cancel_flag(&self) -> &CancelFlag { &self.cancel }

    pub fn in_session(&self) -> bool { self.in_session.load(Ordering::SeqCst) }

    /// Marca el inicio de una sesión. La marca se retira al soltar el guard.
    pub fn enter_session(&self) -> SessionGuard {
        self.cancel.reset();
        self.in_session.store(true, Ordering::SeqCst);
        SessionGuard { flag: Arc::clone(&self.in_session) }
    }

    pub fn on_interrupt(&self) -> InterruptAction {
        if self.in_session() {
            self.cancel.cancel();
            InterruptAction::CancelSession
        } else {
            InterruptAction::Exit
        }
    }
}

pub struct SessionGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) { self.flag.store(false, Ordering::SeqCst); }
}

/// Registra el handler de Ctrl-C del proceso.
pub fn install_handler(state: InterruptState) -> Result<(), AppError> {
    ctrlc::set_handler(move || match state.on_interrupt() {
                           InterruptAction::CancelSession => info!("signal:interrupt session cancelled"),
                           InterruptAction::Exit => {
                               eprintln!();
                               std::process::exit(i32::from(EXIT_INTERRUPTED));
                           }
                       })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_outside_session_exits() {
        let state = InterruptState::new();
        assert_eq!(state.on_interrupt(), InterruptAction::Exit);
        assert!(!state.cancel_flag().is_cancelled());
    }

    #[test]
    fn interrupt_inside_session_cancels_until_guard_drops() {
        let state = InterruptState::new();
        {
            let _guard = state.enter_session();
            assert_eq!(state.on_interrupt(), InterruptAction::CancelSession);
            assert!(state.cancel_flag().is_cancelled());
        }
        assert!(!state.in_session());
        assert_eq!(state.on_interrupt(), InterruptAction::Exit);
    }

    #[test]
    fn entering_a_session_clears_previous_cancel() {
        let state = InterruptState::new();
        state.cancel_flag().cancel();
        let _guard = state.enter_session();
        assert!(!state.cancel_flag().is_cancelled());
    }
}
