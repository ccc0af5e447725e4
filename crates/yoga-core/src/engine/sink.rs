use crate::phase::PhaseEvent;
use crate::session::SessionReport;

/// Consumidor de los eventos de una sesión en curso (capa de presentación).
pub trait PhaseSink {
    /// Inicio de una fase, antes del primer tick.
    fn phase_started(&mut self, phase: &PhaseEvent);
    /// Un tick de la cuenta regresiva; se redibuja en el mismo lugar.
    fn tick(&mut self, phase: &PhaseEvent, remaining: u64);
    /// La fase llegó a 0.
    fn phase_finished(&mut self, _phase: &PhaseEvent) {}
    /// Pausa silenciosa entre dos poses.
    fn transition(&mut self, _seconds: u64) {}
    /// Cierre: acuse de práctica completada o cancelada.
    fn session_finished(&mut self, report: &SessionReport);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkRecord {
    Started(PhaseEvent),
    Tick { index: usize, remaining: u64 },
    Finished(usize),
    Transition(u64),
    SessionFinished(SessionReport),
}

/// Sink en memoria que registra todo lo recibido.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub records: Vec<SinkRecord>,
}

impl RecordingSink {
    pub fn started_phases(&self) -> Vec<&PhaseEvent> {
        self.records.iter()
            .filter_map(|r| match r {
                SinkRecord::Started(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Ticks recibidos por la fase `index`, en orden.
    pub fn ticks_for(&self, index: usize) -> Vec<u64> {
        self.records.iter()
            .filter_map(|r| match r {
                SinkRecord::Tick { index: i, remaining } if *i == index => Some(*remaining),
                _ => None,
            })
            .collect()
    }

    pub fn report(&self) -> Option<&SessionReport> {
        self.records.iter().find_map(|r| match r {
                               SinkRecord::SessionFinished(rep) => Some(rep),
                               _ => None,
                           })
    }
}

impl PhaseSink for RecordingSink {
    fn phase_started(&mut self, phase: &PhaseEvent) { self.records.push(SinkRecord::Started(phase.clone())); }

    fn tick(&mut self, phase: &PhaseEvent, remaining: u64) {
        self.records.push(SinkRecord::Tick { index: phase.index,
                                             remaining });
    }

    fn phase_finished(&mut self, phase: &PhaseEvent) { self.records.push(SinkRecord::Finished(phase.index)); }

    fn transition(&mut self, seconds: u64) { self.records.push(SinkRecord::Transition(seconds)); }

    fn session_finished(&mut self, report: &SessionReport) {
        self.records.push(SinkRecord::SessionFinished(report.clone()));
    }
}
