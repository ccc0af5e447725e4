//! Contexto de la aplicación: proveedor de conexiones, tiempos de sesión y
//! estado de interrupción compartido por menús y subcomandos.
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use yoga_core::{generate_flow_with, InstantPacer, Pacer, PhaseSink, SessionReport, SessionRunner, SessionTiming,
                ThreadPacer};
use yoga_domain::Chakra;
use yoga_persistence::sqlite::build_pool_from_config;
use yoga_persistence::{PoolProvider, SqliteFlowPoseRepository, SqliteFlowRepository, SqlitePoseRepository};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::signals::InterruptState;

/// Cómo avanza el reloj de la sesión.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Una unidad = `tick_millis` de reloj real.
    RealTime,
    /// Sin esperas (`--dry-run`, tests).
    Instant,
}

pub struct AppContext {
    provider: PoolProvider,
    timing: SessionTiming,
    pacing: Pacing,
    interrupts: InterruptState,
    seed: Option<u64>,
}

impl AppContext {
    pub fn new(provider: PoolProvider, timing: SessionTiming) -> Self {
        Self { provider,
               timing,
               pacing: Pacing::RealTime,
               interrupts: InterruptState::new(),
               seed: None }
    }

    /// Abre (y migra) la base indicada en la configuración.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, AppError> {
        let pool = build_pool_from_config(&cfg.database)?;
        info!("app:open database={}", cfg.database.url);
        Ok(Self::new(PoolProvider::new(pool), cfg.timing))
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_interrupts(mut self, interrupts: InterruptState) -> Self {
        self.interrupts = interrupts;
        self
    }

    /// Semilla fija para el orden de las poses (reproducible).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn provider(&self) -> &PoolProvider { &self.provider }
    pub fn timing(&self) -> SessionTiming { self.timing }
    pub fn pacing(&self) -> Pacing { self.pacing }
    pub fn interrupts(&self) -> &InterruptState { &self.interrupts }

    pub fn poses(&self) -> SqlitePoseRepository<&PoolProvider> { SqlitePoseRepository::new(&self.provider) }
    pub fn flows(&self) -> SqliteFlowRepository<&PoolProvider> { SqliteFlowRepository::new(&self.provider) }
    pub fn flow_poses(&self) -> SqliteFlowPoseRepository<&PoolProvider> { SqliteFlowPoseRepository::new(&self.provider) }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn pacer(&self) -> Box<dyn Pacer> {
        match self.pacing {
            Pacing::RealTime => Box::new(ThreadPacer::new(self.timing.tick())),
            Pacing::Instant => Box::new(InstantPacer::default()),
        }
    }

    /// Genera una sesión para `chakra`/`minutes` y la recorre hasta el final
    /// o hasta Ctrl-C. Falla antes de cualquier fase si no hay poses suficientes.
    pub fn practice(&self, chakra: Chakra, minutes: u32, sink: &mut dyn PhaseSink) -> Result<SessionReport, AppError> {
        let poses = self.poses();
        let session = generate_flow_with(&poses, chakra.as_str(), minutes, self.timing, self.rng())?;
        let _guard = self.interrupts.enter_session();
        let mut runner = SessionRunner::new(self.pacer()).with_cancel(self.interrupts.cancel_flag().clone());
        let report = runner.run(session, sink);
        info!("app:practice done id={} outcome={:?} poses={}",
              report.session_id,
              report.outcome,
              report.poses.len());
        Ok(report)
    }
}
