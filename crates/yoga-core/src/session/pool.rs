use rand::Rng;
use yoga_domain::Pose;

/// Pool de poses candidatas de una sesión. Cada extracción es uniforme sobre
/// las restantes y remueve la elegida (swap-remove), así que ninguna pose se
/// repite dentro de la sesión.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    remaining: Vec<Pose>,
}

impl CandidatePool {
    pub fn new(poses: Vec<Pose>) -> Self { Self { remaining: poses } }

    pub fn len(&self) -> usize { self.remaining.len() }

    pub fn is_empty(&self) -> bool { self.remaining.is_empty() }

    /// Extrae una pose al azar; `None` si el pool está agotado.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Pose> {
        if self.remaining.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(idx))
    }
}
