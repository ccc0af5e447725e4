// flow.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Chakra, Difficulty, DomainError};

/// Duraciones (minutos) que se ofrecen al crear una plantilla de flow.
pub const ALLOWED_DURATIONS: [u32; 6] = [10, 20, 30, 40, 50, 60];

/// Plantilla de flow: chakra + duración objetivo + dificultad.
/// Es una entrada de sólo lectura para el generador de sesiones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flow {
    id: i32,
    chakra: Chakra,
    duration_minutes: u32,
    difficulty: Difficulty,
}

impl Flow {
    pub fn new(id: i32, chakra: Chakra, duration_minutes: u32, difficulty: Difficulty) -> Self {
        Flow { id,
               chakra,
               duration_minutes,
               difficulty }
    }
    pub fn id(&self) -> i32 { self.id }
    pub fn chakra(&self) -> Chakra { self.chakra }
    pub fn duration_minutes(&self) -> u32 { self.duration_minutes }
    pub fn difficulty(&self) -> Difficulty { self.difficulty }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "#{} {} flow, {} minutes, {}",
               self.id, self.chakra, self.duration_minutes, self.difficulty)
    }
}

/// Datos validados para insertar una plantilla nueva.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlow {
    chakra: Chakra,
    duration_minutes: u32,
    difficulty: Difficulty,
}

impl NewFlow {
    /// # Errores
    /// `DomainError::InvalidDuration` si la duración no está en `ALLOWED_DURATIONS`.
    pub fn new(chakra: Chakra, duration_minutes: u32, difficulty: Difficulty) -> Result<Self, DomainError> {
        if !ALLOWED_DURATIONS.contains(&duration_minutes) {
            return Err(DomainError::InvalidDuration(duration_minutes.to_string()));
        }
        Ok(NewFlow { chakra,
                     duration_minutes,
                     difficulty })
    }

    pub fn parse(chakra: &str, duration: &str, difficulty: &str) -> Result<Self, DomainError> {
        let minutes = parse_duration(duration)?;
        Self::new(chakra.parse()?, minutes, difficulty.parse()?)
    }

    pub fn chakra(&self) -> Chakra { self.chakra }
    pub fn duration_minutes(&self) -> u32 { self.duration_minutes }
    pub fn difficulty(&self) -> Difficulty { self.difficulty }
}

/// Acepta "30" o "30 minutes"/"30 min".
pub fn parse_duration(input: &str) -> Result<u32, DomainError> {
    let digits = input.trim()
                      .trim_end_matches(|c: char| c.is_alphabetic())
                      .trim();
    digits.parse::<u32>()
          .map_err(|_| DomainError::InvalidDuration(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_flow_only_accepts_offered_durations() {
        assert!(NewFlow::new(Chakra::Crown, 60, Difficulty::Intermediate).is_ok());
        assert_eq!(NewFlow::new(Chakra::Crown, 25, Difficulty::Easy).unwrap_err(),
                   DomainError::InvalidDuration("25".into()));
    }

    #[test]
    fn parse_accepts_unit_suffix() {
        let f = NewFlow::parse("throat", "20 minutes", "easy").unwrap();
        assert_eq!(f.duration_minutes(), 20);
        assert_eq!(f.chakra(), Chakra::Throat);
        assert!(matches!(NewFlow::parse("throat", "twenty", "easy"),
                         Err(DomainError::InvalidDuration(_))));
    }
}
