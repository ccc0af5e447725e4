// pose.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Chakra, Difficulty, DomainError};

/// Pose persistida. Inmutable durante una sesión; el repositorio es su dueño.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    id: i32,
    name: String,
    chakra: Chakra,
    difficulty: Difficulty,
}

impl Pose {
    pub fn new(id: i32, name: impl Into<String>, chakra: Chakra, difficulty: Difficulty) -> Self {
        Pose { id,
               name: name.into(),
               chakra,
               difficulty }
    }
    pub fn id(&self) -> i32 { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn chakra(&self) -> Chakra { self.chakra }
    pub fn difficulty(&self) -> Difficulty { self.difficulty }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.chakra, self.difficulty)
    }
}

/// Datos validados para insertar una pose nueva.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPose {
    name: String,
    chakra: Chakra,
    difficulty: Difficulty,
}

impl NewPose {
    /// # Errores
    /// `DomainError::Validation` si el nombre queda vacío tras recortar espacios.
    pub fn new(name: &str, chakra: Chakra, difficulty: Difficulty) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("pose name must not be empty".to_string()));
        }
        Ok(NewPose { name: name.to_string(),
                     chakra,
                     difficulty })
    }

    /// Construye desde texto libre (entrada de consola).
    pub fn parse(name: &str, chakra: &str, difficulty: &str) -> Result<Self, DomainError> {
        Self::new(name, chakra.parse()?, difficulty.parse()?)
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn chakra(&self) -> Chakra { self.chakra }
    pub fn difficulty(&self) -> Difficulty { self.difficulty }
}

/// Actualización parcial: sólo los campos presentes se modifican.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoseUpdate {
    pub name: Option<String>,
    pub chakra: Option<Chakra>,
    pub difficulty: Option<Difficulty>,
}

impl PoseUpdate {
    /// Interpreta entradas de consola: un campo en blanco significa "sin cambio".
    pub fn from_input(name: &str, chakra: &str, difficulty: &str) -> Result<Self, DomainError> {
        let name = Some(name.trim()).filter(|s| !s.is_empty()).map(str::to_string);
        let chakra = match chakra.trim() {
            "" => None,
            c => Some(c.parse()?),
        };
        let difficulty = match difficulty.trim() {
            "" => None,
            d => Some(d.parse()?),
        };
        Ok(PoseUpdate { name, chakra, difficulty })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.chakra.is_none() && self.difficulty.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pose_trims_and_rejects_blank_names() {
        let p = NewPose::new("  Tree Pose ", Chakra::SolarPlexus, Difficulty::Intermediate).unwrap();
        assert_eq!(p.name(), "Tree Pose");
        assert!(matches!(NewPose::new("   ", Chakra::Root, Difficulty::Easy),
                         Err(DomainError::Validation(_))));
    }

    #[test]
    fn blank_update_fields_mean_unchanged() {
        let upd = PoseUpdate::from_input("", "heart", " ").unwrap();
        assert_eq!(upd.name, None);
        assert_eq!(upd.chakra, Some(Chakra::Heart));
        assert_eq!(upd.difficulty, None);
        assert!(!upd.is_empty());
        assert!(PoseUpdate::from_input("", "", "").unwrap().is_empty());
    }
}
