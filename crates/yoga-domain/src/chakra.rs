//! Chakras: las siete categorías fijas con las que se etiquetan poses y flows.
//!
//! La forma canónica (la que se guarda en la base y se muestra) es la
//! etiqueta con espacios ("Solar Plexus", "Third Eye"). El parseo es
//! tolerante: ignora mayúsculas y acepta espacio, guion o guion bajo entre
//! palabras.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Chakra {
    Root,
    Sacral,
    #[serde(rename = "Solar Plexus")]
    SolarPlexus,
    Heart,
    Throat,
    #[serde(rename = "Third Eye")]
    ThirdEye,
    Crown,
}

impl Chakra {
    /// Orden tradicional, de la base a la coronilla.
    pub const ALL: [Chakra; 7] = [Chakra::Root,
                                  Chakra::Sacral,
                                  Chakra::SolarPlexus,
                                  Chakra::Heart,
                                  Chakra::Throat,
                                  Chakra::ThirdEye,
                                  Chakra::Crown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Chakra::Root => "Root",
            Chakra::Sacral => "Sacral",
            Chakra::SolarPlexus => "Solar Plexus",
            Chakra::Heart => "Heart",
            Chakra::Throat => "Throat",
            Chakra::ThirdEye => "Third Eye",
            Chakra::Crown => "Crown",
        }
    }

    /// Lista legible para prompts: "Root, Sacral, ..., or Crown".
    pub fn choices() -> String {
        let names: Vec<&str> = Self::ALL[..6].iter().map(Chakra::as_str).collect();
        format!("{}, or {}", names.join(", "), Chakra::Crown)
    }
}

impl fmt::Display for Chakra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chakra {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.trim()
                           .chars()
                           .filter(|c| !matches!(c, ' ' | '-' | '_'))
                           .collect::<String>()
                           .to_ascii_lowercase();
        match key.as_str() {
            "root" => Ok(Chakra::Root),
            "sacral" => Ok(Chakra::Sacral),
            "solarplexus" => Ok(Chakra::SolarPlexus),
            "heart" => Ok(Chakra::Heart),
            "throat" => Ok(Chakra::Throat),
            "thirdeye" => Ok(Chakra::ThirdEye),
            "crown" => Ok(Chakra::Crown),
            _ => Err(DomainError::InvalidChakra(s.trim().to_string())),
        }
    }
}
