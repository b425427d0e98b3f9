//! Room type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a room, as presented in the catalog and admin forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Standard room.
    Standard,
    /// Deluxe room.
    Deluxe,
    /// Suite.
    Suite,
    /// Stand-alone villa.
    Villa,
    /// Presidential suite.
    Presidential,
}

impl RoomType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Deluxe => "deluxe",
            Self::Suite => "suite",
            Self::Villa => "villa",
            Self::Presidential => "presidential",
        }
    }

    /// Return the Spanish display name used on the site.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Estándar",
            Self::Deluxe => "Deluxe",
            Self::Suite => "Suite",
            Self::Villa => "Villa",
            Self::Presidential => "Presidencial",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = rincon_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "deluxe" => Ok(Self::Deluxe),
            "suite" => Ok(Self::Suite),
            "villa" => Ok(Self::Villa),
            "presidential" => Ok(Self::Presidential),
            _ => Err(rincon_core::AppError::validation(format!(
                "Invalid room type: '{s}'. Expected one of: standard, deluxe, suite, villa, presidential"
            ))),
        }
    }
}
