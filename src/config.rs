//! Washing-program configuration.
//!
//! A [`ProgramConfiguration`] is built by the caller before each run and
//! handed to [`DishWasher::start`](crate::app::service::DishWasher::start).
//! Control panels send it either as JSON or in the compact postcard form.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Water quantity poured at the start of every wash cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillLevel {
    Half,
    Full,
}

/// Wash cycle selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WashingProgram {
    Eco,
    Intensive,
    Night,
    /// Cold rinse.  Also used for the rinse pass appended to every other program.
    Rinse,
}

impl WashingProgram {
    /// Every program, in panel order.
    pub const ALL: [Self; 4] = [Self::Eco, Self::Intensive, Self::Night, Self::Rinse];

    /// Nominal engine run time for one cycle of this program.
    pub const fn time_in_minutes(self) -> u32 {
        match self {
            Self::Eco => 90,
            Self::Intensive => 120,
            Self::Night => 180,
            Self::Rinse => 12,
        }
    }

    pub const fn is_rinse(self) -> bool {
        matches!(self, Self::Rinse)
    }
}

/// Immutable per-run configuration.  All fields are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramConfiguration {
    program: WashingProgram,
    tablets_used: bool,
    fill_level: FillLevel,
}

impl ProgramConfiguration {
    pub const fn new(program: WashingProgram, tablets_used: bool, fill_level: FillLevel) -> Self {
        Self {
            program,
            tablets_used,
            fill_level,
        }
    }

    pub const fn program(&self) -> WashingProgram {
        self.program
    }

    /// Whether a detergent tablet was loaded.  Gates the filter check.
    pub const fn tablets_used(&self) -> bool {
        self.tablets_used
    }

    pub const fn fill_level(&self) -> FillLevel {
        self.fill_level
    }

    /// Parse the JSON form, e.g.
    /// `{"program":"ECO","tablets_used":true,"fill_level":"FULL"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| {
            log::warn!("Rejected program configuration: {}", e);
            ConfigError::Json
        })
    }

    /// Encode to the compact postcard form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Encoding)
    }

    /// Decode the compact postcard form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Decoding)
    }
}
