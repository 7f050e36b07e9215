//! Unified error types for the dishwasher controller.
//!
//! Collaborator faults are small `Copy` enums so the orchestrator can carry
//! them into a [`RunResult`](crate::app::result::RunResult) without
//! allocation.  Configuration decoding has its own [`ConfigError`].

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::app::result::Status;

// ---------------------------------------------------------------------------
// Water pump faults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PumpError {
    /// No water reached the tub while pouring.
    InletBlocked,
    /// Water did not leave the tub while draining.
    DrainBlocked,
    /// The float switch tripped.
    Overflow,
    /// Driver-specific fault code.
    Driver(u16),
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InletBlocked => write!(f, "inlet blocked"),
            Self::DrainBlocked => write!(f, "drain blocked"),
            Self::Overflow => write!(f, "overflow"),
            Self::Driver(code) => write!(f, "pump driver fault {code:#06x}"),
        }
    }
}

impl From<PumpError> for HardwareFault {
    fn from(e: PumpError) -> Self {
        Self::Pump(e)
    }
}

// ---------------------------------------------------------------------------
// Wash engine faults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// The circulation motor did not reach speed.
    Stalled,
    /// The heating element did not draw current.
    HeaterFailure,
    /// Water temperature exceeded the program limit.
    OverTemperature,
    /// Driver-specific fault code.
    Driver(u16),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stalled => write!(f, "motor stalled"),
            Self::HeaterFailure => write!(f, "heater failure"),
            Self::OverTemperature => write!(f, "over temperature"),
            Self::Driver(code) => write!(f, "engine driver fault {code:#06x}"),
        }
    }
}

impl From<EngineError> for HardwareFault {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

// ---------------------------------------------------------------------------
// Hardware faults
// ---------------------------------------------------------------------------

/// A fault raised by an actuator during a wash cycle.  Aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardwareFault {
    Pump(PumpError),
    Engine(EngineError),
}

impl HardwareFault {
    /// Terminal status reported for this fault.
    pub const fn status(self) -> Status {
        match self {
            Self::Pump(_) => Status::ErrorPump,
            Self::Engine(_) => Status::ErrorEngine,
        }
    }
}

impl fmt::Display for HardwareFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pump(e) => write!(f, "pump: {e}"),
            Self::Engine(e) => write!(f, "engine: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// JSON was malformed, had a missing or unknown field, or a bad enum value.
    Json,
    /// The configuration could not be serialized.
    Encoding,
    /// The compact binary form was truncated or invalid.
    Decoding,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "invalid JSON configuration"),
            Self::Encoding => write!(f, "configuration encoding failed"),
            Self::Decoding => write!(f, "invalid binary configuration"),
        }
    }
}

impl core::error::Error for ConfigError {}
