//! Dishwasher controller library.
//!
//! Exposes the orchestrator, its port traits and the value types that
//! cross its boundary, plus adapters for GPIO, logging and simulation.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
