//! Core module: the event log and everything that reports to it.

pub mod clock;
pub mod config;
pub mod control;
pub mod error;
pub mod log;
pub mod progress;
pub mod timer;
pub mod tracker;
