//! Utility functions shared across the engine

pub mod logging;
