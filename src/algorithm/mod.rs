//! Algorithm implementations for the disease probability engine
//!
//! This module contains the probability models, risk banding and the
//! assessment pipeline that ties them to raw detector output.

pub mod assessment;
pub mod probability;
pub mod risk;
