//! LAVA token burn, supply and rewards statistics
//!

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod types;
pub mod utils;
