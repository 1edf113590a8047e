//! Command implementations for the wafervis CLI

pub mod config;
pub mod neighbors;
pub mod replay;
