//! Command-line surface for the weekly hub staffing digest.

pub mod cli;
pub mod commands;
