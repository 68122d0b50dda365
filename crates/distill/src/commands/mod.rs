//! Command handlers

pub mod generate;
