//! Command implementations for seira-cmd

pub mod demo;
pub mod render;
