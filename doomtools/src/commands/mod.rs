//! Command implementations for doomtools

pub mod dehacked;
