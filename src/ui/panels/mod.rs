// ZeroDecay - ui/panels/mod.rs

pub mod about;
pub mod card;
pub mod log;
pub mod monitoring;
pub mod settings;
