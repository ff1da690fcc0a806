// ZeroDecay - core/mod.rs
//
// Core logic layer: card model, sizing, flow arrangement, filtering.
// Dependencies: util (constants), regex, tracing.
// Must NOT depend on: ui, platform, app, or egui.

pub mod actions;
pub mod filter;
pub mod flow;
pub mod model;
pub mod sample;
pub mod sizing;
