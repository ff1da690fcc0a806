// ZeroDecay - app/mod.rs
//
// Application layer: state owned by the GUI and the operations the panels
// invoke on it.
// Dependencies: core layer, platform config.
// Must NOT depend on: ui.

pub mod state;
