// ipscmon - app/mod.rs
//
// Application layer: orchestration, state management, persistence.
// Dependencies: core layer, platform (paths/config).
// Must NOT depend on: ui.

pub mod repository;
pub mod session;
pub mod state;
