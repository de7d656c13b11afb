// ipscmon - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library plus pure data crates (csv, serde, regex).
// Must NOT depend on: ui, platform, app, or any direct filesystem access.

pub mod classify;
pub mod export;
pub mod filter;
pub mod health;
pub mod loader;
pub mod matrix;
pub mod model;
