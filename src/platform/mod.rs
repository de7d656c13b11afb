// ipscmon - platform/mod.rs
//
// Platform layer: config file loading and directory resolution.
// Dependencies: util only.

pub mod config;
