//! Froggy: a platformer frog that charges, aims and launches itself between
//! platforms and clings to walls.

pub mod config;
pub mod core;
pub mod input;
pub mod player;
#[cfg(feature = "visual_debug")]
pub mod visual_debug;
pub mod world;
