//! On-screen joystick whose screen side can be toggled, built on Bevy.

pub mod core;
pub mod geometry;
pub mod ui;
