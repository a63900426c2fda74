//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - Joystick settings
//! - CLI handling and logging

pub mod app;
pub mod cli;
pub mod errors;
pub mod logger;
pub mod settings;

// Re-export commonly used items
pub use app::create_app;
pub use cli::{CliArgs, JoystickConfig};
pub use settings::{install_settings, JoystickSettings, MirroredPosition};
