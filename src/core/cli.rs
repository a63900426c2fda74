//! Command line arguments for the application

use crate::core::errors::{validate_finite, validate_positive, StickResult};
use crate::geometry::JoystickSide;
use bevy::prelude::*;
use clap::Parser;

/// command line arguments for the initial joystick layout
#[derive(Parser, Debug, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// horizontal distance from the screen edge to the joystick center
    #[arg(long, default_value_t = 120.0, allow_negative_numbers = true)]
    pub offset: f32,

    /// vertical offset of the joystick center from the screen midline
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub height: f32,

    /// joystick diameter in logical pixels
    #[arg(long, default_value_t = 160.0)]
    pub size: f32,

    /// start with the joystick anchored to the right edge
    #[arg(long, default_value_t = false)]
    pub start_right: bool,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            offset: 120.0,
            height: 0.0,
            size: 160.0,
            start_right: false,
            debug: false,
        }
    }
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> StickResult<()> {
        validate_finite("--offset", self.offset)?;
        validate_finite("--height", self.height)?;
        validate_positive("--size", self.size)?;
        Ok(())
    }

    /// Log filter implied by the flags, if any
    pub fn log_level(&self) -> Option<&'static str> {
        self.debug.then_some("debug")
    }
}

/// Initial joystick layout derived from the command line
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct JoystickConfig {
    /// Left-side anchored position; the right side mirrors it
    pub position: Vec2,
    pub size: Vec2,
    pub start_side: JoystickSide,
}

impl From<&CliArgs> for JoystickConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            position: Vec2::new(args.offset, args.height),
            size: Vec2::splat(args.size),
            start_side: if args.start_right {
                JoystickSide::Right
            } else {
                JoystickSide::Left
            },
        }
    }
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self::from(&CliArgs::default())
    }
}
