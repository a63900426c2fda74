//! Joystick settings
//!
//! Holds the left/right anchor constants and the mirrored horizontal
//! offset of the joystick. The offset is captured once from the joystick's
//! initial layout; the right-hand value is always the negated left-hand one.

use crate::geometry::{AnchorSpec, LEFT_ANCHOR, RIGHT_ANCHOR};
use bevy::prelude::*;

/// Horizontal offsets for both sides, `right == -left`
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct MirroredPosition {
    pub left: f32,
    pub right: f32,
}

impl MirroredPosition {
    pub fn from_left(x: f32) -> Self {
        Self { left: x, right: -x }
    }
}

/// Anchor constants and mirrored joystick offsets
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct JoystickSettings {
    left_anchor: AnchorSpec,
    right_anchor: AnchorSpec,
    mirrored: Option<MirroredPosition>,
}

impl Default for JoystickSettings {
    fn default() -> Self {
        Self {
            left_anchor: LEFT_ANCHOR,
            right_anchor: RIGHT_ANCHOR,
            mirrored: None,
        }
    }
}

impl JoystickSettings {
    /// Stores `x` as the left offset and `-x` as the right one.
    ///
    /// Meant to run once, from the joystick's initial layout.
    pub fn set_original_position_x(&mut self, x: f32) {
        if let Some(previous) = self.mirrored {
            warn!(
                "Joystick position captured twice (was {}, now {})",
                previous.left, x
            );
        }
        self.mirrored = Some(MirroredPosition::from_left(x));
        debug!("Captured joystick offset: left {}, right {}", x, -x);
    }

    /// Horizontal offset for the toggle state, `true` being left.
    ///
    /// Reads as 0.0 until the original position has been captured.
    pub fn joystick_position(&self, toggle: bool) -> f32 {
        let Some(mirrored) = self.mirrored else {
            warn!("Joystick position requested before it was captured");
            return 0.0;
        };

        if toggle {
            mirrored.left
        } else {
            mirrored.right
        }
    }

    /// Anchor spec for the toggle state, `true` being left
    pub fn toggle_joystick_position(&self, toggle: bool) -> AnchorSpec {
        if toggle {
            self.left_anchor
        } else {
            self.right_anchor
        }
    }

    pub fn is_captured(&self) -> bool {
        self.mirrored.is_some()
    }

    pub fn mirrored(&self) -> Option<MirroredPosition> {
        self.mirrored
    }
}

/// Inserts the settings resource unless the world already has one.
///
/// Returns `false` when a previous instance exists; the new one is dropped.
pub fn install_settings(world: &mut World, settings: JoystickSettings) -> bool {
    if world.contains_resource::<JoystickSettings>() {
        warn!("JoystickSettings already installed, discarding duplicate");
        return false;
    }

    world.insert_resource(settings);
    true
}
