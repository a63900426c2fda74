//! Anchored layout for screen-space UI elements
//!
//! Elements are placed the way most game UI toolkits do it: a pair of
//! normalized anchor points on the parent, a pivot inside the element, and
//! an offset from the anchor to the pivot. All of these are y-up, with
//! (0, 0) at the bottom-left of the parent. Bevy UI is y-down and
//! inset-based, so [`AnchoredRect::apply_to_node`] does the conversion.

use bevy::prelude::*;

/// Which edge of the screen the joystick hugs
///
/// The toggle control is a plain boolean: `true` means left, `false` right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum JoystickSide {
    #[default]
    Left,
    Right,
}

impl JoystickSide {
    pub fn is_left(self) -> bool {
        matches!(self, JoystickSide::Left)
    }

    /// The other side of the screen
    pub fn mirrored(self) -> JoystickSide {
        match self {
            JoystickSide::Left => JoystickSide::Right,
            JoystickSide::Right => JoystickSide::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JoystickSide::Left => "Left",
            JoystickSide::Right => "Right",
        }
    }
}

impl From<bool> for JoystickSide {
    fn from(toggle: bool) -> Self {
        if toggle {
            JoystickSide::Left
        } else {
            JoystickSide::Right
        }
    }
}

/// Normalized anchor and pivot points for one side of the screen
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct AnchorSpec {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
}

/// Vertically centered on the left edge
pub const LEFT_ANCHOR: AnchorSpec = AnchorSpec {
    anchor_min: Vec2::new(0.0, 0.5),
    anchor_max: Vec2::new(0.0, 0.5),
    pivot: Vec2::new(0.5, 0.5),
};

/// Vertically centered on the right edge
pub const RIGHT_ANCHOR: AnchorSpec = AnchorSpec {
    anchor_min: Vec2::new(1.0, 0.5),
    anchor_max: Vec2::new(1.0, 0.5),
    pivot: Vec2::new(0.5, 0.5),
};

impl AnchorSpec {
    pub fn for_side(side: JoystickSide) -> AnchorSpec {
        match side {
            JoystickSide::Left => LEFT_ANCHOR,
            JoystickSide::Right => RIGHT_ANCHOR,
        }
    }
}

/// Anchored placement of a UI node
///
/// Gameplay code only touches this component. [`sync_anchored_layout`]
/// writes the resulting Bevy [`Node`] whenever it changes.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnchoredRect {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
    /// Offset from the anchor point to the pivot, in logical pixels, y-up
    pub anchored_position: Vec2,
    /// Width and height in logical pixels
    pub size: Vec2,
}

impl AnchoredRect {
    pub fn new(spec: AnchorSpec, anchored_position: Vec2, size: Vec2) -> Self {
        Self {
            anchor_min: spec.anchor_min,
            anchor_max: spec.anchor_max,
            pivot: spec.pivot,
            anchored_position,
            size,
        }
    }

    /// The anchor and pivot points currently in use
    pub fn anchor_spec(&self) -> AnchorSpec {
        AnchorSpec {
            anchor_min: self.anchor_min,
            anchor_max: self.anchor_max,
            pivot: self.pivot,
        }
    }

    /// Overwrites anchors, pivot and the horizontal offset.
    ///
    /// The vertical offset is left as it was.
    pub fn apply_anchor(&mut self, spec: AnchorSpec, position_x: f32) {
        self.anchor_min = spec.anchor_min;
        self.anchor_max = spec.anchor_max;
        self.pivot = spec.pivot;
        self.anchored_position.x = position_x;
    }

    /// Writes this placement into an absolutely positioned Bevy node.
    ///
    /// Only point anchors are handled: the node keeps its fixed `size` and
    /// `anchor_min.x` / `anchor_max.y` pick the reference point.
    pub fn apply_to_node(&self, node: &mut Node) {
        let offset = self.pivot_offset();

        node.position_type = PositionType::Absolute;
        node.left = Val::Percent(self.anchor_min.x * 100.0);
        node.top = Val::Percent((1.0 - self.anchor_max.y) * 100.0);
        node.right = Val::Auto;
        node.bottom = Val::Auto;
        node.width = Val::Px(self.size.x);
        node.height = Val::Px(self.size.y);
        node.margin = UiRect {
            left: Val::Px(offset.x),
            top: Val::Px(offset.y),
            right: Val::ZERO,
            bottom: Val::ZERO,
        };
    }

    /// Distance from the anchor point to the node's top-left corner, y-down
    fn pivot_offset(&self) -> Vec2 {
        Vec2::new(
            self.anchored_position.x - self.pivot.x * self.size.x,
            -self.anchored_position.y - (1.0 - self.pivot.y) * self.size.y,
        )
    }
}

/// Keeps Bevy nodes in step with their anchored placement
pub fn sync_anchored_layout(
    mut query: Query<(&AnchoredRect, &mut Node), Changed<AnchoredRect>>,
) {
    for (rect, mut node) in query.iter_mut() {
        rect.apply_to_node(&mut node);
    }
}
