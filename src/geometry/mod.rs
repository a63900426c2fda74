//! Screen-space geometry
//!
//! Anchors, pivots and the conversion to Bevy UI nodes.

pub mod anchor;

pub use anchor::{
    sync_anchored_layout, AnchorSpec, AnchoredRect, JoystickSide, LEFT_ANCHOR,
    RIGHT_ANCHOR,
};
