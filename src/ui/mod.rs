//! User interface modules for the joystick side toggle

pub mod joystick;
pub mod side_toggle;
pub mod theme;

// Re-export commonly used items
pub use joystick::{
    spawn_side_controller, subscribe, unsubscribe, JoystickUiPlugin,
    SideController, ToggleSubscription,
};
pub use side_toggle::{SideToggle, SideTogglePlugin, SideToggled};
