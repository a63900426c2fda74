use bevy::prelude::Color;

// Font Sizes
pub const WIDGET_TEXT_FONT_SIZE: f32 = 24.0;

// Widget Visual Style Constants
pub const WIDGET_BORDER_WIDTH: f32 = 2.0;
pub const WIDGET_PADDING: f32 = 16.0;
pub const WIDGET_MARGIN: f32 = 24.0;

pub const BACKGROUND_COLOR: Color = Color::srgb(0.05, 0.05, 0.05);

// Window Configuration
pub const WINDOW_TITLE: &str = "Stickside";
pub const WINDOW_WIDTH: f32 = 1024.0;
pub const WINDOW_HEIGHT: f32 = 768.0;

// Button Colors
pub const NORMAL_BUTTON: Color = Color::srgb(0.1, 0.1, 0.1);
pub const HOVERED_BUTTON: Color = Color::srgb(0.25, 0.25, 0.25);
pub const PRESSED_BUTTON: Color = Color::srgb(1.0, 0.4, 0.0);

// Button Outline Colors
pub const NORMAL_BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
pub const HOVERED_BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.75, 0.75, 0.75);
pub const PRESSED_BUTTON_OUTLINE_COLOR: Color = Color::srgb(1.0, 0.8, 0.3);

pub const TOGGLE_TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);

// Joystick
pub const JOYSTICK_BASE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.08);
pub const JOYSTICK_RIM_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.35);
pub const JOYSTICK_KNOB_COLOR: Color = Color::srgba(0.3, 1.0, 0.5, 0.8);
/// Knob diameter as a fraction of the base diameter
pub const JOYSTICK_KNOB_RATIO: f32 = 0.4;
