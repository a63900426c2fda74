//! Side Toggle
//!
//! A boolean button that picks the joystick side. `true` is left.
//! Listeners observe [`SideToggled`] on the toggle entity; the event only
//! fires when the value actually changes.

use crate::core::errors::StickResult;
use crate::geometry::JoystickSide;
use crate::missing_component;
use crate::ui::theme::*;
use bevy::prelude::*;

/// Keyboard shortcut that flips the toggle
pub const TOGGLE_SHORTCUT: KeyCode = KeyCode::KeyJ;

/// Boolean toggle control
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct SideToggle {
    value: bool,
}

impl SideToggle {
    pub fn new(value: bool) -> Self {
        Self { value }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn side(&self) -> JoystickSide {
        JoystickSide::from(self.value)
    }

    /// Returns whether the value changed
    pub fn set(&mut self, value: bool) -> bool {
        let changed = self.value != value;
        self.value = value;
        changed
    }
}

/// Fired on the toggle entity after its value changes
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideToggled {
    pub value: bool,
}

/// Text child showing which side a toggle is on
#[derive(Component, Debug)]
pub struct SideToggleLabel(pub Entity);

pub struct SideTogglePlugin;

impl Plugin for SideTogglePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SideToggle>().add_systems(
            Update,
            (
                handle_side_toggle_buttons,
                handle_side_toggle_shortcut,
                update_side_toggle_colors,
                update_side_toggle_labels,
            )
                .chain(),
        );
    }
}

/// Spawns the toggle button along the top edge of `parent`
pub fn spawn_side_toggle(
    commands: &mut Commands,
    parent: Entity,
    side: JoystickSide,
) -> Entity {
    let toggle = commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(WIDGET_MARGIN),
                align_self: AlignSelf::Center,
                padding: UiRect::all(Val::Px(WIDGET_PADDING)),
                border: UiRect::all(Val::Px(WIDGET_BORDER_WIDTH)),
                ..default()
            },
            BackgroundColor(NORMAL_BUTTON),
            BorderColor(NORMAL_BUTTON_OUTLINE_COLOR),
            SideToggle::new(side.is_left()),
            Name::new("SideToggle"),
        ))
        .id();

    let label = commands
        .spawn((
            Text::new(label_text(side)),
            TextFont {
                font_size: WIDGET_TEXT_FONT_SIZE,
                ..default()
            },
            TextColor(TOGGLE_TEXT_COLOR),
            SideToggleLabel(toggle),
        ))
        .id();

    commands.entity(toggle).add_child(label);
    commands.entity(parent).add_child(toggle);
    toggle
}

/// Sets the toggle on `entity` and notifies listeners if it changed
pub fn set_toggle_value(
    world: &mut World,
    entity: Entity,
    value: bool,
) -> StickResult<bool> {
    let mut toggle = world
        .get_mut::<SideToggle>(entity)
        .ok_or_else(|| missing_component!(entity, "SideToggle"))?;

    if !toggle.set(value) {
        return Ok(false);
    }

    world.trigger_targets(SideToggled { value }, entity);
    Ok(true)
}

fn flip(commands: &mut Commands, entity: Entity, toggle: &mut SideToggle) {
    let value = !toggle.value();
    toggle.set(value);
    info!("Joystick side toggled to {}", JoystickSide::from(value).label());
    commands.trigger_targets(SideToggled { value }, entity);
}

fn handle_side_toggle_buttons(
    mut commands: Commands,
    mut interaction_query: Query<
        (Entity, &Interaction, &mut SideToggle),
        Changed<Interaction>,
    >,
) {
    for (entity, interaction, mut toggle) in interaction_query.iter_mut() {
        if *interaction == Interaction::Pressed {
            flip(&mut commands, entity, &mut toggle);
        }
    }
}

fn handle_side_toggle_shortcut(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut toggles: Query<(Entity, &mut SideToggle)>,
) {
    if !keyboard.just_pressed(TOGGLE_SHORTCUT) {
        return;
    }

    for (entity, mut toggle) in toggles.iter_mut() {
        flip(&mut commands, entity, &mut toggle);
    }
}

#[allow(clippy::type_complexity)]
fn update_side_toggle_colors(
    mut query: Query<
        (&Interaction, &mut BackgroundColor, &mut BorderColor),
        (Changed<Interaction>, With<SideToggle>),
    >,
) {
    for (interaction, mut bg, mut border) in query.iter_mut() {
        let (fill, outline) = match *interaction {
            Interaction::Pressed => (PRESSED_BUTTON, PRESSED_BUTTON_OUTLINE_COLOR),
            Interaction::Hovered => (HOVERED_BUTTON, HOVERED_BUTTON_OUTLINE_COLOR),
            Interaction::None => (NORMAL_BUTTON, NORMAL_BUTTON_OUTLINE_COLOR),
        };
        *bg = BackgroundColor(fill);
        *border = BorderColor(outline);
    }
}

fn update_side_toggle_labels(
    toggles: Query<&SideToggle, Changed<SideToggle>>,
    mut labels: Query<(&SideToggleLabel, &mut Text)>,
) {
    for (label, mut text) in labels.iter_mut() {
        if let Ok(toggle) = toggles.get(label.0) {
            *text = Text::new(label_text(toggle.side()));
        }
    }
}

fn label_text(side: JoystickSide) -> String {
    format!("Joystick: {}", side.label())
}
