//! Joystick UI
//!
//! Spawns the on-screen joystick and the controller that moves it between
//! the left and right screen edges when the side toggle changes.
//!
//! The controller is an entity with a [`SideController`]. Binding it is a
//! single step: the joystick's initial x offset is captured into
//! [`JoystickSettings`] first, and only then is the toggle listener
//! attached, so no toggle event can ever see an uncaptured position.
//! The listener is owned by [`ToggleSubscription`]; removing that
//! component, or despawning the controller, despawns the observer.

use crate::core::cli::JoystickConfig;
use crate::core::errors::{anyhow, StickResult};
use crate::core::settings::JoystickSettings;
use crate::geometry::{
    sync_anchored_layout, AnchorSpec, AnchoredRect, JoystickSide,
};
use crate::missing_component;
use crate::ui::side_toggle::{set_toggle_value, spawn_side_toggle, SideToggled};
use crate::ui::theme::*;
use bevy::ecs::component::HookContext;
use bevy::ecs::world::DeferredWorld;
use bevy::prelude::*;
use bevy::ui::UiSystem;

// ============================================================================
// COMPONENTS & RESOURCES
// ============================================================================

/// Connects one side toggle to the joystick it moves
#[derive(Component, Debug, Clone, Copy)]
pub struct SideController {
    pub toggle: Entity,
    pub joystick: Entity,
}

/// Live listener on the controller's toggle
///
/// Present while the controller is enabled. Dropping it from the entity
/// despawns the observer.
#[derive(Component, Debug)]
#[component(on_remove = release_subscription)]
pub struct ToggleSubscription {
    observer: Entity,
}

impl ToggleSubscription {
    pub fn observer(&self) -> Entity {
        self.observer
    }
}

/// The one controller allowed per app
#[derive(Resource, Debug, Clone, Copy)]
pub struct ActiveSideController(pub Entity);

/// Marker for the joystick base node
#[derive(Component, Debug, Default)]
pub struct Joystick;

/// Marker for the knob drawn inside the base
#[derive(Component, Debug, Default)]
pub struct JoystickKnob;

// ============================================================================
// PLUGIN
// ============================================================================

pub struct JoystickUiPlugin;

impl Plugin for JoystickUiPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AnchoredRect>()
            .init_resource::<JoystickConfig>()
            .add_systems(Startup, setup_joystick_ui)
            .add_systems(PostUpdate, sync_anchored_layout.before(UiSystem::Layout));
    }
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Creates the controller for `toggle` and `joystick`.
///
/// Captures the joystick's current x offset unless one was captured
/// already, then subscribes to the toggle.
/// If a live controller already exists the new one is despawned and the
/// existing entity is returned.
pub fn spawn_side_controller(
    world: &mut World,
    toggle: Entity,
    joystick: Entity,
) -> StickResult<Entity> {
    let controller = world.spawn(SideController { toggle, joystick }).id();

    if let Some(existing) = active_controller(world) {
        warn!(
            "Side controller {:?} already active, despawning duplicate {:?}",
            existing, controller
        );
        world.despawn(controller);
        return Ok(existing);
    }

    if let Err(e) = capture_original_position(world, joystick)
        .and_then(|()| subscribe(world, controller))
    {
        world.despawn(controller);
        return Err(e);
    }

    world.insert_resource(ActiveSideController(controller));
    info!("Side controller {:?} bound to toggle {:?}", controller, toggle);
    Ok(controller)
}

fn active_controller(world: &World) -> Option<Entity> {
    let ActiveSideController(entity) = *world.get_resource::<ActiveSideController>()?;
    world
        .get::<SideController>(entity)
        .is_some()
        .then_some(entity)
}

/// Feeds the joystick's initial x offset into the settings, once per app
fn capture_original_position(
    world: &mut World,
    joystick: Entity,
) -> StickResult<()> {
    let rect = world
        .get::<AnchoredRect>(joystick)
        .copied()
        .ok_or_else(|| missing_component!(joystick, "AnchoredRect"))?;

    let mut settings = world
        .get_resource_mut::<JoystickSettings>()
        .ok_or_else(|| anyhow!("JoystickSettings resource is not installed"))?;

    // The joystick may have moved sides since the first capture
    if settings.is_captured() {
        debug!("Joystick offset already captured, keeping it");
        return Ok(());
    }
    settings.set_original_position_x(rect.anchored_position.x);
    Ok(())
}

/// Starts listening to the controller's toggle. No-op when already listening.
pub fn subscribe(world: &mut World, controller: Entity) -> StickResult<()> {
    let entity = world.get_entity(controller)?;
    if entity.contains::<ToggleSubscription>() {
        return Ok(());
    }
    let SideController { toggle, joystick } = *entity
        .get::<SideController>()
        .ok_or_else(|| missing_component!(controller, "SideController"))?;

    let observer = world
        .spawn((
            Observer::new(
                move |trigger: Trigger<SideToggled>,
                      settings: Res<JoystickSettings>,
                      mut rects: Query<&mut AnchoredRect>| {
                    apply_side(trigger.event().value, &settings, joystick, &mut rects);
                },
            )
            .with_entity(toggle),
            Name::new("SideToggleListener"),
        ))
        .id();

    world
        .entity_mut(controller)
        .insert(ToggleSubscription { observer });
    debug!("Controller {:?} subscribed to toggle {:?}", controller, toggle);
    Ok(())
}

/// Stops listening. Safe to call on a controller that is not subscribed.
pub fn unsubscribe(world: &mut World, controller: Entity) {
    if let Ok(mut entity) = world.get_entity_mut(controller) {
        entity.remove::<ToggleSubscription>();
    }
}

fn release_subscription(mut world: DeferredWorld, ctx: HookContext) {
    let Some(observer) = world
        .get::<ToggleSubscription>(ctx.entity)
        .map(ToggleSubscription::observer)
    else {
        return;
    };

    world.commands().entity(observer).try_despawn();
    debug!("Controller {:?} released toggle listener", ctx.entity);
}

fn apply_side(
    value: bool,
    settings: &JoystickSettings,
    joystick: Entity,
    rects: &mut Query<&mut AnchoredRect>,
) {
    let spec: AnchorSpec = settings.toggle_joystick_position(value);
    let position_x = settings.joystick_position(value);

    match rects.get_mut(joystick) {
        Ok(mut rect) => rect.apply_anchor(spec, position_x),
        Err(e) => warn!("Joystick {:?} cannot be moved: {}", joystick, e),
    }
}

// ============================================================================
// UI CREATION
// ============================================================================

fn setup_joystick_ui(mut commands: Commands, config: Res<JoystickConfig>) {
    commands.spawn(Camera2d);

    let root = commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            Name::new("JoystickUiRoot"),
        ))
        .id();

    // Always laid out on the left first; the captured offset is the left one
    let joystick = spawn_joystick(&mut commands, root, *config);
    let toggle = spawn_side_toggle(&mut commands, root, default());
    let start_side = config.start_side;

    commands.queue(move |world: &mut World| {
        if let Err(e) = bind_joystick_ui(world, toggle, joystick, start_side) {
            error!("Failed to bind joystick side controller: {}", e);
        }
    });
}

/// Binds the controller, then moves the joystick to its starting side
/// through the regular toggle path.
fn bind_joystick_ui(
    world: &mut World,
    toggle: Entity,
    joystick: Entity,
    start_side: JoystickSide,
) -> StickResult<()> {
    spawn_side_controller(world, toggle, joystick)?;
    if !start_side.is_left() {
        set_toggle_value(world, toggle, false)?;
    }
    Ok(())
}

fn spawn_joystick(
    commands: &mut Commands,
    parent: Entity,
    config: JoystickConfig,
) -> Entity {
    let rect = AnchoredRect::new(
        AnchorSpec::for_side(default()),
        config.position,
        config.size,
    );
    let mut node = Node {
        border: UiRect::all(Val::Px(WIDGET_BORDER_WIDTH)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    };
    rect.apply_to_node(&mut node);

    let knob_size = config.size * JOYSTICK_KNOB_RATIO;
    let joystick = commands
        .spawn((
            node,
            rect,
            BackgroundColor(JOYSTICK_BASE_COLOR),
            BorderColor(JOYSTICK_RIM_COLOR),
            BorderRadius::MAX,
            Joystick,
            Name::new("Joystick"),
        ))
        .with_children(|base| {
            base.spawn((
                Node {
                    width: Val::Px(knob_size.x),
                    height: Val::Px(knob_size.y),
                    ..default()
                },
                BackgroundColor(JOYSTICK_KNOB_COLOR),
                BorderRadius::MAX,
                JoystickKnob,
            ));
        })
        .id();

    commands.entity(parent).add_child(joystick);
    joystick
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::install_settings;
    use crate::geometry::{LEFT_ANCHOR, RIGHT_ANCHOR};
    use crate::ui::side_toggle::SideToggle;

    struct Fixture {
        world: World,
        toggle: Entity,
        joystick: Entity,
    }

    fn fixture(position: Vec2) -> Fixture {
        let mut world = World::new();
        install_settings(&mut world, JoystickSettings::default());
        let toggle = world.spawn(SideToggle::new(true)).id();
        let joystick = world
            .spawn(AnchoredRect::new(LEFT_ANCHOR, position, Vec2::splat(160.0)))
            .id();
        Fixture {
            world,
            toggle,
            joystick,
        }
    }

    impl Fixture {
        fn rect(&self) -> AnchoredRect {
            *self.world.get::<AnchoredRect>(self.joystick).unwrap()
        }

        fn flip(&mut self, value: bool) {
            set_toggle_value(&mut self.world, self.toggle, value).unwrap();
            self.world.flush();
        }
    }

    #[test]
    fn binding_captures_initial_offset() {
        let mut f = fixture(Vec2::new(120.0, 0.0));
        spawn_side_controller(&mut f.world, f.toggle, f.joystick).unwrap();

        let settings = f.world.resource::<JoystickSettings>();
        assert!(settings.is_captured());
        assert_eq!(settings.joystick_position(true), 120.0);
        assert_eq!(settings.joystick_position(false), -120.0);
    }

    #[test]
    fn flipping_moves_joystick_between_sides() {
        let mut f = fixture(Vec2::new(120.0, 35.0));
        spawn_side_controller(&mut f.world, f.toggle, f.joystick).unwrap();

        f.flip(false);
        let rect = f.rect();
        assert_eq!(rect.anchored_position.x, -120.0);
        assert_eq!(rect.anchor_spec(), RIGHT_ANCHOR);

        let y_before = rect.anchored_position.y;
        f.flip(true);
        let rect = f.rect();
        assert_eq!(rect.anchored_position.x, 120.0);
        assert_eq!(rect.anchor_spec(), LEFT_ANCHOR);
        assert_eq!(rect.anchored_position.y, y_before);
    }

    #[test]
    fn unsubscribed_controller_ignores_toggle() {
        let mut f = fixture(Vec2::new(120.0, 0.0));
        let controller =
            spawn_side_controller(&mut f.world, f.toggle, f.joystick).unwrap();
        let observer = f
            .world
            .get::<ToggleSubscription>(controller)
            .unwrap()
            .observer();

        unsubscribe(&mut f.world, controller);
        f.world.flush();
        assert!(f.world.get_entity(observer).is_err());

        let before = f.rect();
        f.flip(false);
        assert_eq!(f.rect(), before);
    }

    #[test]
    fn resubscribing_restores_listener() {
        let mut f = fixture(Vec2::new(120.0, 0.0));
        let controller =
            spawn_side_controller(&mut f.world, f.toggle, f.joystick).unwrap();

        unsubscribe(&mut f.world, controller);
        f.world.flush();
        subscribe(&mut f.world, controller).unwrap();
        // A second subscribe must not add a second listener
        subscribe(&mut f.world, controller).unwrap();
        f.world.flush();

        f.flip(false);
        assert_eq!(f.rect().anchored_position.x, -120.0);
        assert_eq!(f.world.resource::<JoystickSettings>().joystick_position(true), 120.0);
    }

    #[test]
    fn despawning_controller_releases_listener() {
        let mut f = fixture(Vec2::new(120.0, 0.0));
        let controller =
            spawn_side_controller(&mut f.world, f.toggle, f.joystick).unwrap();
        let observer = f
            .world
            .get::<ToggleSubscription>(controller)
            .unwrap()
            .observer();

        f.world.despawn(controller);
        f.world.flush();
        assert!(f.world.get_entity(observer).is_err());

        let before = f.rect();
        f.flip(false);
        assert_eq!(f.rect(), before);
    }

    #[test]
    fn duplicate_controller_is_despawned() {
        let mut f = fixture(Vec2::new(120.0, 0.0));
        let first =
            spawn_side_controller(&mut f.world, f.toggle, f.joystick).unwrap();
        let second =
            spawn_side_controller(&mut f.world, f.toggle, f.joystick).unwrap();

        assert_eq!(first, second);
        assert_eq!(f.world.resource::<ActiveSideController>().0, first);
        let controllers = f
            .world
            .query::<&SideController>()
            .iter(&f.world)
            .count();
        assert_eq!(controllers, 1);

        // Only one listener: flipping twice returns to the start
        f.flip(false);
        f.flip(true);
        assert_eq!(f.rect().anchored_position.x, 120.0);
    }

    #[test]
    fn rebinding_keeps_first_captured_offset() {
        let mut f = fixture(Vec2::new(120.0, 0.0));
        let first =
            spawn_side_controller(&mut f.world, f.toggle, f.joystick).unwrap();
        f.flip(false);
        assert_eq!(f.rect().anchored_position.x, -120.0);

        f.world.despawn(first);
        f.world.flush();
        let second =
            spawn_side_controller(&mut f.world, f.toggle, f.joystick).unwrap();
        assert_ne!(first, second);

        let settings = f.world.resource::<JoystickSettings>();
        assert_eq!(settings.joystick_position(true), 120.0);
        assert_eq!(settings.joystick_position(false), -120.0);

        f.flip(true);
        let rect = f.rect();
        assert_eq!(rect.anchored_position.x, 120.0);
        assert_eq!(rect.anchor_spec(), LEFT_ANCHOR);
    }

    #[test]
    fn start_right_moves_joystick_after_binding() {
        let mut f = fixture(Vec2::new(120.0, 20.0));
        bind_joystick_ui(&mut f.world, f.toggle, f.joystick, JoystickSide::Right)
            .unwrap();
        f.world.flush();

        let rect = f.rect();
        assert_eq!(rect.anchor_spec(), RIGHT_ANCHOR);
        assert_eq!(rect.anchored_position, Vec2::new(-120.0, 20.0));
        assert!(!f.world.get::<SideToggle>(f.toggle).unwrap().value());
        assert_eq!(
            f.world.resource::<JoystickSettings>().joystick_position(true),
            120.0
        );
    }

    #[test]
    fn start_left_leaves_joystick_in_place() {
        let mut f = fixture(Vec2::new(120.0, 20.0));
        bind_joystick_ui(&mut f.world, f.toggle, f.joystick, JoystickSide::Left)
            .unwrap();

        let rect = f.rect();
        assert_eq!(rect.anchor_spec(), LEFT_ANCHOR);
        assert_eq!(rect.anchored_position, Vec2::new(120.0, 20.0));
        assert!(f.world.get::<SideToggle>(f.toggle).unwrap().value());
    }

    #[test]
    fn binding_without_settings_fails() {
        let mut world = World::new();
        let toggle = world.spawn(SideToggle::new(true)).id();
        let joystick = world
            .spawn(AnchoredRect::new(LEFT_ANCHOR, Vec2::ZERO, Vec2::ONE))
            .id();

        assert!(spawn_side_controller(&mut world, toggle, joystick).is_err());
        assert!(world.get_resource::<ActiveSideController>().is_none());
        assert_eq!(world.query::<&SideController>().iter(&world).count(), 0);
    }

    #[test]
    fn layout_follows_anchored_rect() {
        let mut app = App::new();
        app.add_systems(Update, sync_anchored_layout);
        let joystick = app
            .world_mut()
            .spawn((
                AnchoredRect::new(LEFT_ANCHOR, Vec2::new(120.0, 0.0), Vec2::splat(100.0)),
                Node::default(),
            ))
            .id();
        app.update();

        app.world_mut()
            .get_mut::<AnchoredRect>(joystick)
            .unwrap()
            .apply_anchor(RIGHT_ANCHOR, -120.0);
        app.update();

        let node = app.world().get::<Node>(joystick).unwrap();
        assert_eq!(node.left, Val::Percent(100.0));
        assert_eq!(node.margin.left, Val::Px(-170.0));
    }
}
