//! Application initialization and configuration

use crate::core::cli::{CliArgs, JoystickConfig};
use crate::core::errors::StickResult;
use crate::core::settings::{install_settings, JoystickSettings};
use crate::ui::theme::{BACKGROUND_COLOR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::ui::{JoystickUiPlugin, SideTogglePlugin};
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Bevy GUI application ready to run
pub fn create_app(cli_args: CliArgs) -> StickResult<App> {
    cli_args.validate()?;

    let mut app = App::new();
    configure_app_settings(&mut app, cli_args);
    add_all_plugins(&mut app);
    Ok(app)
}

/// Sets up application resources and configuration
fn configure_app_settings(app: &mut App, cli_args: CliArgs) {
    let config = JoystickConfig::from(&cli_args);
    info!("Starting with joystick config: {:?}", config);

    app.insert_resource(cli_args)
        .insert_resource(config)
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(WinitSettings::desktop_app());

    install_settings(app.world_mut(), JoystickSettings::default());
}

/// Adds all plugins to the application
fn add_all_plugins(app: &mut App) {
    app.add_plugins(configure_default_plugins())
        .add_plugins((JoystickUiPlugin, SideTogglePlugin))
        .add_systems(Update, exit_on_esc);
}

/// Configure the default Bevy plugins with custom settings
fn configure_default_plugins() -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..default()
            }),
            ..default()
        })
        // Disable Bevy's default LogPlugin since we're using our own custom logger
        .build()
        .disable::<bevy::log::LogPlugin>()
}

/// System to exit the application when the Escape key is pressed
fn exit_on_esc(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        app_exit_events.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_cli_is_rejected_before_app_creation() {
        let args = CliArgs {
            size: -4.0,
            ..default()
        };
        let err = create_app(args).err().expect("negative size must fail");
        assert!(err.to_string().contains("--size"));
    }
}
