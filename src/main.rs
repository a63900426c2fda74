//! An on-screen joystick that can be moved between screen edges.

use stickside::core::logger::init_custom_logger;
use stickside::core::errors::Context;
use stickside::core::{create_app, CliArgs};

fn main() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse_args();
    init_custom_logger(cli_args.log_level());

    let mut app =
        create_app(cli_args).context("Failed to create the application")?;
    app.run();
    Ok(())
}
