use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Env var that overrides the default log level
pub const LOG_ENV_VAR: &str = "STICKSIDE_LOG";

/// Custom logger initialization to exclude timestamps but keep colors.
/// This provides cleaner logs by removing the timestamp prefix.
///
/// Use STICKSIDE_LOG=info or STICKSIDE_LOG=debug environment variable to
/// increase verbosity. `level_override` (from `--debug`) wins over both.
pub fn init_custom_logger(level_override: Option<&str>) {
    // Empty time formatter that doesn't print anything
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    let level = resolve_level(
        level_override,
        std::env::var(LOG_ENV_VAR).ok().as_deref(),
    );

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true);

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_filter(build_filter(&level)),
        )
        .try_init();
}

/// Picks the base level: explicit override, then env var, then `warn`
fn resolve_level(level_override: Option<&str>, env_level: Option<&str>) -> String {
    level_override
        .or(env_level)
        .unwrap_or("warn")
        .to_string()
}

fn build_filter(level: &str) -> EnvFilter {
    // Unparseable user input falls back to the quiet default
    let base = EnvFilter::try_new(level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    [
        "stickside=info",
        "wgpu_core=error",
        "wgpu_hal=error",
        "bevy_render=error",
    ]
    .into_iter()
    .filter(|directive| !level_is_finer(level, directive))
    .filter_map(|directive| directive.parse::<Directive>().ok())
    .fold(base, |filter, directive| filter.add_directive(directive))
}

/// Keeps `stickside=info` from shadowing a requested `debug`/`trace`
fn level_is_finer(level: &str, directive: &str) -> bool {
    directive.starts_with("stickside=") && matches!(level, "debug" | "trace")
}
