use chef_ui::stores::ConfigState;
use chef_ui::ChefApp;
use clap::Parser;
use config::Config;
use dioxus::desktop::{Config as DioxusConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use std::path::PathBuf;
use tracing::{info, warn};

mod config;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// InstaChef desktop - photograph the fridge, get a recipe.
#[derive(Parser)]
#[command(name = "instachef")]
struct Cli {
    /// Path to config.yaml. Defaults to the platform config directory.
    #[arg(long, env = config::CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `chef_common=debug`.
    /// Overrides RUST_LOG and the config file.
    #[arg(long)]
    log: Option<String>,
}

/// CLI flag, then RUST_LOG, then the config file
fn env_filter(cli_log: Option<&str>, config: &Config) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    if let Some(directive) = cli_log {
        return EnvFilter::new(directive);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

fn configure_logging(filter: tracing_subscriber::EnvFilter) {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn make_window(config: &Config) -> WindowBuilder {
    WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_resizable(false)
        .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
        .with_background_color((0x1a, 0x1a, 0x2e, 0xff))
}

#[component]
fn App() -> Element {
    let config = use_context::<ConfigState>();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ChefApp { config }
    }
}

fn main() {
    let cli = Cli::parse();

    let path = cli.config.clone().or_else(Config::default_path);
    let (config, load_error) = match path.as_deref().map(Config::load_or_init) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (Config::default(), Some(e)),
        None => (Config::default(), None),
    };

    configure_logging(env_filter(cli.log.as_deref(), &config));

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }
    match &path {
        Some(path) => info!("Config: {}", path.display()),
        None => warn!("No config directory on this platform, using defaults"),
    }

    let config_state = config.to_config_state();
    info!(
        "Launching {} ({}x{})",
        config.window_title, config.window_width, config.window_height
    );

    LaunchBuilder::desktop()
        .with_cfg(DioxusConfig::default().with_window(make_window(&config)))
        .with_context(config_state)
        .launch(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from(["instachef", "--config", "/tmp/c.yaml", "--log", "debug"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.yaml")));
        assert_eq!(cli.log.as_deref(), Some("debug"));
    }

    #[test]
    fn cli_flag_wins_over_config_filter() {
        let config = Config {
            log_filter: "warn".to_string(),
            ..Config::default()
        };
        let filter = env_filter(Some("trace"), &config);
        assert_eq!(filter.to_string(), "trace");
    }
}
