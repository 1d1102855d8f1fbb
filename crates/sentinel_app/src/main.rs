mod app;
mod config;
mod console;
mod effects;
mod view;

fn main() -> anyhow::Result<()> {
    sentinel_logging::initialize_terminal();
    let config = config::AppConfig::from_env();
    app::run(config)
}
