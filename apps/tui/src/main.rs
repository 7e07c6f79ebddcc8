use clap::Parser;
use color_eyre::Result;
use fleet_dashboard::app::{App, AppActions};
use fleet_dashboard::cli::CliArgs;
use fleet_dashboard::config::init_app_config;
use fleet_dashboard::fleet::{FleetQueryEngine, FleetSnapshot};
use fleet_dashboard::{event, terminal};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = args.override_config(init_app_config()?);
    init_logging(config.debug);

    let headless = args.headless || !is_terminal();
    let actions = AppActions::new(config);
    let idle_top_n = actions.config.idle_top_n;

    // Headless runs and exports need real data; the TUI can start empty
    let (snapshot, load_error) = match actions.load_snapshot().await {
        Ok(snapshot) => (snapshot, None),
        Err(e) if !headless && args.export.is_none() => {
            tracing::warn!(error = %e, "starting with an empty snapshot");
            (FleetSnapshot::empty(), Some(e))
        }
        Err(e) => return Err(e),
    };

    if let Some(path) = &args.export {
        actions.export_snapshot(&snapshot, path).await?;
        eprintln!("Exported {} vehicles to {}", snapshot.len(), path.display());
    }

    let engine = FleetQueryEngine::new(snapshot).with_idle_top_n(idle_top_n);
    let mut app = App::new(engine, actions, args.criteria());

    if headless {
        return event::run_headless(&app, args.json);
    }

    if let Some(e) = load_error {
        app.status_message = format!("Load failed: {e}");
    }

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
