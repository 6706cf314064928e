use anyhow::Result;
use tracing::warn;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use pumpkin_maze::app::App;
use pumpkin_maze::config;
use pumpkin_maze::session::SessionStore;

pub fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Setup tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}=info", env!("CARGO_CRATE_NAME"))));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber).expect("Could not set global default");

    let config = config::load_config()?;
    let mut session = SessionStore::load(&config.session_path)?;

    // The game must not start without a session; send the shell back to the
    // notes page instead of building the level.
    if session.session_id().is_none() {
        warn!(path = %session.path().display(), "No session id found, redirecting to notes");
        session.record_redirect("notes")?;
        return Ok(());
    }

    App::new(&config, session)?.run()
}
