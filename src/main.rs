use listkeeper::commands::Cli;
use listkeeper::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Outside debug mode only warnings and errors reach the subscriber;
    // everything else is printed by the msg_* macros.
    let default_directives = if is_debug_mode() { "listkeeper=debug,actix_web=info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Cli::menu().await
}
