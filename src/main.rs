use dotenv::dotenv;
use tracing::{error, info, warn};
use wrp_backend::app::app::App;
use wrp_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Load .env before the logger so LOG_DIR and RUST_LOG apply
    let dotenv_result = dotenv();

    let _guards = match Logger::new() {
        Ok(logger) => logger.guards,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e}");
            std::process::exit(1);
        }
    };

    info!("🚀 Starting WRP Backend");
    match dotenv_result {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let app = match App::new().await {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to start application: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = app.start().await {
        error!("Server stopped with error: {e}");
        std::process::exit(1);
    }
}
