//! Pesan - a single-device chat client.
//!
//! A login flow backed by an external identity provider, and a chat screen
//! whose message history lives entirely in local storage. There is no
//! server-side message exchange: sending appends to the local history and
//! rewrites it on device.
//!
//! # Usage
//!
//! ```bash
//! PESAN_API_KEY=<provider api key> cargo run -p pesan-client
//! ```
//!
//! In the chat screen, type a message and press Enter to send. Slash
//! commands: `/image <path>` attaches a picture from disk, `/logout` clears
//! the session, `/quit` exits.

mod chat;
mod config;
mod gallery;
mod guard;
mod login;
mod render;
mod ui;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pesan_store::Database;

use crate::config::ClientConfig;
use crate::guard::Route;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("pesan_client=debug,pesan_store=info,pesan_auth=info,warn")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    info!("Starting Pesan v{}", env!("CARGO_PKG_VERSION"));

    let config = ClientConfig::from_env();
    if config.api_key.is_empty() {
        warn!("PESAN_API_KEY is not set; sign-in will be rejected by the provider");
    }

    let db = match &config.data_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Database::open_at(&dir.join(pesan_shared::constants::DB_FILE_NAME))?
        }
        None => Database::new()?,
    };

    let auth = pesan_auth::AuthClient::new(config.auth_url.clone(), config.api_key.clone());

    loop {
        match guard::resolve_route(&db) {
            Route::Login => {
                if login::run(&db, &auth).await?.is_none() {
                    // User backed out of the login prompt.
                    break;
                }
            }
            Route::Chat(session) => match ui::run_chat(&db, session)? {
                ui::ChatOutcome::Logout => {
                    if let Err(e) = db.clear_session() {
                        warn!(error = %e, "failed to clear session on logout");
                    }
                    info!("logged out");
                }
                ui::ChatOutcome::Quit => break,
            },
        }
    }

    Ok(())
}
