use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use waitlist_server::{router, GoogleSheets, RawConfig, Waitlist};

#[derive(Parser, Debug)]
#[command(name = "waitlist-server", about = "Append landing page signups to a Google Sheet")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Service account key as single-line JSON.
    #[arg(long, env = "GOOGLE_SERVICE_ACCOUNT_KEY", hide_env_values = true)]
    service_account_key: Option<String>,

    /// Read the service account key from a file. Takes precedence over
    /// `--service-account-key`.
    #[arg(long)]
    credentials_file: Option<PathBuf>,

    #[arg(long, env = "GOOGLE_SHEET_ID")]
    sheet_id: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let credentials_json = match &args.credentials_file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?,
        ),
        None => args.service_account_key.clone(),
    };
    let config = RawConfig::new(credentials_json, args.sheet_id.clone());
    // Requests fail with a configuration error until this is fixed.
    if let Err(e) = config.validate() {
        log::warn!("[config] {e}");
    }

    let waitlist = Arc::new(Waitlist::new(config, GoogleSheets::default()));
    let app = router(waitlist);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    log::info!("[server] listening on {}", args.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("[server] shutting down");
            }
        })
        .await?;
    Ok(())
}
