use clap::Parser;
use log::warn;
use signin::Backend;
use signin::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "signin", about = "Terminal sign-in form")]
struct Args {
    /// Auth backend to log in against
    #[arg(short, long, value_enum)]
    backend: Option<Backend>,

    /// Base URL of the HTTP auth service
    #[arg(long)]
    auth_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to signin.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("signin.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, falling back to defaults", e);
        config::SignInConfig::default()
    });
    let resolved = config::resolve(&file_config, args.backend, args.auth_url.as_deref());

    log::info!("Sign-in starting up with backend: {:?}", resolved.backend);

    signin::tui::run(resolved)
}
