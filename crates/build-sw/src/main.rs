use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use build_sw::Workbox;

/// Generate service-worker.js for a built web app.
#[derive(Debug, Parser)]
#[command(name = "build-sw")]
struct Cli {
    /// Public output directory; the service worker is written into it.
    public_out_dir: String,

    /// Node executable used to run workbox-build.
    #[arg(long, env = "NODE_BINARY", default_value = "node")]
    node: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let report = build_sw::build(&Workbox::new(cli.node), &cli.public_out_dir)?;

    build_sw::print_warnings(&mut std::io::stdout().lock(), &report)?;

    Ok(())
}
