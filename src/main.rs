use clap::Parser;
use odeon::{Config, Odeon, cli::Cli, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(Config::load(cli.config.as_deref())?)?;

    logging::init(config.log_path().as_deref())?;
    log::info!("Starting odeon {}", env!("CARGO_PKG_VERSION"));

    Odeon::new(config)?.run()
}
