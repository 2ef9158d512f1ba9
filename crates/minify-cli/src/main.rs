use clap::Parser;
use minify_cli::{format_stats, run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = run(&cli, std::io::stdin().lock(), std::io::stdout().lock())?;
    if cli.stats {
        if let Some(r) = result {
            eprintln!("{}", format_stats(&r));
        }
    }
    Ok(())
}
