use edgar_urls::{cli, errors::AppResult};
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    // Logs go to stderr so stdout only carries URLs.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::cli()
}
