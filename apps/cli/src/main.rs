use guardvault_cli::config::Config;
use guardvault_cli::{init_tracing, run_stdio};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config);
    run_stdio(&config)
}
