use anyhow::Result;
use qpsbench::{
    bench::runner::{Outcome, run_benchmark},
    config::BenchConfig,
    db::mysql::MySqlSession,
};
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let mut config = BenchConfig::from_env()?;
    // An optional positional argument overrides BENCH_MODE.
    if let Some(mode) = std::env::args().nth(1) {
        config = config.with_mode(mode);
    }

    let rt = Builder::new_current_thread().enable_all().build()?;
    rt.block_on(run(config))
}

async fn run(config: BenchConfig) -> Result<()> {
    let cfg = &config;
    match run_benchmark(cfg, move || MySqlSession::connect(cfg)).await? {
        Outcome::Completed(report) => println!("{}", report.render(config.output)?),
        invalid @ Outcome::InvalidMode(_) => println!("{invalid}"),
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
