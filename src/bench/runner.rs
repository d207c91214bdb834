// src/bench/runner.rs

use crate::{
    bench::{
        report::Report,
        row::JOHN_SMITH,
        scenario::{USERINFO_COUNT, USERINFOUUID_INSERT},
        timing::Stopwatch,
    },
    config::{BenchConfig, BenchMode},
    db::session::Session,
};
use anyhow::Result;
use std::{fmt, future::Future};
use tracing::{info, warn};

/// What a dispatched run produced.
#[derive(Debug)]
pub enum Outcome {
    Completed(Report),
    /// The configured mode was not recognized; nothing was executed.
    InvalidMode(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Completed(report) => fmt::Display::fmt(report, f),
            Outcome::InvalidMode(mode) => write!(
                f,
                "Invalid test mode '{mode}'. Use 'select' or 'insert'."
            ),
        }
    }
}

/// Check the mode, then open a session with `connect`, run and close it.
/// An unrecognized mode returns before `connect` is called.
pub async fn run_benchmark<S, F, Fut>(config: &BenchConfig, connect: F) -> Result<Outcome>
where
    S: Session,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<S>>,
{
    if config.bench_mode().is_none() {
        warn!(mode = %config.mode, "invalid test mode, not connecting");
        return Ok(Outcome::InvalidMode(config.mode.clone()));
    }

    let session = connect().await?;
    let mut runner = BenchmarkRunner::new(session, config);
    let outcome = runner.run().await?;
    runner.into_session().close().await?;
    Ok(outcome)
}

/// Drives one benchmark over one session. Every operation is awaited before
/// the next is issued.
pub struct BenchmarkRunner<'c, S: Session> {
    session: S,
    config: &'c BenchConfig,
}

impl<'c, S: Session> BenchmarkRunner<'c, S> {
    pub fn new(session: S, config: &'c BenchConfig) -> Self {
        BenchmarkRunner { session, config }
    }

    /// Run whichever benchmark the configured mode names.
    pub async fn run(&mut self) -> Result<Outcome> {
        match self.config.bench_mode() {
            Some(BenchMode::Select) => Ok(Outcome::Completed(self.run_select_test().await?)),
            Some(BenchMode::Insert) => Ok(Outcome::Completed(self.run_insert_test().await?)),
            None => {
                warn!(mode = %self.config.mode, "invalid test mode, nothing executed");
                Ok(Outcome::InvalidMode(self.config.mode.clone()))
            }
        }
    }

    /// Issue the COUNT query `operations` times and derive queries per second
    /// from the time taken by the whole loop.
    pub async fn run_select_test(&mut self) -> Result<Report> {
        let n = self.config.operations;
        info!(
            scenario = USERINFO_COUNT.name,
            table = USERINFO_COUNT.table,
            operations = n,
            "starting select test"
        );

        let sw = Stopwatch::start();
        for _ in 0..n {
            self.session.query_discard(USERINFO_COUNT.sql).await?;
        }
        let total_secs = sw.stop().elapsed_secs();

        let qps = n as f64 / total_secs;
        info!(total_secs, qps, "select test finished");
        Ok(Report {
            scenario: USERINFO_COUNT.name,
            mode: BenchMode::Select,
            operations: n,
            total_secs,
            qps: Some(qps),
        })
    }

    /// Insert `operations` synthetic rows, then commit once. The commit is
    /// inside the timed region.
    pub async fn run_insert_test(&mut self) -> Result<Report> {
        let n = self.config.operations;
        info!(
            scenario = USERINFOUUID_INSERT.name,
            table = USERINFOUUID_INSERT.table,
            operations = n,
            "starting insert test"
        );

        let sw = Stopwatch::start();
        for i in 0..n {
            let row = JOHN_SMITH.row(i);
            self.session.insert_row(USERINFOUUID_INSERT.sql, &row).await?;
        }
        self.session.commit().await?;
        let total_secs = sw.stop().elapsed_secs();

        info!(total_secs, "insert test finished");
        Ok(Report {
            scenario: USERINFOUUID_INSERT.name,
            mode: BenchMode::Insert,
            operations: n,
            total_secs,
            qps: None,
        })
    }

    pub fn into_session(self) -> S {
        self.session
    }
}
