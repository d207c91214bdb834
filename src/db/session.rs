// src/db/session.rs

use crate::bench::row::SyntheticRow;
use anyhow::Result;

/// One open connection the runner issues statements over, in order.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Execute `sql`, fetch the whole result set and drop it.
    async fn query_discard(&mut self, sql: &str) -> Result<()>;

    /// Execute `sql` with the row's twelve values bound positionally.
    async fn insert_row(&mut self, sql: &str, row: &SyntheticRow<'_>) -> Result<()>;

    /// Commit the open transaction.
    async fn commit(&mut self) -> Result<()>;

    async fn close(self) -> Result<()>
    where
        Self: Sized;
}
