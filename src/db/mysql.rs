// src/db/mysql.rs

use crate::{bench::row::SyntheticRow, config::BenchConfig, db::session::Session};
use anyhow::{Context, Result};
use sqlx::{
    ConnectOptions, Connection,
    mysql::{MySqlConnectOptions, MySqlConnection},
};
use tracing::{debug, info};

/// A single MySQL connection with autocommit off, so that inserts accumulate
/// in one transaction until `commit`.
pub struct MySqlSession {
    conn: MySqlConnection,
}

impl MySqlSession {
    pub async fn connect(config: &BenchConfig) -> Result<Self> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let mut conn = options
            .connect()
            .await
            .with_context(|| format!("Failed to connect to {}", config.target()))?;

        sqlx::raw_sql("SET autocommit = 0")
            .execute(&mut conn)
            .await
            .context("Failed to disable autocommit")?;

        info!(target = %config.target(), "connected");
        Ok(MySqlSession { conn })
    }
}

impl Session for MySqlSession {
    async fn query_discard(&mut self, sql: &str) -> Result<()> {
        let rows = sqlx::query(sql)
            .fetch_all(&mut self.conn)
            .await
            .with_context(|| format!("Query failed: {sql}"))?;
        debug!(rows = rows.len(), "query returned");
        Ok(())
    }

    async fn insert_row(&mut self, sql: &str, row: &SyntheticRow<'_>) -> Result<()> {
        let t = row.template;
        sqlx::query(sql)
            .bind(row.id_string())
            .bind(t.name)
            .bind(row.email.as_str())
            .bind(t.password)
            .bind(t.dob)
            .bind(t.address)
            .bind(t.city)
            .bind(t.state_id)
            .bind(t.zip)
            .bind(t.country_id)
            .bind(t.account_type)
            .bind(t.closest_airport)
            .execute(&mut self.conn)
            .await
            .with_context(|| format!("Insert failed for {}", row.email))?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        sqlx::raw_sql("COMMIT")
            .execute(&mut self.conn)
            .await
            .context("Commit failed")?;
        Ok(())
    }

    async fn close(self) -> Result<()> {
        self.conn.close().await.context("Failed to close connection")?;
        debug!("connection closed");
        Ok(())
    }
}
