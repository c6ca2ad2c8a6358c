use std::{borrow::Cow, str::FromStr, time::Duration};

use sqlx::{
    error::DatabaseError,
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::app::envy::Envy;

#[non_exhaustive]
pub struct SqlStateCodes;

impl SqlStateCodes {
    pub const CHECK_VIOLATION: &str = "275";
}

pub fn get_code_from_db_err(db_err: &dyn DatabaseError) -> Option<String> {
    match db_err.code() {
        Some(code) => match code {
            Cow::Borrowed(val) => Some(val.to_owned()),
            Cow::Owned(val) => Some(val),
        },
        None => None,
    }
}

pub fn pool_options(envy: &Envy) -> SqlitePoolOptions {
    // every connection to an in-memory database sees its own empty database,
    // so the single connection must never be reaped
    match envy.database_url.contains(":memory:") {
        true => SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None),
        false => SqlitePoolOptions::new()
            .max_connections(envy.database_max_connections.unwrap_or(5))
            .idle_timeout(Some(Duration::from_secs(60))),
    }
}

pub async fn connect(envy: &Envy) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&envy.database_url)?.create_if_missing(true);

    pool_options(envy).connect_with(options).await
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let envy = Envy {
        database_url: "sqlite::memory:".to_string(),
        ..Envy::default()
    };
    let pool = connect(&envy).await.unwrap();

    migrate(&pool).await.unwrap();

    pool
}
