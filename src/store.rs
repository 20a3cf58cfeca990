//! `cafe` table DDL and data access over SQLite.

use crate::error::{map_insert_error, AppError, ConfigError, StartupError};
use crate::model::{Cafe, NewCafe};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

/// Open a pool for `database_url`, creating the database file if it does not exist.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, StartupError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::Invalid {
            name: "DATABASE_URL",
            reason: e.to_string(),
        })?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the `cafe` table if absent. There is no versioning; run once at startup.
pub async fn ensure_cafe_table(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cafe (
            id INTEGER PRIMARY KEY,
            name VARCHAR(250) NOT NULL UNIQUE,
            map_url VARCHAR(500),
            img_url VARCHAR(500) NOT NULL,
            location VARCHAR(250) NOT NULL,
            seats VARCHAR(250) NOT NULL,
            has_toilet BOOLEAN NOT NULL,
            has_wifi BOOLEAN NOT NULL,
            has_sockets BOOLEAN NOT NULL,
            can_take_calls BOOLEAN NOT NULL,
            coffee_price VARCHAR(250)
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Data access for cafe records. Cheap to clone; shares the pool.
#[derive(Clone)]
pub struct CafeStore {
    pool: SqlitePool,
}

impl CafeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of stored cafes. Fails if the `cafe` table is missing.
    pub async fn count(&self) -> Result<i64, AppError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cafe")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    /// All records, ascending id.
    pub async fn list_all(&self) -> Result<Vec<Cafe>, AppError> {
        let sql = format!("SELECT {} FROM cafe ORDER BY id", CAFE_COLUMNS);
        let rows = sqlx::query_as::<_, Cafe>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// One record chosen uniformly at random.
    pub async fn get_random(&self) -> Result<Cafe, AppError> {
        let sql = format!("SELECT {} FROM cafe ORDER BY RANDOM() LIMIT 1", CAFE_COLUMNS);
        sqlx::query_as::<_, Cafe>(&sql)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::EmptyStore)
    }

    /// Records whose location equals `location` byte for byte. May be empty.
    pub async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>, AppError> {
        let sql = format!("SELECT {} FROM cafe WHERE location = ?1 ORDER BY id", CAFE_COLUMNS);
        let rows = sqlx::query_as::<_, Cafe>(&sql)
            .bind(location)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn insert(&self, new: &NewCafe) -> Result<Cafe, AppError> {
        let sql = format!(
            r#"
            INSERT INTO cafe (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            RETURNING {}
            "#,
            CAFE_COLUMNS
        );
        let mut tx = self.pool.begin().await?;
        let cafe = sqlx::query_as::<_, Cafe>(&sql)
            .bind(&new.name)
            .bind(&new.map_url)
            .bind(&new.img_url)
            .bind(&new.location)
            .bind(&new.seats)
            .bind(new.has_toilet)
            .bind(new.has_wifi)
            .bind(new.has_sockets)
            .bind(new.can_take_calls)
            .bind(&new.coffee_price)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_insert_error(e, &new.name))?;
        tx.commit().await?;
        Ok(cafe)
    }

    pub async fn update_price(&self, id: i64, new_price: Option<&str>) -> Result<Cafe, AppError> {
        let sql = format!(
            "UPDATE cafe SET coffee_price = ?1 WHERE id = ?2 RETURNING {}",
            CAFE_COLUMNS
        );
        let mut tx = self.pool.begin().await?;
        let cafe = sqlx::query_as::<_, Cafe>(&sql)
            .bind(new_price)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::CafeNotFound(id.to_string()))?;
        tx.commit().await?;
        Ok(cafe)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM cafe WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::CafeNotFound(id.to_string()));
        }
        tx.commit().await?;
        Ok(())
    }
}
