//! Provider store: pooled database access and the filtered search query.
//!
//! The search uses the nullable-filter idiom throughout: every optional
//! filter is bound as a typed parameter and the predicate ORs an `IS NULL`
//! check on that parameter, so "filter not applied" never reaches the SQL as
//! concatenated text.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::Result;
use crate::filter::FilterSpec;

/// One provider row as returned by the store.
///
/// Text fields are optional because directory imports are sparse; the feed
/// formatter supplies fallbacks. Coordinates are optional in the type, but
/// [`ProviderStore::search`] only returns rows where both are present.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProviderRecord {
    pub category: Option<String>,
    pub organization_name: Option<String>,
    pub practice_city: Option<String>,
    pub practice_state: Option<String>,
    pub practice_zip: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub taxonomy_code: Option<String>,
}

/// Handle on the provider directory database.
///
/// Cheap to clone: the inner pool is reference-counted and bounded, so
/// concurrent requests queue for a connection instead of opening new ones.
#[derive(Debug, Clone)]
pub struct ProviderStore {
    pool: SqlitePool,
}

/// Filtered provider search.
///
/// Rows without coordinates can never render as map pins, so they are
/// excluded here rather than in the formatter. The ordering includes `id` as
/// a stable secondary key: repeated identical requests must produce identical
/// ordering for item ranks to be meaningful.
const SEARCH_SQL: &str = "\
SELECT category, organization_name, practice_city, practice_state, practice_zip, \
       address, latitude, longitude, taxonomy_code \
FROM providers \
WHERE latitude IS NOT NULL \
  AND longitude IS NOT NULL \
  AND (?1 IS NULL OR category = ?1) \
  AND (?2 IS NULL OR organization_name LIKE ?2) \
  AND (?3 IS NULL OR practice_zip LIKE ?3 || '%') \
  AND (?4 IS NULL OR practice_city = ?4 COLLATE NOCASE) \
  AND (?5 IS NULL OR practice_state = ?5 COLLATE NOCASE) \
ORDER BY organization_name ASC, id ASC \
LIMIT ?6";

const SCHEMA_SQL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS providers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category TEXT,
        organization_name TEXT,
        practice_city TEXT,
        practice_state TEXT,
        practice_zip TEXT,
        address TEXT,
        latitude REAL,
        longitude REAL,
        taxonomy_code TEXT
    )",
    "CREATE INDEX IF NOT EXISTS idx_providers_organization_name
        ON providers (organization_name)",
    "CREATE INDEX IF NOT EXISTS idx_providers_practice_zip
        ON providers (practice_zip)",
    "CREATE INDEX IF NOT EXISTS idx_providers_category
        ON providers (category)",
];

impl ProviderStore {
    /// Open a bounded connection pool for the given database URL.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an already-constructed pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the providers table and supporting indexes if missing.
    pub async fn init_schema(&self) -> Result<()> {
        for statement in SCHEMA_SQL {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Run the filtered provider search.
    ///
    /// Returns at most `filter.limit` rows, every one with non-null
    /// coordinates, ordered by organization name then row id.
    pub async fn search(&self, filter: &FilterSpec) -> Result<Vec<ProviderRecord>> {
        debug!(?filter, "searching providers");
        let records = sqlx::query_as::<_, ProviderRecord>(SEARCH_SQL)
            .bind(filter.category.as_deref())
            .bind(filter.text_pattern.as_deref())
            .bind(filter.zip5.as_deref())
            .bind(filter.city.as_deref())
            .bind(filter.state.as_deref())
            .bind(filter.limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    /// Cheap connectivity check.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
