use crate::core::{EffectivenessMatrix, PokemonType, TypeIndex, UnknownTypeName};
use crate::models::{Account, Gym, Pokemon, Trainer};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Stored data is inconsistent: {0}")]
    UnknownType(#[from] UnknownTypeName),
}

const POKEMON_COLUMNS: &str = "P.pokedex_number, P.name, P.attack, P.defense, P.hp, \
     P.sp_attack, P.sp_defense, P.speed, P.weight, P.generation, P.is_legendary";

/// Escape LIKE wildcards so user input only matches literally
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// PostgreSQL data provider
///
/// Every query that concerns a user takes the username explicitly.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool without running migrations
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Check a username/password pair; None when it does not match
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, PostgresError> {
        let query = r#"
            SELECT username, name
            FROM account
            WHERE username = $1 AND password = $2
        "#;

        let row = sqlx::query(query)
            .bind(username)
            .bind(password)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| {
            let username: String = row.get("username");
            let name: Option<String> = row.get("name");
            Account {
                display_name: name.unwrap_or_else(|| username.clone()),
                username,
            }
        }))
    }

    /// Whether an account exists
    pub async fn account_exists(&self, username: &str) -> Result<bool, PostgresError> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM account WHERE username = $1) AS found")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("found"))
    }

    /// All game regions
    pub async fn list_regions(&self) -> Result<Vec<String>, PostgresError> {
        let rows = sqlx::query("SELECT region FROM game ORDER BY region")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|row| row.get("region")).collect())
    }

    /// Names of the trainers of a region
    pub async fn trainers_in_region(&self, region: &str) -> Result<Vec<String>, PostgresError> {
        let rows = sqlx::query("SELECT name FROM trainer WHERE region = $1 ORDER BY name")
            .bind(region)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|row| row.get("name")).collect())
    }

    /// Gyms of a region
    pub async fn gyms_in_region(&self, region: &str) -> Result<Vec<Gym>, PostgresError> {
        let query = r#"
            SELECT name, type AS gym_type, badge_name, region
            FROM gym
            WHERE region = $1
            ORDER BY name
        "#;

        let gyms = sqlx::query_as::<_, Gym>(query)
            .bind(region)
            .fetch_all(&self.pool)
            .await?;

        Ok(gyms)
    }

    /// Names of the trainers running a gym in a region
    pub async fn trainers_at_gym(
        &self,
        region: &str,
        gym_name: &str,
        gym_type: &str,
    ) -> Result<Vec<String>, PostgresError> {
        let query = r#"
            SELECT name
            FROM trainer
            WHERE region = $1 AND gym_name = $2 AND gym_type = $3
            ORDER BY name
        "#;

        let rows = sqlx::query(query)
            .bind(region)
            .bind(gym_name)
            .bind(gym_type.to_lowercase())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|row| row.get("name")).collect())
    }

    /// Fetch a trainer by name and region
    pub async fn get_trainer(&self, region: &str, name: &str) -> Result<Trainer, PostgresError> {
        let query = r#"
            SELECT name, region, gym_name, gym_type
            FROM trainer
            WHERE name = $1 AND region = $2
        "#;

        sqlx::query_as::<_, Trainer>(query)
            .bind(name)
            .bind(region)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("Trainer {} in {}", name, region)))
    }

    /// Trainer names starting with `prefix`
    pub async fn search_trainers(&self, prefix: &str) -> Result<Vec<String>, PostgresError> {
        if prefix.is_empty() {
            return Err(PostgresError::InvalidInput("Search prefix is empty".to_string()));
        }

        let pattern = format!("{}%", escape_like(prefix));
        let rows = sqlx::query("SELECT DISTINCT name FROM trainer WHERE name LIKE $1 ORDER BY name")
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|row| row.get("name")).collect())
    }

    /// Pokemon owned by a trainer, in pokedex order
    pub async fn trainer_roster(&self, trainer: &Trainer) -> Result<Vec<Pokemon>, PostgresError> {
        let query = format!(
            "SELECT {} FROM pokemon P \
             JOIN trainer_owns T ON T.pokedex_number = P.pokedex_number \
             WHERE T.trainer_name = $1 AND T.trainer_region = $2 \
             ORDER BY P.pokedex_number",
            POKEMON_COLUMNS
        );

        let roster = sqlx::query_as::<_, Pokemon>(&query)
            .bind(&trainer.name)
            .bind(&trainer.region)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Trainer {} owns {} pokemon", trainer.name, roster.len());

        Ok(roster)
    }

    /// Every pokemon, in pokedex order
    pub async fn all_pokemon(&self) -> Result<Vec<Pokemon>, PostgresError> {
        let query = format!("SELECT {} FROM pokemon P ORDER BY P.pokedex_number", POKEMON_COLUMNS);

        Ok(sqlx::query_as::<_, Pokemon>(&query).fetch_all(&self.pool).await?)
    }

    /// Pokemon owned by an account, in pokedex order
    pub async fn account_pokemon(&self, username: &str) -> Result<Vec<Pokemon>, PostgresError> {
        let query = format!(
            "SELECT {} FROM pokemon P \
             JOIN account_owns A ON A.pokedex_number = P.pokedex_number \
             WHERE A.username = $1 \
             ORDER BY P.pokedex_number",
            POKEMON_COLUMNS
        );

        let owned = sqlx::query_as::<_, Pokemon>(&query)
            .bind(username)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("User {} owns {} pokemon", username, owned.len());

        Ok(owned)
    }

    /// Add a pokemon to an account
    ///
    /// Returns false if the account already owned it.
    pub async fn add_ownership(
        &self,
        username: &str,
        pokedex_number: i32,
    ) -> Result<bool, PostgresError> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM pokemon WHERE pokedex_number = $1) AS found")
            .bind(pokedex_number)
            .fetch_one(&self.pool)
            .await?;
        let exists: bool = row.get("found");

        if !exists {
            return Err(PostgresError::NotFound(format!("Pokemon #{}", pokedex_number)));
        }

        let query = r#"
            INSERT INTO account_owns (username, pokedex_number)
            VALUES ($1, $2)
            ON CONFLICT (username, pokedex_number) DO NOTHING
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .bind(pokedex_number)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Added pokemon #{} to {}", pokedex_number, username);

        Ok(result.rows_affected() > 0)
    }

    /// Remove a pokemon from an account
    pub async fn remove_ownership(
        &self,
        username: &str,
        pokedex_number: i32,
    ) -> Result<bool, PostgresError> {
        let query = r#"
            DELETE FROM account_owns
            WHERE username = $1 AND pokedex_number = $2
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .bind(pokedex_number)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Type tags of every pokemon, in slot order
    pub async fn type_index(&self) -> Result<TypeIndex, PostgresError> {
        let rows = sqlx::query(
            "SELECT pokedex_number, type_name FROM pokemon_type ORDER BY pokedex_number, slot",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut index = TypeIndex::new();
        for row in &rows {
            let type_name: String = row.get("type_name");
            index.insert(row.get("pokedex_number"), type_name.parse::<PokemonType>()?);
        }

        tracing::debug!("Loaded types for {} pokemon", index.len());

        Ok(index)
    }

    /// The full effectiveness matrix
    pub async fn effectiveness_matrix(&self) -> Result<EffectivenessMatrix, PostgresError> {
        let rows = sqlx::query("SELECT attack_type, defend_type, multiplier FROM type_effectiveness")
            .fetch_all(&self.pool)
            .await?;

        let mut matrix = EffectivenessMatrix::new();
        for row in &rows {
            let attack: String = row.get("attack_type");
            let defend: String = row.get("defend_type");
            matrix.insert(
                attack.parse::<PokemonType>()?,
                defend.parse::<PokemonType>()?,
                row.get("multiplier"),
            );
        }

        tracing::debug!("Loaded effectiveness matrix over {} types", matrix.type_count());

        Ok(matrix)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
