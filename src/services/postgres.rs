use crate::models::{ScoreResult, Submission, SurveyResponse};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// PostgreSQL client for survey submissions.
///
/// Stores each scored submission with its raw answers and the computed
/// per-category scores as JSONB, so historical submissions keep the exact
/// breakdown they were scored with even if the tables change later.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Persist a scored submission and return the stored record.
    pub async fn insert_submission(
        &self,
        user_id: &str,
        answers: &SurveyResponse,
        result: &ScoreResult,
    ) -> Result<Submission, PostgresError> {
        let id = Uuid::new_v4();
        let answers_json = serde_json::to_value(answers)?;
        let scores_json = serde_json::to_value(&result.scores)?;

        let query = r#"
            INSERT INTO submissions (id, user_id, answers, scores, total_score, impact_category)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING created_at
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .bind(user_id)
            .bind(&answers_json)
            .bind(&scores_json)
            .bind(result.total_score)
            .bind(&result.impact_category)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(
            "Stored submission {} for user {} (total {}, {})",
            id,
            user_id,
            result.total_score,
            result.impact_category
        );

        Ok(Submission {
            id,
            user_id: user_id.to_string(),
            answers: answers.clone(),
            scores: result.scores.clone(),
            total_score: result.total_score,
            impact_category: result.impact_category.clone(),
            created_at: row.get("created_at"),
        })
    }

    /// Fetch one submission by id.
    pub async fn get_submission(&self, id: Uuid) -> Result<Option<Submission>, PostgresError> {
        let query = r#"
            SELECT id, user_id, answers, scores, total_score, impact_category, created_at
            FROM submissions
            WHERE id = $1
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        row.map(|row| submission_from_row(&row)).transpose()
    }

    /// List a user's submissions, newest first.
    pub async fn list_submissions(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<Submission>, PostgresError> {
        let query = r#"
            SELECT id, user_id, answers, scores, total_score, impact_category, created_at
            FROM submissions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("User {} has {} submissions (limit {})", user_id, rows.len(), limit);

        rows.iter().map(submission_from_row).collect()
    }

    /// Delete a submission. Returns whether a row was removed.
    pub async fn delete_submission(&self, id: Uuid) -> Result<bool, PostgresError> {
        let query = r#"
            DELETE FROM submissions
            WHERE id = $1
        "#;

        let result = sqlx::query(query).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
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

fn submission_from_row(row: &PgRow) -> Result<Submission, PostgresError> {
    let answers: SurveyResponse = serde_json::from_value(row.get("answers"))?;
    let scores = serde_json::from_value(row.get("scores"))?;

    Ok(Submission {
        id: row.get("id"),
        user_id: row.get("user_id"),
        answers,
        scores,
        total_score: row.get("total_score"),
        impact_category: row.get("impact_category"),
        created_at: row.get("created_at"),
    })
}
