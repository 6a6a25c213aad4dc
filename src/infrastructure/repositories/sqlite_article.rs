use super::map_sqlx;
use crate::application::ports::ClockPort;
use crate::domain::article::{
    ARTICLE_PAGE_SIZE, Article, ArticleBody, ArticleCursor, ArticleGateway, ArticleId,
    ArticleTitle, ValidArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool, Transaction};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, body, created, updated";

#[derive(Clone)]
pub struct SqliteArticleGateway {
    pool: SqlitePool,
    clock: Arc<ClockPort>,
}

impl SqliteArticleGateway {
    pub fn new(pool: SqlitePool, clock: Arc<ClockPort>) -> Self {
        Self { pool, clock }
    }

    async fn begin(&self, operation: &'static str) -> DomainResult<Transaction<'static, Sqlite>> {
        self.pool
            .begin()
            .await
            .map_err(|err| map_sqlx(operation, err))
    }
}

async fn commit(tx: Transaction<'_, Sqlite>, operation: &'static str) -> DomainResult<()> {
    tx.commit().await.map_err(|err| map_sqlx(operation, err))
}

async fn rollback(tx: Transaction<'_, Sqlite>, operation: &'static str) {
    if let Err(err) = tx.rollback().await {
        tracing::warn!(operation, error = %err, "transaction rollback failed");
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            created: row.created,
            updated: row.updated,
        })
    }
}

#[async_trait]
impl ArticleGateway for SqliteArticleGateway {
    async fn create(&self, article: ValidArticle) -> DomainResult<Article> {
        let ValidArticle { title, body } = article;
        let now = self.clock.now();

        let mut tx = self.begin("create").await?;
        let inserted = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, body, created, updated) VALUES (?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await;

        let row = match inserted {
            Ok(row) => row,
            Err(err) => {
                rollback(tx, "create").await;
                return Err(map_sqlx("create", err));
            }
        };
        commit(tx, "create").await?;

        Article::try_from(row)
    }

    async fn list_by_cursor(&self, cursor: ArticleCursor) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        if let Some(before) = cursor.upper_bound() {
            builder.push(" WHERE id < ");
            builder.push_bind(i64::from(before));
        }
        builder.push(" ORDER BY id DESC LIMIT ");
        builder.push_bind(i64::from(ARTICLE_PAGE_SIZE));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|err| map_sqlx("list", err))?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| map_sqlx("get", err))?;

        row.map(Article::try_from).transpose()
    }

    async fn update(&self, id: ArticleId, article: ValidArticle) -> DomainResult<Option<Article>> {
        let ValidArticle { title, body } = article;
        let now = self.clock.now();

        let mut tx = self.begin("update").await?;
        let updated = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET title = ?, body = ?, updated = ? WHERE id = ? RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(now)
        .bind(i64::from(id))
        .fetch_optional(&mut *tx)
        .await;

        match updated {
            Ok(Some(row)) => {
                commit(tx, "update").await?;
                Article::try_from(row).map(Some)
            }
            Ok(None) => {
                rollback(tx, "update").await;
                Ok(None)
            }
            Err(err) => {
                rollback(tx, "update").await;
                Err(map_sqlx("update", err))
            }
        }
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut tx = self.begin("delete").await?;
        let deleted = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await;

        match deleted {
            Ok(result) => {
                tracing::debug!(article_id = %id, rows = result.rows_affected(), "delete executed");
                commit(tx, "delete").await
            }
            Err(err) => {
                rollback(tx, "delete").await;
                Err(map_sqlx("delete", err))
            }
        }
    }
}
