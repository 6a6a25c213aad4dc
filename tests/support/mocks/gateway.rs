// tests/support/mocks/gateway.rs
use async_trait::async_trait;
use blog_core::domain::article::{
    Article, ArticleCursor, ArticleGateway, ArticleId, ValidArticle,
};
use blog_core::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

use super::time::fixed_now;

/// Every operation fails as if the database connection was lost.
pub struct FailingGateway;

fn lost() -> DomainError {
    DomainError::Persistence("connection reset: SELECT * FROM articles".into())
}

#[async_trait]
impl ArticleGateway for FailingGateway {
    async fn create(&self, _article: ValidArticle) -> DomainResult<Article> {
        Err(lost())
    }

    async fn list_by_cursor(&self, _cursor: ArticleCursor) -> DomainResult<Vec<Article>> {
        Err(lost())
    }

    async fn get_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(lost())
    }

    async fn update(&self, _id: ArticleId, _article: ValidArticle) -> DomainResult<Option<Article>> {
        Err(lost())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(lost())
    }
}

/// Records the calls that reach storage; reads and writes behave as an empty
/// table that accepts inserts.
#[derive(Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<String>>,
}

impl RecordingGateway {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl ArticleGateway for RecordingGateway {
    async fn create(&self, article: ValidArticle) -> DomainResult<Article> {
        self.record("create");
        Ok(Article {
            id: ArticleId::new(1)?,
            title: article.title,
            body: article.body,
            created: fixed_now(),
            updated: fixed_now(),
        })
    }

    async fn list_by_cursor(&self, cursor: ArticleCursor) -> DomainResult<Vec<Article>> {
        self.record(format!("list:{}", cursor.as_raw()));
        Ok(vec![])
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.record(format!("get:{id}"));
        Ok(None)
    }

    async fn update(&self, id: ArticleId, _article: ValidArticle) -> DomainResult<Option<Article>> {
        self.record(format!("update:{id}"));
        Ok(None)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.record(format!("delete:{id}"));
        Ok(())
    }
}
