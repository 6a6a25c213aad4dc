use crate::domain::article::entity::Article;
use crate::domain::article::validation::ValidArticle;
use crate::domain::article::value_objects::{ArticleCursor, ArticleId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage access for articles. Every mutating call runs in its own
/// transaction that is committed on success and rolled back otherwise.
#[async_trait]
pub trait ArticleGateway: Send + Sync {
    /// Stamps `created` and `updated` with the current time and inserts.
    async fn create(&self, article: ValidArticle) -> DomainResult<Article>;

    /// Up to [`ARTICLE_PAGE_SIZE`](super::ARTICLE_PAGE_SIZE) articles with an id
    /// below the cursor, newest first.
    async fn list_by_cursor(&self, cursor: ArticleCursor) -> DomainResult<Vec<Article>>;

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Replaces title and body and refreshes `updated`. `None` when no row has
    /// the given id.
    async fn update(&self, id: ArticleId, article: ValidArticle) -> DomainResult<Option<Article>>;

    /// Deleting an id that does not exist is not an error.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
