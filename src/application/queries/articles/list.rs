use super::ArticleQueryService;
use crate::{
    application::{dto::ArticlePage, error::ApplicationResult},
    domain::article::ArticleCursor,
};

pub struct ListArticlesQuery {
    /// Raw cursor; `0` or any negative value starts from the newest article.
    pub cursor: i64,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticlePage> {
        let cursor = ArticleCursor::from_raw(query.cursor);
        let records = self.gateway.list_by_cursor(cursor).await?;
        Ok(ArticlePage::from_records(records))
    }
}
