use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        let Ok(id) = ArticleId::new(query.id) else {
            tracing::debug!(article_id = query.id, "lookup for unassignable article id");
            return Err(ApplicationError::not_found("article not found"));
        };

        let article = self.gateway.get_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(article_id = %id, "article not found");
            ApplicationError::not_found("article not found")
        })?;
        Ok(article.into())
    }
}
