use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleDraft, ArticleId},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand { id, title, body } = command;
        let valid = self.validate(ArticleDraft::new(title, body))?;

        // Ids below 1 are never assigned, so there is nothing to update.
        let Ok(article_id) = ArticleId::new(id) else {
            tracing::debug!(article_id = id, "update for unassignable article id");
            return Err(ApplicationError::not_found("article not found"));
        };

        let updated = self
            .gateway
            .update(article_id, valid)
            .await?
            .ok_or_else(|| {
                tracing::debug!(%article_id, "update for missing article");
                ApplicationError::not_found("article not found")
            })?;

        tracing::info!(%article_id, "article updated");
        Ok(updated.into())
    }
}
