// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Idempotent: removing an article that does not exist succeeds.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let Ok(article_id) = ArticleId::new(command.id) else {
            tracing::debug!(article_id = command.id, "delete for unassignable article id");
            return Ok(());
        };

        self.gateway.delete(article_id).await?;
        tracing::info!(%article_id, "article deleted");
        Ok(())
    }
}
