// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleDraft,
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let valid = self.validate(ArticleDraft::new(command.title, command.body))?;

        let created = self.gateway.create(valid).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
