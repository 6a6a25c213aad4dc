// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::error::ApplicationError,
    domain::article::{ArticleDraft, ArticleGateway, ValidArticle},
};

pub struct ArticleCommandService {
    pub(super) gateway: Arc<dyn ArticleGateway>,
}

impl ArticleCommandService {
    pub fn new(gateway: Arc<dyn ArticleGateway>) -> Self {
        Self { gateway }
    }

    pub(super) fn validate(&self, draft: ArticleDraft) -> Result<ValidArticle, ApplicationError> {
        draft.validate().map_err(|errors| {
            tracing::info!(fields = ?errors.fields(), "article submission rejected: {errors}");
            ApplicationError::Validation(errors)
        })
    }
}
