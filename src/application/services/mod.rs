// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::articles::ArticleCommandService, queries::articles::ArticleQueryService},
    domain::article::ArticleGateway,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(article_gateway: Arc<dyn ArticleGateway>) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(&article_gateway)));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_gateway)));

        Self {
            article_commands,
            article_queries,
        }
    }
}
