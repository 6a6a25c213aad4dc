use std::sync::Arc;

use crate::domain::article::ArticleGateway;

pub struct ArticleQueryService {
    pub(super) gateway: Arc<dyn ArticleGateway>,
}

impl ArticleQueryService {
    pub fn new(gateway: Arc<dyn ArticleGateway>) -> Self {
        Self { gateway }
    }
}
