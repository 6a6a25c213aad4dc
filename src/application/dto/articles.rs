use crate::domain::article::{Article, ArticleCursor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            body: article.body.into_inner(),
            created: article.created,
            updated: article.updated,
        }
    }
}

/// One page of articles, newest first, plus the raw cursor for the next page
/// (`0` once the list is exhausted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlePage {
    pub articles: Vec<ArticleDto>,
    pub next_cursor: i64,
}

impl ArticlePage {
    pub fn from_records(records: Vec<Article>) -> Self {
        let next_cursor = ArticleCursor::after_page(&records).as_raw();
        Self {
            articles: records.into_iter().map(Into::into).collect(),
            next_cursor,
        }
    }
}
