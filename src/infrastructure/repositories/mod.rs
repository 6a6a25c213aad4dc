// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;

pub use error::map_sqlx;
pub use sqlite_article::SqliteArticleGateway;
