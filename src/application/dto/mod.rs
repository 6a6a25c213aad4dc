pub mod articles;

pub use articles::{ArticleDto, ArticlePage};
