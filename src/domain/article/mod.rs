pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::Article;
pub use repository::ArticleGateway;
pub use validation::{ArticleDraft, ArticleField, FieldError, ValidArticle, ValidationErrors};
pub use value_objects::{
    ARTICLE_PAGE_SIZE, ARTICLE_TITLE_MAX_CHARS, ArticleBody, ArticleCursor, ArticleId,
    ArticleTitle,
};
