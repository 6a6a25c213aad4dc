use crate::domain::article::value_objects::{ArticleBody, ArticleTitle};
use crate::domain::errors::DomainError;
use std::fmt;

/// Raw article fields as submitted by a client, before any checks.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub body: String,
}

/// Article content that passed every field rule.
#[derive(Debug, Clone)]
pub struct ValidArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleField {
    Title,
    Body,
}

impl ArticleField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Body => "body",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ArticleField,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: ArticleField, err: DomainError) {
        let message = match err {
            DomainError::Validation(msg) => msg,
            other => other.to_string(),
        };
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn fields(&self) -> Vec<ArticleField> {
        self.0.iter().map(|err| err.field).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|err| err.message.clone()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Check every field and report all failures at once.
    pub fn validate(self) -> Result<ValidArticle, ValidationErrors> {
        match (ArticleTitle::new(self.title), ArticleBody::new(self.body)) {
            (Ok(title), Ok(body)) => Ok(ValidArticle { title, body }),
            (title, body) => {
                let mut errors = ValidationErrors::default();
                if let Err(err) = title {
                    errors.push(ArticleField::Title, err);
                }
                if let Err(err) = body {
                    errors.push(ArticleField::Body, err);
                }
                Err(errors)
            }
        }
    }
}
