use crate::domain::article::entity::Article;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Number of articles returned by a single cursor page.
pub const ARTICLE_PAGE_SIZE: u32 = 10;

pub const ARTICLE_TITLE_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("article id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.contains('\0') {
            return Err(DomainError::Validation(
                "title cannot contain NUL characters".into(),
            ));
        }
        if value.chars().count() > ARTICLE_TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "title must be at most {ARTICLE_TITLE_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBody(String);

impl ArticleBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        // SQLite's length() stops at the first NUL.
        if value.contains('\0') {
            return Err(DomainError::Validation(
                "body cannot contain NUL characters".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exclusive upper bound for descending pagination over article ids.
///
/// Raw cursors travel as plain integers; any value `<= 0` means "start from
/// the newest article".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleCursor {
    #[default]
    Start,
    Before(ArticleId),
}

impl ArticleCursor {
    pub fn from_raw(raw: i64) -> Self {
        ArticleId::new(raw).map(Self::Before).unwrap_or(Self::Start)
    }

    /// Cursor for the page that follows `page`. An empty page yields
    /// [`ArticleCursor::Start`], which callers treat as end of list.
    pub fn after_page(page: &[Article]) -> Self {
        page.last()
            .map(|article| Self::Before(article.id))
            .unwrap_or(Self::Start)
    }

    pub fn upper_bound(&self) -> Option<ArticleId> {
        match self {
            Self::Start => None,
            Self::Before(id) => Some(*id),
        }
    }

    pub fn as_raw(&self) -> i64 {
        self.upper_bound().map(i64::from).unwrap_or(0)
    }
}
