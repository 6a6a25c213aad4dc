// src/presentation/http/views.rs
use crate::application::{
    dto::{ArticleDto, ArticlePage},
    error::ApplicationError,
};
use crate::domain::article::ARTICLE_PAGE_SIZE;
use crate::presentation::http::error::{HttpError, HttpResult};
use axum::response::Html;
use chrono::DateTime;
use handlebars::{Handlebars, TemplateError};
use serde::Serialize;

const HEADER: &str = include_str!("../../../templates/partials/header.hbs");
const FOOTER: &str = include_str!("../../../templates/partials/footer.hbs");
const INDEX: &str = include_str!("../../../templates/article/index.hbs");
const SHOW: &str = include_str!("../../../templates/article/show.hbs");
const FORM: &str = include_str!("../../../templates/article/form.hbs");

pub const INDEX_TEMPLATE: &str = "article/index";
pub const SHOW_TEMPLATE: &str = "article/show";
pub const FORM_TEMPLATE: &str = "article/form";

/// Data for the article list page.
#[derive(Debug, Serialize)]
pub struct IndexPage {
    pub articles: Vec<ArticleDto>,
    pub cursor: i64,
    /// A full page may have older articles behind it.
    pub has_more: bool,
}

impl IndexPage {
    pub fn new(page: ArticlePage) -> Self {
        let has_more = page.articles.len() >= ARTICLE_PAGE_SIZE as usize;
        Self {
            articles: page.articles,
            cursor: page.next_cursor,
            has_more,
        }
    }
}

/// Data for the article detail page.
#[derive(Debug, Serialize)]
pub struct ShowPage {
    pub article: ArticleDto,
    pub edited: bool,
}

impl ShowPage {
    pub fn new(article: ArticleDto) -> Self {
        let edited = article.updated > article.created;
        Self { article, edited }
    }
}

/// Data for the create and edit forms. The page only carries what the
/// client-side script needs to submit to the JSON API.
#[derive(Debug, Serialize)]
pub struct FormPage {
    pub heading: &'static str,
    pub method: &'static str,
    pub action: String,
    pub back: String,
    pub article: Option<ArticleDto>,
}

impl FormPage {
    pub fn new_article() -> Self {
        Self {
            heading: "New article",
            method: "POST",
            action: "/api/articles".into(),
            back: "/".into(),
            article: None,
        }
    }

    pub fn edit_article(article: ArticleDto) -> Self {
        Self {
            heading: "Edit article",
            method: "PATCH",
            action: format!("/api/articles/{}", article.id),
            back: format!("/articles/{}", article.id),
            article: Some(article),
        }
    }
}

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_helper("datetime", Box::new(datetime_helper));
        registry.register_helper("markdown", Box::new(markdown_helper));

        registry.register_partial("header", HEADER)?;
        registry.register_partial("footer", FOOTER)?;
        registry.register_template_string(INDEX_TEMPLATE, INDEX)?;
        registry.register_template_string(SHOW_TEMPLATE, SHOW)?;
        registry.register_template_string(FORM_TEMPLATE, FORM)?;

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> HttpResult<Html<String>> {
        self.registry.render(name, data).map(Html).map_err(|err| {
            tracing::error!(template = name, error = %err, "template rendering failed");
            HttpError::from_error(ApplicationError::infrastructure("template rendering failed"))
        })
    }
}

/// `{{datetime created}}` renders an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`.
fn datetime_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let raw = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => out.write(&ts.format("%Y-%m-%d %H:%M").to_string())?,
        Err(_) => out.write(raw)?,
    }
    Ok(())
}

/// Render an article body as HTML. Raw HTML in the source is dropped, so the
/// output is safe to embed unescaped.
pub fn render_markdown(source: &str) -> String {
    comrak::markdown_to_html(source, &comrak::Options::default())
}

/// `{{markdown article.body}}` writes the rendered body without escaping.
fn markdown_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let source = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(&render_markdown(source))?;
    Ok(())
}
