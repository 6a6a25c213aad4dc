// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{
    ArticleForm, ArticleIdParam, CursorParam, RequireBasicAuth,
};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::render_markdown;
use axum::{Extension, Json};
use serde::Serialize;

/// Response body of create and update.
#[derive(Debug, Serialize)]
pub struct ArticleOutput {
    pub article: Option<ArticleDto>,
    pub message: String,
    pub validation_errors: Vec<String>,
}

impl ArticleOutput {
    fn saved(article: ArticleDto, message: String) -> Self {
        Self {
            article: Some(article),
            message,
            validation_errors: Vec::new(),
        }
    }
}

/// Rendered body returned to the form's preview pane.
#[derive(Debug, Serialize)]
pub struct PreviewOutput {
    pub html: String,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    CursorParam(cursor): CursorParam,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery { cursor })
        .await
        .into_http()
        .map(|page| Json(page.articles))
}

pub async fn create_article(
    _auth: RequireBasicAuth,
    Extension(state): Extension<HttpState>,
    ArticleForm(payload): ArticleForm,
) -> HttpResult<Json<ArticleOutput>> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    let message = format!("Article {} is created.", article.id);
    Ok(Json(ArticleOutput::saved(article, message)))
}

pub async fn update_article(
    _auth: RequireBasicAuth,
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
    ArticleForm(payload): ArticleForm,
) -> HttpResult<Json<ArticleOutput>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        body: payload.body,
    };

    let article = state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;

    let message = format!("Article {} is updated.", article.id);
    Ok(Json(ArticleOutput::saved(article, message)))
}

pub async fn delete_article(
    _auth: RequireBasicAuth,
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Json<String>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(format!("Article {id} is deleted.")))
}

/// Render a draft body without storing it. Only the body is used, so an
/// incomplete draft can still be previewed.
pub async fn preview_article(
    _auth: RequireBasicAuth,
    ArticleForm(payload): ArticleForm,
) -> Json<PreviewOutput> {
    Json(PreviewOutput {
        html: render_markdown(&payload.body),
    })
}
