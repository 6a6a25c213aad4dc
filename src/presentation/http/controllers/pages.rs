use crate::application::queries::articles::{GetArticleByIdQuery, ListArticlesQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticleIdParam, RequireBasicAuth};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{
    FORM_TEMPLATE, FormPage, INDEX_TEMPLATE, IndexPage, SHOW_TEMPLATE, ShowPage,
};
use axum::{Extension, response::Html};

/// Newest page of articles. Later pages are fetched by the browser through
/// the JSON list endpoint using the rendered cursor.
pub async fn article_index(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let page = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery { cursor: 0 })
        .await
        .into_http()?;

    state.views.render(INDEX_TEMPLATE, &IndexPage::new(page))
}

pub async fn article_show(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Html<String>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    state.views.render(SHOW_TEMPLATE, &ShowPage::new(article))
}

pub async fn article_new(
    _auth: RequireBasicAuth,
    Extension(state): Extension<HttpState>,
) -> HttpResult<Html<String>> {
    state.views.render(FORM_TEMPLATE, &FormPage::new_article())
}

pub async fn article_edit(
    _auth: RequireBasicAuth,
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Html<String>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    state
        .views
        .render(FORM_TEMPLATE, &FormPage::edit_article(article))
}
