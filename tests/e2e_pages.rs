use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

async fn seed(app: &axum::Router, title: &str, body: &str) {
    let req = support::json_request("POST", "/api/articles", &json!({ "title": title, "body": body }));
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

fn assert_html(resp: &axum::response::Response) {
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("text/html"), "unexpected content-type: {ct}");
}

#[tokio::test]
async fn e2e_index_renders_newest_first_on_both_paths() {
    let app = support::make_test_router().await;
    seed(&app, "Hello", "World").await;
    seed(&app, "Second", "Post").await;

    for uri in ["/", "/articles"] {
        let resp = app.clone().oneshot(support::get(uri)).await.unwrap();
        assert_html(&resp);
        let (status, html) = support::to_text(resp).await;
        assert_eq!(status, StatusCode::OK);
        let second = html.find("Second").expect("Second rendered");
        let hello = html.find("Hello").expect("Hello rendered");
        assert!(second < hello, "newest article must come first");
        assert!(html.contains("articles__item-2"));
        assert!(html.contains(r#"data-cursor="1""#));
    }
}

#[tokio::test]
async fn e2e_index_without_articles_renders_empty_state() {
    let app = support::make_test_router().await;

    let (status, html) = support::to_text(app.oneshot(support::get("/")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No articles yet."));
    assert!(html.contains(r#"data-cursor="0""#));
    assert!(!html.contains("Load more"));
}

#[tokio::test]
async fn e2e_show_renders_markdown_body() {
    let app = support::make_test_router().await;
    seed(&app, "Hello", "# Heading\n\n**bold** <b>raw</b>").await;

    let resp = app.oneshot(support::get("/articles/1")).await.unwrap();
    assert_html(&resp);
    let (status, html) = support::to_text(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Hello"));
    assert!(html.contains("<h1>Heading</h1>"));
    assert!(html.contains("<strong>bold</strong>"));
    assert!(!html.contains("<b>raw</b>"));
    assert!(html.contains(r#"href="/articles/1/edit""#));
    assert!(!html.contains("article__updated"));
}

#[tokio::test]
async fn e2e_show_marks_edited_articles() {
    let app = support::make_test_router().await;
    seed(&app, "Hello", "World").await;
    let req = support::json_request("PATCH", "/api/articles/1", &json!({ "title": "Hello", "body": "Again" }));
    assert_eq!(app.clone().oneshot(req).await.unwrap().status(), StatusCode::OK);

    let (status, html) =
        support::to_text(app.oneshot(support::get("/articles/1")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("article__updated"));
}

#[tokio::test]
async fn e2e_show_unknown_article_returns_404() {
    let app = support::make_test_router().await;

    let resp = app.clone().oneshot(support::get("/articles/9")).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = app.oneshot(support::get("/articles/0")).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_new_form_requires_credentials() {
    let app = support::make_test_router().await;

    let resp = app.clone().oneshot(support::get("/articles/new")).await.unwrap();
    assert!(resp.headers().contains_key("www-authenticate"));
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let (status, html) =
        support::to_text(app.oneshot(support::authed_get("/articles/new")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-method="POST""#));
    assert!(html.contains(r#"data-action="/api/articles""#));
}

#[tokio::test]
async fn e2e_edit_form_is_prefilled() {
    let app = support::make_test_router().await;
    seed(&app, "Hello", "World").await;

    let resp = app.clone().oneshot(support::get("/articles/1/edit")).await.unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let (status, html) =
        support::to_text(app.clone().oneshot(support::authed_get("/articles/1/edit")).await.unwrap())
            .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"value="Hello""#));
    assert!(html.contains(">World</textarea>"));
    assert!(html.contains(r#"data-action="/api/articles/1""#));

    let resp = app.oneshot(support::authed_get("/articles/5/edit")).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn e2e_health_reports_ok() {
    let app = support::make_test_router().await;

    let (status, _, json) = support::to_json(app.oneshot(support::get("/health")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "ok" }));
}

#[tokio::test]
async fn e2e_index_offers_more_after_a_full_page() {
    let app = support::make_test_router().await;
    for n in 1..=11 {
        seed(&app, &format!("post {n}"), "body").await;
    }

    let (status, html) = support::to_text(app.oneshot(support::get("/")).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Load more"));
    assert!(html.contains(r#"data-cursor="2""#));
    assert!(!html.contains("articles__item-1\""));
}
