use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

/// The touch game page. Carries no fields so the template is rendered without context.
#[derive(Template)]
#[template(path = "touch/index.html")]
pub(super) struct IndexTemplate;

pub(super) async fn get() -> impl IntoResponse {
    match IndexTemplate.render() {
        Ok(render) => Html(render).into_response(),
        Err(error) => {
            tracing::error!("Error rendering index: {error}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        crate::app(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
    }

    async fn send(method: Method, uri: &str) -> axum::response::Response {
        app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[rstest]
    #[case("/")]
    #[case("/touch/")]
    #[tokio::test]
    async fn get_renders_index_template(#[case] uri: &str) {
        let response = send(Method::GET, uri).await;

        assert_eq!(StatusCode::OK, response.status());
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert_eq!(mime::TEXT_HTML_UTF_8.as_ref(), content_type);

        let expected = IndexTemplate.render().unwrap();
        assert_eq!(expected, body_string(response).await);
    }

    #[tokio::test]
    async fn repeated_requests_return_same_page() {
        let first = body_string(send(Method::GET, "/touch/").await).await;
        let second = body_string(send(Method::GET, "/touch/").await).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn ignores_query_and_headers() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/touch/?level=3&debug=true")
                    .header(header::ACCEPT, "application/json")
                    .body(Body::from("ignored"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(StatusCode::OK, response.status());
        assert_eq!(IndexTemplate.render().unwrap(), body_string(response).await);
    }

    #[tokio::test]
    async fn head_has_no_body() {
        let response = send(Method::HEAD, "/touch/").await;

        assert_eq!(StatusCode::OK, response.status());
        assert!(body_string(response).await.is_empty());
    }

    #[rstest]
    #[case(Method::POST)]
    #[case(Method::PUT)]
    #[case(Method::DELETE)]
    #[tokio::test]
    async fn other_methods_are_not_allowed(#[case] method: Method) {
        let response = send(method, "/touch/").await;

        assert_eq!(StatusCode::METHOD_NOT_ALLOWED, response.status());
        let allow = response.headers()[header::ALLOW].to_str().unwrap();
        assert!(allow.contains("GET"), "Allow header was {allow}");
    }

    #[test]
    fn template_has_game_canvas_and_script() {
        let render = IndexTemplate.render().unwrap();

        assert!(render.contains(r#"id="a_canvas""#));
        assert!(render.contains("/static/js/main.js"));
    }
}
