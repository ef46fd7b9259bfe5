use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use deck_types::{CardDefinition, CardPart};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/v1/cards", get(list_definitions))
        .route("/api/v1/cards/:name", get(get_definition))
}

async fn list_definitions() -> Json<Vec<CardDefinition>> {
    Json(CardPart::definitions().copied().collect())
}

async fn get_definition(Path(name): Path<String>) -> Response {
    match CardPart::from_name(&name) {
        Some(part) => Json(*part.definition()).into_response(),
        None => {
            tracing::debug!("no card definition named {name}");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("unknown card part: {name}"),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = routes()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lists_definitions_in_table_order() {
        let (status, body) = get_json("/api/v1/cards").await;
        assert_eq!(status, StatusCode::OK);

        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            [
                "Card",
                "CardHeader",
                "CardTitle",
                "CardDescription",
                "CardContent",
                "CardFooter"
            ]
        );
    }

    #[tokio::test]
    async fn returns_a_single_definition() {
        let (status, body) = get_json("/api/v1/cards/CardTitle").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "name": "CardTitle",
                "tag": "h2",
                "default_class": "font-semibold leading-none tracking-tight",
            })
        );
    }

    #[tokio::test]
    async fn unknown_part_is_not_found() {
        let (status, body) = get_json("/api/v1/cards/CardBody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown card part: CardBody");
    }
}
