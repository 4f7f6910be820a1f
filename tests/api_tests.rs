use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "acoes-backend");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_rota_desconhecida_retorna_404() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nao-existe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inscricao_rejeitada_tem_codigo_e_datas() {
    // espelha o contrato de rejeição do checador de elegibilidade:
    // 409 com code + datas para o frontend montar a mensagem
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/inscricao")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "cidadao_id": "00000000-0000-0000-0000-000000000001",
                        "oferta_id": "00000000-0000-0000-0000-000000000002"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "PERIODICITY_NOT_ELAPSED");
    assert!(body["details"]["previous_date"].is_string());
    assert!(body["details"]["next_eligible_date"].is_string());
}

// App de teste com a mesma forma de resposta da API real
fn create_test_app() -> axum::Router {
    axum::Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "service": "acoes-backend",
                    "status": "healthy",
                }))
            }),
        )
        .route(
            "/api/inscricao",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "error": "Enrollment Rejected",
                        "message": "Periodicidade não cumprida; próxima data elegível em 15/07/2026",
                        "code": "PERIODICITY_NOT_ELAPSED",
                        "details": {
                            "code": "PERIODICITY_NOT_ELAPSED",
                            "previous_date": "2026-01-15",
                            "next_eligible_date": "2026-07-15"
                        }
                    })),
                )
            }),
        )
}
