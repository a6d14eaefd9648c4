//! Padron API Routes
//!
//! - /personas - Persona registry CRUD
//! - /personas/{regiones,sexo,nombre,comuna}/... - single-field filters (extended)
//! - /personas/filtrar - combined filter (extended)
//! - /health - liveness
//! - /swagger-ui - OpenAPI browser

pub mod filter;
pub mod health;
pub mod persona;
pub mod swagger;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa_swagger_ui::SwaggerUi;

use padron::DomainError;

use crate::AppState;

/// Integer path/query values; anything else is treated as "no such value"
pub(crate) fn parse_int(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

/// Misses become 404 with `not_found` as the text body, the rest 500
pub(crate) fn error_response(err: DomainError, not_found: &str) -> (StatusCode, String) {
    if err.is_not_found() {
        (StatusCode::NOT_FOUND, not_found.to_string())
    } else {
        tracing::error!("Request failed: {}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

/// Assemble the full application router for the configured variant
pub fn build_router(state: AppState) -> Router {
    let mut api = persona::router();
    if state.variant.has_filters() {
        api = api.merge(filter::router());
    }

    let openapi = swagger::api_doc(state.variant);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health::health_check))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiVariant;
    use crate::models::PersonaResponse;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use axum::response::Response;
    use tower::ServiceExt;

    fn app(variant: ApiVariant) -> Router {
        build_router(AppState::seeded(variant))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn get(app: &Router, uri: &str) -> Response {
        send(app, Method::GET, uri, None).await
    }

    async fn text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn ids(response: Response) -> Vec<i32> {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let personas: Vec<PersonaResponse> = serde_json::from_slice(&bytes).unwrap();
        personas.iter().map(|p| p.id).collect()
    }

    fn body(id: i32, nombre: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "nombre": nombre,
            "region": {"id": 13, "region": "Metropolitana", "comuna": "Maipu"},
            "sexo": "mujer"
        })
    }

    #[tokio::test]
    async fn test_list_returns_seed_in_order() {
        let app = app(ApiVariant::Extended);
        let response = get(&app, "/personas").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(ids(response).await, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_get_every_seed_id() {
        let app = app(ApiVariant::Extended);
        for id in 1..=5 {
            let response = get(&app, &format!("/personas/{}", id)).await;
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let persona: PersonaResponse = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(persona.id, id);
        }
    }

    #[tokio::test]
    async fn test_get_missing_id_wording_per_variant() {
        let response = get(&app(ApiVariant::Basic), "/personas/99").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, "Persona no encontrada");

        let response = get(&app(ApiVariant::Extended), "/personas/99").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, "persona no encontrada");
    }

    #[tokio::test]
    async fn test_non_integer_id_is_not_found() {
        let app = app(ApiVariant::Extended);
        let response = get(&app, "/personas/uno").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, Method::DELETE, "/personas/uno", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, "Persona no encontrada");
    }

    #[tokio::test]
    async fn test_create_appends_and_is_retrievable() {
        let app = app(ApiVariant::Extended);
        let response = send(&app, Method::POST, "/personas", Some(body(6, "Rosa Diaz"))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(text(response).await, "Persona creada");

        assert_eq!(ids(get(&app, "/personas").await).await, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(get(&app, "/personas/6").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_rejects_incomplete_body() {
        let app = app(ApiVariant::Extended);
        let incomplete = serde_json::json!({"id": 7, "nombre": "Sin Region"});
        let response = send(&app, Method::POST, "/personas", Some(incomplete)).await;
        assert!(response.status().is_client_error());
        assert_eq!(ids(get(&app, "/personas").await).await.len(), 5);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_keeps_id() {
        let app = app(ApiVariant::Basic);
        let response = send(&app, Method::PUT, "/personas/3", Some(body(30, "Catalina Soto"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(text(response).await, "Persona actualizada");

        let bytes = to_bytes(get(&app, "/personas/3").await.into_body(), usize::MAX)
            .await
            .unwrap();
        let persona: PersonaResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(persona.id, 3);
        assert_eq!(persona.nombre, "Catalina Soto");
        assert_eq!(persona.region.comuna, "Maipu");
        assert_eq!(get(&app, "/personas/30").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_wording_extended() {
        let app = app(ApiVariant::Extended);
        let response = send(&app, Method::PUT, "/personas/1", Some(body(1, "Gian Ricci"))).await;
        assert_eq!(text(response).await, "persona actualizada");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_and_unchanged() {
        let app = app(ApiVariant::Extended);
        let response = send(&app, Method::PUT, "/personas/77", Some(body(77, "Nadie"))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, "Persona no encontrada");
        assert_eq!(ids(get(&app, "/personas").await).await, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_update_missing_id_ignores_bad_body() {
        let app = app(ApiVariant::Extended);

        let response = send(&app, Method::PUT, "/personas/77", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, "Persona no encontrada");

        let partial = serde_json::json!({"nombre": "x"});
        let response = send(&app, Method::PUT, "/personas/77", Some(partial)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, "Persona no encontrada");
    }

    #[tokio::test]
    async fn test_update_known_id_rejects_bad_body() {
        let app = app(ApiVariant::Basic);

        let partial = serde_json::json!({"nombre": "x"});
        let response = send(&app, Method::PUT, "/personas/1", Some(partial)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = send(&app, Method::PUT, "/personas/1", None).await;
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        assert_eq!(ids(get(&app, "/personas").await).await, vec![1, 2, 3, 4, 5]);
        let bytes = to_bytes(get(&app, "/personas/1").await.into_body(), usize::MAX)
            .await
            .unwrap();
        let persona: PersonaResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(persona.nombre, "Giancarlos Ricci");
    }

    #[tokio::test]
    async fn test_delete_removes_first_match_only() {
        let app = app(ApiVariant::Extended);
        send(&app, Method::POST, "/personas", Some(body(2, "Otra Dos"))).await;

        let response = send(&app, Method::DELETE, "/personas/2", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(text(response).await.is_empty());

        assert_eq!(ids(get(&app, "/personas").await).await, vec![1, 3, 4, 5, 2]);
        let bytes = to_bytes(get(&app, "/personas/2").await.into_body(), usize::MAX)
            .await
            .unwrap();
        let persona: PersonaResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(persona.nombre, "Otra Dos");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let app = app(ApiVariant::Basic);
        assert_eq!(
            send(&app, Method::DELETE, "/personas/4", None).await.status(),
            StatusCode::NO_CONTENT
        );
        assert_eq!(get(&app, "/personas/4").await.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            send(&app, Method::DELETE, "/personas/4", None).await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ids(get(&app, "/personas").await).await, vec![1, 2, 3, 5]);
    }

    #[tokio::test]
    async fn test_sexo_filter_ignores_case() {
        let response = get(&app(ApiVariant::Extended), "/personas/sexo/HOMBRE").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(ids(response).await, vec![1, 2, 5]);
    }

    #[tokio::test]
    async fn test_comuna_filter_ignores_case() {
        let response = get(&app(ApiVariant::Extended), "/personas/comuna/puente_alto").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(ids(response).await, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_nombre_filter_is_substring() {
        let response = get(&app(ApiVariant::Extended), "/personas/nombre/LOPEZ").await;
        assert_eq!(ids(response).await, vec![4]);
    }

    #[tokio::test]
    async fn test_region_filter() {
        let app = app(ApiVariant::Extended);
        assert_eq!(ids(get(&app, "/personas/regiones/5").await).await, vec![5]);

        let response = get(&app, "/personas/regiones/cinco").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, "No se encontraron personas con esa región");
    }

    #[tokio::test]
    async fn test_empty_filters_are_not_found() {
        let app = app(ApiVariant::Extended);
        let cases = [
            ("/personas/regiones/42", "No se encontraron personas con esa región"),
            ("/personas/sexo/otro", "No se encontraron personas con ese sexo"),
            ("/personas/nombre/zzz", "no hay personas con ese nombre"),
            ("/personas/comuna/Arica", "no hay personas con esa comuna"),
            ("/personas/filtrar?sexo=otro", "No se encontraron personas con esos fitros"),
        ];
        for (uri, expected) in cases {
            let response = get(&app, uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(text(response).await, expected);
        }
    }

    #[tokio::test]
    async fn test_filtrar_without_params_returns_all() {
        let response = get(&app(ApiVariant::Extended), "/personas/filtrar").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(ids(response).await, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_filtrar_combines_criteria() {
        let app = app(ApiVariant::Extended);
        let response = get(&app, "/personas/filtrar?nombre=ricci&sexo=HOMBRE&regionId=2").await;
        assert_eq!(ids(response).await, vec![2]);

        // An unparsable regionId places no constraint
        let response = get(&app, "/personas/filtrar?nombre=ricci&regionId=x").await;
        assert_eq!(ids(response).await, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_filtrar_repeated_param_uses_first() {
        let app = app(ApiVariant::Extended);
        let response = get(&app, "/personas/filtrar?sexo=mujer&sexo=hombre").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(ids(response).await, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_filters_see_mutations() {
        let app = app(ApiVariant::Extended);
        send(&app, Method::POST, "/personas", Some(body(6, "Rosa Diaz"))).await;
        let response = get(&app, "/personas/comuna/MAIPU").await;
        assert_eq!(ids(response).await, vec![6]);
    }

    #[tokio::test]
    async fn test_basic_variant_has_no_filters() {
        let app = app(ApiVariant::Basic);
        assert_eq!(
            get(&app, "/personas/sexo/hombre").await.status(),
            StatusCode::NOT_FOUND
        );

        // Falls through to the id route with a non-integer id
        let response = get(&app, "/personas/filtrar").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(text(response).await, "Persona no encontrada");
    }

    #[tokio::test]
    async fn test_health_reports_count() {
        let app = app(ApiVariant::Basic);
        let response = get(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["variant"], "basic");
        assert_eq!(json["personas"], 5);
    }

    #[tokio::test]
    async fn test_concurrent_requests_linearize() {
        let app = app(ApiVariant::Extended);

        let handles: Vec<_> = (100..140)
            .map(|id| {
                let app = app.clone();
                tokio::spawn(async move {
                    send(&app, Method::POST, "/personas", Some(body(id, "Concurrente"))).await
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap().status(), StatusCode::CREATED);
        }

        let response = get(&app, "/personas/nombre/concurrente").await;
        assert_eq!(ids(response).await.len(), 40);
    }
}
