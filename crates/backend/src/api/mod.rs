mod error;

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use ecoleta_shared::models::{CreatePointRequest, Item, Point, PointDetail};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::storage::Storage;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub storage: Arc<Storage>,
}

/// Query string of `GET /points`. `items` is a comma-separated id list.
#[derive(Debug, Default, Deserialize)]
pub struct PointFilter {
    pub uf: Option<String>,
    pub city: Option<String>,
    pub items: Option<String>,
}

impl PointFilter {
    fn item_ids(&self) -> Result<Vec<u32>, ApiError> {
        parse_item_ids(self.items.as_deref().unwrap_or(""))
    }

    fn matches(&self, point: &Point, item_ids: &[u32]) -> bool {
        self.uf.as_deref().is_none_or(|uf| point.uf == uf)
            && self.city.as_deref().is_none_or(|city| point.city == city)
            && point.serves_any(item_ids)
    }
}

fn parse_item_ids(raw: &str) -> Result<Vec<u32>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| ApiError::InvalidFilter(format!("item id {s:?}")))
        })
        .collect()
}

async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.catalog.items())
}

async fn create_point(
    State(state): State<AppState>,
    Json(req): Json<CreatePointRequest>,
) -> Result<(StatusCode, Json<Point>), ApiError> {
    if let Some(&unknown) = req.items.iter().find(|id| !state.catalog.contains(**id)) {
        return Err(ApiError::UnknownItem(unknown));
    }

    let now = chrono::Utc::now().to_rfc3339();
    let point = Point::from_request(uuid::Uuid::new_v4(), req, now);
    state.storage.save_point(&point)?;

    tracing::info!(
        id = %point.id,
        uf = %point.uf,
        city = %point.city,
        items = point.items.len(),
        "Created collection point"
    );
    Ok((StatusCode::CREATED, Json(point)))
}

async fn show_point(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointDetail>, ApiError> {
    let point = state.storage.get_point(&id)?.ok_or(ApiError::NotFound)?;
    let items = state.catalog.items_for(&point.items);
    Ok(Json(PointDetail { point, items }))
}

async fn list_points(
    State(state): State<AppState>,
    Query(filter): Query<PointFilter>,
) -> Result<Json<Vec<Point>>, ApiError> {
    let item_ids = filter.item_ids()?;
    let points = state
        .storage
        .list_points()?
        .into_iter()
        .filter(|p| filter.matches(p, &item_ids))
        .collect();
    Ok(Json(points))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list_items))
        .route("/points", get(list_points).post(create_point))
        .route("/points/{id}", get(show_point))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use ecoleta_shared::models::CatalogItem;
    use tower::ServiceExt;

    fn test_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(&dir.path().join("points.redb")).unwrap();
        let catalog = Catalog::new(
            vec![
                CatalogItem { id: 1, title: "Lâmpadas".into(), image: "lampadas.svg".into() },
                CatalogItem { id: 2, title: "Pilhas e Baterias".into(), image: "baterias.svg".into() },
                CatalogItem { id: 3, title: "Papéis e Papelão".into(), image: "papeis-papelao.svg".into() },
            ],
            "http://localhost:3333",
        );
        (
            dir,
            AppState {
                catalog: Arc::new(catalog),
                storage,
            },
        )
    }

    fn payload(uf: &str, city: &str, items: &[u32]) -> serde_json::Value {
        serde_json::json!({
            "name": "Ecoponto",
            "email": "eco@example.com",
            "whatsapp": "11999990000",
            "uf": uf,
            "city": city,
            "latitude": -23.55,
            "longitude": -46.63,
            "items": items,
        })
    }

    fn post_point(body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/points")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_items() {
        let (_dir, state) = test_state();
        let resp = router(state).oneshot(get("/items")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["id"], 1);
        assert_eq!(body[0]["title"], "Lâmpadas");
        assert_eq!(body[0]["image_url"], "http://localhost:3333/uploads/lampadas.svg");
    }

    #[tokio::test]
    async fn test_create_point() {
        let (_dir, state) = test_state();
        let storage = state.storage.clone();
        let resp = router(state)
            .oneshot(post_point(&payload("SP", "Campinas", &[1, 3])))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = json_body(resp).await;
        assert_eq!(body["city"], "Campinas");
        assert_eq!(body["items"], serde_json::json!([1, 3]));
        assert!(body["id"].as_str().is_some());
        assert_eq!(storage.count_points().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_point_accepts_untouched_form() {
        let (_dir, state) = test_state();
        let body = serde_json::json!({
            "name": "", "email": "", "whatsapp": "",
            "uf": "0", "city": "0",
            "latitude": 0.0, "longitude": 0.0,
            "items": [],
        });
        let resp = router(state).oneshot(post_point(&body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_point_rejects_unknown_item() {
        let (_dir, state) = test_state();
        let storage = state.storage.clone();
        let resp = router(state)
            .oneshot(post_point(&payload("SP", "Santos", &[1, 42])))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["error"], "unknown item id 42");
        assert_eq!(storage.count_points().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_show_point_includes_items() {
        let (_dir, state) = test_state();
        let app = router(state);
        let created = app
            .clone()
            .oneshot(post_point(&payload("SP", "Santos", &[2])))
            .await
            .unwrap();
        let id = json_body(created).await["id"].as_str().unwrap().to_string();

        let resp = app.oneshot(get(&format!("/points/{id}"))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["point"]["city"], "Santos");
        assert_eq!(body["items"][0]["title"], "Pilhas e Baterias");
    }

    #[tokio::test]
    async fn test_show_missing_point() {
        let (_dir, state) = test_state();
        let resp = router(state)
            .oneshot(get("/points/00000000-0000-0000-0000-000000000000"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_points_filters() {
        let (_dir, state) = test_state();
        let app = router(state);
        for (uf, city, items) in [
            ("SP", "Campinas", vec![1]),
            ("SP", "Santos", vec![2, 3]),
            ("RJ", "Niterói", vec![3]),
        ] {
            let resp = app
                .clone()
                .oneshot(post_point(&payload(uf, city, &items)))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let all = json_body(app.clone().oneshot(get("/points")).await.unwrap()).await;
        assert_eq!(all.as_array().unwrap().len(), 3);

        let sp = json_body(app.clone().oneshot(get("/points?uf=SP")).await.unwrap()).await;
        assert_eq!(sp.as_array().unwrap().len(), 2);

        let paper = json_body(
            app.clone()
                .oneshot(get("/points?uf=SP&items=3"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(paper.as_array().unwrap().len(), 1);
        assert_eq!(paper[0]["city"], "Santos");

        let lamps_or_paper =
            json_body(app.oneshot(get("/points?items=1,3")).await.unwrap()).await;
        assert_eq!(lamps_or_paper.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_points_rejects_bad_item_filter() {
        let (_dir, state) = test_state();
        let resp = router(state).oneshot(get("/points?items=1,abc")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_item_ids() {
        assert_eq!(parse_item_ids("").unwrap(), Vec::<u32>::new());
        assert_eq!(parse_item_ids("1, 2,,3").unwrap(), vec![1, 2, 3]);
        assert!(parse_item_ids("x").is_err());
    }
}
