use serde::{Deserialize, Serialize};
#[cfg(feature = "uuid-support")]
use uuid::Uuid;

/// Region and city selectors start on this value, meaning "nothing chosen".
pub const UNSELECTED: &str = "0";

/// A recyclable-item category as served by `GET /items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// Catalog record as stored in `items.json`. The image is a file name under
/// the backend's uploads directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    pub image: String,
}

impl CatalogItem {
    /// Expose the record with an absolute image URL rooted at `public_url`.
    pub fn to_item(&self, public_url: &str) -> Item {
        Item {
            id: self.id,
            title: self.title.clone(),
            image_url: format!("{}/uploads/{}", public_url.trim_end_matches('/'), self.image),
        }
    }
}

/// Body of `POST /points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePointRequest {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}

#[cfg(feature = "uuid-support")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
    pub created_at: String,
}

#[cfg(feature = "uuid-support")]
impl Point {
    pub fn from_request(id: Uuid, req: CreatePointRequest, created_at: String) -> Self {
        Point {
            id,
            name: req.name,
            email: req.email,
            whatsapp: req.whatsapp,
            uf: req.uf,
            city: req.city,
            latitude: req.latitude,
            longitude: req.longitude,
            items: req.items,
            created_at,
        }
    }

    /// True when the point accepts at least one of `items`. An empty filter matches everything.
    pub fn serves_any(&self, items: &[u32]) -> bool {
        items.is_empty() || self.items.iter().any(|id| items.contains(id))
    }
}

#[cfg(feature = "uuid-support")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDetail {
    pub point: Point,
    pub items: Vec<Item>,
}

/// One entry of the IBGE state list. Only the abbreviation is consumed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UfResponse {
    pub sigla: String,
}

/// One entry of the IBGE municipality list. Only the name is consumed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityResponse {
    pub nome: String,
}
