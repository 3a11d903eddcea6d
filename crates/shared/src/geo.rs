//! Geography helpers: map coordinates, tile source, and the IBGE locality service.
use serde::{Deserialize, Serialize};

use crate::models::{CityResponse, UfResponse, UNSELECTED};

/// Zoom level the point map is rendered at.
pub const MAP_ZOOM: f64 = 15.0;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

pub const IBGE_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// A WGS84 coordinate in degrees. Defaults to `(0, 0)`, which is where the map
/// sits until the device reports a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LatLng { latitude, longitude }
    }
}

pub fn states_url() -> String {
    format!("{}/estados", IBGE_BASE_URL)
}

/// Municipality list URL for `uf`, or `None` when no state is selected.
pub fn cities_url(uf: &str) -> Option<String> {
    if uf == UNSELECTED || uf.is_empty() {
        return None;
    }
    Some(format!("{}/estados/{}/municipios", IBGE_BASE_URL, uf))
}

pub fn uf_codes(states: Vec<UfResponse>) -> Vec<String> {
    states.into_iter().map(|s| s.sigla).collect()
}

pub fn city_names(cities: Vec<CityResponse>) -> Vec<String> {
    cities.into_iter().map(|c| c.nome).collect()
}
