use ecoleta_shared::geo;
use ecoleta_shared::models::{CityResponse, CreatePointRequest, Item, UfResponse};
use serde::Deserialize;

/// Join the backend origin and a resource path.
pub fn resource_url(origin: &str, resource: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        resource.trim_start_matches('/')
    )
}

fn api_url(resource: &str) -> String {
    // The backend serves the frontend, so it shares our origin.
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    resource_url(&origin, resource)
}

async fn get_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, String> {
    reqwest::Client::new()
        .get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_items() -> Result<Vec<Item>, String> {
    get_json(&api_url("items")).await
}

/// Send the point to the backend. The response body is not consumed.
pub async fn create_point(payload: &CreatePointRequest) -> Result<(), String> {
    reqwest::Client::new()
        .post(api_url("points"))
        .json(payload)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    Ok(())
}

pub async fn fetch_ufs() -> Result<Vec<String>, String> {
    let states: Vec<UfResponse> = get_json(&geo::states_url()).await?;
    Ok(geo::uf_codes(states))
}

/// Municipality names from a list URL built by [`geo::cities_url`].
pub async fn fetch_cities(url: &str) -> Result<Vec<String>, String> {
    let cities: Vec<CityResponse> = get_json(url).await?;
    Ok(geo::city_names(cities))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url() {
        assert_eq!(
            resource_url("http://localhost:3333", "items"),
            "http://localhost:3333/items"
        );
    }

    #[test]
    fn test_resource_url_trims_slashes() {
        assert_eq!(
            resource_url("https://ecoleta.example.com/", "/points"),
            "https://ecoleta.example.com/points"
        );
    }

    #[test]
    fn test_items_response_deserializes() {
        let json = r#"[{"id":1,"title":"Lâmpadas","image_url":"x"}]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].title, "Lâmpadas");
        assert_eq!(items[0].image_url, "x");
    }
}
