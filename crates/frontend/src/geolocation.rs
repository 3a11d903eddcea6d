use ecoleta_shared::geo::LatLng;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationError {
    /// The browser exposes no geolocation API.
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    /// The callback fired with something that has no readable coordinates.
    Malformed,
}

impl std::fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeolocationError::Unsupported => write!(f, "geolocation unsupported"),
            GeolocationError::PermissionDenied => write!(f, "geolocation permission denied"),
            GeolocationError::PositionUnavailable => write!(f, "position unavailable"),
            GeolocationError::Timeout => write!(f, "geolocation timed out"),
            GeolocationError::Malformed => write!(f, "malformed position"),
        }
    }
}

/// Map a `GeolocationPositionError.code` to an error.
pub fn error_from_code(code: u16) -> GeolocationError {
    match code {
        1 => GeolocationError::PermissionDenied,
        2 => GeolocationError::PositionUnavailable,
        3 => GeolocationError::Timeout,
        _ => GeolocationError::Malformed,
    }
}

fn number_at(value: &JsValue, path: &[&str]) -> Option<f64> {
    let mut current = value.clone();
    for key in path {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(key)).ok()?;
    }
    current.as_f64()
}

/// Ask the device once for its current position.
pub async fn current_position() -> Result<LatLng, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(position) => {
            let latitude = number_at(&position, &["coords", "latitude"]);
            let longitude = number_at(&position, &["coords", "longitude"]);
            match (latitude, longitude) {
                (Some(lat), Some(lng)) => Ok(LatLng::new(lat, lng)),
                _ => Err(GeolocationError::Malformed),
            }
        }
        Err(err) => Err(number_at(&err, &["code"])
            .map(|code| error_from_code(code as u16))
            .unwrap_or(GeolocationError::Malformed)),
    }
}
