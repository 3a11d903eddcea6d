//! Sending the finished form.
use std::future::Future;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use ecoleta_shared::models::CreatePointRequest;

use crate::api;
use crate::Route;

pub const CREATED_MESSAGE: &str = "Ponto de coleta criado!";

/// Side effects of a submission: the request itself, the confirmation and the
/// navigation away from the form.
pub trait PointSubmitter {
    fn create_point(&self, payload: &CreatePointRequest) -> impl Future<Output = Result<(), String>>;
    fn confirm(&self, message: &str);
    fn go_home(&self);
}

/// Post `payload` once. On success confirm and go back home; on failure
/// nothing else happens and the error is returned.
pub async fn submit_point<S: PointSubmitter>(
    submitter: &S,
    payload: CreatePointRequest,
) -> Result<(), String> {
    submitter.create_point(&payload).await?;
    submitter.confirm(CREATED_MESSAGE);
    submitter.go_home();
    Ok(())
}

/// Posts to the backend, confirms with a blocking alert and pushes the home route.
pub struct BrowserSubmitter {
    pub navigator: Navigator,
}

impl PointSubmitter for BrowserSubmitter {
    async fn create_point(&self, payload: &CreatePointRequest) -> Result<(), String> {
        api::create_point(payload).await
    }

    fn confirm(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(message).ok();
        }
    }

    fn go_home(&self) {
        self.navigator.push(Route::Home {});
    }
}
