//! REST helpers for the external authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since sessions only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `bool`/`Result` outputs instead of panics so a flaky auth
//! backend degrades to the signed-out UI rather than breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16) -> String {
    format!("logout failed: {status}")
}

/// Ask the auth backend whether the browser holds a live session.
///
/// Any 2xx response counts as signed in. Returns `false` on the server or
/// when the request cannot be sent.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn fetch_session_active(endpoint: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::get(endpoint).send().await {
            Ok(resp) => resp.ok(),
            Err(e) => {
                log::warn!("session probe failed: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// End the current session with `POST {endpoint}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend responds
/// with a non-OK status.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn logout(endpoint: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(logout_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
