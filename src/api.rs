//! Network seam: one JSON POST to the configured complaint endpoint.

use gloo_net::http::Request;

use crate::form::{http_error_message, is_success_status, network_error_message};
use crate::types::ComplaintRequest;

/// Endpoint the form posts to, baked in at build time. An unset variable is
/// accepted and simply produces requests against an empty URL.
pub fn endpoint() -> &'static str {
    option_env!("COMPLAINTS_API_ENDPOINT").unwrap_or("")
}

/// POST the complaint as JSON. The error string is the user-facing message:
/// the status line for a rejected response (body unread), the transport
/// error's description otherwise.
pub async fn submit_complaint(request: &ComplaintRequest) -> Result<(), String> {
    let response = Request::post(endpoint())
        .json(request)
        .map_err(|e| network_error_message(&e.to_string()))?
        .send()
        .await
        .map_err(|e| network_error_message(&e.to_string()))?;

    if is_success_status(response.status()) {
        Ok(())
    } else {
        Err(http_error_message(response.status(), &response.status_text()))
    }
}
