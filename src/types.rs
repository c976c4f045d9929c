//! Wire types for the complaint endpoint.

use serde::Serialize;

/// Outbound payload for one submission.
///
/// The complaint text travels as `message` on the wire; only the form
/// field is called "complaint".
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}
