//! Welcome endpoint.

use crate::models::health::WelcomeResponse;
use axum::Json;

/// Welcome handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "message": "Welcome to Docker API AWS",
///   "status": "running"
/// }
/// ```
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new())
}
