use serde::Serialize;

/// Acknowledgement body for DELETE endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
