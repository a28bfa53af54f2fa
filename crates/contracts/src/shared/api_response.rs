use serde::{Deserialize, Serialize};

/// Envelope the view endpoints wrap every payload in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Status code echoed by the server
    pub status_code: Option<i32>,
    /// Status or error message
    pub message: Option<String>,
    /// Payload, absent when the server reports a failure
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning a missing `data` into an error carrying the server message
    pub fn into_data(self) -> anyhow::Result<T> {
        match self.data {
            Some(data) => Ok(data),
            None => anyhow::bail!(
                "response has no data: {}",
                self.message.unwrap_or_else(|| "no message".to_string())
            ),
        }
    }
}
