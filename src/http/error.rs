use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Request error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::InvalidBody(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
