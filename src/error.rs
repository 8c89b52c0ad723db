use thiserror::Error;

pub type Result<T, E = ForecastError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ForecastError {
    /// The provider could not be reached, or its reply could not be read.
    #[error("Unexpected error when trying to communicate to StormGlass: {0}")]
    ProviderRequest(String),

    /// The provider answered with a non-success status.
    #[error("Unexpected error returned by the StormGlass service: Error: {body} Code: {status}")]
    ProviderResponse { status: u16, body: String },

    #[error("Unexpected error during the forecast processing: {0}")]
    ForecastProcessing(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ForecastError {
    fn from(err: reqwest::Error) -> Self {
        ForecastError::ProviderRequest(err.to_string())
    }
}
