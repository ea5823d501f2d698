//! Text-completion provider abstraction and implementations.
//!
//! A trait-based seam so the OpenAI backend can be swapped for a mock
//! in tests without touching the handler pipeline.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Completion returned no content")]
    EmptyResponse,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a completion call.
pub struct ProviderResponse {
    /// Generated text. Never empty; an empty completion is surfaced as
    /// [`ProviderError::EmptyResponse`].
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

/// Generation parameters for completion requests.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Maximum output tokens.
    pub max_tokens: Option<i32>,

    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,
}

/// Trait for text completion providers (e.g., OpenAI).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text completion for the prompt.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
