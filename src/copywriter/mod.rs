//! Copywriter
//!
//! Boundary to an external generative-text service, used by the admin panel
//! for product descriptions and blog ideation. The service is best-effort:
//! the degrading wrappers in this module convert every failure into a fixed
//! fallback value, so no error from the bridge ever reaches the shopper.

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

pub mod gemini;

pub use gemini::GeminiCopywriter;

/// Fixed description shown when generation fails.
pub const DESCRIPTION_FALLBACK: &str =
    "Error al generar descripción. Por favor intente manualmente.";

/// Placeholder description for a successful response that carried no text.
pub const DESCRIPTION_UNAVAILABLE: &str = "Descripción no disponible en este momento.";

/// Inputs for a product description request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductBrief {
    /// Product name
    pub product_name: String,

    /// Producer brand
    pub brand: String,

    /// Free-text tasting notes and qualities, e.g. `"frutado intenso"`
    pub nuances: String,
}

/// A generated blog article idea.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostIdea {
    /// Suggested headline
    pub title: String,

    /// Suggested teaser
    pub excerpt: String,
}

impl PostIdea {
    /// Fixed idea returned when generation fails.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            title: "Beneficios del Aceite de Oliva".to_string(),
            excerpt: "Descubre por qué es oro líquido.".to_string(),
        }
    }
}

/// Errors from the generative-text bridge.
///
/// These never escape the degrading wrappers; they exist so implementations
/// and tests can distinguish failure modes.
#[derive(Debug, Error)]
pub enum CopywriterError {
    /// `GEMINI_API_KEY` was not set when building a client from the
    /// environment.
    #[error("missing GEMINI_API_KEY environment variable")]
    MissingApiKey,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-2xx status or an unexpected body.
    #[error("unexpected response from text service: {0}")]
    UnexpectedResponse(String),

    /// The idea response was not the expected JSON object.
    #[error("malformed idea payload: {0}")]
    MalformedIdea(#[from] serde_json::Error),
}

/// A generative-text backend.
///
/// Single-flight per invocation; no retry, queueing, or timeout policy lives
/// behind this trait.
#[automock]
#[async_trait]
pub trait Copywriter: Send + Sync {
    /// Generate a short commercial description for a product.
    async fn product_description(&self, brief: &ProductBrief) -> Result<String, CopywriterError>;

    /// Generate a blog article idea.
    async fn post_idea(&self) -> Result<PostIdea, CopywriterError>;
}

/// Generate a product description, degrading to [`DESCRIPTION_FALLBACK`] on
/// any failure. Never errors.
pub async fn describe_product(copywriter: &dyn Copywriter, brief: &ProductBrief) -> String {
    match copywriter.product_description(brief).await {
        Ok(description) => description,
        Err(error) => {
            warn!(%error, product = %brief.product_name, "description generation failed");
            DESCRIPTION_FALLBACK.to_string()
        }
    }
}

/// Generate a blog article idea, degrading to [`PostIdea::fallback`] on any
/// failure. Never errors.
pub async fn suggest_post(copywriter: &dyn Copywriter) -> PostIdea {
    match copywriter.post_idea().await {
        Ok(idea) => idea,
        Err(error) => {
            warn!(%error, "post ideation failed");
            PostIdea::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn describe_product_passes_through_success() {
        let mut mock = MockCopywriter::new();
        mock.expect_product_description()
            .returning(|_| Ok("Un aceite con carácter.".to_string()));

        let brief = ProductBrief {
            product_name: "Picual".to_string(),
            brand: "Finca La Torre".to_string(),
            nuances: "frutado intenso, picante medio".to_string(),
        };

        let description = describe_product(&mock, &brief).await;

        assert_eq!(description, "Un aceite con carácter.");
    }

    #[tokio::test]
    async fn describe_product_falls_back_on_failure() {
        let mut mock = MockCopywriter::new();
        mock.expect_product_description().returning(|_| {
            Err(CopywriterError::UnexpectedResponse("quota".to_string()))
        });

        let brief = ProductBrief {
            product_name: "Picual".to_string(),
            brand: "Finca La Torre".to_string(),
            nuances: "frutado intenso".to_string(),
        };

        let description = describe_product(&mock, &brief).await;

        assert_eq!(description, DESCRIPTION_FALLBACK);
    }

    #[tokio::test]
    async fn suggest_post_passes_through_success() {
        let mut mock = MockCopywriter::new();
        mock.expect_post_idea().returning(|| {
            Ok(PostIdea {
                title: "Cosecha temprana".to_string(),
                excerpt: "Octubre marca la diferencia.".to_string(),
            })
        });

        let idea = suggest_post(&mock).await;

        assert_eq!(idea.title, "Cosecha temprana");
    }

    #[tokio::test]
    async fn suggest_post_falls_back_on_failure() {
        let mut mock = MockCopywriter::new();
        mock.expect_post_idea()
            .returning(|| Err(CopywriterError::MissingApiKey));

        let idea = suggest_post(&mock).await;

        assert_eq!(idea, PostIdea::fallback());
    }
}
