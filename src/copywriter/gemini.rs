//! Gemini-backed copywriter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{Copywriter, CopywriterError, DESCRIPTION_UNAVAILABLE, PostIdea, ProductBrief};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// HTTP client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiCopywriter {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiCopywriter {
    /// Create a client with an explicit API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a client with the API key from the `GEMINI_API_KEY`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`CopywriterError::MissingApiKey`] if the variable is not set.
    pub fn from_env() -> Result<Self, CopywriterError> {
        let api_key =
            std::env::var("GEMINI_API_KEY").map_err(|_err| CopywriterError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Override the base URL, for tests against a local stub.
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn generate(
        &self,
        prompt: &str,
        json_response: bool,
    ) -> Result<GenerateContentResponse, CopywriterError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        let contents = serde_json::json!([{ "parts": [{ "text": prompt }] }]);
        let body = if json_response {
            serde_json::json!({
                "contents": contents,
                "generationConfig": { "responseMimeType": "application/json" },
            })
        } else {
            serde_json::json!({ "contents": contents })
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CopywriterError::UnexpectedResponse(format!(
                "generateContent failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Copywriter for GeminiCopywriter {
    async fn product_description(
        &self,
        brief: &ProductBrief,
    ) -> Result<String, CopywriterError> {
        let response = self.generate(&description_prompt(brief), false).await?;

        Ok(description_text(response))
    }

    async fn post_idea(&self) -> Result<PostIdea, CopywriterError> {
        let response = self.generate(IDEA_PROMPT, true).await?;

        let payload = first_text(response).ok_or_else(|| {
            CopywriterError::UnexpectedResponse("response contained no candidates".to_string())
        })?;

        Ok(serde_json::from_str(&payload)?)
    }
}

fn description_prompt(brief: &ProductBrief) -> String {
    format!(
        "Actúa como un sommelier experto en aceites de oliva.\n\
         Escribe una descripción de producto seductora, corta y comercial \
         (máximo 60 palabras) para un aceite de oliva.\n\
         Producto: {}\n\
         Marca: {}\n\
         Notas de cata/Características: {}\n\n\
         El tono debe ser sofisticado, natural y evocador. Enfócate en la \
         experiencia sensorial.",
        brief.product_name, brief.brand, brief.nuances
    )
}

const IDEA_PROMPT: &str = "Genera una idea para un artículo de blog sobre aceite de oliva, \
     salud mediterránea o cocina gourmet. Devuelve un objeto JSON con 'title' y 'excerpt'.";

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

fn first_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
}

/// A 2xx response that carried no text still yields a description; the
/// shopper sees a placeholder instead of the hard-failure fallback.
fn description_text(response: GenerateContentResponse) -> String {
    first_text(response).unwrap_or_else(|| DESCRIPTION_UNAVAILABLE.to_string())
}
