//! Schema-guided event extraction.
//!
//! [`StructuredExtractor`] is the narrow seam to whatever produces a candidate
//! JSON object from text (a hosted model in production, a scripted stub in
//! tests). [`EventExtractor`] owns the schema and instruction it sends, and
//! validates every candidate with [`validate_candidate`] before any
//! [`EventRecord`] leaves this module. Validation does not read the schema's
//! description text, so rewording the guidance cannot loosen the checks.

mod openai;
mod schema;
mod validate;

use std::future::Future;

use crate::error::ExtractionError;
use crate::types::EventRecord;

pub use openai::{OpenAiExtractor, DEFAULT_OPENAI_BASE_URL};
pub use schema::{event_schema, EventSchema, EXTRACTION_INSTRUCTION};
pub use validate::validate_candidate;

/// Everything a provider needs for one extraction call.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionRequest<'a> {
    /// Task description, including the worked example.
    pub instruction: &'a str,
    /// The text to extract from.
    pub input: &'a str,
    /// Target shape of the returned object.
    pub schema: &'a EventSchema,
}

/// A capability that turns text into one candidate JSON object shaped by a
/// schema. Output is untrusted.
pub trait StructuredExtractor {
    /// Run one extraction call.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError`] on transport, auth, rate-limit, or response
    /// decoding failure.
    fn extract(
        &self,
        request: &ExtractionRequest<'_>,
    ) -> impl Future<Output = Result<serde_json::Value, ExtractionError>> + Send;
}

/// Turns prompt text into validated [`EventRecord`]s.
pub struct EventExtractor<C> {
    capability: C,
    schema: EventSchema,
}

impl<C: StructuredExtractor> EventExtractor<C> {
    #[must_use]
    pub fn new(capability: C) -> Self {
        Self {
            capability,
            schema: event_schema(),
        }
    }

    /// The underlying provider.
    #[must_use]
    pub fn capability(&self) -> &C {
        &self.capability
    }

    /// Extract zero or more events from one item's prompt text.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError`] if the capability call fails or its output
    /// fails [`validate_candidate`]. No partial results are returned: one
    /// invalid event rejects the whole candidate.
    pub async fn extract(&self, prompt_text: &str) -> Result<Vec<EventRecord>, ExtractionError> {
        let request = ExtractionRequest {
            instruction: EXTRACTION_INSTRUCTION,
            input: prompt_text,
            schema: &self.schema,
        };
        let candidate = self.capability.extract(&request).await?;
        let events = validate_candidate(&candidate)?;
        tracing::debug!(count = events.len(), "validated extracted events");
        Ok(events)
    }
}
