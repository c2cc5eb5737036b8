#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The request never got a usable answer (connection, timeout, bad body).
    #[error("Generation transport failed: {0}")]
    Transport(String),
    /// The service answered with an error.
    #[error("Generation service error: {0}")]
    Upstream(String),
    /// The service answered successfully with no text.
    #[error("Generation service returned empty content")]
    Empty,
}

/// A hosted language model, seen only as prompt in, text out.
pub trait TextGenerator {
    fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String, GenerationError>,
{
    fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        self(prompt)
    }
}
