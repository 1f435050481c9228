use thiserror::Error;

/// Failures raised while wiring the page or loading configuration.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("gallery needs at least one image")]
    EmptyGallery,
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Client-side contact form validation failures.
///
/// The `Display` text is the message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, introduce un email válido.")]
    InvalidEmail,
    #[error("Por favor, completa todos los campos obligatorios.")]
    MissingFields(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error al enviar el formulario. Inténtelo de nuevo.")]
pub struct SubmitError {
    pub reason: String,
}

impl SubmitError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("a submission is already pending")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
