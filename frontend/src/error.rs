use thiserror::Error;

/// Fatal failures of a processing run, one per stage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Billedet kunne ikke indlæses: {0}")]
    Decode(String),
    #[error("OCR fejlede: {0}")]
    Ocr(String),
    #[error("Netværksfejl: {0}")]
    Network(String),
    #[error("Relay HTTP {status}: {body}")]
    Relay { status: u16, body: String },
    #[error("Uventet svar fra serveren: {0}")]
    Response(String),
}
