use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Unknown document type: '{0}' (expected 'pdf' or 'word')")]
    UnknownDocumentType(String),

    #[error("No payment strategy set.")]
    NoPaymentStrategy,
}
