// Factory Method: callers name a DocumentType and get back a Document
// without knowing the concrete type.

use std::fmt;
use std::str::FromStr;

use super::error::PatternError;

pub trait Document {
    fn create_document(&self) -> String;
}

pub struct PdfDocument;

impl Document for PdfDocument {
    fn create_document(&self) -> String {
        "PDF Document Created".to_string()
    }
}

pub struct WordDocument;

impl Document for WordDocument {
    fn create_document(&self) -> String {
        "Word Document Created".to_string()
    }
}

/// Closed set of producible documents. Adding a variant forces a new arm in
/// [`get_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Pdf,
    Word,
}

impl DocumentType {
    pub const ALL: [DocumentType; 2] = [DocumentType::Pdf, DocumentType::Word];
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::Pdf => write!(f, "PDF"),
            DocumentType::Word => write!(f, "WORD"),
        }
    }
}

impl FromStr for DocumentType {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentType::Pdf),
            "word" => Ok(DocumentType::Word),
            _ => Err(PatternError::UnknownDocumentType(s.to_string())),
        }
    }
}

pub fn get_document(document_type: DocumentType) -> Box<dyn Document> {
    match document_type {
        DocumentType::Pdf => Box::new(PdfDocument),
        DocumentType::Word => Box::new(WordDocument),
    }
}

/// Parses `name` and builds the matching document.
pub fn get_document_by_name(name: &str) -> Result<Box<dyn Document>, PatternError> {
    let document_type: DocumentType = name.parse()?;
    Ok(get_document(document_type))
}
