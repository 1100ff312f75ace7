// Abstract Factory: one factory per product family, clients only see the
// DocumentFactory trait.

use super::factory_method::{Document, PdfDocument, WordDocument};

pub trait DocumentFactory {
    fn create_document(&self) -> Box<dyn Document>;
}

pub struct PdfFactory;

impl DocumentFactory for PdfFactory {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(PdfDocument)
    }
}

pub struct WordFactory;

impl DocumentFactory for WordFactory {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(WordDocument)
    }
}

/// Builds a document with whichever factory the caller hands in.
pub fn create_document(factory: &dyn DocumentFactory) -> Box<dyn Document> {
    factory.create_document()
}
