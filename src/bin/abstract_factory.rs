use design_patterns::console::title;
use design_patterns::patterns::abstract_factory::{
    create_document, DocumentFactory, PdfFactory, WordFactory,
};

fn main() {
    println!("{}\n", title("Abstract Factory"));

    let pdf_factory: Box<dyn DocumentFactory> = Box::new(PdfFactory);
    println!("{}", pdf_factory.create_document().create_document());

    let word_factory: Box<dyn DocumentFactory> = Box::new(WordFactory);
    println!("{}", word_factory.create_document().create_document());

    // Same thing through the free function
    println!("{}", create_document(&PdfFactory).create_document());
}
