use design_patterns::console::title;
use design_patterns::patterns::factory_method::{get_document, get_document_by_name, DocumentType};

fn main() {
    println!("{}\n", title("Factory Method"));

    for document_type in DocumentType::ALL {
        let document = get_document(document_type);
        println!("{}: {}", document_type, document.create_document());
    }

    for name in ["word", "odt"] {
        match get_document_by_name(name) {
            Ok(document) => println!("{:?} -> {}", name, document.create_document()),
            Err(err) => println!("{:?} -> {}", name, err),
        }
    }
}
