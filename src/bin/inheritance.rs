use design_patterns::console::title;
use design_patterns::patterns::inheritance::{doing_something, Animal, Cat, Dog};

fn main() {
    println!("{}\n", title("Inheritance"));

    let dog: Box<dyn Animal> = Box::new(Dog);
    println!("{}: {}", dog.name(), dog.eat());

    let cat: Box<dyn Animal> = Box::new(Cat);
    for animal in [&dog, &cat] {
        println!("doing_something({}): {}", animal.name(), doing_something(animal.as_ref()));
    }

    if let Some(cat) = cat.as_cat() {
        println!("{}", cat.scratch());
    }
}
