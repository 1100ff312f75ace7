use design_patterns::console::{section, title};
use design_patterns::patterns::polymorphism::{make_sound, make_sound_times, Animal, Cat, Dog};

fn main() {
    println!("{}\n", title("Polymorphism"));

    let dog: Box<dyn Animal> = Box::new(Dog);
    let cat: Box<dyn Animal> = Box::new(Cat);

    println!("{}", section(1, "Overriding"));
    println!("{}", dog.sound());
    println!("{}", cat.sound());
    println!();

    println!("{}", section(2, "Overloading"));
    println!("{}", make_sound(cat.as_ref()));
    for line in make_sound_times(cat.as_ref(), 2) {
        println!("{}", line);
    }
}
