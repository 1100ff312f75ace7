use design_patterns::console::title;
use design_patterns::patterns::singleton::{same_instance, Singleton};

fn main() {
    println!("{}\n", title("Singleton"));

    println!("{}", Singleton::instance().show_message());

    let singleton1 = Singleton::instance();
    let singleton2 = Singleton::instance();

    if same_instance(singleton1, singleton2) {
        println!("Both references point to the same Singleton instance.");
    } else {
        println!("Singleton instances are different, which should not happen.");
    }
    println!("Initialiser ran {} time(s).", Singleton::init_count());
}
