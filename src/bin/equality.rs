// Structural equality compares values, referential equality compares
// identity. Two separate functions, never one operator for both.

use std::rc::Rc;

use design_patterns::console::{check, title};
use design_patterns::trivia::{person, same_instance, structurally_equal};

fn main() {
    println!("{}\n", title("Equality"));

    let person1 = person("Alice");
    let person2 = person("Alice");
    let person3 = Rc::clone(&person1);

    println!("person1 = {}", person1.borrow());
    println!("person2 = {}", person2.borrow());
    println!("person3 = person1");
    println!(
        "{}",
        check("structurally_equal(person1, person2)", structurally_equal(&person1, &person2))
    );
    println!(
        "{}",
        check("same_instance(person1, person2)", same_instance(&person1, &person2))
    );
    println!(
        "{}",
        check("same_instance(person1, person3)", same_instance(&person1, &person3))
    );
}
