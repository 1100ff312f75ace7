// Deep Copy: a new instance with its own data. Changes to the copy never
// reach the original. Slower than a shadow copy since all data is copied.

use std::rc::Rc;

use design_patterns::console::{check, section, title};
use design_patterns::trivia::{
    deep_copy_container, deep_copy_record, format_container, person, same_instance,
    structurally_equal,
};

fn main() {
    println!("{}\n", title("Deep Copy"));

    println!("{}", section(1, "Record"));
    let original = person("Anna");
    let deep = deep_copy_record(&original);
    println!("Original: {}", original.borrow());
    println!("Deep Copy: {}", deep.borrow());
    println!("{}", check("Structurally equal", structurally_equal(&original, &deep)));
    println!("{}", check("Same instance", same_instance(&original, &deep)));

    deep.borrow_mut().set_name("Bob");
    println!("After modification:");
    println!("Original: {}", original.borrow());
    println!("Deep Copy: {}", deep.borrow());
    println!();

    println!("{}", section(2, "Container"));
    let original_list = vec![Rc::clone(&original)];
    let deep_list = deep_copy_container(&original_list);
    println!("Original List: {}", format_container(&original_list));
    println!("Deep Copy List: {}", format_container(&deep_list));

    deep_list[0].borrow_mut().set_name("Charlie");
    println!("After modifying deep copy list:");
    println!("Original List: {}", format_container(&original_list));
    println!("Deep Copy List: {}", format_container(&deep_list));
    println!(
        "{}",
        check("Same element instance", same_instance(&original_list[0], &deep_list[0]))
    );
}
