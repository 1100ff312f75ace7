// Shadow Copy: a new container over the same inner instances. Mutating an
// element through either container shows up in both. Fast, since only the
// handles are copied.

use design_patterns::console::{check, title};
use design_patterns::trivia::{
    containers_structurally_equal, format_container, person, same_container, same_instance,
    shadow_copy_container,
};

fn main() {
    println!("{}\n", title("Shadow Copy"));

    let original = vec![person("Anna")];
    let shadow = shadow_copy_container(&original);
    println!("Original: {}", format_container(&original));
    println!("Shadow Copy: {}", format_container(&shadow));

    shadow[0].borrow_mut().set_name("Bob");
    println!("After shadow[0].set_name(\"Bob\"):");
    println!("Original: {}", original[0].borrow());
    println!("Shadow Copy: {}", shadow[0].borrow());

    println!(
        "{}",
        check("Containers structurally equal", containers_structurally_equal(&original, &shadow))
    );
    println!("{}", check("Same container", same_container(&original, &shadow)));
    println!(
        "{}",
        check("Same element instance", same_instance(&original[0], &shadow[0]))
    );
}
