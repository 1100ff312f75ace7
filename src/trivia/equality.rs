// Structural vs referential equality.
//
// Two explicit functions, one per notion. `==` on `PersonRef` would compare
// by value (RefCell and Rc both delegate PartialEq), so identity always goes
// through `same_instance`.

use std::cell::RefCell;
use std::rc::Rc;

/// True iff every attribute compares equal by value.
pub fn structurally_equal<T: PartialEq>(a: &Rc<RefCell<T>>, b: &Rc<RefCell<T>>) -> bool {
    *a.borrow() == *b.borrow()
}

/// True iff both handles point at the same allocation, whatever its value.
pub fn same_instance<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    Rc::ptr_eq(a, b)
}

/// Same length and element-wise structural equality.
pub fn containers_structurally_equal<T: PartialEq>(
    a: &[Rc<RefCell<T>>],
    b: &[Rc<RefCell<T>>],
) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| structurally_equal(x, y))
}

/// Identity of the container object itself.
// Takes `&Vec` on purpose: two empty slices can share a dangling buffer
// pointer, two distinct Vecs never share an address.
#[allow(clippy::ptr_arg)]
pub fn same_container<T>(a: &Vec<T>, b: &Vec<T>) -> bool {
    std::ptr::eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia::copy::shadow_copy_container;
    use crate::trivia::person::{person, PersonRef};

    #[test]
    fn test_equal_names_are_structurally_equal_but_distinct() {
        let p1 = person("Alice");
        let p2 = person("Alice");

        assert!(structurally_equal(&p1, &p2));
        assert!(!same_instance(&p1, &p2));
    }

    #[test]
    fn test_same_binding_is_same_instance() {
        let p1 = person("Alice");
        let p3 = Rc::clone(&p1);

        assert!(same_instance(&p1, &p3));
        assert!(structurally_equal(&p1, &p3));
    }

    #[test]
    fn test_identity_ignores_value_changes() {
        let p1 = person("Alice");
        let p3 = Rc::clone(&p1);
        p3.borrow_mut().set_name("Bob");
        assert!(same_instance(&p1, &p3));
    }

    #[test]
    fn test_different_names_not_equal() {
        assert!(!structurally_equal(&person("Alice"), &person("Bob")));
    }

    #[test]
    fn test_shadow_copy_scenario() {
        let original = vec![person("Anna")];
        let shadow = shadow_copy_container(&original);

        shadow[0].borrow_mut().set_name("Bob");

        assert_eq!(original[0].borrow().name(), "Bob");
        assert!(containers_structurally_equal(&original, &shadow));
        assert!(!same_container(&original, &shadow));
        assert!(same_instance(&original[0], &shadow[0]));
    }

    #[test]
    fn test_containers_of_different_length_not_equal() {
        let a = vec![person("Anna")];
        let b = vec![person("Anna"), person("Anna")];
        assert!(!containers_structurally_equal(&a, &b));
    }

    #[test]
    fn test_empty_containers() {
        let a: Vec<PersonRef> = Vec::new();
        let b: Vec<PersonRef> = Vec::new();
        assert!(containers_structurally_equal(&a, &b));
        assert!(!same_container(&a, &b));
        assert!(same_container(&a, &a));
    }
}
