// Record type shared by the copy and equality demos.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A single mutable entity with one attribute.
///
/// Equality (`PartialEq`) is structural: it compares `name` only. Identity
/// lives in the handle, see [`PersonRef`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
}

/// Shared, mutable instance of a [`Person`].
///
/// Cloning the handle (`Rc::clone`) yields another reference to the same
/// instance. `Rc` is `!Send`, so two threads can never mutate one instance
/// through shadow-copied containers.
pub type PersonRef = Rc<RefCell<Person>>;

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person(name={})", self.name)
    }
}

/// Allocates a fresh instance and returns its handle.
pub fn person(name: impl Into<String>) -> PersonRef {
    Rc::new(RefCell::new(Person::new(name)))
}

/// Renders a container as `[Person(name=Anna), Person(name=Bob)]`.
pub fn format_container(people: &[PersonRef]) -> String {
    let items: Vec<String> = people.iter().map(|p| p.borrow().to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let p = Person::new("Anna");
        assert_eq!(p.to_string(), "Person(name=Anna)");
    }

    #[test]
    fn test_set_name_overwrites() {
        let mut p = Person::new("Anna");
        p.set_name("Bob");
        assert_eq!(p.name(), "Bob");
    }

    #[test]
    fn test_handle_mutation_visible_through_clone() {
        let a = person("Anna");
        let b = Rc::clone(&a);
        b.borrow_mut().set_name("Bob");
        assert_eq!(a.borrow().name(), "Bob");
    }

    #[test]
    fn test_format_container() {
        let people = vec![person("Anna"), person("Bob")];
        assert_eq!(
            format_container(&people),
            "[Person(name=Anna), Person(name=Bob)]"
        );
        assert_eq!(format_container(&[]), "[]");
    }
}
