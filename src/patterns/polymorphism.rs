// Polymorphism
//
// Overriding (runtime): each type replaces `sound`, callers go through
// `&dyn Animal`.
// Overloading (compile time): Rust has none, so the second arity gets its
// own name.

pub trait Animal {
    fn sound(&self) -> String {
        "Animal makes a sound".to_string()
    }
}

/// Uses the default `sound`.
pub struct GenericAnimal;

impl Animal for GenericAnimal {}

pub struct Dog;

impl Animal for Dog {
    fn sound(&self) -> String {
        "Dog barks".to_string()
    }
}

pub struct Cat;

impl Animal for Cat {
    fn sound(&self) -> String {
        "Cat meows".to_string()
    }
}

pub fn make_sound(animal: &dyn Animal) -> String {
    animal.sound()
}

pub fn make_sound_times(animal: &dyn Animal, times: usize) -> Vec<String> {
    (0..times).map(|_| animal.sound()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overridden_sounds() {
        assert_eq!(make_sound(&Dog), "Dog barks");
        assert_eq!(make_sound(&Cat), "Cat meows");
    }

    #[test]
    fn test_default_sound() {
        assert_eq!(make_sound(&GenericAnimal), "Animal makes a sound");
    }

    #[test]
    fn test_make_sound_times() {
        assert_eq!(make_sound_times(&Cat, 2), ["Cat meows", "Cat meows"]);
        assert!(make_sound_times(&Dog, 0).is_empty());
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let animal: Box<dyn Animal> = Box::new(Dog);
        assert_eq!(make_sound(animal.as_ref()), "Dog barks");
    }
}
