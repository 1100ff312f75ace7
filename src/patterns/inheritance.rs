// Inheritance without class hierarchies: shared behaviour lives in a default
// trait method, and subtypes only add what they need.

pub trait Animal {
    fn name(&self) -> &'static str;

    // Changing this default changes every implementor that does not
    // override it.
    fn eat(&self) -> String {
        "Eating...".to_string()
    }

    /// Runtime type test, the `animal is Cat` check.
    fn as_cat(&self) -> Option<&Cat> {
        None
    }
}

pub struct Dog;

impl Animal for Dog {
    fn name(&self) -> &'static str {
        "Dog"
    }
}

pub struct Cat;

impl Cat {
    pub fn scratch(&self) -> String {
        "Scratching...".to_string()
    }
}

impl Animal for Cat {
    fn name(&self) -> &'static str {
        "Cat"
    }

    fn as_cat(&self) -> Option<&Cat> {
        Some(self)
    }
}

/// Accepts any animal through the shared interface.
pub fn doing_something(animal: &dyn Animal) -> String {
    animal.eat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_inherits_eat() {
        assert_eq!(Dog.eat(), "Eating...");
    }

    #[test]
    fn test_doing_something_with_any_animal() {
        let animals: Vec<Box<dyn Animal>> = vec![Box::new(Dog), Box::new(Cat)];
        for animal in &animals {
            assert_eq!(doing_something(animal.as_ref()), "Eating...");
        }
    }

    #[test]
    fn test_only_cat_scratches() {
        let dog: Box<dyn Animal> = Box::new(Dog);
        let cat: Box<dyn Animal> = Box::new(Cat);

        assert!(dog.as_cat().is_none());
        let scratch = cat.as_cat().map(Cat::scratch);
        assert_eq!(scratch.as_deref(), Some("Scratching..."));
    }
}
