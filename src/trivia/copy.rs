// Deep copy vs shadow copy.
//
// A shadow copy duplicates the outer container only: the new Vec holds
// clones of the same `Rc` handles, so every element is shared.
// A deep copy rebuilds every owned sub-object: each element type provides
// its own `DeepCopy`, which is what lets nested containers compose.

use std::cell::RefCell;
use std::rc::Rc;

use super::person::Person;

/// Duplication producing fully independent data, no shared instances.
pub trait DeepCopy {
    fn deep_copy(&self) -> Self;
}

impl DeepCopy for Person {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl DeepCopy for String {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

// A new allocation, never `Rc::clone`.
impl<T: DeepCopy> DeepCopy for Rc<RefCell<T>> {
    fn deep_copy(&self) -> Self {
        Rc::new(RefCell::new(self.borrow().deep_copy()))
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(DeepCopy::deep_copy)
    }
}

/// New instance with the same attribute values as `record`.
pub fn deep_copy_record<T: DeepCopy>(record: &Rc<RefCell<T>>) -> Rc<RefCell<T>> {
    record.deep_copy()
}

/// New container whose elements are deep copies of `container`'s, in order.
pub fn deep_copy_container<T: DeepCopy>(container: &[T]) -> Vec<T> {
    container.iter().map(DeepCopy::deep_copy).collect()
}

/// New container referencing the same element instances, in order.
pub fn shadow_copy_container<T: ?Sized>(container: &[Rc<T>]) -> Vec<Rc<T>> {
    container.iter().map(Rc::clone).collect()
}
