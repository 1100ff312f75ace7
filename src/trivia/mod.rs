//! # Trivia: copy and equality semantics
//!
//! - `person`: the mutable record and its shared handle
//! - `copy`: deep copy vs shadow copy over containers of handles
//! - `equality`: structural vs referential comparison

pub mod copy;
pub mod equality;
pub mod person;

pub use copy::{deep_copy_container, deep_copy_record, shadow_copy_container, DeepCopy};
pub use equality::{
    containers_structurally_equal, same_container, same_instance, structurally_equal,
};
pub use person::{format_container, person, Person, PersonRef};
