// Value semantics and design pattern demos.
//
// Run individual examples with:
//   cargo run --bin deep_copy
//   cargo run --bin shadow_copy
//   cargo run --bin equality
//   cargo run --bin singleton
//   cargo run --bin factory_method
//   cargo run --bin abstract_factory
//   cargo run --bin strategy
//   cargo run --bin inheritance
//   cargo run --bin polymorphism

pub mod console;
pub mod patterns;
pub mod trivia;

pub use patterns::PatternError;
pub use trivia::{person, DeepCopy, Person, PersonRef};
