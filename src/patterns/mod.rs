//! # Pattern catalog
//!
//! ## Creational
//! - Factory Method (closed enum + one `match`)
//! - Abstract Factory (trait objects)
//! - Singleton (`lazy_static`)
//!
//! ## Behavioral
//! - Strategy (trait objects, optional strategy on the context)
//!
//! ## Object model
//! - Inheritance (default trait methods)
//! - Polymorphism (overriding and "overloading")

pub mod abstract_factory;
pub mod error;
pub mod factory_method;
pub mod inheritance;
pub mod polymorphism;
pub mod singleton;
pub mod strategy;

pub use error::PatternError;
