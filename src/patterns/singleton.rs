// Singleton: one process-wide instance, created lazily on first access and
// never torn down.

use std::sync::atomic::{AtomicUsize, Ordering};

use lazy_static::lazy_static;

static INIT_COUNT: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    static ref INSTANCE: Singleton = Singleton::create();
}

#[derive(Debug)]
pub struct Singleton {
    greeting: String,
}

impl Singleton {
    fn create() -> Self {
        INIT_COUNT.fetch_add(1, Ordering::SeqCst);
        // Printed once per process.
        println!("Singleton instance created.");
        Self {
            greeting: "Hello from Singleton!".to_string(),
        }
    }

    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    /// How many times the initialiser has run. 0 before first access, 1 after.
    pub fn init_count() -> usize {
        INIT_COUNT.load(Ordering::SeqCst)
    }

    pub fn show_message(&self) -> &str {
        &self.greeting
    }
}

/// Referential equality for `'static` singletons.
pub fn same_instance(a: &Singleton, b: &Singleton) -> bool {
    std::ptr::eq(a, b)
}
