//! Patterns: the 23 classic object-oriented design patterns as small,
//! self-contained Rust demonstrations.
//!
//! Every pattern lives in its own module under [`creational`], [`structural`]
//! or [`behavioral`]. Each module exposes the pattern's roles as ordinary
//! types and traits, plus a `demo()` function that runs a fixed scenario and
//! returns everything it printed as a [`Transcript`].
//!
//! # Core Concepts
//!
//! - **Transcript**: Ordered output lines, so demonstrations are testable
//! - **Catalog**: Names, categories and intents of all patterns
//! - **Logging**: Diagnostic events go through `tracing`, never the transcript
//!
//! # Example
//!
//! ```rust
//! use patterns::behavioral::observer::{ConcreteObserver, Observer, Subject};
//! use patterns::Transcript;
//! use std::rc::Rc;
//!
//! let mut out = Transcript::new();
//! let mut subject = Subject::new();
//!
//! let first: Rc<dyn Observer> = Rc::new(ConcreteObserver::new(1));
//! subject.attach(Rc::clone(&first));
//! subject.set_state(7, &mut out);
//!
//! assert_eq!(out.lines(), &["Observer 1 notified. New state: 7"]);
//! ```
//!
//! Whole demonstrations are reachable through the catalog:
//!
//! ```rust
//! use patterns::Pattern;
//!
//! let out = Pattern::Iterator.run();
//! assert_eq!(out.to_string(), "1 2 3 4 5\n");
//! ```

pub mod behavioral;
pub mod catalog;
pub mod core;
pub mod creational;
pub mod structural;

// Re-export commonly used types
pub use catalog::{Category, Pattern, UnknownPattern};
pub use core::Transcript;
