//! Singleton: at most one instance, created on first request and shared by
//! every later request.
//!
//! The instance lives in an explicitly constructed [`SingletonCell`] that the
//! caller owns and passes around, rather than in a hidden global. "One
//! instance" therefore means one instance per cell, and a test can build a
//! fresh cell to observe first-time construction.

use crate::core::Transcript;
use std::cell::OnceCell;
use std::rc::Rc;

/// The shared object. It can only be created through a [`SingletonCell`].
#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    fn new(out: &mut Transcript) -> Self {
        out.line("Singleton Instance Created");
        Self { _private: () }
    }
}

/// Holder of the single [`Singleton`] instance.
#[derive(Debug, Default)]
pub struct SingletonCell {
    instance: OnceCell<Rc<Singleton>>,
}

impl SingletonCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared instance, constructing it on the first call.
    ///
    /// Every call on the same cell returns a handle to the same allocation.
    pub fn get_instance(&self, out: &mut Transcript) -> Rc<Singleton> {
        let instance = self.instance.get_or_init(|| {
            tracing::debug!("constructing singleton instance");
            Rc::new(Singleton::new(out))
        });
        Rc::clone(instance)
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let cell = SingletonCell::new();
    let s1 = cell.get_instance(&mut out);
    let s2 = cell.get_instance(&mut out);

    if Rc::ptr_eq(&s1, &s2) {
        out.line("Both instances are the same!");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cell_is_uninitialized() {
        let cell = SingletonCell::new();
        assert!(!cell.is_initialized());
    }

    #[test]
    fn first_request_constructs_once() {
        let cell = SingletonCell::new();
        let mut out = Transcript::new();

        cell.get_instance(&mut out);
        cell.get_instance(&mut out);
        cell.get_instance(&mut out);

        assert!(cell.is_initialized());
        assert_eq!(out.lines(), &["Singleton Instance Created"]);
    }

    #[test]
    fn every_request_returns_the_same_instance() {
        let cell = SingletonCell::new();
        let mut out = Transcript::new();

        let first = cell.get_instance(&mut out);
        let second = cell.get_instance(&mut out);

        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn separate_cells_hold_separate_instances() {
        let mut out = Transcript::new();
        let a = SingletonCell::new().get_instance(&mut out);
        let b = SingletonCell::new().get_instance(&mut out);

        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(out.len(), 2);
    }
}
