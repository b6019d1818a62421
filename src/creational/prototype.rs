//! Prototype: create new objects by copying an existing instance through its
//! trait object, without knowing its concrete type.

use crate::core::Transcript;

pub trait Prototype {
    /// Deep copy of `self`, returned behind the same contract.
    fn clone_box(&self) -> Box<dyn Prototype>;

    fn show(&self, out: &mut Transcript);
}

impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConcretePrototypeA {
    value: i32,
}

impl ConcretePrototypeA {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl Prototype for ConcretePrototypeA {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn show(&self, out: &mut Transcript) {
        out.line(format!("ConcretePrototypeA with value: {}", self.value));
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let prototype: Box<dyn Prototype> = Box::new(ConcretePrototypeA::new(42));
    let cloned = prototype.clone_box();
    cloned.show(&mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(prototype: &dyn Prototype) -> Vec<String> {
        let mut out = Transcript::new();
        prototype.show(&mut out);
        out.into_lines()
    }

    #[test]
    fn clone_shows_the_same_value() {
        let original = ConcretePrototypeA::new(7);
        let copy = original.clone_box();

        assert_eq!(shown(&original), shown(copy.as_ref()));
    }

    #[test]
    fn clone_is_independent_of_original() {
        let mut original = ConcretePrototypeA::new(1);
        let copy = original.clone_box();
        original.set_value(2);

        assert_eq!(shown(copy.as_ref()), vec!["ConcretePrototypeA with value: 1"]);
        assert_eq!(original.value(), 2);
    }

    #[test]
    fn boxed_prototypes_are_cloneable() {
        let boxed: Box<dyn Prototype> = Box::new(ConcretePrototypeA::new(-5));
        let copies = vec![boxed.clone(), boxed.clone()];

        for copy in &copies {
            assert_eq!(shown(copy.as_ref()), vec!["ConcretePrototypeA with value: -5"]);
        }
    }
}
