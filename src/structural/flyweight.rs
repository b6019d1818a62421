//! Flyweight: share one instance per intrinsic state and pass the varying
//! (extrinsic) state in on every call.

use crate::core::Transcript;
use std::collections::HashMap;
use std::rc::Rc;

pub trait Flyweight {
    fn operation(&self, extrinsic_state: &str, out: &mut Transcript);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConcreteFlyweight {
    intrinsic_state: String,
}

impl ConcreteFlyweight {
    pub fn new(intrinsic_state: impl Into<String>) -> Self {
        Self {
            intrinsic_state: intrinsic_state.into(),
        }
    }

    pub fn intrinsic_state(&self) -> &str {
        &self.intrinsic_state
    }
}

impl Flyweight for ConcreteFlyweight {
    fn operation(&self, extrinsic_state: &str, out: &mut Transcript) {
        out.line(format!(
            "Flyweight with intrinsic state [{}] and extrinsic state [{}]",
            self.intrinsic_state, extrinsic_state
        ));
    }
}

/// Key-based cache of shared flyweights.
#[derive(Default)]
pub struct FlyweightFactory {
    flyweights: HashMap<String, Rc<dyn Flyweight>>,
}

impl FlyweightFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the flyweight for `key`, creating it on first request.
    ///
    /// Repeated requests with an equal key return the same `Rc`.
    pub fn get_flyweight(&mut self, key: &str) -> Rc<dyn Flyweight> {
        if let Some(existing) = self.flyweights.get(key) {
            tracing::debug!(key, "flyweight cache hit");
            return Rc::clone(existing);
        }

        tracing::debug!(key, "flyweight cache miss");
        let created: Rc<dyn Flyweight> = Rc::new(ConcreteFlyweight::new(key));
        self.flyweights.insert(key.to_string(), Rc::clone(&created));
        created
    }

    /// Number of distinct flyweights created so far.
    pub fn len(&self) -> usize {
        self.flyweights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flyweights.is_empty()
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    let mut factory = FlyweightFactory::new();

    let fw1 = factory.get_flyweight("A");
    fw1.operation("First call", &mut out);

    let fw2 = factory.get_flyweight("A");
    fw2.operation("Second call", &mut out);

    let fw3 = factory.get_flyweight("B");
    fw3.operation("Another instance", &mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_returns_same_instance() {
        let mut factory = FlyweightFactory::new();
        let first = factory.get_flyweight("A");
        let second = factory.get_flyweight("A");

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn different_keys_return_different_instances() {
        let mut factory = FlyweightFactory::new();
        let a = factory.get_flyweight("A");
        let b = factory.get_flyweight("B");

        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn factory_keeps_its_own_reference() {
        let mut factory = FlyweightFactory::new();
        let a = factory.get_flyweight("A");

        assert_eq!(Rc::strong_count(&a), 2);
        drop(a);
        assert_eq!(Rc::strong_count(&factory.get_flyweight("A")), 2);
    }

    #[test]
    fn operation_combines_both_states() {
        let mut out = Transcript::new();
        ConcreteFlyweight::new("X").operation("ctx", &mut out);

        assert_eq!(
            out.lines(),
            &["Flyweight with intrinsic state [X] and extrinsic state [ctx]"]
        );
    }

    #[test]
    fn new_factory_is_empty() {
        assert!(FlyweightFactory::new().is_empty());
    }
}
