//! Strategy: a context delegates one step to an interchangeable algorithm
//! object that can be swapped at runtime.

use crate::core::Transcript;

pub trait Strategy {
    fn execute(&self, out: &mut Transcript);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConcreteStrategyA;

impl Strategy for ConcreteStrategyA {
    fn execute(&self, out: &mut Transcript) {
        out.line("Executing Strategy A");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConcreteStrategyB;

impl Strategy for ConcreteStrategyB {
    fn execute(&self, out: &mut Transcript) {
        out.line("Executing Strategy B");
    }
}

#[derive(Default)]
pub struct Context {
    strategy: Option<Box<dyn Strategy>>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// A context with no strategy yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the current strategy; the old one is dropped.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = Some(strategy);
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn execute_strategy(&self, out: &mut Transcript) {
        match &self.strategy {
            Some(strategy) => strategy.execute(out),
            None => out.line("No strategy set!"),
        }
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let mut context = Context::new(Box::new(ConcreteStrategyA));
    context.execute_strategy(&mut out);

    context.set_strategy(Box::new(ConcreteStrategyB));
    context.execute_strategy(&mut out);

    out
}
