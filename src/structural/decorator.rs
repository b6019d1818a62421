//! Decorator: add behavior to one object by wrapping it, without touching
//! other objects of the same type.
//!
//! Each decorator owns the component it wraps, so a whole stack is released
//! by dropping the outermost layer.

use crate::core::Transcript;

pub trait Component {
    fn operation(&self, out: &mut Transcript);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self, out: &mut Transcript) {
        out.line("ConcreteComponent: Base Operation");
    }
}

/// Runs the wrapped component, then adds behavior A.
pub struct ConcreteDecoratorA {
    inner: Box<dyn Component>,
}

impl ConcreteDecoratorA {
    pub fn new(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }
}

impl Component for ConcreteDecoratorA {
    fn operation(&self, out: &mut Transcript) {
        self.inner.operation(out);
        out.line("ConcreteDecoratorA: Added Behavior A");
    }
}

/// Runs the wrapped component, then adds behavior B.
pub struct ConcreteDecoratorB {
    inner: Box<dyn Component>,
}

impl ConcreteDecoratorB {
    pub fn new(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }
}

impl Component for ConcreteDecoratorB {
    fn operation(&self, out: &mut Transcript) {
        self.inner.operation(out);
        out.line("ConcreteDecoratorB: Added Behavior B");
    }
}

fn describe(title: &str, component: &dyn Component, out: &mut Transcript) {
    out.line(title);
    component.operation(out);
    out.blank();
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let simple: Box<dyn Component> = Box::new(ConcreteComponent);
    describe("Simple Component:", simple.as_ref(), &mut out);

    let decorated_a: Box<dyn Component> = Box::new(ConcreteDecoratorA::new(simple));
    describe("Component with ConcreteDecoratorA:", decorated_a.as_ref(), &mut out);

    let decorated_b = ConcreteDecoratorB::new(decorated_a);
    describe(
        "Component with ConcreteDecoratorA and ConcreteDecoratorB:",
        &decorated_b,
        &mut out,
    );

    out
}
