//! Observer: a subject notifies every attached observer whenever its state
//! changes.
//!
//! Registrations are keyed by observer identity (the `Rc` allocation), so
//! detaching an observer removes every registration of it before the next
//! notification.

use crate::core::Transcript;
use std::cell::RefCell;
use std::rc::Rc;

pub trait Observer {
    fn update(&self, state: i32, out: &mut Transcript);
}

/// Prints each notification and remembers the values it saw.
#[derive(Debug, Default)]
pub struct ConcreteObserver {
    id: u32,
    received: RefCell<Vec<i32>>,
}

impl ConcreteObserver {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Every state this observer was notified of, oldest first.
    pub fn received(&self) -> Vec<i32> {
        self.received.borrow().clone()
    }
}

impl Observer for ConcreteObserver {
    fn update(&self, state: i32, out: &mut Transcript) {
        self.received.borrow_mut().push(state);
        out.line(format!("Observer {} notified. New state: {}", self.id, state));
    }
}

#[derive(Default)]
pub struct Subject {
    observers: Vec<Rc<dyn Observer>>,
    state: i32,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
        tracing::debug!(observers = self.observers.len(), "observer attached");
    }

    /// Remove every registration of `observer`.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        let before = self.observers.len();
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
        tracing::debug!(removed = before - self.observers.len(), "observer detached");
    }

    /// Notify observers in attachment order.
    pub fn notify(&self, out: &mut Transcript) {
        for observer in &self.observers {
            observer.update(self.state, out);
        }
    }

    pub fn set_state(&mut self, state: i32, out: &mut Transcript) {
        self.state = state;
        self.notify(out);
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    let mut subject = Subject::new();

    let observer1: Rc<dyn Observer> = Rc::new(ConcreteObserver::new(1));
    let observer2: Rc<dyn Observer> = Rc::new(ConcreteObserver::new(2));

    subject.attach(Rc::clone(&observer1));
    subject.attach(Rc::clone(&observer2));

    out.line("Setting state to 10");
    subject.set_state(10, &mut out);

    subject.detach(&observer1);

    out.line("Setting state to 20");
    subject.set_state(20, &mut out);

    out
}
