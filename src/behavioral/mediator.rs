//! Mediator: colleagues talk only to a mediator, which decides who receives
//! each message.
//!
//! Colleagues never hold references to the mediator or to each other. The
//! mediator owns them in a registration table and addresses them by
//! [`ColleagueId`].

use crate::core::Transcript;

/// Handle returned when a colleague is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColleagueId(usize);

pub trait Colleague {
    fn name(&self) -> &str;
    fn receive(&mut self, message: &str, out: &mut Transcript);
}

/// Coordinator contract.
pub trait Mediator {
    /// Deliver `message` from `sender` to whoever should get it.
    fn notify(&mut self, sender: ColleagueId, message: &str, out: &mut Transcript);
}

/// A colleague that prints what it receives and remembers it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    name: String,
    inbox: Vec<String>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inbox: Vec::new(),
        }
    }

    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }
}

impl Colleague for Component {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&mut self, message: &str, out: &mut Transcript) {
        out.line(format!("{} receives: {}", self.name, message));
        self.inbox.push(message.to_string());
    }
}

/// Routes every message to all registered colleagues except the sender,
/// in registration order.
#[derive(Default)]
pub struct ConcreteMediator {
    colleagues: Vec<Box<dyn Colleague>>,
}

impl ConcreteMediator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, colleague: impl Colleague + 'static) -> ColleagueId {
        let id = ColleagueId(self.colleagues.len());
        tracing::debug!(?id, name = colleague.name(), "colleague registered");
        self.colleagues.push(Box::new(colleague));
        id
    }

    pub fn colleague(&self, id: ColleagueId) -> Option<&dyn Colleague> {
        self.colleagues.get(id.0).map(|c| c.as_ref())
    }

    /// Announce `message` on behalf of `from`, then route it.
    ///
    /// An id this mediator never issued sends nothing.
    pub fn send(&mut self, from: ColleagueId, message: &str, out: &mut Transcript) {
        let Some(sender) = self.colleagues.get(from.0) else {
            tracing::debug!(?from, "send from unknown colleague ignored");
            return;
        };
        out.line(format!("{} sends: {}", sender.name(), message));
        self.notify(from, message, out);
    }
}

impl Mediator for ConcreteMediator {
    fn notify(&mut self, sender: ColleagueId, message: &str, out: &mut Transcript) {
        for (index, colleague) in self.colleagues.iter_mut().enumerate() {
            if index != sender.0 {
                colleague.receive(message, out);
            }
        }
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let mut mediator = ConcreteMediator::new();
    let a = mediator.register(Component::new("ComponentA"));
    let b = mediator.register(Component::new("ComponentB"));

    mediator.send(a, "Hello from A!", &mut out);
    mediator.send(b, "Hi from B!", &mut out);

    out
}
