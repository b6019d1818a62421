//! Chain of Responsibility: pass a request along an ordered chain of handlers
//! until one of them accepts it.
//!
//! The first handler in chain order whose range contains the request wins.
//! A request nobody accepts falls through to a terminal message.

use crate::core::Transcript;
use std::ops::Range;

pub trait Handler {
    fn name(&self) -> &str;
    fn can_handle(&self, request: i32) -> bool;
}

/// Accepts every request inside a half-open range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeHandler {
    name: String,
    range: Range<i32>,
}

impl RangeHandler {
    pub fn new(name: impl Into<String>, range: Range<i32>) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }
}

impl Handler for RangeHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_handle(&self, request: i32) -> bool {
        self.range.contains(&request)
    }
}

/// Handlers in the order requests visit them.
#[derive(Default)]
pub struct Chain {
    handlers: Vec<Box<dyn Handler>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler to the end of the chain.
    pub fn then(mut self, handler: impl Handler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn push(&mut self, handler: Box<dyn Handler>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// The three-handler chain wired in ascending range order: below 10,
    /// 10 to 19, and 20 to 29.
    pub fn standard() -> Self {
        Self::new()
            .then(RangeHandler::new("ConcreteHandler1", i32::MIN..10))
            .then(RangeHandler::new("ConcreteHandler2", 10..20))
            .then(RangeHandler::new("ConcreteHandler3", 20..30))
    }

    /// Route `request` and report which handler took it, if any.
    pub fn handle_request(&self, request: i32, out: &mut Transcript) -> Option<&str> {
        match self.handlers.iter().find(|h| h.can_handle(request)) {
            Some(handler) => {
                out.line(format!("{} handled request {}", handler.name(), request));
                Some(handler.name())
            }
            None => {
                tracing::debug!(request, handlers = self.handlers.len(), "request fell through chain");
                out.line(format!("Request {request} could not be handled."));
                None
            }
        }
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    let chain = Chain::standard();

    for request in [5, 15, 25, 35] {
        chain.handle_request(request, &mut out);
    }

    out
}
