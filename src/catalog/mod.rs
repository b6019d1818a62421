//! Registry of every pattern in the crate.
//!
//! [`Pattern`] names each demonstration, groups it by [`Category`] and runs
//! it. The registry is the only place that knows about more than one pattern;
//! the pattern modules themselves never refer to each other.
//!
//! # Example
//!
//! ```rust
//! use patterns::catalog::{Category, Pattern};
//!
//! let pattern: Pattern = "state".parse().unwrap();
//! assert_eq!(pattern.category(), Category::Behavioral);
//!
//! let out = pattern.run();
//! assert_eq!(out.lines()[0], "Turning ON the light.");
//! ```

pub mod macros;

use crate::core::Transcript;
use crate::{behavioral, creational, structural};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The name did not match any catalogued pattern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown pattern '{0}'")]
pub struct UnknownPattern(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Creational => "Creational",
            Self::Structural => "Structural",
            Self::Behavioral => "Behavioral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

crate::pattern_catalog! {
    /// One variant per demonstration, in alphabetical order.
    pub enum Pattern {
        AbstractFactory => "abstract_factory",
        Adapter => "adapter",
        Bridge => "bridge",
        Builder => "builder",
        ChainOfResponsibility => "chain_of_responsibility",
        Command => "command",
        Composite => "composite",
        Decorator => "decorator",
        Facade => "facade",
        FactoryMethod => "factory_method",
        Flyweight => "flyweight",
        Interpreter => "interpreter",
        Iterator => "iterator",
        Mediator => "mediator",
        Memento => "memento",
        Observer => "observer",
        Prototype => "prototype",
        Proxy => "proxy",
        Singleton => "singleton",
        State => "state",
        Strategy => "strategy",
        TemplateMethod => "template_method",
        Visitor => "visitor",
    }
}

impl Pattern {
    pub fn category(&self) -> Category {
        match self {
            Self::AbstractFactory
            | Self::Builder
            | Self::FactoryMethod
            | Self::Prototype
            | Self::Singleton => Category::Creational,

            Self::Adapter
            | Self::Bridge
            | Self::Composite
            | Self::Decorator
            | Self::Facade
            | Self::Flyweight
            | Self::Proxy => Category::Structural,

            Self::ChainOfResponsibility
            | Self::Command
            | Self::Interpreter
            | Self::Iterator
            | Self::Mediator
            | Self::Memento
            | Self::Observer
            | Self::State
            | Self::Strategy
            | Self::TemplateMethod
            | Self::Visitor => Category::Behavioral,
        }
    }

    /// One-sentence statement of what the pattern is for.
    pub fn intent(&self) -> &'static str {
        match self {
            Self::AbstractFactory => "Create families of related objects without naming their concrete types.",
            Self::Adapter => "Make a type with an incompatible interface usable where another interface is expected.",
            Self::Bridge => "Separate an abstraction from its implementation so both can vary independently.",
            Self::Builder => "Construct a complex object step by step.",
            Self::ChainOfResponsibility => "Pass a request along a chain of handlers until one handles it.",
            Self::Command => "Encapsulate a request as an object.",
            Self::Composite => "Treat individual objects and compositions of objects uniformly.",
            Self::Decorator => "Attach extra behavior to a single object by wrapping it.",
            Self::Facade => "Provide one simple entry point to a complex subsystem.",
            Self::FactoryMethod => "Let a creation function decide which concrete product to return.",
            Self::Flyweight => "Share instances that have the same intrinsic state.",
            Self::Interpreter => "Evaluate sentences of a small language represented as an expression tree.",
            Self::Iterator => "Access the elements of a collection sequentially without exposing its representation.",
            Self::Mediator => "Route communication between objects through a central coordinator.",
            Self::Memento => "Capture and restore an object's state without exposing its internals.",
            Self::Observer => "Notify dependents automatically when a subject's state changes.",
            Self::Prototype => "Create new objects by copying an existing instance.",
            Self::Proxy => "Control access to an object through a stand-in with the same interface.",
            Self::Singleton => "Ensure there is exactly one shared instance.",
            Self::State => "Change an object's behavior by swapping its internal state object.",
            Self::Strategy => "Make an algorithm interchangeable at runtime.",
            Self::TemplateMethod => "Fix the skeleton of an algorithm and let implementors fill in steps.",
            Self::Visitor => "Add operations over a set of element types without changing them.",
        }
    }

    /// Run the pattern's demonstration and return what it printed.
    pub fn run(&self) -> Transcript {
        tracing::debug!(pattern = self.name(), "running demonstration");
        match self {
            Self::AbstractFactory => creational::abstract_factory::demo(),
            Self::Adapter => structural::adapter::demo(),
            Self::Bridge => structural::bridge::demo(),
            Self::Builder => creational::builder::demo(),
            Self::ChainOfResponsibility => behavioral::chain_of_responsibility::demo(),
            Self::Command => behavioral::command::demo(),
            Self::Composite => structural::composite::demo(),
            Self::Decorator => structural::decorator::demo(),
            Self::Facade => structural::facade::demo(),
            Self::FactoryMethod => creational::factory_method::demo(),
            Self::Flyweight => structural::flyweight::demo(),
            Self::Interpreter => behavioral::interpreter::demo(),
            Self::Iterator => behavioral::iterator::demo(),
            Self::Mediator => behavioral::mediator::demo(),
            Self::Memento => behavioral::memento::demo(),
            Self::Observer => behavioral::observer::demo(),
            Self::Prototype => creational::prototype::demo(),
            Self::Proxy => structural::proxy::demo(),
            Self::Singleton => creational::singleton::demo(),
            Self::State => behavioral::state::demo(),
            Self::Strategy => behavioral::strategy::demo(),
            Self::TemplateMethod => behavioral::template_method::demo(),
            Self::Visitor => behavioral::visitor::demo(),
        }
    }

    /// Patterns belonging to `category`, in catalogue order.
    pub fn in_category(category: Category) -> impl Iterator<Item = Pattern> {
        Self::ALL.into_iter().filter(move |p| p.category() == category)
    }
}
