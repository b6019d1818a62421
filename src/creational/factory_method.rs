//! Factory Method: one creation function decides which concrete product to
//! return from a runtime key.
//!
//! An unrecognized key yields no product at all; callers check before use.

use crate::core::Transcript;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The key did not name a known animal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown animal kind '{0}'")]
pub struct UnknownAnimal(pub String);

pub trait Animal {
    fn speak(&self, out: &mut Transcript);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Dog;

impl Animal for Dog {
    fn speak(&self, out: &mut Transcript) {
        out.line("Woof!");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Cat;

impl Animal for Cat {
    fn speak(&self, out: &mut Transcript) {
        out.line("Meow!");
    }
}

/// Kinds the factory knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimalKind {
    Dog,
    Cat,
}

impl AnimalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys are matched exactly; `"Dog"` is not `"dog"`.
impl FromStr for AnimalKind {
    type Err = UnknownAnimal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            other => Err(UnknownAnimal(other.to_string())),
        }
    }
}

pub struct AnimalFactory;

impl AnimalFactory {
    /// Build the animal named by `kind`, or nothing if the key is unknown.
    pub fn create_animal(kind: &str) -> Option<Box<dyn Animal>> {
        match kind.parse::<AnimalKind>() {
            Ok(kind) => Some(Self::create(kind)),
            Err(err) => {
                tracing::debug!(%err, "no product for factory key");
                None
            }
        }
    }

    pub fn create(kind: AnimalKind) -> Box<dyn Animal> {
        match kind {
            AnimalKind::Dog => Box::new(Dog),
            AnimalKind::Cat => Box::new(Cat),
        }
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    if let Some(dog) = AnimalFactory::create_animal("dog") {
        dog.speak(&mut out);
    }
    if let Some(cat) = AnimalFactory::create_animal("cat") {
        cat.speak(&mut out);
    }

    out
}
