//! Builder: construct a complex object step by step, with an optional
//! director that fixes the order of the steps.

use crate::core::Transcript;
use thiserror::Error;

/// Errors that can occur when taking the product out of a builder.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Part A not built. Call .build_part_a() before .result()")]
    MissingPartA,

    #[error("Part B not built. Call .build_part_b() before .result()")]
    MissingPartB,
}

/// The finished object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub part_a: String,
    pub part_b: String,
}

impl Product {
    pub fn show(&self, out: &mut Transcript) {
        out.line(format!("Product Parts: {}, {}", self.part_a, self.part_b));
    }
}

/// Steps every builder provides.
pub trait Builder {
    fn build_part_a(&mut self);
    fn build_part_b(&mut self);

    /// Hand over the finished product.
    ///
    /// The builder is left empty and can be reused for another product.
    fn result(&mut self) -> Result<Product, BuildError>;
}

#[derive(Debug, Default)]
pub struct ConcreteBuilder {
    part_a: Option<String>,
    part_b: Option<String>,
}

impl ConcreteBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for ConcreteBuilder {
    fn build_part_a(&mut self) {
        self.part_a = Some("Part A".to_string());
    }

    fn build_part_b(&mut self) {
        self.part_b = Some("Part B".to_string());
    }

    fn result(&mut self) -> Result<Product, BuildError> {
        if self.part_a.is_none() {
            return Err(BuildError::MissingPartA);
        }
        let part_b = self.part_b.take().ok_or(BuildError::MissingPartB)?;
        let part_a = self.part_a.take().ok_or(BuildError::MissingPartA)?;

        Ok(Product { part_a, part_b })
    }
}

/// Knows the order of the steps, not what they produce.
#[derive(Clone, Copy, Debug, Default)]
pub struct Director;

impl Director {
    pub fn construct(&self, builder: &mut dyn Builder) {
        builder.build_part_a();
        builder.build_part_b();
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let mut builder = ConcreteBuilder::new();
    Director.construct(&mut builder);

    match builder.result() {
        Ok(product) => product.show(&mut out),
        Err(err) => out.line(err.to_string()),
    }

    out
}
