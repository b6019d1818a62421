//! Shared plumbing for every pattern module.
//!
//! The only thing the patterns share is where their output goes: each
//! operation that "prints" appends to a [`Transcript`] instead of writing to
//! stdout, so a demonstration's output is a plain value that can be printed,
//! compared or inspected.

mod transcript;

pub use transcript::Transcript;
