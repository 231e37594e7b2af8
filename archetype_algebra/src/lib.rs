//! # Archetype Algebra
//!
//! The "rule book" crate - the closed space of 64 archetypes and the algebra
//! over it. This crate is the single source of truth for archetype values,
//! names and verified formulas and does not contain any narrative logic.
//!
//! ## Core Components
//!
//! - **axis**: The WHO / WHERE / WHEN codec (2 bits per axis)
//! - **archetype**: The 6-bit archetype value and its XOR operator
//! - **catalog**: Canonical names and descriptive metadata
//! - **transmutation**: The twelve master formulas and transmutation analysis

pub mod archetype;
pub mod axis;
pub mod catalog;
pub mod error;
pub mod transmutation;

pub use archetype::*;
pub use axis::*;
pub use catalog::*;
pub use error::*;
pub use transmutation::*;
