//! # Narrative Core (The Cortex)
//!
//! The synthesis engine built on `archetype_algebra`. It searches the
//! 64-node transmutation graph and turns required state changes into ordered,
//! verified narrative arcs that downstream renderers consume.
//!
//! ## Core Components
//!
//! - **path_finder**: Bounded breadth-first search for `(impulse, catalyst)` paths
//! - **decomposer**: Splits a required XOR delta into plot-beat steps
//! - **arc**: Assembles and verifies narrative arcs, with a guaranteed fallback
//! - **config**: TOML-loadable tuning for the search and the decomposer
//!
//! ## Design Philosophy
//!
//! - **Deterministic on demand**: Every randomized operation accepts an injected RNG
//! - **Self-healing**: Arc assembly never fails; a missed target falls back to a direct step
//! - **Read-only catalogs**: Shared state is limited to the immutable catalogs in `archetype_algebra`

pub mod arc;
pub mod config;
pub mod decomposer;
pub mod error;
pub mod path_finder;
pub mod step;

pub use arc::*;
pub use config::*;
pub use decomposer::*;
pub use error::*;
pub use path_finder::*;
pub use step::*;
