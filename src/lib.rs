//! Charm - interactive session front-end
//!
//! This crate re-exports all layers of the Charm front-end for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: charm_runtime    — Session loop, line editing, hub contract, CLI
//! Layer 1: charm_text       — Markup highlighting, token descriptions, text utilities
//! Layer 0: charm_foundation — Core types (Token, Error)
//! ```

pub use charm_foundation as foundation;
pub use charm_runtime as runtime;
pub use charm_text as text;
