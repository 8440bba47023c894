//! # reword-engine
//!
//! The rewrite core: safety gate, transformation pipeline, repair chain, and
//! variant assembler.
//!
//! Control flow per request:
//!
//! ```text
//! safety gate → preset resolution → per length class:
//!     transform stages (fixed order) → repair passes (fixed order)
//! → collect variants
//! ```
//!
//! - **Safety gate**: [`safety::check`] — pure predicate, runs before any
//!   mutation, a block short-circuits with zero variants
//! - **Stages**: [`stages`] — ordered pure `(text, ctx) -> String` transforms
//! - **Repairs**: [`repair`] — ordered validators that rewrite candidates to
//!   remove defect classes the stages can introduce
//! - **Assembler**: [`assembler::rewrite`], [`assembler::rewrite_batch`]
//! - **Speech markup**: [`marks::annotate_breaks`] — cosmetic break markers
//!   for the downstream synthesizer
//!
//! The whole crate is synchronous, stateless, and side-effect-free per
//! invocation: no I/O, no shared mutable state. Rule tables are immutable
//! `LazyLock` statics owned by each stage.

#![deny(unsafe_code)]

pub mod assembler;
pub mod context;
pub mod cues;
pub mod marks;
pub mod repair;
pub mod safety;
pub mod stages;

pub use assembler::{rewrite, rewrite_batch, EngineConfig};
pub use context::StageContext;
