//! Trellis Kernel: the domain-facing contracts of the Trellis search engine.
//!
//! # API Surface
//!
//! - [`state::SearchState`] -- what a state must provide to be searched
//! - [`operator::OperatorTable`] -- the named, costed transitions applied to states
//! - [`digest::canonical_hash`] -- domain-separated content hashing for artifacts
//!
//! # Module Dependency Direction
//!
//! `state` ← `operator`; `digest` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod operator;
pub mod state;
