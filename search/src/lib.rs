//! Trellis Search: best-first state-space search over kernel states.
//!
//! This crate provides the search layer for Trellis. It depends only on
//! `trellis_kernel`; it does NOT depend on `trellis_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! trellis_kernel  ←  trellis_search  ←  trellis_harness
//! (state, ops)       (frontier, nodes)   (puzzle, console, reports)
//! ```
//!
//! # Key types
//!
//! - [`search::SearchEngine`] -- the expansion loop and its phases
//! - [`node::SearchNode`] -- immutable node with parent index, moves and cost
//! - [`tree::NodeArena`] -- owns nodes; iterative ancestor walks
//! - [`frontier::BestFirstFrontier`] -- min-heap of keyed node ids
//! - [`strategy::Strategy`] -- uniform-cost and A* ranking variants
//! - [`policy::SearchPolicy`] -- termination and node budget
//! - [`path::PathTrace`] -- root-to-solution rendering

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
pub mod strategy;
pub mod tree;
pub mod visited;
