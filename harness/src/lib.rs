//! Trellis Harness: the sliding-tile puzzle world and its front ends.
//!
//! The harness supplies a domain (boards, goals, move operators) to the
//! search crate and packages results as reports. It does NOT implement
//! search logic; it delegates to `trellis_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod console;
pub mod contract;
pub mod report;
pub mod runner;
pub mod worlds;
