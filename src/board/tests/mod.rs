//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move generation in concrete positions
//! - `edge_cases.rs` - Starting layouts, promotion and board edges
//! - `proptest.rs` - Property-based tests over random games

mod edge_cases;
