//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - legal move generation
//! - `make_undo.rs` - move application and undo correctness
//! - `checks.rs` - check, checkmate, and stalemate detection
//! - `eval.rs` - static evaluation
//! - `search.rs` - alpha-beta search
//! - `proptest.rs` - property-based tests

mod eval;
mod movegen;
