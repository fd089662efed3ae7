//! Core compute primitives (Matrix).
//!
//! The storage and access layer that estimation and control algorithms
//! build upon. Allocation happens at construction only; every other
//! operation works in place or through caller-provided buffers.

mod matrix;

pub use matrix::{Matrix, RowDisplay};

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
