//! Matriz: dense-matrix primitives for embedded numerical pipelines.
//!
//! Matriz provides the storage and manipulation layer that estimation and
//! control code builds upon: a row-major [`Matrix`] with a fixed-capacity
//! buffer, element access (including transposed reads without copying),
//! bulk data movement, scalar operations, and norm-based convergence
//! metrics. Nothing here allocates outside construction, so every
//! operation is safe to call from a real-time loop.
//!
//! There is deliberately no solver, decomposition, or multiplication
//! routine in this crate; it is the primitive layer such algorithms sit on.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! // Allocate once, up front.
//! let mut state = Matrix::zeros(2, 3).unwrap();
//! let target = Matrix::from_vec(2, 3, vec![5.0, 5.0, 5.0, 5.0, 5.0, 5.0]).unwrap();
//!
//! // Work in place from then on.
//! state.fill(5.0);
//! assert_eq!(state.numel(), 6);
//! assert!(state.normed_difference(&target).unwrap() < 1e-12);
//!
//! // Hand the contents to a flat consumer.
//! let mut buf = [0.0; 6];
//! state.flatten(&mut buf).unwrap();
//! assert_eq!(buf, [5.0; 6]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core [`Matrix`] type and its operations
//! - [`error`]: error types ([`MatrizError`], [`Result`])
//! - [`prelude`]: convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::{Matrix, RowDisplay};
