//! Matrix type for 2D numeric data.

use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D matrix of floating-point values (row-major storage).
///
/// The backing buffer is allocated exactly once, at construction, and its
/// size never changes afterwards: [`Matrix::set_size`] reinterprets the
/// logical shape within that fixed capacity instead of reallocating. All
/// operations other than construction and [`Matrix::transpose`] are
/// allocation-free, which makes them usable from real-time control loops.
///
/// Release is `Drop`: ownership guarantees exactly one release per
/// allocation, and a released matrix cannot be touched again.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix taking ownership of an existing flat buffer.
    ///
    /// `data` must hold the elements in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is zero or if the data length
    /// doesn't match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{rows}x{cols}, {} elements", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of logical elements, `rows * cols`.
    #[must_use]
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the fixed buffer capacity, in elements.
    ///
    /// Set at construction and never changed; [`Matrix::set_size`] may pick
    /// any shape whose element count fits within it.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Reinterprets the logical shape without touching the buffer.
    ///
    /// Elements are not moved: the first `rows * cols` buffer positions are
    /// simply re-read under the new shape.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is zero or if the new shape needs
    /// more elements than the originally allocated capacity. The shape is
    /// left unchanged on error.
    pub fn set_size(&mut self, rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions { rows, cols });
        }
        let requested = rows * cols;
        if requested > self.data.len() {
            return Err(MatrizError::CapacityExceeded {
                requested,
                capacity: self.data.len(),
            });
        }
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    /// Returns the flat buffer offset of (row, col).
    ///
    /// # Panics
    ///
    /// Debug builds panic if the indices are out of bounds; release builds
    /// perform no check here.
    #[must_use]
    pub fn linear_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Debug builds panic if the indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.linear_index(row, col)]
    }

    /// Gets the element at (row, col) of the transposed matrix.
    ///
    /// Equivalent to `get(col, row)`: a coordinate swap at the access site,
    /// not a second buffer, so transposed reads stay allocation-free. The
    /// index bounds are swapped accordingly: `row < n_cols()` and
    /// `col < n_rows()`.
    ///
    /// # Panics
    ///
    /// Debug builds panic if the (swapped) indices are out of bounds.
    #[must_use]
    pub fn get_transposed(&self, row: usize, col: usize) -> T {
        debug_assert!(
            row < self.cols && col < self.rows,
            "transposed index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[col * self.cols + row]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Debug builds panic if the indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.linear_index(row, col);
        self.data[idx] = value;
    }

    /// Returns a row as a slice, without copying.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        assert!(
            row_idx < self.rows,
            "row {row_idx} out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the logical elements as a slice in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.rows * self.cols]
    }

    /// Returns the logical elements as a mutable slice in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let n = self.rows * self.cols;
        &mut self.data[..n]
    }

    /// Copies every element from `src` into `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ; `self` is left unmodified.
    pub fn copy_from(&mut self, src: &Self) -> Result<()> {
        if self.rows != src.rows || self.cols != src.cols {
            return Err(MatrizError::shape_mismatch(src.shape(), self.shape()));
        }
        let n = self.numel();
        self.data[..n].copy_from_slice(&src.data[..n]);
        Ok(())
    }

    /// Copies the first `rows * cols` elements of `src`, row-major, into `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if `src` holds fewer than `rows * cols` elements;
    /// `self` is left unmodified.
    pub fn copy_from_slice(&mut self, src: &[T]) -> Result<()> {
        let n = self.numel();
        if src.len() < n {
            return Err(MatrizError::buffer_too_short(n, src.len()));
        }
        self.data[..n].copy_from_slice(&src[..n]);
        Ok(())
    }

    /// Writes the transpose of `src` into `self`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `self` has the complementary shape
    /// (`self.n_rows() == src.n_cols()` and vice versa); `self` is left
    /// unmodified on error.
    pub fn copy_transpose(&mut self, src: &Self) -> Result<()> {
        if self.rows != src.cols || self.cols != src.rows {
            return Err(MatrizError::shape_mismatch(
                (src.cols, src.rows),
                self.shape(),
            ));
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                self.data[i * self.cols + j] = src.data[j * src.cols + i];
            }
        }
        Ok(())
    }

    /// Transposes the matrix into a new allocation.
    ///
    /// The one operation besides construction that allocates; use
    /// [`Matrix::copy_transpose`] or [`Matrix::get_transposed`] where that
    /// matters.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.numel());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Writes all `rows * cols` elements into `out` in row-major order.
    ///
    /// Positions of `out` past `rows * cols` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` holds fewer than `rows * cols` elements;
    /// `out` is left unmodified.
    pub fn flatten(&self, out: &mut [T]) -> Result<()> {
        let n = self.numel();
        if out.len() < n {
            return Err(MatrizError::buffer_too_short(n, out.len()));
        }
        out[..n].copy_from_slice(&self.data[..n]);
        Ok(())
    }

    /// Writes the elements into `out` as a single row vector.
    ///
    /// The element order is the same row-major traversal as
    /// [`Matrix::flatten`]; this spelling documents intent when the output
    /// feeds a consumer that treats the buffer as a 1xN row.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` holds fewer than `rows * cols` elements.
    pub fn flatten_to_row(&self, out: &mut [T]) -> Result<()> {
        self.flatten(out)
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) {
        let n = self.numel();
        self.data[..n].fill(value);
    }
}

impl Matrix<f64> {
    /// Allocates a `rows x cols` matrix with unspecified contents.
    ///
    /// Callers must write every element before reading it; the initial
    /// values carry no meaning. Use [`Matrix::zeros`] when zeroed contents
    /// are needed.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::zeros(rows, cols)
    }

    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix of ones.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is zero.
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates an identity matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero.
    pub fn eye(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Multiplies each element in place by `alpha`.
    ///
    /// Raw IEEE-754 semantics apply; NaN and infinity propagate.
    pub fn scale(&mut self, alpha: f64) {
        let n = self.numel();
        for x in &mut self.data[..n] {
            *x *= alpha;
        }
    }

    /// Adds `alpha * other` to `self`, element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ; `self` is left unmodified.
    pub fn add_scaled(&mut self, other: &Self, alpha: f64) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::shape_mismatch(other.shape(), self.shape()));
        }
        let n = self.numel();
        for i in 0..n {
            self.data[i] += alpha * other.data[i];
        }
        Ok(())
    }

    /// Adds `alpha` to each element of the main diagonal.
    ///
    /// On rectangular matrices the diagonal has `min(rows, cols)` entries.
    pub fn add_diagonal(&mut self, alpha: f64) {
        let n = self.rows.min(self.cols);
        for i in 0..n {
            self.data[i * self.cols + i] += alpha;
        }
    }

    /// Returns the Euclidean norm over all elements.
    #[must_use]
    pub fn norm(&self) -> f64 {
        let mut acc = 0.0;
        for &x in self.as_slice() {
            acc += x * x;
        }
        acc.sqrt()
    }

    /// Returns the sum of the absolute values of all elements.
    #[must_use]
    pub fn one_norm(&self) -> f64 {
        self.as_slice().iter().map(|x| x.abs()).sum()
    }

    /// Returns the Euclidean norm of the element-wise difference `self - other`.
    ///
    /// Zero for identical matrices and symmetric in its arguments; calling
    /// code uses it as a convergence / tolerance check.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn normed_difference(&self, other: &Self) -> Result<f64> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::shape_mismatch(other.shape(), self.shape()));
        }
        let mut acc = 0.0;
        for (a, b) in self.as_slice().iter().zip(other.as_slice()) {
            let diff = a - b;
            acc += diff * diff;
        }
        Ok(acc.sqrt())
    }
}

impl<T: Copy + PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.as_slice() == other.as_slice()
    }
}

/// Renders every element arranged by row and column.
///
/// One row per line, elements in row-major order separated by a single
/// space. Deterministic; intended for debugging and logging, not as a wire
/// format.
impl<T: Copy + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[r * self.cols + c])?;
            }
        }
        Ok(())
    }
}

/// Displays a matrix as a single row regardless of its shape.
///
/// Returned by [`Matrix::row_display`]; same row-major element order as
/// [`Matrix::flatten`], all on one line. Intended for 1xN or Nx1 matrices
/// being shown as a vector.
pub struct RowDisplay<'a, T> {
    matrix: &'a Matrix<T>,
}

impl<T: Copy + fmt::Display> fmt::Display for RowDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.matrix.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}

impl<T: Copy + fmt::Display> Matrix<T> {
    /// Returns an adapter that displays the matrix as a single row.
    #[must_use]
    pub fn row_display(&self) -> RowDisplay<'_, T> {
        RowDisplay { matrix: self }
    }

    /// Writes the row-and-column rendering to standard error.
    pub fn print(&self) {
        eprintln!("{self}");
    }

    /// Writes the single-row rendering to standard error.
    pub fn print_row(&self) {
        eprintln!("{}", self.row_display());
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
