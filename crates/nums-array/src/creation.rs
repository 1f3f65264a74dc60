//! Array Creation Functions
//!
//! Provides functions for creating arrays with deterministic initializations:
//! constant fills (zeros, ones, arbitrary value) and integer ranges.
//!
//! # Key Features
//! - Factory functions for common array initializations
//! - Fallible `try_*` variants for shapes that come from outside the program
//! - `arange` over an explicit [`ArangeArgs`] variant (1, 2 or 3 integers)
//! - [`parse_arange_args`] for untyped, string-sourced arguments
//!
//! @version 0.1.0
//! @author Nums Development Team

use nums_core::error::{Error, Result};

use crate::array::NdArray;

// =============================================================================
// Constant Initialization
// =============================================================================

/// Creates an array filled with zeros.
///
/// # Panics
/// Panics if the element count of `shape` overflows or cannot be allocated.
/// Use [`try_zeros`] for untrusted shapes.
///
/// # Example
/// ```rust
/// use nums_array::zeros;
/// let a = zeros(&[2, 3]);
/// assert!(a.as_slice().iter().all(|&v| v == 0.0));
/// ```
#[must_use]
pub fn zeros(shape: &[usize]) -> NdArray {
    full(shape, 0.0)
}

/// Creates an array filled with ones.
///
/// # Panics
/// Same contract as [`zeros`]; see [`try_ones`].
#[must_use]
pub fn ones(shape: &[usize]) -> NdArray {
    full(shape, 1.0)
}

/// Creates an array filled with a specific value.
///
/// # Arguments
/// * `shape` - Shape of the array
/// * `value` - Fill value
///
/// # Panics
/// Panics if the element count of `shape` overflows or cannot be allocated.
/// Use [`try_full`] for untrusted shapes.
#[must_use]
pub fn full(shape: &[usize], value: f64) -> NdArray {
    match try_full(shape, value) {
        Ok(array) => array,
        Err(e) => panic!("full: {e}"),
    }
}

/// Creates an array filled with zeros, or fails on an oversized shape.
pub fn try_zeros(shape: &[usize]) -> Result<NdArray> {
    try_full(shape, 0.0)
}

/// Creates an array filled with ones, or fails on an oversized shape.
pub fn try_ones(shape: &[usize]) -> Result<NdArray> {
    try_full(shape, 1.0)
}

/// Creates an array filled with `value`.
///
/// # Errors
/// `ShapeOverflow` when the element count or a stride of `shape` does not
/// fit in `isize`, `AllocationFailed` when the buffer cannot be reserved.
pub fn try_full(shape: &[usize], value: f64) -> Result<NdArray> {
    NdArray::from_fn(shape, |_| value)
}

/// Creates an array with the same shape as another, filled with zeros.
#[must_use]
pub fn zeros_like(other: &NdArray) -> NdArray {
    zeros(other.shape())
}

/// Creates an array with the same shape as another, filled with ones.
#[must_use]
pub fn ones_like(other: &NdArray) -> NdArray {
    ones(other.shape())
}

// =============================================================================
// Range Arguments
// =============================================================================

/// The three accepted argument forms of [`arange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArangeArgs {
    /// `stop`, meaning `(0, stop, 1)`.
    Stop(i64),
    /// `start, stop`, meaning `(start, stop, 1)`.
    StartStop(i64, i64),
    /// `start, stop, step`.
    StartStopStep(i64, i64, i64),
}

impl ArangeArgs {
    /// Expands to the full `(start, stop, step)` triple.
    #[must_use]
    pub fn bounds(self) -> (i64, i64, i64) {
        match self {
            Self::Stop(stop) => (0, stop, 1),
            Self::StartStop(start, stop) => (start, stop, 1),
            Self::StartStopStep(start, stop, step) => (start, stop, step),
        }
    }
}

impl From<i64> for ArangeArgs {
    fn from(stop: i64) -> Self {
        Self::Stop(stop)
    }
}

impl From<(i64, i64)> for ArangeArgs {
    fn from((start, stop): (i64, i64)) -> Self {
        Self::StartStop(start, stop)
    }
}

impl From<(i64, i64, i64)> for ArangeArgs {
    fn from((start, stop, step): (i64, i64, i64)) -> Self {
        Self::StartStopStep(start, stop, step)
    }
}

// Untyped integer literals default to `i32`, so `arange(5)` needs these.
impl From<i32> for ArangeArgs {
    fn from(stop: i32) -> Self {
        Self::Stop(i64::from(stop))
    }
}

impl From<(i32, i32)> for ArangeArgs {
    fn from((start, stop): (i32, i32)) -> Self {
        Self::StartStop(i64::from(start), i64::from(stop))
    }
}

impl From<(i32, i32, i32)> for ArangeArgs {
    fn from((start, stop, step): (i32, i32, i32)) -> Self {
        Self::StartStopStep(i64::from(start), i64::from(stop), i64::from(step))
    }
}

impl TryFrom<&[i64]> for ArangeArgs {
    type Error = Error;

    fn try_from(args: &[i64]) -> Result<Self> {
        match *args {
            [stop] => Ok(Self::Stop(stop)),
            [start, stop] => Ok(Self::StartStop(start, stop)),
            [start, stop, step] => Ok(Self::StartStopStep(start, stop, step)),
            _ => Err(Error::InvalidArguments { count: args.len() }),
        }
    }
}

/// Parses untyped arguments (e.g. from a command line) into [`ArangeArgs`].
///
/// The argument count is checked first, then every argument must parse as
/// an integer; all non-integer positions are reported together.
pub fn parse_arange_args<S: AsRef<str>>(args: &[S]) -> Result<ArangeArgs> {
    if !(1..=3).contains(&args.len()) {
        return Err(Error::InvalidArguments { count: args.len() });
    }

    let mut values = Vec::with_capacity(args.len());
    let mut bad_positions = Vec::new();
    let mut bad_values = Vec::new();

    for (position, arg) in args.iter().enumerate() {
        let raw = arg.as_ref();
        match raw.trim().parse::<i64>() {
            Ok(v) => values.push(v),
            Err(_) => {
                bad_positions.push(position);
                bad_values.push(raw.to_string());
            }
        }
    }

    if !bad_positions.is_empty() {
        return Err(Error::InvalidArgumentType {
            positions: bad_positions,
            values: bad_values,
        });
    }

    ArangeArgs::try_from(values.as_slice())
}

// =============================================================================
// Range Functions
// =============================================================================

/// Creates a column vector of integers from `start` to `stop` (exclusive).
///
/// The element count is `ceil((stop - start) / step)`, element `i` is
/// `start + i * step`, and the result always has shape `[count, 1]`.
///
/// A negative `step` with `start <= stop` is not rejected; its count is
/// non-positive, so the result is the empty `[0, 1]` array. Descending
/// ranges are not supported.
///
/// # Arguments
/// * `args` - `stop`, `(start, stop)` or `(start, stop, step)`, or an
///   [`ArangeArgs`] value
///
/// # Errors
/// `InvalidRange` when `start > stop`, `InvalidStep` when `step == 0`.
/// `ShapeOverflow` or `AllocationFailed` when the count is too large to store.
///
/// # Example
/// ```rust
/// use nums_array::arange;
/// let a = arange((2, 7)).unwrap();
/// assert_eq!(a.as_slice(), &[2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert_eq!(a.shape(), &[5, 1]);
/// ```
pub fn arange(args: impl Into<ArangeArgs>) -> Result<NdArray> {
    let (start, stop, step) = args.into().bounds();

    if start > stop {
        return Err(Error::InvalidRange { start, stop });
    }
    if step == 0 {
        return Err(Error::InvalidStep);
    }

    let span = i128::from(stop) - i128::from(start);
    let count = (span as f64 / step as f64).ceil();
    let count = if count > 0.0 { count as usize } else { 0 };

    tracing::debug!(start, stop, step, count, "arange");
    NdArray::from_fn(&[count, 1], |i| {
        (i128::from(start) + i as i128 * i128::from(step)) as f64
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nums_core::ErrorKind;

    #[test]
    fn test_zeros() {
        let a = zeros(&[2, 3, 2]);
        assert_eq!(a.shape(), &[2, 3, 2]);
        assert_eq!(a.strides(), &[6, 2, 1]);
        assert_eq!(a.size(), 12);
        assert!(a.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_ones() {
        let a = ones(&[2, 3, 2]);
        assert_eq!(a.strides(), &[6, 2, 1]);
        assert_eq!(a.as_slice(), &[1.0; 12]);
    }

    #[test]
    fn test_full() {
        let a = full(&[2, 2], 42.0);
        assert_eq!(a.as_slice(), &[42.0; 4]);
    }

    #[test]
    fn test_zero_sized_dimension() {
        let a = zeros(&[3, 0]);
        assert_eq!(a.size(), 0);
        assert!(a.is_empty());
        assert_eq!(a.strides(), &[0, 1]);
    }

    #[test]
    fn test_try_full() {
        let a = try_full(&[3], -2.0).unwrap();
        assert_eq!(a.as_slice(), &[-2.0; 3]);
        assert_eq!(try_ones(&[2, 2]).unwrap(), ones(&[2, 2]));
    }

    #[test]
    fn test_try_zeros_overflowing_shape() {
        let huge = usize::MAX / 2 + 1;
        let err = try_zeros(&[huge, 2]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeOverflow);

        let err = try_ones(&[0, huge, 2]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeOverflow);
    }

    #[test]
    #[should_panic(expected = "Shape overflow")]
    fn test_zeros_panics_on_overflowing_shape() {
        let _ = zeros(&[usize::MAX, 2]);
    }

    #[test]
    fn test_like() {
        let a = ones(&[4, 1]);
        let z = zeros_like(&a);
        assert_eq!(z.shape(), &[4, 1]);
        assert!(z.as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(ones_like(&z), a);
    }

    #[test]
    fn test_arange_stop() {
        let a = arange(ArangeArgs::Stop(5)).unwrap();
        assert_eq!(a.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.shape(), &[5, 1]);
        assert_eq!(a.strides(), &[1, 1]);
    }

    #[test]
    fn test_arange_start_stop() {
        let a = arange(ArangeArgs::StartStop(2, 7)).unwrap();
        assert_eq!(a.as_slice(), &[2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_arange_accepts_plain_integers() {
        assert_eq!(arange(5).unwrap().as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            arange((2, 7)).unwrap(),
            arange(ArangeArgs::StartStop(2, 7)).unwrap()
        );

        let a = arange((0, 10, 2)).unwrap();
        assert_eq!(a.as_slice(), &[0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(a.shape(), &[5, 1]);

        let stop: i64 = 3;
        assert_eq!(arange(stop).unwrap().size(), 3);
        assert_eq!(arange((5, 2)).unwrap_err().kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn test_arange_too_long_to_store() {
        let err = arange((i64::MIN, i64::MAX)).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::ShapeOverflow | ErrorKind::AllocationFailed
        ));
    }

    #[test]
    fn test_args_from_tuples() {
        assert_eq!(ArangeArgs::from(5_i64), ArangeArgs::Stop(5));
        assert_eq!(ArangeArgs::from((2_i64, 7_i64)), ArangeArgs::StartStop(2, 7));
        assert_eq!(
            ArangeArgs::from((0_i64, 10_i64, 2_i64)).bounds(),
            (0, 10, 2)
        );
        assert_eq!(ArangeArgs::Stop(5).bounds(), (0, 5, 1));
    }

    #[test]
    fn test_arange_step() {
        let a = arange(ArangeArgs::StartStopStep(0, 10, 2)).unwrap();
        assert_eq!(a.as_slice(), &[0.0, 2.0, 4.0, 6.0, 8.0]);

        // ceil(10 / 3) = 4
        let a = arange(ArangeArgs::StartStopStep(0, 10, 3)).unwrap();
        assert_eq!(a.as_slice(), &[0.0, 3.0, 6.0, 9.0]);
        assert_eq!(a.shape(), &[4, 1]);
    }

    #[test]
    fn test_arange_negative_start() {
        let a = arange(ArangeArgs::StartStop(-2, 1)).unwrap();
        assert_eq!(a.as_slice(), &[-2.0, -1.0, 0.0]);
    }

    #[test]
    fn test_arange_empty() {
        let a = arange(ArangeArgs::StartStop(3, 3)).unwrap();
        assert_eq!(a.shape(), &[0, 1]);
        assert!(a.is_empty());
    }

    #[test]
    fn test_arange_negative_step_is_empty() {
        let a = arange(ArangeArgs::StartStopStep(0, 5, -1)).unwrap();
        assert_eq!(a.shape(), &[0, 1]);
        assert!(a.is_empty());
    }

    #[test]
    fn test_arange_invalid_range() {
        let err = arange(ArangeArgs::StartStop(5, 2)).unwrap_err();
        assert_eq!(err, Error::InvalidRange { start: 5, stop: 2 });
    }

    #[test]
    fn test_arange_invalid_step() {
        let err = arange(ArangeArgs::StartStopStep(0, 5, 0)).unwrap_err();
        assert_eq!(err, Error::InvalidStep);
    }

    #[test]
    fn test_arange_range_checked_before_step() {
        let err = arange(ArangeArgs::StartStopStep(5, 2, 0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn test_args_try_from_slice() {
        assert_eq!(
            ArangeArgs::try_from(&[4_i64][..]).unwrap(),
            ArangeArgs::Stop(4)
        );
        assert_eq!(
            ArangeArgs::try_from(&[1_i64, 4, 2][..]).unwrap(),
            ArangeArgs::StartStopStep(1, 4, 2)
        );
        let empty: &[i64] = &[];
        assert_eq!(
            ArangeArgs::try_from(empty).unwrap_err(),
            Error::InvalidArguments { count: 0 }
        );
        assert_eq!(
            ArangeArgs::try_from(&[1_i64, 2, 3, 4][..]).unwrap_err(),
            Error::InvalidArguments { count: 4 }
        );
    }

    #[test]
    fn test_parse_arange_args() {
        assert_eq!(parse_arange_args(&["5"]).unwrap(), ArangeArgs::Stop(5));
        assert_eq!(
            parse_arange_args(&["0", " 10 ", "2"]).unwrap(),
            ArangeArgs::StartStopStep(0, 10, 2)
        );
    }

    #[test]
    fn test_parse_arange_args_count_checked_first() {
        let none: [&str; 0] = [];
        let err = parse_arange_args(&none).unwrap_err();
        assert_eq!(err, Error::InvalidArguments { count: 0 });

        let err = parse_arange_args(&["a", "b", "c", "d"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArguments);
    }

    #[test]
    fn test_parse_arange_args_type_error() {
        let err = parse_arange_args(&["1.5", "4", "x"]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgumentType {
                positions: vec![0, 2],
                values: vec!["1.5".to_string(), "x".to_string()],
            }
        );
    }
}
