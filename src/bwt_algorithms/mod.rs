//! The bwt_algorithms module holds the Burrows-Wheeler stage of the codec.
//!
//! The forward transform sorts every cyclic rotation of a sentinel-terminated sequence and
//! reads off the last column. Because the sentinel occurs once and sorts first, no two
//! rotations are equal and the result is fully determined by the input.
//!
//! Two inverses are provided. The column sort rebuilds the rotation table one column per pass
//! and is quadratic in time and memory. The last-to-first walk is linear and produces the
//! same output; it is selectable for longer inputs.
//!
pub mod bwt_inverse;
pub mod bwt_sort;
