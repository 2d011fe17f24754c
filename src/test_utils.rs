// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` assertion macros so tests compare playback
//! positions, ratios and volumes without exact float equality.

pub use approx::assert_abs_diff_eq;
