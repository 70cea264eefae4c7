// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Why a transform operation was not applied.
///
/// None of these are fatal. Interactive callers usually treat every variant as
/// "no change".
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TransformError {
    /// The operation involves a degenerate rectangle, a zero-size image or a
    /// non-finite value.
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        /// What was degenerate.
        reason: &'static str,
    },
    /// The resulting scale would leave the legal scale range.
    #[error("scale {requested} is outside [{min}, {max}]")]
    OutOfBounds {
        /// Scale the operation would have produced.
        requested: f64,
        /// Smallest legal scale.
        min: f64,
        /// Largest legal scale.
        max: f64,
    },
    /// No image has been loaded and laid out yet.
    #[error("image is not laid out yet")]
    NotReady,
}

/// A configuration value is out of range.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A numeric setting must be strictly positive and finite.
    #[error("`{field}` must be positive and finite, got {value}")]
    NotPositive {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A count or duration must be non-zero.
    #[error("`{field}` must be non-zero")]
    Zero {
        /// Name of the offending setting.
        field: &'static str,
    },
}
