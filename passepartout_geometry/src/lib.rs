// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=passepartout_geometry --heading-base-level=0

//! Passepartout Geometry: affine bookkeeping and rotated-rectangle helpers.
//!
//! This crate holds the pure, stateless pieces of the crop engine:
//! - [`ImageMatrix`]: a uniform-scale + rotation + translation transform that
//!   is only ever mutated through "post" compositions (translate, scale about
//!   a pivot, rotate about a pivot).
//! - [`Quad`]: four corners of a possibly rotated rectangle, in the fixed
//!   order top-left, top-right, bottom-right, bottom-left.
//! - Rectangle helpers such as [`bounding_rect_of`] and the key coverage
//!   predicate [`rotated_rect_contains_rect`].
//!
//! It does **not** own any image, crop rectangle, or animation state. Those
//! live in higher-level crates which call into these helpers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use passepartout_geometry::{ImageMatrix, Quad, rotated_rect_contains_rect};
//!
//! let image = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let mut matrix = ImageMatrix::IDENTITY;
//! matrix.post_translate(Vec2::new(10.0, 10.0));
//! matrix.post_rotate(15.0, Point::new(210.0, 160.0));
//!
//! let corners = matrix.map_rect(image);
//! let crop = Rect::new(150.0, 120.0, 250.0, 200.0);
//! assert!(rotated_rect_contains_rect(&corners, crop, matrix.angle()));
//! ```
//!
//! ## Conventions
//!
//! - View coordinates are y-down, so a positive angle turns clockwise on
//!   screen.
//! - Angles are in degrees at the public surface and normalized to
//!   `(-180, 180]`.
//! - Bounding rectangles are computed from coordinates rounded to one decimal
//!   so that equivalent inputs produce identical bounds.
//!
//! This crate is `no_std`. Build with `default-features = false` and the
//! `libm` feature to use it without the standard library.

#![no_std]

mod matrix;
mod quad;
mod rect;

pub use matrix::{ImageMatrix, normalize_degrees};
pub use quad::Quad;
pub use rect::{
    bounding_rect_of, center_of, corners_of, rect_contains_rect, rotated_rect_contains_rect,
    side_lengths_of,
};
