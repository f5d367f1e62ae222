// Copyright (c) 2018-2024 Via Technology Ltd.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! This library classifies whether a subject position lies to the LEFT of,
//! in FRONT of, or to the RIGHT of the line that an origin position is
//! facing along, on the surface of the Earth.
//!
//! The classification is calculated in three steps:
//! 1. the point on the origin's facing line closest to the subject (the
//!    *anchor*) is found by solving a right angled triangle with the
//!    Law of Sines,
//! 2. the anchor may be widened into a short *gate* perpendicular to the
//!    facing line,
//! 3. the side of the gate that the subject lies on is determined by either
//!    a line equation or a signed area test.
//!
//! The `trig` and `latlong` modules perform spherical trigonometric calculations;
//! the `sphere` module uses vectors. Distances, bearings and destinations are
//! obtained through the `geodesy::Geodesy` trait so that the classification
//! can be run against any geodesy implementation.
//!
//! The library uses the [contracts](https://crates.io/crates/contracts) crate
//! to implement Design By Contract [(DbC)](https://wiki.c2.com/?DesignByContract).
//! It also defines a `Validate` trait to define an `is_valid` invariant
//! function to support Design By Contract invariants.
//!
//! # Examples
//! ```
//! use via_orientation::latlong::LatLong;
//! use via_orientation::orientation::{Classifier, Orientation};
//! use via_orientation::trig::Degrees;
//!
//! let origin = LatLong::new(Degrees(0.0), Degrees(0.0));
//! let mut classifier = Classifier::new(origin, Degrees(0.0));
//! classifier.set_subject(LatLong::new(Degrees(0.0), Degrees(0.001)));
//! assert_eq!(Ok(Orientation::Right), classifier.classify());
//! ```

pub mod error;
pub mod geodesy;
pub mod latlong;
pub mod orientation;
pub mod sphere;
pub mod trig;

pub use error::{Error, Result};

use contracts::{debug_ensures, debug_requires};

/// Clamp value into the range: min to max inclusive.
/// * `value` - value to clamp
/// * `min` - minimum value.
/// * `max` - maximum value.
#[debug_ensures((min ..= max).contains(&ret))]
#[inline]
#[must_use]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy,
{
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

/// The Validate trait.
pub trait Validate {
    /// return true if the type is valid, false otherwise.
    fn is_valid(&self) -> bool;
}

/// Check whether a value is within tolerance.
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if value is <= tolerance
#[debug_requires(value >= 0.0)]
#[inline]
#[must_use]
pub fn is_small(value: f64, tolerance: f64) -> bool {
    value <= tolerance
}

/// Check whether a value is within tolerance of a reference value.
/// * `reference` the required value
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if abs(reference - value) is <= tolerance
#[inline]
#[must_use]
pub fn is_within_tolerance(reference: f64, value: f64, tolerance: f64) -> bool {
    is_small(libm::fabs(reference - value), tolerance)
}
