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

//! The anchor module derives the anchor: the point on the origin's facing
//! line level with the subject.
//!
//! The origin, the subject and the anchor form a right angled triangle:
//! * angle A is at the subject, opposite side a from the subject to the anchor,
//! * angle B is the right angle at the anchor, opposite side b from the origin
//!   to the subject,
//! * angle C is at the origin, opposite side c from the origin to the anchor.
//!
//! The triangle is solved with the Law of Sines. The anchor itself is placed
//! from the along track distance of the subject, so that it lies abeam the
//! subject whatever the form of the facing heading.

use crate::error::{Error, Result};
use crate::geodesy::Geodesy;
use crate::latlong::LatLong;
use crate::trig::{Angle, AngleUnit, Degrees};
use contracts::debug_requires;
use serde::Serialize;

/// The angle at the anchor.
pub const RIGHT_ANGLE: Degrees = Degrees(90.0);

/// The sum of the angles of a plane triangle.
const STRAIGHT_ANGLE: f64 = 180.0;

/// Fold the difference between the facing heading and the bearing of the
/// subject into the triangle angle at the subject.
///
/// The difference is not normalised: differences greater than 90 degrees in
/// magnitude are reflected about 180 degrees.
/// # Examples
/// ```
/// use via_orientation::orientation::anchor::fold_angle;
/// use via_orientation::trig::Degrees;
///
/// assert_eq!(Degrees(45.0), fold_angle(Degrees(90.0), Degrees(45.0)));
/// assert_eq!(Degrees(90.0), fold_angle(Degrees(0.0), Degrees(90.0)));
/// assert_eq!(Degrees(60.0), fold_angle(Degrees(300.0), Degrees(60.0)));
/// ```
#[must_use]
pub fn fold_angle(facing: Degrees, bearing: Degrees) -> Degrees {
    let difference = facing.0 - bearing.0;
    if difference.abs() > RIGHT_ANGLE.0 {
        Degrees((difference - STRAIGHT_ANGLE).abs())
    } else {
        Degrees(difference.abs())
    }
}

/// The bearing of the subject relative to the facing heading, normalised
/// into the range: -180.0 < value <= 180.0
/// # Examples
/// ```
/// use via_orientation::orientation::anchor::relative_bearing;
/// use via_orientation::trig::Degrees;
///
/// assert_eq!(Degrees(0.0), relative_bearing(Degrees(-60.0), Degrees(300.0)));
/// assert_eq!(Degrees(10.0), relative_bearing(Degrees(370.0), Degrees(20.0)));
/// assert_eq!(Degrees(180.0), relative_bearing(Degrees(0.0), Degrees(180.0)));
/// assert_eq!(Degrees(-90.0), relative_bearing(Degrees(720.0), Degrees(270.0)));
/// ```
#[must_use]
pub fn relative_bearing(facing: Degrees, bearing: Degrees) -> Degrees {
    Degrees(libm::remainder(bearing.0 - facing.0, 360.0)).normalise()
}

/// Calculate the length of a side of a triangle with the Law of Sines:
/// a / sin(A) = b / sin(B)
/// * `angle` - the angle opposite the side to calculate.
/// * `side` - the length of a known side.
/// * `opposite` - the angle opposite the known side.
/// * `unit` - the unit that the angles are interpreted in.
///
/// returns the length of the side.
/// # Errors
/// `DegenerateGeometry` if the sine of the opposite angle is zero.
pub fn law_of_sines(angle: Degrees, side: f64, opposite: Degrees, unit: AngleUnit) -> Result<f64> {
    let sin_opposite = unit.sine(opposite);
    if sin_opposite.abs() < f64::MIN_POSITIVE {
        return Err(Error::DegenerateGeometry("zero sine of opposite angle"));
    }
    Ok(unit.sine(angle) * side / sin_opposite)
}

/// A solved right angled triangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Triangle {
    /// The angle at the subject.
    pub angle_a: Degrees,
    /// The right angle at the anchor.
    pub angle_b: Degrees,
    /// The angle at the origin.
    pub angle_c: Degrees,
    /// The side from the subject to the anchor.
    pub side_a: f64,
    /// The side from the origin to the subject.
    pub side_b: f64,
    /// The side from the origin to the anchor.
    pub side_c: f64,
}

/// Solve the triangle from the angle at the subject and the distance
/// between the origin and the subject.
/// # Errors
/// `DegenerateGeometry` if the sine of the right angle is zero in `unit`.
#[debug_requires(0.0 < side_b)]
pub fn solve_triangle(angle_a: Degrees, side_b: f64, unit: AngleUnit) -> Result<Triangle> {
    let angle_b = RIGHT_ANGLE;
    let side_a = law_of_sines(angle_a, side_b, angle_b, unit)?;
    let angle_c = Degrees(STRAIGHT_ANGLE - angle_a.0 - angle_b.0);
    let side_c = law_of_sines(angle_c, side_b, angle_b, unit)?;

    Ok(Triangle {
        angle_a,
        angle_b,
        angle_c,
        side_a,
        side_b,
        side_c,
    })
}

/// The anchor position and the triangle solved for it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Anchor {
    pub position: LatLong,
    /// The signed distance from the origin to the anchor along the facing
    /// heading in metres, negative if the anchor is behind the origin.
    pub along_track: f64,
    pub triangle: Triangle,
}

/// Derive the anchor on the origin's facing line, abeam the subject.
/// * `geodesy` - the distance, bearing and destination calculations.
/// * `origin` - the origin position.
/// * `facing` - the heading of the origin's facing line, it need not be
///   normalised.
/// * `subject` - the subject position.
/// * `unit` - the unit that the triangle angles are interpreted in.
///
/// returns the anchor.
/// # Errors
/// `DegenerateGeometry` if the origin and subject coincide, or the geodesy
/// returns a distance or bearing that is not finite.
pub fn derive_anchor<G: Geodesy>(
    geodesy: &G,
    origin: &LatLong,
    facing: Degrees,
    subject: &LatLong,
    unit: AngleUnit,
) -> Result<Anchor> {
    if origin == subject {
        return Err(Error::DegenerateGeometry("origin and subject coincide"));
    }

    let side_b = geodesy.distance(origin, subject);
    if !side_b.is_finite() || side_b <= 0.0 {
        return Err(Error::DegenerateGeometry("invalid distance to subject"));
    }

    let bearing = geodesy.initial_bearing(origin, subject);
    if !bearing.0.is_finite() {
        return Err(Error::DegenerateGeometry("invalid bearing to subject"));
    }
    let triangle = solve_triangle(fold_angle(facing, bearing), side_b, unit)?;

    let along_track = side_b * Angle::from(relative_bearing(facing, bearing)).cos();
    let position = if along_track < 0.0 {
        geodesy.destination(origin, -along_track, facing + Degrees(STRAIGHT_ANGLE))
    } else {
        geodesy.destination(origin, along_track, facing)
    };

    Ok(Anchor {
        position,
        along_track,
        triangle,
    })
}
