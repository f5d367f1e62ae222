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

//! The side module determines which side of a gate edge the subject lies on.
//!
//! Each gate bound defines an edge: a line through the bound along the facing
//! heading. The edges and the subject are projected onto a local plane
//! centred on the anchor, with x the difference in longitude and y the
//! difference in latitude, in degrees. The projection does not preserve
//! distances, but it preserves which side of a line a point lies on.

use crate::error::{Error, Result};
use crate::geodesy::Geodesy;
use crate::latlong::LatLong;
use crate::trig::Degrees;
use geo_types::{Coord, Line};

/// Describes which side of an edge a point lies on, looking along the edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSide {
    signed_side: f64,
}

impl LineSide {
    #[must_use]
    pub const fn from_signed_side(signed_side: f64) -> Self {
        Self { signed_side }
    }

    /// The signed distance measure: positive on the left, negative on the right.
    #[must_use]
    pub const fn signed_side(&self) -> f64 {
        self.signed_side
    }

    /// Returns `true` if the point lies on the left of the edge.
    /// This method returns `false` if the point lies exactly on the edge.
    #[must_use]
    pub fn is_on_left_side(&self) -> bool {
        self.signed_side > 0.0
    }

    /// Returns `true` if the point lies on the right of the edge.
    /// This method returns `false` if the point lies exactly on the edge.
    #[must_use]
    pub fn is_on_right_side(&self) -> bool {
        self.signed_side < 0.0
    }

    /// Returns `true` if the point lies exactly on the edge.
    #[must_use]
    pub fn is_on_line(&self) -> bool {
        !self.is_on_left_side() && !self.is_on_right_side()
    }

    /// Returns the side as seen looking the other way along the edge.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            signed_side: -self.signed_side,
        }
    }
}

/// Project a position onto the local plane of the reference position.
/// The longitude difference is normalised, so positions either side of the
/// antimeridian are adjacent.
/// # Examples
/// ```
/// use via_orientation::latlong::LatLong;
/// use via_orientation::orientation::side::to_plane;
/// use via_orientation::trig::Degrees;
///
/// let reference = LatLong::new(Degrees(10.0), Degrees(179.5));
/// let position = LatLong::new(Degrees(10.5), Degrees(-179.5));
/// let coord = to_plane(&reference, &position);
/// assert_eq!(1.0, coord.x);
/// assert_eq!(0.5, coord.y);
/// ```
#[must_use]
pub fn to_plane(reference: &LatLong, position: &LatLong) -> Coord {
    Coord {
        x: (position.lon() - reference.lon()).0,
        y: position.lat().0 - reference.lat().0,
    }
}

/// Construct the edge through a gate bound along the facing heading.
/// * `geodesy` - the destination calculation.
/// * `anchor` - the anchor, the centre of the local plane.
/// * `bound` - the gate bound that the edge starts from.
/// * `facing` - the heading of the origin's facing line.
/// * `length` - the length of the edge in metres.
pub fn facing_edge<G: Geodesy>(
    geodesy: &G,
    anchor: &LatLong,
    bound: &LatLong,
    facing: Degrees,
    length: f64,
) -> Line {
    let end = geodesy.destination(bound, length, facing);
    Line::new(to_plane(anchor, bound), to_plane(anchor, &end))
}

/// Determine the side of an edge that a point lies on from the equation of
/// the line through the edge: y = slope * x + intercept.
///
/// Edges that are vertical in the local plane, i.e. facing north or south,
/// compare x coordinates instead.
///
/// returns the side.
/// # Errors
/// `DegenerateGeometry` if the edge has zero length or the side is not finite.
pub fn line_equation_side(edge: &Line, point: Coord) -> Result<LineSide> {
    if edge.start == edge.end {
        return Err(Error::DegenerateGeometry("zero length edge"));
    }

    let (dx, dy) = (edge.dx(), edge.dy());
    let signed_side = if dx.abs() <= f64::EPSILON * dy.abs() {
        (edge.start.x - point.x) * dy.signum()
    } else {
        let slope = dy / dx;
        let intercept = edge.end.y - slope * edge.end.x;
        let y_on_line = slope * point.x + intercept;
        (point.y - y_on_line) * dx.signum()
    };
    finite_side(signed_side)
}

/// Determine the side of an edge that a point lies on from the signed area
/// of the triangle formed by the edge and the point, i.e. the 2D cross
/// product of the edge and the vector from the start of the edge to the point.
///
/// returns the side.
/// # Errors
/// `DegenerateGeometry` if the edge has zero length or the side is not finite.
pub fn signed_area_side(edge: &Line, point: Coord) -> Result<LineSide> {
    if edge.start == edge.end {
        return Err(Error::DegenerateGeometry("zero length edge"));
    }

    let signed_side =
        edge.dx() * (point.y - edge.start.y) - edge.dy() * (point.x - edge.start.x);
    finite_side(signed_side)
}

fn finite_side(signed_side: f64) -> Result<LineSide> {
    if signed_side.is_finite() {
        Ok(LineSide::from_signed_side(signed_side))
    } else {
        Err(Error::DegenerateGeometry("undefined side of edge"))
    }
}
