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

//! The sphere module contains types and functions for travelling along
//! Great Circles on the surface of a unit sphere using vectors.
//!
//! It is used to calculate destination positions: the start position is
//! converted to a unit vector, moved along the Great Circle in the direction
//! of the azimuth and then converted back into a `LatLong`.

extern crate nalgebra as na;
use crate::latlong::LatLong;
use crate::trig;
use crate::trig::{Angle, Degrees, UnitNegRange};
use crate::Validate;
use contracts::{debug_ensures, debug_requires};

/// A Point is a nalgebra Vector3.
pub type Point = na::Vector3<f64>;

/// Create a Point from latitude and longitude
/// @pre |lat| <= 90.0 degrees.
/// * `lat` - the latitude.
/// * `lon` - the longitude.
///
/// returns a Point on the unit sphere.
#[debug_ensures(is_unit(&ret))]
#[must_use]
pub fn to_sphere(lat: Angle, lon: Angle) -> Point {
    Point::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

impl From<&LatLong> for Point {
    /// Convert a `LatLong` to a Point on the unit sphere
    fn from(value: &LatLong) -> Self {
        to_sphere(value.lat_angle(), value.lon_angle())
    }
}

/// Calculate the latitude of a Point.
#[must_use]
pub fn latitude(a: &Point) -> Angle {
    let sin_a = UnitNegRange::clamp(a.z);
    Angle::new(sin_a, trig::swap_sin_cos(sin_a))
}

/// Calculate the longitude of a Point.
#[must_use]
pub fn longitude(a: &Point) -> Angle {
    Angle::from_y_x(a.y, a.x)
}

impl From<&Point> for LatLong {
    /// Convert a Point to a`LatLong`
    fn from(value: &Point) -> Self {
        Self::new(
            Degrees::from(latitude(value)),
            Degrees::from(longitude(value)),
        )
    }
}

/// Determine whether a Point is a unit vector.
///
/// returns true if Point is a unit vector, false otherwise.
#[must_use]
pub fn is_unit(a: &Point) -> bool {
    const MIN_POINT_SQ_LENGTH: f64 = 1.0 - 12.0 * std::f64::EPSILON;
    const MAX_POINT_SQ_LENGTH: f64 = 1.0 + 12.0 * std::f64::EPSILON;

    (MIN_POINT_SQ_LENGTH..=MAX_POINT_SQ_LENGTH).contains(&(a.norm()))
}

impl Validate for Point {
    /// Test whether a Point is valid.
    /// I.e. whether the Point is a unit vector.
    fn is_valid(&self) -> bool {
        is_unit(self)
    }
}

/// Determine whether two Points are orthogonal (perpendicular).
///
/// returns true if a and b are orthogonal, false otherwise.
#[must_use]
pub fn are_orthogonal(a: &Point, b: &Point) -> bool {
    const MAX_LENGTH: f64 = 4.0 * std::f64::EPSILON;

    (-MAX_LENGTH..=MAX_LENGTH).contains(&(a.dot(b)))
}

/// Calculate the direction vector along a Great Circle from an initial
/// position and an azimuth.
/// See: Panou and Korakitis equations: 30, 31, & 32a
/// <https://arxiv.org/abs/1811.03513>
/// * `lat` - start point Latitude.
/// * `lon` - start point Longitude.
/// * `azi` - start point azimuth.
///
/// returns the direction vector at the point on the great circle.
#[debug_ensures(is_unit(&ret))]
#[must_use]
pub fn calculate_direction(lat: Angle, lon: Angle, azi: Angle) -> Point {
    let x = UnitNegRange::clamp(-lat.sin() * lon.cos() * azi.cos() - lon.sin() * azi.sin());
    let y = UnitNegRange::clamp(-lat.sin() * lon.sin() * azi.cos() + lon.cos() * azi.sin());
    let z = UnitNegRange(lat.cos() * azi.cos());

    Point::new(x.0, y.0, z.0)
}

/// Calculate the position of a point along a Great Circle arc.
/// * `a` - the start point.
/// * `dir` - the direction vector of a Great Circle at a.
/// * `distance` - the a Great Circle as an Angle.
///
/// returns the position vector at the point on the great circle.
#[debug_requires(is_unit(a) && is_unit(dir))]
#[debug_ensures(is_unit(&ret))]
#[must_use]
pub fn position(a: &Point, dir: &Point, distance: Angle) -> Point {
    distance.cos() * a + distance.sin() * dir
}

/// Calculate the position reached by travelling along a Great Circle.
/// * `start` - the start position.
/// * `azimuth` - the initial azimuth from the start position.
/// * `distance` - the Great Circle distance as an Angle.
///
/// returns the position at distance along the Great Circle.
#[must_use]
pub fn travel(start: &LatLong, azimuth: Angle, distance: Angle) -> LatLong {
    let (lat, lon) = (start.lat_angle(), start.lon_angle());
    let a = to_sphere(lat, lon);
    let dir = calculate_direction(lat, lon, azimuth);
    LatLong::from(&position(&a, &dir, distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_within_tolerance;
    use crate::trig::Radians;

    #[test]
    fn test_point_lat_long() {
        let a = LatLong::new(Degrees(45.0), Degrees(-60.0));
        let point = Point::from(&a);
        assert!(point.is_valid());

        let result = LatLong::from(&point);
        assert!(is_within_tolerance(45.0, result.lat().0, 32.0 * std::f64::EPSILON));
        assert!(is_within_tolerance(-60.0, result.lon().0, 64.0 * std::f64::EPSILON));
    }

    #[test]
    fn test_calculate_direction_north_and_east() {
        let lat = Angle::default();
        let lon = Angle::default();

        let north = calculate_direction(lat, lon, Angle::default());
        assert_eq!(Point::new(0.0, 0.0, 1.0), north);

        let east = calculate_direction(lat, lon, Angle::from(Degrees(90.0)));
        assert_eq!(0.0, east.x);
        assert_eq!(1.0, east.y);
        assert_eq!(0.0, east.z);

        let a = to_sphere(lat, lon);
        assert!(are_orthogonal(&a, &north));
        assert!(are_orthogonal(&a, &east));
        assert!(!are_orthogonal(&a, &a));
    }

    #[test]
    fn test_travel_along_equator() {
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));

        let result = travel(&a, Angle::from(Degrees(90.0)), Angle::from(Degrees(30.0)));
        assert_eq!(0.0, result.lat().0);
        assert!(is_within_tolerance(30.0, result.lon().0, 32.0 * std::f64::EPSILON));

        let result = travel(&a, Angle::from(Degrees(-90.0)), Angle::from(Degrees(30.0)));
        assert_eq!(0.0, result.lat().0);
        assert!(is_within_tolerance(-30.0, result.lon().0, 32.0 * std::f64::EPSILON));
    }

    #[test]
    fn test_travel_along_meridian() {
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));

        let result = travel(&a, Angle::default(), Angle::from(Radians(0.25)));
        assert_eq!(0.0, result.lon().0);
        assert!(is_within_tolerance(
            Degrees::from(Radians(0.25)).0,
            result.lat().0,
            32.0 * std::f64::EPSILON
        ));
    }
}
