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

//! The geodesy module contains the `Geodesy` trait: the distance, bearing
//! and destination calculations that the orientation classification
//! depends upon.
//!
//! The `Spherical` type implements `Geodesy` on a sphere with the radius of
//! the Earth using the `latlong` and `sphere` modules.
//! Other implementations, e.g. on an ellipsoid or a local flat plane, may be
//! supplied to a `Classifier` instead.

use crate::latlong::{calculate_azimuth_and_distance, LatLong};
use crate::sphere;
use crate::trig::{Angle, Degrees, Radians};
use contracts::debug_requires;

/// The radius of the Earth sphere in metres.
/// The WGS84 equatorial radius, as used by spherical web mapping libraries.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// The geodesic calculations required to classify an orientation.
pub trait Geodesy {
    /// The distance between two positions in metres.
    fn distance(&self, a: &LatLong, b: &LatLong) -> f64;

    /// The initial bearing from position a to position b, as a compass
    /// bearing in the range: 0.0 <= value < 360.0
    fn initial_bearing(&self, a: &LatLong, b: &LatLong) -> Degrees;

    /// The position reached by travelling distance metres from origin along
    /// the initial bearing.
    fn destination(&self, origin: &LatLong, distance: f64, bearing: Degrees) -> LatLong;
}

impl<G: Geodesy + ?Sized> Geodesy for &G {
    fn distance(&self, a: &LatLong, b: &LatLong) -> f64 {
        (**self).distance(a, b)
    }

    fn initial_bearing(&self, a: &LatLong, b: &LatLong) -> Degrees {
        (**self).initial_bearing(a, b)
    }

    fn destination(&self, origin: &LatLong, distance: f64, bearing: Degrees) -> LatLong {
        (**self).destination(origin, distance, bearing)
    }
}

/// Great Circle geodesy on a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    radius: f64,
}

impl Spherical {
    /// Construct a `Spherical` geodesy with the given radius in metres.
    /// # Examples
    /// ```
    /// use via_orientation::geodesy::{Spherical, EARTH_RADIUS};
    ///
    /// let earth = Spherical::new(EARTH_RADIUS);
    /// assert_eq!(EARTH_RADIUS, earth.radius());
    /// ```
    #[debug_requires(radius.is_finite() && 0.0 < radius)]
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Spherical {
    fn default() -> Self {
        Self {
            radius: EARTH_RADIUS,
        }
    }
}

impl Geodesy for Spherical {
    fn distance(&self, a: &LatLong, b: &LatLong) -> f64 {
        let (_, distance) = calculate_azimuth_and_distance(a, b);
        distance.0 * self.radius
    }

    fn initial_bearing(&self, a: &LatLong, b: &LatLong) -> Degrees {
        let (azimuth, _) = calculate_azimuth_and_distance(a, b);
        Degrees::from(azimuth).to_bearing()
    }

    fn destination(&self, origin: &LatLong, distance: f64, bearing: Degrees) -> LatLong {
        let distance = Angle::from(Radians(distance / self.radius));
        sphere::travel(origin, Angle::from(bearing), distance)
    }
}
