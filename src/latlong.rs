// Copyright (c) 2020-2024 Via Technology Ltd. All Rights Reserved.

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

//! The latlong module contains types and functions for representing positions
//! on the surface of a sphere.
//!
//! A `LatLong` holds the latitude and longitude in `Degrees` exactly as they
//! were supplied, since the classification tests are performed on the
//! latitude and longitude values themselves.
//!
//! The `latlong` module includes the `calculate_azimuth_and_distance` function to
//! calculate the initial azimuth (a.k.a bearing and distance) between two positions.
//! The azimuth is returned as an `Angle` and the distance is returned in `Radians`.
//!
//! The module also contains types and functions for serializing and
//! deserializing `LatLong` using [serde](https://crates.io/crates/serde).

pub mod geojson;

use crate::error::Error;
use crate::trig::{calculate_gc_azimuth, calculate_gc_distance, Angle, Degrees, Radians};
use crate::Validate;
use contracts::debug_requires;
use serde::{Deserialize, Serialize};

/// A position as a latitude and longitude pair of `Degrees`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLongFields")]
pub struct LatLong {
    lat: Degrees,
    lon: Degrees,
}

impl Validate for LatLong {
    /// Test whether a `LatLong` is valid.
    /// I.e. whether the latitude lies in the range: -90.0 <= value <= 90.0
    /// and the longitude lies in the range: -180.0 <= value <= 180.0
    fn is_valid(&self) -> bool {
        self.lat.is_valid_latitude() && self.lon.is_valid()
    }
}

impl LatLong {
    #[debug_requires(lat.is_valid_latitude() && lon.is_valid())]
    #[must_use]
    pub fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }

    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }

    /// The latitude as an `Angle`.
    #[must_use]
    pub fn lat_angle(&self) -> Angle {
        Angle::from(self.lat)
    }

    /// The longitude as an `Angle`.
    #[must_use]
    pub fn lon_angle(&self) -> Angle {
        Angle::from(self.lon)
    }
}

impl TryFrom<(f64, f64)> for LatLong {
    type Error = Error;

    /// Attempt to convert a pair of f64 values in Latitude, Longitude order.
    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        let (lat, lon) = value;
        if !Degrees::is_latitude(lat) {
            Err(Error::InvalidCoordinate("latitude invalid"))
        } else if !Degrees::is_longitude(lon) {
            Err(Error::InvalidCoordinate("longitude invalid"))
        } else {
            Ok(Self::new(Degrees(lat), Degrees(lon)))
        }
    }
}

/// The serialized fields of a `LatLong`, validated on deserialization.
#[derive(Deserialize)]
struct LatLongFields {
    lat: Degrees,
    lon: Degrees,
}

impl TryFrom<LatLongFields> for LatLong {
    type Error = Error;

    fn try_from(value: LatLongFields) -> Result<Self, Self::Error> {
        Self::try_from((value.lat.0, value.lon.0))
    }
}

/// Calculate the azimuth and distance along the great circle of point b from
/// point a.
/// * `a`, `b` - the start and end positions
///
/// returns the Great Circle azimuth relative to North and distance of point b
/// from point a.
#[must_use]
pub fn calculate_azimuth_and_distance(a: &LatLong, b: &LatLong) -> (Angle, Radians) {
    let (lat_a, lat_b) = (a.lat_angle(), b.lat_angle());
    let delta_long = b.lon_angle() - a.lon_angle();
    let azimuth = calculate_gc_azimuth(lat_a, lat_b, delta_long);
    let distance = calculate_gc_distance(lat_a, lat_b, delta_long);
    (azimuth, distance)
}
