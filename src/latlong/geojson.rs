// Copyright (c) 2024 Via Technology Ltd.

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

//! The `geojson` module converts `LatLong` positions to and from
//! [geo-types](https://crates.io/crates/geo-types) coordinates and points,
//! so that origins and subjects can be read from
//! [GeoJSON](https://geojson.org/) features.
//! Note: `GeoJSON` coordinate order is **lon, lat.**

use crate::error::Error;
use crate::latlong::LatLong;

impl TryFrom<&geo_types::Coord> for LatLong {
    type Error = Error;

    /// Attempt to convert a `GeoJSON Coord` to a `LatLong`.
    fn try_from(item: &geo_types::Coord) -> Result<Self, Self::Error> {
        Self::try_from((item.y, item.x))
    }
}

impl From<&LatLong> for geo_types::Coord {
    fn from(a: &LatLong) -> Self {
        Self {
            x: a.lon().0,
            y: a.lat().0,
        }
    }
}

impl TryFrom<&geo_types::Point> for LatLong {
    type Error = Error;

    /// Attempt to convert a `GeoJSON Point` to a `LatLong`.
    fn try_from(item: &geo_types::Point) -> Result<Self, Self::Error> {
        Self::try_from(&item.0)
    }
}

impl From<&LatLong> for geo_types::Point {
    fn from(a: &LatLong) -> Self {
        Self::new(a.lon().0, a.lat().0)
    }
}
