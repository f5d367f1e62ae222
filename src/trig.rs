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

//! The trig module contains types and functions for performing trigonometric
//! calculations.
//!
//! It includes the great circle azimuth and distance calculations used by
//! the `Spherical` geodesy and the `AngleUnit` used to take the sines of the
//! angles of the classification triangle.

#![allow(clippy::float_cmp)]

use super::{clamp, Validate};
use contracts::*;
use serde::{Deserialize, Serialize};
use std::convert::From;
use std::ops::{Add, Neg, Sub};

/// The Degrees newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

/// The Radians newtype an f64.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Degrees {
    /// Test whether a value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    #[must_use]
    pub fn is_latitude(value: f64) -> bool {
        (-90.0..=90.0).contains(&value)
    }

    /// Test whether a value is a valid longitude.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    #[must_use]
    pub fn is_longitude(value: f64) -> bool {
        (-180.0..=180.0).contains(&value)
    }

    /// Normalise a Degrees value into the range: -180.0 < value <= 180.0
    /// # Examples
    /// ```
    /// use via_orientation::trig::Degrees;
    ///
    /// assert_eq!(0.0, Degrees(-360.0).normalise().0);
    /// assert_eq!(180.0, Degrees(-180.0).normalise().0);
    /// assert_eq!(180.0, Degrees(180.0).normalise().0);
    /// assert_eq!(0.0, Degrees(360.0).normalise().0);
    /// ```
    #[must_use]
    pub fn normalise(&self) -> Self {
        if self.0 <= -180.0 {
            Self(self.0 + 360.0)
        } else if self.0 <= 180.0 {
            *self
        } else {
            Self(self.0 - 360.0)
        }
    }

    /// Convert a Degrees value in the range: -180.0 < value <= 180.0
    /// into a compass bearing in the range: 0.0 <= value < 360.0
    /// # Examples
    /// ```
    /// use via_orientation::trig::Degrees;
    ///
    /// assert_eq!(0.0, Degrees(0.0).to_bearing().0);
    /// assert_eq!(90.0, Degrees(90.0).to_bearing().0);
    /// assert_eq!(180.0, Degrees(180.0).to_bearing().0);
    /// assert_eq!(270.0, Degrees(-90.0).to_bearing().0);
    /// ```
    #[must_use]
    pub fn to_bearing(&self) -> Self {
        if self.0 < 0.0 {
            Self(self.0 + 360.0)
        } else {
            *self
        }
    }

    /// Test whether a Degrees value is a valid latitude.
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    /// # Examples
    /// ```
    /// use via_orientation::trig::Degrees;
    ///
    /// assert!(!Degrees(-90.0 * (1.0 + std::f64::EPSILON)).is_valid_latitude());
    /// assert!(Degrees(-90.0).is_valid_latitude());
    /// assert!(Degrees(90.0).is_valid_latitude());
    /// assert!(!(Degrees(90.0 * (1.0 + std::f64::EPSILON)).is_valid_latitude()));
    /// ```
    #[must_use]
    pub fn is_valid_latitude(&self) -> bool {
        Self::is_latitude(self.0)
    }
}

impl Validate for Degrees {
    /// Test whether a Degrees is valid.
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    /// # Examples
    /// ```
    /// use via_orientation::trig::Degrees;
    /// use via_orientation::Validate;
    ///
    /// assert!(!Degrees(-180.0 * (1.0 + std::f64::EPSILON)).is_valid());
    /// assert!(Degrees(-180.0).is_valid());
    /// assert!(Degrees(180.0).is_valid());
    /// assert!(!(Degrees(180.0 * (1.0 + std::f64::EPSILON)).is_valid()));
    /// ```
    fn is_valid(&self) -> bool {
        Self::is_longitude(self.0)
    }
}

impl From<Radians> for Degrees {
    /// Construct an angle in Degrees from an angle in Radians.
    /// # Examples
    /// ```
    /// use via_orientation::trig::Degrees;
    /// use via_orientation::trig::Radians;
    ///
    /// let arg = Radians(std::f64::consts::FRAC_PI_2);
    /// let answer = Degrees::from(arg);
    /// assert_eq!(90.0, answer.0);
    /// ```
    fn from(a: Radians) -> Self {
        Self(a.0.to_degrees())
    }
}

impl Neg for Degrees {
    type Output = Self;

    /// An implementation of Neg for Degrees, i.e. -angle.
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Degrees {
    type Output = Self;

    /// Add two angles in Degrees, automatically wraps around +/- 180 degrees.
    /// # Examples
    /// ```
    /// use via_orientation::trig::Degrees;
    ///
    /// let angle_120 = Degrees(120.0);
    /// let result = angle_120 + angle_120;
    /// assert_eq!(Degrees(-120.0), result);
    /// ```
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0).normalise()
    }
}

impl Sub for Degrees {
    type Output = Self;

    /// Subtract two angles in Degrees, automatically wraps around.
    /// # Examples
    /// ```
    /// use via_orientation::trig::Degrees;
    ///
    /// let angle_m120 = Degrees(-120.0);
    /// let angle_120 = Degrees(120.0);
    /// let result = angle_m120 - angle_120;
    /// assert_eq!(angle_120, result);
    /// ```
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0).normalise()
    }
}

impl Radians {
    /// Normalise a Radians into the range:
    /// -std::f64::consts::PI < value <= std::f64::consts::PI
    #[must_use]
    pub fn normalise(&self) -> Self {
        if self.0 <= -std::f64::consts::PI {
            Self(self.0 + 2.0 * std::f64::consts::PI)
        } else if self.0 <= std::f64::consts::PI {
            *self
        } else {
            Self(self.0 - 2.0 * std::f64::consts::PI)
        }
    }
}

impl Validate for Radians {
    /// Test whether a Radians is valid.
    /// I.e. whether it lies in the range: -PI <= value <= PI
    fn is_valid(&self) -> bool {
        (-std::f64::consts::PI..=std::f64::consts::PI).contains(&self.0)
    }
}

impl From<Degrees> for Radians {
    fn from(a: Degrees) -> Self {
        Self(a.0.to_radians())
    }
}

/// The UnitNegRange newtype an f64.
/// A valid UnitNegRange value lies between -1.0 and +1.0 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct UnitNegRange(pub f64);

impl Validate for UnitNegRange {
    /// Test whether a UnitNegRange is valid.
    /// I.e. whether it lies in the range: -1.0 <= value <= 1.0
    fn is_valid(&self) -> bool {
        (-1.0..=1.0).contains(&self.0)
    }
}

impl Neg for UnitNegRange {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl UnitNegRange {
    /// Clamp value into the valid range: -1.0 to +1.0 inclusive.
    /// # Examples
    /// ```
    /// use via_orientation::trig::UnitNegRange;
    ///
    /// assert_eq!(-1.0, UnitNegRange::clamp(-1.0 - std::f64::EPSILON).0);
    /// assert_eq!(-0.5, UnitNegRange::clamp(-0.5).0);
    /// assert_eq!(1.0, UnitNegRange::clamp(1.0 + std::f64::EPSILON).0);
    /// ```
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn clamp(value: f64) -> Self {
        Self(clamp(value, -1.0, 1.0))
    }
}

/// Swap the sine into the cosine of an Angle and vice versa.
/// Uses the identity sin<sup>2</sup> + cos<sup>2</sup> = 1
/// # Examples
/// ```
/// use via_orientation::trig::UnitNegRange;
/// use via_orientation::trig::swap_sin_cos;
///
/// assert_eq!(UnitNegRange(0.0), swap_sin_cos(UnitNegRange(-1.0)));
/// assert_eq!(UnitNegRange(1.0), swap_sin_cos(UnitNegRange(0.0)));
/// ```
#[must_use]
pub fn swap_sin_cos(a: UnitNegRange) -> UnitNegRange {
    UnitNegRange::clamp(libm::sqrt((1.0 - a.0) * (1.0 + a.0)))
}

/// Calculate the cosine of an Angle from it's sine and
/// the sign of the cosine.
/// * `a` the sine of the angle.
/// * `sign` the sign of the cosine of the angle.
///
/// return the cosine of the Angle.
#[must_use]
pub fn cosine_from_sine(a: UnitNegRange, sign: f64) -> UnitNegRange {
    UnitNegRange(libm::copysign(swap_sin_cos(a).0, sign))
}

/// Calculate the sine of the difference of two angles: a - b.
#[must_use]
pub fn sine_diff(
    sin_a: UnitNegRange,
    cos_a: UnitNegRange,
    sin_b: UnitNegRange,
    cos_b: UnitNegRange,
) -> UnitNegRange {
    UnitNegRange::clamp(sin_a.0 * cos_b.0 - sin_b.0 * cos_a.0)
}

/// Calculate the cosine of the difference of two angles: a - b.
#[must_use]
pub fn cosine_diff(
    sin_a: UnitNegRange,
    cos_a: UnitNegRange,
    sin_b: UnitNegRange,
    cos_b: UnitNegRange,
) -> UnitNegRange {
    UnitNegRange::clamp(cos_a.0 * cos_b.0 + sin_a.0 * sin_b.0)
}

/// An angle represented by it's sine and cosine as UnitNegRanges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    /// The sine of the angle.
    s: UnitNegRange,
    /// The cosine of the angle.
    c: UnitNegRange,
}

/// A default angle: zero degrees or radians.
impl Default for Angle {
    /// Implementation of Default for Angle returns Angle(0.0, 1.0),
    /// i.e. the Angle corresponding to zero degrees or radians.
    fn default() -> Self {
        Self {
            s: UnitNegRange(0.0),
            c: UnitNegRange(1.0),
        }
    }
}

impl Neg for Angle {
    type Output = Self;

    /// An implementation of Neg for Angle, i.e. -angle.
    /// Negates the sine of the Angle, does not affect the cosine.
    fn neg(self) -> Self {
        Self {
            s: -self.s,
            c: self.c,
        }
    }
}

impl Sub for Angle {
    type Output = Self;

    /// Subtract two Angles, i.e. a - b
    /// Uses trigonometric identity functions.
    /// # Examples
    /// ```
    /// use via_orientation::trig::Degrees;
    /// use via_orientation::trig::Angle;
    ///
    /// let degrees_30 = Degrees(30.0);
    /// let angle_30 = Angle::from(degrees_30);
    /// let angle_60 = Angle::from(Degrees(60.0));
    /// let result_30 = angle_60 - angle_30;
    ///
    /// // Note: subtraction is not precise...
    /// let delta_angle = libm::fabs(degrees_30.0 - Degrees::from(result_30).0);
    /// assert!(delta_angle <= 32.0 * std::f64::EPSILON);
    /// ```
    fn sub(self, other: Self) -> Self {
        Self {
            s: sine_diff(self.s, self.c, other.s, other.c),
            c: cosine_diff(self.s, self.c, other.s, other.c),
        }
    }
}

impl Validate for Angle {
    /// Test whether an Angle is valid, i.e. whether s^2 + c^2 is approx = 1.0.
    fn is_valid(&self) -> bool {
        const MIN_SQ_LENGTH: f64 = 1.0 - 32.0 * std::f64::EPSILON;
        const MAX_SQ_LENGTH: f64 = 1.0 + 32.0 * std::f64::EPSILON;
        let sq_length = self.s.0 * self.s.0 + self.c.0 * self.c.0;
        (MIN_SQ_LENGTH..=MAX_SQ_LENGTH).contains(&sq_length)
    }
}

impl Angle {
    /// Construct an Angle from sin and cos values.
    #[must_use]
    pub const fn new(s: UnitNegRange, c: UnitNegRange) -> Self {
        Self { s, c }
    }

    /// Construct an Angle from y and x values.
    /// Normalises the values.
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn from_y_x(sine: f64, cosine: f64) -> Self {
        let length = libm::hypot(sine, cosine);

        if length > std::f64::EPSILON {
            Self {
                s: UnitNegRange::clamp(sine / length),
                c: UnitNegRange::clamp(cosine / length),
            }
        } else {
            Self::default()
        }
    }

    /// The sine of the Angle.
    #[must_use]
    pub const fn sin(self) -> f64 {
        self.s.0
    }

    /// The cosine of the Angle.
    #[must_use]
    pub const fn cos(self) -> f64 {
        self.c.0
    }

    /// The Angle in Radians.
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(libm::atan2(self.s.0, self.c.0))
    }

    /// Square of the sine of half the Angle.
    /// See: [Half-angle formulae](https://en.wikipedia.org/wiki/List_of_trigonometric_identities#Half-angle_formulae)
    /// For angles with a positive cosine it is calculated from the sine to
    /// preserve precision for small angles.
    /// # Examples
    /// ```
    /// use via_orientation::trig::Degrees;
    /// use via_orientation::trig::Angle;
    ///
    /// let angle_30 = Angle::from(Degrees(30.0));
    /// let angle_60 = Angle::from(Degrees(60.0));
    /// let expected = angle_30.sin() * angle_30.sin();
    /// let result = angle_60.sq_sine_half();
    ///
    /// let delta_result = libm::fabs(expected - result);
    /// assert!(delta_result <= std::f64::EPSILON);
    /// ```
    #[debug_ensures((0.0..=1.0).contains(&ret))]
    #[must_use]
    pub fn sq_sine_half(self) -> f64 {
        if 0.0 < self.c.0 {
            clamp(self.s.0 * self.s.0 / (2.0 * (1.0 + self.c.0)), 0.0, 1.0)
        } else {
            (1.0 - self.c.0) * 0.5
        }
    }
}

impl From<Degrees> for Angle {
    /// Construct an Angle from an angle in Degrees.
    /// In order to minimize round-off errors, this function calculates sines
    /// of angles with sine values <= 1 / sqrt(2): see
    /// <https://stackoverflow.com/questions/31502120/sin-and-cos-give-unexpected-results-for-well-known-angles>
    /// It is based on GeographicLib::Math::sincosd function.
    #[allow(clippy::cast_sign_loss)]
    fn from(a: Degrees) -> Self {
        let rq = libm::remquo(a.0, 90.0);

        // Default is zero degrees.
        let mut sine = UnitNegRange(0.0);
        let mut cosine = UnitNegRange(1.0);
        let abs_angle = libm::fabs(rq.0);
        if abs_angle > 0.0 {
            if abs_angle < 90.0 {
                if abs_angle < 45.0 {
                    sine = UnitNegRange(if abs_angle == 30.0 {
                        0.5
                    } else {
                        libm::sin(abs_angle.to_radians())
                    });
                    cosine = swap_sin_cos(sine);
                } else if abs_angle > 45.0 {
                    cosine = UnitNegRange(if abs_angle == 60.0 {
                        0.5
                    } else {
                        libm::cos(abs_angle.to_radians())
                    });
                    sine = swap_sin_cos(cosine);
                } else {
                    // abs_angle == 45.0
                    sine = UnitNegRange(std::f64::consts::FRAC_1_SQRT_2);
                    cosine = sine;
                }
            } else {
                // 90 degrees
                sine = UnitNegRange(1.0);
                cosine = UnitNegRange(0.0);
            }

            if rq.0 < 0.0 {
                // negative angle
                sine = UnitNegRange(0.0 - sine.0);
            }
        }

        let q = rq.1 as u32;
        match q & 3 {
            0 => Self { s: sine, c: cosine },
            1 => Self {
                s: cosine,
                c: UnitNegRange(0.0 - sine.0),
            },
            2 => Self {
                s: UnitNegRange(0.0 - sine.0),
                c: UnitNegRange(0.0 - cosine.0),
            },
            _ => Self {
                s: UnitNegRange(0.0 - cosine.0),
                c: sine,
            },
        }
    }
}

impl From<Radians> for Angle {
    /// Construct an Angle from an angle in Radians.
    /// In order to minimize round-off errors, this function calculates sines
    /// of angles with sine values <= 1 / sqrt(2)
    fn from(a: Radians) -> Self {
        const PI_4: f64 = std::f64::consts::FRAC_PI_2 / 2.0;

        let valid_angle = a.normalise();
        let abs_angle = libm::fabs(valid_angle.0);

        let over_45_degrees = PI_4 < abs_angle;
        let under_135_degrees = abs_angle < (std::f64::consts::PI - PI_4);
        if over_45_degrees && under_135_degrees {
            let c = UnitNegRange(libm::sin(std::f64::consts::FRAC_PI_2 - abs_angle));
            let s = cosine_from_sine(UnitNegRange(c.0), valid_angle.0);

            Self { s, c }
        } else {
            let s = UnitNegRange(libm::sin(valid_angle.0));
            let c = cosine_from_sine(UnitNegRange(s.0), std::f64::consts::FRAC_PI_2 - abs_angle);

            Self { s, c }
        }
    }
}

impl From<Angle> for Degrees {
    /// Convert an Angle to Degrees.
    #[debug_ensures(ret.is_valid())]
    fn from(a: Angle) -> Self {
        Self::from(a.to_radians())
    }
}

/// The unit that the angles of the classification triangle are interpreted
/// in when their sines are taken.
///
/// The triangle's angles are always held in degrees. `Degrees` converts them
/// before taking their sines. `Radians` passes the degree values directly to
/// sine, reproducing the output of the legacy implementation.
/// Note: `Radians` is the default so that existing results are reproduced,
/// it should be replaced by `Degrees`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    Degrees,
    #[default]
    Radians,
}

impl AngleUnit {
    /// The sine of an angle held in degrees, interpreted in this unit.
    /// # Examples
    /// ```
    /// use via_orientation::trig::{AngleUnit, Degrees};
    ///
    /// assert_eq!(1.0, AngleUnit::Degrees.sine(Degrees(90.0)));
    /// assert_eq!(libm::sin(90.0), AngleUnit::Radians.sine(Degrees(90.0)));
    /// ```
    #[must_use]
    pub fn sine(self, angle: Degrees) -> f64 {
        match self {
            Self::Degrees => Angle::from(angle).sin(),
            Self::Radians => libm::sin(angle.0),
        }
    }
}

/// Calculate the initial azimuth of a Great Circle between two positions.
/// See: <http://www.movable-type.co.uk/scripts/latlong.html#bearing>
/// * `lat_a`, `lat_b` - the latitudes of the start and end positions.
/// * `delta_long` - the longitude of the end position relative to the start.
///
/// returns the azimuth relative to North, clockwise positive.
#[must_use]
pub fn calculate_gc_azimuth(lat_a: Angle, lat_b: Angle, delta_long: Angle) -> Angle {
    let sin_azimuth = lat_b.cos() * delta_long.sin();
    let cos_azimuth = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * delta_long.cos();
    Angle::from_y_x(sin_azimuth, cos_azimuth)
}

/// Calculate the Great Circle distance between two positions on the unit
/// sphere using the haversine formula.
/// * `lat_a`, `lat_b` - the latitudes of the start and end positions.
/// * `delta_long` - the longitude of the end position relative to the start.
///
/// returns the Great Circle distance in radians.
#[debug_ensures((0.0..=std::f64::consts::PI).contains(&ret.0))]
#[must_use]
pub fn calculate_gc_distance(lat_a: Angle, lat_b: Angle, delta_long: Angle) -> Radians {
    let haversine =
        (lat_b - lat_a).sq_sine_half() + lat_a.cos() * lat_b.cos() * delta_long.sq_sine_half();
    Radians(2.0 * libm::asin(libm::sqrt(clamp(haversine, 0.0, 1.0))))
}

#[cfg(test)]
mod tests {
    use super::Validate;
    use crate::is_within_tolerance;
    use crate::trig::*;
    use serde_json::to_string;

    #[test]
    fn angle_constructor_zero() {
        let angle = Angle::default();
        assert!(angle.is_valid());
        assert_eq!(0.0, angle.sin());
        assert_eq!(1.0, angle.cos());

        assert_eq!(Radians(0.0), angle.to_radians());
        assert_eq!(Degrees(0.0), Degrees::from(angle));
    }

    #[test]
    fn angle_constructor_45_degrees() {
        let angle = Angle::from(Degrees(45.0));
        assert!(angle.is_valid());
        assert_eq!(std::f64::consts::FRAC_1_SQRT_2, angle.sin());
        assert_eq!(std::f64::consts::FRAC_1_SQRT_2, angle.cos());

        assert_eq!(Degrees(45.0), Degrees::from(angle));
    }

    #[test]
    fn angle_constructor_unnormalised_degrees() {
        // 450 degrees is 90 degrees
        let angle = Angle::from(Degrees(450.0));
        assert_eq!(1.0, angle.sin());
        assert_eq!(Degrees(90.0), Degrees::from(angle));

        // -270 degrees is 90 degrees
        let angle = Angle::from(Degrees(-270.0));
        assert_eq!(1.0, angle.sin());

        // -90 degrees
        let angle = Angle::from(Degrees(-90.0));
        assert_eq!(-1.0, angle.sin());
        assert_eq!(Degrees(-90.0), Degrees::from(angle));
    }

    #[test]
    fn angle_constructor_pi_over_2() {
        let x: f64 = std::f64::consts::FRAC_PI_2;
        let angle = Angle::from(Radians(x));
        assert!(angle.is_valid());
        assert_eq!(1.0, angle.s.0);
        assert_eq!(0.0, angle.c.0);

        assert_eq!(Radians(x), angle.to_radians());
        assert_eq!(Degrees(90.0), Degrees::from(angle));
    }

    #[test]
    fn test_sq_sine_half() {
        for i in 0..180 {
            let value = f64::from(i);
            let half_angle = Angle::from(Degrees(0.5 * value));
            let expected = half_angle.sin() * half_angle.sin();
            let angle = Angle::from(Degrees(value));
            let result = angle.sq_sine_half();

            let delta_result = libm::fabs(expected - result);
            assert!(delta_result <= 2.0 * std::f64::EPSILON);
        }
    }

    #[test]
    fn test_sq_sine_half_small_angle() {
        // one metre on the Earth's surface
        let small = Radians(1.0 / 6_378_137.0);
        let expected = libm::sin(0.5 * small.0) * libm::sin(0.5 * small.0);
        let result = Angle::from(small).sq_sine_half();
        assert!(is_within_tolerance(1.0, result / expected, 1.0e-12));
    }

    #[test]
    fn test_angle_unit_sine() {
        assert_eq!(0.0, AngleUnit::Degrees.sine(Degrees(0.0)));
        assert_eq!(0.5, AngleUnit::Degrees.sine(Degrees(30.0)));
        assert_eq!(1.0, AngleUnit::Degrees.sine(Degrees(90.0)));
        assert_eq!(0.5, AngleUnit::Degrees.sine(Degrees(150.0)));

        // Radians does not convert the degree values
        assert_eq!(libm::sin(30.0), AngleUnit::Radians.sine(Degrees(30.0)));
        assert_eq!(AngleUnit::Radians, AngleUnit::default());
    }

    #[test]
    fn test_great_circle_90n_0n_0e() {
        let angle_90 = Angle::from(Degrees(90.0));
        let angle_0 = Angle::default();

        let azimuth = calculate_gc_azimuth(angle_90, angle_0, angle_0);
        let distance = calculate_gc_distance(angle_90, angle_0, angle_0);

        assert!(is_within_tolerance(
            std::f64::consts::FRAC_PI_2,
            distance.0,
            48.0 * std::f64::EPSILON
        ));
        assert_eq!(180.0, Degrees::from(azimuth).0);
    }

    #[test]
    fn test_great_circle_0n_60e_0n_60w() {
        let angle_60 = Angle::from(Degrees(60.0));
        let angle_0 = Angle::default();

        let delta_long = -angle_60 - angle_60;
        let azimuth = calculate_gc_azimuth(angle_0, angle_0, delta_long);
        let distance = calculate_gc_distance(angle_0, angle_0, delta_long);

        assert!(is_within_tolerance(
            120.0_f64.to_radians(),
            distance.0,
            48.0 * std::f64::EPSILON
        ));
        assert_eq!(-90.0, Degrees::from(azimuth).0);
    }

    #[test]
    fn test_great_circle_30n_60n_0e() {
        let angle_30 = Angle::from(Degrees(30.0));
        let angle_60 = Angle::from(Degrees(60.0));
        let angle_0 = Angle::default();

        let azimuth = calculate_gc_azimuth(angle_30, angle_60, angle_0);
        let distance = calculate_gc_distance(angle_30, angle_60, angle_0);

        assert!(is_within_tolerance(
            std::f64::consts::FRAC_PI_6,
            distance.0,
            48.0 * std::f64::EPSILON
        ));
        assert_eq!(0.0, Degrees::from(azimuth).0);
    }

    #[test]
    fn test_great_circle_60n_60n_30w() {
        let angle_m30 = Angle::from(Degrees(-30.0));
        let angle_60 = Angle::from(Degrees(60.0));

        let azimuth = calculate_gc_azimuth(angle_60, angle_60, angle_m30);
        let distance = calculate_gc_distance(angle_60, angle_60, angle_m30);

        assert!(is_within_tolerance(
            14.870_944_452_263_704_f64.to_radians(),
            distance.0,
            1.0e-12
        ));
        assert!(is_within_tolerance(
            -76.935_686_570_491_71,
            Degrees::from(azimuth).0,
            1.0e-9
        ));
    }

    #[test]
    fn test_serde_degrees() {
        let degrees_20 = Degrees(20.0);

        let serialized = to_string(&degrees_20).unwrap();
        let deserialized: Degrees = serde_json::from_str(&serialized).unwrap();
        assert_eq!(degrees_20, deserialized);
    }

    #[test]
    fn test_serde_angle_unit() {
        let serialized = to_string(&AngleUnit::Degrees).unwrap();
        assert_eq!("\"degrees\"", serialized);
        let deserialized: AngleUnit = serde_json::from_str("\"radians\"").unwrap();
        assert_eq!(AngleUnit::Radians, deserialized);
    }
}
