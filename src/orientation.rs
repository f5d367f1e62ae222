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

//! The orientation module classifies whether a subject position lies to the
//! LEFT of, in FRONT of, or to the RIGHT of the line that an origin position
//! is facing along.
//!
//! The classification:
//! 1. derives the anchor on the facing line, see the `anchor` module,
//! 2. widens the anchor into a gate, see the `gate` module,
//! 3. tests which side of the gate edges the subject lies on, see the
//!    `side` module.
//!
//! The subject is LEFT if it lies left of the left edge, RIGHT if it lies
//! right of the right edge, otherwise it is in FRONT.
//!
//! # Examples
//! ```
//! use via_orientation::latlong::LatLong;
//! use via_orientation::orientation::{Classifier, Orientation};
//! use via_orientation::trig::Degrees;
//!
//! // facing east along the equator
//! let origin = LatLong::new(Degrees(0.0), Degrees(0.0));
//! let classifier = Classifier::new(origin, Degrees(90.0));
//!
//! let north = LatLong::new(Degrees(0.0001), Degrees(0.001));
//! assert_eq!(Ok(Orientation::Left), classifier.classify_subject(&north));
//!
//! let south = LatLong::new(Degrees(-0.0001), Degrees(0.001));
//! assert_eq!(Ok(Orientation::Right), classifier.classify_subject(&south));
//! ```

pub mod anchor;
pub mod gate;
pub mod side;

use crate::error::{Error, Result};
use crate::geodesy::{Geodesy, Spherical};
use crate::latlong::LatLong;
use crate::trig::{AngleUnit, Degrees};
use crate::Validate;
use anchor::{derive_anchor, Anchor};
use gate::{build_gate, Gate, DEFAULT_GATE_WIDTH};
use geo_types::{Coord, Line};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use side::{facing_edge, line_equation_side, signed_area_side, to_plane, LineSide};
use std::fmt;

/// The position of a subject relative to a facing line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    Left,
    Front,
    Right,
}

impl Orientation {
    /// The orientation seen when facing the opposite way.
    /// # Examples
    /// ```
    /// use via_orientation::orientation::Orientation;
    ///
    /// assert_eq!(Orientation::Right, Orientation::Left.reversed());
    /// assert_eq!(Orientation::Front, Orientation::Front.reversed());
    /// ```
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Front => Self::Front,
            Self::Right => Self::Left,
        }
    }

    /// The orientation as an upper case string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Front => "FRONT",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The test used to determine which side of a gate edge the subject lies on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Compare the subject with the line equation y = slope * x + intercept.
    #[default]
    LineEquation,
    /// The sign of the 2D cross product of the edge and the subject.
    SignedArea,
}

impl Strategy {
    /// Determine the side of the edge that the point lies on.
    /// # Errors
    /// `DegenerateGeometry` if the edge has zero length or the side is not
    /// finite.
    pub fn side(self, edge: &Line, point: Coord) -> Result<LineSide> {
        match self {
            Self::LineEquation => line_equation_side(edge, point),
            Self::SignedArea => signed_area_side(edge, point),
        }
    }
}

/// The classification options.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Whether to widen the anchor into a gate.
    pub gate_enabled: bool,
    /// The total width of the gate in metres.
    pub gate_width: f64,
    /// The side test applied to the gate edges.
    pub strategy: Strategy,
    /// The unit that the triangle angles are interpreted in.
    pub angle_unit: AngleUnit,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            gate_enabled: true,
            gate_width: DEFAULT_GATE_WIDTH,
            strategy: Strategy::default(),
            angle_unit: AngleUnit::default(),
        }
    }
}

impl Options {
    /// The gate width, None if the gate is disabled.
    #[must_use]
    pub fn gate(&self) -> Option<f64> {
        self.gate_enabled.then_some(self.gate_width)
    }
}

impl Validate for Options {
    /// Test whether the `Options` are valid.
    /// I.e. whether the gate width is finite and not negative.
    fn is_valid(&self) -> bool {
        self.gate_width.is_finite() && 0.0 <= self.gate_width
    }
}

/// The result of a classification, with the anchor and gate that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Classification {
    pub orientation: Orientation,
    pub anchor: Anchor,
    pub gate: Gate,
}

/// Classify the position of a subject relative to the facing line of an
/// origin.
/// * `geodesy` - the distance, bearing and destination calculations.
/// * `origin` - the origin position.
/// * `facing` - the heading of the origin's facing line, it need not be
///   normalised.
/// * `subject` - the subject position.
/// * `options` - the classification options.
///
/// returns the `Classification`.
/// # Errors
/// * `InvalidCoordinate` if the origin or subject is not a valid `LatLong`.
/// * `InvalidAngle` if the facing heading is not finite.
/// * `InvalidConfiguration` if the gate width is negative or not finite.
/// * `DegenerateGeometry` if the origin and subject coincide, or the geodesy
///   returns values that do not define an anchor or an edge.
pub fn classify<G: Geodesy>(
    geodesy: &G,
    origin: &LatLong,
    facing: Degrees,
    subject: &LatLong,
    options: &Options,
) -> Result<Classification> {
    if !origin.is_valid() {
        return Err(Error::InvalidCoordinate("origin invalid"));
    }
    if !subject.is_valid() {
        return Err(Error::InvalidCoordinate("subject invalid"));
    }
    if !facing.0.is_finite() {
        return Err(Error::InvalidAngle(facing.0));
    }
    if !options.is_valid() {
        return Err(Error::InvalidConfiguration(
            "gate width must be finite and not negative",
        ));
    }

    let anchor = derive_anchor(geodesy, origin, facing, subject, options.angle_unit)?;
    debug!("triangle: {:?}", anchor.triangle);
    debug!("anchor: {:?} along track: {}", anchor.position, anchor.along_track);

    let gate = build_gate(geodesy, &anchor.position, facing, options.gate());
    debug!("gate: {:?}", gate);

    let length = anchor.triangle.side_b;
    let point = to_plane(&anchor.position, subject);

    let left_edge = facing_edge(geodesy, &anchor.position, &gate.left, facing, length);
    let left = options.strategy.side(&left_edge, point)?;
    trace!("left edge: {:?} side: {}", left_edge, left.signed_side());

    let orientation = if left.is_on_left_side() {
        Orientation::Left
    } else {
        let right_edge = facing_edge(geodesy, &anchor.position, &gate.right, facing, length);
        let right = options.strategy.side(&right_edge, point)?;
        trace!("right edge: {:?} side: {}", right_edge, right.signed_side());

        if right.is_on_right_side() {
            Orientation::Right
        } else {
            Orientation::Front
        }
    };
    debug!("orientation: {}", orientation);

    Ok(Classification {
        orientation,
        anchor,
        gate,
    })
}

/// Classifies subjects relative to the facing line of an origin.
#[derive(Clone, Debug)]
pub struct Classifier<G = Spherical> {
    geodesy: G,
    origin: LatLong,
    facing: Degrees,
    options: Options,
    subject: Option<LatLong>,
}

impl Classifier<Spherical> {
    /// Construct a `Classifier` with `Spherical` geodesy and default options.
    #[must_use]
    pub fn new(origin: LatLong, facing: Degrees) -> Self {
        Self::with_geodesy(origin, facing, Spherical::default())
    }

    /// Construct a `Classifier` facing from the origin toward a target
    /// position, e.g. the centre of a map view.
    ///
    /// # Errors
    /// `DegenerateGeometry` if the origin and target coincide.
    pub fn facing_toward(origin: LatLong, target: &LatLong) -> Result<Self> {
        if origin == *target {
            return Err(Error::DegenerateGeometry("origin and target coincide"));
        }
        let geodesy = Spherical::default();
        let facing = geodesy.initial_bearing(&origin, target);
        Ok(Self::with_geodesy(origin, facing, geodesy))
    }
}

impl<G: Geodesy> Classifier<G> {
    /// Construct a `Classifier` with the given geodesy and default options.
    #[must_use]
    pub fn with_geodesy(origin: LatLong, facing: Degrees, geodesy: G) -> Self {
        Self {
            geodesy,
            origin,
            facing,
            options: Options::default(),
            subject: None,
        }
    }

    /// Replace the classification options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable the gate.
    pub fn set_gate_enabled(&mut self, enabled: bool) -> &mut Self {
        self.options.gate_enabled = enabled;
        self
    }

    /// Set the total gate width in metres.
    pub fn set_gate_width(&mut self, width: f64) -> &mut Self {
        self.options.gate_width = width;
        self
    }

    /// Set the subject to classify.
    pub fn set_subject(&mut self, subject: LatLong) -> &mut Self {
        self.subject = Some(subject);
        self
    }

    #[must_use]
    pub const fn origin(&self) -> &LatLong {
        &self.origin
    }

    #[must_use]
    pub const fn facing(&self) -> Degrees {
        self.facing
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub const fn subject(&self) -> Option<&LatLong> {
        self.subject.as_ref()
    }

    /// Classify the subject that has been set.
    /// # Errors
    /// `MissingInput` if no subject has been set, otherwise as `classify`.
    pub fn classify(&self) -> Result<Orientation> {
        self.explain().map(|classification| classification.orientation)
    }

    /// Classify the given subject.
    /// # Errors
    /// As the `classify` function.
    pub fn classify_subject(&self, subject: &LatLong) -> Result<Orientation> {
        classify(
            &self.geodesy,
            &self.origin,
            self.facing,
            subject,
            &self.options,
        )
        .map(|classification| classification.orientation)
    }

    /// Classify the subject that has been set, with the anchor and gate.
    /// # Errors
    /// `MissingInput` if no subject has been set, otherwise as `classify`.
    pub fn explain(&self) -> Result<Classification> {
        let subject = self.subject.as_ref().ok_or(Error::MissingInput("subject"))?;
        classify(
            &self.geodesy,
            &self.origin,
            self.facing,
            subject,
            &self.options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equator() -> LatLong {
        LatLong::new(Degrees(0.0), Degrees(0.0))
    }

    #[test]
    fn test_orientation_traits() {
        assert_eq!("LEFT", Orientation::Left.to_string());
        assert_eq!("FRONT", Orientation::Front.to_string());
        assert_eq!("RIGHT", Orientation::Right.to_string());

        assert_eq!(
            r#"["LEFT","FRONT","RIGHT"]"#,
            serde_json::to_string(&[Orientation::Left, Orientation::Front, Orientation::Right])
                .unwrap()
        );
        assert_eq!(
            Orientation::Front,
            serde_json::from_str::<Orientation>(r#""FRONT""#).unwrap()
        );
    }

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert!(options.gate_enabled);
        assert_eq!(DEFAULT_GATE_WIDTH, options.gate_width);
        assert_eq!(Strategy::LineEquation, options.strategy);
        assert_eq!(AngleUnit::Radians, options.angle_unit);
        assert_eq!(Some(DEFAULT_GATE_WIDTH), options.gate());
        assert!(options.is_valid());

        let options = Options {
            gate_enabled: false,
            ..Options::default()
        };
        assert_eq!(None, options.gate());
    }

    #[test]
    fn test_options_invalid() {
        let mut classifier = Classifier::new(equator(), Degrees(0.0));
        classifier.set_subject(LatLong::new(Degrees(0.001), Degrees(0.0)));

        classifier.set_gate_width(-1.0);
        assert_eq!(
            Err(Error::InvalidConfiguration(
                "gate width must be finite and not negative"
            )),
            classifier.classify()
        );

        classifier.set_gate_width(f64::INFINITY);
        assert!(classifier.classify().is_err());

        classifier.set_gate_width(0.0);
        assert_eq!(Ok(Orientation::Front), classifier.classify());
    }

    #[test]
    fn test_classifier_missing_subject() {
        let classifier = Classifier::new(equator(), Degrees(0.0));
        assert!(classifier.subject().is_none());
        assert_eq!(Err(Error::MissingInput("subject")), classifier.classify());
        assert_eq!(Err(Error::MissingInput("subject")), classifier.explain());
    }

    #[test]
    fn test_classifier_invalid_heading() {
        let classifier = Classifier::new(equator(), Degrees(f64::NAN));
        let result = classifier.classify_subject(&LatLong::new(Degrees(0.001), Degrees(0.0)));
        assert!(matches!(result, Err(Error::InvalidAngle(_))));

        let classifier = Classifier::new(equator(), Degrees(f64::INFINITY));
        let result = classifier.classify_subject(&LatLong::new(Degrees(0.001), Degrees(0.0)));
        assert_eq!(Err(Error::InvalidAngle(f64::INFINITY)), result);
    }

    #[test]
    fn test_classify_nan_distance_is_not_front() {
        struct NanDistance;

        impl Geodesy for NanDistance {
            fn distance(&self, _a: &LatLong, _b: &LatLong) -> f64 {
                f64::NAN
            }

            fn initial_bearing(&self, a: &LatLong, b: &LatLong) -> Degrees {
                Spherical::default().initial_bearing(a, b)
            }

            fn destination(&self, origin: &LatLong, distance: f64, bearing: Degrees) -> LatLong {
                Spherical::default().destination(origin, distance, bearing)
            }
        }

        let mut classifier = Classifier::with_geodesy(equator(), Degrees(0.0), NanDistance);
        classifier.set_subject(LatLong::new(Degrees(0.001), Degrees(0.0)));
        assert_eq!(
            Err(Error::DegenerateGeometry("invalid distance to subject")),
            classifier.classify()
        );
    }

    #[test]
    fn test_classifier_coincident_subject() {
        let mut classifier = Classifier::new(equator(), Degrees(0.0));
        classifier.set_subject(equator());
        assert_eq!(
            Err(Error::DegenerateGeometry("origin and subject coincide")),
            classifier.classify()
        );
    }

    #[test]
    fn test_classify_facing_east() {
        let mut classifier = Classifier::new(equator(), Degrees(90.0));
        classifier
            .set_gate_enabled(false)
            .set_subject(LatLong::new(Degrees(0.0001), Degrees(0.001)));
        assert_eq!(Ok(Orientation::Left), classifier.classify());

        classifier.set_subject(LatLong::new(Degrees(-0.0001), Degrees(0.001)));
        assert_eq!(Ok(Orientation::Right), classifier.classify());
    }

    #[test]
    fn test_classify_facing_north() {
        let mut classifier = Classifier::new(equator(), Degrees(0.0));
        classifier.set_subject(LatLong::new(Degrees(0.0), Degrees(0.001)));
        assert_eq!(Ok(Orientation::Right), classifier.classify());

        classifier.set_subject(LatLong::new(Degrees(0.0), Degrees(-0.001)));
        assert_eq!(Ok(Orientation::Left), classifier.classify());

        // directly ahead
        let ahead = LatLong::new(Degrees(0.0009), Degrees(0.0));
        classifier.set_subject(ahead);
        assert_eq!(Ok(Orientation::Front), classifier.classify());
        classifier.set_gate_enabled(false);
        assert_eq!(Ok(Orientation::Front), classifier.classify());
    }

    #[test]
    fn test_classify_within_gate() {
        // about 1.1 metres east of the facing line
        let subject = LatLong::new(Degrees(0.0009), Degrees(0.00001));
        let mut classifier = Classifier::new(equator(), Degrees(0.0));
        classifier.set_subject(subject);
        assert_eq!(Ok(Orientation::Front), classifier.classify());

        classifier.set_gate_width(0.5);
        assert_eq!(Ok(Orientation::Right), classifier.classify());

        classifier.set_gate_width(DEFAULT_GATE_WIDTH).set_gate_enabled(false);
        assert_eq!(Ok(Orientation::Right), classifier.classify());
    }

    #[test]
    fn test_classify_strategies_and_units_agree() {
        let origin = LatLong::new(Degrees(51.5), Degrees(-0.12));
        let subject = LatLong::new(Degrees(51.501), Degrees(-0.12));

        for strategy in [Strategy::LineEquation, Strategy::SignedArea] {
            for angle_unit in [AngleUnit::Degrees, AngleUnit::Radians] {
                let options = Options {
                    strategy,
                    angle_unit,
                    ..Options::default()
                };
                let result = classify(
                    &Spherical::default(),
                    &origin,
                    Degrees(45.0),
                    &subject,
                    &options,
                )
                .unwrap();
                assert_eq!(Orientation::Left, result.orientation);

                let result = classify(
                    &Spherical::default(),
                    &origin,
                    Degrees(225.0),
                    &subject,
                    &options,
                )
                .unwrap();
                assert_eq!(Orientation::Right, result.orientation);
            }
        }
    }

    #[test]
    fn test_explain() {
        let mut classifier = Classifier::new(equator(), Degrees(90.0));
        classifier.set_subject(LatLong::new(Degrees(0.0001), Degrees(0.001)));

        let classification = classifier.explain().unwrap();
        assert_eq!(Orientation::Left, classification.orientation);
        assert_eq!(90.0, classification.anchor.triangle.angle_b.0);
        assert!(!classification.gate.is_point());
        assert!(classification.gate.left.lat().0 > classification.gate.right.lat().0);
    }

    #[test]
    fn test_facing_toward() {
        let origin = equator();
        let target = LatLong::new(Degrees(0.0), Degrees(0.01));
        let classifier = Classifier::facing_toward(origin, &target).unwrap();
        assert!(crate::is_within_tolerance(
            90.0,
            classifier.facing().0,
            1.0e-9
        ));
        assert_eq!(&origin, classifier.origin());

        let north = LatLong::new(Degrees(0.001), Degrees(0.005));
        assert_eq!(Ok(Orientation::Left), classifier.classify_subject(&north));

        assert!(matches!(
            Classifier::facing_toward(origin, &origin),
            Err(Error::DegenerateGeometry("origin and target coincide"))
        ));
    }
}
