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

//! The gate module widens the anchor into a gate: a pair of bounds either
//! side of the anchor, perpendicular to the facing heading.
//!
//! A subject that lies between the bounds is in FRONT, so a gate tolerates
//! small errors in the positions and the heading.

use crate::geodesy::Geodesy;
use crate::latlong::LatLong;
use crate::trig::Degrees;
use contracts::debug_requires;
use serde::Serialize;

/// The default total width of a gate in metres.
pub const DEFAULT_GATE_WIDTH: f64 = 5.0;

/// The left and right bounds of a gate, looking along the facing heading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Gate {
    pub left: LatLong,
    pub right: LatLong,
}

impl Gate {
    /// A gate of zero width at the anchor.
    /// # Examples
    /// ```
    /// use via_orientation::latlong::LatLong;
    /// use via_orientation::orientation::gate::Gate;
    /// use via_orientation::trig::Degrees;
    ///
    /// let anchor = LatLong::new(Degrees(51.5), Degrees(-0.12));
    /// let gate = Gate::point(anchor);
    /// assert!(gate.is_point());
    /// assert_eq!(anchor, gate.left);
    /// ```
    #[must_use]
    pub const fn point(anchor: LatLong) -> Self {
        Self {
            left: anchor,
            right: anchor,
        }
    }

    /// Whether the gate has zero width.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.left == self.right
    }
}

/// Build a gate around the anchor.
/// * `geodesy` - the destination calculation.
/// * `anchor` - the anchor position.
/// * `facing` - the heading of the origin's facing line.
/// * `width` - the total width of the gate in metres, None if the gate is
///   disabled.
///
/// returns the gate bounds, both at the anchor if the gate is disabled.
#[debug_requires(width.map_or(true, |w| w.is_finite() && 0.0 <= w))]
pub fn build_gate<G: Geodesy>(
    geodesy: &G,
    anchor: &LatLong,
    facing: Degrees,
    width: Option<f64>,
) -> Gate {
    width.map_or_else(
        || Gate::point(*anchor),
        |width| {
            let half_width = 0.5 * width;
            Gate {
                left: geodesy.destination(anchor, half_width, facing - Degrees(90.0)),
                right: geodesy.destination(anchor, half_width, facing + Degrees(90.0)),
            }
        },
    )
}
