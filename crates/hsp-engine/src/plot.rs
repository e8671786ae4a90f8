//! Plot geometry in the δD/δP plane.
//!
//! The renderer draws the resin and solvent as points, a dashed segment
//! between them, and a circle of radius `threshold` around the resin. This
//! module only computes coordinates.

use core::f64::consts::TAU;

use hsp_core::{ParameterTriple, Real};
use serde::{Deserialize, Serialize};

/// Point in the (δD, δP) projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: Real,
    pub y: Real,
}

impl From<ParameterTriple> for PlotPoint {
    fn from(p: ParameterTriple) -> Self {
        Self { x: p.dd(), y: p.dp() }
    }
}

/// Axis extents covering every drawn element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub x_min: Real,
    pub x_max: Real,
    pub y_min: Real,
    pub y_max: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HansenPlot {
    pub resin: PlotPoint,
    pub solvent: PlotPoint,
    pub radius: Real,
}

impl HansenPlot {
    pub fn new(resin: ParameterTriple, solvent: ParameterTriple, threshold: Real) -> Self {
        Self {
            resin: resin.into(),
            solvent: solvent.into(),
            radius: threshold.abs(),
        }
    }

    /// Segment from resin to solvent.
    pub fn segment(&self) -> [PlotPoint; 2] {
        [self.resin, self.solvent]
    }

    /// Threshold circle as a closed polyline of `segments + 1` points.
    ///
    /// At least 3 segments are produced. The last point equals the first.
    pub fn circle(&self, segments: usize) -> Vec<PlotPoint> {
        let segments = segments.max(3);
        let mut points = Vec::with_capacity(segments + 1);
        for i in 0..segments {
            let theta = TAU * i as Real / segments as Real;
            points.push(PlotPoint {
                x: self.resin.x + self.radius * theta.cos(),
                y: self.resin.y + self.radius * theta.sin(),
            });
        }
        // Close exactly
        points.push(points[0]);
        points
    }

    /// Bounds of both points and the circle, padded by `pad` on every side.
    pub fn bounds(&self, pad: Real) -> PlotBounds {
        let r = self.radius;
        PlotBounds {
            x_min: (self.resin.x - r).min(self.solvent.x) - pad,
            x_max: (self.resin.x + r).max(self.solvent.x) + pad,
            y_min: (self.resin.y - r).min(self.solvent.y) - pad,
            y_max: (self.resin.y + r).max(self.solvent.y) + pad,
        }
    }
}
