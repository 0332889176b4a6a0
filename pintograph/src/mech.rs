//! Pintograph mechanism and its linkage chain evaluation.
use crate::intersect::{meet, Branch};
use crate::point::{extend, on_circle};
use std::f64::consts::TAU;

/// Stage of the linkage chain where a triangulation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// First rod pair `(A, l1) x (B, l2)`, solving for H
    Elbow,
    /// Second rod pair `(C, l5) x (D, l6)`, solving for E
    Pen,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Elbow => write!(f, "elbow"),
            Self::Pen => write!(f, "pen"),
        }
    }
}

/// The rods cannot reach each other at the current time sample.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[error("rods cannot reach at the {stage} stage")]
pub struct DegenerateLinkage {
    /// Failing chain stage
    pub stage: Stage,
}

/// Typed pintograph mechanism.
///
/// Obtained from [`PintoConfig::validated()`](crate::PintoConfig::validated),
/// which guards the list lengths and the divisor rods.
///
/// # Parameters
///
/// + Center-to-center offsets `d1`, `d2`
/// + Disk radii `r1..r3`
/// + Disk speeds `s1..s3` (revolutions per second)
/// + Clockwise flags per disk
/// + Rod lengths `l1..l7`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Pintograph {
    /// Center-to-center offsets `[d1, d2]`
    pub d: [f64; 2],
    /// Disk radii
    pub r: [f64; 3],
    /// Disk speeds in revolutions per second
    pub speed: [f64; 3],
    /// Clockwise flag per disk
    pub cw: [bool; 3],
    /// Rod lengths
    pub l: [f64; 7],
}

/// The linkage point set of one time sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkagePos {
    /// Follower point on disk 1
    pub a: [f64; 2],
    /// Follower point on disk 2
    pub b: [f64; 2],
    /// First rod-rod intersection
    pub h: [f64; 2],
    /// Rod 1 extended past H
    pub c: [f64; 2],
    /// Rod 2 extended past H
    pub d: [f64; 2],
    /// Second rod-rod intersection
    pub e: [f64; 2],
    /// Pen point
    pub p: [f64; 2],
}

/// A disk outline `(center, radius)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
    /// Center point
    pub center: [f64; 2],
    /// Radius
    pub r: f64,
}

/// A rod segment between two linkage points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rod {
    /// Segment start
    pub start: [f64; 2],
    /// Segment end
    pub end: [f64; 2],
}

/// Renderable state of one time sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Linkage points
    pub pos: LinkagePos,
    /// The three disks
    pub disks: [Disk; 3],
    /// The six rods A-C, B-D, H-C, H-D, C-P, D-E
    pub rods: [Rod; 6],
}

impl Pintograph {
    /// Fixed disk centers derived from the offsets.
    pub fn centers(&self) -> [[f64; 2]; 3] {
        let [d1, d2] = self.d;
        [[0., 0.], [d1, 0.], [d1 * 0.5, -d2]]
    }

    /// Angular velocities in rad/s, negative for clockwise disks.
    pub fn omega(&self) -> [f64; 3] {
        std::array::from_fn(|i| TAU * self.speed[i] * if self.cw[i] { -1. } else { 1. })
    }

    /// Evaluate the linkage chain at time `t` in seconds.
    ///
    /// Pure function of `(self, t)`.
    pub fn pos(&self, t: f64) -> Result<LinkagePos, DegenerateLinkage> {
        let [c1, c2, _] = self.centers();
        let [w1, w2, _] = self.omega();
        let [l1, l2, l3, l4, l5, l6, l7] = self.l;
        let a = on_circle(c1, self.r[0], w1 * t);
        let b = on_circle(c2, self.r[1], w2 * t);
        let h = meet(a, l1, b, l2, Branch::Positive)
            .ok_or(DegenerateLinkage { stage: Stage::Elbow })?;
        let c = extend(a, h, l4 / l1);
        let d = extend(b, h, l3 / l2);
        let e = meet(c, l5, d, l6, Branch::Negative)
            .ok_or(DegenerateLinkage { stage: Stage::Pen })?;
        let p = extend(c, e, l7 / l5);
        Ok(LinkagePos { a, b, h, c, d, e, p })
    }

    /// Evaluate the chain and assemble the display geometry at time `t`.
    pub fn frame(&self, t: f64) -> Result<Frame, DegenerateLinkage> {
        let pos = self.pos(t)?;
        let LinkagePos { a, b, h, c, d, e, p } = pos;
        let centers = self.centers();
        let disks = std::array::from_fn(|i| Disk { center: centers[i], r: self.r[i] });
        let rods = [[a, c], [b, d], [h, c], [h, d], [c, p], [d, e]]
            .map(|[start, end]| Rod { start, end });
        Ok(Frame { pos, disks, rods })
    }

    /// Trace the pen point over `start..end` seconds with `res` samples.
    ///
    /// Degenerate samples are skipped.
    pub fn curve_in(&self, start: f64, end: f64, res: usize) -> Vec<[f64; 2]> {
        let step = (end - start) / res as f64;
        (0..res)
            .map(|n| start + n as f64 * step)
            .filter_map(|t| self.pos(t).ok())
            .map(|pos| pos.p)
            .collect()
    }

    /// Trace the pen point from time zero over `duration` seconds.
    pub fn curve(&self, duration: f64, res: usize) -> Vec<[f64; 2]> {
        self.curve_in(0., duration, res)
    }
}
