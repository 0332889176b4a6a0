//! List-shaped configuration and its checked conversion to a mechanism.
use crate::mech::Pintograph;

/// Raw pintograph parameters as a host supplies them.
///
/// Each field is a free-length list; [`PintoConfig::validated()`] checks the
/// length invariants before any computation and builds the typed
/// [`Pintograph`].
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PintoConfig {
    /// Center-to-center offsets `[d1, d2]` (expects 2 values)
    pub distances: Vec<f64>,
    /// Disk radii `[r1, r2, r3]` (expects 3 values)
    pub radii: Vec<f64>,
    /// Disk speeds in revolutions per second `[s1, s2, s3]` (expects 3 values)
    pub speeds: Vec<f64>,
    /// Clockwise flag per disk (expects 3 values)
    pub directions: Vec<bool>,
    /// Rod lengths `[l1, ..., l7]` (expects 7 values)
    pub lengths: Vec<f64>,
}

/// Error of an ill-formed [`PintoConfig`].
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A parameter list has the wrong number of entries.
    #[error("{list} list must contain exactly {expect} values, got {got}")]
    Len {
        /// Name of the offending list
        list: &'static str,
        /// Expected number of entries
        expect: usize,
        /// Number of entries supplied
        got: usize,
    },
    /// A rod length used as a divisor is zero.
    #[error("rod length l{0} must be non-zero")]
    ZeroRod(usize),
}

impl PintoConfig {
    /// An example mechanism with a closed, well-behaved pen path.
    pub fn example() -> Self {
        Self {
            distances: vec![10., 5.],
            radii: vec![2., 2., 1.],
            speeds: vec![1., 1., 0.],
            directions: vec![false; 3],
            lengths: vec![6., 6., 4., 4., 5., 5., 3.],
        }
    }

    /// Check the list invariants and build the typed mechanism.
    ///
    /// The rod lengths `l1`, `l2` and `l5` divide the extrapolation steps of
    /// the chain and must be non-zero.
    pub fn validated(&self) -> Result<Pintograph, ConfigError> {
        let d = fixed("distances", &self.distances)?;
        let r = fixed("radii", &self.radii)?;
        let speed = fixed("speeds", &self.speeds)?;
        let cw = fixed("directions", &self.directions)?;
        let l = fixed("lengths", &self.lengths)?;
        for i in [0, 1, 4] {
            if l[i] == 0. {
                return Err(ConfigError::ZeroRod(i + 1));
            }
        }
        Ok(Pintograph { d, r, speed, cw, l })
    }
}

fn fixed<T: Copy, const N: usize>(list: &'static str, v: &[T]) -> Result<[T; N], ConfigError> {
    <[T; N]>::try_from(v).map_err(|_| ConfigError::Len { list, expect: N, got: v.len() })
}
