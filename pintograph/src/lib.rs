//! Pintograph is a simulator for a two-disk rod-linkage drawing machine.
//!
//! The kernel is pure planar kinematics: a law-of-cosines circle-circle
//! solver applied twice along the rod chain, a wall-clock run controller,
//! and a pen trace accumulated in the rotating frame of the pen disk.
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
pub use crate::anim::*;
pub use crate::config::*;
pub use crate::intersect::*;
pub use crate::mech::*;

pub mod anim;
pub mod config;
#[cfg(feature = "csv")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "csv")))]
pub mod csv;
pub mod intersect;
pub mod mech;
pub mod point;
#[cfg(feature = "plot")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "plot")))]
pub mod plot;
#[cfg(test)]
mod tests;
