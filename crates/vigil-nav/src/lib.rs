//! Locomotion capability boundary and reference locomotor.
//!
//! The planner core never moves anything itself; actions steer a physical
//! agent through the narrow [`Locomotion`] trait and the host's navigation
//! substrate does the actual path work behind it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod locomotion;
pub mod math;

pub use locomotion::{Locomotion, SteeringLocomotor};
pub use math::Vec2;
