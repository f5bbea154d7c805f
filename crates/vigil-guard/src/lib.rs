//! Reference guard domain for the vigil GOAP stack.
//!
//! A patrol guard that, on spotting a target, fetches a tagging item and
//! closes in to tag. Small enough to read in one sitting, complete enough to
//! exercise every part of the planning and execution loop.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actions;
pub mod context;
pub mod facts;
pub mod guard;
pub mod sensors;

pub use actions::{MoveToItem, MoveToTarget, PatrolStep, PickUpItem, TagTarget};
pub use context::GuardContext;
pub use facts::GuardFact;
pub use guard::{guard_agent, select_goal, sense};
pub use sensors::{RangeVision, ScriptedVision, Vision};
