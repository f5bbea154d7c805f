//! Deterministic GOAP planner and per-tick agent controller.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod planner;

pub use agent::{Agent, AgentBuilder, AgentConfig};
pub use planner::{Plan, Planner, PlannerConfig};
