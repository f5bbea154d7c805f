//! Deterministic, engine-agnostic GOAP kernel primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod error;
pub mod fact;
pub mod tick;

pub use action::{Action, Descriptor, Status};
pub use error::{validate_fact_space, ConfigError};
pub use fact::{mask, Fact, Mask, State};
pub use tick::TickContext;
