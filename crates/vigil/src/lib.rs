//! Umbrella crate that re-exports the `vigil-*` building blocks.
//!
//! This crate is intended as a convenient entrypoint for users and as a home for docs.rs guides.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use vigil_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use vigil_tools as tools;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use vigil_nav as nav;

#[cfg(feature = "goap")]
#[cfg_attr(docsrs, doc(cfg(feature = "goap")))]
pub use vigil_goap as goap;

#[cfg(feature = "guard")]
#[cfg_attr(docsrs, doc(cfg(feature = "guard")))]
pub use vigil_guard as guard;
