//! Utility helpers isolating environment concerns from page logic.

pub mod jwt;
#[cfg(feature = "hydrate")]
pub mod widget;
