//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; the authorization decisions
//! themselves live in `flow` so pages only wire signals to them.

pub mod home;
pub mod not_found;
pub mod signin;
