//! GraphQL transport for the backend auth operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire envelope and error shapes, `api` builds the two
//! auth mutations and executes them over HTTP (hydrate) with a resettable
//! response cache for the read path.

pub mod api;
pub mod types;
