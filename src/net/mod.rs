//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the booking backend and `types` defines
//! the shared wire schema. The server side of authentication (password
//! checks, token issuance) lives entirely behind this boundary.

pub mod api;
pub mod types;
