//! Networking modules for the collection server's REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema.
//! There is no socket layer; every operation is a plain request/response.

pub mod api;
pub mod types;
