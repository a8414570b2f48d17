//! Student records HTTP service.
//!
//! Exposes create, list, get, partial-update and delete operations over student
//! documents stored in MongoDB. See the `server` module for the layered backend and
//! `model` for the JSON shapes on the wire.

pub mod model;
pub mod server;
