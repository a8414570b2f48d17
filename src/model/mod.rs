//! Request and response DTOs shared by the HTTP layer.
//!
//! These types define the JSON shapes on the wire. Server-side domain models live in
//! `server::model` and are converted to and from these DTOs at the controller boundary.

pub mod api;
pub mod student;
