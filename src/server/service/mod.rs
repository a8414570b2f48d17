//! Business logic layer.
//!
//! Services sit between the controllers and the `StudentStore`, enforcing request rules
//! (such as rejecting empty partial updates) before any store round trip and converting
//! store errors into `AppError`.

pub mod student;
