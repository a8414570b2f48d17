//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation of the student records
//! service. The backend uses Axum as the web framework and the MongoDB driver for
//! persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input validation, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - The `StudentStore` trait and its MongoDB implementation
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the injected student store)
//! - **Startup** (`startup`) - Tracing, database connection, and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the student controller
//! 2. **Controller** parses the path ID, converts DTOs to params, calls service
//! 3. **Service** applies business rules and calls the store
//! 4. **Data** runs one MongoDB operation and converts documents to domain models
//! 5. **Controller** converts domain models to DTOs, or `AppError` to an error response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
