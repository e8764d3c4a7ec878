//! JSON REST API for employee records.
//!
//! Exposes an axum [`Router`] backed by an [`EmployeeService`] over any
//! [`EmployeeStore`]. TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", staff_api::api_router(service.clone()))
//! ```

pub mod employees;
pub mod error;

use axum::{Router, routing::get};
use staff_core::{service::EmployeeService, store::EmployeeStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: EmployeeService<S>) -> Router<()>
where
  S: EmployeeStore + 'static,
{
  Router::new()
    .route(
      "/employees",
      get(employees::list::<S>).post(employees::create::<S>),
    )
    .route(
      "/employees/{id}",
      get(employees::get_one::<S>)
        .put(employees::update::<S>)
        .delete(employees::delete_one::<S>),
    )
    .with_state(service)
}
