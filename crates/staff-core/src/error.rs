//! Error types for `staff-core`.

use thiserror::Error;

use crate::employee::EmployeeId;

#[derive(Debug, Error)]
pub enum Error {
  /// Another employee already uses this email address.
  #[error("an employee with email {0:?} already exists")]
  DuplicateEmail(String),

  #[error("employee not found: {0}")]
  EmployeeNotFound(EmployeeId),

  #[error("invalid employee: {0}")]
  InvalidEmployee(String),

  /// An opaque failure inside the storage backend.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
