//! Error type for `staff-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A write hit the `UNIQUE (email)` constraint.
  #[error("an employee with email {0:?} already exists")]
  DuplicateEmail(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for staff_core::Error {
  fn from(err: Error) -> Self {
    match err {
      Error::DuplicateEmail(email) => staff_core::Error::DuplicateEmail(email),
      other => staff_core::Error::Store(Box::new(other)),
    }
  }
}

/// Classify a failed write, turning a unique-constraint hit into
/// [`Error::DuplicateEmail`].
pub(crate) fn write_error(err: tokio_rusqlite::Error, email: &str) -> Error {
  match &err {
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
      if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
    {
      Error::DuplicateEmail(email.to_owned())
    }
    _ => Error::Database(err),
  }
}
