//! Employee — the single record type managed by the service.
//!
//! [`NewEmployee`] is an employee that has not been stored yet and so has no
//! id. [`Employee`] is the persisted form carrying its store-assigned id.
//! Both use camelCase field names on the wire.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Store-assigned surrogate key. Positive, immutable once assigned.
pub type EmployeeId = i64;

/// The mutable fields of an employee, before it has an id.
///
/// Request bodies deserialize into this type, so any `id` a client sends is
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
}

impl NewEmployee {
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    email: impl Into<String>,
  ) -> Self {
    Self {
      first_name: first_name.into(),
      last_name:  last_name.into(),
      email:      email.into(),
    }
  }

  /// Reject blank fields. No format rule is applied to any field.
  pub fn validate(&self) -> Result<()> {
    validate_fields(&self.first_name, &self.last_name, &self.email)
  }
}

/// A persisted employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:         EmployeeId,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
}

impl Employee {
  /// Attach a freshly assigned `id` to `fields`.
  pub fn from_new(id: EmployeeId, fields: NewEmployee) -> Self {
    Self {
      id,
      first_name: fields.first_name,
      last_name: fields.last_name,
      email: fields.email,
    }
  }

  /// Replace every mutable field with the values in `changes`. The id is kept.
  pub fn apply(mut self, changes: NewEmployee) -> Self {
    self.first_name = changes.first_name;
    self.last_name = changes.last_name;
    self.email = changes.email;
    self
  }

  pub fn validate(&self) -> Result<()> {
    validate_fields(&self.first_name, &self.last_name, &self.email)
  }
}

fn validate_fields(first_name: &str, last_name: &str, email: &str) -> Result<()> {
  for (field, value) in [
    ("firstName", first_name),
    ("lastName", last_name),
    ("email", email),
  ] {
    if value.trim().is_empty() {
      return Err(Error::InvalidEmployee(format!("{field} must not be blank")));
    }
  }
  Ok(())
}
