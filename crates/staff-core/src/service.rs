//! Employee use-case service.
//!
//! Sits between transports and an [`EmployeeStore`]. The only business rule
//! is email uniqueness on creation; everything else forwards to the store.

use std::sync::Arc;

use crate::{
  Error, Result,
  employee::{Employee, EmployeeId, NewEmployee},
  store::EmployeeStore,
};

/// Business-rule layer over an [`EmployeeStore`].
///
/// Cloning is cheap — the store is reference-counted.
#[derive(Debug)]
pub struct EmployeeService<S> {
  store: Arc<S>,
}

impl<S> Clone for EmployeeService<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store) }
  }
}

fn lift<T, E: Into<Error>>(result: Result<T, E>) -> Result<T> {
  result.map_err(Into::into)
}

impl<S: EmployeeStore> EmployeeService<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Create an employee.
  ///
  /// Fails with [`Error::DuplicateEmail`] without writing anything if the
  /// email is already in use.
  pub async fn save_employee(&self, employee: NewEmployee) -> Result<Employee> {
    employee.validate()?;

    if let Some(existing) = lift(self.store.find_by_email(&employee.email).await)? {
      tracing::warn!(
        email = %employee.email,
        existing_id = existing.id,
        "rejected employee with duplicate email"
      );
      return Err(Error::DuplicateEmail(employee.email));
    }

    let saved = lift(self.store.create(employee).await)?;
    tracing::info!(id = saved.id, email = %saved.email, "employee created");
    Ok(saved)
  }

  pub async fn get_all_employees(&self) -> Result<Vec<Employee>> {
    lift(self.store.find_all().await)
  }

  /// Absence is `Ok(None)`, not an error.
  pub async fn get_employee_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
    lift(self.store.find_by_id(id).await)
  }

  /// Write `employee` over the stored row with the same id.
  ///
  /// Callers check existence first; this performs no lookup of its own.
  pub async fn update_employee(&self, employee: Employee) -> Result<Employee> {
    employee.validate()?;
    let saved = lift(self.store.save(employee).await)?;
    tracing::info!(id = saved.id, "employee updated");
    Ok(saved)
  }

  /// Delete by id. A missing id is a silent no-op.
  pub async fn delete_employee(&self, id: EmployeeId) -> Result<()> {
    lift(self.store.delete_by_id(id).await)?;
    tracing::info!(id, "employee deleted");
    Ok(())
  }
}
