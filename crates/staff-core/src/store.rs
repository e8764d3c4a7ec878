//! The `EmployeeStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `staff-store-sqlite`).
//! [`EmployeeService`](crate::service::EmployeeService) depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::employee::{Employee, EmployeeId, NewEmployee};

/// Abstraction over the persistence layer for employee records.
///
/// The store adds no locking or transactions of its own; whatever isolation
/// the underlying engine provides is all callers get.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait EmployeeStore: Send + Sync {
  /// Backend error. Must convert into [`crate::Error`] so that conditions the
  /// backend detects itself (such as a unique-email violation) surface as the
  /// matching core variant.
  type Error: std::error::Error + Send + Sync + 'static + Into<crate::Error>;

  /// Persist a new employee and return it with its assigned id.
  fn create(
    &self,
    employee: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Overwrite the row whose id matches `employee.id`, inserting it if no such
  /// row exists.
  fn save(
    &self,
    employee: Employee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// List every stored employee, in ascending id order.
  fn find_all(&self) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Retrieve an employee by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: EmployeeId,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Retrieve an employee by exact email. Returns `None` if not found.
  fn find_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

  /// Delete by id. Deleting a missing id is not an error.
  fn delete_by_id(
    &self,
    id: EmployeeId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete by email. Deleting a missing email is not an error.
  fn delete_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Number of stored employees.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
