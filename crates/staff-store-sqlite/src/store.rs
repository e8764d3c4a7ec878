//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use staff_core::{
  employee::{Employee, EmployeeId, NewEmployee},
  store::EmployeeStore,
};

use crate::{Result, error::write_error, schema::SCHEMA};

const SELECT_EMPLOYEE: &str = "SELECT id, first_name, last_name, email FROM employees";

fn employee_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
  Ok(Employee {
    id:         row.get(0)?,
    first_name: row.get(1)?,
    last_name:  row.get(2)?,
    email:      row.get(3)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("employee schema ready");
    Ok(())
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  type Error = crate::Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn create(&self, employee: NewEmployee) -> Result<Employee> {
    let email = employee.email.clone();
    let fields = employee.clone();

    let id: EmployeeId = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employees (first_name, last_name, email) VALUES (?1, ?2, ?3)",
          rusqlite::params![fields.first_name, fields.last_name, fields.email],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| write_error(e, &email))?;

    Ok(Employee::from_new(id, employee))
  }

  async fn save(&self, employee: Employee) -> Result<Employee> {
    let email = employee.email.clone();
    let row = employee.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employees (id, first_name, last_name, email)
           VALUES (?1, ?2, ?3, ?4)
           ON CONFLICT (id) DO UPDATE SET
             first_name = excluded.first_name,
             last_name  = excluded.last_name,
             email      = excluded.email",
          rusqlite::params![row.id, row.first_name, row.last_name, row.email],
        )?;
        Ok(())
      })
      .await
      .map_err(|e| write_error(e, &email))?;

    Ok(employee)
  }

  async fn delete_by_id(&self, id: EmployeeId) -> Result<()> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM employees WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    tracing::debug!(id, removed, "delete by id");
    Ok(())
  }

  async fn delete_by_email(&self, email: &str) -> Result<()> {
    let email = email.to_owned();
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM employees WHERE email = ?1", rusqlite::params![email])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn find_all(&self) -> Result<Vec<Employee>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("{SELECT_EMPLOYEE} ORDER BY id"))?;
        let rows = stmt
          .query_map([], employee_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("{SELECT_EMPLOYEE} WHERE id = ?1"),
              rusqlite::params![id],
              employee_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<Employee>> {
    let email = email.to_owned();
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("{SELECT_EMPLOYEE} WHERE email = ?1"),
              rusqlite::params![email],
              employee_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM employees", [], |r| r.get(0))?)
      })
      .await?;
    Ok(n as u64)
  }
}
