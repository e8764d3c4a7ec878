//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/employees` | All employees |
//! | `POST`   | `/employees` | Body: `{"firstName","lastName","email"}`; 201, or 409 if the email is taken |
//! | `GET`    | `/employees/:id` | 404 if not found |
//! | `PUT`    | `/employees/:id` | Replaces mutable fields; 404 if not found |
//! | `DELETE` | `/employees/:id` | Always 200 |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde_json::{Value, json};
use staff_core::{
  employee::{Employee, EmployeeId, NewEmployee},
  service::EmployeeService,
  store::EmployeeStore,
};

use crate::error::ApiError;

pub const DELETED_MESSAGE: &str = "Employee deleted successfully!";

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list<S: EmployeeStore>(
  State(service): State<EmployeeService<S>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
  Ok(Json(service.get_all_employees().await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employees`
pub async fn create<S: EmployeeStore>(
  State(service): State<EmployeeService<S>>,
  Json(body): Json<NewEmployee>,
) -> Result<impl IntoResponse, ApiError> {
  let employee = service.save_employee(body).await?;
  Ok((StatusCode::CREATED, Json(employee)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/:id`
pub async fn get_one<S: EmployeeStore>(
  State(service): State<EmployeeService<S>>,
  Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, ApiError> {
  let employee = service
    .get_employee_by_id(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("employee {id} not found")))?;
  Ok(Json(employee))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /employees/:id` — the path id wins over any id in the body.
pub async fn update<S: EmployeeStore>(
  State(service): State<EmployeeService<S>>,
  Path(id): Path<EmployeeId>,
  Json(body): Json<NewEmployee>,
) -> Result<Json<Employee>, ApiError> {
  let existing = service
    .get_employee_by_id(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("employee {id} not found")))?;

  let updated = service.update_employee(existing.apply(body)).await?;
  Ok(Json(updated))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /employees/:id` — succeeds whether or not the id exists.
pub async fn delete_one<S: EmployeeStore>(
  State(service): State<EmployeeService<S>>,
  Path(id): Path<EmployeeId>,
) -> Result<Json<Value>, ApiError> {
  service.delete_employee(id).await?;
  Ok(Json(json!({ "message": DELETED_MESSAGE })))
}
