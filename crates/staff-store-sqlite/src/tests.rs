//! Integration tests for `SqliteStore` against an in-memory database.

use staff_core::{
  employee::{Employee, NewEmployee},
  store::EmployeeStore,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn employee(first: &str, last: &str, email: &str) -> NewEmployee {
  NewEmployee::new(first, last, email)
}

// ─── Create / read ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_positive_id() {
  let s = store().await;

  let saved = s
    .create(employee("Manoj", "Stingh", "manojsingh.manoj@gmail.com"))
    .await
    .unwrap();
  assert!(saved.id > 0);
  assert_eq!(saved.first_name, "Manoj");
  assert_eq!(saved.email, "manojsingh.manoj@gmail.com");
}

#[tokio::test]
async fn create_assigns_distinct_ids() {
  let s = store().await;
  let a = s.create(employee("Akshita", "Singh", "a@example.com")).await.unwrap();
  let b = s.create(employee("Akshat", "Singh", "b@example.com")).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn find_all_returns_every_row() {
  let s = store().await;
  s.create(employee("Akshita", "Singh", "akshita@example.com")).await.unwrap();
  s.create(employee("Akshat", "Singh", "akshat@example.com")).await.unwrap();
  s.create(employee("Manoj", "Singh", "manoj@example.com")).await.unwrap();

  let all = s.find_all().await.unwrap();
  assert_eq!(all.len(), 3);
  assert_eq!(s.count().await.unwrap(), 3);
  assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn find_all_on_empty_store() {
  let s = store().await;
  assert!(s.find_all().await.unwrap().is_empty());
  assert_eq!(s.count().await.unwrap(), 0);
}

#[tokio::test]
async fn find_by_id() {
  let s = store().await;
  let saved = s
    .create(employee("Akshita", "Singh", "manojsingh.manoj@gmail.com"))
    .await
    .unwrap();

  let fetched = s.find_by_id(saved.id).await.unwrap().unwrap();
  assert_eq!(fetched, saved);
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
  let s = store().await;
  assert!(s.find_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn find_by_email() {
  let s = store().await;
  s.create(employee("Akshita", "Singh", "manojsingh.manoj@gmail.com"))
    .await
    .unwrap();

  let fetched = s
    .find_by_email("manojsingh.manoj@gmail.com")
    .await
    .unwrap()
    .unwrap();
  assert_eq!(fetched.first_name, "Akshita");
  assert!(s.find_by_email("nobody@example.com").await.unwrap().is_none());
}

// ─── Save (update / upsert) ──────────────────────────────────────────────────

#[tokio::test]
async fn save_overwrites_existing_row() {
  let s = store().await;
  let saved = s
    .create(employee("Akshita", "Singh", "manojsingh.manoj@gmail.com"))
    .await
    .unwrap();

  let mut changed = s.find_by_id(saved.id).await.unwrap().unwrap();
  changed.email = "aakshitasingh.akshita@gmail.com".into();
  let updated = s.save(changed).await.unwrap();
  assert_eq!(updated.email, "aakshitasingh.akshita@gmail.com");

  let fetched = s.find_by_id(saved.id).await.unwrap().unwrap();
  assert_eq!(fetched.email, "aakshitasingh.akshita@gmail.com");
  assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn save_inserts_when_id_absent() {
  let s = store().await;
  let row = Employee::from_new(77, employee("Tony", "Kapida", "tonymail@gmail.com"));
  s.save(row.clone()).await.unwrap();
  assert_eq!(s.find_by_id(77).await.unwrap(), Some(row));
}

// ─── Uniqueness ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn duplicate_email_on_create_is_rejected() {
  let s = store().await;
  s.create(employee("Manoj", "Singh", "mymail@gmail.com")).await.unwrap();

  let err = s
    .create(employee("Other", "Person", "mymail@gmail.com"))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::DuplicateEmail(ref e) if e == "mymail@gmail.com"));
  assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn save_onto_another_rows_email_is_rejected() {
  let s = store().await;
  s.create(employee("Manoj", "Singh", "mymail@gmail.com")).await.unwrap();
  let tony = s.create(employee("Tony", "Kapida", "tonymail@gmail.com")).await.unwrap();

  let err = s
    .save(Employee { email: "mymail@gmail.com".into(), ..tony.clone() })
    .await
    .unwrap_err();
  assert!(matches!(err, Error::DuplicateEmail(_)));

  let unchanged = s.find_by_id(tony.id).await.unwrap().unwrap();
  assert_eq!(unchanged.email, "tonymail@gmail.com");
}

#[test]
fn duplicate_email_converts_to_core_error() {
  let core: staff_core::Error = Error::DuplicateEmail("x@example.com".into()).into();
  assert!(matches!(core, staff_core::Error::DuplicateEmail(_)));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_by_id_removes_row() {
  let s = store().await;
  let saved = s
    .create(employee("Akshita", "Singh", "akshita.singh@gmail.com"))
    .await
    .unwrap();

  s.delete_by_id(saved.id).await.unwrap();
  assert!(s.find_by_id(saved.id).await.unwrap().is_none());
  assert!(s.find_by_email("akshita.singh@gmail.com").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_by_email_removes_only_that_row() {
  let s = store().await;
  s.create(employee("Akshita", "Singh", "akshita.singh@gmail.com")).await.unwrap();
  s.create(employee("Akshat", "Singh", "manojsingh.manoj@gmail.com")).await.unwrap();

  s.delete_by_email("akshita.singh@gmail.com").await.unwrap();
  assert!(s.find_by_email("akshita.singh@gmail.com").await.unwrap().is_none());
  assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn delete_missing_is_noop() {
  let s = store().await;
  s.delete_by_id(12345).await.unwrap();
  s.delete_by_email("nobody@example.com").await.unwrap();
  assert_eq!(s.count().await.unwrap(), 0);
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
  let s = store().await;
  let first = s.create(employee("A", "One", "one@example.com")).await.unwrap();
  s.delete_by_id(first.id).await.unwrap();
  let second = s.create(employee("B", "Two", "two@example.com")).await.unwrap();
  assert!(second.id > first.id);
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn file_store_survives_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("reopen.db");

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.create(employee("Manoj", "Singh", "mymail@gmail.com")).await.unwrap().id
  };

  let s = SqliteStore::open(&path).await.unwrap();
  let fetched = s.find_by_id(id).await.unwrap().unwrap();
  assert_eq!(fetched.email, "mymail@gmail.com");
}
