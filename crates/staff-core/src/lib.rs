//! Core types, the record store contract, and the employee service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::EmployeeStore`]; transports drive
//! [`service::EmployeeService`].

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod employee;
pub mod error;
pub mod service;
pub mod store;

pub use error::{Error, Result};
