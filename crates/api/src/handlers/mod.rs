//! HTTP handlers, one module per resource.

pub mod accounts;
pub mod admin;
pub mod catalog;
pub mod issues;
pub mod uploads;
