//! Request models for the Qdrant REST API.
//!
//! Every optional field is an `Option` that is left out of the serialized
//! body when unset. Fields routed to the query string (`wait`, `ordering`,
//! `consistency`) are skipped by serde and picked up by the endpoint.
//! Responses are not modelled; endpoints return [`serde_json::Value`].

pub mod collections;
pub mod common;
pub mod points;
pub mod service;

pub use collections::*;
pub use common::*;
pub use points::*;
pub use service::*;
