//! HTTP API: routing and request/response mapping over the inventory service.

pub mod app;
