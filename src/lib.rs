//! Item Manager Frontend
//!
//! Leptos CSR client for the Item Service: lists items and creates,
//! edits and deletes them through its REST endpoints.

pub mod actions;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod dialog;
pub mod form;
pub mod models;
pub mod store;
