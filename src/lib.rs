//! Browser dashboard for aurora visibility.
//!
//! This crate defines:
//! - Typed models for the auroraslive.io payloads
//! - The API client with sequential fetch orchestration
//! - Yew hooks and components wiring search input to rendered results
//!
//! The binary entry point composes these into the page.

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
