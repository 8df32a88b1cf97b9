//! # Catatan Keuangan
//!
//! A daily personal finance journal: income and expense entries with a running
//! balance, per-category expense distribution, local JSON persistence and CSV
//! export, presented as an egui desktop application.
//!
//! The crate is split into two layers:
//! - [`backend`] - domain services and storage, fully UI-agnostic
//! - [`ui`] - the egui frontend that renders state and dispatches intents

pub mod backend;
pub mod ui;
