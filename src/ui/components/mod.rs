//! # UI Components Module
//!
//! This module organizes the UI components of the journal application. Each
//! submodule renders one section of the single-column layout.
//!
//! ## Module Organization:
//! - `styling` - Visual styling, colors, and card painting
//! - `settings_form` - Monthly income and savings fields
//! - `entry_form` - The add-entry form with its type and category logic
//! - `entry_list` - The entry table with per-type color cues
//! - `pie_chart` - Expense distribution pie with legend
//! - `export_modal` - CSV export dialog

pub mod entry_form;
pub mod entry_list;
pub mod export_modal;
pub mod pie_chart;
pub mod settings_form;
pub mod styling;

pub use styling::{card_frame, draw_card_container, setup_app_style};
