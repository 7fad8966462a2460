//! # Site Survey
//!
//! Building tree model and bill-of-materials rollup for telecom site surveys.
//!
//! ## Features
//!
//! - Buildings, floors, racks, rooms and their assignable equipment
//! - Immutable tree edits addressed by typed paths (add, update, delete, copy)
//! - Typical floor and room multipliers
//! - Product and service rollup with per-occurrence locations
//! - Cascading removal of catalog ids
//! - Margin-based pricing and CSV / JSON export
//!
//! ## Example
//!
//! ```no_run
//! use site_survey::loader::load_survey;
//! use site_survey::rollup::{collect_assigned_items, InMemoryCatalog};
//!
//! let survey = load_survey("survey.json").expect("Failed to load");
//! let rollup = collect_assigned_items(&survey.buildings, &InMemoryCatalog::new());
//! for record in &rollup.products {
//!     println!("{} x{}", record.name, record.quantity);
//! }
//! ```

pub mod cascade;
pub mod error;
pub mod export;
pub mod ids;
pub mod loader;
pub mod model;
pub mod multiplier;
pub mod mutation;
pub mod pricing;
pub mod rollup;
pub mod tree;
