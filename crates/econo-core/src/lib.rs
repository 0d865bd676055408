//! # econo-core — Catalog Types for the Econo API
//!
//! The catalog is a collaborator of the API service, not part of its
//! authentication core. This crate gives it two narrow interfaces:
//!
//! - a **read interface**: [`Catalog`] lists records and looks one up by slug;
//! - a **render interface**: [`Product`] derives `Serialize` with the wire
//!   field names (`Id`, `Name`, `Slug`, `Description`).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `econo-*` crates (leaf of the DAG).
//! - The catalog is immutable after construction; shared reads need no lock.

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, StaticCatalog};
pub use product::Product;
