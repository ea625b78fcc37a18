//! Chordgrid Core Types and Definitions
//!
//! This crate provides the foundational types shared by every Chordgrid
//! crate. It includes:
//!
//! - **Tables**: Fixed percentage coordinates of the chord grid ([`tables`] module)
//! - **String names**: Letter-to-index lookup for guitar strings ([`string_name`] module)
//! - **Shape**: The validated chord shape model ([`shape::Shape`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Resolution-independent draw primitives ([`draw`] module)
//! - **Errors**: Validation and construction failures ([`error`] module)

pub mod draw;
pub mod error;
pub mod geometry;
pub mod shape;
pub mod string_name;
pub mod tables;
