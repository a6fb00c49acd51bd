//! # subnetr common
//!
//! Shared building blocks for the `subnetr` workspace:
//!
//! * **[`network`]**: the 32-bit address model ([`network::block::AddressBlock`]), CIDR and
//!   demand parsing, and inclusive address ranges.
//! * **[`error`]**: the error kinds every layer reports.
//! * **[`config`]**: run-wide options assembled by the command line.

pub mod config;
pub mod error;
pub mod network;
