//! CLI library components for the signal adjustment toolkit.

#![allow(missing_docs)]

pub mod commands;
pub mod logging;
pub mod project;
pub mod summary;
pub mod types;
