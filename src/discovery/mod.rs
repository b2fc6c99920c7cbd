//! File discovery module
//!
//! This module contains components for listing a directory and narrowing the
//! listing down to the files a batch should process.

mod scanner;

pub use scanner::{FileListing, list_directory, with_extension};
