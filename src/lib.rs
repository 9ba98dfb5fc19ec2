//! Fansort - sorts fansub media releases into per-series directories.
//!
//! This library crate exposes the organizer for integration testing.

pub mod organizer;
