//! Shared data model for the ChatBubble transcript components.
//!
//! Everything here is caller-owned and immutable from the rendering layer's
//! point of view: the frontend crate maps these records to markup and never
//! mutates or persists them.
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
