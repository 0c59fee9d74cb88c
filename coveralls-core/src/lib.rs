//! Coveralls Core
//!
//! Wire types for the Coveralls repository API.
//!
//! This crate contains:
//! - Domain types: repository records as the server reports them
//! - DTOs: write models and request envelopes sent to the server

pub mod domain;
pub mod dto;
