//! Core domain types
//!
//! Read models decoded from Coveralls API responses. Fields the server may
//! leave out are optional so that an absent value never turns into a default.

pub mod repository;
