//! Data Transfer Objects for the Coveralls API
//!
//! Write models sent with create and update requests, plus the envelope the
//! API expects them to be wrapped in.

pub mod repository;
