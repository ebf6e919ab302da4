//! Core Traits for SonarGuard
//!
//! ## Module Organization
//!
//! - [`filter`] - The pair filter interface streams are built on
//! - [`stream`] - Pull-based, non-blocking sample streams
//!
//! Both traits are implemented with static dispatch in mind; nothing in the
//! core boxes a filter or a stream.

pub mod filter;
pub mod stream;

pub use filter::PairFilter;
pub use stream::Stream;
