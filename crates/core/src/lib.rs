//! Domain types and pure validation logic for the Q&A service.
//!
//! Nothing in this crate touches the database or HTTP; the `qa-db` and
//! `qa-api` crates build on these types.

pub mod category;
pub mod error;
pub mod types;
pub mod validation;
pub mod votes;
