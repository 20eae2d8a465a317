//! Typed endpoint wrappers over [`HttpClient`](crate::HttpClient)
//!
//! One module per backend resource. Each function issues exactly one
//! request and returns decoded envelope data; screens re-fetch through
//! these after every mutating action.

pub mod auth;
pub mod catalog;
pub mod orders;
pub mod tables;
pub mod users;
