//! Usage example.
//!
//! [`mocks`] stands in for swagger-generated models exposing `setX` methods;
//! [`custom`] declares the hand-written source type whose builders are
//! generated by this crate's `build.rs`.

pub mod custom;
pub mod mocks;

pub use custom::{AdminUserBuilder, Membership, MyUser, MyUserBuilder};
pub use mocks::{MockAdmin, MockUser};
