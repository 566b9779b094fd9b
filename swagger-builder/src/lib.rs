//! swagger-builder: fluent builders for swagger-style models.
//!
//! Annotate a struct with `#[derive(SwaggerBuilder)]` and one or more
//! `#[swagger_builder(target = ...)]` requests, run
//! [`swagger_builder_build`](https://docs.rs/swagger-builder-build) from your
//! `build.rs`, and pull the generated builders into the same module with
//! [`include_builder!`].
//!
//! ```ignore
//! use swagger_builder::SwaggerBuilder;
//!
//! #[derive(SwaggerBuilder)]
//! #[swagger_builder(target = MockUser)]
//! pub struct MyUser {
//!     name: String,
//!     #[map_to("interests")]
//!     hobbies: Vec<String>,
//! }
//!
//! swagger_builder::include_builder!("custom.MyUserBuilder");
//!
//! let user: MockUser = MyUserBuilder::new()
//!     .name("Ada".to_string())
//!     .hobbies(vec!["chess".to_string()])
//!     .build();
//! ```

pub use swagger_builder_macros::SwaggerBuilder;

pub mod examples;

/// Include a generated builder from `$OUT_DIR/swagger_builders`.
///
/// The argument is the builder's slot key: its fully qualified name without
/// the leading `crate`, joined with dots (`crate::custom::MyUserBuilder` is
/// `"custom.MyUserBuilder"`). Invoke it in the module that declares the
/// source struct so the builder sees the same imports.
#[macro_export]
macro_rules! include_builder {
    ($slot:literal) => {
        include!(concat!(env!("OUT_DIR"), "/swagger_builders/", $slot, ".rs"));
    };
}
