use thiserror::Error;

/// Failure of a single builder request.
///
/// Every variant is scoped to one request: the driver reports it and moves on
/// to the next request.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The `target` of a builder request could not be read as a type path.
    #[error("cannot resolve target type for `{source_type}`: {reason}")]
    UnresolvedTarget { source_type: String, reason: String },

    /// The requested (or defaulted) builder name is not a Rust identifier.
    #[error("`{name}` is not a valid builder name for `{source_type}`")]
    InvalidBuilderName { source_type: String, name: String },

    /// A resolved target field produced a setter name that is not a Rust identifier.
    #[error("field `{field}` of `{source_type}` maps to setter `{setter}`, which is not a valid method name")]
    InvalidSetter {
        source_type: String,
        field: String,
        setter: String,
    },

    /// A source field would collide with one of the builder's own methods.
    #[error("field `{field}` of `{source_type}` cannot be a setter on `{builder}`: `{field}` is reserved for the builder")]
    ReservedFieldName {
        source_type: String,
        builder: String,
        field: String,
    },

    /// A `#[map_to]` directive could not be read.
    #[error("invalid #[map_to] on field `{field}` of `{source_type}`: {reason}")]
    InvalidRename {
        source_type: String,
        field: String,
        reason: String,
    },

    /// The synthesized builder did not form valid Rust syntax.
    #[error("failed to render builder `{builder}`: {source}")]
    Render {
        builder: String,
        #[source]
        source: syn::Error,
    },

    /// The output slot could not be written.
    #[error("failed to write builder `{builder}`: {source}")]
    Write {
        builder: String,
        #[source]
        source: std::io::Error,
    },
}
