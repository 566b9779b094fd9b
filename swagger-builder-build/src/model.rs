//! Values flowing through a generation pass.
//!
//! Everything here is built once per pass and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

use quote::ToTokens;
use syn::{Generics, Ident, Type, Visibility};

use crate::error::GenerateError;

/// Suffix appended to the source type name when a request names no builder.
pub const DEFAULT_BUILDER_SUFFIX: &str = "Builder";

/// One item of a scanned source file together with the module it lives in.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Module path of the enclosing module (e.g. `crate::custom`).
    pub module_path: String,
    pub item: syn::Item,
}

/// A struct with named fields that carries builder metadata.
#[derive(Debug, Clone)]
pub struct SourceType {
    pub name: Ident,
    pub module_path: String,
    pub vis: Visibility,
    pub generics: Generics,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

/// A named field of a source type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub ident: Ident,
    pub ty: Type,
    /// Value of the field's `#[map_to]` directive, if any.
    pub target_field_override: Option<String>,
}

/// One `builder(...)` request read from a source type's attributes.
#[derive(Debug, Clone)]
pub struct BuilderRequest {
    pub target: TargetRef,
    pub builder_name: Option<String>,
}

/// The declared `target` of a builder request.
#[derive(Debug, Clone)]
pub enum TargetRef {
    Path(syn::Path),
    /// The metadata named no usable type; carries the reason.
    Unresolved(String),
}

impl TargetRef {
    /// Resolve the declared reference to a concrete type path.
    pub fn resolve(&self, source_type: &str) -> Result<&syn::Path, GenerateError> {
        match self {
            TargetRef::Path(path) => Ok(path),
            TargetRef::Unresolved(reason) => Err(GenerateError::UnresolvedTarget {
                source_type: source_type.to_string(),
                reason: reason.clone(),
            }),
        }
    }

    /// Human readable form, used for listings and diagnostics.
    pub fn display(&self) -> String {
        match self {
            TargetRef::Path(path) => path_to_string(path),
            TargetRef::Unresolved(reason) => format!("<unresolved: {reason}>"),
        }
    }
}

/// How the setter invoked on the target type is named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SetterStyle {
    /// `"set" + capitalize(field)`, e.g. `setUserAge`.
    #[default]
    Prefixed,
    /// `"set_" + field`, e.g. `set_user_age`.
    Snake,
}

impl FromStr for SetterStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefixed" | "camel" => Ok(SetterStyle::Prefixed),
            "snake" => Ok(SetterStyle::Snake),
            other => Err(format!("unknown setter style `{other}` (expected `prefixed` or `snake`)")),
        }
    }
}

impl fmt::Display for SetterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetterStyle::Prefixed => f.write_str("prefixed"),
            SetterStyle::Snake => f.write_str("snake"),
        }
    }
}

/// Knobs shared by every request of a generation pass.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub setter_style: SetterStyle,
}

/// Shape of one builder, ready for emission.
#[derive(Debug, Clone)]
pub struct BuilderSpec {
    pub class_name: Ident,
    pub module_path: String,
    pub vis: Visibility,
    pub generics: Generics,
    pub source_name: Ident,
    pub target_type: syn::Path,
    pub fields: Vec<BuilderField>,
}

/// A builder field, its fluent setter and its statement in `build()`.
#[derive(Debug, Clone)]
pub struct BuilderField {
    pub ident: Ident,
    pub ty: Type,
    /// Resolved target field name (`#[map_to]` value or the field name).
    pub target_field: String,
    /// Setter invoked on the target, derived from `target_field`.
    pub setter: Ident,
}

impl BuilderSpec {
    /// `module_path::ClassName`.
    pub fn fully_qualified_name(&self) -> String {
        format!("{}::{}", self.module_path, self.class_name)
    }

    pub fn output_slot(&self) -> OutputSlot {
        OutputSlot::new(self.fully_qualified_name())
    }

    /// The `target.setX(self.x)` calls of `build()`, in field order.
    pub fn setter_calls(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|field| format!("target.{}(self.{})", field.setter, field.ident))
            .collect()
    }
}

/// Named location a generated unit is written to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputSlot {
    fully_qualified_name: String,
}

impl OutputSlot {
    pub fn new(fully_qualified_name: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
        }
    }

    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    /// Slot key: the fully qualified name without a leading `crate` segment,
    /// joined with dots (`crate::custom::MyUserBuilder` -> `custom.MyUserBuilder`).
    pub fn key(&self) -> String {
        let mut segments: Vec<&str> = self.fully_qualified_name.split("::").filter(|s| !s.is_empty()).collect();
        if segments.len() > 1 && segments.first() == Some(&"crate") {
            segments.remove(0);
        }
        segments.join(".")
    }

    pub fn file_name(&self) -> String {
        format!("{}.rs", self.key())
    }
}

impl fmt::Display for OutputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name)
    }
}

/// Render a path as `a::b::C`, without generic arguments.
pub fn path_to_string(path: &syn::Path) -> String {
    let joined = path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::");
    if path.leading_colon.is_some() {
        format!("::{joined}")
    } else {
        joined
    }
}

/// Render a type compactly (`Vec<String>` rather than `Vec < String >`).
pub fn type_to_string(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" < ", "<")
        .replace("< ", "<")
        .replace(" <", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_slot_key_drops_crate_root() {
        let slot = OutputSlot::new("crate::custom::MyUserBuilder");
        assert_eq!(slot.key(), "custom.MyUserBuilder");
        assert_eq!(slot.file_name(), "custom.MyUserBuilder.rs");
    }

    #[test]
    fn test_output_slot_key_keeps_named_crate() {
        let slot = OutputSlot::new("my_lib::models::UserBuilder");
        assert_eq!(slot.key(), "my_lib.models.UserBuilder");

        let root = OutputSlot::new("crate::UserBuilder");
        assert_eq!(root.file_name(), "UserBuilder.rs");
    }

    #[test]
    fn test_setter_style_from_str() {
        assert_eq!("prefixed".parse::<SetterStyle>().unwrap(), SetterStyle::Prefixed);
        assert_eq!("Snake".parse::<SetterStyle>().unwrap(), SetterStyle::Snake);
        assert!("kebab".parse::<SetterStyle>().is_err());
    }

    #[test]
    fn test_type_to_string() {
        let ty: Type = syn::parse_str("Vec<String>").unwrap();
        assert_eq!(type_to_string(&ty), "Vec<String>");

        let ty: Type = syn::parse_str("std::collections::HashMap<String, u32>").unwrap();
        assert_eq!(type_to_string(&ty), "std::collections::HashMap<String, u32>");
    }

    #[test]
    fn test_unresolved_target_fails_to_resolve() {
        let target = TargetRef::Unresolved("missing `target`".to_string());
        let err = target.resolve("MyUser").unwrap_err();
        assert!(err.to_string().contains("MyUser"));
        assert!(err.to_string().contains("missing `target`"));
    }
}
