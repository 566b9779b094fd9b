//! Field-to-target-field mapping.

use syn::ext::IdentExt;

use crate::model::{FieldDescriptor, SetterStyle};

/// Name of the target field a source field maps to.
///
/// A non-empty `#[map_to]` value wins; otherwise the field's own name is used
/// (without any `r#` prefix). The result is not checked against the target type.
pub fn resolve_target_field(field: &FieldDescriptor) -> String {
    match field.target_field_override.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => field.ident.unraw().to_string(),
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the setter invoked on the target for a resolved target field.
pub fn setter_name(target_field: &str, style: SetterStyle) -> String {
    match style {
        SetterStyle::Prefixed => format!("set{}", capitalize(target_field)),
        SetterStyle::Snake => format!("set_{target_field}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::format_ident;

    fn field(name: &str, rename: Option<&str>) -> FieldDescriptor {
        FieldDescriptor {
            ident: syn::parse_str(name).unwrap(),
            ty: syn::parse_str("String").unwrap(),
            target_field_override: rename.map(str::to_string),
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("Age"), "Age");
        assert_eq!(capitalize("userAge"), "UserAge");
        assert_eq!(capitalize("user_age"), "User_age");
    }

    #[test]
    fn test_resolve_without_override_uses_field_name() {
        assert_eq!(resolve_target_field(&field("name", None)), "name");
    }

    #[test]
    fn test_resolve_with_override_ignores_field_name() {
        assert_eq!(resolve_target_field(&field("hobbies", Some("interests"))), "interests");
    }

    #[test]
    fn test_resolve_empty_override_falls_back() {
        assert_eq!(resolve_target_field(&field("hobbies", Some(""))), "hobbies");
    }

    #[test]
    fn test_resolve_strips_raw_prefix() {
        let raw = FieldDescriptor {
            ident: format_ident!("r#type"),
            ty: syn::parse_str("String").unwrap(),
            target_field_override: None,
        };
        assert_eq!(resolve_target_field(&raw), "type");
    }

    #[test]
    fn test_setter_name() {
        assert_eq!(setter_name("userAge", SetterStyle::Prefixed), "setUserAge");
        assert_eq!(setter_name("interests", SetterStyle::Prefixed), "setInterests");
        assert_eq!(setter_name("", SetterStyle::Prefixed), "set");
        assert_eq!(setter_name("user_age", SetterStyle::Snake), "set_user_age");
    }
}
