#[allow(unused_imports)]
use super::*;

use swagger_builder_build::{RENAME_ATTR, RESERVED_FIELD_NAMES, rename_directive};
use syn::ext::IdentExt;

/// A named field must not shadow a builder method and may carry one `#[map_to]`.
pub(super) fn validate_field(field: &Field) -> Result<()> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new(field.span(), "SwaggerBuilder requires named fields"))?;

    let bare = ident.unraw().to_string();
    if RESERVED_FIELD_NAMES.contains(&bare.as_str()) {
        return Err(Error::new(
            ident.span(),
            format!("field `{bare}` would collide with the builder's `{bare}()` method"),
        ));
    }

    rename_directive(&field.attrs).map(|_| ()).map_err(|reason| {
        let span = field
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident(RENAME_ATTR))
            .map_or_else(|| ident.span(), |attr| attr.span());
        Error::new(span, reason)
    })
}
