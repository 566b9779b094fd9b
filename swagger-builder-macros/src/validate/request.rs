#[allow(unused_imports)]
use super::*;

/// `#[swagger_builder(target = T, builder_name = "...")]`
pub(super) fn validate_request(attr: &Attribute) -> Result<()> {
    let mut entry = RequestEntry::default();
    attr.parse_nested_meta(|meta| entry.parse(&meta))?;
    entry.finish(attr.span())
}

/// `#[swagger_builders(builder(...), builder(...))]`, returning the number of requests.
pub(super) fn validate_request_list(attr: &Attribute) -> Result<usize> {
    let mut count = 0;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("builder") || meta.path.is_ident("swagger_builder") {
            let mut entry = RequestEntry::default();
            let span = meta.path.span();
            meta.parse_nested_meta(|inner| entry.parse(&inner))?;
            entry.finish(span)?;
            count += 1;
            return Ok(());
        }
        Err(meta.error("expected `builder(target = ..., builder_name = \"...\")`"))
    })?;

    if count == 0 {
        return Err(Error::new(attr.span(), "#[swagger_builders] needs at least one `builder(...)` entry"));
    }

    Ok(count)
}

#[derive(Default)]
struct RequestEntry {
    has_target: bool,
}

impl RequestEntry {
    fn parse(&mut self, meta: &ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("target") {
            if self.has_target {
                return Err(meta.error("duplicate `target`"));
            }
            let value = meta.value()?;
            let ty: Type = if value.peek(LitStr) {
                let lit: LitStr = value.parse()?;
                lit.parse()?
            } else {
                value.parse()?
            };
            match ty {
                Type::Path(type_path) if type_path.qself.is_none() => self.has_target = true,
                other => return Err(Error::new(other.span(), "`target` must be a type path")),
            }
            return Ok(());
        }

        if meta.path.is_ident("builder_name") || meta.path.is_ident("name") {
            let lit: LitStr = meta.value()?.parse()?;
            let name = lit.value();
            if !name.is_empty() && syn::parse_str::<Ident>(&name).is_err() {
                return Err(Error::new(lit.span(), format!("`{name}` is not a valid builder name")));
            }
            return Ok(());
        }

        Err(meta.error("unsupported key, expected `target` or `builder_name`"))
    }

    fn finish(self, span: proc_macro2::Span) -> Result<()> {
        if self.has_target {
            Ok(())
        } else {
            Err(Error::new(span, "missing `target = <type>` in builder request"))
        }
    }
}
