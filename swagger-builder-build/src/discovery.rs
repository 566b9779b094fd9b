//! Discovery of builder requests on scanned declarations.

use std::rc::Rc;

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, Fields, FieldsNamed, ItemStruct, Lit, LitStr, Meta, Type};

use crate::error::GenerateError;
use crate::model::{BuilderRequest, Declaration, FieldDescriptor, SourceType, TargetRef};

/// `#[swagger_builder(target = T, builder_name = "...")]`
pub const REQUEST_ATTR: &str = "swagger_builder";
/// `#[swagger_builders(builder(...), builder(...))]`
pub const REQUEST_LIST_ATTR: &str = "swagger_builders";
/// `#[map_to("targetField")]`
pub const RENAME_ATTR: &str = "map_to";

/// A builder request paired with the source type that carries it.
#[derive(Debug, Clone)]
pub struct Discovered {
    pub source: Rc<SourceType>,
    pub request: BuilderRequest,
}

/// Find every builder request in `declarations`.
///
/// Yields one entry per request, in declaration order and then attribute
/// order. Declarations that are not structs with named fields are skipped
/// without an entry.
pub fn discover(declarations: &[Declaration]) -> Vec<Result<Discovered, GenerateError>> {
    declarations.iter().flat_map(discover_declaration).collect()
}

/// Requests carried by a single declaration.
pub fn discover_declaration(declaration: &Declaration) -> Vec<Result<Discovered, GenerateError>> {
    let item = match &declaration.item {
        syn::Item::Struct(item) => item,
        syn::Item::Enum(item) => {
            if has_builder_metadata(&item.attrs) {
                log::debug!("skipping enum `{}`: builders are only generated for structs", item.ident);
            }
            return Vec::new();
        }
        syn::Item::Union(item) => {
            if has_builder_metadata(&item.attrs) {
                log::debug!("skipping union `{}`: builders are only generated for structs", item.ident);
            }
            return Vec::new();
        }
        _ => return Vec::new(),
    };

    let requests = builder_requests(&item.attrs);
    if requests.is_empty() {
        return Vec::new();
    }

    let Fields::Named(named) = &item.fields else {
        log::debug!("skipping `{}`: builders need named fields", item.ident);
        return Vec::new();
    };

    match source_type(item, named, &declaration.module_path) {
        Ok(source) => {
            let source = Rc::new(source);
            requests
                .into_iter()
                .map(|request| {
                    Ok(Discovered {
                        source: Rc::clone(&source),
                        request,
                    })
                })
                .collect()
        }
        Err((field, reason)) => requests
            .iter()
            .map(|_| {
                Err(GenerateError::InvalidRename {
                    source_type: item.ident.to_string(),
                    field: field.clone(),
                    reason: reason.clone(),
                })
            })
            .collect(),
    }
}

/// Whether any attribute is builder metadata.
pub fn has_builder_metadata(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .any(|attr| attr.path().is_ident(REQUEST_ATTR) || attr.path().is_ident(REQUEST_LIST_ATTR))
}

/// Every request in `attrs`, single and list forms flattened in order.
pub fn builder_requests(attrs: &[Attribute]) -> Vec<BuilderRequest> {
    let mut requests = Vec::new();

    for attr in attrs {
        if attr.path().is_ident(REQUEST_ATTR) {
            requests.push(parse_request(attr));
        } else if attr.path().is_ident(REQUEST_LIST_ATTR) {
            parse_request_list(attr, &mut requests);
        }
    }

    requests
}

fn parse_request(attr: &Attribute) -> BuilderRequest {
    let mut fields = RequestFields::default();
    let parsed = attr.parse_nested_meta(|meta| fields.parse_entry(&meta));
    fields.finish(parsed)
}

fn parse_request_list(attr: &Attribute, requests: &mut Vec<BuilderRequest>) {
    let parsed = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("builder") || meta.path.is_ident(REQUEST_ATTR) {
            let mut fields = RequestFields::default();
            let inner = meta.parse_nested_meta(|entry| fields.parse_entry(&entry));
            requests.push(fields.finish(inner));
            return Ok(());
        }
        Err(meta.error("expected `builder(...)` entries"))
    });

    if let Err(err) = parsed {
        requests.push(BuilderRequest {
            target: TargetRef::Unresolved(format!("malformed #[{REQUEST_LIST_ATTR}]: {err}")),
            builder_name: None,
        });
    }
}

#[derive(Default)]
struct RequestFields {
    target: Option<TargetRef>,
    builder_name: Option<String>,
}

impl RequestFields {
    fn parse_entry(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("target") {
            let value = meta.value()?;
            self.target = Some(if value.peek(LitStr) {
                let lit: LitStr = value.parse()?;
                match lit.parse::<Type>() {
                    Ok(ty) => target_from_type(ty),
                    Err(err) => TargetRef::Unresolved(format!("`{}` is not a type: {err}", lit.value())),
                }
            } else {
                target_from_type(value.parse()?)
            });
            return Ok(());
        }

        if meta.path.is_ident("builder_name") || meta.path.is_ident("name") {
            let lit: LitStr = meta.value()?.parse()?;
            self.builder_name = Some(lit.value());
            return Ok(());
        }

        Err(meta.error("unsupported key, expected `target` or `builder_name`"))
    }

    fn finish(self, parsed: syn::Result<()>) -> BuilderRequest {
        let target = match parsed {
            Err(err) => TargetRef::Unresolved(format!("malformed builder request: {err}")),
            Ok(()) => self
                .target
                .unwrap_or_else(|| TargetRef::Unresolved("missing `target`".to_string())),
        };

        BuilderRequest {
            target,
            builder_name: self.builder_name.filter(|name| !name.is_empty()),
        }
    }
}

fn target_from_type(ty: Type) -> TargetRef {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => TargetRef::Path(type_path.path),
        other => TargetRef::Unresolved(format!(
            "`{}` is not a plain type path",
            crate::model::type_to_string(&other)
        )),
    }
}

/// Build the source descriptor; a bad `#[map_to]` yields `(field, reason)`.
fn source_type(item: &ItemStruct, named: &FieldsNamed, module_path: &str) -> Result<SourceType, (String, String)> {
    let mut fields = Vec::with_capacity(named.named.len());

    for field in &named.named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let target_field_override = rename_directive(&field.attrs).map_err(|reason| (ident.to_string(), reason))?;
        fields.push(FieldDescriptor {
            ident,
            ty: field.ty.clone(),
            target_field_override,
        });
    }

    Ok(SourceType {
        name: item.ident.clone(),
        module_path: module_path.to_string(),
        vis: item.vis.clone(),
        generics: item.generics.clone(),
        fields,
    })
}

/// Read a field's `#[map_to]`, accepting `("x")`, `(target_field_name = "x")` and `= "x"`.
///
/// `Ok(None)` when the field carries no directive. Also used by the derive, so
/// both sides accept the same forms.
pub fn rename_directive(attrs: &[Attribute]) -> Result<Option<String>, String> {
    let mut found: Option<String> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(RENAME_ATTR)) {
        if found.is_some() {
            return Err(format!("only one #[{RENAME_ATTR}] is allowed per field"));
        }

        let value = match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) => lit.value(),
                _ => return Err("expected a string literal".to_string()),
            },
            Meta::List(_) => {
                if let Ok(lit) = attr.parse_args::<LitStr>() {
                    lit.value()
                } else {
                    let mut named: Option<String> = None;
                    attr.parse_nested_meta(|meta| {
                        if meta.path.is_ident("target_field_name") || meta.path.is_ident("value") {
                            let lit: LitStr = meta.value()?.parse()?;
                            named = Some(lit.value());
                            return Ok(());
                        }
                        Err(meta.error("expected a string literal or `target_field_name = \"...\"`"))
                    })
                    .map_err(|err| err.to_string())?;
                    named.ok_or_else(|| "missing target field name".to_string())?
                }
            }
            Meta::Path(_) => return Err("missing target field name".to_string()),
        };

        found = Some(value);
    }

    Ok(found)
}
