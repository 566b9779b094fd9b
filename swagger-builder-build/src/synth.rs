//! Builder shape synthesis.

use syn::ext::IdentExt;
use syn::visit_mut::{self, VisitMut};
use syn::punctuated::Punctuated;
use syn::{Ident, PathSegment, QSelf, Token, Type, TypePath, parse_quote};

use crate::error::GenerateError;
use crate::model::{BuilderField, BuilderRequest, BuilderSpec, DEFAULT_BUILDER_SUFFIX, GenerationOptions, SourceType};
use crate::resolver::{resolve_target_field, setter_name};

/// Builder methods a source field must not shadow.
pub const RESERVED_FIELD_NAMES: &[&str] = &["new", "build"];

/// Builder name for a request: the requested one, or `SourceBuilder`.
pub fn builder_class_name(source: &SourceType, request: &BuilderRequest) -> String {
    match request.builder_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{}{DEFAULT_BUILDER_SUFFIX}", source.name),
    }
}

/// Compute the builder shape for one request.
pub fn synthesize(
    source: &SourceType,
    request: &BuilderRequest,
    options: &GenerationOptions,
) -> Result<BuilderSpec, GenerateError> {
    let source_name = source.name.to_string();

    let class_name = builder_class_name(source, request);
    let class_ident = parse_ident(&class_name).ok_or_else(|| GenerateError::InvalidBuilderName {
        source_type: source_name.clone(),
        name: class_name.clone(),
    })?;

    let target_type = request.target.resolve(&source_name)?.clone();
    let source_ty = source_self_type(source);

    let fields = source
        .fields
        .iter()
        .map(|field| {
            let bare = field.ident.unraw().to_string();
            if RESERVED_FIELD_NAMES.contains(&bare.as_str()) {
                return Err(GenerateError::ReservedFieldName {
                    source_type: source_name.clone(),
                    builder: class_name.clone(),
                    field: bare,
                });
            }

            let target_field = resolve_target_field(field);
            let setter = setter_name(&target_field, options.setter_style);
            let setter_ident = parse_ident(&setter).ok_or_else(|| GenerateError::InvalidSetter {
                source_type: source_name.clone(),
                field: field.ident.to_string(),
                setter: setter.clone(),
            })?;

            Ok(BuilderField {
                ident: field.ident.clone(),
                ty: replace_self(&field.ty, &source_ty),
                target_field,
                setter: setter_ident,
            })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    Ok(BuilderSpec {
        class_name: class_ident,
        module_path: source.module_path.clone(),
        vis: source.vis.clone(),
        generics: source.generics.clone(),
        source_name: source.name.clone(),
        target_type,
        fields,
    })
}

/// The source type spelled out with its generic parameters (`Node<T>`).
fn source_self_type(source: &SourceType) -> Type {
    let name = &source.name;
    let (_, ty_generics, _) = source.generics.split_for_impl();
    parse_quote!(#name #ty_generics)
}

/// Rewrite `Self` in a field type to the source type; inside the builder
/// `Self` would name the builder instead.
fn replace_self(ty: &Type, source_ty: &Type) -> Type {
    let mut ty = ty.clone();
    SelfReplacer { source_ty }.visit_type_mut(&mut ty);
    ty
}

struct SelfReplacer<'a> {
    source_ty: &'a Type,
}

impl VisitMut for SelfReplacer<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        visit_mut::visit_type_mut(self, ty);

        let Type::Path(type_path) = ty else {
            return;
        };
        if type_path.qself.is_some() || type_path.path.leading_colon.is_some() {
            return;
        }
        let mut segments = type_path.path.segments.iter();
        if !segments.next().is_some_and(|first| first.ident == "Self") {
            return;
        }

        let rest: Punctuated<PathSegment, Token![::]> = segments.cloned().collect();
        *ty = if rest.is_empty() {
            self.source_ty.clone()
        } else {
            Type::Path(TypePath {
                qself: Some(QSelf {
                    lt_token: Default::default(),
                    ty: Box::new(self.source_ty.clone()),
                    position: 0,
                    as_token: None,
                    gt_token: Default::default(),
                }),
                path: syn::Path {
                    leading_colon: Some(Default::default()),
                    segments: rest,
                },
            })
        };
    }
}

/// Parse `name` as a plain identifier (keywords are rejected).
fn parse_ident(name: &str) -> Option<Ident> {
    syn::parse_str::<Ident>(name).ok()
}
