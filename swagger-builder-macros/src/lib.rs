use proc_macro::TokenStream;
use syn::meta::ParseNestedMeta;
use syn::{
    Attribute, Data, DeriveInput, Error, Field, Fields, Ident, LitStr, Result, Type, parse_macro_input,
    spanned::Spanned,
};

mod validate;

/// Declare a struct as the source of one or more generated builders.
///
/// The derive itself emits no code. It makes the metadata attributes legal
/// and rejects malformed ones at compile time; the builders are produced by
/// `swagger-builder-build` from a build script.
///
/// # Example
///
/// ```text
/// #[derive(SwaggerBuilder)]
/// #[swagger_builder(target = MockUser)]
/// #[swagger_builder(target = MockAdmin, builder_name = "AdminBuilder")]
/// pub struct MyUser {
///     name: String,
///     #[map_to("interests")]
///     hobbies: Vec<String>,
/// }
/// ```
///
/// On enums and other non-struct items the derive is accepted and ignored.
#[proc_macro_derive(SwaggerBuilder, attributes(swagger_builder, swagger_builders, map_to))]
pub fn derive_swagger_builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match validate::validate(&input) {
        Ok(_) => TokenStream::new(),
        Err(err) => err.to_compile_error().into(),
    }
}
