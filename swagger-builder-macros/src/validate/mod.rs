#[allow(unused_imports)]
use super::*;

mod field;
mod request;

use field::validate_field;
use request::{validate_request, validate_request_list};

/// Check the builder metadata of an item deriving `SwaggerBuilder`.
///
/// Items builders are never generated for (enums, unions, tuple and unit
/// structs) pass without inspection.
pub(crate) fn validate(input: &DeriveInput) -> Result<()> {
    let Data::Struct(data) = &input.data else {
        return Ok(());
    };
    let Fields::Named(named) = &data.fields else {
        return Ok(());
    };

    let mut errors = Errors::default();
    let mut requests = 0;

    for attr in &input.attrs {
        if attr.path().is_ident("swagger_builder") {
            if errors.check(validate_request(attr)).is_some() {
                requests += 1;
            }
        } else if attr.path().is_ident("swagger_builders")
            && let Some(count) = errors.check(validate_request_list(attr))
        {
            requests += count;
        }
    }

    if requests == 0 && errors.is_empty() {
        return Err(Error::new(
            input.ident.span(),
            "SwaggerBuilder requires at least one #[swagger_builder(target = ...)]",
        ));
    }

    for field in &named.named {
        errors.check(validate_field(field));
    }

    errors.finish()
}

/// Folds every problem into one error so all of them are reported at once.
#[derive(Default)]
struct Errors(Option<Error>);

impl Errors {
    fn check<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                match &mut self.0 {
                    Some(existing) => existing.combine(err),
                    None => self.0 = Some(err),
                }
                None
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    fn finish(self) -> Result<()> {
        self.0.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(code: &str) -> Result<()> {
        let input: DeriveInput = syn::parse_str(code).unwrap();
        validate(&input)
    }

    #[test]
    fn test_single_and_list_requests() {
        check(
            r#"
            #[derive(SwaggerBuilder)]
            #[swagger_builder(target = MockUser)]
            #[swagger_builders(builder(target = a::MockAdmin, builder_name = "AdminBuilder"))]
            struct MyUser {
                name: String,
                #[map_to("interests")]
                hobbies: Vec<String>,
            }
            "#,
        )
        .unwrap();
    }

    #[test]
    fn test_non_structs_are_ignored() {
        check("#[swagger_builder(target = MockUser)] enum Status { A, B }").unwrap();
        check("#[swagger_builder(target = 1)] struct Pair(u8, u8);").unwrap();
    }

    #[test]
    fn test_struct_without_request_is_rejected() {
        assert!(check("struct Bare { a: u8 }").is_err());
    }

    #[test]
    fn test_errors_are_combined() {
        let err = check(
            r#"
            #[swagger_builder(builder_name = "X")]
            struct Broken {
                #[map_to(1)]
                a: u8,
                build: u8,
            }
            "#,
        )
        .unwrap_err();
        assert_eq!(err.into_iter().count(), 3);
    }
}
