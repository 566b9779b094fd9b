//! The derive accepts every supported attribute form.
//!
//! Builders themselves come from the build script, so these cases only check
//! that annotated sources compile.

#[test]
fn derive_surface_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
