use std::fs;
use std::path::Path;

use swagger_builder_build::{BuilderGenerator, CollectingDiagnostics, DirectorySink, MemorySink, SetterStyle};

const MY_USER: &str = r#"
use crate::mocks::MockUser;

#[derive(Debug, Default, SwaggerBuilder)]
#[swagger_builder(target = MockUser)]
pub struct MyUser {
    name: String,
    #[map_to("userAge")]
    user_age: i32,
    #[map_to("interests")]
    hobbies: Vec<String>,
}
"#;

fn write_source(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn run_in_memory(root: &Path) -> (swagger_builder_build::GenerationReport, MemorySink, CollectingDiagnostics) {
    let mut sink = MemorySink::new();
    let mut diagnostics = CollectingDiagnostics::new();
    let report = BuilderGenerator::new()
        .scan_path(root)
        .run_with(&mut sink, &mut diagnostics)
        .unwrap();
    (report, sink, diagnostics)
}

#[test]
fn default_builder_name_and_renamed_setters() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "custom/my_user.rs", MY_USER);

    let (report, sink, diagnostics) = run_in_memory(dir.path());

    assert_eq!(report.generated, vec!["crate::custom::my_user::MyUserBuilder"]);
    assert_eq!(diagnostics.errors().count(), 0);

    let code = sink.get("crate::custom::my_user::MyUserBuilder").unwrap();
    assert!(code.contains("pub struct MyUserBuilder {"));
    assert!(code.contains("pub fn build(self) -> MockUser {"));
    assert!(code.contains("target.setName(self.name);"));
    assert!(code.contains("target.setUserAge(self.user_age);"));
    assert!(code.contains("target.setInterests(self.hobbies);"));
}

#[test]
fn explicit_builder_name_keeps_the_same_shape() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "custom.rs", MY_USER);
    write_source(
        dir.path(),
        "renamed.rs",
        &MY_USER.replace(
            "#[swagger_builder(target = MockUser)]",
            "#[swagger_builder(target = MockUser, builder_name = \"CustomUserBuilder\")]",
        ),
    );

    let (report, sink, _) = run_in_memory(dir.path());
    assert_eq!(report.generated.len(), 2);

    let default = sink.get("crate::custom::MyUserBuilder").unwrap();
    let custom = sink.get("crate::renamed::CustomUserBuilder").unwrap();

    assert!(custom.contains("pub struct CustomUserBuilder {"));
    let normalize = |code: &str, name: &str| {
        code.lines()
            .skip(1)
            .collect::<Vec<_>>()
            .join("\n")
            .replace(name, "BUILDER")
    };
    assert_eq!(normalize(default, "MyUserBuilder"), normalize(custom, "CustomUserBuilder"));
}

#[test]
fn two_requests_produce_two_independent_builders() {
    let dir = tempfile::tempdir().unwrap();
    write_source(
        dir.path(),
        "account.rs",
        r#"
        #[swagger_builder(target = MockUser)]
        #[swagger_builder(target = MockAdmin, builder_name = "AdminBuilder")]
        pub struct Account {
            name: String,
            #[map_to("level")]
            rank: u8,
        }
        "#,
    );

    let (report, sink, _) = run_in_memory(dir.path());
    assert_eq!(
        report.generated,
        vec!["crate::account::AccountBuilder", "crate::account::AdminBuilder"]
    );

    let user = sink.get("crate::account::AccountBuilder").unwrap();
    let admin = sink.get("crate::account::AdminBuilder").unwrap();
    assert!(user.contains("-> MockUser"));
    assert!(!user.contains("MockAdmin"));
    assert!(admin.contains("-> MockAdmin"));
    assert!(!admin.contains("MockUser"));
    assert!(admin.contains("target.setLevel(self.rank);"));
}

#[test]
fn non_struct_declarations_produce_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_source(
        dir.path(),
        "status.rs",
        r#"
        #[derive(SwaggerBuilder)]
        #[swagger_builder(target = MockStatus)]
        pub enum Status {
            Active,
            Disabled,
        }
        "#,
    );

    let (report, sink, diagnostics) = run_in_memory(dir.path());
    assert_eq!(report.total(), 0);
    assert!(sink.is_empty());
    assert_eq!(diagnostics.errors().count(), 0);
}

#[test]
fn regeneration_is_byte_identical() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_source(src.path(), "custom.rs", MY_USER);

    let run = || {
        let mut sink = DirectorySink::new(out.path());
        BuilderGenerator::new()
            .scan_path(src.path())
            .run_with(&mut sink, &mut CollectingDiagnostics::new())
            .unwrap();
        fs::read(out.path().join("custom.MyUserBuilder.rs")).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn failed_request_does_not_block_siblings() {
    let dir = tempfile::tempdir().unwrap();
    write_source(
        dir.path(),
        "a_broken.rs",
        r#"
        #[swagger_builder(target = 42)]
        pub struct Broken { id: u64 }
        "#,
    );
    write_source(dir.path(), "b_custom.rs", MY_USER);

    let (report, sink, diagnostics) = run_in_memory(dir.path());
    assert_eq!(report.generated, vec!["crate::b_custom::MyUserBuilder"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(sink.len(), 1);

    let errors: Vec<&str> = diagnostics.errors().collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Broken"));
}

#[test]
fn snake_setter_style_is_configurable() {
    let dir = tempfile::tempdir().unwrap();
    write_source(
        dir.path(),
        "form.rs",
        r#"
        #[swagger_builder(target = Account)]
        pub struct Form {
            user_name: String,
        }
        "#,
    );

    let mut sink = MemorySink::new();
    BuilderGenerator::new()
        .scan_path(dir.path())
        .setter_style(SetterStyle::Snake)
        .run_with(&mut sink, &mut CollectingDiagnostics::new())
        .unwrap();

    assert!(
        sink.get("crate::form::FormBuilder")
            .unwrap()
            .contains("target.set_user_name(self.user_name);")
    );
}
