use swagger_builder::examples::{AdminUserBuilder, MockAdmin, MockUser, MyUser, MyUserBuilder};

#[test]
fn builder_sets_every_renamed_property() {
    let user = MyUserBuilder::new()
        .name("Ada".to_string())
        .user_age(36)
        .hobbies(vec!["chess".to_string(), "rowing".to_string()])
        .build();

    assert_eq!(
        user,
        MockUser {
            name: "Ada".to_string(),
            user_age: 36,
            interests: vec!["chess".to_string(), "rowing".to_string()],
        }
    );
}

#[test]
fn unset_builder_fields_fall_back_to_defaults() {
    let user = MyUserBuilder::new().name("Grace".to_string()).build();

    assert_eq!(user.name, "Grace");
    assert_eq!(user.user_age, 0);
    assert!(user.interests.is_empty());
    assert_eq!(MyUserBuilder::default().build(), MockUser::default());
}

#[test]
fn second_request_targets_its_own_type() {
    let admin: MockAdmin = AdminUserBuilder::new()
        .name("Linus".to_string())
        .user_age(54)
        .hobbies(vec!["diving".to_string()])
        .build();

    assert_eq!(admin.display_name, "Linus");
    assert_eq!(admin.age, Some(54));
    assert_eq!(admin.interests, vec!["diving".to_string()]);
}

#[test]
fn source_type_is_left_untouched() {
    let source = MyUser {
        name: "Ada".to_string(),
        user_age: 36,
        hobbies: Vec::new(),
    };
    let copy = source.clone();

    let user = MyUserBuilder::new()
        .name(source.name.clone())
        .user_age(source.user_age)
        .hobbies(source.hobbies.clone())
        .build();

    assert_eq!(source, copy);
    assert_eq!(user.name, source.name);
}
