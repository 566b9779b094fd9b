use swagger_builder::SwaggerBuilder;

pub struct MockUser;

#[derive(SwaggerBuilder)]
#[swagger_builder(target = MockUser)]
pub struct MyUser {
    pub name: String,
    #[map_to("userAge")]
    pub user_age: i32,
}

fn main() {
    let user = MyUser {
        name: "Ada".to_string(),
        user_age: 36,
    };
    let _ = (user.name, user.user_age, MockUser);
}
