use crate::SwaggerBuilder;
use crate::examples::mocks::{MockAdmin, MockUser};

#[derive(Debug, Clone, Default, PartialEq, Eq, SwaggerBuilder)]
#[swagger_builder(target = MockUser)]
#[swagger_builder(target = MockAdmin, builder_name = "AdminUserBuilder")]
pub struct MyUser {
    pub name: String,

    #[map_to("userAge")]
    pub user_age: i32,

    #[map_to("interests")]
    pub hobbies: Vec<String>,
}

/// Carries builder metadata but is not a struct, so no builder is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SwaggerBuilder)]
#[swagger_builder(target = MockUser)]
pub enum Membership {
    Free,
    Paid,
}

crate::include_builder!("examples.custom.MyUserBuilder");
crate::include_builder!("examples.custom.AdminUserBuilder");
