use swagger_builder::SwaggerBuilder;

mod models {
    pub struct Account;
    pub struct Admin;
}

#[derive(SwaggerBuilder)]
#[swagger_builders(
    builder(target = models::Account),
    builder(target = "models::Admin", builder_name = "AdminBuilder")
)]
pub struct Form {
    #[map_to(target_field_name = "displayName")]
    pub name: String,
    #[map_to = "level"]
    pub rank: u8,
}

fn main() {
    let form = Form {
        name: String::new(),
        rank: 1,
    };
    let _ = (form.name, form.rank, models::Account, models::Admin);
}
