use swagger_builder::SwaggerBuilder;

pub struct MockStatus;

#[derive(SwaggerBuilder)]
#[swagger_builder(target = MockStatus)]
pub enum Status {
    Active,
    Disabled,
}

fn main() {
    let _ = (Status::Active, Status::Disabled, MockStatus);
}
