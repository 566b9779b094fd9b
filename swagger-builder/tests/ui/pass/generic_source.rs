use swagger_builder::SwaggerBuilder;

pub struct Page;

#[derive(SwaggerBuilder)]
#[swagger_builder(target = Page, builder_name = "PageBuilder")]
pub struct PageForm<T: Clone> {
    pub items: Vec<T>,
    #[map_to("")]
    pub total: usize,
}

fn main() {
    let form = PageForm::<u8> {
        items: vec![1],
        total: 1,
    };
    let _ = (form.items, form.total, Page);
}
