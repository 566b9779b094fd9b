//! Models shaped like swagger codegen output: a no-argument constructor and
//! one `setX` per property.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockUser {
    pub name: String,
    pub user_age: i32,
    pub interests: Vec<String>,
}

#[allow(non_snake_case)]
impl MockUser {
    pub fn setName(&mut self, name: String) {
        self.name = name;
    }

    pub fn setUserAge(&mut self, user_age: i32) {
        self.user_age = user_age;
    }

    pub fn setInterests(&mut self, interests: Vec<String>) {
        self.interests = interests;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockAdmin {
    pub display_name: String,
    pub age: Option<i32>,
    pub interests: Vec<String>,
}

#[allow(non_snake_case)]
impl MockAdmin {
    pub fn setName(&mut self, name: String) {
        self.display_name = name;
    }

    pub fn setUserAge(&mut self, user_age: i32) {
        self.age = Some(user_age);
    }

    pub fn setInterests(&mut self, interests: Vec<String>) {
        self.interests = interests;
    }
}
