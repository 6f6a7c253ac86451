/// Fields the signed-in user may edit on their own profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub display_name: String,
    pub email: String,
    pub phone: String,
}

impl ProfileFields {
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
