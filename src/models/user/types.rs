/// Internal user struct for authentication — includes password hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// New user data for creation (seed and tests).
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
}
