pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod rate_limit;
pub mod validate;

pub use extractor::CurrentUser;
pub use jwt::{Claims, JwtService};
