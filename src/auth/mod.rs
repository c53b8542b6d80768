//! Authentication and authorization

pub mod jwt;
pub mod middleware;
pub mod password;
pub mod policy;

pub use jwt::{Claims, TokenService};
pub use middleware::{require_auth, AuthContext};
pub use password::{hash_password, verify_password};
pub use policy::{allowed, allowed_on_owned, Action};
