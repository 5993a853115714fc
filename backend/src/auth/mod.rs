//! Authentication and session management
//!
//! Signed session tokens carried in HTTP-only cookies, argon2 password
//! hashing, and the extractor that gates protected routes.

mod cookie;
mod middleware;
mod password;
mod token;

pub use cookie::{clear_session_cookie, session_cookie, SESSION_COOKIE};
pub use middleware::AuthUser;
pub use password::PasswordService;
pub use token::{SessionClaims, TokenError, TokenIssuer};
