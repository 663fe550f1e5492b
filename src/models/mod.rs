pub mod auth;
pub mod user;

pub use auth::{AuthSession, LoginRequest, LoginResponse};
pub use user::{ActivationResponse, SignUpRequest, SignUpResponse, User, UserPage};
