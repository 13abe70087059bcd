pub mod auth;
pub mod users;
pub mod videos;

pub use auth::{AuthTokenDto, AuthenticatedUser, RefreshClaims};
pub use users::UserDto;
pub use videos::VideoDto;
