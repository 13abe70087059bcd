pub mod users;
pub mod videos;

pub use users::UserQueryService;
pub use videos::VideoQueryService;
