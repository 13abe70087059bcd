pub mod error;
pub mod postgres_user;
pub mod postgres_video;

pub use postgres_user::PostgresUserRepository;
pub use postgres_video::PostgresVideoRepository;
