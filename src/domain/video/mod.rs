pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewVideo, Video, VideoUpdate};
pub use repository::VideoRepository;
pub use value_objects::{VideoId, VideoSlug, VideoTitle};
