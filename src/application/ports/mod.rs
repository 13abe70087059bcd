pub mod media;
pub mod security;
pub mod time;
pub mod util;
