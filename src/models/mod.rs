pub mod comments;
pub mod posts;
pub mod stats;
pub mod users;
