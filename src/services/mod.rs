//! Data-access methods on [`Database`](crate::Database).
//!
//! Every method borrows one pooled connection for its own duration and hands it
//! back on return, including the error path.

pub mod comments;
pub mod posts;
pub mod stats;
pub mod users;
