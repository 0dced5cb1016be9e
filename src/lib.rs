//! Session-scoped social feed: a typed store over a key-value session
//! container, the account/post/comment operations that mutate it, and the
//! renderer that turns its contents back into HTML after every change.

pub mod auth;
pub mod config;
pub mod core;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod posts;
pub mod store;
pub mod templates;

pub use crate::core::db::{MemoryBackend, SessionBackend};
pub use crate::core::errors::{FeedError, ValidationFailure};
pub use crate::core::helpers::{Clock, ManualClock, SystemClock};
pub use crate::filter::ContentFilter;
pub use crate::handlers::{Notice, NoticeKind, Page, PageUpdate};
pub use crate::models::models::{Account, Comment, LikeOutcome, LikedSet, Post};
pub use crate::store::SessionStore;
