use tracing::{debug, info};

use crate::core::db::SessionBackend;
use crate::core::errors::{FeedError, ValidationFailure};
use crate::core::helpers::{next_max_id, next_sequential_id};
use crate::filter;
use crate::models::models::{Account, Comment, LikeOutcome, Post, PostId};
use crate::store::SessionStore;

fn require_user<B: SessionBackend>(store: &SessionStore<B>) -> Result<Account, FeedError> {
    store.current_user()?.ok_or(FeedError::Unauthenticated)
}

fn require_content(content: &str) -> Result<&str, FeedError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ValidationFailure::EmptyContent.into());
    }
    Ok(trimmed)
}

/// Publishes a post by the current user at the top of the feed.
pub fn create_post<B: SessionBackend>(
    store: &mut SessionStore<B>,
    content: &str,
) -> Result<Post, FeedError> {
    let user = require_user(store)?;
    let content = require_content(content)?;

    if filter::flags(content) {
        debug!(user_id = user.id, "post rejected by content filter");
        return Err(FeedError::ContentRejected);
    }

    let mut posts = store.posts()?;
    let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
    let post = Post {
        id: next_sequential_id(&ids),
        author_id: user.id,
        author_username: user.username.clone(),
        content: content.to_string(),
        image: None,
        likes: 0,
        comments: Vec::new(),
        created_at: store.now(),
    };

    posts.insert(0, post.clone()); // newest first
    store.set_posts(&posts)?;
    info!(post_id = post.id, user_id = user.id, "post created");

    Ok(post)
}

/// Flips the session's like on a post. A missing post is a no-op.
pub fn toggle_like<B: SessionBackend>(
    store: &mut SessionStore<B>,
    post_id: PostId,
) -> Result<Option<LikeOutcome>, FeedError> {
    let mut posts = store.posts()?;
    let post = match posts.iter_mut().find(|p| p.id == post_id) {
        Some(p) => p,
        None => {
            debug!(post_id, "like on missing post ignored");
            return Ok(None);
        }
    };

    let mut liked = store.liked_posts()?;
    let now_liked = if liked.remove(&post_id) {
        post.likes = post.likes.saturating_sub(1);
        false
    } else {
        post.likes = post
            .likes
            .checked_add(1)
            .ok_or_else(|| FeedError::Storage(format!("Like count overflow on post {}", post_id)))?;
        liked.insert(post_id);
        true
    };

    let outcome = LikeOutcome { post_id, liked: now_liked, likes: post.likes };

    store.set_liked_posts(&liked)?;
    store.set_posts(&posts)?;
    debug!(post_id, liked = now_liked, likes = outcome.likes, "like toggled");

    Ok(Some(outcome))
}

/// Appends a comment by the current user. A missing post is a no-op.
///
/// Comment ids are global: one more than the largest id on any post.
pub fn add_comment<B: SessionBackend>(
    store: &mut SessionStore<B>,
    post_id: PostId,
    content: &str,
) -> Result<Option<Comment>, FeedError> {
    let user = require_user(store)?;
    let content = require_content(content)?;

    if filter::flags(content) {
        debug!(user_id = user.id, post_id, "comment rejected by content filter");
        return Err(FeedError::ContentRejected);
    }

    let mut posts = store.posts()?;
    let comment_id = next_max_id(posts.iter().flat_map(|p| p.comments.iter().map(|c| c.id)));

    let post = match posts.iter_mut().find(|p| p.id == post_id) {
        Some(p) => p,
        None => {
            debug!(post_id, "comment on missing post ignored");
            return Ok(None);
        }
    };

    let comment = Comment {
        id: comment_id,
        author_id: user.id,
        author_username: user.username.clone(),
        content: content.to_string(),
        created_at: store.now(),
    };
    post.comments.push(comment.clone());

    store.set_posts(&posts)?;
    info!(post_id, comment_id, user_id = user.id, "comment added");

    Ok(Some(comment))
}

/// Posts written by `account`, in feed order.
pub fn posts_by(posts: &[Post], account: &Account) -> Vec<Post> {
    posts
        .iter()
        .filter(|p| p.author_id == account.id)
        .cloned()
        .collect()
}
