use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use html_escape::encode_text;
use regex::{Captures, Regex};
use rust_embed::RustEmbed;

use crate::core::helpers::initial_of;
use crate::models::models::{Account, Comment, CommentId, LikedSet, Post, PostId};

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

/// "Nm ago" under an hour, "Nh ago" under a day, otherwise "Nd ago".
/// Timestamps in the future count as zero elapsed.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).num_milliseconds().max(0);
    let minutes = elapsed / 60_000;
    let hours = elapsed / 3_600_000;

    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentView {
    pub id: CommentId,
    pub avatar: String,
    pub username: String,
    pub time: String,
    pub content: String,
}

impl CommentView {
    pub fn build(comment: &Comment, now: DateTime<Utc>) -> Self {
        Self {
            id: comment.id,
            avatar: initial_of(&comment.author_username),
            username: comment.author_username.clone(),
            time: format_relative_time(comment.created_at, now),
            content: comment.content.clone(),
        }
    }
}

/// Display state of one post card.
#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub id: PostId,
    pub avatar: String,
    pub username: String,
    pub time: String,
    pub content: String,
    pub liked: bool,
    pub likes: u32,
    pub comment_count: usize,
    /// Oldest first.
    pub comments: Vec<CommentView>,
    pub expanded: bool,
}

impl PostView {
    pub fn build(post: &Post, liked: &LikedSet, expanded: Option<PostId>, now: DateTime<Utc>) -> Self {
        Self {
            id: post.id,
            avatar: initial_of(&post.author_username),
            username: post.author_username.clone(),
            time: format_relative_time(post.created_at, now),
            content: post.content.clone(),
            liked: liked.contains(&post.id),
            likes: post.likes,
            comment_count: post.comments.len(),
            comments: post.comments.iter().map(|c| CommentView::build(c, now)).collect(),
            expanded: expanded == Some(post.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub avatar: String,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub followers: u32,
    pub following: u32,
    pub post_count: usize,
    pub posts: Vec<PostView>,
}

impl ProfileView {
    /// `posts` should already be limited to the account's own posts.
    pub fn build(
        account: &Account,
        posts: &[Post],
        liked: &LikedSet,
        expanded: Option<PostId>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            avatar: initial_of(&account.username),
            username: account.username.clone(),
            email: account.email.clone(),
            bio: account.bio.clone(),
            followers: account.followers,
            following: account.following,
            post_count: posts.len(),
            posts: posts.iter().map(|p| PostView::build(p, liked, expanded, now)).collect(),
        }
    }
}

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{\{([a-z_]+)\}\}").expect("Regex should compile"))
}

fn load(name: &str) -> anyhow::Result<String> {
    let file = Templates::get(name)
        .ok_or_else(|| anyhow::anyhow!("Template {} not found", name))?;
    Ok(String::from_utf8(file.data.to_vec())?)
}

// Single pass, so substituted text is never scanned for placeholders again.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.clone())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .to_string()
}

pub fn render_comment(view: &CommentView) -> anyhow::Result<String> {
    let template = load("comment.html")?;
    Ok(fill(
        &template,
        &[
            ("comment_id", view.id.to_string()),
            ("avatar", encode_text(&view.avatar).to_string()),
            ("username", encode_text(&view.username).to_string()),
            ("time", view.time.clone()),
            ("content", encode_text(&view.content).to_string()),
        ],
    ))
}

pub fn render_comments(comments: &[CommentView]) -> anyhow::Result<String> {
    if comments.is_empty() {
        return load("no_comments.html");
    }
    let mut html = String::new();
    for comment in comments {
        html.push_str(&render_comment(comment)?);
    }
    Ok(html)
}

pub fn render_post(view: &PostView) -> anyhow::Result<String> {
    let template = load("post_card.html")?;
    let (liked_class, heart_fill) = if view.liked {
        (" liked", "currentColor")
    } else {
        ("", "none")
    };
    let panel_display = if view.expanded { "block" } else { "none" };

    Ok(fill(
        &template,
        &[
            ("post_id", view.id.to_string()),
            ("avatar", encode_text(&view.avatar).to_string()),
            ("username", encode_text(&view.username).to_string()),
            ("time", view.time.clone()),
            ("content", encode_text(&view.content).to_string()),
            ("liked_class", liked_class.to_string()),
            ("heart_fill", heart_fill.to_string()),
            ("likes", view.likes.to_string()),
            ("comment_count", view.comment_count.to_string()),
            ("panel_display", panel_display.to_string()),
            ("comments", render_comments(&view.comments)?),
        ],
    ))
}

/// Full replacement markup for the feed container.
pub fn render_feed(
    posts: &[Post],
    liked: &LikedSet,
    expanded: Option<PostId>,
    now: DateTime<Utc>,
) -> anyhow::Result<String> {
    let mut html = String::new();
    for post in posts {
        html.push_str(&render_post(&PostView::build(post, liked, expanded, now))?);
    }
    Ok(html)
}

pub fn render_profile(view: &ProfileView) -> anyhow::Result<String> {
    let header = load("profile_header.html")?;
    let mut html = fill(
        &header,
        &[
            ("avatar", encode_text(&view.avatar).to_string()),
            ("username", encode_text(&view.username).to_string()),
            ("email", encode_text(&view.email).to_string()),
            ("bio", encode_text(&view.bio).to_string()),
            ("post_count", view.post_count.to_string()),
            ("followers", view.followers.to_string()),
            ("following", view.following.to_string()),
        ],
    );

    html.push_str("<div class=\"profile-posts\" id=\"profilePosts\">\n");
    if view.posts.is_empty() {
        html.push_str(&load("no_posts.html")?);
    } else {
        for post in &view.posts {
            html.push_str(&render_post(post)?);
        }
    }
    html.push_str("</div>\n");

    Ok(html)
}
