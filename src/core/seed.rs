use chrono::{DateTime, Duration, Utc};

use crate::models::models::{Account, Comment, Post};

pub fn default_accounts() -> Vec<Account> {
    vec![
        Account {
            id: 1,
            username: "john_doe".to_string(),
            email: "john@example.com".to_string(),
            password: "password123".to_string(),
            bio: "Quality content creator".to_string(),
            followers: 234,
            following: 189,
        },
        Account {
            id: 2,
            username: "jane_smith".to_string(),
            email: "jane@example.com".to_string(),
            password: "pass456".to_string(),
            bio: "Tech enthusiast | Coffee lover".to_string(),
            followers: 567,
            following: 234,
        },
    ]
}

/// Seed posts, newest first, dated relative to `now`.
pub fn default_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: 1,
            author_id: 1,
            author_username: "john_doe".to_string(),
            content: "Just finished reading a great book on philosophy. Highly recommend!".to_string(),
            image: None,
            likes: 45,
            comments: vec![Comment {
                id: 1,
                author_id: 2,
                author_username: "jane_smith".to_string(),
                content: "Which book was it? I love philosophy!".to_string(),
                created_at: now - Duration::minutes(50),
            }],
            created_at: now - Duration::hours(1),
        },
        Post {
            id: 2,
            author_id: 2,
            author_username: "jane_smith".to_string(),
            content: "Beautiful sunset today. Nature is amazing! 🌅".to_string(),
            image: Some("sunset-beach.jpg".to_string()),
            likes: 89,
            comments: Vec::new(),
            created_at: now - Duration::hours(2),
        },
    ]
}
