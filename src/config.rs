use std::time::Duration;

// === Storage keys ===
pub const ACCOUNTS_KEY: &str = "accounts";
pub const POSTS_KEY: &str = "posts";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const LIKED_POSTS_KEY: &str = "likedPosts";

// === Content filter ===
pub const BANNED_KEYWORDS: &[&str] = &[
    "skibidi",
    "rizz",
    "gyat",
    "sigma",
    "ohio",
    "fanum tax",
    "griddy",
];

// === Signup defaults ===
pub const NEW_ACCOUNT_BIO: &str = "New user";

// === Notice targets ===
pub const LOGIN_ERROR_ID: &str = "loginError";
pub const SIGNUP_ERROR_ID: &str = "signupError";
pub const POST_WARNING_ID: &str = "atomizedWarning";
pub const COMMENT_WARNING_ID: &str = "commentAtomizedWarning";

fn millis_from_env(var: &str, default: u64) -> Duration {
    let millis = std::env::var(var)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default);
    Duration::from_millis(millis)
}

pub fn error_notice_duration() -> Duration {
    millis_from_env("FEEDSTATE_ERROR_NOTICE_MS", 5000)
}

pub fn warning_notice_duration() -> Duration {
    millis_from_env("FEEDSTATE_WARNING_NOTICE_MS", 3000)
}
