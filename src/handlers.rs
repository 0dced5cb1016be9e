use std::time::Duration;

use tracing::debug;

use crate::auth;
use crate::config::*;
use crate::core::db::SessionBackend;
use crate::core::errors::FeedError;
use crate::core::helpers::initial_of;
use crate::models::models::PostId;
use crate::posts;
use crate::store::SessionStore;
use crate::templates::{render_feed, render_profile, ProfileView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    Feed,
    Profile,
}

impl Page {
    /// Maps a document file name to its page. Unknown names are `None`; load
    /// those through `bootstrap_filename` so the session guard still applies.
    pub fn from_filename(name: &str) -> Option<Page> {
        let file = name.rsplit('/').next().unwrap_or_default();
        match file {
            "" | "index.html" => Some(Page::Login),
            "signup.html" => Some(Page::Signup),
            "feed.html" => Some(Page::Feed),
            "profile.html" => Some(Page::Profile),
            _ => None,
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Page::Login | Page::Signup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Warning,
}

/// Transient banner the front end shows on `element_id` and hides after
/// `dismiss_after`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub element_id: &'static str,
    pub message: String,
    pub dismiss_after: Duration,
}

impl Notice {
    fn error(element_id: &'static str, err: &FeedError) -> Self {
        Self {
            kind: NoticeKind::Error,
            element_id,
            message: err.to_string(),
            dismiss_after: error_notice_duration(),
        }
    }

    fn warning(element_id: &'static str, err: &FeedError) -> Self {
        Self {
            kind: NoticeKind::Warning,
            element_id,
            message: err.to_string(),
            dismiss_after: warning_notice_duration(),
        }
    }
}

/// What the front end should do after an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageUpdate {
    pub redirect: Option<Page>,
    /// Replacement children for the page's main container.
    pub html: Option<String>,
    /// Initial shown in the post composer.
    pub composer_avatar: Option<String>,
    pub notice: Option<Notice>,
    pub clear_input: bool,
}

impl PageUpdate {
    fn redirect(page: Page) -> Self {
        Self { redirect: Some(page), ..Default::default() }
    }
}

// Domain failures become notices; only storage faults propagate.
fn storage_fault(err: FeedError) -> anyhow::Error {
    anyhow::Error::new(err)
}

fn render_page<B: SessionBackend>(
    store: &SessionStore<B>,
    page: Page,
    expanded: Option<PostId>,
) -> anyhow::Result<Option<String>> {
    let now = store.now();
    match page {
        Page::Feed => {
            let posts = store.posts()?;
            let liked = store.liked_posts()?;
            Ok(Some(render_feed(&posts, &liked, expanded, now)?))
        }
        Page::Profile => {
            let user = match store.current_user()? {
                Some(u) => u,
                None => return Ok(None),
            };
            let own_posts = posts::posts_by(&store.posts()?, &user);
            let liked = store.liked_posts()?;
            let view = ProfileView::build(&user, &own_posts, &liked, expanded, now);
            Ok(Some(render_profile(&view)?))
        }
        Page::Login | Page::Signup => Ok(None),
    }
}

/// Page-load entry point: seeds storage, guards protected pages and renders.
pub fn bootstrap<B: SessionBackend>(store: &mut SessionStore<B>, page: Page) -> anyhow::Result<PageUpdate> {
    store.initialize()?;

    let user = store.current_user()?;
    if !page.is_public() && user.is_none() {
        debug!(?page, "protected page without session, redirecting");
        return Ok(PageUpdate::redirect(Page::Login));
    }

    let composer_avatar = match page {
        Page::Feed => user.as_ref().map(|u| initial_of(&u.username)),
        _ => None,
    };

    Ok(PageUpdate {
        html: render_page(store, page, None)?,
        composer_avatar,
        ..Default::default()
    })
}

/// Page-load entry point by document file name. Files outside the known pages
/// are protected: without a session they redirect to Login, otherwise there is
/// nothing to render.
pub fn bootstrap_filename<B: SessionBackend>(
    store: &mut SessionStore<B>,
    filename: &str,
) -> anyhow::Result<PageUpdate> {
    if let Some(page) = Page::from_filename(filename) {
        return bootstrap(store, page);
    }

    store.initialize()?;
    if !store.is_logged_in()? {
        debug!(filename, "unknown page without session, redirecting");
        return Ok(PageUpdate::redirect(Page::Login));
    }
    Ok(PageUpdate::default())
}

pub fn handle_login<B: SessionBackend>(
    store: &mut SessionStore<B>,
    email: &str,
    password: &str,
) -> anyhow::Result<PageUpdate> {
    match auth::login(store, email, password) {
        Ok(_) => Ok(PageUpdate::redirect(Page::Feed)),
        Err(err @ FeedError::Storage(_)) => Err(storage_fault(err)),
        Err(err) => Ok(PageUpdate {
            notice: Some(Notice::error(LOGIN_ERROR_ID, &err)),
            ..Default::default()
        }),
    }
}

pub fn handle_signup<B: SessionBackend>(
    store: &mut SessionStore<B>,
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> anyhow::Result<PageUpdate> {
    match auth::signup(store, username, email, password, confirm_password) {
        Ok(_) => Ok(PageUpdate::redirect(Page::Feed)),
        Err(err @ FeedError::Storage(_)) => Err(storage_fault(err)),
        Err(err) => Ok(PageUpdate {
            notice: Some(Notice::error(SIGNUP_ERROR_ID, &err)),
            ..Default::default()
        }),
    }
}

pub fn handle_logout<B: SessionBackend>(store: &mut SessionStore<B>) -> anyhow::Result<PageUpdate> {
    auth::logout(store).map_err(storage_fault)?;
    Ok(PageUpdate::redirect(Page::Login))
}

pub fn handle_create_post<B: SessionBackend>(
    store: &mut SessionStore<B>,
    content: &str,
) -> anyhow::Result<PageUpdate> {
    match posts::create_post(store, content) {
        Ok(_) => Ok(PageUpdate {
            html: render_page(store, Page::Feed, None)?,
            clear_input: true,
            ..Default::default()
        }),
        Err(err @ FeedError::ContentRejected) => Ok(PageUpdate {
            notice: Some(Notice::warning(POST_WARNING_ID, &err)),
            clear_input: true,
            ..Default::default()
        }),
        Err(err @ FeedError::Storage(_)) => Err(storage_fault(err)),
        // Empty input or no session: nothing happens
        Err(_) => Ok(PageUpdate::default()),
    }
}

pub fn handle_like<B: SessionBackend>(
    store: &mut SessionStore<B>,
    page: Page,
    post_id: PostId,
) -> anyhow::Result<PageUpdate> {
    if posts::toggle_like(store, post_id).map_err(storage_fault)?.is_none() {
        return Ok(PageUpdate::default());
    }
    Ok(PageUpdate {
        html: render_page(store, page, None)?,
        ..Default::default()
    })
}

/// Re-renders with the commented post's panel left open.
pub fn handle_add_comment<B: SessionBackend>(
    store: &mut SessionStore<B>,
    page: Page,
    post_id: PostId,
    content: &str,
) -> anyhow::Result<PageUpdate> {
    match posts::add_comment(store, post_id, content) {
        Ok(Some(_)) => Ok(PageUpdate {
            html: render_page(store, page, Some(post_id))?,
            clear_input: true,
            ..Default::default()
        }),
        Ok(None) => Ok(PageUpdate::default()),
        Err(err @ FeedError::ContentRejected) => Ok(PageUpdate {
            notice: Some(Notice::warning(COMMENT_WARNING_ID, &err)),
            clear_input: true,
            ..Default::default()
        }),
        Err(err @ FeedError::Storage(_)) => Err(storage_fault(err)),
        Err(_) => Ok(PageUpdate::default()),
    }
}
