use chrono::{DateTime, Duration, TimeZone, Utc};
use feedstate::core::seed::{default_accounts, default_posts};
use feedstate::templates::{
    format_relative_time, render_comments, render_feed, render_post, render_profile, PostView, ProfileView,
};
use feedstate::{ContentFilter, LikedSet};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

#[test]
fn test_relative_time_buckets() {
    let cases = [
        (Duration::zero(), "0m ago"),
        (Duration::seconds(59), "0m ago"),
        (Duration::minutes(59), "59m ago"),
        (Duration::minutes(60), "1h ago"),
        (Duration::minutes(23 * 60 + 59), "23h ago"),
        (Duration::hours(24), "1d ago"),
        (Duration::hours(49), "2d ago"),
        (Duration::days(400), "400d ago"),
    ];
    for (elapsed, expected) in cases {
        assert_eq!(format_relative_time(now() - elapsed, now()), expected);
    }
}

#[test]
fn test_relative_time_in_future_reads_as_now() {
    assert_eq!(format_relative_time(now() + Duration::minutes(3), now()), "0m ago");
}

#[test]
fn test_post_view_reflects_state() {
    let posts = default_posts(now());
    let liked: LikedSet = [1].into_iter().collect();

    let view = PostView::build(&posts[0], &liked, None, now());
    assert_eq!(view.avatar, "J");
    assert_eq!(view.username, "john_doe");
    assert_eq!(view.time, "1h ago");
    assert!(view.liked);
    assert_eq!(view.likes, 45);
    assert_eq!(view.comment_count, 1);
    assert_eq!(view.comments[0].username, "jane_smith");
    assert_eq!(view.comments[0].time, "50m ago");
    assert!(!view.expanded);

    let other = PostView::build(&posts[1], &liked, Some(2), now());
    assert!(!other.liked);
    assert!(other.expanded);
    assert_eq!(other.time, "2h ago");
}

#[test]
fn test_render_feed_one_card_per_post_in_order() {
    let posts = default_posts(now());
    let html = render_feed(&posts, &LikedSet::new(), None, now()).unwrap();

    assert_eq!(html.matches("class=\"post-card\"").count(), 2);
    let first = html.find("id=\"post-1\"").unwrap();
    let second = html.find("id=\"post-2\"").unwrap();
    assert!(first < second);
    assert!(html.contains("No comments yet. Be the first to comment!"));
    assert!(html.contains("Which book was it? I love philosophy!"));
    assert!(!html.contains("{{"));
}

#[test]
fn test_render_liked_state_and_panel() {
    let posts = default_posts(now());
    let liked: LikedSet = [2].into_iter().collect();

    let liked_html = render_post(&PostView::build(&posts[1], &liked, Some(2), now())).unwrap();
    assert!(liked_html.contains("action-btn liked"));
    assert!(liked_html.contains("fill=\"currentColor\""));
    assert!(liked_html.contains("id=\"comments-2\" style=\"display: block;\""));

    let plain_html = render_post(&PostView::build(&posts[0], &liked, Some(2), now())).unwrap();
    assert!(!plain_html.contains("action-btn liked"));
    assert!(plain_html.contains("id=\"comments-1\" style=\"display: none;\""));
    assert!(plain_html.contains("<span class=\"like-count\">45</span>"));
    assert!(plain_html.contains("<span class=\"comment-count\">1</span>"));
}

#[test]
fn test_render_escapes_user_text() {
    let mut posts = default_posts(now());
    posts[0].content = "<script>alert(1)</script>".to_string();
    posts[0].comments[0].content = "<b>bold</b> & more".to_string();

    let html = render_feed(&posts[..1], &LikedSet::new(), None, now()).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; more"));
}

#[test]
fn test_placeholders_in_content_are_left_alone() {
    let mut posts = default_posts(now());
    posts[0].content = "{{likes}} and {{post_id}}".to_string();

    let html = render_feed(&posts[..1], &LikedSet::new(), None, now()).unwrap();
    assert!(html.contains("<div class=\"post-content\">{{likes}} and {{post_id}}</div>"));
}

#[test]
fn test_render_comments_in_insertion_order() {
    let mut posts = default_posts(now());
    let mut later = posts[0].comments[0].clone();
    later.id = 2;
    later.content = "second".to_string();
    posts[0].comments.push(later);

    let view = PostView::build(&posts[0], &LikedSet::new(), None, now());
    let html = render_comments(&view.comments).unwrap();
    let first = html.find("Which book").unwrap();
    let second = html.find("second").unwrap();
    assert!(first < second);
}

#[test]
fn test_render_profile_header_and_posts() {
    let accounts = default_accounts();
    let posts = default_posts(now());
    let own: Vec<_> = posts.iter().filter(|p| p.author_id == 2).cloned().collect();

    let view = ProfileView::build(&accounts[1], &own, &LikedSet::new(), None, now());
    assert_eq!(view.post_count, 1);

    let html = render_profile(&view).unwrap();
    assert!(html.contains("<h2 id=\"profileUsername\">jane_smith</h2>"));
    assert!(html.contains("jane@example.com"));
    assert!(html.contains("Tech enthusiast | Coffee lover"));
    assert!(html.contains("<strong id=\"profileFollowers\">567</strong>"));
    assert!(html.contains("id=\"post-2\""));
    assert!(!html.contains("id=\"post-1\""));
}

#[test]
fn test_render_profile_without_posts() {
    let accounts = default_accounts();
    let view = ProfileView::build(&accounts[0], &[], &LikedSet::new(), None, now());

    let html = render_profile(&view).unwrap();
    assert!(html.contains("No posts yet. Start sharing!"));
    assert!(html.contains("<strong id=\"profilePostCount\">0</strong>"));
}

#[test]
fn test_content_filter_matches_anywhere_ignoring_case() {
    assert!(feedstate::filter::flags("that's so skibidi"));
    assert!(feedstate::filter::flags("GYAT"));
    assert!(feedstate::filter::flags("Fanum Tax season"));
    assert!(feedstate::filter::flags("cohio"));
    assert!(!feedstate::filter::flags("fanum  tax"));
    assert!(!feedstate::filter::flags("Beautiful sunset today"));
    assert!(!feedstate::filter::flags(""));
}

#[test]
fn test_content_filter_only_lowercases() {
    // U+017F folds to "s" but does not lowercase to it
    assert!(!feedstate::filter::flags("ſigma"));
    assert!(!feedstate::filter::flags("ſkibidi"));
    assert!(feedstate::filter::flags("SIGMA"));
}

#[test]
fn test_custom_content_filter() {
    let filter = ContentFilter::new(&["Spoiler", "a.b"]).unwrap();
    assert!(filter.flags("no SPOILERS please"));
    assert!(filter.flags("see a.b"));
    assert!(!filter.flags("see axb"));

    let empty = ContentFilter::new::<&str>(&[]).unwrap();
    assert!(!empty.flags("skibidi"));
}
