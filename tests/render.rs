use github_star_button::models::{ButtonSnapshot, Variant};
use github_star_button::render::{escape_html, merge_classes, render_button};
use github_star_button::types::RepositoryIdentity;

fn snapshot(is_loading: bool, display_count: u64, show_count: bool) -> ButtonSnapshot {
    ButtonSnapshot {
        repository: RepositoryIdentity::new("octocat", "Hello-World").unwrap(),
        star_count: display_count,
        display_count,
        is_loading,
        is_animating: false,
        show_count,
        variant: Variant::Default,
    }
}

#[test]
fn test_link_attributes() {
    let html = render_button(&snapshot(false, 2345, true), None);

    assert!(html.starts_with(r#"<a href="https://github.com/octocat/Hello-World""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.ends_with("</a>"));
    assert_eq!(html.matches("<a ").count(), 1);
}

#[test]
fn test_loading_shows_spinner_and_star() {
    let html = render_button(&snapshot(true, 0, true), None);

    assert!(html.contains(r#"data-state="loading""#));
    assert!(html.contains(r#"data-glyph="spinner""#));
    assert!(html.contains(r#"data-glyph="star""#));
    assert!(!html.contains(r#"data-role="count""#));
}

#[test]
fn test_loaded_shows_formatted_count() {
    let html = render_button(&snapshot(false, 2345, true), None);

    assert!(html.contains(r#"data-state="loaded""#));
    assert!(html.contains(r#"<span class="font-semibold text-white" data-role="count">2.3k</span>"#));
    assert!(html.contains(r#"data-glyph="star""#));
    assert!(!html.contains(r#"data-glyph="spinner""#));
}

#[test]
fn test_loaded_zero_still_shows_count() {
    let html = render_button(&snapshot(false, 0, true), None);
    assert!(html.contains(r#"data-role="count">0</span>"#));
}

#[test]
fn test_hidden_count_in_both_states() {
    for loading in [true, false] {
        let html = render_button(&snapshot(loading, 2345, false), None);

        assert!(html.contains(r#"href="https://github.com/octocat/Hello-World""#));
        assert!(html.contains(r#"data-glyph="logo""#));
        assert!(!html.contains(r#"data-role="count""#));
        assert!(!html.contains(r#"data-glyph="star""#));
        assert!(!html.contains(r#"data-glyph="spinner""#));
        assert!(!html.contains("2.3k"));
    }
}

#[test]
fn test_variant_classes() {
    let mut minimal = snapshot(false, 5, true);
    minimal.variant = Variant::Minimal;
    let mut outline = snapshot(false, 5, true);
    outline.variant = Variant::Outline;

    let default_html = render_button(&snapshot(false, 5, true), None);
    let minimal_html = render_button(&minimal, None);
    let outline_html = render_button(&outline, None);

    assert!(default_html.contains("bg-black text-white"));
    assert!(minimal_html.contains("bg-transparent border border-gray-300"));
    assert!(outline_html.contains("bg-gray-900 dark:bg-gray-800"));
    assert!(!minimal_html.contains("bg-black"));
}

#[test]
fn test_class_name_appended_last() {
    let html = render_button(&snapshot(false, 5, true), Some("ml-4 my-button"));
    assert!(html.contains(r#"hover:-translate-y-0.5 ml-4 my-button" data-state"#));
}

#[test]
fn test_user_input_is_escaped() {
    let mut snap = snapshot(false, 1, true);
    snap.repository = RepositoryIdentity::new("a\"b", "<script>").unwrap();

    let html = render_button(&snap, Some("x\" onclick=\"evil"));

    assert!(!html.contains("<script>"));
    assert!(html.contains("https://github.com/a&quot;b/&lt;script&gt;"));
    assert!(!html.contains("onclick=\"evil"));
}

#[test]
fn test_merge_classes_skips_blank() {
    assert_eq!(merge_classes(["a b", "", "  ", " c "]), "a b c");
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html(r#"<a href='x'>&"</a>"#), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
}
