use crate::format::format_count;
use crate::models::{ButtonSnapshot, Variant};

const BASE_CLASSES: &str =
    "relative flex items-center rounded-md font-bold text-sm px-4 py-2 transition duration-200 text-center";

const MINIMAL_CLASSES: &str = "bg-transparent border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-800";

const OUTLINE_CLASSES: &str = "bg-gray-900 dark:bg-gray-800 border border-gray-600 dark:border-gray-500 text-white hover:bg-gray-800 dark:hover:bg-gray-700";

const DEFAULT_CLASSES: &str = "bg-black text-white shadow-[0_0_24px_rgba(34,_42,_53,_0.06),_0_1px_1px_rgba(0,_0,_0,_0.05),_0_0_0_1px_rgba(34,_42,_53,_0.04),_0_0_4px_rgba(34,_42,_53,_0.08),_0_16px_68px_rgba(47,_48,_55,_0.05),_0_1px_0_rgba(255,_255,_255,_0.1)_inset] hover:-translate-y-0.5";

const LOGO_PATH: &str = "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z";

const STAR_PATH: &str =
    "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

impl Variant {
    pub fn classes(self) -> &'static str {
        match self {
            Variant::Default => DEFAULT_CLASSES,
            Variant::Minimal => MINIMAL_CLASSES,
            Variant::Outline => OUTLINE_CLASSES,
        }
    }
}

/// Joins class fragments, skipping blank ones.
pub fn merge_classes<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn star_glyph() -> String {
    format!(
        r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="text-white" data-glyph="star"><path d="{}"/></svg>"#,
        STAR_PATH
    )
}

fn logo_section() -> String {
    format!(
        concat!(
            r#"<div class="flex items-center justify-center pr-3 border-r border-gray-600 dark:border-gray-500">"#,
            r#"<div class="w-5 h-5 bg-white rounded-full flex items-center justify-center">"#,
            r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="currentColor" class="text-gray-900" data-glyph="logo"><path d="{}"/></svg>"#,
            "</div></div>"
        ),
        LOGO_PATH
    )
}

fn count_section(snapshot: &ButtonSnapshot) -> String {
    let mut section = String::from(r#"<div class="flex items-center gap-2 pl-3">"#);

    if snapshot.show_count {
        if snapshot.is_loading {
            section.push_str(r#"<div class="flex items-center gap-2">"#);
            section.push_str(
                r#"<div class="w-4 h-4 border-2 border-white border-t-transparent rounded-full animate-spin" data-glyph="spinner"></div>"#,
            );
            section.push_str(&star_glyph());
            section.push_str("</div>");
        } else {
            section.push_str(&format!(
                r#"<span class="font-semibold text-white" data-role="count">{}</span>"#,
                format_count(snapshot.display_count)
            ));
            section.push_str(&star_glyph());
        }
    }

    section.push_str("</div>");
    section
}

/// Renders the button as a single external link.
pub fn render_button(snapshot: &ButtonSnapshot, class_name: Option<&str>) -> String {
    let classes = merge_classes([
        BASE_CLASSES,
        snapshot.variant.classes(),
        class_name.unwrap_or_default(),
    ]);
    let state = if snapshot.is_loading { "loading" } else { "loaded" };

    format!(
        r#"<a href="{href}" target="_blank" rel="noopener noreferrer" class="{classes}" data-state="{state}">{logo}{count}</a>"#,
        href = escape_html(&snapshot.repository.html_url()),
        classes = escape_html(&classes),
        state = state,
        logo = logo_section(),
        count = count_section(snapshot),
    )
}
