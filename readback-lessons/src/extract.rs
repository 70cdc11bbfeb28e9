//! HTML content extraction
//!
//! Minimal hand-rolled extraction tuned to the lesson site's markup: link
//! scanning for the homepage, paragraph harvesting for level pages. The
//! site's pages bury the article between navigation, worksheets and
//! hosting-error boilerplate, so everything is filtered through length
//! thresholds and a skip-pattern list.

/// Lines containing any of these (case-insensitive) are site furniture,
/// worksheet instructions or error pages, never article text.
const SKIP_PATTERNS: &[&str] = &[
    "copyright",
    "lesson on",
    "free worksheet",
    "online activit",
    "breaking news english",
    "esl lesson",
    "download",
    "subscribe",
    "twitter",
    "facebook",
    "instagram",
    "bluesky",
    "rss feed",
    "help this site",
    "buy my",
    "e-book",
    "see a sample",
    "listen a minute",
    "famous people",
    "esl discussion",
    "business english",
    "movie lesson",
    "holiday lesson",
    "complete this table",
    "spend one minute writing",
    "what do you know about",
    "share what you wrote",
    "change partners often",
    "speed reading",
    "5-speed listening",
    "grammar",
    "dictation",
    "spelling",
    "prepositions",
    "jumble",
    "no spaces",
    "gap fill",
    "missing words",
    "word pairs",
    "match",
    "try the same news story",
    "make sure you try",
    "sources",
    "litespeed",
    "not a web hosting",
    "has no control over content",
    "404 not found",
    "page not found",
    "error 404",
    "access denied",
    "forbidden",
    "server error",
    "access to this resource",
    "server is denied",
    "proudly powered",
];

/// Minimum characters for a block to count as an article paragraph.
const MIN_PARAGRAPH_LEN: usize = 20;

/// A link scraped from the homepage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonLink {
    pub title: String,
    pub url: String,
    /// `DD/MM/YY` derived from the URL's date slug, empty when absent.
    pub date: String,
}

/// Scan homepage HTML for dated lesson links (`.../YYMMDD-slug.html`).
///
/// Duplicates are dropped, short link texts (menus, "more") are dropped,
/// and at most `limit` links are returned in page order.
pub fn extract_lesson_links(html: &str, base_url: &str, limit: usize) -> Vec<LessonLink> {
    let mut links = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    let mut rest = html;
    while let Some(start) = rest.find("<a ") {
        rest = &rest[start..];
        let Some(tag_end) = rest.find('>') else { break };
        let tag = &rest[..tag_end];

        let href = attribute_value(tag, "href");
        let after_tag = &rest[tag_end + 1..];
        let text_end = after_tag.find("</a>").unwrap_or(0);
        let text = collapse_whitespace(&strip_tags(&after_tag[..text_end]));
        rest = &after_tag[text_end..];

        let Some(href) = href else { continue };
        if !href.ends_with(".html") || !has_dated_slug(&href) {
            continue;
        }

        let url = absolutize(&href, base_url);
        if seen.contains(&url) {
            continue;
        }

        let title = text.trim_start_matches('-').trim().to_string();
        if title.chars().count() < 10 {
            continue;
        }

        seen.push(url.clone());
        links.push(LessonLink {
            title,
            date: date_from_url(&url),
            url,
        });
        if links.len() >= limit {
            break;
        }
    }

    links
}

/// Harvest article paragraphs from a level page.
///
/// Blocks come from `<p>` elements; each must clear the length threshold,
/// dodge the skip patterns, and not repeat an earlier block's opening
/// words (the site prints the article twice on some pages).
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut seen_openings: Vec<String> = Vec::new();

    for block in paragraph_blocks(html) {
        let text = collapse_whitespace(&strip_tags(&block));
        if text.chars().count() < MIN_PARAGRAPH_LEN {
            continue;
        }

        let lower = text.to_lowercase();
        if SKIP_PATTERNS.iter().any(|p| lower.contains(p)) {
            continue;
        }
        if lower.starts_with("what do you")
            || lower.starts_with("how ")
            || lower.starts_with("who would you")
            || lower.starts_with("to what degree")
        {
            continue;
        }

        let opening: String = text
            .split_whitespace()
            .take(10)
            .collect::<Vec<_>>()
            .join(" ");
        if seen_openings.contains(&opening) {
            continue;
        }
        seen_openings.push(opening);

        paragraphs.push(text);
    }

    paragraphs
}

/// First `<h1>` (or `<title>`) contents, for the lesson description.
pub fn extract_description(html: &str) -> String {
    for tag in ["h1", "title"] {
        if let Some(inner) = element_text(html, tag) {
            let cleaned = collapse_whitespace(&inner);
            // The site appends its own name to every heading.
            let cleaned = match cleaned.to_lowercase().find("breaking news english") {
                Some(pos) => cleaned[..pos].trim_end_matches(['-', '|', ' ']).to_string(),
                None => cleaned,
            };
            if !cleaned.trim().is_empty() {
                return cleaned.trim().to_string();
            }
        }
    }
    String::new()
}

/// Build the seven per-level URLs from a lesson's base URL:
/// `.../YYMMDD-slug.html` -> `.../YYMMDD-slug-<level>.html`.
pub fn level_url(lesson_url: &str, level: &str) -> String {
    match lesson_url.strip_suffix(".html") {
        Some(base) => format!("{base}-{level}.html"),
        None => lesson_url.to_string(),
    }
}

/// True when the URL carries the site's six-digit date slug (`/YYMMDD-`).
fn has_dated_slug(url: &str) -> bool {
    let bytes = url.as_bytes();
    bytes.windows(8).any(|w| {
        w[0] == b'/' && w[1..7].iter().all(u8::is_ascii_digit) && w[7] == b'-'
    })
}

/// `DD/MM/YY` from the URL's `YYMMDD-` slug.
fn date_from_url(url: &str) -> String {
    let bytes = url.as_bytes();
    for i in 0..bytes.len().saturating_sub(7) {
        let w = &bytes[i..i + 8];
        if w[0] == b'/' && w[1..7].iter().all(u8::is_ascii_digit) && w[7] == b'-' {
            let slug = &url[i + 1..i + 7];
            return format!("{}/{}/{}", &slug[4..6], &slug[2..4], &slug[..2]);
        }
    }
    String::new()
}

fn absolutize(href: &str, base_url: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else if let Some(path) = href.strip_prefix('/') {
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), href)
    }
}

fn attribute_value(tag: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let end = tag[start..].find('"')?;
    Some(tag[start..start + end].to_string())
}

fn paragraph_blocks(html: &str) -> Vec<String> {
    let lower = html.to_lowercase();
    let mut blocks = Vec::new();
    let mut pos = 0;
    while let Some(rel) = lower[pos..].find("<p") {
        let open = pos + rel;
        // Reject <pre>, <param> and friends.
        match lower.as_bytes().get(open + 2) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') => {}
            _ => {
                pos = open + 2;
                continue;
            }
        }
        let Some(tag_close) = lower[open..].find('>') else { break };
        let content_start = open + tag_close + 1;
        let Some(close) = lower[content_start..].find("</p>") else { break };
        blocks.push(html[content_start..content_start + close].to_string());
        pos = content_start + close + 4;
    }
    blocks
}

fn element_text(html: &str, tag: &str) -> Option<String> {
    let lower = html.to_lowercase();
    let open = lower.find(&format!("<{tag}"))?;
    let content_start = open + lower[open..].find('>')? + 1;
    let close = lower[content_start..].find(&format!("</{tag}>"))?;
    Some(strip_tags(&html[content_start..content_start + close]))
}

/// Remove markup and decode the entities the lesson pages actually use.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOMEPAGE: &str = r#"
        <html><body>
        <a href="/index.html">Home</a>
        <a href="/2025/250812-space-tourism.html">Space tourism is booming this year</a>
        <a href="/2025/250812-space-tourism.html">Space tourism is booming this year</a>
        <a href="/2025/250811-coral-reefs.html">Coral reefs show signs of recovery</a>
        <a href="/about.html">About</a>
        <a href="/2025/250810-x.html">short</a>
        </body></html>
    "#;

    #[test]
    fn homepage_links_are_dated_deduped_and_titled() {
        let links = extract_lesson_links(HOMEPAGE, "https://example.com", 10);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Space tourism is booming this year");
        assert_eq!(
            links[0].url,
            "https://example.com/2025/250812-space-tourism.html"
        );
        assert_eq!(links[0].date, "12/08/25");
        assert_eq!(links[1].title, "Coral reefs show signs of recovery");
    }

    #[test]
    fn link_limit_is_respected() {
        let links = extract_lesson_links(HOMEPAGE, "https://example.com", 1);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn paragraphs_filter_boilerplate_and_short_blocks() {
        let html = r#"
            <p>Scientists have discovered that coral reefs in several regions
            are recovering faster than expected after recent bleaching.</p>
            <p>ok</p>
            <p>Try the same news story at these easier levels.</p>
            <p>Make sure you try all of the online activities for this reading.</p>
            <p>The recovery appears linked to cooler water currents that gave
            the coral time to regrow over the past two seasons.</p>
        "#;
        let paragraphs = extract_paragraphs(html);
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].starts_with("Scientists have discovered"));
        assert!(paragraphs[1].starts_with("The recovery appears"));
    }

    #[test]
    fn duplicate_article_blocks_are_dropped() {
        let html = r#"
            <p>The very same paragraph printed twice on the page for layout
            reasons should only be collected a single time.</p>
            <p>The very same paragraph printed twice on the page for layout
            reasons should only be collected a single time.</p>
        "#;
        assert_eq!(extract_paragraphs(html).len(), 1);
    }

    #[test]
    fn description_strips_site_suffix() {
        let html = "<h1>Space tourism - Breaking News English Lesson</h1>";
        assert_eq!(extract_description(html), "Space tourism");
    }

    #[test]
    fn level_urls_derive_from_base() {
        assert_eq!(
            level_url("https://example.com/2025/250812-space.html", "4"),
            "https://example.com/2025/250812-space-4.html"
        );
    }

    #[test]
    fn entity_decoding() {
        let html = "<p>Fish &amp; chips cost more than last year, the survey found.</p>";
        let paragraphs = extract_paragraphs(html);
        assert_eq!(
            paragraphs[0],
            "Fish & chips cost more than last year, the survey found."
        );
    }
}
