//! Text Helpers
//!
//! Presentation helpers for posting cards and comments.

use chrono::{Duration, NaiveDateTime};
use chrono_humanize::HumanTime;

/// Characters of body text shown on a posting card
pub const EXCERPT_CHARS: usize = 100;

const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
    ("&apos;", '\''),
    ("&nbsp;", ' '),
];

/// Whether the text after a '<' opens markup; anything else is a literal '<'
fn starts_tag(after: &str) -> bool {
    after
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

/// Plain-text preview of posting HTML: tags dropped, common entities
/// decoded, whitespace collapsed, cut to `max_chars` characters.
pub fn html_excerpt(html: &str, max_chars: usize) -> String {
    let mut text = String::with_capacity(html.len().min(max_chars * 4));
    let mut in_tag = false;
    let mut rest = html;

    while let Some(c) = rest.chars().next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            rest = &rest[c.len_utf8()..];
            continue;
        }
        if c == '<' && starts_tag(&rest[1..]) {
            // Tags count as word breaks
            text.push(' ');
            in_tag = true;
            rest = &rest[1..];
            continue;
        }
        if c == '&' {
            if let Some((entity, decoded)) = ENTITIES.iter().find(|(e, _)| rest.starts_with(e)) {
                text.push(*decoded);
                rest = &rest[entity.len()..];
                continue;
            }
        }
        text.push(c);
        rest = &rest[c.len_utf8()..];
    }

    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(max_chars)
        .collect()
}

/// Comment timestamp as `YYYY-MM-DD HH:MM:SS`
pub fn format_comment_date(date: &str) -> String {
    date.replace('T', " ").chars().take(19).collect()
}

fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// Relative age of a server timestamp ("5 minutes ago"); older than a month
/// falls back to the date. Unparseable input is returned unchanged.
pub fn time_ago(timestamp: &str, now: NaiveDateTime) -> String {
    let Some(created) = parse_timestamp(timestamp) else {
        return timestamp.to_string();
    };
    if now.signed_duration_since(created) >= Duration::days(30) {
        return created.format("%Y-%m-%d").to_string();
    }
    HumanTime::from(created - now).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_excerpt_strips_tags_and_entities() {
        let html = "<h1>Intro</h1>\n<p>Rust &amp; WASM&nbsp;<b>rock</b></p>";
        assert_eq!(html_excerpt(html, 100), "Intro Rust & WASM rock");
    }

    #[test]
    fn test_excerpt_keeps_bare_angle_brackets() {
        let html = "<p>if a < b and b > c then</p><p>done</p>";
        assert_eq!(html_excerpt(html, 100), "if a < b and b > c then done");
        assert_eq!(html_excerpt("1 <2", 100), "1 <2");
        assert_eq!(html_excerpt("ends with <", 100), "ends with <");
    }

    #[test]
    fn test_excerpt_skips_comments() {
        assert_eq!(html_excerpt("<!-- draft --><p>Hello</p>", 100), "Hello");
    }

    #[test]
    fn test_excerpt_truncates_by_chars() {
        let html = "<p>가나다라마바사</p>";
        assert_eq!(html_excerpt(html, 3), "가나다");
    }

    #[test]
    fn test_excerpt_keeps_unknown_entity() {
        assert_eq!(html_excerpt("a &copy; b", 100), "a &copy; b");
    }

    #[test]
    fn test_format_comment_date() {
        assert_eq!(format_comment_date("2024-03-01T10:20:30.123456"), "2024-03-01 10:20:30");
    }

    #[test]
    fn test_time_ago() {
        let now = at("2024-03-10T12:00:00");
        assert_eq!(time_ago("2024-03-10T11:59:55", now), "now");
        assert_eq!(time_ago("2024-03-10T11:40:00", now), "20 minutes ago");
        assert_eq!(time_ago("2024-03-10T09:00:00", now), "3 hours ago");
        assert_eq!(time_ago("2024-03-08T12:00:00", now), "2 days ago");
        assert_eq!(time_ago("2024-01-01T00:00:00", now), "2024-01-01");
        assert_eq!(time_ago("yesterday", now), "yesterday");
    }
}
