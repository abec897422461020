//! Reply Mentions
//!
//! Replies may start with a mention of another participant, stored inline
//! in the comment text as `@{{display}}`.

use crate::models::Comment;

const MARKUP_OPEN: &str = "@{{";
const MARKUP_CLOSE: &str = "}}";

/// Comment text split into its leading mention and the remaining body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionedText<'a> {
    pub mention: Option<&'a str>,
    pub body: &'a str,
}

/// Build the stored markup for a mention
pub fn encode_mention(display: &str) -> String {
    format!("{}{}{}", MARKUP_OPEN, display, MARKUP_CLOSE)
}

/// Prefix `body` with a mention of `display`
pub fn compose_reply(display: &str, body: &str) -> String {
    format!("{} {}", encode_mention(display), body.trim_start())
}

/// Split a leading `@{{name}}` word off the comment text.
///
/// Names are two or more Hangul or Latin letters; anything else is treated
/// as plain text.
pub fn parse_mention(content: &str) -> MentionedText<'_> {
    let (first, rest) = content.split_once(' ').unwrap_or((content, ""));
    let name = first
        .strip_prefix(MARKUP_OPEN)
        .and_then(|s| s.strip_suffix(MARKUP_CLOSE))
        .filter(|name| is_mention_name(name));

    match name {
        Some(name) => MentionedText { mention: Some(name), body: rest },
        None => MentionedText { mention: None, body: content },
    }
}

fn is_mention_name(name: &str) -> bool {
    name.chars().count() >= 2 && name.chars().all(is_mention_char)
}

fn is_mention_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{3131}'..='\u{314E}').contains(&c) // ㄱ-ㅎ
        || ('\u{AC00}'..='\u{D7A3}').contains(&c) // 가-힣
}

/// Nicknames that can be mentioned in a reply thread.
///
/// Authors of secret replies are excluded; order is first appearance.
pub fn mention_candidates(replies: &[Comment]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for reply in replies.iter().filter(|c| !c.is_secret) {
        if !names.contains(&reply.user.nickname) {
            names.push(reply.user.nickname.clone());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CommentUser;

    fn reply(id: u64, nickname: &str, is_secret: bool) -> Comment {
        Comment {
            id,
            comment_content: String::new(),
            is_secret,
            create_dt: "2024-03-01T10:00:00".to_string(),
            user: CommentUser { user_id: id, nickname: nickname.to_string() },
            children: None,
        }
    }

    #[test]
    fn test_parse_leading_mention() {
        let parsed = parse_mention("@{{minsu}} thanks for the tip");
        assert_eq!(parsed.mention, Some("minsu"));
        assert_eq!(parsed.body, "thanks for the tip");
    }

    #[test]
    fn test_parse_hangul_mention() {
        let parsed = parse_mention("@{{김철수}} 감사합니다");
        assert_eq!(parsed.mention, Some("김철수"));
        assert_eq!(parsed.body, "감사합니다");
    }

    #[test]
    fn test_plain_text_has_no_mention() {
        let parsed = parse_mention("no mention here");
        assert_eq!(parsed, MentionedText { mention: None, body: "no mention here" });
    }

    #[test]
    fn test_short_or_invalid_names_are_plain_text() {
        assert_eq!(parse_mention("@{{a}} hi").mention, None);
        assert_eq!(parse_mention("@{{user1}} hi").mention, None);
        assert_eq!(parse_mention("@{{a b}} hi").mention, None);
    }

    #[test]
    fn test_mention_only() {
        let parsed = parse_mention("@{{jane}}");
        assert_eq!(parsed.mention, Some("jane"));
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn test_compose_reply_parses_back() {
        let text = compose_reply("jane", "  see above");
        assert_eq!(text, "@{{jane}} see above");
        assert_eq!(parse_mention(&text).mention, Some("jane"));
    }

    #[test]
    fn test_mention_candidates_dedup_and_skip_secret() {
        let replies = vec![
            reply(1, "kim", false),
            reply(2, "lee", true),
            reply(3, "park", false),
            reply(4, "kim", false),
        ];
        assert_eq!(mention_candidates(&replies), vec!["kim".to_string(), "park".to_string()]);
    }
}
