//! Frontend Models
//!
//! Data structures matching the blog API payloads.

use serde::{Deserialize, Serialize};

use crate::feed::FeedItem;

/// Author of a blog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogUser {
    #[serde(rename = "userID")]
    pub user_id: u64,
    #[serde(default)]
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "blogID")]
    pub blog_id: u64,
    #[serde(rename = "blogName", default)]
    pub blog_name: String,
    #[serde(rename = "blogUser")]
    pub blog_user: Option<BlogUser>,
}

/// Tag attached to a posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingTag {
    #[serde(rename = "tagID")]
    pub tag_id: u64,
    #[serde(rename = "tagName")]
    pub tag_name: String,
}

/// Posting data structure (one card in the feed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub id: u64,
    pub title: String,
    #[serde(rename = "htmlContent", default)]
    pub html_content: String,
    #[serde(rename = "thumbnailImageURL")]
    pub thumbnail_image_url: Option<String>,
    #[serde(rename = "createDt")]
    pub create_dt: String,
    #[serde(rename = "postingTags", default)]
    pub posting_tags: Vec<PostingTag>,
    #[serde(rename = "isCommentAllowed", default = "default_true")]
    pub is_comment_allowed: bool,
}

impl FeedItem for Posting {
    fn cursor_id(&self) -> u64 {
        self.id
    }
}

/// Page returned by the postings collection endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostingPage {
    #[serde(default)]
    pub postings: Vec<Posting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "categoryID")]
    pub category_id: u64,
    #[serde(rename = "categoryName")]
    pub category_name: String,
}

/// Blog-level tag listed in the sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogTag {
    #[serde(rename = "tagID")]
    pub tag_id: u64,
    #[serde(rename = "tagName")]
    pub tag_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentUser {
    #[serde(rename = "userID")]
    pub user_id: u64,
    pub nickname: String,
}

/// Comment with optional replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "commentContent")]
    pub comment_content: String,
    #[serde(rename = "isSecret", default)]
    pub is_secret: bool,
    #[serde(rename = "createDt")]
    pub create_dt: String,
    pub user: CommentUser,
    #[serde(default)]
    pub children: Option<Vec<Comment>>,
}

fn default_true() -> bool {
    true
}
