//! Comment Endpoints

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::Comment;

use super::ApiClient;

/// Body of a new comment or reply
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    #[serde(rename = "commentContent")]
    pub comment_content: String,
    #[serde(rename = "isSecret")]
    pub is_secret: bool,
    /// Set for replies
    #[serde(rename = "parentCommentID")]
    pub parent_comment_id: Option<u64>,
}

#[derive(Deserialize)]
struct CommentsBody {
    data: CommentsData,
}

#[derive(Deserialize)]
struct CommentsData {
    #[serde(default)]
    comments: Vec<Comment>,
}

fn comments_path(blog_id: u64, posting_id: u64) -> String {
    format!("/blogs/{}/postings/{}/comments", blog_id, posting_id)
}

impl ApiClient {
    pub async fn list_comments(&self, blog_id: u64, posting_id: u64) -> Result<Vec<Comment>, ApiError> {
        let body: CommentsBody = self.get_json(&comments_path(blog_id, posting_id)).await?;
        Ok(body.data.comments)
    }

    pub async fn write_comment(&self, blog_id: u64, posting_id: u64, comment: &NewComment) -> Result<(), ApiError> {
        let path = format!("/blogs/{}/postings/{}/comment", blog_id, posting_id);
        self.post_json(&path, comment).await
    }

    pub async fn delete_comment(&self, blog_id: u64, posting_id: u64, comment_id: u64) -> Result<(), ApiError> {
        let path = format!(
            "{}/{}?blogID={}&commentID={}&postingID={}",
            comments_path(blog_id, posting_id),
            comment_id,
            blog_id,
            comment_id,
            posting_id
        );
        self.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_body() {
        let reply = NewComment {
            comment_content: "@{{kim}} agreed".into(),
            is_secret: false,
            parent_comment_id: Some(4),
        };
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"commentContent":"@{{kim}} agreed","isSecret":false,"parentCommentID":4}"#
        );
    }

    #[test]
    fn test_comments_body_decode() {
        let body = r#"{"data": {"comments": [{"id": 1, "commentContent": "hi", "isSecret": false,
            "createDt": "2024-03-01T10:00:00", "user": {"userID": 2, "nickname": "kim"},
            "children": [{"id": 3, "commentContent": "@{{kim}} yo", "createDt": "2024-03-01T11:00:00",
            "user": {"userID": 4, "nickname": "lee"}}]}]}}"#;
        let parsed: CommentsBody = serde_json::from_str(body).unwrap();
        let comments = parsed.data.comments;
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].children.as_ref().map(Vec::len), Some(1));
    }
}
