//! Posting Endpoints

use crate::error::ApiError;
use crate::feed::PostingQuery;
use crate::models::{Posting, PostingPage};

use super::ApiClient;

impl ApiClient {
    /// One page of a blog's postings
    pub async fn list_blog_postings(&self, query: &PostingQuery) -> Result<Vec<Posting>, ApiError> {
        let page: PostingPage = self.get_json(&query.to_relative_url()).await?;
        Ok(page.postings)
    }
}
