//! Blog Endpoints
//!
//! Blog header and the sidebar category/tag lists.

use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{Blog, BlogTag, Category};

use super::ApiClient;

#[derive(Deserialize)]
struct CategoriesBody {
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct TagsBody {
    #[serde(default)]
    tags: Vec<BlogTag>,
}

impl ApiClient {
    pub async fn get_blog(&self, blog_id: u64) -> Result<Blog, ApiError> {
        self.get_json(&format!("/blogs/{}", blog_id)).await
    }

    pub async fn list_categories(&self, blog_id: u64) -> Result<Vec<Category>, ApiError> {
        let body: CategoriesBody = self.get_json(&format!("/blogs/{}/categories", blog_id)).await?;
        Ok(body.categories)
    }

    pub async fn list_tags(&self, blog_id: u64) -> Result<Vec<BlogTag>, ApiError> {
        let body: TagsBody = self.get_json(&format!("/blogs/{}/tags", blog_id)).await?;
        Ok(body.tags)
    }
}
