//! Category operations.

use crate::auth::TokenAuthenticator;
use crate::client::GatewayClient;
use crate::core::HttpTransport;
use crate::error::GatewayResult;
use crate::types::Category;

/// Service for category operations against the upstream API.
pub struct CategoriesService<'a, T: HttpTransport, A: TokenAuthenticator> {
    client: &'a GatewayClient<T, A>,
}

impl<'a, T: HttpTransport, A: TokenAuthenticator> CategoriesService<'a, T, A> {
    /// Creates a new categories service.
    pub fn new(client: &'a GatewayClient<T, A>) -> Self {
        Self { client }
    }

    fn base_path(&self) -> &str {
        &self.client.settings().categories_path
    }

    /// Lists all categories.
    pub async fn get_categories(&self) -> GatewayResult<Vec<Category>> {
        self.client.get_json(self.base_path()).await
    }

    /// Gets a category by id.
    pub async fn get_category(&self, id: i64) -> GatewayResult<Category> {
        self.client
            .get_json(&format!("{}/{}", self.base_path(), id))
            .await
    }

    /// Creates a category, returning the upstream-assigned id.
    pub async fn create_category(&self, category: &Category) -> GatewayResult<Option<i64>> {
        let created: Category = self.client.post_json(self.base_path(), category).await?;
        Ok(created.id)
    }
}
