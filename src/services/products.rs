//! Product operations.

use crate::auth::TokenAuthenticator;
use crate::client::GatewayClient;
use crate::core::HttpTransport;
use crate::error::GatewayResult;
use crate::types::Product;

/// Service for product operations against the upstream API.
pub struct ProductsService<'a, T: HttpTransport, A: TokenAuthenticator> {
    client: &'a GatewayClient<T, A>,
}

impl<'a, T: HttpTransport, A: TokenAuthenticator> ProductsService<'a, T, A> {
    /// Creates a new products service.
    pub fn new(client: &'a GatewayClient<T, A>) -> Self {
        Self { client }
    }

    fn base_path(&self) -> &str {
        &self.client.settings().products_path
    }

    /// Lists all products.
    pub async fn get_products(&self) -> GatewayResult<Vec<Product>> {
        self.client.get_json(self.base_path()).await
    }

    /// Gets a product by id.
    pub async fn get_product(&self, id: i64) -> GatewayResult<Product> {
        self.client
            .get_json(&format!("{}/{}", self.base_path(), id))
            .await
    }

    /// Creates a product, returning the upstream-assigned id.
    pub async fn create_product(&self, product: &Product) -> GatewayResult<Option<i64>> {
        let created: Product = self.client.post_json(self.base_path(), product).await?;
        Ok(created.id)
    }
}
