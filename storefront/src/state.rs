use std::fmt;

use tracing::{debug, warn};

use crate::api::{ApiClient, Product, Result};

/// Derived each load from whether the health call round-tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Checking,
    Healthy,
    Unhealthy,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthStatus::Checking => "checking...",
            HealthStatus::Healthy => "healthy",
            HealthStatus::Unhealthy => "unhealthy",
        };
        f.write_str(label)
    }
}

/// All storefront state. The cart is purely local: it is never sent to
/// the backend and does not survive a restart.
#[derive(Debug)]
pub struct Storefront {
    pub health: HealthStatus,
    pub products: Vec<Product>,
    pub cart: Vec<Product>,
    pub loading: bool,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl Storefront {
    pub fn new() -> Self {
        Self {
            health: HealthStatus::Checking,
            products: Vec::new(),
            cart: Vec::new(),
            loading: true,
        }
    }

    /// Startup fetch: health first, then products, inside one guarded
    /// block. Any failure collapses health to unhealthy and leaves the
    /// product list untouched. The loading flag clears on both paths.
    pub async fn load(&mut self, api: &ApiClient) {
        self.loading = true;
        match Self::fetch(api).await {
            Ok(products) => {
                self.health = HealthStatus::Healthy;
                self.products = products;
            }
            Err(error) => {
                warn!(%error, "Backend unreachable");
                self.health = HealthStatus::Unhealthy;
            }
        }
        self.loading = false;
    }

    async fn fetch(api: &ApiClient) -> Result<Vec<Product>> {
        let health = api.health().await?;
        debug!(
            status = %health.status,
            version = %health.version,
            environment = %health.environment,
            "Backend health check passed"
        );
        api.products().await
    }

    /// Appends a by-value copy of the product. Repeated adds of the same
    /// product stay separate rows; quantities are never merged.
    pub fn add_to_cart(&mut self, product_id: u32) -> bool {
        match self.products.iter().find(|p| p.id == product_id) {
            Some(product) => {
                self.cart.push(product.clone());
                true
            }
            None => false,
        }
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.iter().map(|item| item.price).sum()
    }
}
