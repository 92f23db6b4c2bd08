use std::fmt::Write;

use crate::state::{HealthStatus, Storefront};

const EMPTY_CATALOG: &str = "No products available or backend not connected.";

/// Render the whole storefront to a string. Pure function of the state,
/// so every screen the user can see is testable without a terminal.
pub fn render(store: &Storefront) -> String {
    if store.loading {
        return "Loading...\n".to_string();
    }

    let mut out = String::new();

    writeln!(out, "🛒 DevOps E-commerce Test").ok();
    writeln!(
        out,
        "Status: {} | Cart: {} items",
        store.health,
        store.cart_count()
    )
    .ok();
    writeln!(out).ok();

    writeln!(out, "Products").ok();
    if store.products.is_empty() {
        writeln!(out, "{}", EMPTY_CATALOG).ok();
    } else {
        for product in &store.products {
            writeln!(
                out,
                "  [{}] {} — {} — ${:.2}",
                product.id, product.name, product.category, product.price
            )
            .ok();
        }
    }

    if !store.cart.is_empty() {
        writeln!(out).ok();
        writeln!(out, "🛒 Shopping Cart").ok();
        for item in &store.cart {
            writeln!(out, "  {}  ${:.2}", item.name, item.price).ok();
        }
        writeln!(out, "  Total: ${:.2}", store.cart_total()).ok();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Product;

    fn product(id: u32, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            category: "test".to_string(),
        }
    }

    #[test]
    fn loading_state_shows_placeholder_only() {
        let store = Storefront::new();
        assert_eq!(render(&store), "Loading...\n");
    }

    #[test]
    fn healthy_store_shows_status_products_and_zero_cart() {
        let mut store = Storefront::new();
        store.health = HealthStatus::Healthy;
        store.products = vec![product(1, "DevOps T-Shirt", 25.99)];
        store.loading = false;

        let screen = render(&store);
        assert!(screen.contains("Status: healthy | Cart: 0 items"));
        assert!(screen.contains("DevOps T-Shirt"));
        assert!(!screen.contains("Shopping Cart"), "Empty cart hides the panel");
    }

    #[test]
    fn unreachable_backend_shows_unhealthy_and_empty_state() {
        let mut store = Storefront::new();
        store.health = HealthStatus::Unhealthy;
        store.loading = false;

        let screen = render(&store);
        assert!(screen.contains("Status: unhealthy"));
        assert!(screen.contains(EMPTY_CATALOG));
    }

    #[test]
    fn cart_panel_lists_rows_and_two_decimal_total() {
        let mut store = Storefront::new();
        store.health = HealthStatus::Healthy;
        store.products = vec![
            product(2, "Kubernetes Mug", 15.50),
            product(4, "Terraform Guide", 39.99),
        ];
        store.loading = false;
        store.add_to_cart(2);
        store.add_to_cart(4);

        let screen = render(&store);
        assert!(screen.contains("Cart: 2 items"));
        assert!(screen.contains("Kubernetes Mug  $15.50"));
        assert!(screen.contains("Terraform Guide  $39.99"));
        assert!(screen.contains("Total: $55.49"));
    }
}
