use serde::{Deserialize, Serialize};

/// One catalog entry. The set is fixed at startup and never mutated,
/// so handlers only ever hand out clones or borrows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// The in-memory product table standing in for a real backing store.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The five demo records, in stable id order.
    pub fn fixed() -> Self {
        let products = vec![
            Product {
                id: 1,
                name: "DevOps T-Shirt".to_string(),
                price: 25.99,
                category: "apparel".to_string(),
            },
            Product {
                id: 2,
                name: "Kubernetes Mug".to_string(),
                price: 15.50,
                category: "accessories".to_string(),
            },
            Product {
                id: 3,
                name: "Docker Stickers".to_string(),
                price: 5.99,
                category: "accessories".to_string(),
            },
            Product {
                id: 4,
                name: "Terraform Guide".to_string(),
                price: 39.99,
                category: "books".to_string(),
            },
            Product {
                id: 5,
                name: "Azure Certification".to_string(),
                price: 199.99,
                category: "courses".to_string(),
            },
        ];
        Self { products }
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_set_has_five_products_in_id_order() {
        let catalog = Catalog::fixed();
        assert_eq!(catalog.len(), 5);
        let ids: Vec<u32> = catalog.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5], "Catalog order must be stable");
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::fixed();
        let mut ids: Vec<u32> = catalog.all().iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len(), "Product ids must be unique");
    }

    #[test]
    fn names_non_empty_and_prices_non_negative() {
        for product in Catalog::fixed().all() {
            assert!(!product.name.trim().is_empty());
            assert!(product.price >= 0.0);
        }
    }

    #[test]
    fn find_known_and_unknown_ids() {
        let catalog = Catalog::fixed();
        assert_eq!(catalog.find(2).map(|p| p.name.as_str()), Some("Kubernetes Mug"));
        assert!(catalog.find(0).is_none());
        assert!(catalog.find(99).is_none());
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let catalog = Catalog::fixed();
        let json = serde_json::to_value(catalog.find(1).unwrap()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "DevOps T-Shirt");
        assert_eq!(json["price"], 25.99);
        assert_eq!(json["category"], "apparel");
    }
}
