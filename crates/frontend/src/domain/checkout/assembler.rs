//! Assemblage de la demande de devis à partir du panier.

use crate::domain::cart::store::CartStore;
use contracts::domain::order::{DeliveryAddress, OrderPayload, SelectedProduct};

/// Construit le corps du POST `/api/order` : lignes du panier (fiche
/// produit complète + quantité), notes libres, adresse de livraison.
/// Aucun total : le chiffrage reste côté commercial.
pub fn build_order(cart: &CartStore, notes: &str, address: &DeliveryAddress) -> OrderPayload {
    OrderPayload {
        selected_products: cart
            .list()
            .iter()
            .map(|entry| SelectedProduct {
                product: (*entry.product).clone(),
                quantity: entry.quantity,
            })
            .collect(),
        product_notes: notes.trim().to_string(),
        delivery_address: address.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::Product;
    use std::rc::Rc;

    #[test]
    fn test_payload_mirrors_cart_in_order() {
        let mut cart = CartStore::new();
        cart.add(
            Rc::new(Product {
                category: "A".into(),
                commercial_name: "P1".into(),
                product_code: Some("X1".into()),
                unit_price: Some(600.0),
                ..Default::default()
            }),
            1,
        )
        .unwrap();
        cart.add(
            Rc::new(Product {
                category: "A".into(),
                commercial_name: "P2".into(),
                product_code: Some("X2".into()),
                unit_price: Some(300.0),
                ..Default::default()
            }),
            2,
        )
        .unwrap();

        let address = DeliveryAddress {
            first_name: "Jean".into(),
            last_name: "Martin".into(),
            email: "jean@exemple.fr".into(),
            ..Default::default()
        };
        let payload = build_order(&cart, "  livraison à l'étage  ", &address);

        assert_eq!(payload.selected_products.len(), 2);
        assert_eq!(payload.selected_products[0].product.commercial_name, "P1");
        assert_eq!(payload.selected_products[1].quantity, 2);
        assert_eq!(payload.product_notes, "livraison à l'étage");
        assert_eq!(payload.delivery_address.first_name, "Jean");

        // le corps sérialisé ne contient aucun total
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("total_cost").is_none());
        assert!(json.get("total_ht").is_none());
    }
}
