//! Verrou de passage de l'étape catalogue vers l'étape adresse.

use crate::domain::cart::store::CartStore;

/// Panier minimum pour demander un devis, en euros HT.
pub const MINIMUM_ORDER: f64 = 1000.0;

/// Décision du verrou, avec le manque arrondi à l'euro supérieur pour
/// le message utilisateur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateDecision {
    pub allowed: bool,
    pub shortfall: u64,
}

/// Le passage 1 → 2 exige un panier non vide qui atteint le minimum.
/// Réévalué après chaque mutation du panier.
pub fn can_advance_from_catalog(cart: &CartStore) -> GateDecision {
    let total = cart.total_cost();
    let allowed = !cart.is_empty() && total >= MINIMUM_ORDER;
    let shortfall = if total >= MINIMUM_ORDER {
        0
    } else {
        (MINIMUM_ORDER - total).ceil() as u64
    };
    GateDecision { allowed, shortfall }
}

/// Pourcentage de la jauge vers le minimum, borné à 100.
pub fn gauge_percentage(cart: &CartStore) -> f64 {
    ((cart.total_cost() / MINIMUM_ORDER) * 100.0).min(100.0)
}

/// La jauge passe en style "critique" juste sous le seuil.
pub fn gauge_is_critical(percentage: f64) -> bool {
    (90.0..100.0).contains(&percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::Product;
    use std::rc::Rc;

    fn cart_with_total(price: f64, quantity: u32) -> CartStore {
        let mut cart = CartStore::new();
        cart.add(
            Rc::new(Product {
                category: "A".into(),
                commercial_name: "P".into(),
                product_code: Some("X1".into()),
                unit_price: Some(price),
                ..Default::default()
            }),
            quantity,
        )
        .unwrap();
        cart
    }

    #[test]
    fn test_threshold_boundaries() {
        assert!(!can_advance_from_catalog(&cart_with_total(999.99, 1)).allowed);
        assert!(can_advance_from_catalog(&cart_with_total(1000.0, 1)).allowed);
        assert!(can_advance_from_catalog(&cart_with_total(1000.01, 1)).allowed);
        assert!(!can_advance_from_catalog(&CartStore::new()).allowed);
    }

    #[test]
    fn test_empty_cart_is_never_allowed() {
        let decision = can_advance_from_catalog(&CartStore::new());
        assert!(!decision.allowed);
        assert_eq!(decision.shortfall, 1000);
    }

    #[test]
    fn test_shortfall_rounds_up_to_whole_euros() {
        let decision = can_advance_from_catalog(&cart_with_total(900.5, 1));
        assert!(!decision.allowed);
        assert_eq!(decision.shortfall, 100);

        let decision = can_advance_from_catalog(&cart_with_total(900.0, 1));
        assert_eq!(decision.shortfall, 100);

        let decision = can_advance_from_catalog(&cart_with_total(1000.0, 1));
        assert_eq!(decision.shortfall, 0);
    }

    #[test]
    fn test_gate_recomputed_after_each_cart_mutation() {
        let frame = |name: &str, code: &str, price: f64| {
            Rc::new(Product {
                category: "A".into(),
                commercial_name: name.into(),
                product_code: Some(code.into()),
                unit_price: Some(price),
                ..Default::default()
            })
        };

        let mut cart = CartStore::new();
        cart.add(frame("P1", "X1", 600.0), 1).unwrap();
        cart.add(frame("P2", "X2", 300.0), 1).unwrap();

        assert_eq!(cart.total_cost(), 900.0);
        let decision = can_advance_from_catalog(&cart);
        assert!(!decision.allowed);
        assert_eq!(decision.shortfall, 100);

        // passer la deuxième ligne à 2 fait franchir le seuil
        cart.update(&frame("P2", "X2", 300.0), 2).unwrap();

        assert_eq!(cart.total_cost(), 1200.0);
        let decision = can_advance_from_catalog(&cart);
        assert!(decision.allowed);
        assert_eq!(decision.shortfall, 0);
    }

    #[test]
    fn test_gauge_percentage_clamped() {
        assert_eq!(gauge_percentage(&cart_with_total(500.0, 1)), 50.0);
        assert_eq!(gauge_percentage(&cart_with_total(800.0, 2)), 100.0);
    }

    #[test]
    fn test_gauge_critical_band() {
        assert!(!gauge_is_critical(89.9));
        assert!(gauge_is_critical(90.0));
        assert!(gauge_is_critical(99.9));
        assert!(!gauge_is_critical(100.0));
    }
}
