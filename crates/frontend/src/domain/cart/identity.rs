//! Règle d'identité produit du panier, centralisée.
//!
//! Deux variantes physiques (avec/sans dorure-conservation par exemple)
//! partagent souvent le même nom commercial : quand les deux côtés ont un
//! code produit, seul le code compte. Le repli (catégorie, nom) n'existe
//! que pour les données historiques sans code, jamais quand des codes
//! divergent.

use contracts::domain::product::Product;

/// Clé d'égalité d'une ligne de panier, capturée depuis un produit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIdentity {
    code: Option<String>,
    category: String,
    name: String,
}

impl ProductIdentity {
    pub fn of(product: &Product) -> Self {
        Self {
            code: product.code().map(str::to_string),
            category: product.category.clone(),
            name: product.commercial_name.clone(),
        }
    }

    /// Règle à deux niveaux, stricte : codes présents des deux côtés →
    /// comparaison par code uniquement ; sinon (catégorie, nom).
    pub fn matches(&self, product: &Product) -> bool {
        match (&self.code, product.code()) {
            (Some(a), Some(b)) => a == b,
            _ => product.category == self.category && product.commercial_name == self.name,
        }
    }
}

/// Même ligne de panier ? Applique la règle à deux niveaux sur deux produits.
pub fn same_identity(a: &Product, b: &Product) -> bool {
    ProductIdentity::of(a).matches(b)
}

/// Identifiant stable pour les clés DOM et les `id` d'éléments de formulaire.
pub fn display_id(product: &Product) -> String {
    match product.code() {
        Some(code) => code.to_string(),
        None => format!("{}-{}", product.category, product.commercial_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: &str, name: &str, code: Option<&str>) -> Product {
        Product {
            category: category.to_string(),
            commercial_name: name.to_string(),
            product_code: code.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_codes_compare_by_code_only() {
        // même nom, codes différents : lignes distinctes
        let with_dc = product("A", "ANDREA 80", Some("050612"));
        let without_dc = product("A", "ANDREA 80", Some("050613"));
        assert!(!same_identity(&with_dc, &without_dc));

        // codes identiques, noms différents : même ligne
        let a = product("A", "ANDREA 80", Some("050612"));
        let b = product("A", "ANDREA 80 (DC)", Some("050612"));
        assert!(same_identity(&a, &b));
    }

    #[test]
    fn test_fallback_on_category_and_name() {
        let a = product("A", "ANDREA 80", None);
        let b = product("A", "ANDREA 80", None);
        assert!(same_identity(&a, &b));

        let c = product("A", "GAELLE 80", None);
        assert!(!same_identity(&a, &c));

        let d = product("B", "ANDREA 80", None);
        assert!(!same_identity(&a, &d));
    }

    #[test]
    fn test_one_side_without_code_falls_back() {
        let coded = product("A", "ANDREA 80", Some("050612"));
        let legacy = product("A", "ANDREA 80", None);
        assert!(same_identity(&coded, &legacy));
    }

    #[test]
    fn test_empty_code_counts_as_absent() {
        let a = product("A", "ANDREA 80", Some(""));
        let b = product("A", "ANDREA 80", Some("050612"));
        assert!(same_identity(&a, &b));
    }

    #[test]
    fn test_display_id() {
        assert_eq!(display_id(&product("A", "ANDREA 80", Some("050612"))), "050612");
        assert_eq!(display_id(&product("A", "ANDREA 80", None)), "A-ANDREA 80");
    }
}
