//! Index du catalogue, construit une fois au démarrage et jamais muté.

use super::color::{extract_color, FrameColor};
use contracts::domain::product::Product;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Catalogue complet de la session : liste des catégories (dans l'ordre de
/// chargement) et liste des produits (dans l'ordre du backend).
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    categories: Vec<String>,
    products: Vec<Rc<Product>>,
}

impl CatalogIndex {
    pub fn new(categories: Vec<String>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products: products.into_iter().map(Rc::new).collect(),
        }
    }

    /// Catégories dans l'ordre d'affichage d'origine.
    pub fn all_categories(&self) -> &[String] {
        &self.categories
    }

    /// Tous les produits, dans l'ordre du backend.
    pub fn all_products(&self) -> &[Rc<Product>] {
        &self.products
    }

    /// Produits d'une catégorie, ordre d'origine conservé.
    pub fn products_in(&self, category: &str) -> Vec<Rc<Product>> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Coloris disponibles, triés et dédoublonnés, pour une catégorie
    /// (`None` = tout le catalogue). Passe par [`extract_color`], comme le
    /// filtrage et l'affichage des fiches.
    pub fn colors_in(&self, category: Option<&str>) -> Vec<FrameColor> {
        let colors: BTreeSet<FrameColor> = self
            .products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter_map(|p| extract_color(p.frame_type.as_deref()))
            .collect();
        let mut colors: Vec<FrameColor> = colors.into_iter().collect();
        // tri alphabétique sur le jeton affiché, comme le sélecteur historique
        colors.sort_by_key(|c| c.as_str());
        colors
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: &str, name: &str, frame_type: Option<&str>) -> Product {
        Product {
            category: category.to_string(),
            commercial_name: name.to_string(),
            frame_type: frame_type.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_products_in_preserves_order() {
        let idx = CatalogIndex::new(
            vec!["A".into(), "B".into()],
            vec![
                product("A", "P1", None),
                product("B", "P2", None),
                product("A", "P3", None),
            ],
        );
        let names: Vec<String> = idx
            .products_in("A")
            .iter()
            .map(|p| p.commercial_name.clone())
            .collect();
        assert_eq!(names, vec!["P1", "P3"]);
    }

    #[test]
    fn test_colors_in_sorted_and_deduped() {
        let idx = CatalogIndex::new(
            vec!["A".into()],
            vec![
                product("A", "P1", Some("CADRE NOIR")),
                product("A", "P2", Some("ENTRE-2-VERRES BLANC")),
                product("A", "P3", Some("AUTRE NOIR")),
                product("A", "P4", Some("DORURE")),
                product("B", "P5", Some("CADRE ROUGE")),
            ],
        );
        assert_eq!(
            idx.colors_in(Some("A")),
            vec![FrameColor::Blanc, FrameColor::Noir]
        );
        // tout le catalogue
        assert_eq!(
            idx.colors_in(None),
            vec![FrameColor::Blanc, FrameColor::Noir, FrameColor::Rouge]
        );
    }
}
