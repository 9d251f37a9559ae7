//! Filtrage du catalogue : catégorie, coloris, taille et caractéristiques
//! binaires, avec re-dérivation des options valides par catégorie.

use super::color::{extract_color, FrameColor};
use super::index::CatalogIndex;
use contracts::domain::product::Product;
use std::rc::Rc;

/// Sélection de filtres courante. Dérivée, jamais persistée.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub category: Option<String>,
    pub color: Option<FrameColor>,
    pub size: Option<String>,
    pub glass_only: bool,
    pub raised_only: bool,
    pub easel_only: bool,
}

impl FilterSelection {
    /// Changement de catégorie : coloris, taille et cases à cocher
    /// repartent à zéro.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.color = None;
        self.size = None;
        self.glass_only = false;
        self.raised_only = false;
        self.easel_only = false;
    }

    /// Changement de coloris : la liste des tailles va être re-bornée,
    /// la taille choisie n'a plus de sens.
    pub fn set_color(&mut self, color: Option<FrameColor>) {
        self.color = color;
        self.size = None;
    }
}

/// Quelles cases à cocher ont un sens pour la catégorie active.
///
/// Vitre et rehausse ne s'affichent que si la catégorie mélange des 0 et
/// des 1 ; chevalet s'affiche dès que la colonne existe (présence, pas
/// mixité).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryFilterEligibility {
    pub glass: bool,
    pub raised_base: bool,
    pub easel: bool,
}

impl BinaryFilterEligibility {
    pub fn any(self) -> bool {
        self.glass || self.raised_base || self.easel
    }
}

/// Vue filtrée : produits retenus (ordre du catalogue conservé) et
/// éligibilité des filtres binaires pour la catégorie active.
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    pub products: Vec<Rc<Product>>,
    pub eligible: BinaryFilterEligibility,
}

/// Applique la sélection courante au catalogue.
///
/// Sans catégorie il n'y a rien à montrer : vue vide, aucun filtre
/// binaire éligible.
pub fn apply(selection: &FilterSelection, index: &CatalogIndex) -> FilteredView {
    let Some(category) = selection.category.as_deref() else {
        return FilteredView::default();
    };

    let scope = index.products_in(category);
    let eligible = eligibility(&scope);

    let products = scope
        .into_iter()
        .filter(|p| color_matches(p, selection.color))
        .filter(|p| size_matches(p, selection.size.as_deref()))
        .filter(|p| {
            // Cocher un filtre non éligible est une erreur d'appel, mais on
            // filtre quand même littéralement sur la valeur demandée.
            (!selection.glass_only || p.glass.is_set())
                && (!selection.raised_only || p.raised_base.is_set())
                && (!selection.easel_only || p.easel_capable.is_set())
        })
        .collect();

    FilteredView { products, eligible }
}

fn eligibility(scope: &[Rc<Product>]) -> BinaryFilterEligibility {
    let mut glass_seen = (false, false); // (zéro vu, un vu)
    let mut raised_seen = (false, false);
    let mut easel_present = false;

    for p in scope {
        if p.glass.is_present() {
            if p.glass.is_set() {
                glass_seen.1 = true;
            } else {
                glass_seen.0 = true;
            }
        }
        if p.raised_base.is_present() {
            if p.raised_base.is_set() {
                raised_seen.1 = true;
            } else {
                raised_seen.0 = true;
            }
        }
        if p.easel_capable.is_present() {
            easel_present = true;
        }
    }

    BinaryFilterEligibility {
        glass: glass_seen.0 && glass_seen.1,
        raised_base: raised_seen.0 && raised_seen.1,
        easel: easel_present,
    }
}

fn color_matches(product: &Product, wanted: Option<FrameColor>) -> bool {
    match wanted {
        None => true,
        // un produit sans coloris reconnu ne matche jamais un filtre actif
        Some(color) => extract_color(product.frame_type.as_deref()) == Some(color),
    }
}

fn size_matches(product: &Product, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(size) => product.frame_size.as_deref() == Some(size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::Flag;

    fn product(name: &str, frame_type: Option<&str>, size: Option<&str>) -> Product {
        Product {
            category: "BBD ALUMINIUM".to_string(),
            commercial_name: name.to_string(),
            frame_type: frame_type.map(str::to_string),
            frame_size: size.map(str::to_string),
            ..Default::default()
        }
    }

    fn index(products: Vec<Product>) -> CatalogIndex {
        CatalogIndex::new(vec!["BBD ALUMINIUM".into()], products)
    }

    fn names(view: &FilteredView) -> Vec<String> {
        view.products
            .iter()
            .map(|p| p.commercial_name.clone())
            .collect()
    }

    #[test]
    fn test_no_category_yields_empty_view() {
        let idx = index(vec![product("P1", None, None)]);
        let view = apply(&FilterSelection::default(), &idx);
        assert!(view.products.is_empty());
        assert!(!view.eligible.any());
    }

    #[test]
    fn test_category_scope_preserves_order() {
        let idx = index(vec![
            product("P1", Some("CADRE NOIR"), Some("30*40")),
            product("P2", Some("CADRE BLANC"), Some("40*50")),
            product("P3", Some("CADRE NOIR"), Some("30*40")),
        ]);
        let selection = FilterSelection {
            category: Some("BBD ALUMINIUM".into()),
            ..Default::default()
        };
        assert_eq!(names(&apply(&selection, &idx)), vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_color_and_size_filters_compose() {
        let idx = index(vec![
            product("P1", Some("CADRE NOIR"), Some("30*40")),
            product("P2", Some("CADRE BLANC"), Some("30*40")),
            product("P3", Some("CADRE NOIR"), Some("40*50")),
        ]);
        let selection = FilterSelection {
            category: Some("BBD ALUMINIUM".into()),
            color: Some(FrameColor::Noir),
            size: Some("30*40".into()),
            ..Default::default()
        };
        assert_eq!(names(&apply(&selection, &idx)), vec!["P1"]);
    }

    #[test]
    fn test_unknown_color_is_not_a_wildcard() {
        let idx = index(vec![
            product("P1", None, None),
            product("P2", Some("DORURE"), None),
            product("P3", Some("CADRE BLANC"), None),
        ]);
        let selection = FilterSelection {
            category: Some("BBD ALUMINIUM".into()),
            color: Some(FrameColor::Blanc),
            ..Default::default()
        };
        assert_eq!(names(&apply(&selection, &idx)), vec!["P3"]);
    }

    #[test]
    fn test_glass_eligibility_requires_mixed_values() {
        // tous à 1 : pas de filtre vitre
        let mut all_yes = vec![product("P1", None, None), product("P2", None, None)];
        for p in &mut all_yes {
            p.glass = Flag::Yes;
        }
        let idx = index(all_yes);
        let selection = FilterSelection {
            category: Some("BBD ALUMINIUM".into()),
            ..Default::default()
        };
        assert!(!apply(&selection, &idx).eligible.glass);

        // 0 et 1 : filtre affiché
        let mut mixed = vec![product("P1", None, None), product("P2", None, None)];
        mixed[0].glass = Flag::Yes;
        mixed[1].glass = Flag::No;
        let idx = index(mixed);
        assert!(apply(&selection, &idx).eligible.glass);

        // colonne absente : rien
        let idx = index(vec![product("P1", None, None)]);
        assert!(!apply(&selection, &idx).eligible.glass);
    }

    #[test]
    fn test_easel_eligibility_is_presence_not_mixedness() {
        let mut products = vec![product("P1", None, None), product("P2", None, None)];
        products[0].easel_capable = Flag::Yes;
        products[1].easel_capable = Flag::Yes;
        let idx = index(products);
        let selection = FilterSelection {
            category: Some("BBD ALUMINIUM".into()),
            ..Default::default()
        };
        // valeurs uniformes mais colonne présente → éligible
        assert!(apply(&selection, &idx).eligible.easel);
    }

    #[test]
    fn test_binary_toggles_keep_only_set_values() {
        let mut products = vec![
            product("P1", None, None),
            product("P2", None, None),
            product("P3", None, None),
        ];
        products[0].glass = Flag::Yes;
        products[1].glass = Flag::No;
        products[2].glass = Flag::Absent;
        let idx = index(products);
        let selection = FilterSelection {
            category: Some("BBD ALUMINIUM".into()),
            glass_only: true,
            ..Default::default()
        };
        assert_eq!(names(&apply(&selection, &idx)), vec!["P1"]);
    }

    #[test]
    fn test_ineligible_toggle_filters_literally_without_crash() {
        // aucune colonne vitre dans la catégorie, case cochée quand même
        let idx = index(vec![product("P1", None, None)]);
        let selection = FilterSelection {
            category: Some("BBD ALUMINIUM".into()),
            glass_only: true,
            ..Default::default()
        };
        let view = apply(&selection, &idx);
        assert!(view.products.is_empty());
        assert!(!view.eligible.glass);
    }

    #[test]
    fn test_set_category_resets_dependent_filters() {
        let mut selection = FilterSelection {
            category: Some("A".into()),
            color: Some(FrameColor::Noir),
            size: Some("30*40".into()),
            glass_only: true,
            raised_only: true,
            easel_only: true,
        };
        selection.set_category(Some("B".into()));
        assert_eq!(selection.category.as_deref(), Some("B"));
        assert!(selection.color.is_none());
        assert!(selection.size.is_none());
        assert!(!selection.glass_only && !selection.raised_only && !selection.easel_only);
    }

    #[test]
    fn test_set_color_resets_size() {
        let mut selection = FilterSelection {
            category: Some("A".into()),
            size: Some("30*40".into()),
            ..Default::default()
        };
        selection.set_color(Some(FrameColor::Blanc));
        assert!(selection.size.is_none());
        assert_eq!(selection.color, Some(FrameColor::Blanc));
    }
}
