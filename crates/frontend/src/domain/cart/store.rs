//! Panier de la demande de devis.
//!
//! Au plus une ligne par identité produit ; re-sélectionner un produit
//! remplace la quantité, il ne l'additionne jamais.

use super::identity::ProductIdentity;
use contracts::domain::product::Product;
use std::rc::Rc;
use thiserror::Error;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 99;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// La quantité doit être validée côté saisie ; le panier refuse
    /// tout ce qui sort de [1, 99] au lieu de le normaliser.
    #[error("quantité invalide : {0} (attendu entre {MIN_QUANTITY} et {MAX_QUANTITY})")]
    InvalidQuantity(u32),
}

/// Une ligne du panier : référence partagée vers la fiche produit,
/// jamais une copie.
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub product: Rc<Product>,
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> f64 {
        self.product.unit_price_or_zero() * self.quantity as f64
    }
}

/// Lignes en ordre d'insertion. La recherche passe toujours par
/// [`ProductIdentity`], jamais par une comparaison ad hoc.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    entries: Vec<CartEntry>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(&self, identity: &ProductIdentity) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| identity.matches(&e.product))
    }

    /// Ajoute le produit, ou remplace la quantité de la ligne existante.
    pub fn add(&mut self, product: Rc<Product>, quantity: u32) -> Result<(), CartError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let identity = ProductIdentity::of(&product);
        match self.position_of(&identity) {
            Some(i) => self.entries[i].quantity = quantity,
            None => self.entries.push(CartEntry { product, quantity }),
        }
        Ok(())
    }

    /// Remplace la quantité d'une ligne existante ; sans effet si la ligne
    /// n'existe pas (les appelants ne mettent à jour que des lignes connues).
    pub fn update(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let identity = ProductIdentity::of(product);
        if let Some(i) = self.position_of(&identity) {
            self.entries[i].quantity = quantity;
        }
        Ok(())
    }

    /// Supprime la ligne correspondante, sans erreur si elle est absente.
    pub fn remove(&mut self, identity: &ProductIdentity) {
        self.entries.retain(|e| !identity.matches(&e.product));
    }

    /// La quantité retenue pour ce produit, s'il est déjà au panier.
    pub fn quantity_of(&self, product: &Product) -> Option<u32> {
        let identity = ProductIdentity::of(product);
        self.position_of(&identity).map(|i| self.entries[i].quantity)
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.quantity_of(product).is_some()
    }

    /// Lignes en ordre d'insertion.
    pub fn list(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Somme des (valeur unitaire × quantité) ; valeur inconnue = 0 €.
    pub fn total_cost(&self) -> f64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Nombre total de pièces.
    pub fn total_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
