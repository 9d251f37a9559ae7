use crate::domain::cart::identity::ProductIdentity;
use crate::domain::cart::store::CartStore;
use crate::domain::catalog::api as catalog_api;
use crate::domain::catalog::color::FrameColor;
use crate::domain::catalog::filter::{self, FilterSelection, FilteredView};
use crate::domain::catalog::index::CatalogIndex;
use crate::domain::catalog::pagination::PaginationState;
use crate::domain::checkout::gate;
use crate::domain::delivery::form as delivery_form;
use crate::layout::steps::WizardStep;
use contracts::api::OrderConfirmation;
use contracts::domain::order::DeliveryAddress;
use contracts::domain::product::Product;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// État applicatif explicite, fourni en contexte par le composant racine.
///
/// Les composants n'ont accès à aucun état ambiant : tout passe par ce
/// contexte, et chaque mutation refait dériver dans la foulée la vue
/// filtrée, la jauge et le verrou d'étape (aucun entrelacement possible,
/// tout est synchrone sur la boucle d'événements).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Index immuable de la session, construit au démarrage.
    pub catalog: RwSignal<Rc<CatalogIndex>, LocalStorage>,
    /// Toutes les tailles du catalogue (repli le plus large).
    pub all_sizes: RwSignal<Vec<String>>,
    /// Tailles proposées pour la portée courante (catégorie / coloris).
    pub scoped_sizes: RwSignal<Vec<String>>,

    pub selection: RwSignal<FilterSelection>,
    pub filtered: RwSignal<FilteredView, LocalStorage>,
    pub pagination: RwSignal<PaginationState>,

    pub cart: RwSignal<CartStore, LocalStorage>,
    pub product_notes: RwSignal<String>,
    pub address: RwSignal<DeliveryAddress>,

    pub step: RwSignal<WizardStep>,
    pub confirmation: RwSignal<Option<OrderConfirmation>>,
    /// Diagnostic fatal de démarrage ; l'application reste inutilisable.
    pub startup_error: RwSignal<Option<String>>,

    /// Jeton de fraîcheur des recherches de tailles : une réponse dont le
    /// jeton ne correspond plus à la dernière demande est ignorée.
    size_lookup_generation: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new_local(Rc::new(CatalogIndex::default())),
            all_sizes: RwSignal::new(Vec::new()),
            scoped_sizes: RwSignal::new(Vec::new()),
            selection: RwSignal::new(FilterSelection::default()),
            filtered: RwSignal::new_local(FilteredView::default()),
            pagination: RwSignal::new(PaginationState::default()),
            cart: RwSignal::new_local(CartStore::new()),
            product_notes: RwSignal::new(String::new()),
            address: RwSignal::new(DeliveryAddress {
                same_billing_address: true,
                country: "France".to_string(),
                ..Default::default()
            }),
            step: RwSignal::new(WizardStep::Products),
            confirmation: RwSignal::new(None),
            startup_error: RwSignal::new(None),
            size_lookup_generation: RwSignal::new(0),
        }
    }

    /// Installe le catalogue chargé au démarrage.
    pub fn install_catalog(&self, index: CatalogIndex, sizes: Vec<String>) {
        self.catalog.set(Rc::new(index));
        self.all_sizes.set(sizes.clone());
        self.scoped_sizes.set(sizes);
    }

    // ------------------------------------------------------------------
    // Filtres
    // ------------------------------------------------------------------

    fn recompute_filtered(&self) {
        let catalog = self.catalog.get_untracked();
        let selection = self.selection.get_untracked();
        self.filtered.set(filter::apply(&selection, &catalog));
    }

    /// Changement de catégorie : remise à zéro des autres filtres, retour
    /// page 1, re-dérivation des coloris/tailles valides.
    pub fn set_category(&self, category: Option<String>) {
        self.selection.update(|s| s.set_category(category.clone()));
        self.pagination.update(PaginationState::reset);
        self.recompute_filtered();

        match category {
            Some(category) => self.refresh_scoped_sizes(category, None),
            None => {
                // plus de portée : on repart sur la liste complète
                self.size_lookup_generation.update(|g| *g += 1);
                self.scoped_sizes.set(self.all_sizes.get_untracked());
            }
        }
    }

    pub fn set_color(&self, color: Option<FrameColor>) {
        let Some(category) = self.selection.with_untracked(|s| s.category.clone()) else {
            return;
        };
        self.selection.update(|s| s.set_color(color));
        self.pagination.update(PaginationState::reset);
        self.recompute_filtered();
        self.refresh_scoped_sizes(category, color);
    }

    pub fn set_size(&self, size: Option<String>) {
        if self.selection.with_untracked(|s| s.category.is_none()) {
            return;
        }
        self.selection.update(|s| s.size = size);
        self.pagination.update(PaginationState::reset);
        self.recompute_filtered();
    }

    pub fn set_glass_only(&self, on: bool) {
        self.selection.update(|s| s.glass_only = on);
        self.pagination.update(PaginationState::reset);
        self.recompute_filtered();
    }

    pub fn set_raised_only(&self, on: bool) {
        self.selection.update(|s| s.raised_only = on);
        self.pagination.update(PaginationState::reset);
        self.recompute_filtered();
    }

    pub fn set_easel_only(&self, on: bool) {
        self.selection.update(|s| s.easel_only = on);
        self.pagination.update(PaginationState::reset);
        self.recompute_filtered();
    }

    pub fn load_more(&self) {
        self.pagination.update(PaginationState::advance);
    }

    /// Recherche des tailles valides pour la portée courante, avec jeton
    /// de fraîcheur : si la sélection a changé entre-temps, la réponse
    /// périmée est jetée au lieu d'écraser la plus récente.
    fn refresh_scoped_sizes(&self, category: String, color: Option<FrameColor>) {
        let generation = self.size_lookup_generation.get_untracked() + 1;
        self.size_lookup_generation.set(generation);

        let this = *self;
        spawn_local(async move {
            let result = match color {
                Some(color) => match catalog_api::get_sizes_for_color(&category, color).await {
                    Ok(sizes) => Ok(sizes),
                    Err(e) => {
                        // repli sur la portée catégorie
                        log::warn!("Tailles ({}, {}) indisponibles: {}", category, color, e);
                        catalog_api::get_sizes_for_category(&category).await
                    }
                },
                None => catalog_api::get_sizes_for_category(&category).await,
            };

            if this.size_lookup_generation.get_untracked() != generation {
                log::debug!("Réponse de tailles périmée ignorée (portée {})", category);
                return;
            }

            match result {
                Ok(sizes) => this.scoped_sizes.set(sizes),
                Err(e) => {
                    // repli final : la liste la plus large déjà en main
                    log::warn!("Tailles de la catégorie {} indisponibles: {}", category, e);
                    this.scoped_sizes.set(this.all_sizes.get_untracked());
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Panier
    // ------------------------------------------------------------------

    pub fn add_to_cart(&self, product: Rc<Product>, quantity: u32) {
        let mut outcome = Ok(());
        self.cart.update(|cart| outcome = cart.add(product, quantity));
        if let Err(e) = outcome {
            // la saisie borne déjà la quantité ; ne doit pas arriver
            log::error!("Ajout au panier refusé: {}", e);
        }
    }

    pub fn update_quantity(&self, product: &Product, quantity: u32) {
        let mut outcome = Ok(());
        self.cart
            .update(|cart| outcome = cart.update(product, quantity));
        if let Err(e) = outcome {
            log::error!("Mise à jour de quantité refusée: {}", e);
        }
    }

    pub fn remove_from_cart(&self, identity: &ProductIdentity) {
        self.cart.update(|cart| cart.remove(identity));
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Étape 1 → 2 : panier non vide et minimum atteint.
    pub fn go_to_delivery(&self) {
        let decision = self.cart.with_untracked(gate::can_advance_from_catalog);
        if self.cart.with_untracked(CartStore::is_empty) {
            alert("Veuillez sélectionner au moins un produit avant de continuer.");
            return;
        }
        if !decision.allowed {
            alert(&format!(
                "Panier minimum non atteint. Il manque {}€ pour continuer. \
                 Veuillez ajouter plus de produits.",
                decision.shortfall
            ));
            return;
        }
        self.step.set(WizardStep::Delivery);
    }

    /// Étape 2 → 3 : adresse complète, sous-formulaire facturation compris.
    /// Court-circuite sur le premier champ manquant et y ramène le focus.
    pub fn go_to_confirmation(&self) {
        let address = self.address.get_untracked();
        match delivery_form::validate(&address) {
            Ok(()) => self.step.set(WizardStep::Confirmation),
            Err(missing) => {
                focus_field(missing.field_id);
                alert(&format!(
                    "Veuillez remplir tous les champs obligatoires. \
                     Champ manquant : {}.",
                    missing.label
                ));
            }
        }
    }

    pub fn back_to(&self, step: WizardStep) {
        self.step.set(step);
    }

    /// Retour à l'état vierge après une demande aboutie.
    pub fn reset_app(&self) {
        self.cart.update(CartStore::clear);
        self.product_notes.set(String::new());
        self.address.set(DeliveryAddress {
            same_billing_address: true,
            country: "France".to_string(),
            ..Default::default()
        });
        self.confirmation.set(None);
        self.selection.set(FilterSelection::default());
        self.pagination.set(PaginationState::default());
        self.filtered.set(FilteredView::default());
        self.scoped_sizes.set(self.all_sizes.get_untracked());
        self.step.set(WizardStep::Products);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Alerte bloquante native (validation et erreurs de soumission).
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ramène le focus sur un champ du formulaire, s'il existe dans le DOM.
fn focus_field(field_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(field_id));
    if let Some(element) = element {
        if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.focus();
        }
    }
}
