//! Pagination incrémentale "Voir plus" : chaque page ajoute un lot au
//! préfixe visible, sans jamais perdre ce qui est déjà affiché.

/// Nombre de produits révélés par clic sur "Voir plus".
pub const PRODUCTS_PER_PAGE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_size: usize,
    pub current_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_size: PRODUCTS_PER_PAGE,
            current_page: 1,
        }
    }
}

impl PaginationState {
    /// Longueur du préfixe visible pour `total` éléments filtrés.
    pub fn visible_len(&self, total: usize) -> usize {
        (self.current_page * self.page_size).min(total)
    }

    /// Préfixe visible complet, toujours depuis l'indice 0 : le re-rendu
    /// est idempotent, un même état redonne la même tranche.
    pub fn visible_slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..self.visible_len(filtered.len())]
    }

    pub fn advance(&mut self) {
        self.current_page += 1;
    }

    /// Tout changement de filtre repart en page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible_len(total) < total
    }

    /// Taille du prochain lot, pour le libellé du bouton
    /// ("Voir N produits de plus").
    pub fn next_chunk_len(&self, total: usize) -> usize {
        total.saturating_sub(self.visible_len(total)).min(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_prefix_grows_then_clamps() {
        let items: Vec<u32> = (0..30).collect();
        let mut state = PaginationState::default();

        assert_eq!(state.visible_slice(&items).len(), 12);
        assert!(state.has_more(items.len()));

        state.advance();
        assert_eq!(state.visible_slice(&items).len(), 24);
        assert!(state.has_more(items.len()));

        state.advance();
        assert_eq!(state.visible_slice(&items).len(), 30);
        assert!(!state.has_more(items.len()));

        // avancer au-delà du total reste borné
        state.advance();
        assert_eq!(state.visible_slice(&items).len(), 30);
        assert!(!state.has_more(items.len()));
    }

    #[test]
    fn test_slice_always_starts_at_zero() {
        let items: Vec<u32> = (0..30).collect();
        let mut state = PaginationState::default();
        state.advance();
        assert_eq!(state.visible_slice(&items)[0], 0);
        assert_eq!(state.visible_slice(&items).len(), 24);
    }

    #[test]
    fn test_reset_goes_back_to_first_page() {
        let mut state = PaginationState::default();
        state.advance();
        state.advance();
        state.reset();
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_next_chunk_len_for_button_label() {
        let mut state = PaginationState::default();
        assert_eq!(state.next_chunk_len(30), 12);
        state.advance();
        assert_eq!(state.next_chunk_len(30), 6);
        state.advance();
        assert_eq!(state.next_chunk_len(30), 0);
        assert_eq!(state.next_chunk_len(5), 0);
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = vec![];
        let state = PaginationState::default();
        assert!(state.visible_slice(&items).is_empty());
        assert!(!state.has_more(0));
    }
}
