pub mod api;
pub mod color;
pub mod filter;
pub mod index;
pub mod pagination;
pub mod ui;

/// Nom de catégorie pour l'affichage : les préfixes internes BBD/BDD des
/// fichiers source ne disent rien au client.
///
/// La valeur de filtre reste le nom brut ; seul le libellé est nettoyé.
pub fn display_category_name(category: &str) -> String {
    let trimmed = category.trim();
    for prefix in ["BBD ", "BDD "] {
        if let Some(head) = trimmed.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                let rest = trimmed[prefix.len()..].trim();
                if !rest.is_empty() {
                    return rest.to_string();
                }
            }
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_category_name_strips_internal_prefix() {
        assert_eq!(display_category_name("BBD ALUMINIUM"), "ALUMINIUM");
        assert_eq!(display_category_name("BDD BOIS DORÉ"), "BOIS DORÉ");
        assert_eq!(display_category_name("bbd aluminium"), "aluminium");
    }

    #[test]
    fn test_display_category_name_leaves_others_untouched() {
        assert_eq!(display_category_name("ALUMINIUM"), "ALUMINIUM");
        assert_eq!(display_category_name("BBDX"), "BBDX");
        assert_eq!(display_category_name(" BBD "), "BBD");
    }
}
