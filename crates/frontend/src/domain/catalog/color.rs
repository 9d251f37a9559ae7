//! Extraction du coloris depuis le texte libre "type de cadre".
//!
//! Le vocabulaire est fermé : tout ce qui n'en fait pas partie est un
//! coloris inconnu, jamais un joker pour les filtres.

use std::fmt;

/// Coloris catégoriel reconnu dans un type de cadre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FrameColor {
    Blanc,
    Noir,
    Rouge,
    Bleu,
    Vert,
    Jaune,
    Orange,
    Violet,
    Rose,
    Gris,
    Marron,
    Beige,
}

impl FrameColor {
    pub const ALL: [FrameColor; 12] = [
        FrameColor::Blanc,
        FrameColor::Noir,
        FrameColor::Rouge,
        FrameColor::Bleu,
        FrameColor::Vert,
        FrameColor::Jaune,
        FrameColor::Orange,
        FrameColor::Violet,
        FrameColor::Rose,
        FrameColor::Gris,
        FrameColor::Marron,
        FrameColor::Beige,
    ];

    /// Jeton normalisé en majuscules, tel qu'affiché et filtré.
    pub fn as_str(self) -> &'static str {
        match self {
            FrameColor::Blanc => "BLANC",
            FrameColor::Noir => "NOIR",
            FrameColor::Rouge => "ROUGE",
            FrameColor::Bleu => "BLEU",
            FrameColor::Vert => "VERT",
            FrameColor::Jaune => "JAUNE",
            FrameColor::Orange => "ORANGE",
            FrameColor::Violet => "VIOLET",
            FrameColor::Rose => "ROSE",
            FrameColor::Gris => "GRIS",
            FrameColor::Marron => "MARRON",
            FrameColor::Beige => "BEIGE",
        }
    }

    /// Retrouve un coloris depuis sa forme normalisée (valeur de `<select>`).
    pub fn parse(value: &str) -> Option<FrameColor> {
        let upper = value.trim().to_uppercase();
        FrameColor::ALL.into_iter().find(|c| c.as_str() == upper)
    }
}

impl fmt::Display for FrameColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extrait le premier coloris du vocabulaire présent dans `text`,
/// en mot entier et sans tenir compte de la casse. Chiffres et tiret bas
/// font partie du mot : "BLEU2" n'est pas le coloris BLEU.
///
/// Ex. "ENTRE-2-VERRES BLANC" → `Some(Blanc)` ("VERRES" ne matche pas
/// "VERT" : la comparaison se fait mot à mot).
pub fn extract_color(text: Option<&str>) -> Option<FrameColor> {
    let text = text?;
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .find_map(|word| {
            let upper = word.to_uppercase();
            FrameColor::ALL.into_iter().find(|c| c.as_str() == upper)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_color_from_frame_type() {
        assert_eq!(
            extract_color(Some("ENTRE-2-VERRES BLANC")),
            Some(FrameColor::Blanc)
        );
        assert_eq!(extract_color(Some("CADRE NOIR MAT")), Some(FrameColor::Noir));
    }

    #[test]
    fn test_case_insensitive_whole_word() {
        assert_eq!(extract_color(Some("cadre bleu")), Some(FrameColor::Bleu));
        // "VERRES" contient "VERT" comme sous-chaîne approximative mais
        // n'est pas un mot du vocabulaire
        assert_eq!(extract_color(Some("ENTRE-2-VERRES")), None);
    }

    #[test]
    fn test_digits_belong_to_the_word() {
        // "BLEU2" est un autre mot que "BLEU"
        assert_eq!(extract_color(Some("BLEU2")), None);
        assert_eq!(extract_color(Some("CADRE BLEU2 MAT")), None);
        // mais un chiffre isolé par la ponctuation ne coupe pas le reste
        assert_eq!(
            extract_color(Some("ENTRE-2-VERRES BLANC")),
            Some(FrameColor::Blanc)
        );
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            extract_color(Some("FILET ROUGE FOND BLANC")),
            Some(FrameColor::Rouge)
        );
    }

    #[test]
    fn test_no_match_or_absent_text() {
        assert_eq!(extract_color(Some("DORURE ANTIQUE")), None);
        assert_eq!(extract_color(None), None);
        assert_eq!(extract_color(Some("")), None);
    }

    #[test]
    fn test_parse_round_trip() {
        for color in FrameColor::ALL {
            assert_eq!(FrameColor::parse(color.as_str()), Some(color));
        }
        assert_eq!(FrameColor::parse("fuchsia"), None);
    }
}
