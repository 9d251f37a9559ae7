use crate::de::{loose_price, loose_string};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Attribut binaire tri-état
// ============================================================================

/// Attribut binaire d'un produit tel qu'il arrive du backend.
///
/// Les colonnes Excel source peuvent être absentes pour toute une catégorie :
/// `Absent` (colonne manquante / null) n'est pas la même chose que `No`
/// (colonne présente, valeur 0). L'éligibilité des filtres dépend de cette
/// distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flag {
    #[default]
    Absent,
    No,
    Yes,
}

impl Flag {
    /// La colonne existe pour ce produit (0 ou 1).
    pub fn is_present(self) -> bool {
        !matches!(self, Flag::Absent)
    }

    /// La caractéristique est effectivement là (valeur 1).
    pub fn is_set(self) -> bool {
        matches!(self, Flag::Yes)
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Flag::Absent => serializer.serialize_none(),
            Flag::No => serializer.serialize_u8(0),
            Flag::Yes => serializer.serialize_u8(1),
        }
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Le backend nettoie les cellules Excel en nombre, chaîne ou null.
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            None | Some(serde_json::Value::Null) => Flag::Absent,
            Some(serde_json::Value::Number(n)) => {
                if n.as_f64() == Some(1.0) {
                    Flag::Yes
                } else {
                    Flag::No
                }
            }
            Some(serde_json::Value::String(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    Flag::Absent
                } else if s.parse::<f64>() == Ok(1.0) {
                    Flag::Yes
                } else {
                    Flag::No
                }
            }
            Some(serde_json::Value::Bool(b)) => {
                if b {
                    Flag::Yes
                } else {
                    Flag::No
                }
            }
            Some(_) => Flag::Absent,
        })
    }
}

// ============================================================================
// Produit
// ============================================================================

/// Une ligne du catalogue, immuable après chargement.
///
/// Le panier référence les produits (`Rc<Product>`), il ne les copie jamais.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Product {
    #[serde(rename = "product_category")]
    pub category: String,

    #[serde(rename = "nom_commercial")]
    pub commercial_name: String,

    #[serde(rename = "code_produit", deserialize_with = "loose_string", default)]
    pub product_code: Option<String>,

    /// Texte libre dont on extrait le coloris (ex. "ENTRE-2-VERRES BLANC").
    #[serde(rename = "type_cadre", deserialize_with = "loose_string", default)]
    pub frame_type: Option<String>,

    #[serde(rename = "nom_cadre", deserialize_with = "loose_string", default)]
    pub frame_name: Option<String>,

    #[serde(rename = "frame_size", deserialize_with = "loose_string", default)]
    pub frame_size: Option<String>,

    /// Valeur unitaire HT ; absente ou illisible = comptée 0 €.
    #[serde(rename = "tarif_vente_2025", deserialize_with = "loose_price", default)]
    pub unit_price: Option<f64>,

    #[serde(rename = "vitre_binaire", default)]
    pub glass: Flag,

    #[serde(rename = "rehausse_binaire", default)]
    pub raised_base: Flag,

    #[serde(rename = "chevalet_binaire", default)]
    pub easel: Flag,

    #[serde(rename = "possibilite_chevalet_binaire", default)]
    pub easel_capable: Flag,

    // Champs transmis tels quels dans la demande de devis.
    #[serde(
        rename = "reference_atelier",
        deserialize_with = "loose_string",
        default
    )]
    pub workshop_reference: Option<String>,

    #[serde(
        rename = "description_maison_raphael",
        deserialize_with = "loose_string",
        default
    )]
    pub house_description: Option<String>,
}

impl Product {
    /// Valeur unitaire exploitable pour les totaux (0 € si inconnue).
    pub fn unit_price_or_zero(&self) -> f64 {
        self.unit_price.unwrap_or(0.0)
    }

    /// Code produit non vide, s'il existe.
    pub fn code(&self) -> Option<&str> {
        self.product_code.as_deref().filter(|c| !c.is_empty())
    }
}
