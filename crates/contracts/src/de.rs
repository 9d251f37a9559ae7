//! Désérialiseurs laxistes pour les valeurs issues de cellules Excel :
//! le backend renvoie selon la ligne un nombre, une chaîne ou null.

use serde::{Deserialize, Deserializer};

/// Champ texte pouvant arriver en chaîne ou en nombre ; `None` si vide.
pub fn loose_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        }
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Prix en chaîne ou en nombre ; `None` si illisible.
pub fn loose_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    })
}
