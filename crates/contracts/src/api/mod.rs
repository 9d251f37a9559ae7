//! Enveloppes de réponse du backend Flask.
//!
//! Tous les endpoints répondent `{success: true, <données>}` ou
//! `{success: false, error: "..."}`. `into_result()` fait la bascule.

use crate::de::loose_string;
use crate::domain::order::OrderSummary;
use crate::domain::product::Product;
use serde::{Deserialize, Serialize};

/// GET `/api/categories`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// GET `/api/products`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub error: Option<String>,
}

/// GET `/api/sizes`, `/api/sizes/{category}`, `/api/sizes/{category}/{color}`
#[derive(Debug, Clone, Deserialize)]
pub struct SizesResponse {
    pub success: bool,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// POST `/api/order`
///
/// Les identifiants Sellsy sont de purs champs d'affichage : le backend les
/// renvoie en nombre ou en chaîne selon la version de l'API CRM.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OrderResponse {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub order: Option<OrderSummary>,

    #[serde(default, deserialize_with = "loose_string")]
    pub sellsy_client_id: Option<String>,

    #[serde(default, deserialize_with = "loose_string")]
    pub sellsy_opportunity_id: Option<String>,

    #[serde(default)]
    pub sellsy_error: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

/// Confirmation exploitable côté interface après un POST réussi.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub sellsy_client_id: Option<String>,
    pub sellsy_opportunity_id: Option<String>,
    pub sellsy_error: Option<String>,
}

fn envelope_error(error: Option<String>) -> String {
    error.unwrap_or_else(|| "Erreur inconnue".to_string())
}

impl CategoriesResponse {
    pub fn into_result(self) -> Result<Vec<String>, String> {
        if self.success {
            Ok(self.categories)
        } else {
            Err(envelope_error(self.error))
        }
    }
}

impl ProductsResponse {
    pub fn into_result(self) -> Result<Vec<Product>, String> {
        if self.success {
            Ok(self.products)
        } else {
            Err(envelope_error(self.error))
        }
    }
}

impl SizesResponse {
    pub fn into_result(self) -> Result<Vec<String>, String> {
        if self.success {
            Ok(self.sizes)
        } else {
            Err(envelope_error(self.error))
        }
    }
}

impl OrderResponse {
    pub fn into_result(self) -> Result<OrderConfirmation, String> {
        if !self.success {
            return Err(envelope_error(self.error));
        }
        let order = self
            .order
            .ok_or_else(|| "Réponse sans numéro de commande".to_string())?;
        Ok(OrderConfirmation {
            order_id: order.order_id,
            sellsy_client_id: self.sellsy_client_id,
            sellsy_opportunity_id: self.sellsy_opportunity_id,
            sellsy_error: self.sellsy_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp: SizesResponse =
            serde_json::from_str(r#"{"success": true, "sizes": ["30*40", "40*50"]}"#).unwrap();
        assert_eq!(resp.into_result().unwrap(), vec!["30*40", "40*50"]);
    }

    #[test]
    fn test_error_envelope() {
        let resp: SizesResponse =
            serde_json::from_str(r#"{"success": false, "error": "Catégorie non trouvée"}"#)
                .unwrap();
        assert_eq!(resp.into_result().unwrap_err(), "Catégorie non trouvée");
    }

    #[test]
    fn test_order_response_with_sellsy_pass_through() {
        let resp: OrderResponse = serde_json::from_str(
            r#"{
                "success": true,
                "order": {"order_id": "DEVIS-20250829120000"},
                "sellsy_client_id": 123456,
                "sellsy_opportunity_id": "789"
            }"#,
        )
        .unwrap();
        let conf = resp.into_result().unwrap();
        assert_eq!(conf.order_id, "DEVIS-20250829120000");
        assert_eq!(conf.sellsy_client_id.as_deref(), Some("123456"));
        assert_eq!(conf.sellsy_opportunity_id.as_deref(), Some("789"));
        assert!(conf.sellsy_error.is_none());
    }

    #[test]
    fn test_order_response_with_sellsy_error_still_succeeds() {
        let resp: OrderResponse = serde_json::from_str(
            r#"{
                "success": true,
                "order": {"order_id": "DEVIS-1", "timestamp": "2025-08-29T12:00:00.123456"},
                "sellsy_error": "API Sellsy indisponible"
            }"#,
        )
        .unwrap();
        let conf = resp.into_result().unwrap();
        assert_eq!(conf.sellsy_error.as_deref(), Some("API Sellsy indisponible"));
    }
}
