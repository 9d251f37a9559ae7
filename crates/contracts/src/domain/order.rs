use crate::domain::product::Product;
use serde::{Deserialize, Serialize};

/// Adresse de livraison (et de facturation si différente) saisie à l'étape 2.
///
/// Les noms de champs reprennent les `name` du formulaire historique.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeliveryAddress {
    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    #[serde(rename = "companyName", default)]
    pub company_name: String,

    #[serde(default)]
    pub siren: String,

    #[serde(default)]
    pub siret: String,

    pub email: String,

    pub phone: String,

    pub address: String,

    #[serde(rename = "postalCode")]
    pub postal_code: String,

    pub city: String,

    pub country: String,

    #[serde(default)]
    pub notes: String,

    /// Adresse de facturation identique à la livraison.
    #[serde(rename = "sameBillingAddress", default)]
    pub same_billing_address: bool,

    #[serde(rename = "billingFirstName", default)]
    pub billing_first_name: String,

    #[serde(rename = "billingLastName", default)]
    pub billing_last_name: String,

    #[serde(rename = "billingCompanyName", default)]
    pub billing_company_name: String,

    #[serde(rename = "billingSiren", default)]
    pub billing_siren: String,

    #[serde(rename = "billingSiret", default)]
    pub billing_siret: String,

    #[serde(rename = "billingAddress", default)]
    pub billing_address: String,

    #[serde(rename = "billingPostalCode", default)]
    pub billing_postal_code: String,

    #[serde(rename = "billingCity", default)]
    pub billing_city: String,

    #[serde(rename = "billingCountry", default)]
    pub billing_country: String,
}

/// Une ligne du panier telle qu'elle part dans la demande de devis :
/// la fiche produit complète plus la quantité retenue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedProduct {
    #[serde(flatten)]
    pub product: Product,

    pub quantity: u32,
}

/// Corps du POST `/api/order`. Aucun total n'est transmis : le chiffrage
/// définitif du devis est fait côté commercial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    pub selected_products: Vec<SelectedProduct>,

    pub product_notes: String,

    pub delivery_address: DeliveryAddress,
}

/// Résumé de commande renvoyé par le backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderSummary {
    pub order_id: String,

    /// Horodatage isoformat du backend, sans fuseau.
    #[serde(default)]
    pub timestamp: Option<chrono::NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_product_flattens_on_wire() {
        let line = SelectedProduct {
            product: Product {
                category: "BBD ALUMINIUM".into(),
                commercial_name: "ANDREA 80".into(),
                product_code: Some("050612".into()),
                ..Default::default()
            },
            quantity: 3,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["product_category"], "BBD ALUMINIUM");
        assert_eq!(json["code_produit"], "050612");
        assert_eq!(json["quantity"], 3);
        // pas d'objet imbriqué "product"
        assert!(json.get("product").is_none());
    }
}
