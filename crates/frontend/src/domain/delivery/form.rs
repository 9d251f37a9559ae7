//! Validation du formulaire livraison/facturation (étape 2 → 3).
//!
//! Même genre de verrou que le passage catalogue → adresse : on
//! court-circuite sur le premier champ obligatoire manquant et on renvoie
//! son `id` pour que l'interface y ramène le focus.

use contracts::domain::order::DeliveryAddress;

/// Premier champ obligatoire manquant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    /// `id` DOM de l'input à refocaliser.
    pub field_id: &'static str,
    /// Libellé pour le message utilisateur.
    pub label: &'static str,
}

const REQUIRED: &[(&str, &str)] = &[
    ("firstName", "Prénom"),
    ("lastName", "Nom"),
    ("email", "Email"),
    ("phone", "Téléphone"),
    ("address", "Adresse"),
    ("postalCode", "Code postal"),
    ("city", "Ville"),
    ("country", "Pays"),
];

const REQUIRED_BILLING: &[(&str, &str)] = &[
    ("billingFirstName", "Prénom (facturation)"),
    ("billingLastName", "Nom (facturation)"),
    ("billingAddress", "Adresse (facturation)"),
    ("billingPostalCode", "Code postal (facturation)"),
    ("billingCity", "Ville (facturation)"),
    ("billingCountry", "Pays (facturation)"),
];

fn field_value<'a>(address: &'a DeliveryAddress, field_id: &str) -> &'a str {
    match field_id {
        "firstName" => &address.first_name,
        "lastName" => &address.last_name,
        "email" => &address.email,
        "phone" => &address.phone,
        "address" => &address.address,
        "postalCode" => &address.postal_code,
        "city" => &address.city,
        "country" => &address.country,
        "billingFirstName" => &address.billing_first_name,
        "billingLastName" => &address.billing_last_name,
        "billingAddress" => &address.billing_address,
        "billingPostalCode" => &address.billing_postal_code,
        "billingCity" => &address.billing_city,
        "billingCountry" => &address.billing_country,
        _ => "",
    }
}

/// Valide l'adresse saisie. La sous-section facturation n'est exigée que
/// si la case "adresse de facturation identique" est décochée.
pub fn validate(address: &DeliveryAddress) -> Result<(), MissingField> {
    let mut required: Vec<(&'static str, &'static str)> = REQUIRED.to_vec();
    if !address.same_billing_address {
        required.extend_from_slice(REQUIRED_BILLING);
    }

    for (field_id, label) in required {
        if field_value(address, field_id).trim().is_empty() {
            return Err(MissingField { field_id, label });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_delivery() -> DeliveryAddress {
        DeliveryAddress {
            first_name: "Jean".into(),
            last_name: "Martin".into(),
            email: "jean@exemple.fr".into(),
            phone: "0612345678".into(),
            address: "1 rue des Lilas".into(),
            postal_code: "75011".into(),
            city: "Paris".into(),
            country: "France".into(),
            same_billing_address: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_delivery_with_same_billing_passes() {
        assert_eq!(validate(&complete_delivery()), Ok(()));
    }

    #[test]
    fn test_short_circuits_on_first_missing_field() {
        let mut address = complete_delivery();
        address.email = "  ".into();
        address.city = String::new();
        let err = validate(&address).unwrap_err();
        // email vient avant city dans l'ordre du formulaire
        assert_eq!(err.field_id, "email");
    }

    #[test]
    fn test_billing_required_only_when_different() {
        let mut address = complete_delivery();
        address.same_billing_address = false;
        let err = validate(&address).unwrap_err();
        assert_eq!(err.field_id, "billingFirstName");

        address.billing_first_name = "Claire".into();
        address.billing_last_name = "Martin".into();
        address.billing_address = "2 rue du Four".into();
        address.billing_postal_code = "69001".into();
        address.billing_city = "Lyon".into();
        address.billing_country = "France".into();
        assert_eq!(validate(&address), Ok(()));
    }

    #[test]
    fn test_optional_company_fields_do_not_block() {
        let mut address = complete_delivery();
        address.company_name = String::new();
        address.siren = String::new();
        address.siret = String::new();
        address.notes = String::new();
        assert_eq!(validate(&address), Ok(()));
    }
}
