//! Soumission de la demande de devis.

use contracts::api::{OrderConfirmation, OrderResponse};
use contracts::domain::order::OrderPayload;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// POST `/api/order`. En cas d'échec le panier reste intact côté état :
/// l'utilisateur peut corriger et re-soumettre.
pub async fn submit_order(payload: &OrderPayload) -> Result<OrderConfirmation, String> {
    let response = Request::post(&api_url("/order"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize payload: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let data: OrderResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    data.into_result()
}
