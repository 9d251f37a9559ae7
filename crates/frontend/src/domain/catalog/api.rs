//! Accès aux endpoints catalogue du backend.
//!
//! Toutes les réponses arrivent dans l'enveloppe `{success, ...}` ;
//! l'échec d'un des chargements initiaux est fatal au démarrage.

use super::color::FrameColor;
use super::index::CatalogIndex;
use contracts::api::{CategoriesResponse, ProductsResponse, SizesResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn get_categories() -> Result<Vec<String>, String> {
    let response = Request::get(&api_url("/categories"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: CategoriesResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    data.into_result()
}

pub async fn get_products() -> Result<Vec<contracts::domain::product::Product>, String> {
    let response = Request::get(&api_url("/products"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ProductsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    data.into_result()
}

async fn get_sizes_at(path: &str) -> Result<Vec<String>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SizesResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    data.into_result()
}

/// Toutes les tailles du catalogue.
pub async fn get_sizes() -> Result<Vec<String>, String> {
    get_sizes_at("/sizes").await
}

/// Tailles disponibles pour une catégorie.
pub async fn get_sizes_for_category(category: &str) -> Result<Vec<String>, String> {
    get_sizes_at(&format!("/sizes/{}", urlencoding::encode(category))).await
}

/// Tailles disponibles pour un couple (catégorie, coloris).
pub async fn get_sizes_for_color(category: &str, color: FrameColor) -> Result<Vec<String>, String> {
    get_sizes_at(&format!(
        "/sizes/{}/{}",
        urlencoding::encode(category),
        urlencoding::encode(color.as_str())
    ))
    .await
}

/// Chargement initial complet : catégories, produits, tailles.
///
/// Construit l'index immuable de la session. Toute erreur remonte telle
/// quelle : l'appelant affiche le diagnostic de démarrage.
pub async fn load_catalog() -> Result<(CatalogIndex, Vec<String>), String> {
    let categories = get_categories().await?;
    log::info!("Catégories chargées: {}", categories.len());

    let products = get_products().await?;
    log::info!("Produits chargés: {}", products.len());

    let sizes = get_sizes().await?;
    log::info!("Tailles chargées: {}", sizes.len());

    Ok((CatalogIndex::new(categories, products), sizes))
}
