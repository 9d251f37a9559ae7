//! Contrats partagés frontend ↔ backend du portail de devis.
//!
//! Les noms de champs `serde` suivent le format d'échange du backend
//! (`product_category`, `nom_commercial`, `code_produit`, ...) et ne
//! doivent pas être modifiés sans migration coordonnée.

pub mod api;
pub mod de;
pub mod domain;
