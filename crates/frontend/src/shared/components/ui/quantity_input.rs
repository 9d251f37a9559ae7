use crate::domain::cart::store::{MAX_QUANTITY, MIN_QUANTITY};
use leptos::prelude::*;

/// Saisie de quantité bornée à [1, 99].
///
/// La normalisation se fait ici, côté saisie : le panier, lui, rejette
/// toute valeur hors bornes au lieu de la corriger. Une saisie illisible
/// n'émet rien.
#[component]
pub fn QuantityInput(
    /// Quantité affichée (réactive)
    #[prop(into)]
    value: Signal<u32>,
    /// Émis à chaque saisie valide, déjà bornée
    on_change: Callback<u32>,
    /// `id` de l'input
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <input
            id=input_id
            type="number"
            class="quantity-input"
            min=MIN_QUANTITY.to_string()
            max=MAX_QUANTITY.to_string()
            prop:value=move || value.get().to_string()
            on:change=move |ev| {
                if let Ok(parsed) = event_target_value(&ev).trim().parse::<u32>() {
                    on_change.run(parsed.clamp(MIN_QUANTITY, MAX_QUANTITY));
                }
            }
        />
    }
}
