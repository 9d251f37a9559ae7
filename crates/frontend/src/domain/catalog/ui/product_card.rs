use crate::domain::cart::identity;
use crate::domain::catalog::color::extract_color;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Button, QuantityInput};
use crate::shared::format::format_price;
use contracts::domain::product::Product;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::Card;

/// Carte produit de la grille du catalogue.
///
/// La quantité saisie est locale à la carte tant que le produit n'est pas
/// au panier ; dès qu'il y est, la carte reflète la quantité du panier.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext manquant");

    let quantity = RwSignal::new(1u32);

    let card_product = product.clone();
    let in_cart = move || ctx.cart.with(|cart| cart.contains(&card_product));

    // Une ligne modifiée depuis le panneau du panier doit se refléter ici.
    let sync_product = product.clone();
    Effect::new(move |_| {
        if let Some(q) = ctx.cart.with(|cart| cart.quantity_of(&sync_product)) {
            quantity.set(q);
        }
    });

    let color_label = match extract_color(product.frame_type.as_deref()) {
        Some(color) => color.as_str().to_string(),
        None => product
            .frame_type
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "N/A".to_string()),
    };

    let price_label = match product.unit_price {
        Some(price) => format_price(price),
        None => "Prix sur demande".to_string(),
    };

    let input_id = format!("qty-{}", identity::display_id(&product));

    let add_product = product.clone();
    let on_add = Callback::new(move |_| {
        ctx.add_to_cart(Rc::new(add_product.clone()), quantity.get_untracked());
    });

    let in_cart_for_class = in_cart.clone();
    let in_cart_for_label = in_cart.clone();

    view! {
        <Card attr:class=move || {
            if in_cart_for_class() { "product-card product-card--selected" } else { "product-card" }
        }>
            <div class="product-card__header">
                <h3 class="product-card__name">{product.commercial_name.clone()}</h3>
                {product.code().map(|code| view! {
                    <span class="product-card__code">{code.to_string()}</span>
                })}
            </div>
            <div class="product-card__details">
                <span class="product-card__color">{"Coloris : "}{color_label}</span>
                {product.frame_size.clone().map(|size| view! {
                    <span class="product-card__size">{"Format : "}{size}</span>
                })}
            </div>
            <div class="product-card__badges">
                {product.glass.is_set().then(|| view! {
                    <span class="badge badge--glass">"Vitre"</span>
                })}
                {product.raised_base.is_set().then(|| view! {
                    <span class="badge badge--raised">"Rehausse"</span>
                })}
                {product.easel_capable.is_set().then(|| view! {
                    <span class="badge badge--easel">"Chevalet"</span>
                })}
            </div>
            <div class="product-card__price">{price_label}</div>
            <div class="product-card__actions">
                <QuantityInput
                    value=quantity
                    on_change=Callback::new(move |q| quantity.set(q))
                    id=input_id
                />
                <Button on_click=on_add>
                    {move || if in_cart_for_label() { "Mettre à jour" } else { "Ajouter au panier" }}
                </Button>
            </div>
        </Card>
    }
}
