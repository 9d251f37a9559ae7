use crate::domain::cart::identity::{self, ProductIdentity};
use crate::domain::checkout::gate::{self, MINIMUM_ORDER};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Button, QuantityInput};
use crate::shared::format::{format_euros_rounded, format_price};
use contracts::domain::product::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Ligne du panier projetée en valeurs possédées pour l'affichage.
#[derive(Clone)]
struct CartLine {
    id: String,
    product: Product,
    quantity: u32,
    line_total: f64,
}

/// Panneau des produits sélectionnés : lignes, quantités modifiables,
/// suppression et total courant.
#[component]
pub fn SelectedProductsPanel() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext manquant");

    let lines = move || {
        ctx.cart.with(|cart| {
            cart.list()
                .iter()
                .map(|entry| CartLine {
                    id: identity::display_id(&entry.product),
                    product: (*entry.product).clone(),
                    quantity: entry.quantity,
                    line_total: entry.line_total(),
                })
                .collect::<Vec<_>>()
        })
    };

    let is_empty = move || ctx.cart.with(|cart| cart.is_empty());
    let total = move || ctx.cart.with(|cart| cart.total_cost());

    view! {
        <div class="cart-panel">
            <h3 class="cart-panel__title">"Produits sélectionnés"</h3>
            <Show
                when=move || !is_empty()
                fallback=|| view! {
                    <p class="cart-panel__empty">"Aucun produit sélectionné pour le moment."</p>
                }
            >
                <ul class="cart-panel__lines">
                    <For
                        each=lines
                        key=|line| (line.id.clone(), line.quantity)
                        children=move |line| {
                            let update_product = line.product.clone();
                            let remove_identity = ProductIdentity::of(&line.product);
                            let unit_label = match line.product.unit_price {
                                Some(price) => format_price(price),
                                None => "Prix sur demande".to_string(),
                            };
                            view! {
                                <li class="cart-panel__line">
                                    <span class="cart-panel__name">
                                        {line.product.commercial_name.clone()}
                                    </span>
                                    <span class="cart-panel__unit">{unit_label}</span>
                                    <QuantityInput
                                        value=Signal::stored(line.quantity)
                                        on_change=Callback::new(move |q| {
                                            ctx.update_quantity(&update_product, q);
                                        })
                                        id=format!("cart-qty-{}", line.id)
                                    />
                                    <span class="cart-panel__line-total">
                                        {format_price(line.line_total)}
                                    </span>
                                    <Button
                                        variant="ghost".to_string()
                                        class="cart-panel__remove".to_string()
                                        title="Retirer du panier".to_string()
                                        on_click=Callback::new(move |_| {
                                            ctx.remove_from_cart(&remove_identity);
                                        })
                                    >
                                        "×"
                                    </Button>
                                </li>
                            }
                        }
                    />
                </ul>
                <div class="cart-panel__total">
                    <span>"Total estimé"</span>
                    <span>{move || format_price(total())}</span>
                </div>
            </Show>
        </div>
    }
}

/// Jauge de progression vers le panier minimum.
///
/// La barre se remplit jusqu'à 100 % et passe en rouge dans la zone
/// critique juste sous le seuil. Chaque variation du total déclenche une
/// brève pulsation.
#[component]
pub fn CostGauge() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext manquant");

    let percentage = move || ctx.cart.with(gate::gauge_percentage);
    let total = move || ctx.cart.with(|cart| cart.total_cost());
    let count = move || ctx.cart.with(|cart| cart.total_count());
    let decision = move || ctx.cart.with(gate::can_advance_from_catalog);
    let show_shortfall = move || {
        let below = !decision().allowed;
        below && count() > 0
    };

    let pulsing = RwSignal::new(false);

    // Pulsation à chaque variation du total (la première dérivation ne
    // compte pas, le panier vient d'être affiché).
    Effect::new(move |previous: Option<f64>| {
        let current = total();
        if let Some(previous) = previous {
            if previous != current {
                pulsing.set(true);
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(600).await;
                    pulsing.set(false);
                });
            }
        }
        current
    });

    let gauge_class = move || {
        let mut class = String::from("gauge__bar");
        if gate::gauge_is_critical(percentage()) {
            class.push_str(" gauge__bar--critical");
        }
        if pulsing.get() {
            class.push_str(" gauge__bar--updated");
        }
        class
    };

    view! {
        <div class="gauge">
            <div class="gauge__track">
                <div
                    class=gauge_class
                    style=move || format!("width: {}%;", percentage())
                ></div>
            </div>
            <div class="gauge__labels">
                <span class="gauge__amount">
                    {move || format_euros_rounded(total())}
                    " / "
                    {format_euros_rounded(MINIMUM_ORDER)}
                </span>
                <span class="gauge__count">
                    {move || format!("{} article(s)", count())}
                </span>
                <Show when=show_shortfall>
                    <span class="gauge__shortfall">
                        {move || format!("Encore {}€ pour atteindre le minimum", decision().shortfall)}
                    </span>
                </Show>
            </div>
        </div>
    }
}
