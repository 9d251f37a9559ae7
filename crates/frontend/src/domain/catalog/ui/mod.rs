pub mod product_card;

use crate::domain::cart::identity;
use crate::domain::cart::ui::{CostGauge, SelectedProductsPanel};
use crate::domain::catalog::color::FrameColor;
use crate::domain::catalog::display_category_name;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Button, Checkbox, FilterSelect, TextArea};
use leptos::prelude::*;
use product_card::ProductCard;

/// Étape 1 : filtres, grille de produits paginée, panier et jauge.
#[component]
pub fn CatalogStep() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext manquant");

    let category_options = move || {
        ctx.catalog.with(|catalog| {
            catalog
                .all_categories()
                .iter()
                .map(|c| (c.clone(), display_category_name(c)))
                .collect::<Vec<_>>()
        })
    };

    let color_options = move || {
        let category = ctx.selection.with(|s| s.category.clone());
        ctx.catalog.with(|catalog| {
            catalog
                .colors_in(category.as_deref())
                .into_iter()
                .map(|c| (c.as_str().to_string(), c.as_str().to_string()))
                .collect::<Vec<_>>()
        })
    };

    let size_options = move || {
        ctx.scoped_sizes
            .get()
            .into_iter()
            .map(|s| (s.clone(), s))
            .collect::<Vec<_>>()
    };

    let has_category = move || ctx.selection.with(|s| s.category.is_some());

    // Colonnes clonées hors de la vue filtrée : les vues ne retiennent
    // que des valeurs possédées, jamais les Rc du signal local.
    let visible_products = move || {
        let pagination = ctx.pagination.get();
        ctx.filtered.with(|view| {
            pagination
                .visible_slice(&view.products)
                .iter()
                .map(|p| (**p).clone())
                .collect::<Vec<_>>()
        })
    };

    let total_filtered = move || ctx.filtered.with(|view| view.products.len());
    let has_results = move || total_filtered() > 0;
    let has_more = move || ctx.pagination.get().has_more(total_filtered());
    let next_chunk = move || ctx.pagination.get().next_chunk_len(total_filtered());

    view! {
        <div class="catalog">
            <div class="catalog__filters">
                <FilterSelect
                    label="Matière".to_string()
                    placeholder="Choisir une matière...".to_string()
                    value=Signal::derive(move || {
                        ctx.selection.with(|s| s.category.clone().unwrap_or_default())
                    })
                    options=Signal::derive(category_options)
                    on_change=Callback::new(move |value: String| {
                        ctx.set_category((!value.is_empty()).then_some(value));
                    })
                    id="filter-category".to_string()
                />
                <Show when=has_category>
                    <FilterSelect
                        label="Coloris".to_string()
                        placeholder="Tous les coloris".to_string()
                        value=Signal::derive(move || {
                            ctx.selection
                                .with(|s| s.color.map(|c| c.as_str().to_string()).unwrap_or_default())
                        })
                        options=Signal::derive(color_options)
                        on_change=Callback::new(move |value: String| {
                            ctx.set_color(FrameColor::parse(&value));
                        })
                        id="filter-color".to_string()
                    />
                    <FilterSelect
                        label="Format".to_string()
                        placeholder="Tous les formats".to_string()
                        value=Signal::derive(move || {
                            ctx.selection.with(|s| s.size.clone().unwrap_or_default())
                        })
                        options=Signal::derive(size_options)
                        on_change=Callback::new(move |value: String| {
                            ctx.set_size((!value.is_empty()).then_some(value));
                        })
                        id="filter-size".to_string()
                    />
                </Show>
                <div class="catalog__binary-filters">
                    <Show when=move || ctx.filtered.with(|v| v.eligible.glass)>
                        <Checkbox
                            label="Avec vitre".to_string()
                            checked=Signal::derive(move || ctx.selection.with(|s| s.glass_only))
                            on_change=Callback::new(move |on| ctx.set_glass_only(on))
                            id="filter-glass".to_string()
                        />
                    </Show>
                    <Show when=move || ctx.filtered.with(|v| v.eligible.raised_base)>
                        <Checkbox
                            label="Avec rehausse".to_string()
                            checked=Signal::derive(move || ctx.selection.with(|s| s.raised_only))
                            on_change=Callback::new(move |on| ctx.set_raised_only(on))
                            id="filter-raised".to_string()
                        />
                    </Show>
                    <Show when=move || ctx.filtered.with(|v| v.eligible.easel)>
                        <Checkbox
                            label="Chevalet possible".to_string()
                            checked=Signal::derive(move || ctx.selection.with(|s| s.easel_only))
                            on_change=Callback::new(move |on| ctx.set_easel_only(on))
                            id="filter-easel".to_string()
                        />
                    </Show>
                </div>
            </div>

            <CostGauge />

            <div class="catalog__grid">
                <Show
                    when=has_category
                    fallback=|| view! {
                        <p class="catalog__hint">
                            "Choisissez une matière pour afficher les produits."
                        </p>
                    }
                >
                    <Show
                        when=has_results
                        fallback=|| view! {
                            <p class="catalog__hint">
                                "Aucun produit ne correspond à ces filtres."
                            </p>
                        }
                    >
                        <div class="product-grid">
                            <For
                                each=visible_products
                                key=|p| identity::display_id(p)
                                children=move |product| view! { <ProductCard product /> }
                            />
                        </div>
                        <Show when=has_more>
                            <div class="catalog__load-more">
                                <Button
                                    variant="secondary".to_string()
                                    on_click=Callback::new(move |_| ctx.load_more())
                                >
                                    {move || format!("Afficher {} produits de plus", next_chunk())}
                                </Button>
                            </div>
                        </Show>
                    </Show>
                </Show>
            </div>

            <SelectedProductsPanel />

            <TextArea
                label="Notes sur les produits"
                value=ctx.product_notes
                on_change=Callback::new(move |value| ctx.product_notes.set(value))
                id="productNotes"
                placeholder="Précisions sur les produits sélectionnés (optionnel)".to_string()
            />

            <div class="wizard__actions">
                <Button on_click=Callback::new(move |_| ctx.go_to_delivery())>
                    "Continuer vers la livraison"
                </Button>
            </div>
        </div>
    }
}
