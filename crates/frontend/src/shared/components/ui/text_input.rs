use leptos::prelude::*;

/// Champ texte du formulaire d'adresse
#[component]
pub fn TextInput(
    /// Libellé
    #[prop(into)]
    label: String,
    /// Valeur courante (réactive)
    #[prop(into)]
    value: Signal<String>,
    /// Gestionnaire de changement
    on_change: Callback<String>,
    /// `id` de l'input (sert aussi au refocus de validation)
    #[prop(into)]
    id: String,
    /// Champ obligatoire (ajoute l'astérisque au libellé)
    #[prop(optional)]
    required: bool,
    /// Type HTML ("text" par défaut, "email", "tel", ...)
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
) -> impl IntoView {
    let id_for_label = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=id_for_label>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                id=id
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                class="form__input"
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Zone de texte multi-lignes (notes produits, notes de livraison)
#[component]
pub fn TextArea(
    /// Libellé
    #[prop(into)]
    label: String,
    /// Valeur courante (réactive)
    #[prop(into)]
    value: Signal<String>,
    /// Gestionnaire de changement
    on_change: Callback<String>,
    /// `id` de la zone de texte
    #[prop(into)]
    id: String,
    /// Texte d'aide affiché dans la zone vide
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let id_for_label = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=id_for_label>
                {label}
            </label>
            <textarea
                id=id
                class="form__textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
