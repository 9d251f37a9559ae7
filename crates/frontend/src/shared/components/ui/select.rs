use leptos::prelude::*;

/// Sélecteur avec libellé et option vide de tête ("Toutes les ...").
///
/// La valeur vide représente "pas de filtre" ; `on_change` reçoit la
/// valeur brute, charge à l'appelant de traduire "" en `None`.
#[component]
pub fn FilterSelect(
    /// Libellé au-dessus du sélecteur
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Texte de l'option vide de tête
    #[prop(into)]
    placeholder: String,
    /// Valeur courante ("" = aucune)
    #[prop(into)]
    value: Signal<String>,
    /// Options : paires (valeur, libellé), réactives
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Gestionnaire de changement
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// `id` de l'élément `<select>`
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
