use leptos::prelude::*;

/// Case à cocher avec libellé accolé
#[component]
pub fn Checkbox(
    /// Libellé
    #[prop(into)]
    label: Signal<String>,
    /// État coché (réactif)
    #[prop(into)]
    checked: Signal<bool>,
    /// Gestionnaire de changement
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// `id` de l'input
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
