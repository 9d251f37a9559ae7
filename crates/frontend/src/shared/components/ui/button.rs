use leptos::prelude::*;

/// Bouton avec variantes (primary, secondary, ghost)
#[component]
pub fn Button(
    /// Variante : "primary" (défaut), "secondary" ou "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Classes CSS additionnelles
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// État désactivé (réactif)
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Info-bulle (réactive), vide = pas de `title`
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Gestionnaire de clic
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(), additional_class())
            disabled=move || disabled.get()
            title=move || title.get().unwrap_or_default()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
