use leptos::prelude::*;

/// Service centralisé pour le voile de chargement.
///
/// Toute branche d'erreur doit repasser par [`LoadingService::hide`] :
/// un voile qui reste affiché bloque l'application entière.
#[derive(Clone, Copy)]
pub struct LoadingService {
    is_visible: RwSignal<bool>,
}

impl LoadingService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.is_visible.set(true);
    }

    pub fn hide(&self) {
        self.is_visible.set(false);
    }
}

impl Default for LoadingService {
    fn default() -> Self {
        Self::new()
    }
}

/// Voile de chargement plein écran, piloté par [`LoadingService`].
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let loading = use_context::<LoadingService>().expect("LoadingService not provided in context");

    view! {
        {move || {
            if loading.is_visible.get() {
                view! {
                    <div class="loading-overlay loading-overlay--active">
                        <div class="loading-overlay__spinner"></div>
                        <p>"Chargement en cours..."</p>
                    </div>
                }
                .into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
