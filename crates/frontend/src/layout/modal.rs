use leptos::prelude::*;

/// Service pour le modal de confirmation de demande de devis.
///
/// Pas de fermeture au clic sur le voile : on en sort uniquement par
/// "Nouvelle demande", qui réinitialise l'application.
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
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

    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Conteneur de modal piloté par [`ModalService`].
#[component]
pub fn Modal(children: ChildrenFn) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        {move || {
            if modal.is_visible.get() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content">
                            {children()}
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
