use crate::domain::catalog::api as catalog_api;
use crate::domain::catalog::ui::CatalogStep;
use crate::domain::checkout::ui::{ConfirmationStep, SuccessModal};
use crate::domain::delivery::ui::DeliveryStep;
use crate::layout::loading::LoadingOverlay;
use crate::layout::modal::Modal;
use crate::layout::steps::{StepHeader, WizardStep};
use crate::layout::{global_context::AppGlobalContext, LoadingService, ModalService};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // L'état applicatif complet passe par le contexte.
    provide_context(AppGlobalContext::new());
    provide_context(LoadingService::new());
    provide_context(ModalService::new());

    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext manquant");
    let loading = use_context::<LoadingService>().expect("LoadingService manquant");

    // Chargement initial du catalogue. Un échec ici est fatal : l'écran
    // de diagnostic remplace l'application.
    loading.show();
    spawn_local(async move {
        match catalog_api::load_catalog().await {
            Ok((index, sizes)) => ctx.install_catalog(index, sizes),
            Err(e) => {
                log::error!("Chargement du catalogue échoué: {}", e);
                ctx.startup_error.set(Some(e));
            }
        }
        loading.hide();
    });

    let startup_error = move || ctx.startup_error.get();

    view! {
        <main class="app">
            <header class="app__header">
                <h1 class="app__title">"Demande de devis"</h1>
            </header>

            <Show
                when=move || startup_error().is_none()
                fallback=move || view! {
                    <div class="app__fatal">
                        <h2>"Le catalogue n'a pas pu être chargé"</h2>
                        <p>{move || startup_error().unwrap_or_default()}</p>
                        <ul class="app__fatal-hints">
                            <li>"Vérifiez votre connexion internet."</li>
                            <li>"Rechargez la page dans quelques instants."</li>
                            <li>"Si le problème persiste, contactez notre équipe."</li>
                        </ul>
                    </div>
                }
            >
                <StepHeader current=ctx.step />
                {move || match ctx.step.get() {
                    WizardStep::Products => view! { <CatalogStep /> }.into_any(),
                    WizardStep::Delivery => view! { <DeliveryStep /> }.into_any(),
                    WizardStep::Confirmation => view! { <ConfirmationStep /> }.into_any(),
                }}
            </Show>

            <LoadingOverlay />
            <Modal>
                <SuccessModal />
            </Modal>
        </main>
    }
}
