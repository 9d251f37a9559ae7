use crate::domain::cart::identity;
use crate::domain::checkout::{api as checkout_api, assembler};
use crate::layout::global_context::{alert, AppGlobalContext};
use crate::layout::steps::WizardStep;
use crate::layout::{LoadingService, ModalService};
use crate::shared::components::ui::Button;
use crate::shared::format::format_price;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Ligne du récapitulatif, en valeurs possédées.
#[derive(Clone, PartialEq)]
struct SummaryLine {
    id: String,
    name: String,
    quantity: u32,
    line_total: f64,
}

/// Étape 3 : récapitulatif complet et envoi de la demande de devis.
///
/// Aucun montant définitif n'est affiché comme tel : le chiffrage du
/// devis reste à la main du commercial.
#[component]
pub fn ConfirmationStep() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext manquant");
    let loading = use_context::<LoadingService>().expect("LoadingService manquant");
    let modal = use_context::<ModalService>().expect("ModalService manquant");

    let lines = move || {
        ctx.cart.with(|cart| {
            cart.list()
                .iter()
                .map(|entry| SummaryLine {
                    id: identity::display_id(&entry.product),
                    name: entry.product.commercial_name.clone(),
                    quantity: entry.quantity,
                    line_total: entry.line_total(),
                })
                .collect::<Vec<_>>()
        })
    };

    let total = move || ctx.cart.with(|cart| cart.total_cost());
    let notes = move || ctx.product_notes.get();
    let address = move || ctx.address.get();

    let submit = move |_: leptos::ev::MouseEvent| {
        loading.show();
        spawn_local(async move {
            let payload = ctx.cart.with_untracked(|cart| {
                assembler::build_order(
                    cart,
                    &ctx.product_notes.get_untracked(),
                    &ctx.address.get_untracked(),
                )
            });
            match checkout_api::submit_order(&payload).await {
                Ok(confirmation) => {
                    ctx.confirmation.set(Some(confirmation));
                    modal.show();
                }
                Err(e) => {
                    // le panier reste intact, le client peut réessayer
                    log::error!("Envoi de la demande échoué: {}", e);
                    alert(&format!(
                        "L'envoi de la demande a échoué : {}. Veuillez réessayer.",
                        e
                    ));
                }
            }
            loading.hide();
        });
    };

    view! {
        <div class="confirmation">
            <h3 class="confirmation__title">"Récapitulatif de votre demande"</h3>

            <ul class="confirmation__lines">
                <For
                    each=lines
                    key=|line| line.id.clone()
                    children=|line| view! {
                        <li class="confirmation__line">
                            <span class="confirmation__name">{line.name}</span>
                            <span class="confirmation__quantity">
                                {format!("× {}", line.quantity)}
                            </span>
                            <span class="confirmation__total">
                                {format_price(line.line_total)}
                            </span>
                        </li>
                    }
                />
            </ul>

            <div class="confirmation__grand-total">
                <span>"Total estimé"</span>
                <span>{move || format_price(total())}</span>
                <span class="confirmation__disclaimer">"Devis à établir"</span>
            </div>

            <Show when=move || !notes().trim().is_empty()>
                <div class="confirmation__notes">
                    <h4>"Notes sur les produits"</h4>
                    <p>{notes}</p>
                </div>
            </Show>

            <div class="confirmation__address">
                <h4>"Adresse de livraison"</h4>
                {move || {
                    let a = address();
                    view! {
                        <p>
                            {format!("{} {}", a.first_name, a.last_name)}
                            {(!a.company_name.is_empty())
                                .then(|| format!(" ({})", a.company_name))}
                            <br />
                            {a.address.clone()}
                            <br />
                            {format!("{} {}, {}", a.postal_code, a.city, a.country)}
                            <br />
                            {format!("{} · {}", a.email, a.phone)}
                        </p>
                    }
                }}
            </div>

            <Show when=move || !address().same_billing_address>
                <div class="confirmation__address">
                    <h4>"Adresse de facturation"</h4>
                    {move || {
                        let a = address();
                        view! {
                            <p>
                                {format!("{} {}", a.billing_first_name, a.billing_last_name)}
                                {(!a.billing_company_name.is_empty())
                                    .then(|| format!(" ({})", a.billing_company_name))}
                                <br />
                                {a.billing_address.clone()}
                                <br />
                                {format!(
                                    "{} {}, {}",
                                    a.billing_postal_code, a.billing_city, a.billing_country,
                                )}
                            </p>
                        }
                    }}
                </div>
            </Show>

            <div class="wizard__actions">
                <Button
                    variant="secondary".to_string()
                    on_click=Callback::new(move |_| ctx.back_to(WizardStep::Delivery))
                >
                    "Retour à la livraison"
                </Button>
                <Button on_click=Callback::new(submit)>
                    "Envoyer la demande de devis"
                </Button>
            </div>
        </div>
    }
}

/// Contenu de la fenêtre de confirmation après un envoi abouti.
#[component]
pub fn SuccessModal() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext manquant");
    let modal = use_context::<ModalService>().expect("ModalService manquant");

    let confirmation = move || ctx.confirmation.get();

    let on_new_request = Callback::new(move |_| {
        modal.hide();
        ctx.reset_app();
    });

    view! {
        <div class="success-modal">
            <h3 class="success-modal__title">"Demande envoyée !"</h3>
            {move || confirmation().map(|c| view! {
                <div class="success-modal__body">
                    <p>
                        "Votre demande de devis n° "
                        <strong>{c.order_id.clone()}</strong>
                        " a bien été enregistrée. Notre équipe commerciale revient vers vous rapidement."
                    </p>
                    {c.sellsy_client_id.clone().map(|id| view! {
                        <p class="success-modal__crm">
                            {format!("Référence client : {}", id)}
                        </p>
                    })}
                    {c.sellsy_opportunity_id.clone().map(|id| view! {
                        <p class="success-modal__crm">
                            {format!("Référence commerciale : {}", id)}
                        </p>
                    })}
                    {c.sellsy_error.clone().map(|e| view! {
                        <p class="success-modal__warning">
                            {format!(
                                "Votre demande est enregistrée, mais sa transmission au \
                                 suivi commercial a rencontré un problème ({}). \
                                 Elle sera reprise manuellement.",
                                e,
                            )}
                        </p>
                    })}
                </div>
            })}
            <Button on_click=on_new_request>
                "Nouvelle demande"
            </Button>
        </div>
    }
}
