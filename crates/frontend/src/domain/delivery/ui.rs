use crate::layout::global_context::AppGlobalContext;
use crate::layout::steps::WizardStep;
use crate::shared::components::ui::{Button, Checkbox, TextArea, TextInput};
use contracts::domain::order::DeliveryAddress;
use leptos::prelude::*;

/// Étape 2 : formulaire d'adresse de livraison et, si besoin, de
/// facturation.
///
/// Les `id` des champs sont ceux que la validation connaît : c'est par
/// eux que le refocus retrouve le premier champ manquant.
#[component]
pub fn DeliveryStep() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext manquant");

    // Un champ = un setter sur l'adresse du contexte.
    let field = move |apply: fn(&mut DeliveryAddress, String)| {
        Callback::new(move |value: String| ctx.address.update(|a| apply(a, value)))
    };

    let same_billing = Signal::derive(move || ctx.address.with(|a| a.same_billing_address));

    let on_same_billing = Callback::new(move |checked: bool| {
        ctx.address.update(|a| {
            a.same_billing_address = checked;
            if checked {
                // le sous-formulaire disparaît, ses valeurs n'ont plus cours
                a.billing_first_name.clear();
                a.billing_last_name.clear();
                a.billing_company_name.clear();
                a.billing_siren.clear();
                a.billing_siret.clear();
                a.billing_address.clear();
                a.billing_postal_code.clear();
                a.billing_city.clear();
                a.billing_country.clear();
            }
        });
    });

    view! {
        <div class="delivery-form">
            <h3 class="delivery-form__title">"Adresse de livraison"</h3>

            <div class="form__row">
                <TextInput
                    label="Prénom"
                    value=Signal::derive(move || ctx.address.with(|a| a.first_name.clone()))
                    on_change=field(|a, v| a.first_name = v)
                    id="firstName"
                    required=true
                />
                <TextInput
                    label="Nom"
                    value=Signal::derive(move || ctx.address.with(|a| a.last_name.clone()))
                    on_change=field(|a, v| a.last_name = v)
                    id="lastName"
                    required=true
                />
            </div>

            <div class="form__row">
                <TextInput
                    label="Société"
                    value=Signal::derive(move || ctx.address.with(|a| a.company_name.clone()))
                    on_change=field(|a, v| a.company_name = v)
                    id="companyName"
                />
                <TextInput
                    label="SIREN"
                    value=Signal::derive(move || ctx.address.with(|a| a.siren.clone()))
                    on_change=field(|a, v| a.siren = v)
                    id="siren"
                />
                <TextInput
                    label="SIRET"
                    value=Signal::derive(move || ctx.address.with(|a| a.siret.clone()))
                    on_change=field(|a, v| a.siret = v)
                    id="siret"
                />
            </div>

            <div class="form__row">
                <TextInput
                    label="Email"
                    value=Signal::derive(move || ctx.address.with(|a| a.email.clone()))
                    on_change=field(|a, v| a.email = v)
                    id="email"
                    required=true
                    input_type="email".to_string()
                />
                <TextInput
                    label="Téléphone"
                    value=Signal::derive(move || ctx.address.with(|a| a.phone.clone()))
                    on_change=field(|a, v| a.phone = v)
                    id="phone"
                    required=true
                    input_type="tel".to_string()
                />
            </div>

            <TextInput
                label="Adresse"
                value=Signal::derive(move || ctx.address.with(|a| a.address.clone()))
                on_change=field(|a, v| a.address = v)
                id="address"
                required=true
            />

            <div class="form__row">
                <TextInput
                    label="Code postal"
                    value=Signal::derive(move || ctx.address.with(|a| a.postal_code.clone()))
                    on_change=field(|a, v| a.postal_code = v)
                    id="postalCode"
                    required=true
                />
                <TextInput
                    label="Ville"
                    value=Signal::derive(move || ctx.address.with(|a| a.city.clone()))
                    on_change=field(|a, v| a.city = v)
                    id="city"
                    required=true
                />
                <TextInput
                    label="Pays"
                    value=Signal::derive(move || ctx.address.with(|a| a.country.clone()))
                    on_change=field(|a, v| a.country = v)
                    id="country"
                    required=true
                />
            </div>

            <TextArea
                label="Notes de livraison"
                value=Signal::derive(move || ctx.address.with(|a| a.notes.clone()))
                on_change=field(|a, v| a.notes = v)
                id="deliveryNotes"
                placeholder="Instructions particulières de livraison (optionnel)".to_string()
            />

            <Checkbox
                label="Adresse de facturation identique à la livraison".to_string()
                checked=same_billing
                on_change=on_same_billing
                id="sameBillingAddress".to_string()
            />

            <Show when=move || !same_billing.get()>
                <div class="delivery-form__billing">
                    <h3 class="delivery-form__title">"Adresse de facturation"</h3>

                    <div class="form__row">
                        <TextInput
                            label="Prénom"
                            value=Signal::derive(move || {
                                ctx.address.with(|a| a.billing_first_name.clone())
                            })
                            on_change=field(|a, v| a.billing_first_name = v)
                            id="billingFirstName"
                            required=true
                        />
                        <TextInput
                            label="Nom"
                            value=Signal::derive(move || {
                                ctx.address.with(|a| a.billing_last_name.clone())
                            })
                            on_change=field(|a, v| a.billing_last_name = v)
                            id="billingLastName"
                            required=true
                        />
                    </div>

                    <div class="form__row">
                        <TextInput
                            label="Société"
                            value=Signal::derive(move || {
                                ctx.address.with(|a| a.billing_company_name.clone())
                            })
                            on_change=field(|a, v| a.billing_company_name = v)
                            id="billingCompanyName"
                        />
                        <TextInput
                            label="SIREN"
                            value=Signal::derive(move || {
                                ctx.address.with(|a| a.billing_siren.clone())
                            })
                            on_change=field(|a, v| a.billing_siren = v)
                            id="billingSiren"
                        />
                        <TextInput
                            label="SIRET"
                            value=Signal::derive(move || {
                                ctx.address.with(|a| a.billing_siret.clone())
                            })
                            on_change=field(|a, v| a.billing_siret = v)
                            id="billingSiret"
                        />
                    </div>

                    <TextInput
                        label="Adresse"
                        value=Signal::derive(move || {
                            ctx.address.with(|a| a.billing_address.clone())
                        })
                        on_change=field(|a, v| a.billing_address = v)
                        id="billingAddress"
                        required=true
                    />

                    <div class="form__row">
                        <TextInput
                            label="Code postal"
                            value=Signal::derive(move || {
                                ctx.address.with(|a| a.billing_postal_code.clone())
                            })
                            on_change=field(|a, v| a.billing_postal_code = v)
                            id="billingPostalCode"
                            required=true
                        />
                        <TextInput
                            label="Ville"
                            value=Signal::derive(move || {
                                ctx.address.with(|a| a.billing_city.clone())
                            })
                            on_change=field(|a, v| a.billing_city = v)
                            id="billingCity"
                            required=true
                        />
                        <TextInput
                            label="Pays"
                            value=Signal::derive(move || {
                                ctx.address.with(|a| a.billing_country.clone())
                            })
                            on_change=field(|a, v| a.billing_country = v)
                            id="billingCountry"
                            required=true
                        />
                    </div>
                </div>
            </Show>

            <div class="wizard__actions">
                <Button
                    variant="secondary".to_string()
                    on_click=Callback::new(move |_| ctx.back_to(WizardStep::Products))
                >
                    "Retour aux produits"
                </Button>
                <Button on_click=Callback::new(move |_| ctx.go_to_confirmation())>
                    "Continuer vers la confirmation"
                </Button>
            </div>
        </div>
    }
}
