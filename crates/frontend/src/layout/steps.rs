use leptos::prelude::*;

/// Les trois étapes du parcours de demande de devis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Products,
    Delivery,
    Confirmation,
}

impl WizardStep {
    pub fn index(self) -> u8 {
        match self {
            WizardStep::Products => 1,
            WizardStep::Delivery => 2,
            WizardStep::Confirmation => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Products => "Sélection des produits",
            WizardStep::Delivery => "Adresse de livraison",
            WizardStep::Confirmation => "Confirmation",
        }
    }
}

/// Bandeau d'étapes (1-2-3) avec états actif / complété.
#[component]
pub fn StepHeader(#[prop(into)] current: Signal<WizardStep>) -> impl IntoView {
    let steps = [
        WizardStep::Products,
        WizardStep::Delivery,
        WizardStep::Confirmation,
    ];

    view! {
        <div class="steps">
            {steps
                .into_iter()
                .map(|step| {
                    let class = move || {
                        let active = current.get();
                        if step.index() < active.index() {
                            "step step--completed"
                        } else if step == active {
                            "step step--active"
                        } else {
                            "step"
                        }
                    };
                    view! {
                        <div class=class>
                            <span class="step__number">{step.index()}</span>
                            <span class="step__title">{step.title()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_indices() {
        assert_eq!(WizardStep::Products.index(), 1);
        assert_eq!(WizardStep::Delivery.index(), 2);
        assert_eq!(WizardStep::Confirmation.index(), 3);
        assert_eq!(WizardStep::default(), WizardStep::Products);
    }
}
