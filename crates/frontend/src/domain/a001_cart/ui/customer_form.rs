use crate::domain::a001_cart::CartController;
use contracts::domain::a002_bill::PaymentType;
use leptos::prelude::*;
use thaw::*;

/// Customer details and the bill button
#[component]
pub fn CustomerForm(controller: CartController) -> impl IntoView {
    let state = controller.state();
    let customer_name = RwSignal::new(String::new());
    let customer_phone = RwSignal::new(String::new());
    let payment_code = RwSignal::new(PaymentType::default().code().to_string());

    Effect::new(move || {
        let name = customer_name.get();
        let phone = customer_phone.get();
        let payment_type = PaymentType::from_code(&payment_code.get()).unwrap_or_default();
        untrack(move || {
            state.update(|s| {
                s.draft.customer_name = name;
                s.draft.customer_phone = phone;
                s.draft.payment_type = payment_type;
            });
        });
    });

    let is_submitting = Signal::derive(move || state.with(|s| s.is_submitting));

    view! {
        <div class="customer-form">
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Customer name"</Label>
                <Input value=customer_name placeholder="Walk-in customer" />

                <Label>"Phone"</Label>
                <Input value=customer_phone placeholder="03XX-XXXXXXX" />

                <Label>"Payment method"</Label>
                <Select value=payment_code>
                    {PaymentType::all()
                        .into_iter()
                        .map(|p| view! { <option value=p.code()>{p.display_name()}</option> })
                        .collect_view()}
                </Select>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| controller.request_bill_generation()
                    disabled=is_submitting
                >
                    {move || if is_submitting.get() { "Generating..." } else { "Generate Bill" }}
                </Button>
            </Flex>
        </div>
    }
}
