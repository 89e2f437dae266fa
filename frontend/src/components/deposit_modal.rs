use shared::CatalogEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DepositModalProps {
    pub entry: CatalogEntry,
    pub client_name: String,
    pub cancellation_policy: String,
    pub on_confirm: Callback<MouseEvent>,
    /// Cancel button, backdrop click and dismissal all land here; declining
    /// is a normal outcome, not an error
    pub on_decline: Callback<MouseEvent>,
}

/// Deposit confirmation step shown between form submission and persisting
/// the booking. Resolves exactly once: the app closes it on either outcome,
/// and the rest of the page stays interactive while it is open.
#[function_component(DepositModal)]
pub fn deposit_modal(props: &DepositModalProps) -> Html {
    let on_backdrop_click = {
        let on_decline = props.on_decline.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_decline.emit(e);
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let entry = &props.entry;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3>{"Confirm your deposit"}</h3>
                <p class="modal-intro">{format!("{}, please review before booking:", props.client_name)}</p>

                <dl class="deposit-summary">
                    <dt>{"Service"}</dt>
                    <dd>{&entry.name}</dd>
                    <dt>{"Duration"}</dt>
                    <dd>{format!("{} min", entry.duration_min)}</dd>
                    <dt>{"Total price"}</dt>
                    <dd>{format!("${:.2}", entry.price)}</dd>
                    <dt>{"Deposit due now"}</dt>
                    <dd class="deposit-amount">{format!("${:.2} ({}%)", entry.deposit, entry.deposit_pct)}</dd>
                </dl>

                {if !props.cancellation_policy.is_empty() {
                    html! { <p class="cancellation-policy">{&props.cancellation_policy}</p> }
                } else {
                    html! {}
                }}

                <div class="modal-buttons">
                    <button class="btn btn-primary" onclick={props.on_confirm.clone()}>
                        {"Confirm booking"}
                    </button>
                    <button class="btn btn-secondary" onclick={props.on_decline.clone()}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
