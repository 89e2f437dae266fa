use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub on_confirm: Callback<MouseEvent>,
    pub on_cancel: Callback<MouseEvent>,
}

/// Generic yes/no dialog; backdrop click counts as cancel.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(e);
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3>{&props.title}</h3>
                <p>{&props.text}</p>
                <div class="modal-buttons">
                    <button class="btn btn-danger" onclick={props.on_confirm.clone()}>
                        {&props.confirm_label}
                    </button>
                    <button class="btn btn-secondary" onclick={props.on_cancel.clone()}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
