use shared::validate::BookingForm;
use shared::CatalogEntry;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub form: BookingForm,
    pub services: Vec<CatalogEntry>,
    pub catalog_ready: bool,
    /// Disabled while a confirmation modal is open
    pub busy: bool,
    pub on_update: Callback<BookingForm>,
    pub on_submit: Callback<()>,
}

#[function_component(BookingFormView)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let on_first_name = {
        let form = props.form.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.first_name = input.value();
            on_update.emit(next);
        })
    };

    let on_last_name = {
        let form = props.form.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.last_name = input.value();
            on_update.emit(next);
        })
    };

    let on_date = {
        let form = props.form.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.date = input.value();
            on_update.emit(next);
        })
    };

    let on_service = {
        let form = props.form.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.service_id = select.value();
            on_update.emit(next);
        })
    };

    let on_phone = {
        let form = props.form.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.phone = input.value();
            on_update.emit(next);
        })
    };

    let on_email = {
        let form = props.form.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.email = input.value();
            on_update.emit(next);
        })
    };

    let on_notes = {
        let form = props.form.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.notes = textarea.value();
            on_update.emit(next);
        })
    };

    let on_sms = {
        let form = props.form.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.sms_reminder = input.checked();
            on_update.emit(next);
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="form-card">
            <h2>{"Book an appointment"}</h2>

            <form class="booking-form" {onsubmit}>
                <div class="form-row">
                    <div class="form-group">
                        <label for="first-name">{"First name"}</label>
                        <input
                            type="text"
                            id="first-name"
                            placeholder="Ana"
                            value={props.form.first_name.clone()}
                            onchange={on_first_name}
                            disabled={props.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="last-name">{"Last name"}</label>
                        <input
                            type="text"
                            id="last-name"
                            placeholder="Suarez"
                            value={props.form.last_name.clone()}
                            onchange={on_last_name}
                            disabled={props.busy}
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="booking-date">{"Date"}</label>
                    <input
                        type="text"
                        id="booking-date"
                        placeholder="DD/MM/YYYY or pick a day on the calendar"
                        value={props.form.date.clone()}
                        onchange={on_date}
                        disabled={props.busy}
                    />
                </div>

                <div class="form-group">
                    <label for="service">{"Service"}</label>
                    <select id="service" onchange={on_service} disabled={props.busy}>
                        <option value="" selected={props.form.service_id.is_empty()}>
                            {if props.catalog_ready { "Choose a service..." } else { "Loading catalog..." }}
                        </option>
                        {for props.services.iter().map(|entry| {
                            let label = if entry.popular {
                                format!("★ {} - ${:.2} ({} min)", entry.name, entry.price, entry.duration_min)
                            } else {
                                format!("{} - ${:.2} ({} min)", entry.name, entry.price, entry.duration_min)
                            };
                            html! {
                                <option value={entry.id.clone()} selected={props.form.service_id == entry.id}>
                                    {label}
                                </option>
                            }
                        })}
                    </select>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="phone">{"Phone (optional)"}</label>
                        <input
                            type="tel"
                            id="phone"
                            placeholder="555-0101"
                            value={props.form.phone.clone()}
                            onchange={on_phone}
                            disabled={props.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email (optional)"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="ana@example.com"
                            value={props.form.email.clone()}
                            onchange={on_email}
                            disabled={props.busy}
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="notes">{"Notes (optional)"}</label>
                    <textarea
                        id="notes"
                        placeholder="Allergies, preferences..."
                        value={props.form.notes.clone()}
                        onchange={on_notes}
                        disabled={props.busy}
                    />
                </div>

                <div class="form-group checkbox-group">
                    <label>
                        <input
                            type="checkbox"
                            checked={props.form.sms_reminder}
                            onchange={on_sms}
                            disabled={props.busy}
                        />
                        {" Send me an SMS reminder"}
                    </label>
                </div>

                <button type="submit" class="btn btn-primary" disabled={props.busy}>
                    {"Book appointment"}
                </button>
            </form>
        </section>
    }
}
