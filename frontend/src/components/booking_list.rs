use shared::filters::TemporalFilter;
use shared::Booking;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingListProps {
    /// Already filtered and ordered for display
    pub bookings: Vec<Booking>,
    /// Size of the unfiltered list, to tell "empty agenda" from "no results"
    pub total_count: usize,
    pub filter: TemporalFilter,
    pub query: String,
    pub category: Option<String>,
    pub categories: Vec<String>,
    pub on_filter: Callback<TemporalFilter>,
    pub on_query: Callback<String>,
    pub on_category: Callback<Option<String>>,
    pub on_delete: Callback<i64>,
    pub on_mark_paid: Callback<i64>,
    pub on_clear_all: Callback<MouseEvent>,
    pub on_export: Callback<MouseEvent>,
}

const FILTERS: [(TemporalFilter, &str); 3] = [
    (TemporalFilter::All, "All"),
    (TemporalFilter::Today, "Today"),
    (TemporalFilter::ThisWeek, "This week"),
];

#[function_component(BookingList)]
pub fn booking_list(props: &BookingListProps) -> Html {
    let on_search_input = {
        let on_query = props.on_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_query.emit(input.value());
        })
    };

    let on_category_change = {
        let on_category = props.on_category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_category.emit((!value.is_empty()).then_some(value));
        })
    };

    let filter_buttons = FILTERS.iter().map(|(filter, label)| {
        let active = props.filter == *filter;
        let onclick = {
            let on_filter = props.on_filter.clone();
            let filter = *filter;
            Callback::from(move |_: MouseEvent| on_filter.emit(filter))
        };
        html! {
            <button
                class={if active { "filter-btn active" } else { "filter-btn" }}
                {onclick}
            >
                {*label}
            </button>
        }
    });

    let render_booking = |booking: &Booking| -> Html {
        let id = booking.id;
        let on_delete = {
            let on_delete = props.on_delete.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id))
        };
        let on_mark_paid = {
            let on_mark_paid = props.on_mark_paid.clone();
            Callback::from(move |_: MouseEvent| on_mark_paid.emit(id))
        };
        let paid = booking.is_paid();

        html! {
            <div class="booking" key={id.to_string()}>
                <div class="booking-header">
                    <span class="booking-service">{&booking.service_name}</span>
                    <span class={if paid { "payment-badge paid" } else { "payment-badge pending" }}>
                        {if paid { "Deposit paid" } else { "Deposit pending" }}
                    </span>
                    <button class="btn-delete" title="Delete booking" onclick={on_delete}>{"×"}</button>
                </div>
                <div class="booking-body">
                    <span class="booking-date">{&booking.date}</span>
                    <span class="booking-client">{booking.client_name()}</span>
                    <span class="booking-price">{format!("${:.2} (deposit ${:.2})", booking.price, booking.deposit)}</span>
                    {if let Some(phone) = booking.phone.as_ref() {
                        html! { <span class="booking-contact">{phone}</span> }
                    } else {
                        html! {}
                    }}
                    <span class="booking-notes">{&booking.notes}</span>
                </div>
                <div class="booking-actions">
                    <button class="btn btn-small" disabled={paid} onclick={on_mark_paid}>
                        {if paid { "Paid" } else { "Mark deposit paid" }}
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <section class="list-card">
            <div class="list-header">
                <h2>{"Bookings"}</h2>
                <div class="list-tools">
                    <button class="btn btn-small" onclick={props.on_export.clone()} title="Export the selected day as a spreadsheet">
                        {"Export day"}
                    </button>
                    <button class="btn btn-small btn-danger" onclick={props.on_clear_all.clone()}>
                        {"Clear all"}
                    </button>
                </div>
            </div>

            <div class="list-filters">
                <div class="filter-group">{for filter_buttons}</div>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search client or service..."
                    value={props.query.clone()}
                    oninput={on_search_input}
                />
                <select class="category-select" onchange={on_category_change}>
                    <option value="" selected={props.category.is_none()}>{"All categories"}</option>
                    {for props.categories.iter().map(|category| html! {
                        <option
                            value={category.clone()}
                            selected={props.category.as_deref() == Some(category.as_str())}
                        >
                            {category}
                        </option>
                    })}
                </select>
            </div>

            {if props.total_count == 0 {
                html! {
                    <div class="empty-state">
                        <h3>{"No bookings yet"}</h3>
                        <p>{"Book the first appointment using the form"}</p>
                    </div>
                }
            } else if props.bookings.is_empty() {
                html! {
                    <div class="empty-state no-results">
                        <p>{"No bookings match the current filters"}</p>
                    </div>
                }
            } else {
                html! {
                    <div class="booking-list">
                        {for props.bookings.iter().map(render_booking)}
                    </div>
                }
            }}
        </section>
    }
}
