mod components;
mod hooks;
mod services;

use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::calendar::{build_month_grid, next_month, previous_month, CalendarCell};
use shared::export::{bookings_for_day, day_report_csv, report_filename};
use shared::filters::{visible_bookings, TemporalFilter};
use shared::stats::compute_stats;
use shared::store::{add_booking, mark_paid, remove_booking, BookingStorage};
use shared::validate::{build_booking, validate_booking_form, BookingForm, BookingFormError};
use shared::{format_day, Booking, CatalogDocument, CatalogEntry};

use components::booking_form::BookingFormView;
use components::booking_list::BookingList;
use components::calendar::Calendar;
use components::confirm_dialog::ConfirmDialog;
use components::deposit_modal::DepositModal;
use components::stats_panel::StatsPanel;
use components::toast::{Toast, ToastHost, ToastKind};
use hooks::use_viewport::use_narrow_viewport;
use services::catalog::load_catalog;
use services::date_utils::{now_millis, now_rfc3339, today};
use services::download::download_bytes;
use services::logging::Logger;
use services::store::LocalBookingStorage;

/// What the currently open modal is asking the user to approve.
///
/// Holding at most one of these at a time is what makes every confirmation
/// resolve exactly once: both outcomes clear it, and nothing else opens one.
#[derive(Clone, PartialEq)]
enum PendingAction {
    /// Deposit confirmation for a validated submission; carries the catalog
    /// entry so the snapshot is taken from what the user saw
    ConfirmBooking(CatalogEntry),
    DeleteBooking(Booking),
    ClearAll,
}

/// Write the list to storage before the caller re-renders from it.
/// Returns whether the write took effect; failures surface as a warning.
fn persist(
    storage: &LocalBookingStorage,
    bookings: &[Booking],
    show_toast: &Callback<(ToastKind, String)>,
) -> bool {
    match storage.save_all(bookings) {
        Ok(()) => true,
        Err(e) => {
            Logger::warn_with_component("store", &e.to_string());
            show_toast.emit((
                ToastKind::Warning,
                "Changes could not be saved in this browser".to_string(),
            ));
            false
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let storage = use_memo((), |_| LocalBookingStorage);
    let catalog = use_state(|| Option::<CatalogDocument>::None);
    let bookings = use_state(Vec::<Booking>::new);
    let focus = use_state(|| {
        let now = today();
        (now.month(), now.year())
    });
    let selected_date = use_state(|| Option::<String>::None);
    let form = use_state(BookingForm::default);
    let pending = use_state(|| Option::<PendingAction>::None);
    let toast = use_state(|| Option::<Toast>::None);
    let filter = use_state(TemporalFilter::default);
    let query = use_state(String::new);
    let category = use_state(|| Option::<String>::None);
    let narrow = use_narrow_viewport();

    let show_toast = {
        let toast = toast.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            toast.set(Some(Toast {
                id: now_millis(),
                kind,
                message,
            }));
        })
    };

    // Startup: restore the snapshot, then fetch the catalog
    {
        let storage = storage.clone();
        let bookings = bookings.clone();
        let catalog = catalog.clone();
        let show_toast = show_toast.clone();
        use_effect_with((), move |_| {
            let restored = storage.load();
            Logger::info_with_component("app", &format!("restored {} bookings", restored.len()));
            bookings.set(restored);
            show_toast.emit((ToastKind::Info, "AgendaPro ready".to_string()));
            spawn_local(async move {
                match load_catalog().await {
                    Ok(doc) => catalog.set(Some(doc)),
                    Err(e) => {
                        Logger::warn_with_component("catalog", &e);
                        show_toast.emit((
                            ToastKind::Warning,
                            "Service catalog unavailable, starting with an empty catalog"
                                .to_string(),
                        ));
                        catalog.set(Some(CatalogDocument::fallback()));
                    }
                }
            });
            || ()
        });
    }

    // ── Calendar ──

    let on_prev_month = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| {
            let (month, year) = *focus;
            focus.set(previous_month(month, year));
        })
    };

    let on_next_month = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| {
            let (month, year) = *focus;
            focus.set(next_month(month, year));
        })
    };

    let on_pick_day = {
        let selected_date = selected_date.clone();
        let form = form.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |cell: CalendarCell| {
            if cell.disabled {
                show_toast.emit((ToastKind::Error, "Past dates cannot be booked".to_string()));
                return;
            }
            selected_date.set(Some(cell.date.clone()));
            let mut next = (*form).clone();
            next.date = cell.date;
            form.set(next);
        })
    };

    // ── Booking form ──

    let on_form_update = {
        let form = form.clone();
        Callback::from(move |next: BookingForm| form.set(next))
    };

    let on_form_submit = {
        let form = form.clone();
        let catalog = catalog.clone();
        let pending = pending.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |_: ()| {
            if let Err(e) = validate_booking_form(&form, today()) {
                show_toast.emit((ToastKind::Error, e.to_string()));
                return;
            }
            let Some(doc) = catalog.as_ref() else {
                show_toast.emit((
                    ToastKind::Warning,
                    "The catalog is still loading, try again in a moment".to_string(),
                ));
                return;
            };
            match doc.entry(&form.service_id) {
                Some(entry) => pending.set(Some(PendingAction::ConfirmBooking(entry.clone()))),
                None => show_toast.emit((
                    ToastKind::Error,
                    BookingFormError::UnknownService.to_string(),
                )),
            }
        })
    };

    let on_confirm_booking = {
        let form = form.clone();
        let bookings = bookings.clone();
        let pending = pending.clone();
        let selected_date = selected_date.clone();
        let storage = storage.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |entry: CatalogEntry| {
            let booking = build_booking(&form, &entry, now_millis(), now_rfc3339());
            let client = booking.client_name();
            let deposit = booking.deposit;

            let mut next = (*bookings).clone();
            add_booking(&mut next, booking);
            let saved = persist(&storage, &next, &show_toast);
            bookings.set(next);

            form.set(BookingForm::default());
            selected_date.set(None);
            pending.set(None);
            if saved {
                show_toast.emit((
                    ToastKind::Success,
                    format!("Booking confirmed for {}, ${:.2} deposit due", client, deposit),
                ));
            }
        })
    };

    // ── List actions ──

    let on_request_delete = {
        let bookings = bookings.clone();
        let pending = pending.clone();
        Callback::from(move |id: i64| {
            if let Some(booking) = bookings.iter().find(|b| b.id == id) {
                pending.set(Some(PendingAction::DeleteBooking(booking.clone())));
            }
        })
    };

    let on_confirm_delete = {
        let bookings = bookings.clone();
        let pending = pending.clone();
        let storage = storage.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |id: i64| {
            let mut next = (*bookings).clone();
            if remove_booking(&mut next, id) {
                let saved = persist(&storage, &next, &show_toast);
                bookings.set(next);
                if saved {
                    show_toast.emit((ToastKind::Success, "Booking deleted".to_string()));
                }
            }
            pending.set(None);
        })
    };

    let on_mark_paid = {
        let bookings = bookings.clone();
        let storage = storage.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |id: i64| {
            let mut next = (*bookings).clone();
            if mark_paid(&mut next, id, now_rfc3339()) {
                let saved = persist(&storage, &next, &show_toast);
                bookings.set(next);
                if saved {
                    show_toast.emit((ToastKind::Success, "Deposit marked as paid".to_string()));
                }
            }
        })
    };

    let on_request_clear = {
        let bookings = bookings.clone();
        let pending = pending.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |_: MouseEvent| {
            if bookings.is_empty() {
                show_toast.emit((ToastKind::Info, "The agenda is already empty".to_string()));
            } else {
                pending.set(Some(PendingAction::ClearAll));
            }
        })
    };

    let on_confirm_clear = {
        let bookings = bookings.clone();
        let pending = pending.clone();
        let storage = storage.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |_: MouseEvent| {
            match storage.clear() {
                Ok(()) => {
                    bookings.set(Vec::new());
                    show_toast.emit((ToastKind::Success, "All bookings removed".to_string()));
                }
                Err(e) => {
                    Logger::warn_with_component("store", &e.to_string());
                    show_toast.emit((
                        ToastKind::Warning,
                        "The agenda could not be cleared".to_string(),
                    ));
                }
            }
            pending.set(None);
        })
    };

    // ── Export ──

    let on_export = {
        let bookings = bookings.clone();
        let selected_date = selected_date.clone();
        let catalog = catalog.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |_: MouseEvent| {
            let day = selected_date
                .as_ref()
                .cloned()
                .unwrap_or_else(|| format_day(today()));
            let day_bookings = bookings_for_day(&bookings, &day);
            if day_bookings.is_empty() {
                show_toast.emit((ToastKind::Info, format!("Nothing to export for {}", day)));
                return;
            }

            let count = day_bookings.len();
            let services: &[CatalogEntry] = catalog
                .as_ref()
                .map(|doc| doc.services.as_slice())
                .unwrap_or(&[]);
            match day_report_csv(&day_bookings, services) {
                Ok(bytes) => {
                    let filename = report_filename(&day);
                    match download_bytes(&filename, "text/csv;charset=utf-8;", &bytes) {
                        Ok(()) => show_toast.emit((
                            ToastKind::Success,
                            format!("Exported {} bookings to {}", count, filename),
                        )),
                        Err(e) => {
                            Logger::error_with_component("export", &e);
                            show_toast.emit((
                                ToastKind::Error,
                                "The report could not be downloaded".to_string(),
                            ));
                        }
                    }
                }
                Err(e) => {
                    Logger::error_with_component("export", &e.to_string());
                    show_toast.emit((
                        ToastKind::Error,
                        "The report could not be generated".to_string(),
                    ));
                }
            }
        })
    };

    // ── Filters ──

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |next: TemporalFilter| filter.set(next))
    };
    let on_query = {
        let query = query.clone();
        Callback::from(move |next: String| query.set(next))
    };
    let on_category = {
        let category = category.clone();
        Callback::from(move |next: Option<String>| category.set(next))
    };

    let on_dismiss = {
        let pending = pending.clone();
        Callback::from(move |_: MouseEvent| pending.set(None))
    };

    let on_toast_expire = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    // ── Derived view state ──

    let now = today();
    let (month, year) = *focus;
    let grid = build_month_grid(month, year, now, selected_date.as_deref(), &bookings);

    let catalog_ready = catalog.is_some();
    let services: Vec<CatalogEntry> = catalog
        .as_ref()
        .map(|doc| doc.services.clone())
        .unwrap_or_default();
    let categories = catalog
        .as_ref()
        .map(|doc| doc.categories())
        .unwrap_or_default();
    let policy = catalog
        .as_ref()
        .map(|doc| doc.config.cancellation_policy.clone())
        .unwrap_or_default();

    let visible: Vec<Booking> = visible_bookings(
        &bookings,
        *filter,
        &query,
        category.as_deref(),
        &services,
        now,
    )
    .into_iter()
    .cloned()
    .collect();
    let stats = compute_stats(&bookings, &services, now);

    let modal = match pending.as_ref() {
        Some(PendingAction::ConfirmBooking(entry)) => {
            let on_confirm = {
                let on_confirm_booking = on_confirm_booking.clone();
                let entry = entry.clone();
                Callback::from(move |_: MouseEvent| on_confirm_booking.emit(entry.clone()))
            };
            html! {
                <DepositModal
                    entry={entry.clone()}
                    client_name={format!("{} {}", form.first_name.trim(), form.last_name.trim())}
                    cancellation_policy={policy.clone()}
                    on_confirm={on_confirm}
                    on_decline={on_dismiss.clone()}
                />
            }
        }
        Some(PendingAction::DeleteBooking(booking)) => {
            let on_confirm = {
                let on_confirm_delete = on_confirm_delete.clone();
                let id = booking.id;
                Callback::from(move |_: MouseEvent| on_confirm_delete.emit(id))
            };
            html! {
                <ConfirmDialog
                    title={"Delete booking?".to_string()}
                    text={format!(
                        "Delete {}'s booking on {}? This cannot be undone.",
                        booking.client_name(),
                        booking.date
                    )}
                    confirm_label={"Delete".to_string()}
                    on_confirm={on_confirm}
                    on_cancel={on_dismiss.clone()}
                />
            }
        }
        Some(PendingAction::ClearAll) => html! {
            <ConfirmDialog
                title={"Clear the agenda?".to_string()}
                text={format!(
                    "Remove all {} bookings? This cannot be undone.",
                    bookings.len()
                )}
                confirm_label={"Remove everything".to_string()}
                on_confirm={on_confirm_clear.clone()}
                on_cancel={on_dismiss.clone()}
            />
        },
        None => html! {},
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"AgendaPro"}</h1>
                    <p class="tagline">{"Appointments, deposits and day reports for the studio"}</p>
                </div>
            </header>

            <main class="main">
                <div class="container layout">
                    <div class="layout-left">
                        <Calendar
                            grid={grid}
                            narrow={narrow}
                            on_prev_month={on_prev_month}
                            on_next_month={on_next_month}
                            on_pick={on_pick_day}
                        />
                        <BookingFormView
                            form={(*form).clone()}
                            services={services.clone()}
                            catalog_ready={catalog_ready}
                            busy={pending.is_some()}
                            on_update={on_form_update}
                            on_submit={on_form_submit}
                        />
                    </div>
                    <div class="layout-right">
                        <StatsPanel stats={stats} />
                        <BookingList
                            bookings={visible}
                            total_count={bookings.len()}
                            filter={*filter}
                            query={(*query).clone()}
                            category={(*category).clone()}
                            categories={categories}
                            on_filter={on_filter}
                            on_query={on_query}
                            on_category={on_category}
                            on_delete={on_request_delete}
                            on_mark_paid={on_mark_paid}
                            on_clear_all={on_request_clear}
                            on_export={on_export}
                        />
                    </div>
                </div>
            </main>

            {modal}

            <ToastHost toast={(*toast).clone()} on_expire={on_toast_expire} />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
