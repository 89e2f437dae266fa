use shared::calendar::{CalendarCell, CellKind, MonthGrid};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub grid: MonthGrid,
    /// Week-strip layout for narrow viewports
    pub narrow: bool,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    /// Emitted for current-month cells only; the app decides how to react to
    /// disabled ones
    pub on_pick: Callback<CalendarCell>,
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn cell_classes(cell: &CalendarCell) -> Classes {
    let mut out = classes!("calendar-day");
    out.push(match cell.kind {
        CellKind::CurrentMonth => "current-month",
        CellKind::PrevMonth | CellKind::NextMonth => "other-month",
    });
    if cell.is_today {
        out.push("today");
    }
    if cell.is_selected {
        out.push("selected");
    }
    if cell.has_bookings() {
        out.push("has-bookings");
    }
    if cell.disabled {
        out.push("disabled");
    }
    out
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let strip_ref = use_node_ref();

    let render_cell = |cell: &CalendarCell| -> Html {
        let onclick = (cell.kind == CellKind::CurrentMonth).then(|| {
            let on_pick = props.on_pick.clone();
            let cell = cell.clone();
            Callback::from(move |_: MouseEvent| on_pick.emit(cell.clone()))
        });
        html! {
            <div
                class={cell_classes(cell)}
                aria-disabled={cell.disabled.then_some("true")}
                {onclick}
            >
                <span class="day-number">{cell.day}</span>
                {if cell.has_bookings() {
                    html! { <span class="day-booking-count">{cell.booking_count}</span> }
                } else {
                    html! {}
                }}
            </div>
        }
    };

    // Scroll the narrow strip by one week's width
    let scroll_weeks = |direction: f64| {
        let strip_ref = strip_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(strip) = strip_ref.cast::<Element>() {
                let week_width = strip
                    .first_element_child()
                    .map(|week| week.get_bounding_client_rect().width())
                    .unwrap_or(0.0);
                strip.scroll_by_with_x_and_y(week_width * direction, 0.0);
            }
        })
    };

    let cells: Vec<Html> = props.grid.cells.iter().map(render_cell).collect();

    html! {
        <section class="calendar-card">
            <div class="calendar-header">
                <button class="calendar-nav-btn" onclick={props.on_prev_month.clone()} title="Previous month">{"‹"}</button>
                <h2 class="calendar-title">{props.grid.title()}</h2>
                <button class="calendar-nav-btn" onclick={props.on_next_month.clone()} title="Next month">{"›"}</button>
            </div>
            <div class="calendar-weekdays">
                {for WEEKDAYS.iter().map(|day| html! { <div class="weekday">{*day}</div> })}
            </div>
            {if props.narrow {
                html! {
                    <>
                        <div class="calendar-strip" ref={strip_ref.clone()}>
                            {for cells.chunks(7).map(|week| html! {
                                <div class="week-row">{for week.iter().cloned()}</div>
                            })}
                        </div>
                        <div class="calendar-strip-controls">
                            <button class="calendar-nav-btn" onclick={scroll_weeks(-1.0)} title="Previous week">{"‹"}</button>
                            <button class="calendar-nav-btn" onclick={scroll_weeks(1.0)} title="Next week">{"›"}</button>
                        </div>
                    </>
                }
            } else {
                html! { <div class="calendar-grid">{for cells.iter().cloned()}</div> }
            }}
        </section>
    }
}
