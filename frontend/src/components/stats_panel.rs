use shared::stats::AgendaStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub stats: AgendaStats,
}

/// Read-only aggregate panel, recomputed by the app on every mutation.
#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let stats = &props.stats;

    let tile = |label: &str, value: String| {
        html! {
            <div class="stat-tile">
                <span class="stat-value">{value}</span>
                <span class="stat-label">{label.to_string()}</span>
            </div>
        }
    };

    html! {
        <section class="stats-card">
            <h2>{"At a glance"}</h2>

            <div class="stat-tiles">
                {tile("Bookings", stats.total.to_string())}
                {tile("Today", stats.due_today.to_string())}
                {tile("This week", stats.due_this_week.to_string())}
                {tile("This month", stats.due_this_month.to_string())}
                {tile("Booked revenue", format!("${:.2}", stats.total_revenue))}
                {tile("Deposits collected", format!("${:.2}", stats.collected_deposits))}
            </div>

            {if !stats.categories.is_empty() {
                html! {
                    <div class="stat-section">
                        <h3>{"By category"}</h3>
                        {for stats.categories.iter().map(|share| html! {
                            <div class="category-share">
                                <span class="category-name">{&share.category}</span>
                                <div class="category-bar">
                                    <div
                                        class="category-bar-fill"
                                        style={format!("width: {:.0}%", share.pct)}
                                    />
                                </div>
                                <span class="category-pct">{format!("{:.0}%", share.pct)}</span>
                            </div>
                        })}
                    </div>
                }
            } else {
                html! {}
            }}

            {if !stats.top_services.is_empty() {
                html! {
                    <div class="stat-section">
                        <h3>{"Most booked"}</h3>
                        <ol class="top-services">
                            {for stats.top_services.iter().map(|service| html! {
                                <li>
                                    <span>{&service.name}</span>
                                    <span class="service-count">{service.count}</span>
                                </li>
                            })}
                        </ol>
                    </div>
                }
            } else {
                html! {}
            }}
        </section>
    }
}
