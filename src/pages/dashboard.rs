//! Dashboard Page

use leptos::prelude::*;

use crate::chart::{revenue_line, share_doughnut, LegendStyle, STATUS_COLORS};
use crate::components::ChartCanvas;
use crate::models::DashboardCharts;

#[component]
pub fn DashboardPage(chart_data: Option<DashboardCharts>) -> impl IntoView {
    if chart_data.is_none() {
        log::info!("[dashboard] no chart data injected");
    }
    let revenue = chart_data
        .as_ref()
        .map(|d| revenue_line(&d.revenue_labels, &d.revenue_data, "Revenue ($)"));
    let orders = chart_data.as_ref().map(|d| {
        share_doughnut(
            &d.orders_by_status.labels,
            &d.orders_by_status.data,
            &STATUS_COLORS,
            LegendStyle::CountAndPercent,
        )
    });

    view! {
        <div class="dashboard-charts">
            <div class="chart-card">
                <h3>"Revenue"</h3>
                <ChartCanvas id="revenue-chart" config=revenue />
            </div>
            <div class="chart-card">
                <h3>"Orders by Status"</h3>
                <ChartCanvas id="orders-chart" config=orders />
            </div>
        </div>
    }
}
