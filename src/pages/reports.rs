//! Reports Page
//!
//! Period filter, three charts and the export dialog.

use leptos::prelude::*;

use super::modal_signals;
use crate::chart::{revenue_line, share_doughnut, LegendStyle, CATEGORY_COLORS, STATUS_COLORS};
use crate::commands::{current_search, query_value, start_export, ExportFormat, EXPORT_REPORTS};
use crate::components::{ChartCanvas, ConfirmModal};
use crate::context::use_app_context;
use crate::modal::ModalState;
use crate::models::{OrderStatus, ReportCharts};
use crate::store::ToastKind;

/// `(value, label)` pairs of the period select
const PERIODS: [(&str, &str); 5] = [
    ("7d", "Last 7 days"),
    ("30d", "Last 30 days"),
    ("90d", "Last 90 days"),
    ("year", "This year"),
    ("custom", "Custom range"),
];

const CUSTOM_PERIOD: &str = "custom";

#[component]
pub fn ReportsPage(chart_data: Option<ReportCharts>, export_base_url: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let search = current_search();
    let period = RwSignal::new(query_value(&search, "period").unwrap_or_else(|| PERIODS[1].0.to_string()));
    let date_from = query_value(&search, "date_from").unwrap_or_default();
    let date_to = query_value(&search, "date_to").unwrap_or_default();
    let export_modal = RwSignal::new(ModalState::<ExportFormat>::Closed);
    let export_report = RwSignal::new(EXPORT_REPORTS[0].0.to_string());
    let export_base = StoredValue::new(export_base_url);

    let status_labels: Vec<String> = OrderStatus::ALL.iter().map(|s| s.label().to_string()).collect();
    let (revenue, categories, statuses) = match &chart_data {
        Some(d) => (
            Some(revenue_line(&d.revenue_labels, &d.revenue_data, "Daily Revenue")),
            Some(share_doughnut(&d.category_labels, &d.category_data, &CATEGORY_COLORS, LegendStyle::Percent)),
            Some(share_doughnut(&status_labels, &d.status_data, &STATUS_COLORS, LegendStyle::CountAndPercent)),
        ),
        None => {
            log::info!("[reports] no chart data injected");
            (None, None, None)
        }
    };

    let open_export = move |format: ExportFormat| {
        export_report.set(EXPORT_REPORTS[0].0.to_string());
        export_modal.update(|m| {
            m.open(format);
        });
    };

    // Export is a plain navigation, so there is no busy phase
    let on_confirm = move |_: ()| {
        let Some(format) = export_modal.with_untracked(|m| m.context().copied()) else {
            return;
        };
        let report = export_report.get_untracked();
        export_modal.update(ModalState::close);
        match export_base.with_value(|base| start_export(base.as_deref(), format, &report)) {
            Ok(()) => ctx.notify(ToastKind::Success, "Report export started"),
            Err(err) => ctx.report("reports", &err),
        }
    };
    let (open, busy) = modal_signals(export_modal);

    view! {
        <div class="reports-page">
            <form class="report-filters" method="get">
                <div class="form-group">
                    <label for="period">"Period"</label>
                    <select
                        id="period"
                        name="period"
                        class="form-select"
                        prop:value=move || period.get()
                        on:change=move |ev| period.set(event_target_value(&ev))
                    >
                        {PERIODS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <Show when=move || period.with(|p| p == CUSTOM_PERIOD)>
                    <div class="form-group" id="date-from-group">
                        <label for="date_from">"From"</label>
                        <input type="date" id="date_from" name="date_from" class="form-input" value=date_from.clone() />
                    </div>
                    <div class="form-group" id="date-to-group">
                        <label for="date_to">"To"</label>
                        <input type="date" id="date_to" name="date_to" class="form-input" value=date_to.clone() />
                    </div>
                </Show>
                <button type="submit" class="btn btn-primary">"Apply"</button>
            </form>

            <div class="report-actions">
                <button class="btn btn-secondary" on:click=move |_| open_export(ExportFormat::Csv)>
                    "Export CSV"
                </button>
                <button class="btn btn-secondary" on:click=move |_| open_export(ExportFormat::Pdf)>
                    "Export PDF"
                </button>
            </div>

            <div class="report-charts">
                <div class="chart-card chart-wide">
                    <h3>"Revenue"</h3>
                    <ChartCanvas id="revenue-chart" config=revenue />
                </div>
                <div class="chart-card">
                    <h3>"Revenue by Category"</h3>
                    <ChartCanvas id="category-chart" config=categories />
                </div>
                <div class="chart-card">
                    <h3>"Orders by Status"</h3>
                    <ChartCanvas id="status-chart" config=statuses />
                </div>
            </div>

            <ConfirmModal
                open=open
                busy=busy
                title="Export Report"
                confirm_label="Export"
                busy_label="Exporting..."
                on_confirm=on_confirm
                on_close=move |_: ()| export_modal.update(ModalState::close)
            >
                <p>
                    "Choose the report to export as "
                    <strong>{move || export_modal.with(|m| m.context().map(|f| f.label()).unwrap_or_default())}</strong>
                    ":"
                </p>
                <div class="radio-group">
                    {EXPORT_REPORTS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <label class="radio-option">
                                    <input
                                        type="radio"
                                        name="export_report"
                                        value=value
                                        prop:checked=move || export_report.with(|r| r == value)
                                        on:change=move |_| export_report.set(value.to_string())
                                    />
                                    " "
                                    {label}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </ConfirmModal>
        </div>
    }
}
