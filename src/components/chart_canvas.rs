//! Chart Canvas Component

use leptos::prelude::*;

use crate::chart::{render_chart, ChartConfig};

/// Canvas that renders `config` once mounted. Without a config the canvas
/// stays empty; render failures are logged, never raised.
#[component]
pub fn ChartCanvas(
    /// Canvas element id, also used in log lines
    id: &'static str,
    config: Option<ChartConfig>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let config = StoredValue::new(config);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else { return };
        match config.get_value() {
            Some(cfg) => {
                if let Err(err) = render_chart(&canvas, &cfg) {
                    log::warn!("[chart] #{} not rendered: {}", id, err);
                }
            }
            None => log::debug!("[chart] #{} has no data", id),
        }
    });

    view! {
        <div class="chart-container">
            <canvas id=id node_ref=canvas_ref></canvas>
        </div>
    }
}
