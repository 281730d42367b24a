use crate::model::PerformanceMetrics;
use leptos::*;

/// The four labeled metric displays plus the qualitative rating banner.
#[component]
pub fn MetricCards(metrics: Memo<PerformanceMetrics>) -> impl IntoView {
    view! {
        <div class="metrics">
            <div class="metric">
                <span class="metric-value">
                    {move || format!("{:.1}%", metrics.get().efficiency_pct)}
                </span>
                <span class="metric-label">"Efficiency"</span>
            </div>
            <div class="metric">
                <span class="metric-value">
                    {move || format!("{:.0} s", metrics.get().duration_s)}
                </span>
                <span class="metric-label">"Duration"</span>
            </div>
            <div class="metric">
                <span class="metric-value">
                    {move || format!("{:.2}°C/s", metrics.get().cooling_rate_per_s)}
                </span>
                <span class="metric-label">"Cooling rate"</span>
            </div>
            <div class="metric">
                <span class="metric-value">
                    {move || format!("{:.2}", metrics.get().stability_index)}
                </span>
                <span class="metric-label">"Stability index"</span>
            </div>
        </div>

        <div class=move || metrics.get().rating().css_class()>
            {move || format!("Cooling performance: {}", metrics.get().rating().label())}
        </div>
    }
}
