use super::temp_chart::{y_bounds, CHART_BOTTOM, CHART_HEIGHT, CHART_LEFT, CHART_WIDTH};
use leptos::*;

// Diverging cold-to-hot scale endpoints (cool blue / white / hot red)
const COLD_RGB: (f64, f64, f64) = (59.0, 76.0, 192.0);
const MID_RGB: (f64, f64, f64) = (242.0, 242.0, 242.0);
const HOT_RGB: (f64, f64, f64) = (180.0, 4.0, 38.0);

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_rgb(a: (f64, f64, f64), b: (f64, f64, f64), t: f64) -> (f64, f64, f64) {
    (lerp(a.0, b.0, t), lerp(a.1, b.1, t), lerp(a.2, b.2, t))
}

/// Map a temperature onto the diverging cold-to-hot color scale.
///
/// `lo` maps to blue, `hi` to red, the midpoint to near-white.
/// Out-of-range temperatures clamp to the endpoints.
pub(crate) fn temp_to_color(temp: f64, lo: f64, hi: f64) -> String {
    let span = hi - lo;
    let t = if span.abs() < 1e-9 {
        0.5
    } else {
        ((temp - lo) / span).clamp(0.0, 1.0)
    };
    let (r, g, b) = if t < 0.5 {
        lerp_rgb(COLD_RGB, MID_RGB, t * 2.0)
    } else {
        lerp_rgb(MID_RGB, HOT_RGB, (t - 0.5) * 2.0)
    };
    format!("rgb({:.0},{:.0},{:.0})", r, g, b)
}

/// One colored chart segment: endpoint coordinates plus stroke color.
pub(crate) struct ChartSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: String,
}

/// Break a series into line segments, each colored by the segment's mean
/// temperature. The color scale spans the series' own min/max.
pub(crate) fn to_segments(data: &[(f64, f64)], t_top: f64, t_bot: f64) -> Vec<ChartSegment> {
    let duration = data.last().map(|&(t, _)| t).unwrap_or(0.0);
    let t_range = t_top - t_bot;
    if duration <= 0.0 || t_range.abs() < 1e-6 {
        return Vec::new();
    }
    let lo = data.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
    let hi = data.iter().map(|&(_, v)| v).fold(f64::NEG_INFINITY, f64::max);

    let project = |&(time, temp): &(f64, f64)| {
        let x = CHART_LEFT + (time / duration) * CHART_WIDTH;
        let y = CHART_BOTTOM - ((temp - t_bot) / t_range * CHART_HEIGHT);
        (x, y)
    };

    data.windows(2)
        .map(|pair| {
            let (x1, y1) = project(&pair[0]);
            let (x2, y2) = project(&pair[1]);
            let mean_temp = (pair[0].1 + pair[1].1) / 2.0;
            ChartSegment {
                x1,
                y1,
                x2,
                y2,
                color: temp_to_color(mean_temp, lo, hi),
            }
        })
        .collect()
}

/// Color-graded temperature chart for the gradient page.
///
/// Each segment of the line is stroked with the diverging scale, so the
/// hot start reads red and the cooled end reads blue. A gradient bar
/// underneath acts as the color-scale legend.
#[component]
pub fn GradientChart(series: Memo<Vec<(f64, f64)>>) -> impl IntoView {
    let bounds = create_memo(move |_| y_bounds(&series.get()));
    let duration = create_memo(move |_| {
        series.get().last().map(|&(t, _)| t).unwrap_or(1.0)
    });
    let temp_range = create_memo(move |_| {
        let data = series.get();
        let lo = data.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
        let hi = data.iter().map(|&(_, v)| v).fold(f64::NEG_INFINITY, f64::max);
        if lo > hi { (0.0, 0.0) } else { (lo, hi) }
    });

    view! {
        <div class="chart-placeholder">
            <h4>"Temperature Gradient"</h4>
            <svg viewBox="0 0 400 230" class="temp-chart gradient-chart" role="img" aria-labelledby="gradient-chart-title gradient-chart-desc">
                <title id="gradient-chart-title">"Temperature Gradient"</title>
                <desc id="gradient-chart-desc">"Line chart colored from hot red to cool blue as the component cools"</desc>
                <defs>
                    <linearGradient id="temp-scale" x1="0" y1="0" x2="1" y2="0">
                        <stop offset="0%" stop-color="rgb(59,76,192)"/>
                        <stop offset="50%" stop-color="rgb(242,242,242)"/>
                        <stop offset="100%" stop-color="rgb(180,4,38)"/>
                    </linearGradient>
                </defs>

                // Y-axis labels
                <text x="5" y="25" class="axis-label">
                    {move || format!("{:.0}°C", bounds.get().0)}
                </text>
                <text x="5" y="168" class="axis-label">
                    {move || format!("{:.0}°C", bounds.get().1)}
                </text>

                // X-axis labels
                <text x="40" y="182" class="axis-label">"0"</text>
                <text x="370" y="182" class="axis-label">
                    {move || format!("{:.0} s", duration.get())}
                </text>

                // Per-segment colored line
                {move || {
                    let (t_top, t_bot) = bounds.get();
                    to_segments(&series.get(), t_top, t_bot)
                        .into_iter()
                        .map(|s| view! {
                            <line
                                x1=s.x1 y1=s.y1 x2=s.x2 y2=s.y2
                                stroke=s.color
                                class="gradient-segment"
                            />
                        })
                        .collect_view()
                }}

                // Color-scale legend
                <rect x=CHART_LEFT y="200" width=CHART_WIDTH height="10" fill="url(#temp-scale)" rx="3"/>
                <text x="40" y="225" class="axis-label">
                    {move || format!("{:.1}°C cool", temp_range.get().0)}
                </text>
                <text x="320" y="225" class="axis-label">
                    {move || format!("{:.1}°C hot", temp_range.get().1)}
                </text>
            </svg>
        </div>
    }
}
