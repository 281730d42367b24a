use leptos::*;

// Chart layout constants (SVG coordinate space within viewBox="0 0 400 200")
pub(crate) const CHART_LEFT: f64 = 40.0;
pub(crate) const CHART_WIDTH: f64 = 350.0;
pub(crate) const CHART_RIGHT: f64 = CHART_LEFT + CHART_WIDTH; // 390
pub(crate) const CHART_BOTTOM: f64 = 165.0;
pub(crate) const CHART_HEIGHT: f64 = 145.0;
pub(crate) const CHART_TOP: f64 = CHART_BOTTOM - CHART_HEIGHT; // 20

/// Vertical padding applied around the data's min/max so the curve never
/// touches the frame.
const Y_PAD_C: f64 = 2.0;

/// Y-axis bounds for a series: (top, bottom) with padding.
pub(crate) fn y_bounds(data: &[(f64, f64)]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &(_, temp) in data {
        lo = lo.min(temp);
        hi = hi.max(temp);
    }
    if lo > hi {
        // Empty series; arbitrary non-degenerate range
        return (100.0, 0.0);
    }
    (hi + Y_PAD_C, lo - Y_PAD_C)
}

/// Convert time/temp data points to SVG polyline coordinates.
pub(crate) fn to_chart_points(data: &[(f64, f64)], duration: f64, t_top: f64, t_bot: f64) -> String {
    let t_range = t_top - t_bot;
    if t_range.abs() < 1e-6 || duration <= 0.0 {
        return String::new();
    }
    data.iter()
        .filter(|(t, _)| *t <= duration)
        .map(|(time, temp)| {
            let x = CHART_LEFT + (time / duration) * CHART_WIDTH;
            let y = CHART_BOTTOM - ((temp - t_bot) / t_range * CHART_HEIGHT);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Temperature-over-time line chart for the home simulator.
///
/// Expects `(time_seconds, temp_celsius)` pairs. The Y range adapts to the
/// data; a dashed baseline marks the ambient temperature.
#[component]
pub fn TempChart(
    series: Memo<Vec<(f64, f64)>>,
    ambient_temp: Signal<f64>,
) -> impl IntoView {
    let bounds = create_memo(move |_| y_bounds(&series.get()));
    let duration = create_memo(move |_| {
        series.get().last().map(|&(t, _)| t).unwrap_or(1.0)
    });

    let ambient_y = create_memo(move |_| {
        let (t_top, t_bot) = bounds.get();
        let t_range = t_top - t_bot;
        if t_range.abs() < 1e-6 {
            CHART_BOTTOM
        } else {
            CHART_BOTTOM - ((ambient_temp.get() - t_bot) / t_range * CHART_HEIGHT)
        }
    });

    view! {
        <div class="chart-placeholder">
            <h4>"Temperature vs Time"</h4>
            <svg viewBox="0 0 400 200" class="temp-chart" role="img" aria-labelledby="temp-chart-title temp-chart-desc">
                <title id="temp-chart-title">"Temperature vs Time"</title>
                <desc id="temp-chart-desc">"Line chart showing simulated component temperature over time"</desc>
                // Y-axis labels
                <text x="5" y=CHART_TOP + 5.0 class="axis-label">
                    {move || format!("{:.0}°C", bounds.get().0)}
                </text>
                <text x="5" y="168" class="axis-label">
                    {move || format!("{:.0}°C", bounds.get().1)}
                </text>

                // X-axis labels
                <text x="40" y="195" class="axis-label">"0"</text>
                <text x="210" y="195" class="axis-label">
                    {move || format!("{:.0}", duration.get() / 2.0)}
                </text>
                <text x="370" y="195" class="axis-label">
                    {move || format!("{:.0} s", duration.get())}
                </text>

                // Ambient temperature baseline
                <line
                    x1=CHART_LEFT
                    y1=move || ambient_y.get()
                    x2=CHART_RIGHT
                    y2=move || ambient_y.get()
                    class="grid-line ambient"
                />

                <polyline
                    class="temp-line"
                    points=move || {
                        let (t_top, t_bot) = bounds.get();
                        to_chart_points(&series.get(), duration.get(), t_top, t_bot)
                    }
                />
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_chart_points_endpoints() {
        let data = vec![(0.0, 100.0), (10.0, 0.0)];
        let points = to_chart_points(&data, 10.0, 100.0, 0.0);
        // First point: left edge, chart top. Last point: right edge, bottom.
        assert_eq!(points, "40.0,20.0 390.0,165.0");
    }

    #[test]
    fn test_to_chart_points_filters_beyond_duration() {
        let data = vec![(0.0, 50.0), (5.0, 40.0), (20.0, 30.0)];
        let points = to_chart_points(&data, 10.0, 100.0, 0.0);
        assert_eq!(points.split(' ').count(), 2);
    }

    #[test]
    fn test_to_chart_points_degenerate_range_is_empty() {
        let data = vec![(0.0, 50.0), (1.0, 50.0)];
        assert!(to_chart_points(&data, 1.0, 50.0, 50.0).is_empty());
        assert!(to_chart_points(&data, 0.0, 100.0, 0.0).is_empty());
    }

    #[test]
    fn test_y_bounds_pads_min_max() {
        let data = vec![(0.0, 40.0), (1.0, 60.0), (2.0, 50.0)];
        let (top, bot) = y_bounds(&data);
        assert!((top - 62.0).abs() < 1e-12);
        assert!((bot - 38.0).abs() < 1e-12);
    }

    #[test]
    fn test_y_bounds_empty_is_non_degenerate() {
        let (top, bot) = y_bounds(&[]);
        assert!(top > bot);
    }
}
