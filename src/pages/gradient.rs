use crate::components::{GradientChart, MetricCards, SimulationControls};
use crate::model::{simulate_linear_drop, PerformanceMetrics, SimulationInput};
use crate::storage::load_settings;
use leptos::*;
use leptos_router::A;

/// Gradient-visualization page: the linear-drop model, recomputed
/// reactively as the sliders move. Shows the color-graded chart, the four
/// metric cards, and the qualitative rating banner.
#[component]
pub fn GradientPage() -> impl IntoView {
    let saved = load_settings();

    let (cpu_load, set_cpu_load) = create_signal(saved.cpu_load_pct);
    let (gpu_load, set_gpu_load) = create_signal(saved.gpu_load_pct);
    let (ambient_temp, set_ambient_temp) = create_signal(saved.ambient_temp_c);
    let (method, set_method) = create_signal(saved.method_enum());

    let result = create_memo(move |_| {
        let input = SimulationInput::clamped(
            cpu_load.get(),
            gpu_load.get(),
            ambient_temp.get(),
            method.get(),
        );
        simulate_linear_drop(&input)
    });

    let series = create_memo(move |_| result.get().points());
    let metrics = create_memo(move |_| PerformanceMetrics::from_series(&result.get()));

    view! {
        <main class="container gradient-page">
            <header>
                <h1>"Temperature Gradient"</h1>
                <p class="tagline">"Watch the cooling ramp, graded from hot to cold"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to simulator"</A>
            </nav>

            <section class="intro">
                <p>
                    "This view uses the simpler linear-drop model over a ten-second window: "
                    "the hotter the line, the redder the stroke. The metrics below are "
                    "recomputed from the trajectory on every change."
                </p>
            </section>

            <section class="interactive">
                <div class="model-container">
                    <SimulationControls
                        cpu_load=cpu_load
                        set_cpu_load=set_cpu_load
                        gpu_load=gpu_load
                        set_gpu_load=set_gpu_load
                        ambient_temp=ambient_temp
                        set_ambient_temp=set_ambient_temp
                        method=method
                        set_method=set_method
                    />
                    <div class="temperature-display">
                        <MetricCards metrics=metrics/>
                        <GradientChart series=series/>
                        <p class="result-line">
                            {move || {
                                let r = result.get();
                                format!(
                                    "Dropped {:.1}°C in {:.0} seconds with {}",
                                    r.temperature_drop(),
                                    r.duration_s(),
                                    method.get().name()
                                )
                            }}
                        </p>
                    </div>
                </div>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back to simulator"</A>
            </nav>
        </main>
    }
}
