use crate::browser::track_event;
use crate::components::{SimulationControls, TempChart};
use crate::model::{
    decay_efficiency_pct, simulate_decay, CoolingMethod, SimulationInput, SimulationResult,
};
use crate::storage::{load_settings, save_settings, StoredSettings, Theme};
use leptos::*;

/// Home page: the exponential-decay simulator.
///
/// Inputs are live signals, but the simulation only runs on the explicit
/// "Run Simulation" trigger — the completed run is a snapshot of the inputs
/// at click time, discarded when the next run replaces it.
#[component]
pub fn App(theme: ReadSignal<Theme>) -> impl IntoView {
    let saved = load_settings();

    let (cpu_load, set_cpu_load) = create_signal(saved.cpu_load_pct);
    let (gpu_load, set_gpu_load) = create_signal(saved.gpu_load_pct);
    let (ambient_temp, set_ambient_temp) = create_signal(saved.ambient_temp_c);
    let (method, set_method) = create_signal(saved.method_enum());

    // Completed run, if any. (input, trajectory) pairs so the summary
    // reflects what was actually simulated, not the current slider state.
    let (run, set_run) = create_signal::<Option<(SimulationInput, SimulationResult)>>(None);

    // Persist inputs (and the current theme) whenever anything changes
    create_effect(move |_| {
        let settings = StoredSettings {
            cpu_load_pct: cpu_load.get(),
            gpu_load_pct: gpu_load.get(),
            ambient_temp_c: ambient_temp.get(),
            method: method.get().slug().to_string(),
            theme: theme.get().slug().to_string(),
        };
        save_settings(&settings);
    });

    let run_simulation = Callback::new(move |_: ()| {
        let input = SimulationInput::clamped(
            cpu_load.get(),
            gpu_load.get(),
            ambient_temp.get(),
            method.get(),
        );
        set_run.set(Some((input, simulate_decay(&input))));
        track_event("simulation-run");
    });

    let chart_series = create_memo(move |_| {
        run.get()
            .map(|(_, result)| result.points())
            .unwrap_or_default()
    });
    let run_ambient = Signal::derive(move || {
        run.get()
            .map(|(input, _)| input.ambient_temp_c)
            .unwrap_or(25.0)
    });

    view! {
        <main class="container">
            <header>
                <h1>"Mineral Oil Cooling Simulation System"</h1>
                <p class="tagline">"Simulating PC cooling with air, liquid, and mineral oil"</p>
            </header>

            <section class="intro">
                <p>
                    "Pick the component loads and a cooling method, then run the simulation "
                    "to see how fast the heat decays toward ambient. Mineral oil immersion "
                    "carries heat away far more effectively than a fan ever could — "
                    "the chart shows by how much."
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
                        on_run=run_simulation
                    />

                    {move || match run.get() {
                        None => view! {
                            <div class="temperature-display">
                                <p class="run-hint">
                                    "Set your inputs and press \"Run Simulation\"."
                                </p>
                            </div>
                        }.into_view(),
                        Some((input, result)) => view! {
                            <div class="temperature-display">
                                <h3>"Simulation Result"</h3>
                                <p class="result-line">
                                    "Final CPU Temperature: "
                                    <strong>{format!("{:.2} °C", result.final_temperature())}</strong>
                                </p>
                                <p class="result-line">
                                    "Cooling Method Used: "
                                    <strong>{input.method.name()}</strong>
                                </p>
                                <TempChart series=chart_series ambient_temp=run_ambient/>
                                <div class="efficiency-banner">
                                    {format!(
                                        "Cooling Efficiency: {:.0}%",
                                        decay_efficiency_pct(input.method)
                                    )}
                                </div>
                            </div>
                        }.into_view(),
                    }}
                </div>
            </section>

            <section class="explanation">
                <h2>"The Three Methods"</h2>
                <div class="physics-cards">
                    <div class="card">
                        <h3>{CoolingMethod::Air.name()}</h3>
                        <p>
                            "Fans push ambient air across heatsinks. Cheap and easy to "
                            "maintain, but air carries little heat per unit volume."
                        </p>
                    </div>
                    <div class="card">
                        <h3>{CoolingMethod::Liquid.name()}</h3>
                        <p>
                            "A closed loop pumps coolant between cold plates and a radiator. "
                            "Much better heat transport at moderate cost and complexity."
                        </p>
                    </div>
                    <div class="card">
                        <h3>{CoolingMethod::MineralOil.name()}</h3>
                        <p>
                            "The whole board is submerged in non-conductive mineral oil. "
                            "Every surface sheds heat at once — the most effective of the "
                            "three, with the most involved setup."
                        </p>
                    </div>
                </div>
            </section>

            <footer>
                <p class="disclaimer">
                    "This is an educational toy model — a single decay formula per method, "
                    "not a thermal simulation. Real temperatures depend on hardware, airflow, "
                    "and much more."
                </p>
            </footer>
        </main>
    }
}
