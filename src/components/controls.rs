use crate::browser::vibrate_tick;
use crate::model::CoolingMethod;
use leptos::*;

/// Input panel shared by the simulator and gradient pages.
///
/// The sliders clamp by construction (bounded `<input type="range">`), so
/// values handed to the model are always in range. The optional `on_run`
/// callback renders a "Run Simulation" button; the gradient page omits it
/// and recomputes reactively instead.
#[component]
pub fn SimulationControls(
    cpu_load: ReadSignal<f64>,
    set_cpu_load: WriteSignal<f64>,
    gpu_load: ReadSignal<f64>,
    set_gpu_load: WriteSignal<f64>,
    ambient_temp: ReadSignal<f64>,
    set_ambient_temp: WriteSignal<f64>,
    method: ReadSignal<CoolingMethod>,
    set_method: WriteSignal<CoolingMethod>,
    #[prop(optional)] on_run: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="controls">
            <h3>"Input Parameters"</h3>

            <div class="control-group">
                <label for="cpu-load">"CPU Load: " {move || format!("{:.0}%", cpu_load.get())}</label>
                <input
                    type="range"
                    id="cpu-load"
                    min="0"
                    max="100"
                    step="1"
                    prop:value=move || cpu_load.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            set_cpu_load.set(v);
                            vibrate_tick();
                        }
                    }
                />
            </div>

            <div class="control-group">
                <label for="gpu-load">"GPU Load: " {move || format!("{:.0}%", gpu_load.get())}</label>
                <input
                    type="range"
                    id="gpu-load"
                    min="0"
                    max="100"
                    step="1"
                    prop:value=move || gpu_load.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            set_gpu_load.set(v);
                            vibrate_tick();
                        }
                    }
                />
            </div>

            <div class="control-group">
                <label for="ambient-temp">
                    "Ambient Temperature: " {move || format!("{:.0}°C", ambient_temp.get())}
                </label>
                <input
                    type="range"
                    id="ambient-temp"
                    min="20"
                    max="50"
                    step="1"
                    prop:value=move || ambient_temp.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            set_ambient_temp.set(v);
                            vibrate_tick();
                        }
                    }
                />
            </div>

            <div class="control-group">
                <label for="method">"Cooling Method"</label>
                <select
                    id="method"
                    on:change=move |ev| {
                        set_method.set(CoolingMethod::from_slug(&event_target_value(&ev)));
                    }
                >
                    <option value="air" selected=move || method.get() == CoolingMethod::Air>
                        "Air Cooling"
                    </option>
                    <option value="liquid" selected=move || method.get() == CoolingMethod::Liquid>
                        "Liquid Cooling"
                    </option>
                    <option value="mineral-oil" selected=move || method.get() == CoolingMethod::MineralOil>
                        "Mineral Oil Cooling"
                    </option>
                </select>
            </div>

            {on_run.map(|run| view! {
                <button class="run-button" on:click=move |_| run.call(())>
                    "Run Simulation"
                </button>
            })}

            <button
                class="reset-button"
                on:click=move |_| {
                    set_cpu_load.set(50.0);
                    set_gpu_load.set(40.0);
                    set_ambient_temp.set(25.0);
                    set_method.set(CoolingMethod::Air);
                }
            >
                "Reset to defaults"
            </button>
        </div>
    }
}
