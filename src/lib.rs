pub mod browser;
pub mod components;
pub mod model;
pub mod pages;
pub mod report;
pub mod storage;

use components::{App, NavBar};
use leptos::*;
use leptos_router::*;
use pages::{AboutPage, GradientPage, NotFoundPage, ReportPage};
use storage::load_settings;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Workaround for Leptos 0.6 router not re-rendering on browser back/forward.
///
/// On `popstate`, the router updates its internal location signal but doesn't
/// always trigger the `<Routes>` component to re-evaluate which view to show.
/// Forcing a full page reload re-initializes the WASM app at the correct URL;
/// inputs and theme survive via localStorage.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(
            "popstate",
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The simulator hit an error. Try refreshing the page or resetting to defaults."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        // Clear stored settings and reload
                        if let Some(storage) = web_sys::window()
                            .and_then(|w| w.local_storage().ok().flatten())
                        {
                            let _ = storage.remove_item("coolsim_settings");
                        }
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reset & Reload"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Inner root that owns the theme and routes.
/// Wrapped by ErrorBoundary so initialization panics are caught.
#[component]
fn RootInner() -> impl IntoView {
    // Theme is an explicit signal handed to the rendering layer as props;
    // pages persist it alongside the simulation inputs.
    let (theme, set_theme) = create_signal(load_settings().theme_enum());

    view! {
        <Router>
            <div class="app-shell" attr:data-theme=move || theme.get().slug()>
                <NavBar theme=theme set_theme=set_theme/>
                <Routes>
                    <Route path="/" view=move || view! { <App theme=theme/> }/>
                    <Route path="/gradient" view=GradientPage/>
                    <Route path="/report" view=ReportPage/>
                    <Route path="/about" view=AboutPage/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </div>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    storage::setup_scroll_restoration();
    setup_popstate_reload();
    mount_to_body(Root);
    // Restore scroll after a brief delay to ensure content has rendered
    storage::restore_scroll_after_delay(50);
}
