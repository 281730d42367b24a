use crate::storage::Theme;
use leptos::*;
use leptos_router::{use_location, A};

#[component]
pub fn NavBar(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let link_class = move |href: &'static str| {
        let current = pathname();
        if current == href || (href != "/" && current.starts_with(href)) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"CoolSim"</A>
                <div class="nav-links">
                    <A href="/" class=move || link_class("/")>"Simulator"</A>
                    <A href="/gradient" class=move || link_class("/gradient")>"Gradient"</A>
                    <A href="/report" class=move || link_class("/report")>"Report"</A>
                    <A href="/about" class=move || link_class("/about")>"About"</A>
                </div>
                <button
                    class="theme-toggle"
                    aria-label="Toggle dark or light theme"
                    on:click=move |_| set_theme.set(theme.get().toggled())
                >
                    {move || match theme.get() {
                        Theme::Dark => "Light mode",
                        Theme::Light => "Dark mode",
                    }}
                </button>
            </div>
        </nav>
    }
}
