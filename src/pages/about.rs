use crate::report::{PROJECT_EMAIL, PROJECT_GITHUB, PROJECT_LEAD};
use leptos::*;
use leptos_router::A;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="container about-page">
            <header>
                <h1>"CoolSim"</h1>
                <p class="tagline">"About this project"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to simulator"</A>
            </nav>

            <section class="about-section">
                <h2>"The Idea"</h2>
                <p>
                    "Mineral-oil immersion builds look spectacular, but how much better are "
                    "they, really, than a decent fan? This little simulator makes the "
                    "comparison tangible: one formula, three cooling coefficients, and a "
                    "chart that shows the difference at a glance. It is a teaching toy, "
                    "not a thermal engineering tool."
                </p>
            </section>

            <section class="about-section">
                <h2>"The Build"</h2>
                <p>
                    "Everything runs client-side in your browser: Rust compiled to "
                    "WebAssembly, rendered with Leptos. No servers, no cookies, no "
                    "personal data. The "
                    <A href="/gradient">"gradient view"</A>
                    " shows the same idea through a color-graded ramp, and the "
                    <A href="/report">"project report"</A>
                    " sums up how the three methods compare."
                </p>
            </section>

            <section class="about-section">
                <h2>"Team"</h2>
                <dl class="team-info">
                    <dt>"Project Lead"</dt>
                    <dd>{PROJECT_LEAD}</dd>
                    <dt>"Email"</dt>
                    <dd>{PROJECT_EMAIL}</dd>
                    <dt>"GitHub"</dt>
                    <dd>{PROJECT_GITHUB}</dd>
                </dl>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back to simulator"</A>
            </nav>
        </main>
    }
}
