use crate::browser::track_event;
use crate::model::ALL_METHODS;
use crate::report::{
    download_report, ABSTRACT, CONCLUSION, OBJECTIVES, PROJECT_EMAIL, PROJECT_GITHUB,
    PROJECT_LEAD, REPORT_TITLE, RESULTS, TECHNOLOGIES,
};
use leptos::*;
use leptos_router::A;

/// Renders the static project report in-page, with a download button for
/// the Markdown artifact. The content is the same on every visit — the
/// generator takes no inputs.
#[component]
pub fn ReportPage() -> impl IntoView {
    view! {
        <main class="container report-page">
            <header>
                <h1>{REPORT_TITLE}</h1>
                <p class="tagline">"Project report"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to simulator"</A>
            </nav>

            <section class="report-meta">
                <p><strong>"Project Lead: "</strong>{PROJECT_LEAD}</p>
                <p><strong>"Email: "</strong>{PROJECT_EMAIL}</p>
                <p><strong>"GitHub: "</strong>{PROJECT_GITHUB}</p>
            </section>

            <section class="report-section">
                <h2>"Abstract"</h2>
                <p>{ABSTRACT}</p>
            </section>

            <section class="report-section">
                <h2>"Objectives"</h2>
                <ul>
                    {OBJECTIVES.iter().map(|o| view! { <li>{*o}</li> }).collect_view()}
                </ul>
            </section>

            <section class="report-section">
                <h2>"Technologies Used"</h2>
                <p>{TECHNOLOGIES}</p>
            </section>

            <section class="report-section">
                <h2>"Results & Analysis"</h2>
                <p>{RESULTS}</p>
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th>"Cooling Method"</th>
                            <th>"Efficiency"</th>
                            <th>"Cost"</th>
                            <th>"Maintenance"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {ALL_METHODS.iter().map(|m| {
                            let row = m.comparison();
                            view! {
                                <tr>
                                    <td>{m.name()}</td>
                                    <td>{row.efficiency}</td>
                                    <td>{row.cost}</td>
                                    <td>{row.maintenance}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="report-section">
                <h2>"Conclusion"</h2>
                <p>{CONCLUSION}</p>
            </section>

            <button
                class="run-button download-button"
                on:click=move |_| {
                    download_report();
                    track_event("report-download");
                }
            >
                "Download as Markdown"
            </button>

            <nav class="back-nav bottom">
                <A href="/">"< Back to simulator"</A>
            </nav>
        </main>
    }
}
