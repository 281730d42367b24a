//! The static project report.
//!
//! The generator takes no parameters and always emits the same document;
//! the comparison table is built from the `CoolingMethod` lookup so the
//! report can never drift from the model's constants.

use crate::model::ALL_METHODS;
use wasm_bindgen::JsCast;

/// Fixed download filename.
pub const REPORT_FILE_NAME: &str = "Mineral_Oil_Cooling_Project_Report.md";

pub const REPORT_TITLE: &str = "Mineral Oil Cooling Simulation System";
pub const PROJECT_LEAD: &str = "Dhinagaran B";
pub const PROJECT_EMAIL: &str = "dhinagaranboopathi";
pub const PROJECT_GITHUB: &str = "dhina-528";

pub const ABSTRACT: &str = "This project presents a software-based simulation of \
PC cooling techniques including Air Cooling, Liquid Cooling, and Mineral Oil \
Cooling. The system visually demonstrates temperature reduction using graphs \
and gradient-based visualization.";

pub const OBJECTIVES: [&str; 3] = [
    "Compare different PC cooling methods",
    "Visualize temperature variation over time",
    "Demonstrate efficiency of mineral oil cooling",
];

pub const TECHNOLOGIES: &str = "Rust, WebAssembly, Leptos";

pub const RESULTS: &str = "The simulation results show that mineral oil cooling \
offers higher thermal stability and faster temperature reduction compared to \
air and liquid cooling techniques.";

pub const CONCLUSION: &str = "Mineral oil cooling proves to be an effective and \
innovative solution for advanced PC thermal management, making it suitable for \
high-performance systems.";

/// Render the full report as Markdown. Identical output on every call.
pub fn report_markdown() -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# {}\n\n", REPORT_TITLE));
    doc.push_str(&format!("**Project Lead:** {}\n", PROJECT_LEAD));
    doc.push_str(&format!("**Email:** {}\n", PROJECT_EMAIL));
    doc.push_str(&format!("**GitHub:** {}\n\n", PROJECT_GITHUB));

    doc.push_str("## Abstract\n\n");
    doc.push_str(ABSTRACT);
    doc.push_str("\n\n## Objectives\n\n");
    for objective in OBJECTIVES {
        doc.push_str(&format!("- {}\n", objective));
    }

    doc.push_str("\n## Technologies Used\n\n");
    doc.push_str(TECHNOLOGIES);

    doc.push_str("\n\n## Results & Analysis\n\n");
    doc.push_str(RESULTS);

    doc.push_str("\n\n| Cooling Method | Efficiency | Cost | Maintenance |\n");
    doc.push_str("|---|---|---|---|\n");
    for method in ALL_METHODS {
        let row = method.comparison();
        doc.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            method.name(),
            row.efficiency,
            row.cost,
            row.maintenance
        ));
    }

    doc.push_str("\n## Conclusion\n\n");
    doc.push_str(CONCLUSION);
    doc.push('\n');

    doc
}

/// Trigger a browser download of the report under its fixed filename.
///
/// Any failure here is surfaced to the console and abandoned — there is
/// nothing to retry and the page itself keeps working.
pub fn download_report() {
    if let Err(e) = try_download() {
        web_sys::console::error_1(&format!("CoolSim: report download failed: {:?}", e).into());
    }
}

fn try_download() -> Result<(), wasm_bindgen::JsValue> {
    let markdown = report_markdown();

    let parts = js_sys::Array::new();
    parts.push(&markdown.into());
    let props = web_sys::BlobPropertyBag::new();
    props.set_type("text/markdown");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &props)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let anchor: web_sys::HtmlAnchorElement =
        document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(REPORT_FILE_NAME);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
