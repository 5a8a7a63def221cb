//! Placeholder page awaiting generated content.
//!
//! The external generation agent replaces this crate's page wholesale
//! ("replace whole-file content", not "patch in place"). Until that
//! happens the page renders a static waiting notice and nothing else.

use std::fs;
use std::io;
use std::path::Path;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Root with zero children: the static waiting notice.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900 p-6">
            <div class="max-w-5xl mx-auto">
                <h1 class="text-2xl font-bold mb-4">"Generated UI"</h1>
                <p class="opacity-70">
                    "Your components will appear here. The agent should overwrite this file."
                </p>
            </div>
        </div>
    }
}

#[component]
fn PageDocument() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>"Generated UI"</title>
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Render the placeholder document as an HTML string.
pub fn render_page() -> String {
    let doc = view! { <PageDocument /> };

    let html = doc.to_html();

    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the placeholder and write it to `path`, creating parent
/// directories.
pub fn write_page(path: &Path) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, render_page())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn renders_document() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
    }

    #[test]
    fn renders_only_the_waiting_notice() {
        let html = render_page();

        assert!(html.contains("Your components will appear here."));
        assert!(!html.contains("frame-"));
        assert!(!html.contains("Hero Section"));
    }

    #[test]
    fn writes_page_to_disk() {
        let tmp_dir = tempdir().expect("tmp dir");
        let out_path = tmp_dir.path().join("dist").join("index.html");

        write_page(&out_path).expect("write page");
        let html = fs::read_to_string(&out_path).expect("read page");

        assert_eq!(html, render_page());
    }
}
