//! # generated-ui
//!
//! Generated presentational UI scaffold: a set of pure view components
//! composed into a page by a root assembler, rendered with [Leptos]
//! server-side rendering to a static HTML document.
//!
//! [Leptos]: https://leptos.dev/
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Component-Based** - Independent, prop-typed view fragments
//! - **Type-Safe** - The props contract is the function signature
//!
//! ## Quick Start
//!
//! ```rust
//! let html = generated_ui::render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Or write the page straight to disk:
//! // generated_ui::write_page(Path::new("dist/index.html"))?;
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos view components and the root assembler
//! - [`types`] - Prop records the components declare
//! - [`styles`] - Base CSS inlined into the exported document
//!
//! Every component is a pure function from props to a visual tree: no
//! shared state, no side effects, and identical props always produce
//! identical output. Rendering uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <Hero /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use std::fs;
use std::io;
use std::path::Path;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete page as an HTML document string.
///
/// This is the main entry point. The document is deterministic: repeated
/// calls yield byte-identical output.
///
/// # Example
///
/// ```rust
/// let html = generated_ui::render_page();
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_page() -> String {
    let doc = view! { <PageDocument /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the page and write it to `path`, creating parent directories.
pub fn write_page(path: &Path) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, render_page())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{App, FeatureList, Frame3, HelloWorld, Hero, Section};
    use crate::types::Feature;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn renders_document() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Generated UI"));
    }

    #[test]
    fn page_render_is_idempotent() {
        assert_eq!(render_page(), render_page());
    }

    #[test]
    fn app_renders_frames_in_declared_order() {
        let html = view! { <App /> }.to_html();

        let mut last = 0;
        for n in 1..=9 {
            let idx = html
                .find(&format!("frame-{n}"))
                .unwrap_or_else(|| panic!("frame-{n} missing"));
            assert!(idx > last, "frame-{n} out of order");
            last = idx;
        }
    }

    #[test]
    fn frame_output_is_position_independent() {
        let standalone = view! { <Frame3 /> }.to_html();
        let page = view! { <App /> }.to_html();

        assert!(page.contains(&standalone));
    }

    #[test]
    fn hello_world_renders_literal_text() {
        let text = "Hello from the agent".to_string();
        let html = view! { <HelloWorld text=text /> }.to_html();

        assert!(html.contains("Hello from the agent"));
    }

    #[test]
    fn hello_world_escapes_markup() {
        let malicious = "<script>alert('x')</script>";
        let text = malicious.to_string();
        let html = view! { <HelloWorld text=text /> }.to_html();

        assert!(!html.contains(malicious));
        assert!(html.contains("&lt;script"));
    }

    #[test]
    fn feature_list_renders_blocks_in_input_order() {
        let features = vec![
            Feature {
                title: "Fast".into(),
                description: "Loads quickly".into(),
            },
            Feature {
                title: "Simple".into(),
                description: "Easy to use".into(),
            },
        ];
        let html = view! { <FeatureList features=features /> }.to_html();

        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.find("Fast").unwrap() < html.find("Simple").unwrap());
        assert!(html.find("Loads quickly").unwrap() < html.find("Easy to use").unwrap());
    }

    #[test]
    fn feature_list_empty_renders_empty_container() {
        let features: Vec<Feature> = Vec::new();
        let html = view! { <FeatureList features=features /> }.to_html();

        assert!(html.contains("Features"));
        assert_eq!(html.matches("<li").count(), 0);
    }

    #[test]
    fn zero_prop_components_are_pure() {
        assert_eq!(
            view! { <Hero /> }.to_html(),
            view! { <Hero /> }.to_html()
        );
        assert_eq!(
            view! { <Section /> }.to_html(),
            view! { <Section /> }.to_html()
        );
    }

    #[test]
    fn feature_parses_agent_json() {
        let features: Vec<Feature> = serde_json::from_str(
            r#"[{"title":"Fast","description":"Loads quickly"}]"#,
        )
        .expect("agent feature payload");

        assert_eq!(
            features,
            vec![Feature {
                title: "Fast".into(),
                description: "Loads quickly".into(),
            }]
        );
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
