//! Base stylesheet inlined into exported pages.
//!
//! Component markup carries utility class names as opaque tokens; the rules
//! here only cover the document itself (reset, typography, background) so a
//! standalone export is readable without an external styling pipeline.

/// Document-level CSS for the exported page.
pub const PAGE_CSS: &str = r#"
*{box-sizing:border-box}
html,body{height:100%}
body{margin:0;background:#f6f7f9;color:#111;font-family:Inter,system-ui,Segoe UI,Roboto,Arial,sans-serif;line-height:1.5}
h1,h2,h3,h4{margin:0 0 0.4em}
p{margin:0 0 0.6em}
ul{margin:0;padding-left:1.2rem}
"#;
