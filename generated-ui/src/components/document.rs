//! Root document component - the complete HTML page.

use leptos::prelude::*;

use super::App;
use crate::styles::PAGE_CSS;

/// The complete HTML document wrapping [`App`].
#[component]
pub fn PageDocument() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>"Generated UI"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}
