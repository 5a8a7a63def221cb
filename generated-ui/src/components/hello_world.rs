use leptos::prelude::*;

/// Full-height centered heading containing exactly the given text.
///
/// The only dynamic content is `text`; everything around it is static
/// markup.
#[component]
pub fn HelloWorld(text: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-screen">
            <h1 class="text-3xl font-bold underline">{text}</h1>
        </div>
    }
}
