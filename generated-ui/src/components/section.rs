use leptos::prelude::*;

/// Fixed text section, no parameterization.
#[component]
pub fn Section() -> impl IntoView {
    view! {
        <div class="py-8 px-8">
            <h2 class="text-2xl font-semibold mb-4 text-gray-800">"Section"</h2>
            <p class="text-gray-700">"This is a simple section with some content."</p>
        </div>
    }
}
