use leptos::prelude::*;

/// Fixed hero banner, no parameterization.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="bg-blue-500 text-white py-12 px-8">
            <h1 class="text-3xl font-bold mb-4">"Hero Section"</h1>
            <p class="text-lg">"This is a simple hero section."</p>
        </div>
    }
}
