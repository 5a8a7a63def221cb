use leptos::prelude::*;

use super::{Frame1, Frame2, Frame3, Frame4, Frame5, Frame6, Frame7, Frame8, Frame9};

/// Root assembler: renders the frames in declared order.
///
/// The sequence below is the only relationship between the children; each
/// frame's output is independent of its position.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-gray-50 p-8">
            <Frame1 />
            <Frame2 />
            <Frame3 />
            <Frame4 />
            <Frame5 />
            <Frame6 />
            <Frame7 />
            <Frame8 />
            <Frame9 />
        </main>
    }
}
