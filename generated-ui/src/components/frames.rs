//! Placeholder frames awaiting generated content.
//!
//! Content is unspecified until the agent overwrites these; each frame obeys
//! the common leaf contract (zero props, deterministic output, no side
//! effects) so the page composition stays valid before and after.

use leptos::prelude::*;

fn placeholder_frame(index: usize) -> impl IntoView {
    view! {
        <section class="bg-white rounded-lg shadow-md p-6 mb-6" id=format!("frame-{index}")>
            <p class="text-gray-400">{format!("Frame {index}")}</p>
        </section>
    }
}

/// Placeholder frame 1.
#[component]
pub fn Frame1() -> impl IntoView {
    placeholder_frame(1)
}

/// Placeholder frame 2.
#[component]
pub fn Frame2() -> impl IntoView {
    placeholder_frame(2)
}

/// Placeholder frame 3.
#[component]
pub fn Frame3() -> impl IntoView {
    placeholder_frame(3)
}

/// Placeholder frame 4.
#[component]
pub fn Frame4() -> impl IntoView {
    placeholder_frame(4)
}

/// Placeholder frame 5.
#[component]
pub fn Frame5() -> impl IntoView {
    placeholder_frame(5)
}

/// Placeholder frame 6.
#[component]
pub fn Frame6() -> impl IntoView {
    placeholder_frame(6)
}

/// Placeholder frame 7.
#[component]
pub fn Frame7() -> impl IntoView {
    placeholder_frame(7)
}

/// Placeholder frame 8.
#[component]
pub fn Frame8() -> impl IntoView {
    placeholder_frame(8)
}

/// Placeholder frame 9.
#[component]
pub fn Frame9() -> impl IntoView {
    placeholder_frame(9)
}
