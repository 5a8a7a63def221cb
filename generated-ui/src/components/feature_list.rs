use leptos::prelude::*;

use crate::types::Feature;

/// Card listing one block per feature record, in input order.
///
/// An empty `features` vector renders the card with an empty list; it is
/// not an error.
#[component]
pub fn FeatureList(features: Vec<Feature>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-md p-6">
            <h3 class="text-2xl font-semibold text-gray-900 mb-4">"Features"</h3>
            <ul>
                {features.into_iter().map(|feature| view! {
                    <li class="mb-4">
                        <h4 class="text-xl font-semibold text-gray-800">{feature.title}</h4>
                        <p class="text-gray-600">{feature.description}</p>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
