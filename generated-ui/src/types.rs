//! Prop records for the view components.
//!
//! These types define the data a component declares and requires for
//! rendering. They're designed to be:
//!
//! - **Serializable** - the generation agent hands component data over as
//!   JSON, so every record round-trips through serde
//! - **Clone-friendly** - components take owned data, no borrowing issues
//! - **Default-able** - partial records via `..Default::default()`

use serde::{Deserialize, Serialize};

/// A single feature entry rendered by
/// [`FeatureList`](crate::components::FeatureList).
///
/// Both fields are always present; list order is rendering order.
///
/// # Example
///
/// ```rust
/// use generated_ui::types::Feature;
///
/// let feature = Feature {
///     title: "Fast".into(),
///     description: "Loads quickly".into(),
/// };
/// assert_eq!(feature.title, "Fast");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Short feature name shown as the block heading
    pub title: String,
    /// One-sentence description shown under the heading
    pub description: String,
}
