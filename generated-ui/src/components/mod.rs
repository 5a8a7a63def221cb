//! Leptos view components for the generated page.
//!
//! Each component is a pure `#[component]` function: typed props in, visual
//! tree out. Leaf components never render one another and share no state;
//! the root assembler [`App`] holds the one ordered sequence that turns the
//! leaves into a page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── App
//!     ├── Frame1
//!     ├── ...
//!     └── Frame9
//! ```
//!
//! [`HelloWorld`], [`Hero`], [`Section`] and [`FeatureList`] are part of the
//! generated component set but are not wired into [`App`]; the generation
//! agent composes them when it overwrites the page.

mod app;
mod document;
mod feature_list;
mod frames;
mod hello_world;
mod hero;
mod section;

pub use app::App;
pub use document::PageDocument;
pub use feature_list::FeatureList;
pub use frames::{Frame1, Frame2, Frame3, Frame4, Frame5, Frame6, Frame7, Frame8, Frame9};
pub use hello_world::HelloWorld;
pub use hero::Hero;
pub use section::Section;
