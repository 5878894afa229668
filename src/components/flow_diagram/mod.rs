//! Swim-lane payment flow diagram component.
//!
//! Renders monitored systems in four ordered lanes on an HTML canvas with:
//! - Directed connections drawn as cubic Bezier S-curves
//! - Drag-to-move within a lane, drag-to-connect via border handles
//! - Connection selection, right-click menu, and confirmed deletion
//! - Pan, zoom, lane collapse, and a staggered entrance animation
//! - A DOM edit form for per-system name, AIT tag, and status fields
//!
//! # Example
//!
//! ```ignore
//! use flow_monitor::components::flow_diagram::{FlowDiagram, data};
//!
//! view! {
//!     <FlowDiagram
//!         data=Signal::derive(data::sample_data)
//!         lanes=Signal::derive(data::lanes)
//!         search=Signal::derive(|| None)
//!         on_summary=Callback::new(|id: String| log::info!("summary: {id}"))
//!         on_details=Callback::new(|id: String| log::info!("details: {id}"))
//!         fullscreen=true
//!     />
//! }
//! ```

mod animation;
mod component;
pub mod data;
mod editor;
mod geometry;
mod layout;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::FlowDiagram;
pub use theme::Theme;
pub use types::{Connection, FlowData, Lane, SearchResult, Status, StatusSet, SystemNode};
