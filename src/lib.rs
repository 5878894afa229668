//! flow-monitor: Interactive swim-lane dashboard for payment flow monitoring.
//!
//! This crate provides a WASM-based dashboard that renders monitored banking
//! systems in four processing lanes with directed connections, drag editing,
//! pan/zoom, payment path tracing, and per-system drill-down views.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod pages;

pub use components::flow_diagram::{
	Connection, FlowData, FlowDiagram, Lane, SearchResult, Status, SystemNode,
};

use components::flow_diagram::data;
use pages::data_table::DataTablePage;
use pages::flow::FlowPage;
use pages::log_detail::LogDetailPage;
use pages::search::SearchView;
use pages::welcome::WelcomeScreen;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("flow-monitor: logging initialized");
}

/// Load flow data from a script element with id="flow-data".
/// Expected format: JSON with { systems: [...], connections: [...] }
fn load_flow_data() -> Option<FlowData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("flow-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FlowData>(&json_text) {
		Ok(data) => {
			info!(
				"flow-monitor: loaded {} systems, {} connections",
				data.systems.len(),
				data.connections.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("flow-monitor: failed to parse flow data: {}", e);
			None
		}
	}
}

/// Which top-level view is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
	Welcome,
	Flow,
	DataTable,
	Search,
	LogDetail,
}

/// App-wide state shared through the Leptos context: the current view, the
/// active payment trace, the system selected for drill-down, and the loaded
/// flow data.
#[derive(Clone, Copy)]
pub struct AppState {
	pub view: RwSignal<View>,
	pub search: RwSignal<Option<SearchResult>>,
	pub selected_system: RwSignal<Option<String>>,
	pub flow_data: Signal<FlowData>,
	pub lanes: Signal<Vec<Lane>>,
}

impl AppState {
	fn new(flow_data: FlowData) -> Self {
		Self {
			view: RwSignal::new(View::Welcome),
			search: RwSignal::new(None),
			selected_system: RwSignal::new(None),
			flow_data: Signal::derive(move || flow_data.clone()),
			lanes: Signal::derive(data::lanes),
		}
	}

	/// Display name of the system selected for drill-down.
	pub fn selected_system_name(&self) -> Option<String> {
		let id = self.selected_system.get()?;
		self.flow_data
			.get()
			.systems
			.iter()
			.find(|s| s.id == id)
			.map(|s| s.name.clone())
	}
}

/// Main application component.
/// Loads flow data from the DOM and routes between the dashboard views.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Embedded data wins; the bundled sample topology is the fallback.
	let flow_data = load_flow_data().unwrap_or_else(data::sample_data);
	let app = AppState::new(flow_data);
	provide_context(app);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Payment Flow Monitor" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{move || match app.view.get() {
			View::Welcome => view! { <WelcomeScreen /> }.into_any(),
			View::Flow => view! { <FlowPage /> }.into_any(),
			View::DataTable => view! { <DataTablePage /> }.into_any(),
			View::Search => view! { <SearchView /> }.into_any(),
			View::LogDetail => view! { <LogDetailPage /> }.into_any(),
		}}
	}
}
