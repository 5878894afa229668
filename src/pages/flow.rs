//! The main monitoring view: header bar over the swim-lane diagram.

use leptos::prelude::*;

use crate::components::flow_diagram::FlowDiagram;
use crate::{AppState, View};

/// Hosts the diagram full-screen with a navigation header. The node buttons
/// on the canvas route to the transaction summary and log detail views.
#[component]
pub fn FlowPage() -> impl IntoView {
	let app = expect_context::<AppState>();

	let on_summary = Callback::new(move |id: String| {
		app.selected_system.set(Some(id));
		app.view.set(View::DataTable);
	});
	let on_details = Callback::new(move |id: String| {
		app.selected_system.set(Some(id));
		app.view.set(View::LogDetail);
	});

	view! {
		<div style="height: 100vh; display: flex; flex-direction: column;">
			<div style="background: #1e3a8a; color: white; padding: 12px 16px; display: flex; align-items: center; justify-content: space-between; flex-shrink: 0;">
				<div style="display: flex; gap: 8px;">
					<button
						style="background: none; border: none; color: white; cursor: pointer; padding: 6px 10px;"
						on:click=move |_| app.view.set(View::Welcome)
					>
						"Menu"
					</button>
					<button
						style="background: none; border: none; color: white; cursor: pointer; padding: 6px 10px;"
						on:click=move |_| app.view.set(View::Search)
					>
						"Search"
					</button>
				</div>
				<h1 style="font-size: 18px; font-weight: 700; margin: 0;">
					"Global Banking APS End-to-End Payment Monitor"
				</h1>
				<div style="min-width: 180px; text-align: right;">
					{move || {
						app.search
							.get()
							.map(|r| {
								view! {
									<span style="font-size: 12px; background: #1d4ed8; padding: 4px 8px; border-radius: 9999px;">
										{format!("Tracing {}", r.payment_id)}
										<button
											style="background: none; border: none; color: white; cursor: pointer; margin-left: 6px;"
											on:click=move |_| app.search.set(None)
										>
											"\u{00D7}"
										</button>
									</span>
								}
							})
					}}
				</div>
			</div>

			<div style="flex: 1; overflow: hidden;">
				<FlowDiagram
					data=app.flow_data
					lanes=app.lanes
					search=app.search
					on_summary=on_summary
					on_details=on_details
				/>
			</div>
		</div>
	}
}
