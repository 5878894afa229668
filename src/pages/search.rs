//! Payment search view.
//!
//! Search is mocked at this stage: any payment id resolves to a fixed
//! traversal path, which the flow view then highlights.

use leptos::prelude::*;

use crate::components::flow_diagram::{SearchResult, data};
use crate::{AppState, View};

/// Default id pre-filled in the search box.
const DEFAULT_PAYMENT_ID: &str = "262540610024186";

/// Payment id lookup form. A successful search stores the traced path and
/// jumps to the flow view with the path highlighted.
#[component]
pub fn SearchView() -> impl IntoView {
	let app = expect_context::<AppState>();
	let payment_id = RwSignal::new(DEFAULT_PAYMENT_ID.to_string());

	let run_search = move |_| {
		let id = payment_id.get_untracked();
		if id.trim().is_empty() {
			return;
		}
		app.search.set(Some(SearchResult {
			payment_id: id.trim().to_string(),
			path: data::mock_search_path(),
		}));
		app.view.set(View::Flow);
	};

	view! {
		<div style="height: 100vh; display: flex; flex-direction: column; background: #1e293b; color: white;">
			<div style="background: #1e3a8a; padding: 12px 16px; display: flex; align-items: center; justify-content: space-between;">
				<button
					style="background: none; border: none; color: white; cursor: pointer; padding: 6px 10px;"
					on:click=move |_| app.view.set(View::Welcome)
				>
					"Menu"
				</button>
				<h1 style="font-size: 18px; font-weight: 700; margin: 0;">
					"Global Banking APS End-to-End Payment Monitor"
				</h1>
				<div></div>
			</div>

			<div style="flex: 1; display: flex; align-items: flex-start; justify-content: center; padding-top: 80px;">
				<div style="background: #0f172a; border-radius: 10px; padding: 24px; width: 360px;">
					<h2 style="font-size: 18px; font-weight: 700; margin: 0 0 16px;">"Payment Search"</h2>
					<label style="display: block; font-size: 13px; margin-bottom: 6px;">"Payment ID"</label>
					<input
						style="width: 100%; padding: 8px; border-radius: 6px; border: 1px solid #334155; background: #1e293b; color: white;"
						placeholder="Enter Payment ID"
						prop:value=move || payment_id.get()
						on:input=move |ev| payment_id.set(event_target_value(&ev))
					/>
					<button
						style="margin-top: 16px; width: 100%; background: #2563eb; color: white; border: none; border-radius: 6px; padding: 10px; font-weight: 600; cursor: pointer;"
						on:click=run_search
					>
						"SEARCH"
					</button>
				</div>
			</div>
		</div>
	}
}
