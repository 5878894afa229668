//! Raw log view for a selected system.

use leptos::prelude::*;

use crate::{AppState, View};

/// Placeholder log lines until the log feed is wired up.
const MOCK_LOG_LINES: [&str; 5] = [
	"05/01/2025 11:06:34 +0000, search_name=SWIFT_US_WTX_TREND_DATA_PULL_15MIN, search_now=1746096100.000, info_min_time=1746072700.000, info_max_time=1746096100.000, info_search_time=1746096197.387, message_type=103, transaction_reference=ACME20241201, message_action=Send",
	"05/01/2025 11:06:35 +0000, search_name=SWIFT_US_WTX_TREND_DATA_PULL_15MIN, search_now=1746096100.000, info_min_time=1746072700.000, info_max_time=1746096100.000, info_search_time=1746096197.387, message_type=202, transaction_reference=ACME20241202, message_action=Receive",
	"05/01/2025 11:06:36 +0000, search_name=SWIFT_US_WTX_TREND_DATA_PULL_15MIN, search_now=1746096100.000, info_min_time=1746072700.000, info_max_time=1746096100.000, info_search_time=1746096197.387, message_type=103, transaction_reference=ACME20241203, message_action=Send",
	"05/01/2025 11:06:37 +0000, search_name=SWIFT_US_WTX_TREND_DATA_PULL_15MIN, search_now=1746096100.000, info_min_time=1746072700.000, info_max_time=1746096100.000, info_search_time=1746096197.387, message_type=202, transaction_reference=ACME20241204, message_action=Receive",
	"05/01/2025 11:06:38 +0000, search_name=SWIFT_US_WTX_TREND_DATA_PULL_15MIN, search_now=1746096100.000, info_min_time=1746072700.000, info_max_time=1746096100.000, info_search_time=1746096197.387, message_type=103, transaction_reference=ACME20241205, message_action=Send",
];

/// System log details, reached from a node's Details button.
#[component]
pub fn LogDetailPage() -> impl IntoView {
	let app = expect_context::<AppState>();

	view! {
		<div style="min-height: 100vh; background: linear-gradient(135deg, #0f172a, #1e3a8a);">
			<div style="background: #1e3a8a; color: white; padding: 12px 16px; display: flex; align-items: center; justify-content: space-between;">
				<button
					style="background: none; border: none; color: white; cursor: pointer; padding: 6px 10px;"
					on:click=move |_| app.view.set(View::Flow)
				>
					"RETURN"
				</button>
				<h1 style="font-size: 18px; font-weight: 700; margin: 0;">
					"Global Banking APS End-to-End Payment Monitor"
				</h1>
				<div></div>
			</div>

			<div style="padding: 24px;">
				<div style="background: white; border-radius: 10px; padding: 24px; box-shadow: 0 8px 24px rgba(0,0,0,0.25);">
					<h2 style="margin: 0 0 16px; font-size: 22px; font-weight: 700; color: #1f2937;">
						{move || {
							match app.selected_system_name() {
								Some(name) => format!("System Log Details \u{2014} {}", name),
								None => "System Log Details".to_string(),
							}
						}}
					</h2>

					<div style="background: #111827; border-radius: 8px; padding: 16px; max-height: 380px; overflow: auto;">
						<pre style="margin: 0; color: #4ade80; font-family: monospace; font-size: 12px; white-space: pre-wrap;">
							{MOCK_LOG_LINES
								.iter()
								.map(|line| {
									view! { <div style="margin-bottom: 8px;">{*line}</div> }
								})
								.collect_view()}
						</pre>
					</div>

					<div style="margin-top: 20px; padding: 16px; background: #eff6ff; border-radius: 8px;">
						<h3 style="margin: 0 0 8px; font-weight: 600; color: #1e40af;">"Log Analysis Summary"</h3>
						<ul style="margin: 0; padding-left: 18px; font-size: 13px; color: #1d4ed8;">
							<li>"Total transactions processed: 5"</li>
							<li>"Message types: 103 (Send), 202 (Receive)"</li>
							<li>"Time range: 05/01/2025 11:06:34 - 11:06:38"</li>
							<li>"Status: all transactions completed successfully"</li>
						</ul>
					</div>
				</div>
			</div>
		</div>
	}
}
