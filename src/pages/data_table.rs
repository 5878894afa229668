//! Transaction summary table for a selected system.

use leptos::prelude::*;

use crate::{AppState, View};

struct TransactionRow {
	id: &'static str,
	timestamp: &'static str,
	system: &'static str,
	amount: &'static str,
	status: &'static str,
	kind: &'static str,
	reference: &'static str,
}

/// Placeholder rows until the transaction feed is wired up.
fn mock_transactions() -> Vec<TransactionRow> {
	vec![
		TransactionRow {
			id: "TXN001",
			timestamp: "2025-01-05 14:23:15",
			system: "Swift Gateway",
			amount: "$125,000.00",
			status: "Completed",
			kind: "Wire Transfer",
			reference: "ACME20241201",
		},
		TransactionRow {
			id: "TXN002",
			timestamp: "2025-01-05 14:22:45",
			system: "CashPro Payments",
			amount: "$75,500.00",
			status: "Processing",
			kind: "ACH Transfer",
			reference: "ACME20241202",
		},
		TransactionRow {
			id: "TXN003",
			timestamp: "2025-01-05 14:21:30",
			system: "GPO",
			amount: "$250,000.00",
			status: "Failed",
			kind: "Wire Transfer",
			reference: "ACME20241203",
		},
		TransactionRow {
			id: "TXN004",
			timestamp: "2025-01-05 14:20:15",
			system: "Swift Alliance",
			amount: "$45,750.00",
			status: "Completed",
			kind: "SWIFT MT103",
			reference: "ACME20241204",
		},
		TransactionRow {
			id: "TXN005",
			timestamp: "2025-01-05 14:19:00",
			system: "RPI",
			amount: "$180,000.00",
			status: "Pending",
			kind: "Real-time Payment",
			reference: "ACME20241205",
		},
	]
}

fn status_badge_color(status: &str) -> &'static str {
	match status {
		"Completed" => "#22c55e",
		"Processing" => "#3b82f6",
		"Failed" => "#ef4444",
		"Pending" => "#eab308",
		_ => "#6b7280",
	}
}

/// Payment transaction summary, reached from a node's Summary button.
#[component]
pub fn DataTablePage() -> impl IntoView {
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
				<div style="background: white; border-radius: 10px; overflow: hidden; box-shadow: 0 8px 24px rgba(0,0,0,0.25);">
					<div style="background: linear-gradient(90deg, #2563eb, #1d4ed8); color: white; padding: 20px 24px;">
						<h2 style="margin: 0; font-size: 22px; font-weight: 700;">
							{move || {
								match app.selected_system_name() {
									Some(name) => format!("Payment Transaction Summary \u{2014} {}", name),
									None => "Payment Transaction Summary".to_string(),
								}
							}}
						</h2>
					</div>

					<table style="width: 100%; border-collapse: collapse; font-size: 13px;">
						<thead>
							<tr style="background: #f3f4f6; text-align: left; color: #374151;">
								<th style="padding: 10px 16px;">"ID"</th>
								<th style="padding: 10px 16px;">"Timestamp"</th>
								<th style="padding: 10px 16px;">"System"</th>
								<th style="padding: 10px 16px;">"Amount"</th>
								<th style="padding: 10px 16px;">"Status"</th>
								<th style="padding: 10px 16px;">"Type"</th>
								<th style="padding: 10px 16px;">"Reference"</th>
							</tr>
						</thead>
						<tbody>
							{mock_transactions()
								.into_iter()
								.map(|row| {
									view! {
										<tr style="border-top: 1px solid #e5e7eb; color: #1f2937;">
											<td style="padding: 10px 16px;">{row.id}</td>
											<td style="padding: 10px 16px;">{row.timestamp}</td>
											<td style="padding: 10px 16px;">{row.system}</td>
											<td style="padding: 10px 16px;">{row.amount}</td>
											<td style="padding: 10px 16px;">
												<span style=format!(
													"background: {}; color: white; padding: 2px 10px; border-radius: 9999px; font-size: 12px;",
													status_badge_color(row.status),
												)>{row.status}</span>
											</td>
											<td style="padding: 10px 16px;">{row.kind}</td>
											<td style="padding: 10px 16px;">{row.reference}</td>
										</tr>
									}
								})
								.collect_view()}
						</tbody>
					</table>
				</div>
			</div>
		</div>
	}
}
