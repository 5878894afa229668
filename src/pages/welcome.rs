//! Landing view with entry points into the dashboard.

use leptos::prelude::*;

use crate::{AppState, View};

/// Full-screen welcome card with the product title and navigation into the
/// flow monitor and payment search.
#[component]
pub fn WelcomeScreen() -> impl IntoView {
	let app = expect_context::<AppState>();

	view! {
		<div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 32px; background: linear-gradient(135deg, #0f172a, #1e3a8a, #1e293b); color: white;">
			<h1 style="font-size: 32px; font-weight: 700; margin-bottom: 48px; text-align: center;">
				"Global Banking APS End-to-End Payment Monitor"
			</h1>

			<div style="background: #2563eb; border-radius: 10px; padding: 32px; width: 100%; max-width: 420px; text-align: center;">
				<h2 style="font-size: 22px; font-weight: 700; margin-bottom: 24px;">"US Wire"</h2>
				<div style="display: flex; flex-direction: column; gap: 12px;">
					<button
						style="background: #3b82f6; color: white; font-weight: 600; padding: 12px 24px; border: none; border-radius: 8px; cursor: pointer;"
						on:click=move |_| app.view.set(View::Flow)
					>
						"Payment Flow Monitor"
					</button>
					<button
						style="background: #3b82f6; color: white; font-weight: 600; padding: 12px 24px; border: none; border-radius: 8px; cursor: pointer;"
						on:click=move |_| app.view.set(View::Search)
					>
						"Payment Search"
					</button>
				</div>
			</div>
		</div>
	}
}
