use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use crate::components::log_table::{LogDocument, LogTable};
use crate::fetch::{self, FetchState};

/// Pre-generated log data file served alongside the app.
const LOG_DATA_URL: &str = "data/beaconlogs.json";

/// Beacon log page: loads the log document once, then renders the table.
#[component]
pub fn LogsPage() -> impl IntoView {
	let (data, set_data) = signal(FetchState::<LogDocument>::Loading);

	spawn_local(async move {
		match fetch::fetch_json::<LogDocument>(LOG_DATA_URL).await {
			Ok(doc) => set_data.set(FetchState::Ready(doc)),
			Err(err) => {
				error!("failed to load {LOG_DATA_URL}: {err}");
				set_data.set(FetchState::Failed(err.to_string()));
			}
		}
	});

	view! {
		<div class="page logs-page">
			<h1>"Beacon Logs"</h1>
			<nav>
				<a href="/">"Beacon graph"</a>
			</nav>
			{move || match data.get() {
				FetchState::Loading => view! { <p class="empty-state">"Loading logs..."</p> }.into_any(),
				FetchState::Failed(msg) => {
					view! {
						<p class="empty-state">"Log data is unavailable: " {msg}</p>
					}
						.into_any()
				}
				FetchState::Ready(doc) if doc.data.is_empty() => {
					view! { <p class="empty-state">"No logs yet."</p> }.into_any()
				}
				FetchState::Ready(doc) => {
					view! { <LogTable records=Signal::derive(move || doc.data.clone()) /> }
						.into_any()
				}
			}}
		</div>
	}
}
