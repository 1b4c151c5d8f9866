use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use crate::components::beacon_graph::{BeaconGraphCanvas, GraphDocument};
use crate::fetch::{self, FetchState};

/// Pre-generated graph data file served alongside the app.
const GRAPH_DATA_URL: &str = "data/beacons.json";

/// Beacon graph page: loads the graph document once, then hands it to the
/// canvas component.
#[component]
pub fn GraphPage() -> impl IntoView {
	let (data, set_data) = signal(FetchState::<GraphDocument>::Loading);

	spawn_local(async move {
		match fetch::fetch_json::<GraphDocument>(GRAPH_DATA_URL).await {
			Ok(doc) => set_data.set(FetchState::Ready(doc)),
			Err(err) => {
				error!("failed to load {GRAPH_DATA_URL}: {err}");
				set_data.set(FetchState::Failed(err.to_string()));
			}
		}
	});

	view! {
		<div class="page graph-page">
			<div class="graph-overlay">
				<h1>"Beacon Graph"</h1>
				<p class="subtitle">
					"Hover a beacon to highlight its neighbors. Drag nodes to reposition."
				</p>
				<nav>
					<a href="/logs">"Beacon logs"</a>
				</nav>
			</div>
			{move || match data.get() {
				FetchState::Loading => view! { <p class="empty-state">"Loading beacons..."</p> }.into_any(),
				FetchState::Failed(msg) => {
					view! {
						<p class="empty-state">"Beacon data is unavailable: " {msg}</p>
					}
						.into_any()
				}
				FetchState::Ready(doc) if doc.nodes.is_empty() => {
					view! { <p class="empty-state">"No beacons yet."</p> }.into_any()
				}
				FetchState::Ready(doc) => {
					view! {
						<BeaconGraphCanvas
							data=Signal::derive(move || doc.clone())
							width=Some(800.0)
							height=Some(700.0)
						/>
					}
						.into_any()
				}
			}}
		</div>
	}
}
