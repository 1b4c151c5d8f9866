use std::collections::HashSet;

use leptos::prelude::*;

use super::format::{human_timestamp, result_preview};
use super::state::{self, SortDir, SortKey};
use super::types::LogRecord;

/// Sortable, searchable, paginated beacon log table with an
/// expand-on-click detail row per record.
#[component]
pub fn LogTable(#[prop(into)] records: Signal<Vec<LogRecord>>) -> impl IntoView {
	let (sort_key, set_sort_key) = signal(SortKey::Timestamp);
	let (sort_dir, set_sort_dir) = signal(SortDir::Desc);
	let (query, set_query) = signal(String::new());
	let (page, set_page) = signal(0usize);
	// Keyed by stable record index so expansion survives re-sorting.
	let (expanded, set_expanded) = signal(HashSet::<usize>::new());

	let order = Memo::new(move |_| {
		state::view_order(&records.get(), &query.get(), sort_key.get(), sort_dir.get())
	});

	let sort_on = move |key: SortKey| {
		if sort_key.get_untracked() == key {
			set_sort_dir.update(|dir| *dir = dir.flip());
		} else {
			set_sort_key.set(key);
			set_sort_dir.set(SortDir::Asc);
		}
		set_page.set(0);
	};

	let header = move |label: &'static str, key: SortKey| {
		view! {
			<th class="sortable" on:click=move |_| sort_on(key)>
				{label}
				{move || match (sort_key.get() == key, sort_dir.get()) {
					(true, SortDir::Asc) => " \u{25b2}",
					(true, SortDir::Desc) => " \u{25bc}",
					_ => "",
				}}
			</th>
		}
	};

	let rows = move || {
		let records = records.get();
		let order = order.get();
		let open = expanded.get();
		state::page_slice(&order, page.get())
			.iter()
			.map(|&i| {
				let record = records[i].clone();
				let (preview, truncated) = result_preview(&record.result);
				let preview = preview.into_owned();
				let full_result = record.result.clone();
				let is_open = open.contains(&i);
				view! {
					<tr
						class="log-row"
						class:shown=is_open
						on:click=move |_| {
							set_expanded
								.update(|set| {
									if !set.remove(&i) {
										set.insert(i);
									}
								});
						}
					>
						<td class="details-control">{if is_open { "-" } else { "+" }}</td>
						<td>{record.timestamp}</td>
						<td>{human_timestamp(record.timestamp)}</td>
						<td>{record.kind}</td>
						<td>{record.beacon_id}</td>
						<td>{record.user}</td>
						<td><pre>{record.command}</pre></td>
						<td>
							<pre>{preview}</pre>
							{truncated
								.then(|| {
									view! { <p class="truncated-marker">"truncated..."</p> }
								})}
						</td>
					</tr>
					{is_open
						.then(|| {
							view! {
								<tr class="detail-row">
									<td colspan="8">
										<strong>"RESULT:"</strong>
										<pre>{full_result}</pre>
									</td>
								</tr>
							}
						})}
				}
			})
			.collect_view()
	};

	let page_info = move || {
		let filtered = order.get().len();
		let pages = state::page_count(filtered);
		let current = page.get().min(pages - 1);
		format!("Page {} of {} ({} records)", current + 1, pages, filtered)
	};

	view! {
		<div class="log-table">
			<div class="log-table-controls">
				<input
					type="search"
					placeholder="Search logs"
					prop:value=move || query.get()
					on:input=move |ev| {
						set_query.set(event_target_value(&ev));
						set_page.set(0);
					}
				/>
				<div class="pagination">
					<button on:click=move |_| {
						set_page.update(|p| *p = p.saturating_sub(1));
					}>"Prev"</button>
					<span>{page_info}</span>
					<button on:click=move |_| {
						let pages = state::page_count(order.get_untracked().len());
						set_page.update(|p| *p = (*p + 1).min(pages - 1));
					}>"Next"</button>
				</div>
			</div>
			<table class="logview">
				<thead>
					<tr>
						<th></th>
						{header("Timestamp", SortKey::Timestamp)}
						{header("Time", SortKey::Time)}
						{header("Type", SortKey::Kind)}
						{header("Beacon", SortKey::Beacon)}
						{header("User", SortKey::User)}
						{header("Command", SortKey::Command)}
						{header("Result", SortKey::Result)}
					</tr>
				</thead>
				<tbody>{rows}</tbody>
			</table>
		</div>
	}
}
