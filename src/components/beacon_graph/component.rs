use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::BeaconGraphState;
use super::types::{BeaconNode, GraphDocument};

/// Tooltip offset from the pointer, in page pixels.
const TOOLTIP_OFFSET: f64 = 175.0;

#[derive(Clone)]
struct TooltipState {
	beacon: BeaconNode,
	x: f64,
	y: f64,
}

/// Force-directed beacon graph on a canvas, with hover highlighting, an
/// info tooltip, and drag repositioning.
#[component]
pub fn BeaconGraphCanvas(
	#[prop(into)] data: Signal<GraphDocument>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<BeaconGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (tooltip, set_tooltip) = signal(None::<TooltipState>);
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(BeaconGraphState::new(&data.get(), w, h));

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.begin_drag(idx, x, y);
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				s.drag_to(x, y);
				return;
			}

			let hovered = s.node_at_position(x, y);
			s.set_hover(hovered);
			set_tooltip.set(hovered.map(|idx| TooltipState {
				beacon: s.beacons[idx].clone(),
				x: ev.page_x() as f64 - TOOLTIP_OFFSET,
				y: ev.page_y() as f64 - TOOLTIP_OFFSET,
			}));
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
			s.set_hover(None);
		}
		set_tooltip.set(None);
	};

	view! {
		<div class="beacon-graph">
			<canvas
				node_ref=canvas_ref
				class="beacon-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				style="display: block; cursor: grab;"
			/>
			{move || {
				tooltip.get().map(|t| {
					view! {
						<div
							class="beacon-tooltip"
							style=format!("left: {}px; top: {}px;", t.x, t.y)
						>
							<strong>{format!("Beacon ({}) Info", t.beacon.id)}</strong>
							<hr />
							<div>{format!("PID: {}", t.beacon.pid)}</div>
							<div>{format!("Host: {}", t.beacon.host)}</div>
							<div>{format!("Computer: {}", t.beacon.computer)}</div>
							<div>{format!("Int: {}", t.beacon.internal)}</div>
							<div>{format!("Ext: {}", t.beacon.external)}</div>
							<div>{format!("User: {}", t.beacon.user)}</div>
							<div>{format!("OS: {}", t.beacon.os_summary())}</div>
							<div>{format!("Note: {}", t.beacon.note)}</div>
						</div>
					}
				})
			}}
		</div>
	}
}
