//! Leptos component wrapping the swim-lane diagram canvas.
//!
//! The component creates an HTML canvas, wires up mouse/wheel/keyboard
//! handlers for dragging, connecting, panning, and zooming, and runs a
//! `requestAnimationFrame` loop that ticks the animation state machines and
//! redraws each frame.
//!
//! The canvas owns everything spatial; the context menu, the delete
//! confirmation modal, the node edit form, and the view controls are DOM
//! overlays. Overlay visibility lives in [`DiagramState`] and is mirrored
//! into signals once per frame, so the DOM layer follows the same state
//! machines the canvas does. The diagram context sits in a thread-local
//! [`StoredValue`] so both event handlers and overlay views can reach it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent, Window,
};

use super::editor::{Field, NodeDraft, error_for};
use super::geometry::{HandleRole, NodeButton, Point};
use super::render;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ContextMenuState, DiagramState, Hit};
use super::theme::Theme;
use super::types::{FlowData, Lane, SearchResult, Status, SystemNode};

/// Bundles diagram state with visual configuration.
struct DiagramContext {
	state: DiagramState,
	scale: ScaleConfig,
	theme: Theme,
}

/// Handle to the lazily-created diagram context.
type ContextHandle = StoredValue<Option<DiagramContext>, LocalStorage>;

/// Browser-side resources that outlive the reactive owner unless released
/// on unmount: the pending animation frame, the frame closure (which holds
/// an `Rc` back to its own cell), and the window/document listeners.
struct FrameResources {
	raf_id: Rc<Cell<i32>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	resize: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	keydown: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>>,
}

/// Work a pointer-down resolves to that must run after the context borrow
/// has ended, because it can re-render or unmount the component.
enum PendingAction {
	Summary(String),
	Details(String),
	Edit(SystemNode),
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders the interactive payment-flow diagram on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and resize with the window.
/// `search` narrows the diagram to a traced payment path when set.
#[component]
pub fn FlowDiagram(
	#[prop(into)] data: Signal<FlowData>,
	#[prop(into)] lanes: Signal<Vec<Lane>>,
	#[prop(into)] search: Signal<Option<SearchResult>>,
	#[prop(into)] on_summary: Callback<String>,
	#[prop(into)] on_details: Callback<String>,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: ContextHandle = StoredValue::new_local(None);
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let key_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let raf_id: Rc<Cell<i32>> = Rc::new(Cell::new(0));

	let resources: StoredValue<Option<FrameResources>, LocalStorage> =
		StoredValue::new_local(Some(FrameResources {
			raf_id: raf_id.clone(),
			animate: animate.clone(),
			resize: resize_cb.clone(),
			keydown: key_cb.clone(),
		}));

	// Navigating to another view unmounts the component; the frame loop and
	// the window/document listeners must not survive it.
	on_cleanup(move || {
		let _ = resources.try_update_value(|slot| {
			let Some(res) = slot.take() else {
				return;
			};
			let Some(window) = web_sys::window() else {
				return;
			};
			let _ = window.cancel_animation_frame(res.raf_id.get());
			res.animate.borrow_mut().take();
			if let Some(cb) = res.resize.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = res.keydown.borrow_mut().take() {
				if let Some(document) = window.document() {
					let _ = document
						.remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
				}
			}
		});
	});

	// Overlay state mirrored out of the frame loop for the DOM layer.
	let menu = RwSignal::new(None::<ContextMenuState>);
	let menu_opacity = RwSignal::new(0.0);
	let modal = RwSignal::new(None::<String>);
	let modal_opacity = RwSignal::new(0.0);

	// Edit form: the node snapshot being edited plus the draft fields.
	let editing = RwSignal::new(None::<SystemNode>);
	let draft_name = RwSignal::new(String::new());
	let draft_ait = RwSignal::new(String::new());
	let draft_description = RwSignal::new(String::new());
	let draft_flow = RwSignal::new(Status::Active);
	let draft_trend = RwSignal::new(Status::Active);
	let draft_balanced = RwSignal::new(Status::Active);

	let build_draft = move || NodeDraft {
		name: draft_name.get(),
		ait_number: draft_ait.get(),
		description: draft_description.get(),
		flow: draft_flow.get(),
		trend: draft_trend.get(),
		balanced: draft_balanced.get(),
	};

	let open_editor = move |node: &SystemNode| {
		let draft = NodeDraft::from_node(node);
		draft_name.set(draft.name);
		draft_ait.set(draft.ait_number);
		draft_description.set(draft.description);
		draft_flow.set(draft.flow);
		draft_trend.set(draft.trend);
		draft_balanced.set(draft.balanced);
		editing.set(Some(node.clone()));
	};

	let errors = Memo::new(move |_| build_draft().validate());
	let can_save = Memo::new(move |_| {
		editing
			.get()
			.is_some_and(|node| build_draft().is_dirty(&node) && errors.get().is_empty())
	});

	let (animate_init, resize_cb_init, key_cb_init, raf_init) =
		(animate.clone(), resize_cb.clone(), key_cb.clone(), raf_id.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(1280.0),
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(800.0),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		context.set_value(Some(DiagramContext {
			state: DiagramState::new(data.get(), lanes.get(), w, h),
			scale: ScaleConfig::default(),
			theme: Theme::default(),
		}));

		if fullscreen {
			let canvas_resize = canvas.clone();
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				context.update_value(|slot| {
					if let Some(c) = slot.as_mut() {
						c.state.resize(nw, nh);
					}
				});
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		// Delete and Escape work anywhere on the page, but never while the
		// edit form has focus.
		*key_cb_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if editing.get_untracked().is_some() {
				if ev.key() == "Escape" {
					editing.set(None);
				}
				return;
			}
			let _ = context.try_update_value(|slot| {
				if let Some(c) = slot.as_mut() {
					match ev.key().as_str() {
						"Delete" => c.state.on_delete_key(),
						"Escape" => c.state.on_escape(),
						_ => {}
					}
				}
			});
		}));
		if let Some(ref cb) = *key_cb_init.borrow() {
			let _ = window
				.document()
				.unwrap()
				.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		let animate_inner = animate_init.clone();
		let raf_frame = raf_init.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// Stops rescheduling once the owning component is disposed.
			let ticked = context.try_update_value(|slot| {
				if let Some(c) = slot.as_mut() {
					c.state.tick(0.016);
					render::render(&c.state, &ctx, &c.scale, &c.theme);

					// Mirror overlay state into the reactive layer, only on
					// change.
					if menu.get_untracked() != c.state.context_menu {
						menu.set(c.state.context_menu.clone());
					}
					let p = c.state.menu_fsm.progress();
					if (menu_opacity.get_untracked() - p).abs() > 1e-3 {
						menu_opacity.set(p);
					}
					if modal.get_untracked() != c.state.pending_delete {
						modal.set(c.state.pending_delete.clone());
					}
					let p = c.state.modal_fsm.progress();
					if (modal_opacity.get_untracked() - p).abs() > 1e-3 {
						modal_opacity.set(p);
					}
				}
			});
			if ticked.is_none() {
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					raf_frame.set(id);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				raf_init.set(id);
			}
		}
	});

	Effect::new(move |_| {
		let result = search.get();
		context.update_value(|slot| {
			if let Some(c) = slot.as_mut() {
				c.state.search = result;
			}
		});
	});

	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let screen = canvas_point(&canvas, &ev);

		// Navigation and editor opening can tear down views, so they run
		// after the context borrow ends.
		let mut action = None;
		context.update_value(|slot| {
			if let Some(c) = slot.as_mut() {
				let world = c.state.transform.to_world(screen, c.state.center());
				let scaled = ScaledValues::new(&c.scale, c.state.transform.k);
				match c.state.hit_test(world, &scaled) {
					Hit::Handle { node_id, side } => {
						if side.role() == HandleRole::Source {
							c.state.begin_connect(&node_id, side);
						}
					}
					Hit::Button { node_id, button } => {
						action = match button {
							NodeButton::Summary => Some(PendingAction::Summary(node_id)),
							NodeButton::Details => Some(PendingAction::Details(node_id)),
							NodeButton::Edit => {
								c.state.system(&node_id).cloned().map(PendingAction::Edit)
							}
						};
					}
					Hit::Node(id) => {
						c.state.clear_selection();
						c.state.begin_drag(&id, world);
					}
					Hit::Edge(id) => c.state.select_connection(&id),
					Hit::Empty => {
						if let Some(lane_id) = c.state.lane_header_at(world) {
							c.state.toggle_lane(&lane_id);
						} else {
							c.state.clear_selection();
							c.state.begin_pan(screen);
						}
					}
				}
			}
		});
		match action {
			Some(PendingAction::Summary(id)) => on_summary.run(id),
			Some(PendingAction::Details(id)) => on_details.run(id),
			Some(PendingAction::Edit(node)) => open_editor(&node),
			None => {}
		}
	};

	let on_contextmenu = move |ev: MouseEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let screen = canvas_point(&canvas, &ev);

		context.update_value(|slot| {
			if let Some(c) = slot.as_mut() {
				let world = c.state.transform.to_world(screen, c.state.center());
				let scaled = ScaledValues::new(&c.scale, c.state.transform.k);
				if let Hit::Edge(id) = c.state.hit_test(world, &scaled) {
					c.state.open_context_menu(&id, screen);
				} else {
					c.state.close_context_menu();
				}
			}
		});
	};

	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let screen = canvas_point(&canvas, &ev);

		context.update_value(|slot| {
			if let Some(c) = slot.as_mut() {
				let world = c.state.transform.to_world(screen, c.state.center());

				if c.state.drag.active {
					c.state.drag_to(world);
				} else if c.state.connect.active {
					c.state.connect_move(world);
				} else if c.state.pan.active {
					c.state.pan_to(screen);
				} else {
					let scaled = ScaledValues::new(&c.scale, c.state.transform.k);
					c.state.hovered = match c.state.hit_test(world, &scaled) {
						Hit::Node(id)
						| Hit::Handle { node_id: id, .. }
						| Hit::Button { node_id: id, .. } => Some(id),
						_ => None,
					};
				}
			}
		});
	};

	let on_mouseup = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let screen = canvas_point(&canvas, &ev);

		context.update_value(|slot| {
			if let Some(c) = slot.as_mut() {
				if c.state.connect.active {
					let world = c.state.transform.to_world(screen, c.state.center());
					let scaled = ScaledValues::new(&c.scale, c.state.transform.k);
					let drop = match c.state.hit_test(world, &scaled) {
						Hit::Handle { node_id, side } => Some((node_id, side)),
						_ => None,
					};
					c.state.finish_connect(
						drop.as_ref().map(|(id, s)| (id.as_str(), *s)),
						js_sys::Date::now(),
					);
				}
				c.state.end_drag();
				c.state.end_pan();
			}
		});
	};

	let on_mouseleave = move |_: MouseEvent| {
		context.update_value(|slot| {
			if let Some(c) = slot.as_mut() {
				c.state.end_drag();
				c.state.end_pan();
				c.state.finish_connect(None, 0.0);
				c.state.hovered = None;
			}
		});
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let screen = canvas_point(&canvas, &ev);

		context.update_value(|slot| {
			if let Some(c) = slot.as_mut() {
				let center = c.state.center();
				c.state.transform.zoom_at(screen, center, ev.delta_y() < 0.0);
			}
		});
	};

	let on_save = move |_: MouseEvent| {
		let Some(node) = editing.get_untracked() else {
			return;
		};
		let draft = build_draft();
		if !draft.validate().is_empty() {
			return;
		}
		context.update_value(|slot| {
			if let Some(c) = slot.as_mut() {
				c.state.apply_edit(&node.id, &draft);
			}
		});
		editing.set(None);
	};

	let field_error = move |field: Field| {
		let errs = errors.get();
		error_for(&errs, field).map(str::to_string)
	};

	let status_select = move |value: RwSignal<Status>, label: &'static str| {
		view! {
			<label style="display: block; margin-top: 8px; font-size: 12px; color: #4b5563;">
				{label}
				<select
					style="display: block; width: 100%; margin-top: 2px; padding: 4px;"
					on:change=move |ev| {
						if let Some(s) = Status::parse(&event_target_value(&ev)) {
							value.set(s);
						}
					}
				>
					{[Status::Active, Status::Warning, Status::Error]
						.into_iter()
						.map(|s| {
							view! {
								<option value=s.label() selected=move || value.get() == s>
									{s.label()}
								</option>
							}
						})
						.collect_view()}
				</select>
			</label>
		}
	};

	view! {
		<div style="position: relative; width: 100%; height: 100%; overflow: hidden;">
			<canvas
				node_ref=canvas_ref
				class="flow-diagram-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				on:contextmenu=on_contextmenu
				style="display: block; cursor: default;"
			/>

			<div style="position: absolute; top: 60px; right: 12px; display: flex; flex-direction: column; gap: 6px;">
				<button
					title="Zoom in"
					on:click=move |_| {
						context.update_value(|slot| {
							if let Some(c) = slot.as_mut() {
								c.state.zoom_in();
							}
						});
					}
				>
					"+"
				</button>
				<button
					title="Zoom out"
					on:click=move |_| {
						context.update_value(|slot| {
							if let Some(c) = slot.as_mut() {
								c.state.zoom_out();
							}
						});
					}
				>
					"\u{2212}"
				</button>
				<button
					title="Reset view"
					on:click=move |_| {
						context.update_value(|slot| {
							if let Some(c) = slot.as_mut() {
								c.state.reset_view();
							}
						});
					}
				>
					"\u{2302}"
				</button>
				<button
					title="Replay animation"
					on:click=move |_| {
						context.update_value(|slot| {
							if let Some(c) = slot.as_mut() {
								c.state.replay_entrance();
							}
						});
					}
				>
					"\u{21BB}"
				</button>
			</div>

			<div style="position: absolute; bottom: 12px; left: 12px; font-size: 11px; color: #6b7280; background: rgba(255,255,255,0.75); padding: 6px 10px; border-radius: 6px;">
				"Drag nodes to rearrange. Drag from a right/bottom handle to connect. "
				"Right-click a connection for options. Scroll to zoom."
			</div>

			{move || {
				menu.get()
					.map(|m| {
						let id = m.connection_id.clone();
						view! {
							<div style=format!(
								"position: absolute; left: {}px; top: {}px; opacity: {}; background: white; border: 1px solid #e5e7eb; border-radius: 6px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); padding: 4px; z-index: 20;",
								m.position.x,
								m.position.y,
								menu_opacity.get(),
							)>
								<button
									style="display: block; width: 100%; padding: 6px 14px; color: #dc2626; background: none; border: none; text-align: left; cursor: pointer;"
									on:click=move |_| {
										context.update_value(|slot| {
											if let Some(c) = slot.as_mut() {
												c.state.request_delete(&id);
											}
										});
									}
								>
									"Delete Connection"
								</button>
								<button
									style="display: block; width: 100%; padding: 6px 14px; color: #374151; background: none; border: none; text-align: left; cursor: pointer;"
									on:click=move |_| {
										context.update_value(|slot| {
											if let Some(c) = slot.as_mut() {
												c.state.close_context_menu();
											}
										});
									}
								>
									"Cancel"
								</button>
							</div>
						}
					})
			}}

			{move || {
				modal
					.get()
					.map(|_| {
						view! {
							<div style=format!(
								"position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,{}); z-index: 30;",
								0.4 * modal_opacity.get(),
							)>
								<div style=format!(
									"background: white; border-radius: 10px; padding: 20px 24px; max-width: 320px; opacity: {}; transform: scale({});",
									modal_opacity.get(),
									0.9 + 0.1 * modal_opacity.get(),
								)>
									<h3 style="margin: 0 0 8px; font-size: 15px;">"Delete connection?"</h3>
									<p style="margin: 0 0 16px; font-size: 13px; color: #6b7280;">
										"This removes the connection from the diagram. It cannot be undone."
									</p>
									<div style="display: flex; justify-content: flex-end; gap: 8px;">
										<button on:click=move |_| {
											context.update_value(|slot| {
												if let Some(c) = slot.as_mut() {
													c.state.cancel_delete();
												}
											});
										}>
											"Cancel"
										</button>
										<button
											style="background: #dc2626; color: white; border: none; border-radius: 6px; padding: 6px 14px; cursor: pointer;"
											on:click=move |_| {
												context.update_value(|slot| {
													if let Some(c) = slot.as_mut() {
														c.state.confirm_delete();
													}
												});
											}
										>
											"Delete"
										</button>
									</div>
								</div>
							</div>
						}
					})
			}}

			{move || {
				editing
					.get()
					.map(|node| {
						view! {
							<div style="position: absolute; top: 60px; left: 12px; width: 280px; background: white; border: 1px solid #e5e7eb; border-radius: 10px; box-shadow: 0 4px 16px rgba(0,0,0,0.15); padding: 16px; z-index: 25;">
								<div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;">
									<h3 style="margin: 0; font-size: 14px;">{format!("Edit {}", node.name)}</h3>
									<button on:click=move |_| editing.set(None)>"\u{00D7}"</button>
								</div>

								<label style="display: block; font-size: 12px; color: #4b5563;">
									"Name"
									<input
										style="display: block; width: 100%; margin-top: 2px; padding: 4px;"
										prop:value=move || draft_name.get()
										on:input=move |ev| draft_name.set(event_target_value(&ev))
									/>
								</label>
								{move || {
									field_error(Field::Name)
										.map(|msg| {
											view! {
												<p style="margin: 2px 0 0; font-size: 11px; color: #dc2626;">{msg}</p>
											}
										})
								}}

								<label style="display: block; margin-top: 8px; font-size: 12px; color: #4b5563;">
									"AIT Number"
									<input
										style="display: block; width: 100%; margin-top: 2px; padding: 4px;"
										prop:value=move || draft_ait.get()
										on:input=move |ev| draft_ait.set(event_target_value(&ev))
									/>
								</label>
								{move || {
									field_error(Field::AitNumber)
										.map(|msg| {
											view! {
												<p style="margin: 2px 0 0; font-size: 11px; color: #dc2626;">{msg}</p>
											}
										})
								}}

								<label style="display: block; margin-top: 8px; font-size: 12px; color: #4b5563;">
									"Description"
									<textarea
										style="display: block; width: 100%; margin-top: 2px; padding: 4px; resize: vertical;"
										rows=3
										prop:value=move || draft_description.get()
										on:input=move |ev| draft_description.set(event_target_value(&ev))
									/>
								</label>
								<p style="margin: 2px 0 0; font-size: 11px; color: #9ca3af;">
									{move || format!("{}/200", draft_description.get().chars().count())}
								</p>
								{move || {
									field_error(Field::Description)
										.map(|msg| {
											view! {
												<p style="margin: 2px 0 0; font-size: 11px; color: #dc2626;">{msg}</p>
											}
										})
								}}

								{status_select(draft_flow, "Flow status")}
								{status_select(draft_trend, "Trend status")}
								{status_select(draft_balanced, "Balance status")}

								<button
									style="margin-top: 12px; width: 100%; background: #2563eb; color: white; border: none; border-radius: 6px; padding: 8px; cursor: pointer;"
									disabled=move || !can_save.get()
									on:click=on_save
								>
									"Save"
								</button>
							</div>
						}
					})
			}}
		</div>
	}
}
