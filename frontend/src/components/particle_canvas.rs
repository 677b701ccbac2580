use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, Window};
use yew::prelude::*;

use crate::components::visibility::VisibilityObserver;
use crate::particles::renderer::{LoopCommand, Renderer, VISIBILITY_THRESHOLD};

/// Everything one animation frame touches
struct FrameLoop {
    window: Window,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    renderer: Renderer<StdRng>,
    frame_id: Option<i32>,
    tick: Option<Closure<dyn FnMut()>>,
}

type SharedLoop = Rc<RefCell<FrameLoop>>;

impl FrameLoop {
    fn fit_to_viewport(&mut self) {
        let (width, height) = viewport_size(&self.window);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.renderer.on_resize(width, height);
    }

    fn cancel(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn schedule(shared: &SharedLoop) {
    let state = &mut *shared.borrow_mut();
    if state.frame_id.is_some() {
        return;
    }
    if let Some(tick) = state.tick.as_ref() {
        state.frame_id = state
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .ok();
    }
}

fn apply(shared: &SharedLoop, command: LoopCommand) {
    match command {
        LoopCommand::Start => schedule(shared),
        LoopCommand::Stop => shared.borrow_mut().cancel(),
        LoopCommand::Keep => {}
    }
}

/// Hero background: the canvas, its frame loop, the resize listener and the
/// visibility observer on the hosting section. Tears everything down on drop.
struct ParticleBackground {
    shared: SharedLoop,
    on_resize: Closure<dyn FnMut()>,
    _visibility: Option<VisibilityObserver>,
}

impl ParticleBackground {
    fn mount(canvas: HtmlCanvasElement) -> Option<Self> {
        let window = web_sys::window()?;
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let host: Element = canvas.parent_element().unwrap_or_else(|| canvas.clone().into());

        let (width, height) = viewport_size(&window);
        let renderer = Renderer::new(width, height, StdRng::from_entropy());
        let shared: SharedLoop = Rc::new(RefCell::new(FrameLoop {
            window: window.clone(),
            canvas,
            context,
            renderer,
            frame_id: None,
            tick: None,
        }));
        shared.borrow_mut().fit_to_viewport();

        let weak: Weak<RefCell<FrameLoop>> = Rc::downgrade(&shared);
        let tick = Closure::<dyn FnMut()>::new(move || {
            let Some(shared) = weak.upgrade() else { return };
            {
                let state = &mut *shared.borrow_mut();
                state.frame_id = None;
                if !state.renderer.is_running() {
                    return;
                }
                state.renderer.frame(&mut state.context);
            }
            schedule(&shared);
        });
        shared.borrow_mut().tick = Some(tick);

        let weak = Rc::downgrade(&shared);
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.borrow_mut().fit_to_viewport();
            }
        });
        let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

        let weak = Rc::downgrade(&shared);
        let visibility = VisibilityObserver::observe(&host, &[0.0, VISIBILITY_THRESHOLD], move |ratio| {
            if let Some(shared) = weak.upgrade() {
                let command = shared.borrow_mut().renderer.on_visibility_change(ratio);
                apply(&shared, command);
            }
        });
        if visibility.is_none() {
            // no IntersectionObserver support: just run
            let command = shared.borrow_mut().renderer.on_visibility_change(1.0);
            apply(&shared, command);
        }

        Some(Self {
            shared,
            on_resize,
            _visibility: visibility,
        })
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        let mut state = self.shared.borrow_mut();
        state.cancel();
        let _ = state
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        state.tick = None;
    }
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas() -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let background = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(ParticleBackground::mount);
                move || drop(background)
            },
            (),
        );
    }
    html! {
        <canvas ref={canvas_ref} class="bg-canvas" aria-hidden="true"></canvas>
    }
}
