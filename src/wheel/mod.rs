//! Browser widget glue: canvas rendering, DOM overlay, audio cues, and the
//! frame loop. Everything stateful lives in one thread-local [`WheelWidget`];
//! the spin logic itself is in the child modules and never touches the DOM,
//! so it stays native-testable.

pub mod animator;
pub mod config;
pub mod planner;
pub mod selector;

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, HtmlAudioElement, HtmlButtonElement, HtmlCanvasElement,
    HtmlInputElement, window,
};

use animator::{Step, WheelState};
use config::WheelConfig;
use selector::EntropyRandom;

const CANVAS_SIZE: u32 = 420;
// Rim inset leaves room for the pointer triangle drawn outside the wheel.
const CANVAS_MARGIN: f64 = 26.0;
const HUB_RADIUS: f64 = 15.0;
const SPIN_AUDIO_SRC: &str = "audio/spin.wav";
const RESULT_AUDIO_SRC: &str = "audio/win.wav";

/// Runtime widget state.
struct WheelWidget {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    config: WheelConfig,
    state: WheelState,
    rng: EntropyRandom,
    sound_enabled: bool,
    spin_cue: Option<HtmlAudioElement>,
    result_cue: Option<HtmlAudioElement>,
}

impl WheelWidget {
    fn play_spin_cue(&self) {
        self.play(&self.spin_cue);
    }

    fn play_result_cue(&self) {
        self.play(&self.result_cue);
    }

    // Cues are cosmetic: rewind, fire, and discard every failure.
    fn play(&self, cue: &Option<HtmlAudioElement>) {
        if !self.sound_enabled {
            return;
        }
        if let Some(audio) = cue {
            audio.set_current_time(0.0);
            let _ = audio.play();
        }
    }
}

thread_local! {
    static WHEEL_STATE: std::cell::RefCell<Option<WheelWidget>> = std::cell::RefCell::new(None);
    static LOOP_RUNNING: std::cell::Cell<bool> = std::cell::Cell::new(false);
}

type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Build the widget DOM (canvas, spin button, result line, sound toggle),
/// install listeners, and start the frame loop.
pub fn start_wheel_mode(config: WheelConfig) -> Result<(), JsValue> {
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    // Create / reuse the wheel canvas.
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("fw-wheel-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("fw-wheel-canvas");
        c.set_width(CANVAS_SIZE);
        c.set_height(CANVAS_SIZE);
        c.set_attribute("style", "position:fixed; left:50%; top:42%; transform:translate(-50%,-50%); border-radius:50%; box-shadow:0 0 28px 0 rgba(0,0,0,0.25); background:#181818; z-index:20;").ok();
        body.append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    // Spin button with its click listener.
    if doc.get_element_by_id("fw-spin").is_none() {
        let btn: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
        btn.set_id("fw-spin");
        btn.set_text_content(Some("Spin"));
        btn.set_attribute("style", "position:fixed; left:50%; top:78%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:18px; padding:8px 26px; background:#ff5722; color:#fff; border:none; border-radius:8px; cursor:pointer; z-index:30;").ok();
        body.append_child(&btn)?;

        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            request_spin();
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Result line below the button.
    if doc.get_element_by_id("fw-result").is_none() {
        let div = doc.create_element("div")?;
        div.set_id("fw-result");
        div.set_text_content(Some(""));
        div.set_attribute("style", "position:fixed; left:50%; top:85%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:20px; padding:4px 10px; color:#ffd166; z-index:30;").ok();
        body.append_child(&div)?;
    }

    // Sound toggle (top-right), checked by default.
    if doc.get_element_by_id("fw-sound").is_none() {
        let label = doc.create_element("label")?;
        label.set_attribute("style", "position:fixed; top:10px; right:12px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:30; cursor:pointer;").ok();
        let check: HtmlInputElement = doc.create_element("input")?.dyn_into()?;
        check.set_id("fw-sound");
        check.set_type("checkbox");
        check.set_checked(true);
        label.append_child(&check)?;
        let caption = doc.create_element("span")?;
        caption.set_text_content(Some(" Sound"));
        label.append_child(&caption)?;
        body.append_child(&label)?;

        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            let enabled = evt
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.checked())
                .unwrap_or(true);
            WHEEL_STATE.with(|cell| {
                if let Some(widget) = cell.borrow_mut().as_mut() {
                    widget.sound_enabled = enabled;
                }
            });
        }) as Box<dyn FnMut(_)>);
        check.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let widget = WheelWidget {
        canvas,
        ctx,
        config,
        state: WheelState::default(),
        rng: EntropyRandom::new(crate::performance_now().to_bits() | 1),
        sound_enabled: true,
        spin_cue: HtmlAudioElement::new_with_src(SPIN_AUDIO_SRC).ok(),
        result_cue: HtmlAudioElement::new_with_src(RESULT_AUDIO_SRC).ok(),
    };

    // Resting wheel before the first animation frame.
    render_wheel(&widget);

    WHEEL_STATE.with(|cell| cell.replace(Some(widget)));
    start_frame_loop();
    Ok(())
}

/// Spin request entry shared by the button listener and the JS export.
/// Ignored while a spin is in flight.
pub fn request_spin() {
    WHEEL_STATE.with(|cell| {
        if let Some(widget) = cell.borrow_mut().as_mut() {
            let now = crate::performance_now();
            if animator::begin_spin(&mut widget.state, &widget.config, now, &mut widget.rng) {
                set_button_disabled(true);
                set_result_text("");
                widget.play_spin_cue();
            }
        }
    });
}

fn start_frame_loop() {
    // One cooperative loop per page; re-entry from a second start is a no-op.
    if LOOP_RUNNING.with(|flag| flag.replace(true)) {
        return;
    }
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        WHEEL_STATE.with(|cell| {
            if let Some(widget) = cell.borrow_mut().as_mut() {
                wheel_tick(widget, ts);
            }
        });
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn wheel_tick(widget: &mut WheelWidget, now: f64) {
    let step = animator::advance(&mut widget.state, now);
    render_wheel(widget);
    if let Step::Finished(winner) = step {
        reveal_result(widget, winner);
    }
}

// Reveal uses the index drawn before the animation started, never the angle.
fn reveal_result(widget: &WheelWidget, winner: usize) {
    if let Some(label) = widget.config.labels.get(winner) {
        set_result_text(&format!("Result: {label}"));
    }
    widget.play_result_cue();
    set_button_disabled(false);
}

// --- Rendering ---------------------------------------------------------------

/// Draw the whole wheel at the current rotation. Sectors are equal-width no
/// matter the weights; the draw odds must stay invisible here.
fn render_wheel(widget: &WheelWidget) {
    let ctx = &widget.ctx;
    let w = f64::from(widget.canvas.width());
    let h = f64::from(widget.canvas.height());
    let cx = w / 2.0;
    let cy = h / 2.0;
    let radius = w.min(h) / 2.0 - CANVAS_MARGIN;
    let n = widget.config.outcome_count();
    let seg = TAU / n as f64;

    ctx.clear_rect(0.0, 0.0, w, h);

    for i in 0..n {
        let start = widget.state.angle + i as f64 * seg;
        let end = start + seg;
        let color = &widget.config.colors[i % widget.config.colors.len()];

        // White core fading into the sector color.
        if let Ok(grad) = ctx.create_radial_gradient(cx, cy, radius * 0.3, cx, cy, radius) {
            grad.add_color_stop(0.0, "#fff").ok();
            grad.add_color_stop(1.0, color).ok();
            ctx.set_fill_style_canvas_gradient(&grad);
        } else {
            ctx.set_fill_style_str(color);
        }

        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.arc(cx, cy, radius, start, end).ok();
        ctx.close_path();
        ctx.fill();
        ctx.set_stroke_style_str("white");
        ctx.set_line_width(2.0);
        ctx.stroke();

        // Label along the sector's center ray, right-aligned at the rim.
        ctx.save();
        ctx.translate(cx, cy).ok();
        ctx.rotate(start + seg / 2.0).ok();
        ctx.set_fill_style_str("#000");
        ctx.set_font("bold 16px Arial");
        ctx.set_text_align("right");
        ctx.fill_text(&widget.config.labels[i], radius - 15.0, 5.0)
            .ok();
        ctx.restore();
    }

    // Hub
    ctx.begin_path();
    ctx.arc(cx, cy, HUB_RADIUS, 0.0, TAU).ok();
    ctx.set_fill_style_str("#ff5722");
    ctx.fill();
    ctx.set_stroke_style_str("white");
    ctx.set_line_width(3.0);
    ctx.stroke();

    draw_pointer(ctx, cx, cy, radius, widget.config.pointer_angle);
}

/// Fixed pointer triangle just outside the rim, tip toward the hub.
fn draw_pointer(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, radius: f64, angle: f64) {
    let (dir_x, dir_y) = (angle.cos(), angle.sin());
    let (perp_x, perp_y) = (-dir_y, dir_x);
    let tip = (cx + dir_x * (radius - 10.0), cy + dir_y * (radius - 10.0));
    let base = (cx + dir_x * (radius + 16.0), cy + dir_y * (radius + 16.0));
    let half_width = 10.0;

    ctx.begin_path();
    ctx.move_to(tip.0, tip.1);
    ctx.line_to(base.0 + perp_x * half_width, base.1 + perp_y * half_width);
    ctx.line_to(base.0 - perp_x * half_width, base.1 - perp_y * half_width);
    ctx.close_path();
    ctx.set_fill_style_str("#ff5722");
    ctx.fill();
    ctx.set_stroke_style_str("white");
    ctx.set_line_width(2.0);
    ctx.stroke();
}

// --- DOM helpers -------------------------------------------------------------

fn set_result_text(text: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id("fw-result") {
            el.set_text_content(Some(text));
        }
    }
}

fn set_button_disabled(disabled: bool) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(btn) = doc
            .get_element_by_id("fw-spin")
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            btn.set_disabled(disabled);
        }
    }
}
