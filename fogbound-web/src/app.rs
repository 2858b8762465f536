//! Single-view application component: owns the live session, the timer
//! interval, the canvas redraw closure, and the one input funnel every
//! source (keyboard, d-pad) feeds into.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use fogbound_game::{Direction, GameSession, MoveOutcome, SessionConfig, format_elapsed};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::{DirectionPad, TogglePanel, VictoryOverlay};
#[cfg(target_arch = "wasm32")]
use crate::dom::{self, IntervalHandle};
#[cfg(target_arch = "wasm32")]
use crate::input::direction_for_key;
#[cfg(target_arch = "wasm32")]
use crate::prefs::DisplayPrefs;
#[cfg(target_arch = "wasm32")]
use crate::render;

/// Timer text refresh cadence; the display only has second resolution.
#[cfg(target_arch = "wasm32")]
const TIMER_PERIOD_MS: i32 = 1_000;

#[cfg(target_arch = "wasm32")]
type SharedSession = Rc<RefCell<Option<GameSession>>>;
#[cfg(target_arch = "wasm32")]
type SharedDraw = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

/// Mix the wall clock with a `Math.random` draw into a session seed. Keeps
/// the wasm build free of a syscall RNG while still varying per click.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn session_seed(now_ms: u64, random: f64) -> u64 {
    let scrambled = (random * f64::from(u32::MAX)) as u64;
    now_ms
        .rotate_left(32)
        ^ scrambled.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Build and install a fresh session: new maze, recentered player, reset
/// trail, restarted timer interval. Replacing the old interval guard is what
/// cancels it.
#[cfg(target_arch = "wasm32")]
fn start_session(
    session: &SharedSession,
    ticker: &Rc<RefCell<Option<IntervalHandle>>>,
    elapsed: &UseStateHandle<AttrValue>,
    victory: &UseStateHandle<Option<AttrValue>>,
    prefs: DisplayPrefs,
) {
    let cfg =
        SessionConfig::default().with_seed(session_seed(dom::now_ms(), js_sys::Math::random()));
    match GameSession::new(&cfg, dom::now_ms()) {
        Ok(mut fresh) => {
            fresh.set_portals_enabled(prefs.show_portals);
            if fresh.exit_placement().is_forced() {
                log::warn!("exit placement exhausted its attempt budget; forced to the far corner");
            }
            let placed = fresh.portals().pair_count();
            if placed < cfg.portal_pairs as usize {
                log::warn!(
                    "placed {placed} of {} portal pairs before the attempt budget ran out",
                    cfg.portal_pairs
                );
            }
            *session.borrow_mut() = Some(fresh);
            elapsed.set(AttrValue::from("0:00"));
            victory.set(None);

            let tick_session = session.clone();
            let tick_elapsed = elapsed.clone();
            *ticker.borrow_mut() = dom::set_interval(TIMER_PERIOD_MS, move || {
                if let Some(live) = tick_session.borrow().as_ref() {
                    tick_elapsed.set(AttrValue::from(format_elapsed(
                        live.elapsed_ms(dom::now_ms()),
                    )));
                }
            })
            .ok();
        }
        Err(err) => dom::console_error(&format!("failed to start session: {err}")),
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let canvas_ref = use_node_ref();
    let session: SharedSession = use_mut_ref(|| None::<GameSession>);
    let prefs = use_state(DisplayPrefs::load);
    // Mirror of `prefs` readable from long-lived closures without going
    // stale between renders.
    let prefs_ref = use_mut_ref(DisplayPrefs::load);
    let draw_ref: SharedDraw = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let ticker = use_mut_ref(|| None::<IntervalHandle>);
    let elapsed = use_state(|| AttrValue::from("0:00"));
    let victory = use_state(|| None::<AttrValue>);

    let redraw = {
        let draw_ref = draw_ref.clone();
        move || {
            if let Some(draw) = draw_ref.borrow().as_ref() {
                draw();
            }
        }
    };

    let on_direction: Callback<Direction> = {
        let session = session.clone();
        let ticker = ticker.clone();
        let elapsed = elapsed.clone();
        let victory = victory.clone();
        let redraw = redraw.clone();
        Callback::from(move |direction| {
            let outcome = {
                let mut guard = session.borrow_mut();
                // Input before the first session exists is a no-op.
                let Some(live) = guard.as_mut() else { return };
                live.attempt_move(direction, dom::now_ms())
            };
            match outcome {
                MoveOutcome::Blocked => {}
                MoveOutcome::Moved => redraw(),
                MoveOutcome::Victory { elapsed_ms } => {
                    // Stop (not replace) the tick; the clock is frozen.
                    ticker.borrow_mut().take();
                    let time = AttrValue::from(format_elapsed(elapsed_ms));
                    elapsed.set(time.clone());
                    victory.set(Some(time));
                    redraw();
                }
            }
        })
    };

    let start_game = {
        let session = session.clone();
        let ticker = ticker.clone();
        let elapsed = elapsed.clone();
        let victory = victory.clone();
        let prefs_ref = prefs_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            start_session(&session, &ticker, &elapsed, &victory, *prefs_ref.borrow());
            redraw();
        })
    };

    let on_prefs: Callback<DisplayPrefs> = {
        let session = session.clone();
        let prefs = prefs.clone();
        let prefs_ref = prefs_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |next: DisplayPrefs| {
            next.save();
            *prefs_ref.borrow_mut() = next;
            if let Some(live) = session.borrow_mut().as_mut() {
                live.set_portals_enabled(next.show_portals);
            }
            prefs.set(next);
            redraw();
        })
    };

    // Mount: install the draw closure, hook the document keydown listener,
    // and start the first game.
    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let prefs_ref = prefs_ref.clone();
        let draw_ref = draw_ref.clone();
        let on_direction = on_direction.clone();
        let start_game = start_game.clone();
        use_effect_with((), move |_| {
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref should be attached to a canvas element");

            let draw: Rc<dyn Fn()> = {
                let session = session.clone();
                let prefs_ref = prefs_ref.clone();
                Rc::new(move || {
                    let guard = session.borrow();
                    let Some(live) = guard.as_ref() else { return };
                    let prefs = *prefs_ref.borrow();
                    let view =
                        render::Viewport::new(live.grid().size(), live.player(), prefs.fog_of_war);
                    let side = u32::try_from(view.side_px()).unwrap_or(0);
                    canvas.set_width(side);
                    canvas.set_height(side);
                    let Some(ctx) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    else {
                        dom::console_error("2d canvas context unavailable");
                        return;
                    };
                    render::draw(&ctx, live, prefs);
                })
            };
            *draw_ref.borrow_mut() = Some(draw);

            let listener = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(
                move |event: KeyboardEvent| {
                    if let Some(direction) = direction_for_key(&event.key()) {
                        event.prevent_default();
                        on_direction.emit(direction);
                    }
                },
            ));
            let document = dom::document();
            if document
                .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                .is_err()
            {
                dom::console_error("failed to attach keyboard listener");
            }

            start_game.emit(());

            move || {
                let _ = document
                    .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }
        });
    }

    let on_new_game = {
        let start_game = start_game.clone();
        Callback::from(move |_: MouseEvent| start_game.emit(()))
    };
    let on_play_again = {
        let start_game = start_game.clone();
        Callback::from(move |_: MouseEvent| start_game.emit(()))
    };

    html! {
        <div class="game">
            <header class="hud">
                <button onclick={on_new_game}>{ "New game" }</button>
                <span class="timer" aria-live="polite">{ (*elapsed).clone() }</span>
            </header>
            <TogglePanel prefs={*prefs} on_change={on_prefs} />
            <canvas ref={canvas_ref} class="maze-canvas" />
            <DirectionPad on_direction={on_direction} />
            if let Some(time) = (*victory).clone() {
                <VictoryOverlay final_time={time} on_play_again={on_play_again} />
            }
        </div>
    }
}
