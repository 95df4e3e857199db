use gloo_timers::callback::{Interval, Timeout};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use super::sequencer::{IntroSequencer, IntroTiming, Millis, SkipOutcome};
use super::state::{steps_from_labels, RunState, Step};

const TICK_MS: u32 = 16;
const BLOCK_ORIGIN: f64 = 40.0;
const BLOCK_SPACING: f64 = 120.0;
const GROUND_OFFSET: f64 = 96.0;

fn default_labels() -> AttrValue {
    AttrValue::from(config::INTRO_LABELS)
}

#[derive(Properties, PartialEq)]
pub struct IntroAnimationProps {
    pub on_complete: Callback<()>,
    #[prop_or_else(default_labels)]
    pub labels: AttrValue,
    #[prop_or_else(config::intro_timing)]
    pub timing: IntroTiming,
}

/// Milliseconds on the page clock. Falls back to wall time when the
/// performance API is missing so the run still moves forward.
fn host_now() -> Millis {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as f64)
        .max(0.0) as Millis
}

fn render_step(step: &Step, current: Option<usize>) -> Html {
    let left = format!("left: {:.0}px;", step.target_position);
    let block = if step.broken {
        html! { <span class="intro-letter">{step.label.to_string()}</span> }
    } else {
        html! {
            <div class={classes!("intro-block", (current == Some(step.index)).then(|| "active"))}>
                <span class="intro-mark">{"?"}</span>
                <span class="intro-hidden-letter">{step.label.to_string()}</span>
            </div>
        }
    };

    html! {
        <div class="intro-slot" style={left}>
            {block}
            {
                if step.reward_visible {
                    html! { <div class="intro-coin">{"$"}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(IntroAnimation)]
pub fn intro_animation(props: &IntroAnimationProps) -> Html {
    let sequencer = {
        let on_complete = props.on_complete.clone();
        let labels = props.labels.clone();
        let timing = props.timing;
        use_mut_ref(move || {
            let steps = steps_from_labels(&labels, BLOCK_ORIGIN, BLOCK_SPACING);
            IntroSequencer::new(steps, timing, move || {
                // Emitted on a fresh task: the page unmounts us in response,
                // which drops the interval that is running this callback.
                Timeout::new(0, move || on_complete.emit(())).forget();
            })
        })
    };
    let redraw = use_force_update();

    {
        let sequencer = sequencer.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(move |_| {
            sequencer.borrow_mut().start(host_now());

            let tick = {
                let sequencer = sequencer.clone();
                Interval::new(TICK_MS, move || {
                    let live = {
                        let mut seq = sequencer.borrow_mut();
                        let was_live = seq.run_state() != RunState::Done;
                        seq.advance(host_now());
                        was_live
                    };
                    if live {
                        redraw.force_update();
                    }
                })
            };

            move || {
                drop(tick);
                if let Ok(mut seq) = sequencer.try_borrow_mut() {
                    seq.teardown();
                }
            }
        }, ());
    }

    let on_skip = {
        let sequencer = sequencer.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let outcome = sequencer.borrow_mut().skip(host_now());
            if outcome == SkipOutcome::Accepted {
                redraw.force_update();
            }
        })
    };

    let (row, actor, skip_armed, finishing) = {
        let seq = sequencer.borrow();
        let current = seq.current_step();
        let row: Html = seq.steps().iter().map(|step| render_step(step, current)).collect();
        (row, seq.actor().clone(), seq.is_skip_armed(), seq.run_state().is_finishing())
    };
    let actor_style = format!(
        "left: {:.1}px; bottom: {:.1}px;",
        actor.position,
        GROUND_OFFSET + actor.elevation
    );

    html! {
        <div class={classes!("intro-overlay", finishing.then(|| "finishing"))}>
            <style>{INTRO_CSS}</style>
            <div class="intro-stage">
                <div class="intro-cloud cloud-a"></div>
                <div class="intro-cloud cloud-b"></div>
                <div class="intro-cloud cloud-c"></div>

                <div class="intro-row">
                    {row}
                </div>

                {
                    if actor.visible {
                        html! {
                            <div class={classes!("intro-actor", actor.in_motion.then(|| "walking"))} style={actor_style}>
                                <div class="actor-hat"></div>
                                <div class="actor-face"></div>
                                <div class="actor-shirt"></div>
                                <div class="actor-overalls"></div>
                                <div class="actor-leg left"></div>
                                <div class="actor-leg right"></div>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="intro-logo">{"DIGAOTECH"}</div>
                        }
                    }
                }

                <div class="intro-ground"></div>

                {
                    if skip_armed {
                        html! {
                            <button class="intro-skip" onclick={on_skip}>
                                {"Pular animação"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

const INTRO_CSS: &str = r#"
    .intro-overlay {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(to bottom, #60a5fa, #2563eb);
    }
    .intro-overlay.finishing {
        transition: opacity 1s ease-out;
    }
    .intro-stage {
        position: relative;
        width: 100%;
        max-width: 56rem;
        height: 28rem;
        margin: 0 auto;
    }
    .intro-row {
        position: absolute;
        top: 6rem;
        left: 0;
        right: 0;
        height: 5rem;
    }
    .intro-slot {
        position: absolute;
        width: 5rem;
        height: 5rem;
    }
    .intro-block {
        width: 5rem;
        height: 5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        position: relative;
        border: 4px solid #854d0e;
        background: linear-gradient(135deg, #DAA520 0%, #B8860B 50%, #CD853F 100%);
        box-shadow: inset 0 0 0 2px #FFD700, 0 4px 8px rgba(0,0,0,0.3);
    }
    .intro-block.active {
        animation: intro-pulse 1s ease-in-out infinite;
    }
    .intro-mark {
        color: #fef08a;
        font-weight: bold;
        font-size: 1.875rem;
    }
    .intro-hidden-letter {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fef9c3;
        font-weight: bold;
        opacity: 0.5;
    }
    .intro-letter {
        display: flex;
        width: 5rem;
        height: 5rem;
        align-items: center;
        justify-content: center;
        font-size: 3.75rem;
        font-weight: bold;
        color: #FFD700;
        animation: intro-bounce 1s infinite;
    }
    .intro-coin {
        position: absolute;
        top: -2rem;
        left: 50%;
        transform: translateX(-50%);
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        background: #FFD700;
        color: #713f12;
        font-size: 0.75rem;
        font-weight: bold;
        display: flex;
        align-items: center;
        justify-content: center;
        box-shadow: 0 0 12px #FFD700;
        animation: intro-coin-drop 0.6s ease-out;
    }
    .intro-actor {
        position: absolute;
        width: 4rem;
        height: 5rem;
    }
    .intro-actor.walking .actor-leg.left { transform: rotate(12deg); }
    .intro-actor.walking .actor-leg.right { transform: rotate(-12deg); }
    .actor-hat { position: absolute; top: 0; left: 0.5rem; width: 3rem; height: 1rem; background: #dc2626; border-radius: 0.5rem 0.5rem 0 0; }
    .actor-face { position: absolute; top: 0.75rem; left: 0.25rem; width: 3.5rem; height: 2rem; background: #fdbcb4; border-radius: 0.5rem; }
    .actor-shirt { position: absolute; top: 2rem; left: 0; width: 4rem; height: 2rem; background: #2563eb; border-radius: 0.25rem; }
    .actor-overalls { position: absolute; top: 3rem; left: 0.5rem; width: 3rem; height: 1.5rem; background: #dc2626; border-radius: 0.25rem; }
    .actor-leg { position: absolute; top: 4rem; width: 0.75rem; height: 1rem; background: #8b4513; border-radius: 0.25rem; }
    .actor-leg.left { left: 1rem; }
    .actor-leg.right { left: 2.25rem; }
    .intro-ground {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        height: 4rem;
        background: linear-gradient(to top, #16a34a, #4ade80);
    }
    .intro-cloud { position: absolute; background: white; border-radius: 9999px; opacity: 0.8; }
    .cloud-a { top: 2.5rem; left: 2.5rem; width: 4rem; height: 2rem; }
    .cloud-b { top: 5rem; right: 5rem; width: 5rem; height: 2.5rem; }
    .cloud-c { top: 4rem; left: 33%; width: 3rem; height: 1.5rem; }
    .intro-logo {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 6rem;
        text-align: center;
        font-size: 3rem;
        font-weight: bold;
        color: white;
        letter-spacing: 0.2em;
        animation: intro-fade 0.5s ease-in;
    }
    .intro-skip {
        position: absolute;
        right: 1rem;
        top: 1rem;
        padding: 0.5rem 1rem;
        border: 1px solid rgba(255,255,255,0.6);
        border-radius: 0.5rem;
        background: rgba(0,0,0,0.25);
        color: white;
        cursor: pointer;
        animation: intro-fade 0.3s ease-in;
    }
    .intro-skip:hover { background: rgba(0,0,0,0.4); }
    @keyframes intro-pulse { 50% { opacity: 0.6; } }
    @keyframes intro-bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-25%); } }
    @keyframes intro-coin-drop { from { transform: translate(-50%, 1rem); opacity: 0; } to { transform: translate(-50%, 0); opacity: 1; } }
    @keyframes intro-fade { from { opacity: 0; } to { opacity: 1; } }
"#;
