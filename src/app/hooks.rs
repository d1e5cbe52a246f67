use std::{
    cell::RefCell,
    sync::{Arc, OnceLock},
    time::Duration,
};

use leptos::prelude::*;
use leptos_use::{use_raf_fn, use_window_scroll, utils::Pausable, UseRafFnCallbackArgs};

use crate::{
    config::ScrollConfig,
    motion::{Spring, SpringConfig},
    scroll::{HeroTransform, ScrollState, ScrollTracker, Section},
    typewriter::Typewriter,
};

#[derive(Debug, Clone, Copy)]
pub struct ScrollSignals {
    pub state: Signal<ScrollState>,
    pub hero: Signal<HeroTransform>,
}

/// Measures each section id in document coordinates. Returns `None` while
/// any section is missing or the page has not been laid out.
fn measure_sections(ids: &[String]) -> Option<Vec<Section>> {
    let doc = document();
    let scroll_y = window().scroll_y().ok()?;
    let sections = ids
        .iter()
        .map(|id| {
            let rect = doc.get_element_by_id(id)?.get_bounding_client_rect();
            Some(Section::from_client_rect(
                id.clone(),
                rect.top(),
                rect.height(),
                scroll_y,
            ))
        })
        .collect::<Option<Vec<_>>>()?;
    if sections.iter().all(|s| s.height <= 0.0) {
        return None;
    }
    Some(sections)
}

/// Owns the page's [`ScrollTracker`] and republishes its state on every
/// window scroll sample. The scroll listener lives as long as the calling
/// component.
pub fn use_scroll_tracker(config: ScrollConfig) -> ScrollSignals {
    let (_, scroll_y) = use_window_scroll();
    let tracker = StoredValue::new(ScrollTracker::new(config));
    let (state, set_state) = signal(tracker.with_value(|t| t.state().clone()));
    let (hero, set_hero) = signal(tracker.with_value(|t| t.hero()));

    Effect::new(move |_| {
        let y = scroll_y.get();
        let layout = tracker.with_value(|t| measure_sections(&t.config().sections));
        let mut next = None;
        tracker.update_value(|t| {
            let state = t.observe(y, layout.as_deref()).clone();
            next = Some((state, t.hero()));
        });
        let Some((next_state, next_hero)) = next else {
            return;
        };
        if state.with_untracked(|s| s != &next_state) {
            set_state.set(next_state);
        }
        if hero.get_untracked() != next_hero {
            set_hero.set(next_hero);
        }
    });

    ScrollSignals {
        state: state.into(),
        hero: hero.into(),
    }
}

/// Spring-smoothed copy of `target`, stepped once per animation frame and
/// paused whenever it has come to rest.
pub fn use_spring(target: Signal<f64>, config: SpringConfig) -> Signal<f64> {
    let initial = target.get_untracked();
    let spring = StoredValue::new(Spring::new(config, initial));
    let (value, set_value) = signal(initial);
    let (settled, set_settled) = signal(true);

    let Pausable { pause, resume, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let goal = target.get_untracked();
        let mut at_rest = false;
        spring.update_value(|s| {
            set_value.set(s.advance(goal, args.delta / 1000.0));
            at_rest = s.is_settled(goal);
        });
        if at_rest {
            set_settled.set(true);
        }
    });

    Effect::new(move |_| {
        if settled.get() {
            pause();
        }
    });
    Effect::watch(
        move || target.get(),
        move |_, _, _| {
            set_settled.set(false);
            resume();
        },
        false,
    );

    value.into()
}

#[derive(Debug, Clone, Copy)]
pub struct TypewriterSignals {
    pub text: Signal<String>,
    pub done: Signal<bool>,
}

/// Types out `text` one character per `tick`, starting over whenever `text`
/// changes. The interval is cleared on completion and on cleanup, and a
/// cancelled run never emits again.
pub fn use_typewriter(text: Signal<String>, tick: Duration) -> TypewriterSignals {
    let (shown, set_shown) = signal(String::new());
    let (done, set_done) = signal(false);

    Effect::new(move |_| {
        let typewriter = Typewriter::new(text.get());
        let cancel = typewriter.cancel_handle();
        set_shown.set(String::new());
        set_done.set(typewriter.is_finished());
        if typewriter.is_finished() {
            return;
        }

        let slot = Arc::new(OnceLock::<IntervalHandle>::new());
        let on_tick = {
            let slot = Arc::clone(&slot);
            let typewriter = RefCell::new(typewriter);
            move || {
                let mut tw = typewriter.borrow_mut();
                if tw.is_cancelled() {
                    return;
                }
                match tw.next() {
                    Some(prefix) => set_shown.set(prefix),
                    None => {
                        log::debug!("typewriter finished: {}", tw.text());
                        set_done.set(true);
                        if let Some(handle) = slot.get() {
                            handle.clear();
                        }
                    }
                }
            }
        };

        match set_interval_with_handle(on_tick, tick) {
            Ok(handle) => {
                let _ = slot.set(handle);
                on_cleanup(move || {
                    if !done.get_untracked() {
                        log::debug!("typewriter cancelled before finishing");
                    }
                    cancel.cancel();
                    handle.clear();
                });
            }
            Err(e) => log::warn!("couldn't start typewriter interval: {e:?}"),
        }
    });

    TypewriterSignals {
        text: shown.into(),
        done: done.into(),
    }
}
