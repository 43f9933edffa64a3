/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Self-contained countdown for the current round.

use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RoundTimerProps {
    /// Seconds per round.
    pub round_time: u32,
    /// Unix timestamp in milliseconds when the first round started.
    pub start_time_ms: f64,
}

/// Updates once a second without re-rendering its parent. Rounds follow
/// each other back to back.
#[function_component(RoundTimer)]
pub fn round_timer(props: &RoundTimerProps) -> Html {
    let clock = use_state(|| round_clock(0, props.round_time));

    {
        let clock = clock.clone();
        use_effect_with(
            (props.round_time, props.start_time_ms),
            move |&(round_time, start_ms)| {
                clock.set(round_clock(elapsed_secs(start_ms), round_time));

                let interval = Interval::new(1000, move || {
                    clock.set(round_clock(elapsed_secs(start_ms), round_time));
                });

                move || drop(interval)
            },
        );
    }

    let RoundClock { round, remaining } = *clock;
    html! {
        <div class="round-timer">
            <span class="round-number">{ format!("Round {round}") }</span>
            <span class="round-remaining">{ format!("{:02}:{:02}", remaining / 60, remaining % 60) }</span>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundClock {
    /// 1-based.
    pub round: u64,
    /// Seconds left in the current round.
    pub remaining: u64,
}

/// Where a back-to-back sequence of `round_time`-second rounds stands after
/// `elapsed` seconds. A zero round time is treated as one second.
pub fn round_clock(elapsed: u64, round_time: u32) -> RoundClock {
    let round_time = u64::from(round_time.max(1));
    RoundClock {
        round: elapsed / round_time + 1,
        remaining: round_time - elapsed % round_time,
    }
}

fn elapsed_secs(start_ms: f64) -> u64 {
    let elapsed_ms = (js_sys::Date::now() - start_ms).max(0.0);
    (elapsed_ms / 1000.0) as u64
}
