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

use magic_coach_ui::app::App;
use magic_coach_ui::constants::debug_enabled;

fn main() {
    let level = if cfg!(feature = "debugAssertions") || debug_enabled() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(level);

    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
