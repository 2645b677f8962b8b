// Host-side tests for the keyboard action map.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keys {
    include!("../src/core/keys.rs");
}

use keys::{action_for_code, is_text_input_target, Action};

#[test]
fn every_bound_code_decodes_to_its_action() {
    let bindings = [
        ("ArrowLeft", Action::PrevScene),
        ("ArrowRight", Action::NextScene),
        ("Space", Action::TogglePlay),
        ("KeyM", Action::ToggleMute),
        ("KeyF", Action::ToggleFullscreen),
        ("ArrowUp", Action::VolumeUp),
        ("ArrowDown", Action::VolumeDown),
        ("KeyV", Action::ToggleVideo),
        ("KeyX", Action::ToggleFx),
        ("Slash", Action::ToggleShortcuts),
        ("KeyR", Action::ResetPrefs),
        ("Escape", Action::CloseOverlays),
    ];
    for (code, action) in bindings {
        assert_eq!(action_for_code(code), Some(action), "{code}");
    }
}

#[test]
fn unbound_codes_decode_to_nothing() {
    for code in ["KeyA", "Enter", "Tab", "Digit1", ""] {
        assert_eq!(action_for_code(code), None, "{code}");
    }
}

#[test]
fn text_inputs_swallow_shortcuts() {
    assert!(is_text_input_target("INPUT", false));
    assert!(is_text_input_target("input", false));
    assert!(is_text_input_target("TEXTAREA", false));
    assert!(is_text_input_target("SELECT", false));
    assert!(is_text_input_target("DIV", true));
    assert!(!is_text_input_target("DIV", false));
    assert!(!is_text_input_target("BUTTON", false));
}
