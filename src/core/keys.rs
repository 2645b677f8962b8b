// Keyboard decoding: fixed key codes mapped to player actions.

/// Every user-facing keyboard operation. The wiring decides which actions
/// are bound; unbound codes never call `preventDefault` so unrelated
/// browser shortcuts keep working.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PrevScene,
    NextScene,
    TogglePlay,
    ToggleMute,
    ToggleFullscreen,
    VolumeUp,
    VolumeDown,
    ToggleVideo,
    ToggleFx,
    ToggleShortcuts,
    ResetPrefs,
    CloseOverlays,
}

/// Decode a `KeyboardEvent.code` value.
#[inline]
pub fn action_for_code(code: &str) -> Option<Action> {
    match code {
        "ArrowLeft" => Some(Action::PrevScene),
        "ArrowRight" => Some(Action::NextScene),
        "Space" => Some(Action::TogglePlay),
        "KeyM" => Some(Action::ToggleMute),
        "KeyF" => Some(Action::ToggleFullscreen),
        "ArrowUp" => Some(Action::VolumeUp),
        "ArrowDown" => Some(Action::VolumeDown),
        "KeyV" => Some(Action::ToggleVideo),
        "KeyX" => Some(Action::ToggleFx),
        "Slash" => Some(Action::ToggleShortcuts),
        "KeyR" => Some(Action::ResetPrefs),
        "Escape" => Some(Action::CloseOverlays),
        _ => None,
    }
}

/// True when a key event targets a text-input-capable element and must be
/// ignored entirely.
#[inline]
pub fn is_text_input_target(tag_name: &str, content_editable: bool) -> bool {
    if content_editable {
        return true;
    }
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
