use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// The closed set of logical events the editor core reacts to. Raw platform
/// codes never cross this boundary; anything unrecognized is dropped here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Tab,
    /// The dedicated command-mode toggle key (F2).
    ToggleMode,
    /// Pointer click at screen cell (column, row).
    Click { x: u16, y: u16 },
}

/// Translates a terminal event into a logical input event, if it maps.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<InputEvent> {
    // Key release events would double every keystroke on some platforms.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::F(2) => Some(InputEvent::ToggleMode),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Left => Some(InputEvent::Left),
        KeyCode::Right => Some(InputEvent::Right),
        KeyCode::Up => Some(InputEvent::Up),
        KeyCode::Down => Some(InputEvent::Down),
        KeyCode::Tab => Some(InputEvent::Tab),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Char(c))
        }
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
            x: mouse.column,
            y: mouse.row,
        }),
        _ => None,
    }
}
