use pagedom::{Event, EventKind, Key, Modifiers, MouseButton};

// ============================================================================
// Event Kinds
// ============================================================================

#[test]
fn test_event_kinds() {
    assert_eq!(Event::click().kind(), EventKind::Click);
    assert_eq!(
        Event::Click {
            button: MouseButton::Middle
        }
        .kind(),
        EventKind::AuxClick
    );
    assert_eq!(Event::key(Key::Enter).kind(), EventKind::KeyDown);
    assert_eq!(EventKind::KeyDown.to_string(), "keydown");
}

// ============================================================================
// Key Identifiers
// ============================================================================

#[test]
fn test_identifier_of_named_keys() {
    assert_eq!(Key::Enter.identifier(), "Enter");
    assert_eq!(Key::SPACE.identifier(), " ");
    assert_eq!(Key::Up.identifier(), "ArrowUp");
    assert_eq!(Key::BackTab.identifier(), "Tab");
    assert_eq!(Key::F(5).identifier(), "F5");
    assert_eq!(Key::Char('x').identifier(), "x");
}

#[test]
fn test_from_identifier() {
    assert_eq!(Key::from_identifier("Enter"), Some(Key::Enter));
    assert_eq!(Key::from_identifier(" "), Some(Key::SPACE));
    assert_eq!(Key::from_identifier("Spacebar"), Some(Key::SPACE));
    assert_eq!(Key::from_identifier("ArrowLeft"), Some(Key::Left));
    assert_eq!(Key::from_identifier("F12"), Some(Key::F(12)));
    assert_eq!(Key::from_identifier("F"), Some(Key::Char('F')));
    assert_eq!(Key::from_identifier("é"), Some(Key::Char('é')));
    assert_eq!(Key::from_identifier("Fx"), None);
    assert_eq!(Key::from_identifier("Hyper"), None);
    assert_eq!(Key::from_identifier(""), None);
}

#[test]
fn test_key_serde_uses_identifiers() {
    let json = serde_json::to_string(&vec![Key::Enter, Key::SPACE]).unwrap();
    assert_eq!(json, r#"["Enter"," "]"#);

    let keys: Vec<Key> = serde_json::from_str(r#"["Escape","a"]"#).unwrap();
    assert_eq!(keys, vec![Key::Escape, Key::Char('a')]);

    assert!(serde_json::from_str::<Key>(r#""NotAKey""#).is_err());
}

// ============================================================================
// Crossterm Conversion
// ============================================================================

#[test]
fn test_from_crossterm() {
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton as CtButton};

    assert_eq!(Key::from(KeyCode::Enter), Key::Enter);
    assert_eq!(Key::from(KeyCode::Char(' ')), Key::SPACE);
    assert_eq!(Key::from(KeyCode::CapsLock), Key::Unidentified);

    let mods = Modifiers::from(KeyModifiers::SHIFT | KeyModifiers::CONTROL);
    assert!(mods.shift && mods.ctrl && !mods.alt);
    assert_eq!(Modifiers::from(KeyModifiers::NONE), Modifiers::new());

    assert_eq!(MouseButton::from(CtButton::Left), MouseButton::Left);
}
