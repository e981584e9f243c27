//! Property tests for key translation, wrapping and feedback

use proptest::prelude::*;

use deskterm::core::{feedback, wrap, ScrollbackWindow};
use deskterm::input::{self, KeyAction, KeyEvent, Modifiers};
use deskterm::Terminal;

fn modifiers() -> impl Strategy<Value = Modifiers> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(shift_left, shift_right, caps_lock)| {
        Modifiers {
            shift_left,
            shift_right,
            caps_lock,
        }
    })
}

proptest! {
    #[test]
    fn unknown_codes_are_unmapped(code in "[a-z]{1,12}", mods in modifiers()) {
        // DOM codes always start with an uppercase letter
        prop_assert_eq!(input::translate(&code, mods), KeyAction::Unmapped);
        prop_assert_eq!(input::translate_release(&code), KeyAction::Unmapped);
    }

    #[test]
    fn unknown_codes_leave_terminal_untouched(text in "[a-z ]{0,40}", code in "X[a-z0-9]{0,8}") {
        let mut term = Terminal::default();
        term.handle_keys(&deskterm::script::events_for_text(&text).unwrap());
        let before = term.snapshot();

        term.handle_key(&KeyEvent::down(code.clone()));
        term.handle_key(&KeyEvent::up(code));
        prop_assert_eq!(term.snapshot(), before);
    }

    #[test]
    fn shift_backspace_always_clears(text in "[ -~\n]{0,200}") {
        let mut term = Terminal::default();
        for c in text.chars() {
            if c == '\n' {
                term.apply_action(KeyAction::Commit);
            } else {
                term.apply_action(KeyAction::Char(c));
            }
        }
        term.handle_key(&KeyEvent::down("ShiftLeft"));
        term.handle_key(&KeyEvent::down("Backspace"));
        prop_assert_eq!(term.text(), "");
    }

    #[test]
    fn wrap_is_idempotent(text in "[ -~\n\t]{0,300}", width in 1usize..80) {
        prop_assert_eq!(wrap(&text, width), wrap(&text, width));
        prop_assert_eq!(
            ScrollbackWindow::from_text(&text, width, 15, '_'),
            ScrollbackWindow::from_text(&text, width, 15, '_')
        );
    }

    #[test]
    fn wrapped_lines_respect_width(text in "[ -~\n]{0,300}", width in 1usize..80) {
        let lines = wrap(&text, width);
        for line in &lines {
            prop_assert!(line.chars().count() <= width);
        }
        // Joining the lines back loses only the line breaks
        let joined: String = lines.concat();
        let original: String = text.chars().filter(|&c| c != '\n').collect();
        prop_assert_eq!(joined, original);
    }

    #[test]
    fn window_never_exceeds_rows(
        text in "[ -~\n]{0,2000}",
        width in 1usize..64,
        rows in 1usize..32
    ) {
        let window = ScrollbackWindow::from_text(&text, width, rows, '_');
        prop_assert!(window.len() <= rows);
        prop_assert!(window.get_from_end(0).unwrap().ends_with('_'));
    }

    #[test]
    fn brightness_is_linear(line in "[ -~]{0,48}", scale in 0.5f32..4.0) {
        let once = feedback::intensity(&[line.as_str()], scale);
        let twice = feedback::intensity(&[line.as_str(), line.as_str()], scale);
        prop_assert_eq!(twice, once * 2.0);
    }
}
