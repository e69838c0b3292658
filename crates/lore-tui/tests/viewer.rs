use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use lore_core::lore::{LoreBook, LoreMode};
use lore_core::monster::MonraceId;
use lore_core::world::LoreOptions;
use lore_tui::App;

fn screen_text(app: &mut App) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn viewer(mode: LoreMode) -> App {
    App::new(lore_data::race_table(), LoreBook::new(), LoreOptions::default(), mode)
}

#[test]
fn test_viewer_shows_list_and_recall() {
    let mut app = viewer(LoreMode::FullKnowledge);
    assert!(app.select(MonraceId(163)));
    let text = screen_text(&mut app);
    assert!(text.contains("Monsters"));
    assert!(text.contains("Baby red dragon"));
    assert!(text.contains("breathe"));
}

#[test]
fn test_unknown_race_says_nothing_known() {
    let mut app = viewer(LoreMode::Normal);
    assert!(app.select(MonraceId(163)));
    let text = screen_text(&mut app);
    assert!(text.contains("No battles to the death are recalled"));
}

#[test]
fn test_keys_drive_the_viewer() {
    let mut app = viewer(LoreMode::Normal);
    let press = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

    app.handle_event(press(KeyCode::Char('m')));
    assert_eq!(app.mode(), LoreMode::FullKnowledge);

    let first = app.selected_race().map(|race| race.id);
    app.handle_event(press(KeyCode::Char('j')));
    assert_ne!(app.selected_race().map(|race| race.id), first);

    app.handle_event(press(KeyCode::Char('q')));
    assert!(app.should_quit());
}
