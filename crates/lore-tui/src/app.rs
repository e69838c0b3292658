//! Viewer state and rendering

use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use tracing::debug;

use lore_core::grammar::Language;
use lore_core::lore::{LoreBook, LoreMode, RecallContext, compile_lore};
use lore_core::monster::{MonraceId, MonsterRace, RaceTable};
use lore_core::spoiler::spoiler_order;
use lore_core::world::LoreOptions;

use crate::input::{Action, key_to_action};
use crate::screen::{ScreenSink, term_color};

const LIST_WIDTH: u16 = 34;
const SCROLL_STEP: u16 = 10;

/// Browser over every race, showing the recall of the selected one
pub struct App {
    races: RaceTable,
    book: LoreBook,
    options: LoreOptions,
    order: Vec<MonraceId>,
    selected: usize,
    mode: LoreMode,
    scroll: u16,
    should_quit: bool,
}

impl App {
    pub fn new(races: RaceTable, book: LoreBook, options: LoreOptions, mode: LoreMode) -> Self {
        let order = spoiler_order(&races).iter().map(|race| race.id).collect();
        Self {
            races,
            book,
            options,
            order,
            selected: 0,
            mode,
            scroll: 0,
            should_quit: false,
        }
    }

    /// Select a race by id; false when the id is not in the table
    pub fn select(&mut self, id: MonraceId) -> bool {
        match self.order.iter().position(|&other| other == id) {
            Some(index) => {
                self.selected = index;
                self.scroll = 0;
                true
            }
            None => false,
        }
    }

    pub fn selected_race(&self) -> Option<&MonsterRace> {
        self.order
            .get(self.selected)
            .and_then(|&id| self.races.get(id))
    }

    pub fn mode(&self) -> LoreMode {
        self.mode
    }

    pub fn language(&self) -> Language {
        self.options.language
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Recall of the selected race, wrapped to `width`
    pub fn recall_lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut sink = ScreenSink::new(width);
        if let Some(&id) = self.order.get(self.selected) {
            let ctx = RecallContext::new(&self.races, &self.book, self.options.clone());
            compile_lore(&ctx, id, self.mode, &mut sink);
        }
        sink.into_lines()
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && let Some(action) = key_to_action(key)
        {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: Action) {
        let last = self.order.len().saturating_sub(1);
        match action {
            Action::NextRace => self.move_to((self.selected + 1).min(last)),
            Action::PrevRace => self.move_to(self.selected.saturating_sub(1)),
            Action::FirstRace => self.move_to(0),
            Action::LastRace => self.move_to(last),
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(SCROLL_STEP),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(SCROLL_STEP),
            Action::CycleMode => {
                self.mode = match self.mode {
                    LoreMode::Normal => LoreMode::FullKnowledge,
                    LoreMode::FullKnowledge => LoreMode::Debug,
                    LoreMode::Debug => LoreMode::Normal,
                };
                self.scroll = 0;
            }
            Action::ToggleLanguage => {
                self.options.language = match self.options.language {
                    Language::English => Language::Japanese,
                    Language::Japanese => Language::English,
                };
            }
            Action::Quit => self.should_quit = true,
        }
        debug!(?action, selected = self.selected, mode = %self.mode, "viewer action");
    }

    fn move_to(&mut self, index: usize) {
        if index != self.selected {
            self.selected = index;
            self.scroll = 0;
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [main, footer] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());
        let [list_area, recall_area] =
            Layout::horizontal([Constraint::Length(LIST_WIDTH), Constraint::Min(20)]).areas(main);

        self.render_list(frame, list_area);
        self.render_recall(frame, recall_area);

        let help = format!(
            " j/k: race  space/b: scroll  m: mode ({})  L: language ({})  q: quit",
            self.mode, self.options.language
        );
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            footer,
        );
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let language = self.options.language;
        let items: Vec<ListItem> = self
            .order
            .iter()
            .filter_map(|&id| self.races.get(id))
            .map(|race| {
                let known = self.book.get(race.id).sights > 0;
                let style = if known {
                    Style::default().fg(term_color(race.color))
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(format!("{} {}", race.symbol, race.name_in(language))).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Monsters "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_recall(&self, frame: &mut Frame, area: Rect) {
        let title = self
            .selected_race()
            .map(|race| format!(" {} ", race.name_in(self.options.language)))
            .unwrap_or_default();
        let lines = self.recall_lines(area.width.saturating_sub(2));
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let races = RaceTable::new(vec![
            MonsterRace {
                id: MonraceId(7),
                name: "Soldier ant",
                level: 1,
                ..MonsterRace::BLANK
            },
            MonsterRace {
                id: MonraceId(2),
                name: "Grey mold",
                level: 1,
                ..MonsterRace::BLANK
            },
        ]);
        App::new(races, LoreBook::new(), LoreOptions::default(), LoreMode::Normal)
    }

    #[test]
    fn test_navigation_clamps() {
        let mut app = app();
        assert_eq!(app.selected_race().map(|r| r.id), Some(MonraceId(2)));
        app.apply(Action::PrevRace);
        assert_eq!(app.selected_race().map(|r| r.id), Some(MonraceId(2)));
        app.apply(Action::NextRace);
        app.apply(Action::NextRace);
        assert_eq!(app.selected_race().map(|r| r.id), Some(MonraceId(7)));
    }

    #[test]
    fn test_select_unknown() {
        let mut app = app();
        assert!(app.select(MonraceId(7)));
        assert!(!app.select(MonraceId(99)));
        assert_eq!(app.selected_race().map(|r| r.id), Some(MonraceId(7)));
    }

    #[test]
    fn test_mode_and_language_cycle() {
        let mut app = app();
        app.apply(Action::CycleMode);
        assert_eq!(app.mode(), LoreMode::FullKnowledge);
        app.apply(Action::CycleMode);
        app.apply(Action::CycleMode);
        assert_eq!(app.mode(), LoreMode::Normal);
        app.apply(Action::ToggleLanguage);
        assert_eq!(app.language(), Language::Japanese);
    }

    #[test]
    fn test_recall_lines_fit() {
        let mut app = app();
        app.apply(Action::CycleMode);
        let lines = app.recall_lines(30);
        assert!(!lines.is_empty());
        for line in &lines {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            assert!(text.trim_end().chars().count() <= 30, "{text:?}");
        }
    }
}
