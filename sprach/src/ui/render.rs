//! Render orchestration for the Sprach TUI

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use sprach_core::memory::{GameStatus, MemoryGame};
use sprach_core::story::{PageDirection, QuestionState, QuizPhase};
use sprach_core::{
    AppSession, AuthForm, FormMode, Locale, ScreenState, Section, StoryPager, StoryQuiz,
    VocabularyDeck,
};

use crate::app::{App, BOARD_COLUMNS};
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{symbol_label, BoardWidget, InputWidget};

/// Main render function
pub fn render(frame: &mut Frame, app: &App, session: &AppSession) {
    let layout = AppLayout::calculate(frame.area());
    let align = alignment(session.locale());

    render_title_bar(frame, app, session, layout.title_area);

    match session.state() {
        ScreenState::Home => render_home(frame, app, session, layout.body_area, align),
        ScreenState::About => render_about(frame, app, session, layout.body_area, align),
        ScreenState::Memory(game) => render_memory(frame, app, session, game, layout.body_area),
        ScreenState::Pictures(deck) => {
            render_pictures(frame, app, session, deck, layout.body_area, align)
        }
        ScreenState::Stories(pager) => {
            render_pager(frame, app, session, pager, layout.body_area, align)
        }
        ScreenState::HardStories(quiz) => {
            render_quiz(frame, app, session, quiz, layout.body_area, align)
        }
        ScreenState::Login(form) => render_login(frame, app, session, form, layout.body_area, align),
    }

    render_status_bar(frame, app, layout.status_bar, align);
    render_hotkey_bar(frame, app, session, layout.hotkey_bar);
}

/// Right-to-left locales read from the right edge.
fn alignment(locale: Locale) -> Alignment {
    if locale.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

fn screen_block<'a>(app: &App, title: String, align: Alignment) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(align)
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true))
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, app: &App, session: &AppSession, area: Rect) {
    let title = format!(
        " {} | {} | {} ",
        session.t(Section::Home, "title"),
        session.t(Section::Home, session.screen().key()),
        session.locale().native_name(),
    );
    let line = Line::from(Span::styled(title, app.theme.title_style()));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_home(frame: &mut Frame, app: &App, session: &AppSession, area: Rect, align: Alignment) {
    let mut lines = vec![
        Line::styled(session.t(Section::Home, "welcome"), app.theme.title_style()),
        Line::styled(session.t(Section::Home, "subtitle"), app.theme.system_style()),
        Line::from(""),
    ];
    for (i, entry) in session.home_menu().into_iter().enumerate() {
        let selected = i == app.menu_index;
        let marker = if selected { "▶ " } else { "  " };
        lines.push(Line::styled(
            format!("{marker}{}", entry.label),
            app.theme.selection_style(selected),
        ));
    }

    let block = screen_block(app, session.t(Section::Home, "tagline"), align);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(align)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_about(frame: &mut Frame, app: &App, session: &AppSession, area: Rect, align: Alignment) {
    let lines = vec![
        Line::styled(session.t(Section::About, "intro"), app.theme.text_style()),
        Line::from(""),
        Line::styled(
            session.t(Section::About, "mission"),
            app.theme.text_style().add_modifier(Modifier::ITALIC),
        ),
    ];
    let block = screen_block(app, session.t(Section::About, "title"), align);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(align)
            .wrap(Wrap { trim: true }),
        area,
    );
}

// ============================================================================
// Memory
// ============================================================================

fn render_memory(frame: &mut Frame, app: &App, session: &AppSession, game: &MemoryGame, area: Rect) {
    let align = alignment(session.locale());
    let block = screen_block(app, session.t(Section::Memory, "title"), align);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [info_area, board_area, result_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .areas(inner);

    let clock = game.clock();
    let countdown = match game.status() {
        GameStatus::Idle => game.config().countdown_secs,
        _ => clock.countdown_seconds,
    };
    let best = game
        .best_time()
        .map_or_else(|| "-".to_string(), |s| format!("{s}s"));
    let info = Line::from(vec![
        Span::raw(format!("{}: {}s", session.t(Section::Memory, "time"), clock.elapsed_seconds)),
        Span::raw(" | "),
        Span::styled(
            format!("{}: {countdown}s", session.t(Section::Memory, "timeLeft")),
            app.theme.countdown_style(countdown),
        ),
        Span::raw(" | "),
        Span::raw(format!("{}: {}", session.t(Section::Memory, "moves"), game.moves())),
        Span::raw(" | "),
        Span::raw(format!("{}: {best}", session.t(Section::Memory, "bestTime"))),
    ]);
    frame.render_widget(Paragraph::new(info).alignment(align), info_area);

    let board = BoardWidget::new(game.tiles(), BOARD_COLUMNS, &app.theme)
        .cursor(app.tile_cursor)
        .mirrored(session.locale().is_rtl());
    frame.render_widget(board, board_area);

    let result = match game.status() {
        GameStatus::Idle => Line::styled(
            session.t(Section::Memory, "instructions"),
            app.theme.system_style(),
        ),
        GameStatus::Running => Line::from(""),
        GameStatus::Won => {
            let text = format!(
                "{} {}",
                session.t(Section::Memory, "congratulations"),
                session.t(Section::Memory, "gameComplete")
            );
            Line::styled(text, app.theme.feedback_style(true))
        }
        GameStatus::Expired => Line::styled(
            session.t(Section::Memory, "timeUp"),
            app.theme.feedback_style(false),
        ),
    };
    frame.render_widget(Paragraph::new(result).alignment(align), result_area);
}

// ============================================================================
// Pictures
// ============================================================================

fn render_pictures(
    frame: &mut Frame,
    app: &App,
    session: &AppSession,
    deck: &VocabularyDeck,
    area: Rect,
    align: Alignment,
) {
    let locale = session.locale();
    let mut lines = vec![
        Line::styled(session.t(Section::Pictures, "description"), app.theme.system_style()),
        Line::from(""),
    ];

    if let Some(entry) = deck.current() {
        lines.push(Line::styled(
            format!("[ {} ]", symbol_label(&entry.symbol)),
            app.theme.title_style(),
        ));
        lines.push(Line::styled(
            format!(
                "{}: {}",
                session.t(Section::Pictures, "vocabulary"),
                entry.word.get(locale)
            ),
            app.theme.text_style().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            format!(
                "{}: {}",
                session.t(Section::Pictures, "meaning"),
                entry.word.get(locale.toggle())
            ),
            app.theme.text_style(),
        ));
        if let Some(example) = &entry.example {
            lines.push(Line::styled(
                format!("{}: {}", session.t(Section::Pictures, "example"), example.get(locale)),
                app.theme.text_style().add_modifier(Modifier::ITALIC),
            ));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("{} / {}", deck.index() + 1, deck.len()),
            app.theme.system_style(),
        ));
    }

    let block = screen_block(app, session.t(Section::Pictures, "title"), align);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(align)
            .wrap(Wrap { trim: true }),
        area,
    );
}

// ============================================================================
// Stories
// ============================================================================

fn render_pager(
    frame: &mut Frame,
    app: &App,
    session: &AppSession,
    pager: &StoryPager,
    area: Rect,
    align: Alignment,
) {
    let locale = session.locale();
    let story = pager.story();

    let slide = match pager.transition() {
        Some(PageDirection::Forward) => " ⇢",
        Some(PageDirection::Backward) => " ⇠",
        None => "",
    };
    let title = format!(
        "{} | {} {}/{}{slide}",
        story.title.get(locale),
        session.t(Section::Stories, "page"),
        pager.page() + 1,
        pager.page_count()
    );

    let mut lines: Vec<Line> = story
        .paragraphs
        .iter()
        .flat_map(|p| [Line::raw(p.get(locale).to_string()), Line::from("")])
        .collect();

    if story.has_quiz() {
        lines.push(Line::styled(
            session.t(Section::Stories, "testTitle"),
            app.theme.title_style(),
        ));
        for (q, question) in story.questions.iter().enumerate() {
            let focused = q == app.question_cursor;
            let marker = if focused { "▶ " } else { "  " };
            lines.push(Line::styled(
                format!("{marker}{}. {}", q + 1, question.prompt.get(locale)),
                app.theme.selection_style(focused),
            ));
            let selected = pager.selected(q);
            for (o, option) in question.options.iter().enumerate() {
                let style = match selected {
                    Some(s) if s == o => app.theme.feedback_style(question.is_correct(o)),
                    _ => app.theme.text_style(),
                };
                lines.push(Line::styled(
                    format!("    {}) {}", o + 1, option.get(locale)),
                    style,
                ));
            }
        }
        lines.push(Line::styled(
            format!(
                "{}: {}/{}",
                session.t(Section::Memory, "score"),
                pager.score(),
                story.questions.len()
            ),
            app.theme.system_style(),
        ));
    }

    let block = screen_block(app, title, align);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(align)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_quiz(
    frame: &mut Frame,
    app: &App,
    session: &AppSession,
    quiz: &StoryQuiz,
    area: Rect,
    align: Alignment,
) {
    let locale = session.locale();
    let story = quiz.story();
    let title = format!(
        "{} | {} ({}/{})",
        session.t(Section::Stories, "hardStories"),
        story.title.get(locale),
        quiz.story_index() + 1,
        quiz.story_count()
    );
    let block = screen_block(app, title, align);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match quiz.phase() {
        QuizPhase::Reading => {
            let [text_area, gauge_area] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(inner);
            let lines: Vec<Line> = story
                .paragraphs
                .iter()
                .flat_map(|p| [Line::raw(p.get(locale).to_string()), Line::from("")])
                .collect();
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(align)
                    .wrap(Wrap { trim: true }),
                text_area,
            );

            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .title(format!(" {} ", session.t(Section::Stories, "readingProgress")))
                        .borders(Borders::ALL)
                        .border_style(app.theme.border_style(false)),
                )
                .gauge_style(Style::default().fg(app.theme.accent))
                .percent(u16::from(quiz.reading_progress()));
            frame.render_widget(gauge, gauge_area);
        }
        QuizPhase::Quizzing => {
            let mut lines = Vec::new();
            if let (Some(question), Some(attempt)) = (quiz.current_question(), quiz.attempt()) {
                lines.push(Line::styled(
                    format!(
                        "{} {}/{}",
                        session.t(Section::Stories, "question"),
                        attempt.current_question() + 1,
                        quiz.total()
                    ),
                    app.theme.system_style(),
                ));
                lines.push(Line::styled(
                    question.prompt.get(locale).to_string(),
                    app.theme.title_style(),
                ));
                lines.push(Line::from(""));

                let answered = match quiz.question_state() {
                    QuestionState::Answered { selected, correct } => Some((selected, correct)),
                    QuestionState::Unanswered => None,
                };
                for (o, option) in question.options.iter().enumerate() {
                    let style = match answered {
                        Some((selected, correct)) if selected == o => {
                            app.theme.feedback_style(correct)
                        }
                        Some(_) if question.is_correct(o) => app.theme.feedback_style(true),
                        _ => app.theme.text_style(),
                    };
                    lines.push(Line::styled(
                        format!("{}) {}", o + 1, option.get(locale)),
                        style,
                    ));
                }
                if let Some((_, correct)) = answered {
                    lines.push(Line::from(""));
                    let key = if correct { "correct" } else { "wrong" };
                    lines.push(Line::styled(
                        session.t(Section::Stories, key),
                        app.theme.feedback_style(correct),
                    ));
                }
            }
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(align)
                    .wrap(Wrap { trim: true }),
                inner,
            );
        }
        QuizPhase::Results => {
            let popup = centered_rect_fixed(50, 7, inner);
            let mut lines = vec![
                Line::styled(session.t(Section::Stories, "testResult"), app.theme.title_style()),
                Line::from(format!("{}/{}", quiz.score(), quiz.total())),
            ];
            if let Some(key) = quiz.result_key() {
                lines.push(Line::styled(
                    session.t(Section::Stories, key),
                    app.theme.feedback_style(quiz.is_perfect()),
                ));
            }
            let mut hint = format!("Enter: {}", session.t(Section::Stories, "tryAgain"));
            if quiz.has_next_story() {
                hint.push_str(&format!(" | n: {}", session.t(Section::Stories, "nextStory")));
            }
            lines.push(Line::styled(hint, app.theme.system_style()));
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                popup,
            );
        }
    }
}

// ============================================================================
// Login
// ============================================================================

fn render_login(
    frame: &mut Frame,
    app: &App,
    session: &AppSession,
    form: &AuthForm,
    area: Rect,
    align: Alignment,
) {
    let (title_key, switch_prompt, switch_action) = match form.mode() {
        FormMode::Login => ("login", "noAccount", "registerHere"),
        FormMode::Register => ("register", "hasAccount", "backToLogin"),
    };
    let block = screen_block(app, session.t(Section::Login, title_key), align);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = form.fields();
    let mut constraints = vec![Constraint::Length(3); fields.len()];
    constraints.push(Constraint::Min(1));
    let rows = Layout::vertical(constraints).split(inner);

    for (i, field) in fields.iter().enumerate() {
        let label = session.t(Section::Login, field.key());
        let widget = InputWidget::new(&label, form.value(*field), &app.theme)
            .active(i == app.field_index)
            .secret(field.is_secret())
            .alignment(align);
        frame.render_widget(widget, rows[i]);
    }

    let hint = Line::styled(
        format!(
            "{} F3: {}",
            session.t(Section::Login, switch_prompt),
            session.t(Section::Login, switch_action)
        ),
        app.theme.system_style(),
    );
    frame.render_widget(Paragraph::new(hint).alignment(align), rows[fields.len()]);
}

// ============================================================================
// Bars
// ============================================================================

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect, align: Alignment) {
    let message = app.status().unwrap_or("");
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(false));
    frame.render_widget(
        Paragraph::new(Line::styled(message, app.theme.text_style()))
            .alignment(align)
            .block(block),
        area,
    );
}

/// Render the hotkey bar
fn render_hotkey_bar(frame: &mut Frame, app: &App, session: &AppSession, area: Rect) {
    let language = format!("F2 {}", session.t(Section::Navbar, "language"));
    let home = format!("Esc {}", session.t(Section::Navbar, "home"));
    let keys = match session.state() {
        ScreenState::Home => "↑↓ Enter  q".to_string(),
        ScreenState::Memory(_) => format!(
            "←↑↓→ Enter  r {}",
            session.t(Section::Memory, "reset")
        ),
        ScreenState::Pictures(_) => "← →".to_string(),
        ScreenState::Stories(_) => "↑↓  1-3  ← →".to_string(),
        ScreenState::HardStories(quiz) if quiz.has_next_story() => format!(
            "Enter {}  1-3  n {}",
            session.t(Section::Stories, "startTest"),
            session.t(Section::Stories, "nextStory")
        ),
        ScreenState::HardStories(_) => {
            format!("Enter {}  1-3", session.t(Section::Stories, "startTest"))
        }
        ScreenState::Login(_) => "Tab  Enter  F3".to_string(),
        ScreenState::About => String::new(),
    };
    let line = Line::from(vec![
        Span::styled(format!(" {keys} "), app.theme.system_style()),
        Span::styled(format!(" {language}  {home} "), app.theme.system_style()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use sprach_core::testing::test_session;
    use sprach_core::Screen;

    fn draw(app: &App, session: &AppSession) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app, session)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_home_lists_menu() {
        let app = App::new();
        let session = test_session();
        let screen = draw(&app, &session);
        assert!(screen.contains("Marifa"));
        assert!(screen.contains("Memory Spiel"));
    }

    #[test]
    fn test_memory_shows_countdown() {
        let mut app = App::new();
        let mut session = test_session();
        app.go_to(&mut session, Screen::Memory);
        let screen = draw(&app, &session);
        assert!(screen.contains("Verbleibend: 60s"));
        assert!(screen.contains("Finde alle Paare!"));
    }

    #[test]
    fn test_every_screen_renders() {
        let mut app = App::new();
        let mut session = test_session();
        for screen in [
            Screen::Login,
            Screen::About,
            Screen::Pictures,
            Screen::Stories,
            Screen::HardStories,
        ] {
            app.go_to(&mut session, screen);
            assert!(!draw(&app, &session).trim().is_empty());
        }
    }
}
