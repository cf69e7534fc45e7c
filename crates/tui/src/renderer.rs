use std::io::stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs, Wrap},
};
use showcase_core::{PAGE_META, Showcase};
use showcase_protocol::{Gradient, RenderCommand, Role, TextStyle, ThemeToken};

use crate::app::{Action, action_for_key};

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Black,
        ThemeToken::Surface => Color::Black,
        ThemeToken::Border => Color::DarkGray,
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::Accent => Color::LightBlue,
        ThemeToken::Highlight => Color::LightGreen,
        ThemeToken::CodeBackground => Color::Rgb(2, 6, 23),
        ThemeToken::CodeText => Color::Rgb(226, 232, 240),
        ThemeToken::TabActive => Color::Blue,
        ThemeToken::TabIdle => Color::DarkGray,
    }
}

/// Terminals have no gradients; use the opaque start color.
fn gradient_to_color(gradient: &Gradient) -> Color {
    Color::Rgb(gradient.from.r, gradient.from.g, gradient.from.b)
}

#[derive(Debug, Clone, PartialEq)]
struct TabTitle {
    label: String,
    selected: bool,
    color: Color,
}

/// The command list regrouped into the panes the terminal draws.
#[derive(Debug, Default)]
struct Screen {
    hero: Vec<Line<'static>>,
    snippet_label: String,
    code: String,
    tabs: Vec<TabTitle>,
    panel: Vec<Line<'static>>,
}

impl Screen {
    fn selected_tab(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.selected)
    }
}

fn layout_commands(commands: &[RenderCommand]) -> Screen {
    let mut screen = Screen::default();
    let mut roles: Vec<Role> = Vec::new();

    for cmd in commands {
        match cmd {
            RenderCommand::BeginRegion { role, .. } => roles.push(*role),
            RenderCommand::EndRegion => {
                roles.pop();
            }
            RenderCommand::Text {
                text, style, color, ..
            } => {
                let mut span_style = Style::default().fg(theme_to_color(*color));
                if *style == TextStyle::Heading {
                    span_style = span_style.add_modifier(Modifier::BOLD);
                }
                let line = Line::from(Span::styled(text.to_string(), span_style));
                match roles.last() {
                    Some(Role::Banner) => screen.hero.push(line),
                    Some(Role::TabPanel) => {
                        if !screen.panel.is_empty() {
                            screen.panel.push(Line::default());
                        }
                        screen.panel.push(line);
                    }
                    _ if *style == TextStyle::Label => screen.snippet_label = text.to_string(),
                    _ => {}
                }
            }
            RenderCommand::Code { text, .. } => screen.code = text.to_string(),
            RenderCommand::Tab {
                label,
                selected,
                gradient,
                ..
            } => screen.tabs.push(TabTitle {
                label: label.to_string(),
                selected: *selected,
                color: gradient_to_color(gradient),
            }),
            RenderCommand::BeginList { .. } => screen.panel.push(Line::default()),
            RenderCommand::ListItem { text } => screen.panel.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme_to_color(ThemeToken::TextMuted))),
                Span::styled(
                    text.to_string(),
                    Style::default().fg(theme_to_color(ThemeToken::Accent)),
                ),
            ])),
            RenderCommand::EndList => {}
        }
    }
    screen
}

fn draw(frame: &mut Frame, screen: &Screen) {
    let [header_area, hero_area, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Min(0),
    ])
    .areas(frame.area());
    let [code_area, timeline_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(body_area);
    let [tabs_area, panel_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(timeline_area);

    let header = Paragraph::new(format!(
        " {} | ←→ switch tab | 1-{} jump | q quit ",
        PAGE_META.title,
        screen.tabs.len()
    ))
    .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(header, header_area);

    frame.render_widget(
        Paragraph::new(screen.hero.clone()).wrap(Wrap { trim: true }),
        hero_area,
    );

    let code = Paragraph::new(screen.code.as_str())
        .style(
            Style::default()
                .fg(theme_to_color(ThemeToken::CodeText))
                .bg(theme_to_color(ThemeToken::CodeBackground)),
        )
        .block(Block::bordered().title(format!(" {} ", screen.snippet_label)));
    frame.render_widget(code, code_area);

    let titles: Vec<Line> = screen
        .tabs
        .iter()
        .map(|t| Line::from(Span::styled(t.label.clone(), Style::default().fg(t.color))))
        .collect();
    let tabs = Tabs::new(titles)
        .select(screen.selected_tab().unwrap_or_default())
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                .fg(theme_to_color(ThemeToken::TabActive)),
        )
        .block(Block::bordered());
    frame.render_widget(tabs, tabs_area);

    frame.render_widget(
        Paragraph::new(screen.panel.clone())
            .wrap(Wrap { trim: true })
            .block(Block::bordered()),
        panel_area,
    );
}

/// Run the interactive view until the user quits.
///
/// Every handled keypress goes through `select_phase` and the next frame is
/// drawn from a fresh `render()`.
///
/// Once raw mode is on, the terminal is restored on every exit path.
pub fn render_tui(showcase: &mut Showcase) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let result = run(showcase);
    let restored = restore_terminal();
    result.and(restored)
}

fn run(showcase: &mut Showcase) -> Result<()> {
    execute!(stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    event_loop(&mut terminal, showcase)
}

/// Attempt every restore step, then report the first failure.
fn restore_terminal() -> Result<()> {
    first_error([
        disable_raw_mode().context("failed to disable raw mode"),
        execute!(stdout(), LeaveAlternateScreen).context("failed to leave alternate screen"),
        execute!(stdout(), Show).context("failed to show cursor"),
    ])
}

fn first_error<const N: usize>(results: [Result<()>; N]) -> Result<()> {
    results.into_iter().collect()
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    showcase: &mut Showcase,
) -> Result<()> {
    loop {
        let screen = layout_commands(&showcase.render());
        terminal.draw(|frame| draw(frame, &screen))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match action_for_key(&key, showcase) {
                Action::Quit => break,
                Action::Select(index) => {
                    showcase.select_phase(index);
                }
                Action::Ignore => {}
            }
        }
    }
    Ok(())
}
