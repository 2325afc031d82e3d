use crate::application::{App, AppMode};
use crate::domain::Step;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What the display shows for one step: the instruction caption, the
/// picture, and a static one-line description of the picture.
pub struct StepContent {
    pub caption: &'static str,
    pub art: &'static str,
    pub description: &'static str,
}

/// Looks up the display content for a step.
pub fn step_content(step: Step) -> StepContent {
    match step {
        Step::PickLemon => StepContent {
            caption: "Tap the lemon tree to select a lemon",
            art: LEMON_TREE_ART,
            description: "Lemon tree",
        },
        Step::SqueezeLemon => StepContent {
            caption: "Keep tapping the lemon to squeeze it",
            art: LEMON_ART,
            description: "Lemon",
        },
        Step::DrinkLemonade => StepContent {
            caption: "Tap the lemonade to drink it",
            art: LEMONADE_ART,
            description: "Glass of lemonade",
        },
        Step::EmptyGlass => StepContent {
            caption: "Tap the empty glass to start again",
            art: EMPTY_GLASS_ART,
            description: "Empty glass",
        },
    }
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_stage(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("Lemon Game | Step {}/4", app.game.step.number()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn render_stage(f: &mut Frame, app: &App, area: Rect) {
    let content = step_content(app.game.step);

    let art_style = match app.game.step {
        Step::PickLemon => Style::default().fg(Color::Green),
        Step::SqueezeLemon => Style::default().fg(Color::Yellow),
        Step::DrinkLemonade => Style::default().fg(Color::LightYellow),
        Step::EmptyGlass => Style::default().fg(Color::DarkGray),
    };

    let art_lines: Vec<&str> = content.art.lines().collect();

    // Pad the top so the picture sits roughly in the middle of the stage
    let inner_height = area.height.saturating_sub(2);
    let content_height = art_lines.len() as u16 + 2;
    let top_padding = inner_height.saturating_sub(content_height) / 2;

    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..top_padding {
        lines.push(Line::from(""));
    }
    for art_line in art_lines {
        lines.push(Line::from(Span::styled(art_line, art_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        content.caption,
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let stage = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(content.description),
        );
    f.render_widget(stage, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Playing => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                format!(
                    "Glasses finished: {} | Space/Enter or click: tap | F1/?: help | q: quit",
                    app.glasses_served
                )
            }
        }
        AppMode::Help => {
            "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string()
        }
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Playing => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("Lemonade Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"TERMINAL LEMONADE

=== HOW TO PLAY ===
Making lemonade takes four steps. Tap the picture to move through them:

1. Lemon tree        Tap the tree to pick a lemon.
2. Lemon             Keep tapping to squeeze out the juice.
                     Each lemon needs between 2 and 4 squeezes,
                     and every lemon is different.
3. Glass of lemonade Tap the glass to drink it.
4. Empty glass       Tap the empty glass to start again.

The status bar keeps count of the glasses you finish. The count
lasts for this session only.

=== TAPPING ===
Space or Enter       Tap the picture
Left mouse click     Tap the picture (anywhere on the screen)

=== OTHER KEYS ===
F1 or ?              Show this help
q                    Quit the game

=== HELP NAVIGATION ===
↑↓ or j/k            Scroll help text up/down one line
Page Up/Down         Scroll help text up/down 5 lines
Home                 Jump to top of help text
Esc/F1/?/q           Close this help window"#.to_string()
}

const LEMON_TREE_ART: &str = r#"           @@@@@@@@
       @@@@@@@@@@@@@@@@
     @@@@@ o @@@@@@ o @@@@
    @@@@@@@@@@@@@@@@@@@@@@@
   @@@ o @@@@@@ o @@@@@ o @@
    @@@@@@@@ o @@@@@@@@@@@
      @@@@@@@@@@@@@@@@@@
         @@@@@@@@@@
             |  |
             |  |
          ___|  |___
     ~~~~~~~~~~~~~~~~~~~~"#;

const LEMON_ART: &str = r#"              __
          .-'`  `'-.
        .'          '.
       /              \
      ;                ;
      ;                ;
       \              /
        '.          .'
          '-.____.-'"#;

const LEMONADE_ART: &str = r#"          \
           \
     ______\_______
     |      \     |
     | ~ ~ ~ ~ ~ ~|
     |  o    o    |
     | ~ ~ ~ ~ ~ ~|
     |    o    o  |
     |____________|"#;

const EMPTY_GLASS_ART: &str = r#"      ____________
     |            |
     |            |
     |            |
     |            |
     |            |
     |____________|"#;
