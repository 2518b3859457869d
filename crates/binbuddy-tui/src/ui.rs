// UI rendering logic
use binbuddy_core::{advisor, REWARD_CATALOG};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::{App, Modal, Screen};

const DESCRIPTION: [&str; 2] = [
    "UNC Charlotte students have access to the Waste Wizard, yet many rarely use it. With BinBuddy, you’re making sustainability a priority. Recycling isn’t always black and white; contamination can prevent recyclables from being reused. This app is designed to simplify that process, making it easy for you to contribute to a cleaner, greener campus.",
    "Every recycled item isn’t just a step toward a cleaner campus but a contribution to a brighter future. With every point, you’re reducing waste and nurturing a more sustainable campus community. Imagine the ripple effects: less waste, more resources saved, and a campus that’s greener for every Niner who cares. 🌎",
];

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(5),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);

    match app.screen {
        Screen::Description => render_description(frame, chunks[2]),
        Screen::Camera => render_camera(frame, app, chunks[2]),
        Screen::Profile => render_profile(frame, app, chunks[2]),
    }

    render_status_bar(frame, app, chunks[3]);

    // The dialog paints over everything, same as a native alert.
    if app.modal.is_some() {
        let area = frame.area();
        render_modal(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![Span::styled(
        "♻ BinBuddy",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(logo, header_chunks[0]);

    let (badge, badge_style) = match app.endpoint_online {
        Some(true) => (
            " online ",
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        Some(false) => (
            " offline ",
            Style::default().fg(Color::White).bg(Color::Red),
        ),
        None => (
            " ... ",
            Style::default().fg(Color::Black).bg(Color::DarkGray),
        ),
    };

    let endpoint = Paragraph::new(Line::from(vec![
        Span::styled(app.endpoint.clone(), Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled(badge, badge_style.add_modifier(Modifier::BOLD)),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Right);
    frame.render_widget(endpoint, header_chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Screen::ALL.iter().map(|s| Line::from(s.title())).collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(app.screen.index())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_description(frame: &mut Frame, area: Rect) {
    let categories: Vec<&str> = advisor::known_categories().collect();

    let mut lines = vec![Line::from("")];
    for paragraph in DESCRIPTION {
        lines.push(Line::from(paragraph));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "BinBuddy can recognize:",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(categories.join(", ")));

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" About BinBuddy "),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(widget, area);
}

fn render_camera(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = app
        .photos
        .iter()
        .map(|photo| {
            let name = photo
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| photo.display().to_string());
            ListItem::new(name)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Photos ({}) ", app.photos.len())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, chunks[0], &mut app.photo_state);

    let mut lines = vec![Line::from("")];
    if let Some(photo) = app.selected_photo() {
        lines.push(Line::from(vec![
            Span::styled("Selected: ", Style::default().fg(Color::Gray)),
            Span::raw(photo.display().to_string()),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "No photos found. Drop some in the photos directory and press 'r'.",
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));

    if app.uploading {
        lines.push(Line::from(Span::styled(
            "Classifying photo...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    } else if let Some(scan) = &app.last_scan {
        lines.push(Line::from(Span::styled(
            scan.summary(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Press ENTER to scan the selected photo.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Scan "))
        .wrap(Wrap { trim: true });

    frame.render_widget(panel, chunks[1]);
}

fn render_profile(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let stats = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Points: {}", app.ledger.points()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Items Scanned: {}", app.ledger.items_scanned()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Profile "));

    frame.render_widget(stats, chunks[0]);

    let items: Vec<ListItem> = REWARD_CATALOG
        .iter()
        .map(|reward| ListItem::new(format!("{} - {} points", reward.name, reward.points)))
        .collect();

    let rewards = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Rewards "))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(rewards, chunks[1], &mut app.reward_state);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if app.uploading {
        Span::styled("Classifying photo...", Style::default().fg(Color::Yellow))
    } else if let Some(modal) = &app.modal {
        match modal {
            Modal::Confirm { .. } => {
                Span::styled("y: yes | n: no", Style::default().fg(Color::Yellow))
            }
            Modal::Notice { .. } => {
                Span::styled("ENTER/ESC: dismiss", Style::default().fg(Color::Yellow))
            }
        }
    } else {
        match app.screen {
            Screen::Description => Span::raw("TAB/1/2/3: switch screens | q: quit"),
            Screen::Camera => {
                Span::raw("j/k: choose photo | ENTER: scan | r: rescan | TAB: switch | q: quit")
            }
            Screen::Profile => {
                Span::raw("j/k: choose reward | ENTER: redeem | TAB: switch | q: quit")
            }
        }
    };

    frame.render_widget(Paragraph::new(Line::from(status)), area);
}

fn render_modal(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(modal) = &app.modal {
        let popup_width = ((area.width * 3) / 5).min(70).max(30).min(area.width);
        let popup_height = 8.min(area.height);

        // Center the popup using ratatui Layout
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(popup_height) / 2),
                Constraint::Length(popup_height),
                Constraint::Min(0),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(area.width.saturating_sub(popup_width) / 2),
                Constraint::Length(popup_width),
                Constraint::Min(0),
            ])
            .split(vertical[1]);

        let popup_area = horizontal[1];

        // Clear the popup area to ensure clean rendering
        frame.render_widget(Clear, popup_area);

        let (title, body, hint) = match modal {
            Modal::Confirm {
                title, question, ..
            } => ((*title).to_string(), (*question).to_string(), "[Y]es    [N]o"),
            Modal::Notice { title, text } => (title.clone(), text.clone(), "[Enter] OK"),
        };

        let lines = vec![
            Line::from(""),
            Line::from(body),
            Line::from(""),
            Line::from(Span::styled(
                hint,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let dialog = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", title))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(dialog, popup_area);
    }
}
