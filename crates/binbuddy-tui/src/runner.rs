// TUI event loop and terminal management
use std::io;
use std::path::PathBuf;

use binbuddy_core::{capture_and_classify, list_photos, FilePhoto, RemoteClassifier};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{App, Modal, Screen};

pub async fn run_tui(
    mut app: App,
    classifier: RemoteClassifier,
    photos_dir: PathBuf,
) -> anyhow::Result<()> {
    // One ping up front for the endpoint badge. The badge is informational;
    // scans are attempted either way.
    app.endpoint_online = Some(classifier.ping().await);
    tracing::debug!(online = ?app.endpoint_online, "endpoint probed");

    match list_photos(&photos_dir) {
        Ok(photos) => app.set_photos(photos),
        Err(e) => app.present_error(&e),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                // An open dialog captures every key, like the alerts it mimics.
                if let Some(modal) = app.modal.clone() {
                    match modal {
                        Modal::Confirm { .. } => match key.code {
                            KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_confirm(true),
                            KeyCode::Char('n') | KeyCode::Char('N') => app.answer_confirm(false),
                            _ => {}
                        },
                        Modal::Notice { .. } => match key.code {
                            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                                app.dismiss_modal()
                            }
                            _ => {}
                        },
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => app.quit(),
                    KeyCode::Tab => app.next_screen(),
                    KeyCode::BackTab => app.previous_screen(),
                    KeyCode::Char('1') => app.select_screen(Screen::Description),
                    KeyCode::Char('2') => app.select_screen(Screen::Camera),
                    KeyCode::Char('3') => app.select_screen(Screen::Profile),
                    _ => match app.screen {
                        Screen::Camera => match key.code {
                            KeyCode::Char('j') | KeyCode::Down => app.next_photo(),
                            KeyCode::Char('k') | KeyCode::Up => app.previous_photo(),
                            KeyCode::Char('r') => match list_photos(&photos_dir) {
                                Ok(photos) => app.set_photos(photos),
                                Err(e) => app.present_error(&e),
                            },
                            KeyCode::Enter => {
                                if let Some(path) = app.selected_photo().cloned() {
                                    // Awaiting inline keeps exactly one upload
                                    // in flight and no input processed until
                                    // the answer is in.
                                    app.uploading = true;
                                    terminal.draw(|f| crate::ui::render(f, &mut app))?;

                                    let source = FilePhoto::new(path);
                                    let scan = capture_and_classify(
                                        &source,
                                        &classifier,
                                        &mut app.ledger,
                                    )
                                    .await;
                                    app.uploading = false;

                                    match scan {
                                        Ok(outcome) => app.present_scan(outcome),
                                        Err(e) => app.present_error(&e),
                                    }
                                }
                            }
                            _ => {}
                        },
                        Screen::Profile => match key.code {
                            KeyCode::Char('j') | KeyCode::Down => app.next_reward(),
                            KeyCode::Char('k') | KeyCode::Up => app.previous_reward(),
                            KeyCode::Enter => app.redeem_selected(),
                            _ => {}
                        },
                        Screen::Description => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
