// TUI application state and event handling
use std::path::PathBuf;

use binbuddy_core::{
    advisor, CaptureError, LedgerError, Prompt, RewardOption, RewardsLedger, ScanOutcome,
    ScanResult, REWARD_CATALOG,
};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Description, // What BinBuddy is and what it recognizes
    Camera,      // Pick a photo and scan it
    Profile,     // Points and rewards
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Description, Screen::Camera, Screen::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Description => "Description",
            Screen::Camera => "Camera",
            Screen::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Screen::Description => 0,
            Screen::Camera => 1,
            Screen::Profile => 2,
        }
    }
}

/// One dialog at a time, standing in for the phone app's alerts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Yes/No question carrying its pre-resolved outcome texts.
    Confirm {
        title: &'static str,
        question: &'static str,
        on_yes: &'static str,
        on_no: &'static str,
    },
    /// Message dismissed with Enter or Esc.
    Notice { title: String, text: String },
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub ledger: RewardsLedger,
    pub endpoint: String,
    // None until the startup ping answers
    pub endpoint_online: Option<bool>,
    pub photos: Vec<PathBuf>,
    pub photo_state: ListState,
    pub reward_state: ListState,
    pub last_scan: Option<ScanResult>,
    pub uploading: bool,
    pub modal: Option<Modal>,
}

impl App {
    pub fn new(ledger: RewardsLedger, endpoint: String) -> Self {
        let mut reward_state = ListState::default();
        reward_state.select(Some(0));

        Self {
            should_quit: false,
            screen: Screen::Description,
            ledger,
            endpoint,
            endpoint_online: None,
            photos: Vec::new(),
            photo_state: ListState::default(),
            reward_state,
            last_scan: None,
            uploading: false,
            modal: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn select_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn next_screen(&mut self) {
        let next = (self.screen.index() + 1) % Screen::ALL.len();
        self.screen = Screen::ALL[next];
    }

    pub fn previous_screen(&mut self) {
        let prev = (self.screen.index() + Screen::ALL.len() - 1) % Screen::ALL.len();
        self.screen = Screen::ALL[prev];
    }

    /// Replace the photo list and reset the selection.
    pub fn set_photos(&mut self, photos: Vec<PathBuf>) {
        self.photos = photos;
        if self.photos.is_empty() {
            self.photo_state.select(None);
        } else {
            self.photo_state.select(Some(0));
        }
    }

    pub fn next_photo(&mut self) {
        if self.photos.is_empty() {
            return;
        }
        let i = match self.photo_state.selected() {
            Some(i) => (i + 1).min(self.photos.len() - 1),
            None => 0,
        };
        self.photo_state.select(Some(i));
    }

    pub fn previous_photo(&mut self) {
        if let Some(i) = self.photo_state.selected() {
            if i > 0 {
                self.photo_state.select(Some(i - 1));
            }
        }
    }

    pub fn selected_photo(&self) -> Option<&PathBuf> {
        self.photo_state.selected().and_then(|i| self.photos.get(i))
    }

    pub fn next_reward(&mut self) {
        let i = match self.reward_state.selected() {
            Some(i) => (i + 1).min(REWARD_CATALOG.len() - 1),
            None => 0,
        };
        self.reward_state.select(Some(i));
    }

    pub fn previous_reward(&mut self) {
        if let Some(i) = self.reward_state.selected() {
            if i > 0 {
                self.reward_state.select(Some(i - 1));
            }
        }
    }

    pub fn selected_reward(&self) -> Option<&'static RewardOption> {
        self.reward_state
            .selected()
            .and_then(|i| REWARD_CATALOG.get(i))
    }

    /// Show the advisor prompt for a completed scan.
    pub fn present_scan(&mut self, outcome: ScanOutcome) {
        self.last_scan = Some(outcome.result);
        self.modal = Some(match outcome.prompt {
            Prompt::Question {
                text,
                on_yes,
                on_no,
            } => Modal::Confirm {
                title: advisor::QUESTION_TITLE,
                question: text,
                on_yes,
                on_no,
            },
            Prompt::Terminal { text } => Modal::Notice {
                title: advisor::TERMINAL_TITLE.to_string(),
                text: text.to_string(),
            },
        });
    }

    /// Answer the open confirmation; swaps it for the outcome notice.
    pub fn answer_confirm(&mut self, yes: bool) {
        if let Some(Modal::Confirm { on_yes, on_no, .. }) = self.modal.take() {
            self.modal = Some(Modal::Notice {
                title: advisor::outcome_title(yes).to_string(),
                text: if yes { on_yes } else { on_no }.to_string(),
            });
        }
    }

    /// Surface a scan failure as a single alert.
    pub fn present_error(&mut self, err: &CaptureError) {
        self.modal = Some(Modal::Notice {
            title: "Error".to_string(),
            text: err.to_string(),
        });
    }

    /// Try to redeem the highlighted reward.
    pub fn redeem_selected(&mut self) {
        if let Some(reward) = self.selected_reward() {
            match self.ledger.redeem(reward.points) {
                Ok(()) => {
                    self.modal = Some(Modal::Notice {
                        title: "Reward Redeemed!".to_string(),
                        text: format!(
                            "You have redeemed your reward for {} points.",
                            reward.points
                        ),
                    });
                }
                Err(LedgerError::InsufficientPoints { .. }) => {
                    self.modal = Some(Modal::Notice {
                        title: "Insufficient Points".to_string(),
                        text: "You don't have enough points to redeem this reward.".to_string(),
                    });
                }
            }
        }
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }
}
