//! Application state and submission handling for memegen
//!
//! This module owns the page model and the meme list cache, turns key presses
//! into edits or submissions, and runs each submission through validation,
//! the cache check, the optional fetch and the render.

use chrono::{DateTime, Duration, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::cache::MemeListCache;
use crate::captions::{read_captions, CaptionPair};
use crate::cli::StartupConfig;
use crate::data::{MemeApiError, MemeClient, MemeRecord};
use crate::feedback::render_input_colors;
use crate::page::{CaptionField, Focus, Page};
use crate::render::{self, RandomSource, ThreadRandom};

/// Error text shown when a caption is missing
pub const MISSING_CAPTIONS_MESSAGE: &str = "Please enter text in both input fields!";

/// Error text shown for any fetch or empty-list failure
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching memes!";

/// Where a submission is in its single pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Fetching,
    Rendering,
    Error,
}

/// What started a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// The submit button was activated
    Click,
    /// Enter was pressed inside a caption field
    EnterKey(CaptionField),
}

impl SubmitTrigger {
    pub fn click() -> Self {
        SubmitTrigger::Click
    }

    pub fn enter(field: CaptionField) -> Self {
        SubmitTrigger::EnterKey(field)
    }
}

/// Reasons a submission ends without a rendered meme
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or both captions are empty after trimming
    #[error("Please enter text in both input fields!")]
    MissingCaptions,

    /// The meme list could not be fetched
    #[error("Failed to fetch memes: {0}")]
    Fetch(#[from] MemeApiError),

    /// No memes are available after the fetch step
    #[error("List of memes extracted from API is empty")]
    EmptyList,
}

impl SubmitError {
    /// Text to show in the page's error element
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::MissingCaptions => MISSING_CAPTIONS_MESSAGE,
            SubmitError::Fetch(_) | SubmitError::EmptyList => FETCH_FAILED_MESSAGE,
        }
    }
}

/// A network fetch requested by a submission
///
/// Owns everything it needs so it can run on a spawned task while the
/// terminal keeps handling input.
#[derive(Debug)]
pub struct FetchJob {
    client: MemeClient,
    captions: CaptionPair,
}

impl FetchJob {
    /// Performs the fetch
    pub async fn run(self) -> FetchOutcome {
        let result = self.client.fetch_meme_list().await;
        FetchOutcome {
            captions: self.captions,
            result,
            finished_at: Utc::now(),
        }
    }
}

/// Result of a [`FetchJob`], handed back to [`App::complete_submit`]
#[derive(Debug)]
pub struct FetchOutcome {
    pub captions: CaptionPair,
    pub result: Result<Option<Vec<MemeRecord>>, MemeApiError>,
    pub finished_at: DateTime<Utc>,
}

/// How a submission continues after [`App::begin_submit`]
#[derive(Debug)]
pub enum SubmitStep {
    /// The submission is over
    Finished(Result<(), SubmitError>),
    /// The meme list must be fetched first
    Fetch(FetchJob),
}

/// Main application struct managing state and data
pub struct App {
    /// Editor screen contents
    pub page: Page,
    /// Phase of the most recent submission
    pub phase: Phase,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Number of fetches that have not reported back yet
    pub in_flight: usize,
    /// Submission requested by the last key press
    pending_submit: Option<SubmitTrigger>,
    cache: MemeListCache,
    client: MemeClient,
    random: Box<dyn RandomSource>,
}

impl App {
    /// Creates a new App against the default endpoint
    pub fn new() -> Self {
        Self::with_config(&StartupConfig::default())
    }

    /// Creates a new App from startup configuration
    pub fn with_config(config: &StartupConfig) -> Self {
        Self {
            page: Page::new(),
            phase: Phase::Idle,
            should_quit: false,
            show_help: false,
            in_flight: 0,
            pending_submit: None,
            cache: MemeListCache::new(config.refresh_after),
            client: MemeClient::with_endpoint(config.endpoint.clone()),
            random: Box::new(ThreadRandom),
        }
    }

    /// Replaces the random source used to pick memes
    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn cache(&self) -> &MemeListCache {
        &self.cache
    }

    /// Time since the meme list was fetched, if it has been
    pub fn cache_age(&self) -> Option<Duration> {
        self.cache.age(Utc::now())
    }

    /// Takes the submission requested by key input, if any
    pub fn take_submit(&mut self) -> Option<SubmitTrigger> {
        self.pending_submit.take()
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - printable characters: type into the focused caption field
    /// - `Backspace`: delete the last character of the focused field
    /// - `Tab`/`Down`, `Shift-Tab`/`Up`: move focus (top, bottom, button)
    /// - `Enter`: submit (from either field or the button)
    /// - `Space` (on the button): submit
    /// - `F1`: toggle help
    /// - `Esc` or `Ctrl-C`: quit
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return;
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::F(1) => {
                self.show_help = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.page.focus = self.page.focus.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.page.focus = self.page.focus.previous();
            }
            KeyCode::Enter => {
                self.pending_submit = Some(match self.page.focus.field() {
                    Some(field) => SubmitTrigger::enter(field),
                    None => SubmitTrigger::click(),
                });
            }
            KeyCode::Char(' ') if self.page.focus == Focus::SubmitButton => {
                self.pending_submit = Some(SubmitTrigger::click());
            }
            KeyCode::Char(c) if !ctrl && !key_event.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(input) = self.page.focused_input_mut() {
                    input.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.page.focused_input_mut() {
                    input.backspace();
                }
            }
            _ => {}
        }
    }

    /// Runs a whole submission, awaiting the fetch inline if one is needed
    pub async fn submit(&mut self, trigger: SubmitTrigger) -> Result<(), SubmitError> {
        match self.begin_submit(trigger, Utc::now()) {
            SubmitStep::Finished(result) => result,
            SubmitStep::Fetch(job) => {
                let outcome = job.run().await;
                self.complete_submit(outcome)
            }
        }
    }

    /// Validates the captions and consults the cache
    ///
    /// Returns a [`FetchJob`] when the meme list is absent or stale; the
    /// caller runs it and passes the outcome to [`App::complete_submit`].
    /// Otherwise the submission finishes here.
    pub fn begin_submit(&mut self, trigger: SubmitTrigger, now: DateTime<Utc>) -> SubmitStep {
        debug!(?trigger, "Submission triggered");
        self.phase = Phase::Validating;

        let captions = read_captions(&self.page);
        if !captions.is_complete() {
            self.page.error_text = MISSING_CAPTIONS_MESSAGE.to_string();
            render::clear(&mut self.page);
            render_input_colors(&mut self.page, &captions.top, &captions.bottom);
            self.phase = Phase::Idle;
            return SubmitStep::Finished(Err(SubmitError::MissingCaptions));
        }

        render_input_colors(&mut self.page, &captions.top, &captions.bottom);
        self.phase = Phase::Fetching;

        if self.cache.needs_refresh(now) {
            self.in_flight += 1;
            return SubmitStep::Fetch(FetchJob {
                client: self.client.clone(),
                captions,
            });
        }

        debug!("Using cached meme list");
        SubmitStep::Finished(self.render_random_meme(&captions))
    }

    /// Applies a finished fetch and renders
    ///
    /// Outcomes are applied in the order they arrive; with overlapping
    /// submissions the last one to arrive renders last.
    pub fn complete_submit(&mut self, outcome: FetchOutcome) -> Result<(), SubmitError> {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.phase = Phase::Fetching;

        match outcome.result {
            Ok(memes) => {
                info!(
                    count = memes.as_ref().map(|m| m.len()).unwrap_or(0),
                    "Meme list cached"
                );
                self.cache.replace(memes, outcome.finished_at);
            }
            Err(e) => return self.fail(SubmitError::Fetch(e)),
        }

        self.render_random_meme(&outcome.captions)
    }

    fn render_random_meme(&mut self, captions: &CaptionPair) -> Result<(), SubmitError> {
        let picked = match self.cache.memes() {
            Some(memes) => render::pick_meme(memes, self.random.as_mut()).cloned(),
            None => None,
        };
        let Some(meme) = picked else {
            return self.fail(SubmitError::EmptyList);
        };

        self.phase = Phase::Rendering;
        debug!(id = %meme.id, name = %meme.name, "Rendering meme");
        render::render_meme(&mut self.page, &meme, &captions.top, &captions.bottom);
        self.phase = Phase::Idle;
        Ok(())
    }

    fn fail(&mut self, err: SubmitError) -> Result<(), SubmitError> {
        self.phase = Phase::Error;
        error!(error = %err, "Submission failed");
        render::clear(&mut self.page);
        self.page.error_text = err.user_message().to_string();
        self.phase = Phase::Idle;
        Err(err)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
