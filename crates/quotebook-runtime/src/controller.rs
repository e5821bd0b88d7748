use std::collections::VecDeque;

use quotebook_store::{QuoteStorage, RandomSource, ThreadRandom, pick};
use quotebook_types::{Quote, QuoteDraft, QuoteId, ValidationErrors};

use crate::Notification;

/// Top-level UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A quote (or the loading/empty placeholder) is displayed
    Viewing,
    /// The add-quote form is displayed
    Composing,
}

/// Holds the displayed quote and routes user actions into storage
///
/// Before [`PageController::mount`] the controller is in the Loading
/// sub-state of Viewing: no quote, nothing read from storage yet.
pub struct PageController {
    storage: QuoteStorage,
    random: Box<dyn RandomSource>,
    mode: Mode,
    current: Option<Quote>,
    mounted: bool,
    /// Collection size as of the last mount/add/delete
    count: usize,
    notifications: VecDeque<Notification>,
}

impl PageController {
    pub fn new(storage: QuoteStorage) -> Self {
        Self {
            storage,
            random: Box::new(ThreadRandom),
            mode: Mode::Viewing,
            current: None,
            mounted: false,
            count: 0,
            notifications: VecDeque::new(),
        }
    }

    /// Source used when re-drawing after a collision with the current quote
    pub fn with_random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current(&self) -> Option<&Quote> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        !self.mounted
    }

    /// Mounted but nothing to show: the collection is empty
    pub fn is_empty(&self) -> bool {
        self.mounted && self.current.is_none()
    }

    pub fn storage(&self) -> &QuoteStorage {
        &self.storage
    }

    /// Cached size of the collection; `0` until mounted. Reading it never
    /// touches storage.
    pub fn collection_len(&self) -> usize {
        self.count
    }

    fn refresh_count(&mut self) {
        self.count = self.storage.len();
    }

    pub fn mount(&mut self) {
        self.current = self.storage.get_random();
        self.mounted = true;
        self.refresh_count();
        tracing::debug!(
            current = ?self.current.as_ref().map(|q| q.id.as_str()),
            "controller mounted"
        );
    }

    /// Show a random quote, avoiding an immediate repeat of the current one.
    ///
    /// Only a draw that lands on the displayed quote triggers the re-draw
    /// among the others; a single-quote collection redisplays that quote.
    pub fn next_quote(&mut self) {
        self.mounted = true;
        let current_id = self.current.as_ref().map(|q| q.id.clone());
        let drawn = self.storage.get_random();

        self.current = match (drawn, current_id) {
            (Some(drawn), Some(current_id)) if drawn.id == current_id => {
                let quotes = self.storage.get_all();
                if quotes.len() > 1 {
                    let others: Vec<Quote> =
                        quotes.into_iter().filter(|q| q.id != current_id).collect();
                    pick(self.random.as_mut(), &others).cloned().or(Some(drawn))
                } else {
                    Some(drawn)
                }
            }
            (drawn, _) => drawn,
        };
    }

    pub fn open_composer(&mut self) {
        self.mode = Mode::Composing;
    }

    pub fn cancel_composer(&mut self) {
        self.mode = Mode::Viewing;
    }

    /// Validate and persist a draft, then display it.
    ///
    /// On validation failure nothing is written and the mode is unchanged.
    pub fn add_quote(&mut self, draft: QuoteDraft) -> Result<Quote, ValidationErrors> {
        draft.validate()?;

        let quote = self.storage.add(draft);
        self.current = Some(quote.clone());
        self.mounted = true;
        self.mode = Mode::Viewing;
        self.refresh_count();
        self.notifications.push_back(Notification::quote_added());
        Ok(quote)
    }

    /// Remove a quote; on success notify and move on to another quote.
    pub fn delete_quote(&mut self, id: &QuoteId) -> bool {
        if !self.storage.delete(id) {
            tracing::debug!(id = %id, "delete ignored, quote not found");
            return false;
        }

        self.notifications.push_back(Notification::quote_deleted());
        self.next_quote();
        self.refresh_count();
        true
    }

    pub fn delete_current(&mut self) -> bool {
        match self.current.as_ref().map(|q| q.id.clone()) {
            Some(id) => self.delete_quote(&id),
            None => false,
        }
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }
}
