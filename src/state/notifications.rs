use crate::constants::*;
use crate::widgets::Indicator;
use pushform_util::{NotificationId, NotificationOptions, Position};
use std::collections::VecDeque;
use tokio::task::AbortHandle;

/// Lifecycle phase of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted, entry transition running
    Entering,
    /// Fully visible
    Shown,
    /// Exit transition running, detachment pending
    Closing,
}

/// A notification attached to a container
#[derive(Debug)]
pub struct Card {
    pub id: NotificationId,
    pub options: NotificationOptions,
    pub phase: Phase,
    pub opacity: f32,
    pub transform: &'static str,
    pub indicator: Option<Indicator>,
    /// Redundant dismiss timer, aborted when the card closes first
    pub(crate) safety: Option<AbortHandle>,
}

impl Card {
    pub fn new(id: NotificationId, options: NotificationOptions) -> Self {
        let indicator = options
            .show_indicator
            .then(|| Indicator::new(options.active_duration()));
        Self {
            id,
            options,
            phase: Phase::Entering,
            opacity: 0.0,
            transform: ENTER_TRANSFORM,
            indicator,
            safety: None,
        }
    }

    pub fn is_closing(&self) -> bool {
        self.phase == Phase::Closing
    }

    pub fn classes(&self) -> Vec<String> {
        let mut classes = vec![CARD_CLASS.to_string()];
        if !self.options.additional_class.is_empty() {
            classes.push(self.options.additional_class.clone());
        }
        classes
    }

    pub fn view(&self) -> CardView {
        CardView {
            id: self.id,
            position: self.options.position,
            title: self.options.title.clone(),
            message: self.options.message.clone(),
            classes: self.classes(),
            phase: self.phase,
            opacity: self.opacity,
            transform: self.transform.to_string(),
            indicator_width: self.indicator.as_ref().map(Indicator::width),
        }
    }
}

/// Read-only copy of a card, safe to hand out of the lock
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: NotificationId,
    pub position: Position,
    pub title: String,
    pub message: String,
    pub classes: Vec<String>,
    pub phase: Phase,
    pub opacity: f32,
    pub transform: String,
    /// Width of the indicator in percent, `None` without an indicator
    pub indicator_width: Option<f32>,
}

impl CardView {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Estimate memory usage of this view in bytes
    pub fn estimated_size(&self) -> usize {
        self.title.len()
            + self.message.len()
            + self.transform.len()
            + self.classes.iter().map(String::len).sum::<usize>()
            + 96
    }
}

/// The cards anchored at one position
#[derive(Debug)]
pub struct Container {
    pub position: Position,
    pub cards: Vec<Card>,
}

impl Container {
    fn new(position: Position) -> Self {
        Self {
            position,
            cards: Vec::with_capacity(INITIAL_CARDS_CAPACITY),
        }
    }

    pub fn views(&self) -> Vec<CardView> {
        self.cards.iter().map(Card::view).collect()
    }
}

/// Manages the containers and the retired history
///
/// Containers are created once and never removed. Cards are appended to
/// the container of their position and detached one at a time.
#[derive(Debug, Default)]
pub struct Board {
    containers: Vec<Container>,
    /// Detached notifications, newest first
    retired: VecDeque<CardView>,
}

impl Board {
    /// Create an empty board; call [`Board::initialize`] before use
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one container per position. Calling it again is a no-op.
    pub fn initialize(&mut self) {
        if !self.containers.is_empty() {
            return;
        }
        self.containers = Position::ALL.into_iter().map(Container::new).collect();
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container(&self, position: Position) -> Option<&Container> {
        self.containers.iter().find(|c| c.position == position)
    }

    /// Append a card to its container
    ///
    /// Returns the card back if the board was never initialized.
    pub fn insert(&mut self, card: Card) -> Result<(), Card> {
        match self
            .containers
            .iter_mut()
            .find(|c| c.position == card.options.position)
        {
            Some(container) => {
                container.cards.push(card);
                Ok(())
            }
            None => Err(card),
        }
    }

    pub fn get(&self, id: NotificationId) -> Option<&Card> {
        self.containers
            .iter()
            .flat_map(|c| c.cards.iter())
            .find(|card| card.id == id)
    }

    pub fn get_mut(&mut self, id: NotificationId) -> Option<&mut Card> {
        self.containers
            .iter_mut()
            .flat_map(|c| c.cards.iter_mut())
            .find(|card| card.id == id)
    }

    /// Remove a card from its container, leaving its siblings in place
    ///
    /// The card is recorded in the retired history.
    pub fn detach(&mut self, id: NotificationId) -> Option<Card> {
        let card = self.containers.iter_mut().find_map(|c| {
            c.cards
                .iter()
                .position(|card| card.id == id)
                .map(|pos| c.cards.remove(pos))
        })?;

        if let Some(container) = self.containers.iter_mut().find(|c| c.position == card.options.position) {
            if container.cards.is_empty() {
                container.cards.shrink_to(INITIAL_CARDS_CAPACITY);
            }
        }

        self.retired.push_front(card.view());
        self.apply_memory_budget(MAX_RETIRED_MEMORY);
        Some(card)
    }

    /// Keep the newest retired views that fit within the budget
    fn apply_memory_budget(&mut self, max_memory: usize) {
        let mut total_size: usize = 0;
        let mut keep_count: usize = 0;

        for view in &self.retired {
            let size = view.estimated_size();
            if total_size + size > max_memory {
                break;
            }
            total_size += size;
            keep_count += 1;
        }

        self.retired.truncate(keep_count);
    }

    pub fn retired(&self) -> &VecDeque<CardView> {
        &self.retired
    }

    /// Number of attached cards across all containers
    pub fn live_count(&self) -> usize {
        self.containers.iter().map(|c| c.cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u64, position: Position) -> Card {
        Card::new(
            NotificationId(id),
            NotificationOptions::default().title(format!("n{id}")).position(position),
        )
    }

    fn board() -> Board {
        let mut board = Board::new();
        board.initialize();
        board
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut board = board();
        board.insert(card(1, Position::TopLeft)).unwrap();
        board.initialize();

        assert_eq!(board.containers().len(), Position::ALL.len());
        assert_eq!(board.live_count(), 1);
        for position in Position::ALL {
            let count = board.containers().iter().filter(|c| c.position == position).count();
            assert_eq!(count, 1, "{position} should have exactly one container");
        }
    }

    #[test]
    fn test_insert_requires_initialization() {
        let mut board = Board::new();
        let card = board.insert(card(1, Position::TopLeft)).unwrap_err();
        assert_eq!(card.id, NotificationId(1));
        assert!(board.is_empty());
    }

    #[test]
    fn test_insert_routes_by_position() {
        let mut board = board();
        board.insert(card(1, Position::TopCenter)).unwrap();
        board.insert(card(2, Position::BottomRight)).unwrap();
        board.insert(card(3, Position::TopCenter)).unwrap();

        let top: Vec<_> = board.container(Position::TopCenter).unwrap().cards.iter().map(|c| c.id.0).collect();
        assert_eq!(top, vec![1, 3]);
        assert_eq!(board.container(Position::BottomRight).unwrap().cards.len(), 1);
        assert!(board.container(Position::TopLeft).unwrap().cards.is_empty());
    }

    #[test]
    fn test_detach_leaves_siblings() {
        let mut board = board();
        for id in 1..=3 {
            board.insert(card(id, Position::BottomLeft)).unwrap();
        }

        let removed = board.detach(NotificationId(2)).unwrap();
        assert_eq!(removed.id, NotificationId(2));

        let left: Vec<_> = board.container(Position::BottomLeft).unwrap().cards.iter().map(|c| c.id.0).collect();
        assert_eq!(left, vec![1, 3]);
        assert!(board.detach(NotificationId(2)).is_none());
        assert_eq!(board.retired().len(), 1);
    }

    #[test]
    fn test_retired_history_is_newest_first() {
        let mut board = board();
        for id in 1..=3 {
            board.insert(card(id, Position::TopRight)).unwrap();
        }
        board.detach(NotificationId(1));
        board.detach(NotificationId(3));

        let ids: Vec<_> = board.retired().iter().map(|v| v.id.0).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_retired_memory_budget() {
        let mut board = board();
        let big = "x".repeat(MAX_RETIRED_MEMORY / 3);
        for id in 1..=5 {
            let options = NotificationOptions::default().message(big.clone());
            board.insert(Card::new(NotificationId(id), options)).unwrap();
            board.detach(NotificationId(id));
        }

        assert!(board.retired().len() < 5);
        assert_eq!(board.retired().front().unwrap().id, NotificationId(5));
        let total: usize = board.retired().iter().map(CardView::estimated_size).sum();
        assert!(total <= MAX_RETIRED_MEMORY);
    }

    #[test]
    fn test_card_view_classes() {
        let plain = card(1, Position::TopLeft).view();
        assert_eq!(plain.classes, vec!["notification"]);
        assert_eq!(plain.indicator_width, Some(100.0));
        assert_eq!(plain.phase, Phase::Entering);

        let options = NotificationOptions::default().additional_class("error").show_indicator(false);
        let view = Card::new(NotificationId(2), options).view();
        assert!(view.has_class("error"));
        assert_eq!(view.indicator_width, None);
    }
}
