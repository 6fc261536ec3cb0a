// Constants module for pushform
// Centralizes the presentation values shared by the center and the renderer

// ============================================================================
// Card Transition Constants
// ============================================================================

/// Transform of a card that has been inserted but not yet revealed
pub(crate) const ENTER_TRANSFORM: &str = "translateY(20px)";

/// Transform of a revealed card
pub(crate) const SHOWN_TRANSFORM: &str = "translateY(0)";

/// Transform of a card on its way out
pub(crate) const CLOSING_TRANSFORM: &str = "translateY(-20px)";

// ============================================================================
// Markup Constants
// ============================================================================

/// Class shared by every position container
pub(crate) const CONTAINER_CLASS: &str = "notification-container";

/// Class of a notification card
pub(crate) const CARD_CLASS: &str = "notification";

/// Label of the close button (a multiplication sign)
pub(crate) const CLOSE_LABEL: &str = "&#10005;";

// ============================================================================
// History Constants
// ============================================================================

/// Maximum memory budget for retired notifications (64KB)
pub(crate) const MAX_RETIRED_MEMORY: usize = 64 * 1024;

/// Initial capacity for the cards of one container
pub(crate) const INITIAL_CARDS_CAPACITY: usize = 8;
