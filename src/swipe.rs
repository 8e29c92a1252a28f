//! Swipe Engine
//!
//! Card state for the swipe screen, independent of the DOM.
//!
//! One gesture at a time holds the input lock. The view acquires it with
//! [`SwipeEngine::begin`], reports the decision, and releases it from a timer
//! after [`ANIMATION_MS`] whatever the network outcome. Every accepted
//! gesture carries a sequence number so a response that arrives after a
//! newer one has been applied is dropped instead of overwriting the card.

use std::future::Future;

use leptos_swipe::SwipeDirection;

use crate::models::{Score, SwipeAction, SwipeRequest, SwipeResponse, DONE_BOOK_ID};

/// Card fly-out duration; the lock is released when it elapses
pub const ANIMATION_MS: u32 = 500;
/// Delay before the card transition is re-enabled after an instant reset
pub const TRANSITION_REARM_MS: u32 = 50;
pub const MOVE_DISTANCE_PX: i32 = 500;
pub const INDICATOR_SIZE_PX: u32 = 200;
pub const CARD_TRANSITION: &str = "transform 0.5s ease-out, opacity 0.5s ease-out";

pub const SWIPE_FAILED_MESSAGE: &str = "Could not connect to the server or Firebase.";
pub const SIGNED_OUT_MESSAGE: &str = "Please log in to swipe.";

pub fn action_for(direction: SwipeDirection) -> SwipeAction {
    match direction {
        SwipeDirection::Right => SwipeAction::Like,
        SwipeDirection::Left => SwipeAction::Dislike,
    }
}

/// `Similarity: 87.46%`, or `Similarity: N/A` for a missing or zero score.
/// Text scores (seed cards) are shown as-is.
pub fn score_text(score: Option<&Score>) -> String {
    match score {
        Some(Score::Number(n)) if *n != 0.0 && !n.is_nan() => format!("Similarity: {:.2}%", n),
        Some(Score::Text(text)) if !text.is_empty() => text.clone(),
        _ => "Similarity: N/A".to_string(),
    }
}

pub fn liked_by_text(liked_by: &[String]) -> String {
    if liked_by.is_empty() {
        String::new()
    } else {
        format!("Liked by: {}", liked_by.join(", "))
    }
}

/// Everything the card displays. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardView {
    pub book_id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub author: String,
    pub score_text: String,
    pub liked_by_text: String,
}

impl CardView {
    pub fn from_response(resp: &SwipeResponse) -> Self {
        if resp.book_id == DONE_BOOK_ID {
            return Self {
                book_id: DONE_BOOK_ID.to_string(),
                title: resp.title.clone(),
                description: resp.description.clone(),
                ..Default::default()
            };
        }
        Self {
            book_id: resp.book_id.clone(),
            title: resp.title.clone(),
            description: resp.description.clone(),
            image_url: resp.image_url.clone().unwrap_or_default(),
            author: resp
                .author
                .clone()
                .filter(|author| !author.is_empty())
                .unwrap_or_else(|| "Unknown Author".to_string()),
            score_text: score_text(resp.score.as_ref()),
            liked_by_text: liked_by_text(&resp.liked_by),
        }
    }

    /// No swipeable item: backend said DONE, or no card was seeded
    pub fn is_exhausted(&self) -> bool {
        self.book_id.is_empty() || self.book_id == DONE_BOOK_ID
    }
}

/// An accepted gesture
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTicket {
    pub seq: u64,
    pub book_id: String,
    pub direction: SwipeDirection,
}

impl SwipeTicket {
    pub fn action(&self) -> SwipeAction {
        action_for(self.direction)
    }

    pub fn request(&self, user_id: &str) -> SwipeRequest {
        SwipeRequest {
            book_id: self.book_id.clone(),
            action: self.action(),
            user_id: user_id.to_string(),
        }
    }
}

/// Why a gesture was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A swipe is still animating
    Locked,
    /// Nothing left to swipe
    Exhausted,
    SignedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeEngine {
    card: CardView,
    locked: bool,
    last_seq: u64,
    applied_seq: u64,
}

impl SwipeEngine {
    pub fn new(card: CardView) -> Self {
        Self {
            card,
            locked: false,
            last_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn card(&self) -> &CardView {
        &self.card
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Accept a gesture and take the lock. Rejections leave state untouched.
    pub fn begin(&mut self, direction: SwipeDirection, signed_in: bool) -> Result<SwipeTicket, Rejection> {
        if self.locked {
            return Err(Rejection::Locked);
        }
        if self.card.is_exhausted() {
            return Err(Rejection::Exhausted);
        }
        if !signed_in {
            return Err(Rejection::SignedOut);
        }
        self.locked = true;
        self.last_seq += 1;
        Ok(SwipeTicket {
            seq: self.last_seq,
            book_id: self.card.book_id.clone(),
            direction,
        })
    }

    /// Apply the response for gesture `seq`. Returns false (card untouched)
    /// when a newer response has already been applied.
    pub fn apply(&mut self, seq: u64, resp: &SwipeResponse) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.card = CardView::from_response(resp);
        true
    }

    /// Called by the animation timer only
    pub fn release(&mut self) {
        self.locked = false;
    }
}

/// Inline style of the card at each animation step
#[derive(Debug, Clone, PartialEq)]
pub struct CardPose {
    pub transform: String,
    pub opacity: f64,
    pub transition: &'static str,
}

impl CardPose {
    /// Flying off-screen in `direction`
    pub fn swiped(direction: SwipeDirection) -> Self {
        let translate_x = direction.sign() * MOVE_DISTANCE_PX;
        Self {
            transform: format!("translateX({}px) rotate({}deg)", translate_x, translate_x as f64 / 30.0),
            opacity: 0.0,
            transition: CARD_TRANSITION,
        }
    }

    /// Centered with the transition disabled, so the snap back is not animated
    pub fn reset() -> Self {
        Self {
            transform: "none".to_string(),
            opacity: 1.0,
            transition: "none",
        }
    }

    pub fn resting() -> Self {
        Self {
            transition: CARD_TRANSITION,
            ..Self::reset()
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: {}; opacity: {}; transition: {};",
            self.transform, self.opacity, self.transition
        )
    }
}

/// Style of a like/dislike indicator icon
pub fn indicator_css(visible: bool) -> String {
    if visible {
        format!("opacity: 1; width: {0}px; height: {0}px;", INDICATOR_SIZE_PX)
    } else {
        "opacity: 0; width: 0px; height: 0px;".to_string()
    }
}

/// Timed steps after an accepted gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStep {
    /// Animation over: release the lock, hide indicators, snap the card back
    Settle,
    /// Card transition enabled again
    Rearm,
}

/// Everything the swipe screen renders: the engine plus the card pose and
/// the visible indicator
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeScreen {
    engine: SwipeEngine,
    pose: CardPose,
    indicator: Option<SwipeDirection>,
}

impl SwipeScreen {
    pub fn new(card: CardView) -> Self {
        Self {
            engine: SwipeEngine::new(card),
            pose: CardPose::resting(),
            indicator: None,
        }
    }

    pub fn engine(&self) -> &SwipeEngine {
        &self.engine
    }

    pub fn pose(&self) -> &CardPose {
        &self.pose
    }

    pub fn indicator(&self) -> Option<SwipeDirection> {
        self.indicator
    }

    /// Take the lock and start the fly-out
    pub fn accept(&mut self, direction: SwipeDirection, signed_in: bool) -> Result<SwipeTicket, Rejection> {
        let ticket = self.engine.begin(direction, signed_in)?;
        self.indicator = Some(direction);
        self.pose = CardPose::swiped(direction);
        Ok(ticket)
    }

    pub fn apply(&mut self, seq: u64, resp: &SwipeResponse) -> bool {
        self.engine.apply(seq, resp)
    }

    pub fn advance(&mut self, step: ResetStep) {
        match step {
            ResetStep::Settle => {
                self.engine.release();
                self.indicator = None;
                self.pose = CardPose::reset();
            }
            ResetStep::Rearm => self.pose = CardPose::resting(),
        }
    }
}

/// Timer side of a gesture; the only place the lock is released.
///
/// `sleep(ms)` must resolve after `ms` milliseconds.
pub async fn run_reset<S, F, A>(sleep: S, mut advance: A)
where
    S: Fn(u32) -> F,
    F: Future<Output = ()>,
    A: FnMut(ResetStep),
{
    sleep(ANIMATION_MS).await;
    advance(ResetStep::Settle);
    sleep(TRANSITION_REARM_MS).await;
    advance(ResetStep::Rearm);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn response(book_id: &str, title: &str) -> SwipeResponse {
        SwipeResponse {
            book_id: book_id.to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            author: Some("Author".to_string()),
            image_url: Some(format!("{}.jpg", book_id)),
            score: Some(Score::Number(50.0)),
            liked_by: vec![],
        }
    }

    fn engine_at(book_id: &str) -> SwipeEngine {
        SwipeEngine::new(CardView::from_response(&response(book_id, "Seed")))
    }

    #[test]
    fn test_begin_takes_lock() {
        let mut engine = engine_at("1");
        let ticket = engine.begin(SwipeDirection::Right, true).unwrap();
        assert!(engine.is_locked());
        assert_eq!(ticket.book_id, "1");
        assert_eq!(ticket.action(), SwipeAction::Like);
        assert_eq!(ticket.request("u1").user_id, "u1");
    }

    #[test]
    fn test_gesture_while_locked_changes_nothing() {
        let mut engine = engine_at("1");
        engine.begin(SwipeDirection::Left, true).unwrap();
        let before = engine.clone();

        assert_eq!(engine.begin(SwipeDirection::Right, true), Err(Rejection::Locked));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_response_does_not_release_lock() {
        let mut engine = engine_at("1");
        let ticket = engine.begin(SwipeDirection::Right, true).unwrap();
        assert!(engine.apply(ticket.seq, &response("2", "Next")));
        assert!(engine.is_locked());
        assert_eq!(engine.card().book_id, "2");

        engine.release();
        assert!(!engine.is_locked());
    }

    #[test]
    fn test_failed_swipe_keeps_card_and_releases() {
        let mut engine = engine_at("1");
        let card_before = engine.card().clone();
        engine.begin(SwipeDirection::Left, true).unwrap();
        // network failed: nothing applied
        engine.release();
        assert!(!engine.is_locked());
        assert_eq!(engine.card(), &card_before);
        assert!(engine.begin(SwipeDirection::Left, true).is_ok());
    }

    #[test]
    fn test_slow_response_after_release_is_applied() {
        let mut engine = engine_at("1");
        let ticket = engine.begin(SwipeDirection::Right, true).unwrap();
        engine.release();
        assert!(engine.apply(ticket.seq, &response("2", "Late")));
        assert_eq!(engine.card().title, "Late");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut engine = engine_at("1");
        let first = engine.begin(SwipeDirection::Right, true).unwrap();
        engine.release();
        let second = engine.begin(SwipeDirection::Left, true).unwrap();
        engine.release();

        assert!(engine.apply(second.seq, &response("3", "Newer")));
        assert!(!engine.apply(first.seq, &response("2", "Older")));
        assert_eq!(engine.card().book_id, "3");
    }

    #[test]
    fn test_done_response_clears_fields_and_stops_swipes() {
        let mut engine = engine_at("1");
        let ticket = engine.begin(SwipeDirection::Right, true).unwrap();
        let done: SwipeResponse = serde_json::from_str(
            r#"{"book_id":"DONE","title":"No more books","description":"You have swiped all books."}"#,
        ).unwrap();
        engine.apply(ticket.seq, &done);
        engine.release();

        let card = engine.card();
        assert_eq!(card.title, "No more books");
        assert_eq!(card.description, "You have swiped all books.");
        assert_eq!(card.score_text, "");
        assert_eq!(card.image_url, "");
        assert_eq!(card.author, "");
        assert_eq!(card.liked_by_text, "");

        assert_eq!(engine.begin(SwipeDirection::Right, true), Err(Rejection::Exhausted));
        assert!(!engine.is_locked());
    }

    #[test]
    fn test_signed_out_is_rejected_without_lock() {
        let mut engine = engine_at("1");
        assert_eq!(engine.begin(SwipeDirection::Right, false), Err(Rejection::SignedOut));
        assert!(!engine.is_locked());
    }

    #[test]
    fn test_unseeded_card_is_exhausted() {
        let mut engine = SwipeEngine::new(CardView::default());
        assert_eq!(engine.begin(SwipeDirection::Left, true), Err(Rejection::Exhausted));
    }

    #[test]
    fn test_score_formatting() {
        let resp: SwipeResponse = serde_json::from_str(r#"{"book_id":"42","title":"X","score":87.456}"#).unwrap();
        let card = CardView::from_response(&resp);
        assert_eq!(card.score_text, "Similarity: 87.46%");
        assert_eq!(card.author, "Unknown Author");

        assert_eq!(score_text(None), "Similarity: N/A");
        assert_eq!(score_text(Some(&Score::Number(0.0))), "Similarity: N/A");
        assert_eq!(score_text(Some(&Score::Text("Start Swiping".to_string()))), "Start Swiping");
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TimerEvent {
        Sleep { ms: u32, locked: bool },
        Step(ResetStep, CardPose),
    }

    /// Runs the reset with instant sleeps, recording each sleep and step
    async fn reset_with_log(screen: &RefCell<SwipeScreen>) -> Vec<TimerEvent> {
        let log = RefCell::new(Vec::new());
        run_reset(
            |ms| {
                let locked = screen.borrow().engine().is_locked();
                log.borrow_mut().push(TimerEvent::Sleep { ms, locked });
                std::future::ready(())
            },
            |step| {
                let mut screen = screen.borrow_mut();
                screen.advance(step);
                log.borrow_mut().push(TimerEvent::Step(step, screen.pose().clone()));
            },
        )
        .await;
        log.into_inner()
    }

    #[tokio::test]
    async fn test_lock_held_through_animation_then_released() {
        let screen = RefCell::new(SwipeScreen::new(CardView::from_response(&response("1", "Seed"))));
        screen.borrow_mut().accept(SwipeDirection::Right, true).unwrap();

        let log = reset_with_log(&screen).await;
        assert_eq!(
            log,
            vec![
                TimerEvent::Sleep { ms: ANIMATION_MS, locked: true },
                TimerEvent::Step(ResetStep::Settle, CardPose::reset()),
                TimerEvent::Sleep { ms: TRANSITION_REARM_MS, locked: false },
                TimerEvent::Step(ResetStep::Rearm, CardPose::resting()),
            ]
        );
        assert!(!screen.borrow().engine().is_locked());
    }

    #[tokio::test]
    async fn test_network_result_does_not_release_lock() {
        let screen = RefCell::new(SwipeScreen::new(CardView::from_response(&response("1", "Seed"))));
        let ticket = screen.borrow_mut().accept(SwipeDirection::Left, true).unwrap();

        // Response lands before the timer fires
        assert!(screen.borrow_mut().apply(ticket.seq, &response("2", "Next")));
        assert!(screen.borrow().engine().is_locked());
        assert_eq!(
            screen.borrow_mut().accept(SwipeDirection::Left, true),
            Err(Rejection::Locked)
        );

        reset_with_log(&screen).await;
        let screen = screen.into_inner();
        assert!(!screen.engine().is_locked());
        assert_eq!(screen.engine().card().book_id, "2");
    }

    #[tokio::test]
    async fn test_failed_network_still_releases_on_timer() {
        let screen = RefCell::new(SwipeScreen::new(CardView::from_response(&response("1", "Seed"))));
        screen.borrow_mut().accept(SwipeDirection::Right, true).unwrap();

        reset_with_log(&screen).await;
        let mut screen = screen.into_inner();
        assert_eq!(screen.engine().card().book_id, "1");
        assert!(screen.accept(SwipeDirection::Right, true).is_ok());
    }

    #[test]
    fn test_pose_sequence_swiped_reset_resting() {
        let mut screen = SwipeScreen::new(CardView::from_response(&response("1", "Seed")));
        screen.accept(SwipeDirection::Left, true).unwrap();
        assert_eq!(screen.pose(), &CardPose::swiped(SwipeDirection::Left));
        assert_eq!(screen.pose().transition, CARD_TRANSITION);
        assert_eq!(screen.indicator(), Some(SwipeDirection::Left));

        screen.advance(ResetStep::Settle);
        assert_eq!(screen.pose().transition, "none");
        assert_eq!(screen.pose().opacity, 1.0);
        assert_eq!(screen.indicator(), None);

        screen.advance(ResetStep::Rearm);
        assert_eq!(screen.pose(), &CardPose::resting());
    }

    #[test]
    fn test_rejected_gesture_keeps_pose() {
        let mut screen = SwipeScreen::new(CardView::default());
        assert_eq!(screen.accept(SwipeDirection::Right, true), Err(Rejection::Exhausted));
        assert_eq!(screen.pose(), &CardPose::resting());
        assert_eq!(screen.indicator(), None);
    }

    #[test]
    fn test_liked_by_text() {
        assert_eq!(liked_by_text(&[]), "");
        let names = vec!["ana@example.com".to_string(), "bo@example.com".to_string()];
        assert_eq!(liked_by_text(&names), "Liked by: ana@example.com, bo@example.com");
    }

    #[test]
    fn test_poses() {
        let left = CardPose::swiped(SwipeDirection::Left);
        assert!(left.transform.starts_with("translateX(-500px)"));
        assert_eq!(left.opacity, 0.0);
        assert_eq!(CardPose::reset().transition, "none");
        assert_eq!(CardPose::resting().transition, CARD_TRANSITION);
        assert_eq!(indicator_css(false), "opacity: 0; width: 0px; height: 0px;");
        assert!(indicator_css(true).contains("200px"));
    }
}
