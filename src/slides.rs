mod config;
mod effect;

pub use config::{ConfigError, DeckConfig, ParseEffectError, DEFAULT_AUTOPLAY_MS};
pub use effect::{Motion, RenderTransform, TransitionEffect};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionState {
    pub current_index: usize,
    pub accumulated_delta: f64,
    pub progress: f64,
    pub direction: Direction,
    pub is_transitioning: bool,
    pub overview: bool,
}

/// Handle for the one pending settle timer of a controller. Issuing a new
/// token cancels the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettleToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Input was not applied (disabled deck or empty delta)
    Ignored,
    /// Threshold reached; `moved` is false when clamped at either end
    Committed { moved: bool },
    /// Partial scroll; call `settle` with the token after `settle_after_ms`
    Pending {
        token: SettleToken,
        settle_after_ms: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Advance,
    Retreat,
    First,
    Last,
    ExitOverview,
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value to a deck command
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "ArrowRight" | "PageDown" | " " => Some(Self::Advance),
            "ArrowUp" | "ArrowLeft" | "PageUp" => Some(Self::Retreat),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            "Escape" => Some(Self::ExitOverview),
            _ => None,
        }
    }
}

pub struct TransitionController {
    config: DeckConfig,
    len: usize,
    state: TransitionState,
    settle_generation: u64,
    pending: Option<SettleToken>,
    last_step_ms: Option<f64>,
}

impl TransitionController {
    pub fn new(len: usize, config: DeckConfig) -> Self {
        let config = config.sanitized();
        let state = TransitionState {
            current_index: config.initial_index.min(len.saturating_sub(1)),
            ..Default::default()
        };
        Self {
            config,
            len,
            state,
            settle_generation: 0,
            pending: None,
            last_step_ms: None,
        }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn in_overview(&self) -> bool {
        self.state.overview
    }

    /// Transitions only make sense with somewhere to go
    pub fn is_interactive(&self) -> bool {
        self.len > 1
    }

    pub fn pending_settle(&self) -> Option<SettleToken> {
        self.pending
    }

    fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    fn reset_accumulator(&mut self) {
        self.state.accumulated_delta = 0.0;
        self.state.progress = 0.0;
        self.state.is_transitioning = false;
        self.pending = None;
    }

    /// Move one slide in `direction`, entering or leaving the overview panel
    /// at the end of the deck when it is enabled. Returns whether anything
    /// changed.
    fn step(&mut self, direction: Direction) -> bool {
        let last = self.last_index();
        match direction {
            Direction::Forward => {
                if self.state.overview {
                    false
                } else if self.state.current_index < last {
                    self.state.current_index += 1;
                    true
                } else if self.config.overview_enabled {
                    self.state.overview = true;
                    true
                } else {
                    false
                }
            }
            Direction::Backward => {
                if self.state.overview {
                    self.state.overview = false;
                    self.state.current_index = last;
                    true
                } else if self.state.current_index > 0 {
                    self.state.current_index -= 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn on_wheel(&mut self, delta: f64) -> WheelOutcome {
        if !self.is_interactive() || !self.config.enable_scroll {
            return WheelOutcome::Ignored;
        }
        if delta == 0.0 || !delta.is_finite() {
            return WheelOutcome::Ignored;
        }

        self.pending = None;
        self.state.accumulated_delta += delta;
        self.state.direction = Direction::from_delta(delta);
        self.state.progress =
            (self.state.accumulated_delta.abs() / self.config.sensitivity).clamp(0.0, 1.0);

        if self.state.progress >= 1.0 {
            let moved = self.step(self.state.direction);
            if moved {
                log::debug!(
                    "deck committed {:?} to slide {}",
                    self.state.direction,
                    self.state.current_index
                );
            }
            self.reset_accumulator();
            return WheelOutcome::Committed { moved };
        }

        self.state.is_transitioning = self.state.progress > 0.0;
        self.settle_generation += 1;
        let token = SettleToken(self.settle_generation);
        self.pending = Some(token);
        WheelOutcome::Pending {
            token,
            settle_after_ms: self.config.settle_timeout_ms,
        }
    }

    /// Settle timer fired. Only the most recently issued token snaps the
    /// partial transition back.
    pub fn settle(&mut self, token: SettleToken) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.reset_accumulator();
        true
    }

    /// Apply a discrete keyboard command. `now_ms` is used to rate-limit
    /// repeated steps. Returns whether the key was consumed by the deck.
    pub fn on_key(&mut self, command: KeyCommand, now_ms: f64) -> bool {
        if !self.is_interactive() {
            return false;
        }
        match command {
            KeyCommand::Advance | KeyCommand::Retreat => {
                if let Some(last) = self.last_step_ms {
                    if now_ms - last < f64::from(self.config.key_cooldown_ms) {
                        return false;
                    }
                }
                self.last_step_ms = Some(now_ms);
                let direction = if command == KeyCommand::Advance {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                self.state.direction = direction;
                self.step(direction);
            }
            KeyCommand::First => {
                self.state.overview = false;
                self.state.current_index = 0;
            }
            KeyCommand::Last => {
                if self.config.overview_enabled {
                    self.state.overview = true;
                } else {
                    self.state.current_index = self.last_index();
                }
            }
            KeyCommand::ExitOverview => {
                if !self.state.overview {
                    return false;
                }
                self.state.overview = false;
            }
        }
        self.reset_accumulator();
        true
    }

    /// Jump straight to a slide, e.g. from an indicator. Out of range
    /// requests clamp to the nearest slide.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let index = index.min(self.last_index());
        let changed = index != self.state.current_index || self.state.overview;
        self.state.current_index = index;
        self.state.overview = false;
        self.reset_accumulator();
        changed
    }

    pub fn enter_overview(&mut self) -> bool {
        if !self.config.overview_enabled || !self.is_interactive() {
            return false;
        }
        self.state.overview = true;
        self.reset_accumulator();
        true
    }

    /// Autoplay advances one slide, wrapping back to the start. It holds off
    /// while the user is mid-scroll or browsing the overview.
    pub fn autoplay_tick(&mut self) -> bool {
        if self.config.autoplay_ms.is_none()
            || !self.is_interactive()
            || self.state.is_transitioning
            || self.state.overview
        {
            return false;
        }
        self.state.current_index = (self.state.current_index + 1) % self.len;
        self.state.direction = Direction::Forward;
        true
    }

    /// The deck grew or shrank
    pub fn set_len(&mut self, len: usize) {
        if len == self.len {
            return;
        }
        self.len = len;
        self.state.current_index = self.state.current_index.min(self.last_index());
        if !self.is_interactive() {
            self.state.overview = false;
        }
        self.reset_accumulator();
    }

    pub fn motion(&self) -> Option<Motion> {
        self.state.is_transitioning.then_some(Motion {
            progress: self.state.progress,
            direction: self.state.direction,
        })
    }

    pub fn transform_of(&self, index: usize) -> RenderTransform {
        if index >= self.len || self.state.overview {
            return RenderTransform::hidden();
        }
        if !self.is_interactive() {
            return RenderTransform::identity(1);
        }
        let relative = index as isize - self.state.current_index as isize;
        self.config
            .effect
            .transform(relative, self.motion(), self.config.max_stack_depth)
    }

    /// Every slide that needs drawing this frame, by index. A snapshot for
    /// inspection; the deck view asks [`Self::transform_of`] per slide so
    /// each layer only re-renders when its own transform changes.
    pub fn transforms(&self) -> Vec<(usize, RenderTransform)> {
        (0..self.len)
            .map(|i| (i, self.transform_of(i)))
            .filter(|(_, t)| t.visible)
            .collect()
    }

    /// The neighbour currently being revealed, if a transition is underway
    pub fn peek_index(&self) -> Option<usize> {
        if !self.state.is_transitioning {
            return None;
        }
        let current = self.state.current_index;
        match self.state.direction {
            Direction::Forward if !self.state.overview && current < self.last_index() => {
                Some(current + 1)
            }
            Direction::Backward if self.state.overview => Some(self.last_index()),
            Direction::Backward if current > 0 => Some(current - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(len: usize) -> TransitionController {
        TransitionController::new(len, DeckConfig::default())
    }

    fn scroll(c: &mut TransitionController, deltas: &[f64]) -> Vec<WheelOutcome> {
        deltas.iter().map(|d| c.on_wheel(*d)).collect()
    }

    fn settle_pending(c: &mut TransitionController) -> bool {
        match c.pending_settle() {
            Some(token) => c.settle(token),
            None => false,
        }
    }

    #[test]
    fn test_partial_scroll_snaps_back() {
        let mut c = deck(3);
        scroll(&mut c, &[30.0, 20.0, 40.0]);
        assert_eq!(c.current_index(), 0);
        assert!(c.state().is_transitioning);
        assert!((c.state().progress - 0.9).abs() < 1e-9);

        assert!(settle_pending(&mut c));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.state().progress, 0.0);
        assert_eq!(c.state().accumulated_delta, 0.0);
        assert!(!c.state().is_transitioning);
    }

    #[test]
    fn test_threshold_commits_one_step() {
        let mut c = deck(3);
        let out = c.on_wheel(60.0);
        assert!(matches!(out, WheelOutcome::Pending { settle_after_ms: 150, .. }));
        assert!((c.state().progress - 0.6).abs() < 1e-9);
        assert_eq!(c.current_index(), 0);

        // the incoming slide is partially visible
        let next = c.transform_of(1);
        assert!(next.visible);
        assert!((next.opacity - 0.6).abs() < 1e-9);

        assert_eq!(c.on_wheel(50.0), WheelOutcome::Committed { moved: true });
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.state().progress, 0.0);
        assert!(c.pending_settle().is_none());
    }

    #[test]
    fn test_large_delta_moves_only_one_slide() {
        let mut c = deck(5);
        c.on_wheel(1000.0);
        assert_eq!(c.current_index(), 1);
        c.on_wheel(-1000.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_no_wraparound() {
        let mut c = deck(3);
        assert_eq!(c.on_wheel(-120.0), WheelOutcome::Committed { moved: false });
        assert_eq!(c.current_index(), 0);

        scroll(&mut c, &[100.0, 100.0, 100.0, 100.0]);
        assert_eq!(c.current_index(), 2);
        c.on_key(KeyCommand::Advance, 0.0);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_index_stays_in_range_for_mixed_input() {
        let mut c = deck(4);
        let deltas = [
            250.0, -30.0, 45.0, 99.0, -500.0, 12.5, 88.0, 100.0, 100.0, 100.0, 100.0, -7.0,
        ];
        for (i, d) in deltas.iter().enumerate() {
            c.on_wheel(*d);
            assert!(c.current_index() < c.len());
            if i % 3 == 0 {
                settle_pending(&mut c);
            }
            c.on_key(KeyCommand::Advance, i as f64 * 1000.0);
            assert!(c.current_index() < c.len());
        }
    }

    #[test]
    fn test_stale_settle_token_is_ignored() {
        let mut c = deck(3);
        let first = match c.on_wheel(20.0) {
            WheelOutcome::Pending { token, .. } => token,
            other => panic!("expected pending, got {other:?}"),
        };
        c.on_wheel(20.0);
        assert!(!c.settle(first));
        assert!(c.state().is_transitioning);
        assert!((c.state().progress - 0.4).abs() < 1e-9);
        assert!(settle_pending(&mut c));
        assert!(!c.state().is_transitioning);
    }

    #[test]
    fn test_direction_follows_latest_delta() {
        let mut c = deck(3);
        c.jump_to(1);
        c.on_wheel(50.0);
        c.on_wheel(-10.0);
        assert_eq!(c.state().direction, Direction::Backward);
        assert_eq!(c.peek_index(), Some(0));
    }

    #[test]
    fn test_keyboard_bypasses_accumulator() {
        let mut c = deck(3);
        c.on_wheel(40.0);
        assert!(c.on_key(KeyCommand::Advance, 1000.0));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.state().accumulated_delta, 0.0);
        assert!(c.pending_settle().is_none());

        assert!(c.on_key(KeyCommand::Last, 2000.0));
        assert_eq!(c.current_index(), 2);
        assert!(c.on_key(KeyCommand::First, 3000.0));
        assert_eq!(c.current_index(), 0);
        assert!(!c.on_key(KeyCommand::ExitOverview, 4000.0));
    }

    #[test]
    fn test_advance_at_last_slide_is_noop() {
        let mut c = TransitionController::new(
            3,
            DeckConfig {
                initial_index: 2,
                ..Default::default()
            },
        );
        assert_eq!(c.current_index(), 2);
        c.on_key(KeyCommand::Advance, 0.0);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_key_cooldown() {
        let mut c = deck(5);
        assert!(c.on_key(KeyCommand::Advance, 1000.0));
        assert!(!c.on_key(KeyCommand::Advance, 1100.0));
        assert_eq!(c.current_index(), 1);
        assert!(c.on_key(KeyCommand::Advance, 1150.0));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyCommand::from_key("ArrowDown"), Some(KeyCommand::Advance));
        assert_eq!(KeyCommand::from_key(" "), Some(KeyCommand::Advance));
        assert_eq!(KeyCommand::from_key("PageUp"), Some(KeyCommand::Retreat));
        assert_eq!(KeyCommand::from_key("Home"), Some(KeyCommand::First));
        assert_eq!(KeyCommand::from_key("End"), Some(KeyCommand::Last));
        assert_eq!(KeyCommand::from_key("a"), None);
    }

    #[test]
    fn test_degenerate_decks_ignore_input() {
        for len in [0, 1] {
            let mut c = deck(len);
            assert_eq!(c.on_wheel(500.0), WheelOutcome::Ignored);
            assert!(!c.on_key(KeyCommand::Advance, 0.0));
            assert_eq!(c.current_index(), 0);
        }
        assert!(deck(0).transforms().is_empty());
        let single = deck(1).transforms();
        assert_eq!(single.len(), 1);
        assert!(single[0].1.is_identity());
    }

    #[test]
    fn test_scroll_disabled() {
        let mut c = TransitionController::new(
            3,
            DeckConfig {
                enable_scroll: false,
                ..Default::default()
            },
        );
        assert_eq!(c.on_wheel(200.0), WheelOutcome::Ignored);
        assert!(c.on_key(KeyCommand::Advance, 0.0));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_rest_transforms() {
        let c = deck(6);
        let transforms = c.transforms();
        assert_eq!(transforms.len(), 1);
        assert_eq!(transforms[0].0, 0);
        assert!(transforms[0].1.is_identity());

        let mut c = deck(6);
        c.jump_to(5);
        let visible: Vec<usize> = c.transforms().into_iter().map(|(i, _)| i).collect();
        assert_eq!(visible, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_jump_to_clamps() {
        let mut c = deck(3);
        assert!(c.jump_to(10));
        assert_eq!(c.current_index(), 2);
        assert!(!c.jump_to(2));
    }

    #[test]
    fn test_overview_round_trip() {
        let mut c = TransitionController::new(2, DeckConfig::default().with_overview());
        c.on_wheel(100.0);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.on_wheel(100.0), WheelOutcome::Committed { moved: true });
        assert!(c.in_overview());
        assert!(c.transforms().is_empty());

        // nothing beyond the overview
        assert_eq!(c.on_wheel(100.0), WheelOutcome::Committed { moved: false });

        c.on_wheel(-60.0);
        assert_eq!(c.peek_index(), Some(1));
        c.on_wheel(-60.0);
        assert!(!c.in_overview());
        assert_eq!(c.current_index(), 1);

        assert!(c.on_key(KeyCommand::Last, 0.0));
        assert!(c.in_overview());
        assert!(c.on_key(KeyCommand::ExitOverview, 1.0));
        assert!(!c.in_overview());

        c.enter_overview();
        assert!(c.jump_to(0));
        assert!(!c.in_overview());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_enter_overview_from_any_slide() {
        let mut c = TransitionController::new(4, DeckConfig::default().with_overview());
        c.jump_to(1);
        c.on_wheel(40.0);
        assert!(c.enter_overview());
        assert!(c.in_overview());
        assert_eq!(c.pending_settle(), None);
        assert_eq!(c.state().progress, 0.0);
        // leaving by scrolling back lands on the last slide
        c.on_wheel(-100.0);
        assert!(!c.in_overview());
        assert_eq!(c.current_index(), 3);

        let mut plain = TransitionController::new(4, DeckConfig::default());
        assert!(!plain.enter_overview());
        assert!(!plain.in_overview());
        assert!(!TransitionController::new(1, DeckConfig::default().with_overview()).enter_overview());
    }

    #[test]
    fn test_autoplay_wraps() {
        let mut c = TransitionController::new(3, DeckConfig::default().with_autoplay(3000));
        assert!(c.autoplay_tick());
        assert!(c.autoplay_tick());
        assert_eq!(c.current_index(), 2);
        assert!(c.autoplay_tick());
        assert_eq!(c.current_index(), 0);

        c.on_wheel(10.0);
        assert!(!c.autoplay_tick());
        assert_eq!(c.current_index(), 0);

        assert!(!deck(3).autoplay_tick());
    }

    #[test]
    fn test_set_len_clamps() {
        let mut c = deck(5);
        c.jump_to(4);
        c.on_wheel(30.0);
        c.set_len(3);
        assert_eq!(c.current_index(), 2);
        assert!(!c.state().is_transitioning);

        c.set_len(0);
        assert_eq!(c.current_index(), 0);
        assert!(c.transforms().is_empty());
    }

    #[test]
    fn test_initial_index_is_clamped() {
        let c = TransitionController::new(
            2,
            DeckConfig {
                initial_index: 9,
                ..Default::default()
            },
        );
        assert_eq!(c.current_index(), 1);
    }
}
