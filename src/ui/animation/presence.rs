//! Keyed presence animation
//!
//! Shows one keyed item at a time. Changing the key first plays the exit of
//! the displayed item to completion, then swaps in the new key and plays its
//! enter. Only the latest requested key is kept while an exit is running.

use std::time::{Duration, Instant};

use super::prelude::{Animated, presets};

/// Scale at the start of an enter
const ENTER_SCALE: f32 = 0.9;
/// Scale at the end of an exit
const EXIT_SCALE: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresencePhase {
    Entering,
    Exiting,
}

#[derive(Debug)]
pub struct Presence<K: PartialEq + Clone> {
    shown: K,
    pending: Option<K>,
    phase: PresencePhase,
    visibility: Animated<f32>,
    /// Sprung separately so it can overshoot; never clamped
    scale: Animated<f32>,
    entered_at: Instant,
}

impl<K: PartialEq + Clone> Presence<K> {
    /// Mount with `key` and start its enter
    pub fn new(key: K, now: Instant) -> Self {
        let mut visibility = presets::quote_enter();
        visibility.update(1.0.into());
        Self {
            shown: key,
            pending: None,
            phase: PresencePhase::Entering,
            visibility,
            scale: enter_scale(),
            entered_at: now,
        }
    }

    /// Key currently on screen (the old key while an exit is running)
    pub fn key(&self) -> &K {
        &self.shown
    }

    #[cfg(test)]
    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    /// Request a new key; the swap happens once the exit finishes
    pub fn set_key(&mut self, key: K) {
        if key == self.shown {
            // Back to what is displayed: nothing to swap in after the exit
            self.pending = None;
            return;
        }
        self.pending = Some(key);
        if self.phase == PresencePhase::Entering {
            let from = *self.visibility.value();
            self.visibility = presets::quote_exit(from);
            self.visibility.update(0.0.into());
            let scale = *self.scale.value();
            self.scale = presets::quote_scale(scale);
            self.scale.update(EXIT_SCALE.into());
            self.phase = PresencePhase::Exiting;
        }
    }

    /// Advance the animation; swaps keys when an exit has completed
    pub fn tick(&mut self, now: Instant) {
        self.visibility.tick(now);
        self.scale.tick(now);

        if self.phase == PresencePhase::Exiting && !self.visibility.is_animating() {
            if let Some(next) = self.pending.take() {
                self.shown = next;
            }
            self.visibility = presets::quote_enter();
            self.visibility.update(1.0.into());
            self.scale = enter_scale();
            self.phase = PresencePhase::Entering;
            self.entered_at = now;
        }
    }

    /// Opacity of the displayed item (0.0 to 1.0)
    pub fn opacity(&self) -> f32 {
        (*self.visibility.value()).clamp(0.0, 1.0)
    }

    /// Scale of the displayed item
    pub fn scale(&self) -> f32 {
        *self.scale.value()
    }

    /// Time since the displayed item started entering
    pub fn since_enter(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.entered_at)
    }

    pub fn is_animating(&self) -> bool {
        self.visibility.is_animating() || self.scale.is_animating() || self.pending.is_some()
    }
}

/// Scale spring heading from the enter scale to rest
fn enter_scale() -> Animated<f32> {
    let mut scale = presets::quote_scale(ENTER_SCALE);
    scale.update(1.0.into());
    scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    /// Tick in frame-sized steps over `[from, from + 5s]` so every
    /// transition and spring started on the way has come to rest
    fn settle(presence: &mut Presence<usize>, start: Instant, from_secs: u64) {
        for step in 0..=300 {
            presence.tick(at(start, from_secs * 1000 + step * 16));
        }
    }

    #[test]
    fn mounts_entering() {
        let presence = Presence::new(0_usize, Instant::now());
        assert_eq!(*presence.key(), 0);
        assert_eq!(presence.phase(), PresencePhase::Entering);
        assert!((presence.scale() - ENTER_SCALE).abs() < 1e-4);
    }

    #[test]
    fn enter_settles_fully_visible() {
        let start = Instant::now();
        let mut presence = Presence::new(0_usize, start);
        settle(&mut presence, start, 0);
        assert!((presence.opacity() - 1.0).abs() < 1e-4);
        assert!((presence.scale() - 1.0).abs() < 1e-3);
        assert!(!presence.is_animating());
    }

    #[test]
    fn enter_scale_overshoots_before_resting() {
        let start = Instant::now();
        let mut presence = Presence::new(0_usize, start);
        let mut peak = presence.scale();
        for step in 1..=300 {
            presence.tick(at(start, step * 10));
            peak = peak.max(presence.scale());
        }
        assert!(peak > 1.0, "spring should pass its rest scale, peaked at {peak}");
        assert!(presence.opacity() <= 1.0);
    }

    #[test]
    fn exit_runs_before_key_swap() {
        let start = Instant::now();
        let mut presence = Presence::new(0_usize, start);
        settle(&mut presence, start, 0);

        presence.set_key(1);
        assert_eq!(presence.phase(), PresencePhase::Exiting);
        assert_eq!(*presence.key(), 0, "old key stays until its exit ends");
        assert!(presence.is_animating());

        settle(&mut presence, start, 10);
        assert_eq!(*presence.key(), 1);
        assert_eq!(presence.phase(), PresencePhase::Entering);

        settle(&mut presence, start, 20);
        assert!((presence.opacity() - 1.0).abs() < 1e-4);
        assert!(!presence.is_animating());
    }

    #[test]
    fn key_change_mid_enter_exits_from_partial_visibility() {
        let start = Instant::now();
        let mut presence = Presence::new(0_usize, start);
        presence.tick(at(start, 150));
        presence.tick(at(start, 300));
        let partial = presence.opacity();
        assert!(partial > 0.0 && partial < 1.0, "enter still running: {partial}");

        presence.set_key(1);
        assert_eq!(presence.phase(), PresencePhase::Exiting);
        assert_eq!(*presence.key(), 0);
        assert!((presence.opacity() - partial).abs() < 1e-4);

        settle(&mut presence, start, 1);
        assert_eq!(*presence.key(), 1);
        assert_eq!(presence.phase(), PresencePhase::Entering);
    }

    #[test]
    fn latest_pending_key_wins() {
        let start = Instant::now();
        let mut presence = Presence::new(0_usize, start);
        settle(&mut presence, start, 0);
        presence.set_key(1);
        presence.set_key(2);
        settle(&mut presence, start, 10);
        assert_eq!(*presence.key(), 2);
    }

    #[test]
    fn returning_to_shown_key_reenters_it() {
        let start = Instant::now();
        let mut presence = Presence::new(0_usize, start);
        settle(&mut presence, start, 0);
        presence.set_key(1);
        presence.set_key(0);
        settle(&mut presence, start, 10);
        assert_eq!(*presence.key(), 0);
        assert_eq!(presence.phase(), PresencePhase::Entering);
    }

    #[test]
    fn since_enter_resets_on_swap() {
        let start = Instant::now();
        let mut presence = Presence::new(0_usize, start);
        assert_eq!(presence.since_enter(start), Duration::ZERO);

        settle(&mut presence, start, 0);
        presence.set_key(1);
        settle(&mut presence, start, 10);

        assert_eq!(presence.since_enter(start), Duration::ZERO);
        assert!(presence.since_enter(at(start, 100_000)) < Duration::from_secs(95));
    }
}
