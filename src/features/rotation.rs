//! Quote rotation state machine
//!
//! Tracks which quote is shown and whether a transition lock is held.
//! `advance` is only effective while idle; every index change arms a
//! cooldown identified by a [`CooldownTicket`]. Only the most recently
//! issued ticket can release the lock, so an expiry left over from an
//! earlier change never unlocks a later one.

/// Token for one armed cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CooldownTicket(u64);

#[derive(Debug, Clone)]
pub struct RotationState {
    active_index: usize,
    transitioning: bool,
    /// Generation of the live cooldown; bumped whenever a cooldown is armed
    generation: u64,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationState {
    pub fn new() -> Self {
        Self {
            active_index: 0,
            transitioning: false,
            generation: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Move to the next quote of a `len`-long list.
    ///
    /// Returns the ticket of the newly armed cooldown, or `None` when the
    /// request was dropped because a transition is still in progress.
    pub fn advance(&mut self, len: usize) -> Option<CooldownTicket> {
        if self.transitioning || len == 0 {
            return None;
        }
        self.transitioning = true;
        self.active_index = (self.active_index + 1) % len;
        Some(self.arm_cooldown())
    }

    /// Issue a fresh cooldown ticket, invalidating any earlier one
    pub fn arm_cooldown(&mut self) -> CooldownTicket {
        self.generation = self.generation.wrapping_add(1);
        CooldownTicket(self.generation)
    }

    /// Ticket of the currently armed cooldown
    #[cfg(test)]
    pub fn live_ticket(&self) -> CooldownTicket {
        CooldownTicket(self.generation)
    }

    /// Whether `ticket` belongs to the currently armed cooldown
    pub fn is_live(&self, ticket: CooldownTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Release the transition lock if `ticket` is still live.
    ///
    /// Returns `true` when the ticket was live (the state is now idle).
    pub fn cooldown_expire(&mut self, ticket: CooldownTicket) -> bool {
        if !self.is_live(ticket) {
            return false;
        }
        self.transitioning = false;
        true
    }
}
