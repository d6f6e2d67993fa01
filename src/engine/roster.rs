//! Roster bookkeeping.
//!
//! Every astronaut sits in exactly one of three places: the active queue
//! (waiting for a turn), the current-player slot, or the corpse list.
//! Astronauts are never dropped from the roster.
//!
//! Uses `im` vectors so engine snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::player::Astronaut;

/// Where an astronaut currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    /// Waiting in the active queue at this index.
    Active(usize),
    /// Taking their turn.
    Current,
    /// In the corpse list at this index.
    Corpse(usize),
}

/// The active queue, current player and corpses.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    active: Vector<Astronaut>,
    current: Option<Astronaut>,
    corpses: Vector<Astronaut>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total astronauts, dead or alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len() + self.corpses.len() + usize::from(self.current.is_some())
    }

    /// Check if nobody has joined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of astronauts in the corpse list.
    #[must_use]
    pub fn corpse_count(&self) -> usize {
        self.corpses.len()
    }

    /// The astronaut taking their turn.
    #[must_use]
    pub fn current(&self) -> Option<&Astronaut> {
        self.current.as_ref()
    }

    /// Astronauts waiting for a turn, front first.
    pub fn active(&self) -> impl Iterator<Item = &Astronaut> {
        self.active.iter()
    }

    /// Eliminated astronauts, in order of death.
    pub fn corpses(&self) -> impl Iterator<Item = &Astronaut> {
        self.corpses.iter()
    }

    /// Everyone in turn order: current player, active queue, then corpses.
    pub fn iter(&self) -> impl Iterator<Item = &Astronaut> {
        self.current
            .iter()
            .chain(self.active.iter())
            .chain(self.corpses.iter())
    }

    /// Mutable access to the active queue.
    pub fn active_mut(&mut self) -> impl Iterator<Item = &mut Astronaut> {
        self.active.iter_mut()
    }

    /// Locate an astronaut.
    #[must_use]
    pub fn seat(&self, id: PlayerId) -> Option<Seat> {
        if self.current.as_ref().is_some_and(|a| a.id() == id) {
            return Some(Seat::Current);
        }
        if let Some(index) = self.active.iter().position(|a| a.id() == id) {
            return Some(Seat::Active(index));
        }
        self.corpses
            .iter()
            .position(|a| a.id() == id)
            .map(Seat::Corpse)
    }

    /// Look up an astronaut wherever they sit.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Astronaut> {
        self.iter().find(|a| a.id() == id)
    }

    /// Look up an astronaut mutably wherever they sit.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Astronaut> {
        match self.seat(id)? {
            Seat::Current => self.current.as_mut(),
            Seat::Active(index) => self.active.get_mut(index),
            Seat::Corpse(index) => self.corpses.get_mut(index),
        }
    }

    /// Add an astronaut to the back of the active queue.
    pub fn enqueue(&mut self, astronaut: Astronaut) {
        self.active.push_back(astronaut);
    }

    /// Move the front of the active queue into the current-player slot.
    ///
    /// Returns the new current player's id, or `None` if the slot is taken
    /// or the queue is empty.
    pub fn advance(&mut self) -> Option<PlayerId> {
        if self.current.is_some() {
            return None;
        }
        let next = self.active.pop_front()?;
        let id = next.id();
        self.current = Some(next);
        Some(id)
    }

    /// Empty the current-player slot.
    pub fn take_current(&mut self) -> Option<Astronaut> {
        self.current.take()
    }

    /// Put an astronaut back into the current-player slot.
    pub fn restore_current(&mut self, astronaut: Astronaut) {
        self.current = Some(astronaut);
    }

    /// Move an astronaut to the corpse list.
    ///
    /// Returns false if they were already there or are not on the roster.
    pub fn bury(&mut self, id: PlayerId) -> bool {
        let body = match self.seat(id) {
            Some(Seat::Current) => self.current.take(),
            Some(Seat::Active(index)) => Some(self.active.remove(index)),
            Some(Seat::Corpse(_)) | None => None,
        };
        match body {
            Some(body) => {
                self.corpses.push_back(body);
                true
            }
            None => false,
        }
    }
}
