//! Ownership bookkeeping for imperative map resources: what is alive, what
//! replaces what, and which asynchronous results are still wanted.

use crate::coordinate::Coordinate;

/// A resource that must be explicitly taken off the map (or disposed)
/// when its owner lets go of it.
pub trait Release {
    fn release(self);
}

/// Holds at most one resource. Putting a new one in releases the old one
/// first.
#[derive(Debug)]
pub struct Slot<T: Release> {
    item: Option<T>,
}

impl<T: Release> Default for Slot<T> {
    fn default() -> Self {
        Self { item: None }
    }
}

impl<T: Release> Slot<T> {
    pub fn replace(&mut self, item: T) {
        self.clear();
        self.item = Some(item);
    }

    pub fn clear(&mut self) {
        if let Some(item) = self.item.take() {
            item.release();
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.item.is_some()
    }
}

/// Resources built together and released together, in creation order.
#[derive(Debug)]
pub struct Arena<T: Release> {
    items: Vec<T>,
}

impl<T: Release> Default for Arena<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Release> Arena<T> {
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn clear(&mut self) {
        for item in self.items.drain(..) {
            item.release();
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

/// What one live map owns. The map itself goes last.
pub struct Scene<M: Release, V: Release, K: Release, P: Release> {
    pub map: M,
    pub viewer: V,
    pub markers: Arena<K>,
    pub pin: Slot<P>,
}

impl<M: Release, V: Release, K: Release, P: Release> Scene<M, V, K, P> {
    pub fn new(map: M, viewer: V) -> Self {
        Self {
            map,
            viewer,
            markers: Arena::default(),
            pin: Slot::default(),
        }
    }
}

impl<M: Release, V: Release, K: Release, P: Release> Release for Scene<M, V, K, P> {
    fn release(self) {
        let Scene {
            map,
            viewer,
            mut markers,
            mut pin,
        } = self;
        markers.clear();
        pin.clear();
        viewer.release();
        map.release();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Latest-wins sequencing for requests that cannot be cancelled.
#[derive(Debug, Default)]
pub struct Latest {
    issued: u64,
}

impl Latest {
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Voids every ticket handed out so far.
    pub fn invalidate(&mut self) {
        self.issued += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeState {
    Unmounted,
    AwaitingPosition,
    Live,
    Teardown,
}

/// Guards the life of one map instance per container. The viewer position is
/// latched: the first one reported is kept for every later episode.
#[derive(Debug)]
pub struct Episode {
    state: EpisodeState,
    position: Option<Coordinate>,
    episodes: u32,
}

impl Default for Episode {
    fn default() -> Self {
        Self {
            state: EpisodeState::Unmounted,
            position: None,
            episodes: 0,
        }
    }
}

impl Episode {
    pub fn state(&self) -> EpisodeState {
        self.state
    }

    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    /// Number of times the map went live.
    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    pub fn mount(&mut self) {
        if self.state == EpisodeState::Unmounted {
            self.state = EpisodeState::AwaitingPosition;
        }
    }

    /// Records the viewer position. Returns `false` if one was already set.
    pub fn locate(&mut self, position: Coordinate) -> bool {
        if self.position.is_some() {
            return false;
        }
        self.position = Some(position);
        true
    }

    /// The position to build the map around, if a map should be built now.
    pub fn should_go_live(&self) -> Option<Coordinate> {
        match self.state {
            EpisodeState::AwaitingPosition => self.position,
            _ => None,
        }
    }

    /// Marks the map as built. Returns `false` (and changes nothing) when the
    /// guard does not allow a new map.
    pub fn go_live(&mut self) -> bool {
        if self.should_go_live().is_none() {
            return false;
        }
        self.state = EpisodeState::Live;
        self.episodes += 1;
        true
    }

    /// Runs `release` if a map is live, then leaves the container unmounted.
    pub fn teardown(&mut self, release: impl FnOnce()) {
        if self.state == EpisodeState::Live {
            self.state = EpisodeState::Teardown;
            release();
        }
        self.state = EpisodeState::Unmounted;
    }
}
