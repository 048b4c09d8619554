use chrono::{DateTime, Local};
use log::{debug, info, warn};

use crate::model::Snapshot;
use crate::notify::{self, FireworksCommand};

/// Holds the latest snapshot plus the derived "backend reachable" flag.
/// One writer per inbound event, many readers within a render cycle.
#[derive(Clone, Debug, Default)]
pub struct StateCache {
    snapshot: Option<Snapshot>,
    reachable: bool,
    last_update: Option<DateTime<Local>>,
}

impl StateCache {
    /// Replace the cached snapshot wholesale.
    pub fn set(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
        self.last_update = Some(Local::now());
    }

    #[must_use]
    pub fn get(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
        self.last_update = None;
    }

    #[must_use]
    pub fn reachable(&self) -> bool {
        self.reachable
    }

    pub fn set_reachable(&mut self, reachable: bool) {
        self.reachable = reachable;
    }

    #[must_use]
    pub fn last_update(&self) -> Option<DateTime<Local>> {
        self.last_update
    }
}

/// Singleton celebration effect. Starting or stopping twice is a no-op.
#[derive(Clone, Debug, Default)]
pub struct Fireworks {
    running: bool,
}

impl Fireworks {
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            debug!("fireworks started");
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            debug!("fireworks stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// The three push events the transport collaborator delivers.
#[derive(Clone, Debug)]
pub enum InboundEvent {
    Connected { modes: Vec<String> },
    Disconnected,
    StateUpdate(Snapshot),
}

/// Everything the display owns between two events: the snapshot cache, the
/// celebration effect and the selectable-mode list for the waiting screen.
#[derive(Clone, Debug, Default)]
pub struct DisplayState {
    pub cache: StateCache,
    pub fireworks: Fireworks,
    pub available_modes: Vec<String>,
}

impl DisplayState {
    /// Process one inbound event to completion. Events are applied strictly
    /// in delivery order; each render afterwards observes a fully-replaced
    /// snapshot.
    pub fn apply(&mut self, event: InboundEvent) {
        match event {
            InboundEvent::Connected { modes } => {
                info!("backend connected, {} modes available", modes.len());
                self.available_modes = modes;
                self.cache.set_reachable(true);
            }
            InboundEvent::Disconnected => {
                warn!("backend connection lost");
                self.cache.set_reachable(false);
                self.cache.clear();
                self.fireworks.stop();
            }
            InboundEvent::StateUpdate(snapshot) => {
                if !self.cache.reachable() {
                    // Stale update between a disconnect and the next
                    // connect; the offline presentation stays up.
                    debug!("dropping state update while backend is unreachable");
                    return;
                }
                let notification = notify::evaluate(&snapshot);
                self.cache.set(snapshot);
                match notification.fireworks {
                    FireworksCommand::Start => self.fireworks.start(),
                    FireworksCommand::Stop => self.fireworks.stop(),
                }
            }
        }
    }
}
