//! Player controllers known to the local peer
use gridsync_core::prelude::*;
use tracing::debug;

/// Networked state of one player
#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    pub entity: EntityId,
    /// Peer that controls the entity
    pub owner: PeerId,
    /// Last known movement intent
    pub input: InputFlags,
    pub pose: Pose,
    pub color: Option<Rgb>,
    /// False once the owner left; the controller is removed by [`Roster::prune_disconnected`]
    pub connected: bool,
}

impl Controller {
    pub fn new(entity: EntityId, owner: PeerId) -> Self {
        Self {
            entity,
            owner,
            input: InputFlags::default(),
            pose: Pose::default(),
            color: None,
            connected: true,
        }
    }
}

/// Controllers in the order they reported in
#[derive(Debug, Clone, Default)]
pub struct Roster {
    controllers: Vec<Controller>,
}

impl Roster {
    /// Adds a controller for `entity`. Returns false if the entity already reported in.
    pub fn report_in(&mut self, entity: EntityId, owner: PeerId) -> bool {
        if self.controllers.iter().any(|c| c.entity == entity) {
            return false;
        }
        debug!(%entity, %owner, "controller reported in");
        self.controllers.push(Controller::new(entity, owner));
        true
    }

    /// Connected controller of `entity`
    pub fn get(&self, entity: EntityId) -> Option<&Controller> {
        self.controllers
            .iter()
            .find(|c| c.entity == entity && c.connected)
    }

    /// Connected controller of `entity`
    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut Controller> {
        self.controllers
            .iter_mut()
            .find(|c| c.entity == entity && c.connected)
    }

    /// Marks the controller of `entity` as disconnected
    pub fn disconnect(&mut self, entity: EntityId) -> bool {
        match self.get_mut(entity) {
            Some(controller) => {
                controller.connected = false;
                true
            }
            None => false,
        }
    }

    /// Marks every controller owned by `peer` as disconnected, and returns how many there were
    pub fn disconnect_peer(&mut self, peer: PeerId) -> usize {
        let mut count = 0;
        for controller in self
            .controllers
            .iter_mut()
            .filter(|c| c.owner == peer && c.connected)
        {
            controller.connected = false;
            count += 1;
        }
        count
    }

    /// Removes the disconnected controllers and returns their entities.
    ///
    /// The disconnected entities are all collected before any controller is removed.
    pub fn prune_disconnected(&mut self) -> Vec<EntityId> {
        let stale: Vec<EntityId> = self
            .controllers
            .iter()
            .filter(|c| !c.connected)
            .map(|c| c.entity)
            .collect();
        if !stale.is_empty() {
            self.controllers.retain(|c| !stale.contains(&c.entity));
            debug!(?stale, "pruned disconnected controllers");
        }
        stale
    }

    /// Connected controllers
    pub fn iter(&self) -> impl Iterator<Item = &Controller> {
        self.controllers.iter().filter(|c| c.connected)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Controller> {
        self.controllers.iter_mut().filter(|c| c.connected)
    }

    /// Entities of the connected controllers
    pub fn entities(&self) -> Vec<EntityId> {
        self.iter().map(|c| c.entity).collect()
    }

    /// Number of connected controllers
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
