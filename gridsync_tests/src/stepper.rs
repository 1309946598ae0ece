use core::time::Duration;

use bytes::Bytes;
use gridsync::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Stepper with:
/// - 1 server, with one [`CrossbeamIo`] linked to every client
/// - n clients, each linked only to the server
///
/// Client `i` has the client id `i + 1` and controls the entity `i + 1`. Every controller is
/// registered on the server and on every client when the stepper is created.
pub struct ServerClientStepper {
    pub config: GridsyncConfig,
    pub server: ProtocolRouter<CrossbeamIo>,
    pub server_state: MatchState,
    pub clients: Vec<ProtocolRouter<CrossbeamIo>>,
    pub client_states: Vec<MatchState>,
    pub frame_duration: Duration,
    pub elapsed: Duration,
    rng: StdRng,
}

impl ServerClientStepper {
    pub fn single() -> Self {
        Self::with_clients(1)
    }

    pub fn with_clients(n: usize) -> Self {
        Self::new(n, GridsyncConfig::default()).unwrap()
    }

    pub fn new(n: usize, config: GridsyncConfig) -> Result<Self> {
        config.validate()?;
        let ids: Vec<u64> = (0..n).map(Self::client_id).collect();
        let (server_io, client_ios) = CrossbeamIo::star(ids.iter().copied());

        let codec = MessageCodec::new(config.codec());
        let server = ProtocolRouter::new(Role::Authoritative, codec.clone(), server_io)
            .with_sync_config(&config.sync);
        let mut server_state = MatchState::new(PeerId::Server, &config.grid, &config.game)?;

        let mut clients = Vec::with_capacity(n);
        let mut client_states = Vec::with_capacity(n);
        for (id, io) in ids.iter().zip(client_ios) {
            clients.push(
                ProtocolRouter::new(Role::Peer, codec.clone(), io).with_sync_config(&config.sync),
            );
            client_states.push(MatchState::new(
                PeerId::Client(*id),
                &config.grid,
                &config.game,
            )?);
        }
        for i in 0..n {
            let entity = Self::entity(i);
            let owner = PeerId::Client(Self::client_id(i));
            server_state.report_in(entity, owner);
            for state in client_states.iter_mut() {
                state.report_in(entity, owner);
            }
        }
        info!(clients = n, "stepper ready");
        Ok(Self {
            config,
            server,
            server_state,
            clients,
            client_states,
            frame_duration: Duration::from_millis(10),
            elapsed: Duration::ZERO,
            rng: StdRng::seed_from_u64(0),
        })
    }

    pub fn client_id(i: usize) -> u64 {
        i as u64 + 1
    }

    /// Entity controlled by client `i`
    pub fn entity(i: usize) -> EntityId {
        EntityId(i as u64 + 1)
    }

    pub fn client_peer(i: usize) -> PeerId {
        PeerId::Client(Self::client_id(i))
    }

    /// Runs `n` frames.
    ///
    /// In each frame the server dispatches what it received, advances the match clock
    /// (broadcasting the final scores when the match ends) and performs the scheduled syncs;
    /// then every client dispatches what it received.
    pub fn frame_step(&mut self, n: usize) {
        for _ in 0..n {
            self.server.receive(&mut self.server_state);
            if self.server_state.advance(self.frame_duration) {
                self.server.broadcast_game_end(&self.server_state).unwrap();
            }
            self.server.update(self.frame_duration, &self.server_state);
            for (client, state) in self.clients.iter_mut().zip(self.client_states.iter_mut()) {
                client.receive(state);
            }
            self.elapsed += self.frame_duration;
        }
    }

    /// Runs enough frames for `duration` to elapse
    pub fn advance(&mut self, duration: Duration) {
        let frames = duration.as_nanos().div_ceil(self.frame_duration.as_nanos());
        self.frame_step(frames as usize);
    }

    /// Polls a new input on client `i` and sends it to the server
    pub fn client_input(&mut self, i: usize, input: InputFlags) {
        let entity = Self::entity(i);
        assert!(self.client_states[i].set_local_input(entity, input));
        assert!(self.clients[i].send_input(entity, &self.client_states[i]).unwrap());
    }

    /// Moves an entity on the server, as its physics would
    pub fn server_move(&mut self, entity: EntityId, pose: Pose) {
        assert!(self.server_state.set_pose(entity, pose));
    }

    /// Claims a cell on the server and broadcasts the claim if it changed the board
    pub fn server_claim(&mut self, cell: u8, entity: EntityId) -> ClaimOutcome {
        let outcome = self.server_state.claim(cell, entity);
        if outcome.changed() {
            self.server.broadcast_map_claim(entity, cell).unwrap();
        }
        debug!(cell, %entity, ?outcome, "server claim");
        outcome
    }

    /// Gives a color to every player of the server that has none yet
    pub fn server_assign_colors(&mut self) -> Vec<ColorEntry> {
        self.server_state.assign_colors(&mut self.rng)
    }

    /// Sends raw bytes from client `i` to the server, bypassing the codec
    pub fn inject_from_client(&mut self, i: usize, bytes: &[u8]) {
        self.clients[i]
            .transport_mut()
            .send(
                &NetworkTarget::Single(PeerId::Server),
                Bytes::copy_from_slice(bytes),
            )
            .unwrap();
    }
}
