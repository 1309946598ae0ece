//! Routing of messages between the transport and the game state
use core::time::Duration;

use gridsync_core::prelude::*;
use gridsync_link::{NetworkTarget, Transport};
use gridsync_messages::prelude::*;
use tracing::{debug, error, trace, warn};

use crate::error::{Result, RouterError};
use crate::schedule::{SyncConfig, SyncDue, SyncSchedule};
use crate::state::GameState;
use crate::stats::RouterStats;

/// Routes decoded messages to the [`GameState`], and builds the outgoing messages from it.
///
/// There is one router per session, owned by the host. Its [`Role`] decides how the messages that
/// share a shape between a request and a response are interpreted:
/// - `RequestColors` is a request on the server (answered with the color roster, to the requester
///   only) and a response on a client (the roster is applied).
/// - `GameStart` is a request on the server (the game starts if [`GameState::try_start_game`]
///   allows it, and the start is broadcast) and a notification on a client.
/// - `GameEnd` is only meaningful on a client; the server ignores it.
pub struct ProtocolRouter<T> {
    role: Role,
    codec: MessageCodec,
    transport: T,
    schedule: SyncSchedule,
    stats: RouterStats,
}

impl<T: Transport> ProtocolRouter<T> {
    pub fn new(role: Role, codec: MessageCodec, transport: T) -> Self {
        Self {
            role,
            codec,
            transport,
            schedule: SyncSchedule::default(),
            stats: RouterStats::default(),
        }
    }

    pub fn with_sync_config(mut self, config: &SyncConfig) -> Self {
        self.schedule = SyncSchedule::new(config);
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn codec(&self) -> &MessageCodec {
        &self.codec
    }

    pub fn stats(&self) -> &RouterStats {
        &self.stats
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Encodes `message` and hands it to the transport.
    ///
    /// Nothing is sent if the message fails to encode.
    pub fn send(&mut self, target: &NetworkTarget, message: &Message) -> Result<()> {
        let bytes = match self.codec.encode(message) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(kind = ?message.kind(), error = %e, "failed to encode message");
                self.stats.record_send_error();
                return Err(e.into());
            }
        };
        trace!(?target, kind = ?message.kind(), len = bytes.len(), "send message");
        if let Err(e) = self.transport.send(target, bytes) {
            self.stats.record_send_error();
            return Err(e.into());
        }
        self.stats.record_sent();
        Ok(())
    }

    fn expect_role(&self, role: Role, operation: &'static str) -> Result<()> {
        if self.role != role {
            return Err(RouterError::WrongRole {
                operation,
                role: self.role,
            });
        }
        Ok(())
    }

    /// Broadcasts the current input of `entity`.
    ///
    /// Returns false if the state has no input for the entity.
    pub fn broadcast_input<S: GameState + ?Sized>(
        &mut self,
        entity: EntityId,
        state: &S,
    ) -> Result<bool> {
        self.expect_role(Role::Authoritative, "broadcast_input")?;
        let Some(input) = state.current_input(entity) else {
            trace!(%entity, "no input to broadcast");
            return Ok(false);
        };
        self.send(&NetworkTarget::All, &Message::player_input(entity, input))?;
        Ok(true)
    }

    /// Broadcasts the current pose of `entity`.
    ///
    /// The position is clamped to the quantized domain first, so an entity that left the map is
    /// still synced at the edge of the domain. Returns false if the state has no pose for the
    /// entity.
    pub fn broadcast_spatial<S: GameState + ?Sized>(
        &mut self,
        entity: EntityId,
        state: &S,
    ) -> Result<bool> {
        self.expect_role(Role::Authoritative, "broadcast_spatial")?;
        let Some(mut pose) = state.current_pose(entity) else {
            trace!(%entity, "no pose to broadcast");
            return Ok(false);
        };
        let range = &self.codec.config().quantization.position;
        let clamped = Vec3::from_array(pose.position.to_array().map(|axis| range.clamp(axis)));
        if clamped != pose.position {
            debug!(%entity, position = ?pose.position, "clamping position to the quantized domain");
            pose.position = clamped;
        }
        self.send(&NetworkTarget::All, &Message::player_spatial(entity, pose))?;
        Ok(true)
    }

    pub fn broadcast_map_claim(&mut self, entity: EntityId, cell: u8) -> Result<()> {
        self.expect_role(Role::Authoritative, "broadcast_map_claim")?;
        self.send(&NetworkTarget::All, &Message::map_event(entity, cell))
    }

    pub fn broadcast_color(&mut self, entity: EntityId, color: Rgb) -> Result<()> {
        self.expect_role(Role::Authoritative, "broadcast_color")?;
        self.send(&NetworkTarget::All, &Message::player_color(entity, color))
    }

    pub fn broadcast_game_start(&mut self) -> Result<()> {
        self.expect_role(Role::Authoritative, "broadcast_game_start")?;
        self.send(&NetworkTarget::All, &Message::GameStart)
    }

    pub fn broadcast_game_end<S: GameState + ?Sized>(&mut self, state: &S) -> Result<()> {
        self.expect_role(Role::Authoritative, "broadcast_game_end")?;
        self.send(&NetworkTarget::All, &Message::game_end(state.final_scores()))
    }

    /// Sends the current input of a locally controlled entity to the server.
    ///
    /// Returns false if the state has no input for the entity.
    pub fn send_input<S: GameState + ?Sized>(
        &mut self,
        entity: EntityId,
        state: &S,
    ) -> Result<bool> {
        self.expect_role(Role::Peer, "send_input")?;
        let Some(input) = state.current_input(entity) else {
            trace!(%entity, "no input to send");
            return Ok(false);
        };
        self.send(
            &NetworkTarget::Single(PeerId::Server),
            &Message::player_input(entity, input),
        )?;
        Ok(true)
    }

    /// Asks the server for the colors of every entity
    pub fn request_colors(&mut self) -> Result<()> {
        self.expect_role(Role::Peer, "request_colors")?;
        self.send(
            &NetworkTarget::Single(PeerId::Server),
            &Message::request_colors(),
        )
    }

    /// Asks the server to start the game
    pub fn request_game_start(&mut self) -> Result<()> {
        self.expect_role(Role::Peer, "request_game_start")?;
        self.send(&NetworkTarget::Single(PeerId::Server), &Message::GameStart)
    }

    /// Decodes one inbound buffer and dispatches it to `state`.
    ///
    /// Returns the kind of the dispatched message, or `None` if the buffer could not be decoded.
    /// A malformed buffer is logged and dropped without touching `state`.
    pub fn on_receive<S: GameState + ?Sized>(
        &mut self,
        sender: PeerId,
        bytes: &[u8],
        state: &mut S,
    ) -> Option<MessageKind> {
        let message = match self.codec.decode(bytes) {
            Ok(message) => message,
            Err(e) => {
                warn!(%sender, len = bytes.len(), error = %e, "dropping malformed message");
                self.stats.record_dropped();
                return None;
            }
        };
        self.stats.record_received();
        let kind = message.kind();
        debug!(%sender, ?kind, role = ?self.role, "dispatch message");
        self.dispatch(sender, message, state);
        Some(kind)
    }

    fn dispatch<S: GameState + ?Sized>(&mut self, sender: PeerId, message: Message, state: &mut S) {
        match message {
            Message::PlayerInput(PlayerInput { entity, input }) => {
                state.apply_input(entity, input);
            }
            Message::PlayerSpatial(PlayerSpatial { entity, pose }) => {
                state.apply_spatial(entity, pose);
            }
            Message::MapEvent(MapEvent { entity, cell }) => {
                state.apply_map_claim(entity, cell);
            }
            Message::PlayerColor(PlayerColor { entity, color }) => {
                state.apply_color(entity, color);
            }
            Message::RequestColors(roster) => match self.role {
                Role::Authoritative => {
                    if !roster.entries.is_empty() {
                        debug!(%sender, "ignoring the entries of a color request");
                    }
                    let response = Message::color_roster(state.color_roster());
                    if let Err(e) = self.send(&NetworkTarget::Single(sender), &response) {
                        error!(%sender, error = %e, "failed to answer color request");
                    }
                }
                Role::Peer => state.apply_color_roster(&roster.entries),
            },
            Message::GameStart => match self.role {
                Role::Authoritative => {
                    if !state.try_start_game() {
                        debug!(%sender, "game start request refused");
                        return;
                    }
                    if let Err(e) = self.broadcast_game_start() {
                        error!(error = %e, "failed to broadcast game start");
                    }
                }
                Role::Peer => state.apply_game_start(),
            },
            Message::GameEnd(scores) => match self.role {
                Role::Authoritative => debug!(%sender, "ignoring GameEnd sent to the server"),
                Role::Peer => state.apply_game_end(&scores.entries),
            },
        }
    }

    /// Dispatches every message buffered by the transport.
    ///
    /// Returns the number of dispatched messages; malformed ones are dropped and not counted.
    pub fn receive<S: GameState + ?Sized>(&mut self, state: &mut S) -> usize {
        let mut dispatched = 0;
        while let Some((sender, payload)) = self.transport.recv() {
            if self.on_receive(sender, &payload, state).is_some() {
                dispatched += 1;
            }
        }
        dispatched
    }

    /// Advances the sync schedule and performs the broadcasts that are due.
    ///
    /// Only the server broadcasts on schedule; on a client this does nothing.
    /// A broadcast that fails is logged and counted in [`RouterStats::send_errors`]; the
    /// remaining entities are still synced.
    pub fn update<S: GameState + ?Sized>(&mut self, delta: Duration, state: &S) -> SyncDue {
        if !self.role.is_authoritative() {
            return SyncDue::default();
        }
        let due = self.schedule.tick(delta);
        if !due.any() {
            return due;
        }
        for entity in state.tracked_entities() {
            if due.input
                && let Err(e) = self.broadcast_input(entity, state)
            {
                warn!(%entity, error = %e, "scheduled input sync failed");
            }
            if due.pose
                && let Err(e) = self.broadcast_spatial(entity, state)
            {
                warn!(%entity, error = %e, "scheduled pose sync failed");
            }
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use gridsync_link::{Link, LinkError};
    use test_log::test;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Input(EntityId, InputFlags),
        Spatial(EntityId),
        MapClaim(EntityId, u8),
        Color(EntityId, Rgb),
        ColorRoster(Vec<ColorEntry>),
        GameStart,
        GameEnd(Vec<ScoreEntry>),
        TryStart,
    }

    #[derive(Default)]
    struct RecordingState {
        events: Vec<Event>,
        can_start: bool,
        inputs: Vec<(EntityId, InputFlags)>,
        poses: Vec<(EntityId, Pose)>,
        colors: Vec<ColorEntry>,
        scores: Vec<ScoreEntry>,
    }

    impl GameState for RecordingState {
        fn apply_input(&mut self, entity: EntityId, input: InputFlags) {
            self.events.push(Event::Input(entity, input));
        }

        fn apply_spatial(&mut self, entity: EntityId, _: Pose) {
            self.events.push(Event::Spatial(entity));
        }

        fn apply_map_claim(&mut self, entity: EntityId, cell: u8) {
            self.events.push(Event::MapClaim(entity, cell));
        }

        fn apply_color(&mut self, entity: EntityId, color: Rgb) {
            self.events.push(Event::Color(entity, color));
        }

        fn apply_color_roster(&mut self, roster: &[ColorEntry]) {
            self.events.push(Event::ColorRoster(roster.to_vec()));
        }

        fn apply_game_start(&mut self) {
            self.events.push(Event::GameStart);
        }

        fn apply_game_end(&mut self, scores: &[ScoreEntry]) {
            self.events.push(Event::GameEnd(scores.to_vec()));
        }

        fn try_start_game(&mut self) -> bool {
            self.events.push(Event::TryStart);
            self.can_start
        }

        fn current_input(&self, entity: EntityId) -> Option<InputFlags> {
            self.inputs
                .iter()
                .find(|(e, _)| *e == entity)
                .map(|(_, input)| *input)
        }

        fn current_pose(&self, entity: EntityId) -> Option<Pose> {
            self.poses
                .iter()
                .find(|(e, _)| *e == entity)
                .map(|(_, pose)| *pose)
        }

        fn color_roster(&self) -> Vec<ColorEntry> {
            self.colors.clone()
        }

        fn final_scores(&self) -> Vec<ScoreEntry> {
            self.scores.clone()
        }

        fn tracked_entities(&self) -> Vec<EntityId> {
            self.inputs.iter().map(|(entity, _)| *entity).collect()
        }
    }

    fn server() -> ProtocolRouter<Link> {
        ProtocolRouter::new(Role::Authoritative, MessageCodec::default(), Link::default())
    }

    fn client() -> ProtocolRouter<Link> {
        ProtocolRouter::new(Role::Peer, MessageCodec::default(), Link::default())
    }

    /// Decodes everything the router sent
    fn sent(router: &mut ProtocolRouter<Link>) -> Vec<(NetworkTarget, Message)> {
        let codec = router.codec().clone();
        router
            .transport_mut()
            .drain_send()
            .map(|(target, bytes)| (target, codec.decode(&bytes).unwrap()))
            .collect()
    }

    #[test]
    fn test_color_request_on_server_answers_requester() {
        let mut router = server();
        let mut state = RecordingState {
            colors: vec![
                ColorEntry::new(EntityId(1), Rgb::new(1.0, 0.0, 0.0)),
                ColorEntry::new(EntityId(2), Rgb::new(0.0, 1.0, 0.0)),
            ],
            ..Default::default()
        };
        let kind = router.on_receive(PeerId::Client(2), &[0x40], &mut state);
        assert_eq!(kind, Some(MessageKind::RequestColors));
        assert!(state.events.is_empty());
        assert_eq!(
            sent(&mut router),
            vec![(
                NetworkTarget::Single(PeerId::Client(2)),
                Message::color_roster(state.colors.clone())
            )]
        );
    }

    #[test]
    fn test_color_request_on_peer_applies_roster() {
        let mut router = client();
        let mut state = RecordingState::default();
        let kind = router.on_receive(PeerId::Server, &[0x40], &mut state);
        assert_eq!(kind, Some(MessageKind::RequestColors));
        assert_eq!(state.events, vec![Event::ColorRoster(vec![])]);
        assert!(sent(&mut router).is_empty());
    }

    #[test]
    fn test_game_start_on_server() {
        let mut router = server();
        let mut state = RecordingState::default();
        let start = router.codec().encode(&Message::GameStart).unwrap();

        // refused: nothing is broadcast
        router.on_receive(PeerId::Client(1), &start, &mut state);
        assert_eq!(state.events, vec![Event::TryStart]);
        assert!(sent(&mut router).is_empty());

        state.can_start = true;
        router.on_receive(PeerId::Client(1), &start, &mut state);
        assert_eq!(
            sent(&mut router),
            vec![(NetworkTarget::All, Message::GameStart)]
        );
        // the server never treats the request as a notification
        assert!(!state.events.contains(&Event::GameStart));
    }

    #[test]
    fn test_game_start_on_peer() {
        let mut router = client();
        let mut state = RecordingState::default();
        router.on_receive(PeerId::Server, &[0x50], &mut state);
        assert_eq!(state.events, vec![Event::GameStart]);
    }

    #[test]
    fn test_game_end() {
        let scores = vec![ScoreEntry::new(EntityId(1), 5), ScoreEntry::new(EntityId(2), 12)];
        let bytes = MessageCodec::default()
            .encode(&Message::game_end(scores.clone()))
            .unwrap();

        let mut state = RecordingState::default();
        assert_eq!(
            server().on_receive(PeerId::Client(1), &bytes, &mut state),
            Some(MessageKind::GameEnd)
        );
        assert!(state.events.is_empty());

        client().on_receive(PeerId::Server, &bytes, &mut state);
        assert_eq!(state.events, vec![Event::GameEnd(scores)]);
    }

    #[test]
    fn test_stateless_kinds_are_applied() {
        let codec = MessageCodec::default();
        let mut router = client();
        let mut state = RecordingState::default();
        for message in [
            Message::player_input(EntityId(1), InputFlags::A),
            Message::player_spatial(EntityId(2), Pose::default()),
            Message::map_event(EntityId(3), 42),
            Message::player_color(EntityId(4), Rgb::WHITE),
        ] {
            let bytes = codec.encode(&message).unwrap();
            router.on_receive(PeerId::Server, &bytes, &mut state);
        }
        assert_eq!(
            state.events,
            vec![
                Event::Input(EntityId(1), InputFlags::A),
                Event::Spatial(EntityId(2)),
                Event::MapClaim(EntityId(3), 42),
                Event::Color(EntityId(4), Rgb::WHITE),
            ]
        );
    }

    #[test]
    fn test_malformed_messages_are_dropped() {
        let mut router = client();
        let mut state = RecordingState::default();
        let link = router.transport_mut();
        // unknown kind
        link.push_recv(PeerId::Server, Bytes::from_static(&[0xf0]));
        // truncated PlayerSpatial
        link.push_recv(PeerId::Server, Bytes::from_static(&[0x10, 0x00]));
        // empty
        link.push_recv(PeerId::Server, Bytes::new());
        link.push_recv(PeerId::Server, Bytes::from_static(&[0x50]));

        assert_eq!(router.receive(&mut state), 1);
        assert_eq!(state.events, vec![Event::GameStart]);
        assert_eq!(router.stats().dropped, 3);
        assert_eq!(router.stats().received, 1);
    }

    #[test]
    fn test_role_restricted_methods() {
        let state = RecordingState::default();
        assert_eq!(
            client().broadcast_map_claim(EntityId(1), 1),
            Err(RouterError::WrongRole {
                operation: "broadcast_map_claim",
                role: Role::Peer
            })
        );
        assert!(matches!(
            client().broadcast_game_end(&state),
            Err(RouterError::WrongRole { .. })
        ));
        assert_eq!(
            server().request_colors(),
            Err(RouterError::WrongRole {
                operation: "request_colors",
                role: Role::Authoritative
            })
        );
        assert!(matches!(
            server().send_input(EntityId(1), &state),
            Err(RouterError::WrongRole { .. })
        ));
    }

    #[test]
    fn test_peer_requests_go_to_server() {
        let mut router = client();
        let state = RecordingState {
            inputs: vec![(EntityId(3), InputFlags::W | InputFlags::D)],
            ..Default::default()
        };
        router.request_colors().unwrap();
        router.request_game_start().unwrap();
        assert!(router.send_input(EntityId(3), &state).unwrap());
        assert!(!router.send_input(EntityId(4), &state).unwrap());

        let server = NetworkTarget::Single(PeerId::Server);
        assert_eq!(
            sent(&mut router),
            vec![
                (server.clone(), Message::request_colors()),
                (server.clone(), Message::GameStart),
                (
                    server,
                    Message::player_input(EntityId(3), InputFlags::W | InputFlags::D)
                ),
            ]
        );
        assert_eq!(router.stats().sent, 3);
    }

    #[test]
    fn test_encode_error_is_returned() {
        let mut router = server();
        let err = router.broadcast_map_claim(EntityId(20), 0).unwrap_err();
        assert!(matches!(err, RouterError::Encode(EncodeError::Serialization(_))));
        assert!(sent(&mut router).is_empty());
        assert_eq!(router.stats().send_errors, 1);
        assert_eq!(router.stats().sent, 0);
    }

    #[test]
    fn test_link_error_is_returned() {
        struct Broken;
        impl Transport for Broken {
            fn send(&mut self, _: &NetworkTarget, _: Bytes) -> core::result::Result<(), LinkError> {
                Err(LinkError::Disconnected(PeerId::Client(1)))
            }
            fn recv(&mut self) -> Option<(PeerId, Bytes)> {
                None
            }
        }
        let mut router = ProtocolRouter::new(Role::Authoritative, MessageCodec::default(), Broken);
        assert_eq!(
            router.broadcast_game_start(),
            Err(RouterError::Link(LinkError::Disconnected(PeerId::Client(1))))
        );
    }

    #[test]
    fn test_scheduled_broadcasts() {
        let mut router = server();
        let state = RecordingState {
            inputs: vec![(EntityId(1), InputFlags::W), (EntityId(2), InputFlags::S)],
            poses: vec![(EntityId(1), Pose::default())],
            ..Default::default()
        };
        let frame = Duration::from_millis(25);

        let due = router.update(frame, &state);
        assert!(!due.any());
        assert!(sent(&mut router).is_empty());

        let due = router.update(frame, &state);
        assert!(due.input && !due.pose);
        let messages: Vec<_> = sent(&mut router).into_iter().map(|(_, m)| m).collect();
        assert_eq!(
            messages,
            vec![
                Message::player_input(EntityId(1), InputFlags::W),
                Message::player_input(EntityId(2), InputFlags::S),
            ]
        );

        // advance to 500ms: inputs and the single known pose
        for _ in 0..17 {
            router.update(frame, &state);
        }
        sent(&mut router);
        let due = router.update(frame, &state);
        assert!(due.input && due.pose);
        let kinds: Vec<_> = sent(&mut router)
            .into_iter()
            .map(|(_, m)| m.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                MessageKind::PlayerInput,
                MessageKind::PlayerSpatial,
                MessageKind::PlayerInput,
            ]
        );
    }

    #[test]
    fn test_scheduled_pose_is_clamped() {
        let mut router = server();
        let fallen = Pose::new(Vec3::new(3.0, -20.0, 40.0), Vec3::ZERO);
        let state = RecordingState {
            inputs: vec![(EntityId(1), InputFlags::W), (EntityId(2), InputFlags::S)],
            poses: vec![(EntityId(1), fallen), (EntityId(2), Pose::default())],
            ..Default::default()
        };
        let due = router.update(Duration::from_millis(500), &state);
        assert!(due.input && due.pose);

        let messages: Vec<_> = sent(&mut router).into_iter().map(|(_, m)| m).collect();
        assert_eq!(messages.len(), 4);
        let Message::PlayerSpatial(first) = &messages[1] else {
            panic!("expected a PlayerSpatial");
        };
        assert_eq!(first.entity, EntityId(1));
        assert_eq!(first.pose.position.y, -15.0);
        assert_eq!(first.pose.position.z, 25.0);
        assert!(matches!(
            &messages[3],
            Message::PlayerSpatial(PlayerSpatial { entity: EntityId(2), .. })
        ));
        assert_eq!(router.stats().send_errors, 0);
    }

    #[test]
    fn test_scheduled_sync_continues_after_a_failure() {
        let mut router = server();
        let broken = Pose::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ZERO);
        let state = RecordingState {
            inputs: vec![(EntityId(1), InputFlags::W), (EntityId(2), InputFlags::S)],
            poses: vec![(EntityId(1), broken), (EntityId(2), Pose::default())],
            ..Default::default()
        };
        router.update(Duration::from_millis(500), &state);
        let kinds: Vec<_> = sent(&mut router)
            .into_iter()
            .map(|(_, m)| match m {
                Message::PlayerInput(input) => (MessageKind::PlayerInput, input.entity),
                Message::PlayerSpatial(spatial) => (MessageKind::PlayerSpatial, spatial.entity),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                (MessageKind::PlayerInput, EntityId(1)),
                (MessageKind::PlayerInput, EntityId(2)),
                (MessageKind::PlayerSpatial, EntityId(2)),
            ]
        );
        assert_eq!(router.stats().send_errors, 1);
    }

    #[test]
    fn test_scheduled_sync_survives_disconnected_peer() {
        #[derive(Default)]
        struct HalfBroken {
            attempts: usize,
        }
        impl Transport for HalfBroken {
            fn send(&mut self, _: &NetworkTarget, _: Bytes) -> core::result::Result<(), LinkError> {
                self.attempts += 1;
                Err(LinkError::Disconnected(PeerId::Client(2)))
            }
            fn recv(&mut self) -> Option<(PeerId, Bytes)> {
                None
            }
        }
        let mut router = ProtocolRouter::new(
            Role::Authoritative,
            MessageCodec::default(),
            HalfBroken::default(),
        );
        let state = RecordingState {
            inputs: vec![(EntityId(1), InputFlags::W), (EntityId(2), InputFlags::S)],
            poses: vec![(EntityId(1), Pose::default()), (EntityId(2), Pose::default())],
            ..Default::default()
        };
        let due = router.update(Duration::from_millis(500), &state);
        assert!(due.input && due.pose);
        // every entity was attempted
        assert_eq!(router.transport().attempts, 4);
        assert_eq!(router.stats().send_errors, 4);
    }

    #[test]
    fn test_peer_does_not_broadcast_on_schedule() {
        let mut router = client();
        let state = RecordingState {
            inputs: vec![(EntityId(1), InputFlags::W)],
            ..Default::default()
        };
        assert!(!router.update(Duration::from_secs(1), &state).any());
        assert!(sent(&mut router).is_empty());
    }
}
