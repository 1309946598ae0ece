use crate::stepper::ServerClientStepper;
use core::time::Duration;
use gridsync::prelude::*;
use test_log::test;

#[test]
fn test_game_start_requested_by_client() {
    let mut stepper = ServerClientStepper::with_clients(2);
    stepper.clients[1].request_game_start().unwrap();
    stepper.frame_step(1);

    assert_eq!(stepper.server_state.phase(), MatchPhase::Playing);
    for state in &stepper.client_states {
        assert_eq!(state.phase(), MatchPhase::Playing);
    }
    let sent = stepper.server.stats().sent;

    // a second request is refused and not broadcast
    stepper.clients[0].request_game_start().unwrap();
    stepper.frame_step(1);
    assert_eq!(stepper.server.stats().sent, sent);
    assert_eq!(stepper.clients[0].stats().received, 1);
}

#[test]
fn test_map_claims_are_broadcast() {
    let mut stepper = ServerClientStepper::with_clients(2);
    let first = ServerClientStepper::entity(0);
    let second = ServerClientStepper::entity(1);

    assert_eq!(
        stepper.server_claim(5, first),
        ClaimOutcome::Claimed { previous: None }
    );
    stepper.frame_step(1);
    for state in &stepper.client_states {
        assert_eq!(state.board().owner(5), Some(first));
    }

    // claiming an owned cell again does not send anything
    let sent = stepper.server.stats().sent;
    assert_eq!(stepper.server_claim(5, first), ClaimOutcome::AlreadyOwned);
    assert_eq!(stepper.server.stats().sent, sent);

    assert_eq!(
        stepper.server_claim(5, second),
        ClaimOutcome::Claimed {
            previous: Some(first)
        }
    );
    stepper.frame_step(1);
    for state in &stepper.client_states {
        assert_eq!(state.board().owner(5), Some(second));
    }
}

#[test]
fn test_match_end_sends_final_scores() {
    let config = GridsyncConfig::from_json_str(r#"{ "game": { "duration_ms": 100 } }"#).unwrap();
    let mut stepper = ServerClientStepper::new(2, config).unwrap();
    let first = ServerClientStepper::entity(0);
    let second = ServerClientStepper::entity(1);

    stepper.clients[0].request_game_start().unwrap();
    stepper.frame_step(1);
    stepper.server_claim(0, second);
    stepper.server_claim(1, first);
    stepper.server_claim(2, first);

    stepper.advance(Duration::from_millis(200));
    assert_eq!(stepper.server_state.phase(), MatchPhase::Ended);
    let expected = vec![ScoreEntry::new(second, 1), ScoreEntry::new(first, 2)];
    assert_eq!(stepper.server_state.final_scores(), expected);
    for state in &stepper.client_states {
        assert_eq!(state.phase(), MatchPhase::Ended);
        assert_eq!(state.received_scores(), Some(expected.as_slice()));
    }
}

#[test]
fn test_game_end_from_client_is_ignored() {
    let mut stepper = ServerClientStepper::single();
    stepper.clients[0].request_game_start().unwrap();
    stepper.frame_step(1);

    let message = Message::game_end(vec![ScoreEntry::new(EntityId(1), 99)]);
    stepper
        .clients[0]
        .send(&NetworkTarget::Single(PeerId::Server), &message)
        .unwrap();
    stepper.frame_step(1);
    assert_eq!(stepper.server_state.phase(), MatchPhase::Playing);
    assert_eq!(stepper.server.stats().received, 2);
}
