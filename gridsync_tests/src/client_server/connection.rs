use crate::stepper::ServerClientStepper;
use approx::assert_abs_diff_eq;
use core::time::Duration;
use gridsync::prelude::*;
use test_log::test;

#[test]
fn test_broadcast_to_disconnected_client() {
    let mut stepper = ServerClientStepper::with_clients(2);
    // dropping the endpoint of the second client closes its channel
    stepper.clients.pop();
    stepper.client_states.pop();

    assert!(matches!(
        stepper.server.broadcast_game_start(),
        Err(RouterError::Link(LinkError::Disconnected(PeerId::Client(2))))
    ));
    assert_eq!(stepper.server.stats().send_errors, 1);
    // the remaining client still got the message
    stepper.frame_step(1);
    assert_eq!(stepper.client_states[0].phase(), MatchPhase::Playing);

    let removed = stepper
        .server_state
        .roster_mut()
        .disconnect_peer(ServerClientStepper::client_peer(1));
    assert_eq!(removed, 1);
    assert!(stepper.server.transport_mut().unlink(&PeerId::Client(2)));
    stepper.server.broadcast_game_start().unwrap();
}

#[test]
fn test_scheduled_sync_with_disconnected_client() {
    let mut stepper = ServerClientStepper::with_clients(2);
    stepper.clients.pop();
    stepper.client_states.pop();
    let first = ServerClientStepper::entity(0);
    let second = ServerClientStepper::entity(1);
    stepper.server_move(first, Pose::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO));
    stepper.server_move(second, Pose::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::ZERO));

    stepper.advance(Duration::from_millis(500));
    // the connected client got the poses of both entities
    let state = &stepper.client_states[0];
    let first_pose = state.current_pose(first).unwrap();
    let second_pose = state.current_pose(second).unwrap();
    assert_abs_diff_eq!(first_pose.position.x, 1.0, epsilon = 0.01);
    assert_abs_diff_eq!(second_pose.position.x, -2.0, epsilon = 0.01);
    // 10 input syncs and 1 pose sync for each of the 2 entities, all reported as failed
    assert_eq!(stepper.server.stats().send_errors, 22);
}
