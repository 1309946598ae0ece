use crate::stepper::ServerClientStepper;
use approx::assert_abs_diff_eq;
use core::time::Duration;
use gridsync::prelude::*;
use test_log::test;

#[test]
fn test_client_input_relayed_on_schedule() {
    let mut stepper = ServerClientStepper::with_clients(2);
    let entity = ServerClientStepper::entity(0);

    stepper.client_input(0, InputFlags::W | InputFlags::D);
    stepper.frame_step(1);
    assert_eq!(
        stepper.server_state.current_input(entity),
        Some(InputFlags::W | InputFlags::D)
    );
    // the input is relayed with the next input broadcast, every 50ms
    assert_eq!(
        stepper.client_states[1].current_input(entity),
        Some(InputFlags::EMPTY)
    );

    stepper.frame_step(4);
    assert_eq!(
        stepper.client_states[1].current_input(entity),
        Some(InputFlags::W | InputFlags::D)
    );
}

#[test]
fn test_local_input_not_overridden_by_relay() {
    let mut stepper = ServerClientStepper::single();
    let entity = ServerClientStepper::entity(0);

    stepper.client_input(0, InputFlags::A);
    stepper.frame_step(1);
    // the client moved on before the server relayed the previous input
    assert!(stepper.client_states[0].set_local_input(entity, InputFlags::S));
    stepper.frame_step(4);
    assert_eq!(
        stepper.client_states[0].current_input(entity),
        Some(InputFlags::S)
    );
}

#[test]
fn test_poses_broadcast_on_schedule() {
    let mut stepper = ServerClientStepper::with_clients(2);
    let entity = ServerClientStepper::entity(1);
    let pose = Pose::new(Vec3::new(1.5, 0.0, -3.25), Vec3::new(0.0, 450.0, 0.0));
    stepper.server_move(entity, pose);

    stepper.advance(Duration::from_millis(490));
    assert_eq!(
        stepper.client_states[0].current_pose(entity),
        Some(Pose::default())
    );

    stepper.frame_step(1);
    for state in &stepper.client_states {
        let received = state.current_pose(entity).unwrap();
        assert_abs_diff_eq!(received.position.x, 1.5, epsilon = 0.01);
        assert_abs_diff_eq!(received.position.y, 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(received.position.z, -3.25, epsilon = 0.01);
        // rotations are sent wrapped to [0, 360)
        assert_abs_diff_eq!(received.rotation.y, 90.0, epsilon = 0.05);
    }
}

#[test]
fn test_fallen_player_synced_at_the_edge() {
    let mut stepper = ServerClientStepper::with_clients(2);
    let fallen = ServerClientStepper::entity(0);
    let other = ServerClientStepper::entity(1);
    stepper.server_move(fallen, Pose::new(Vec3::new(2.0, -40.0, 0.0), Vec3::ZERO));
    stepper.server_move(other, Pose::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO));

    stepper.advance(Duration::from_millis(500));
    let state = &stepper.client_states[1];
    let received = state.current_pose(fallen).unwrap();
    assert_abs_diff_eq!(received.position.x, 2.0, epsilon = 0.01);
    assert_eq!(received.position.y, -15.0);
    assert_abs_diff_eq!(state.current_pose(other).unwrap().position.y, 5.0, epsilon = 0.01);
    assert_eq!(stepper.server.stats().send_errors, 0);
}

#[test]
fn test_clients_never_broadcast_on_schedule() {
    let mut stepper = ServerClientStepper::with_clients(2);
    stepper.advance(Duration::from_secs(1));
    for client in &stepper.clients {
        assert_eq!(client.stats().sent, 0);
    }
    // 20 input broadcasts and 2 pose broadcasts, for each of the 2 entities
    assert_eq!(stepper.server.stats().sent, 44);
}
