use crate::stepper::ServerClientStepper;
use gridsync::prelude::*;
use test_log::test;

#[test]
fn test_malformed_buffers_are_dropped() {
    let mut stepper = ServerClientStepper::single();
    let entity = ServerClientStepper::entity(0);

    // unknown kind
    stepper.inject_from_client(0, &[0x70]);
    // empty buffer
    stepper.inject_from_client(0, &[]);
    // spatial message cut after the entity
    stepper.inject_from_client(0, &[0x10]);
    stepper.frame_step(1);

    assert_eq!(stepper.server.stats().dropped, 3);
    assert_eq!(stepper.server.stats().received, 0);
    assert_eq!(stepper.server_state.current_pose(entity), Some(Pose::default()));

    // the router keeps working after dropping malformed buffers
    stepper.client_input(0, InputFlags::W);
    stepper.frame_step(1);
    assert_eq!(stepper.server.stats().received, 1);
    assert_eq!(stepper.server_state.current_input(entity), Some(InputFlags::W));
}

#[test]
fn test_map_event_outside_grid_is_dropped() {
    // the default 10x10 grid bounds the decoded cell indices
    let mut stepper = ServerClientStepper::single();
    stepper.inject_from_client(0, &[0x21, 0x90]);
    stepper.frame_step(1);
    assert_eq!(stepper.server.stats().dropped, 1);

    stepper.inject_from_client(0, &[0x21, 0x05]);
    stepper.frame_step(1);
    assert_eq!(stepper.server.stats().received, 1);
    assert_eq!(
        stepper.server_state.board().owner(5),
        Some(ServerClientStepper::entity(0))
    );
}

#[test]
fn test_wrong_role_operations() {
    let mut stepper = ServerClientStepper::single();
    assert!(matches!(
        stepper.server.request_colors(),
        Err(RouterError::WrongRole {
            role: Role::Authoritative,
            ..
        })
    ));
    assert!(matches!(
        stepper.clients[0].broadcast_game_start(),
        Err(RouterError::WrongRole {
            role: Role::Peer,
            ..
        })
    ));
    assert_eq!(stepper.server.stats().sent, 0);
    assert_eq!(stepper.clients[0].stats().sent, 0);
}
