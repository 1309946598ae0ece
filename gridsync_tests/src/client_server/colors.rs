use crate::stepper::ServerClientStepper;
use approx::assert_abs_diff_eq;
use gridsync::prelude::*;
use test_log::test;

/// Half of the color quantization step
const COLOR_EPSILON: f32 = 0.5 / 255.0 + f32::EPSILON;

#[test]
fn test_color_request_answered_to_sender_only() {
    let mut stepper = ServerClientStepper::with_clients(2);
    let assigned = stepper.server_assign_colors();
    assert_eq!(assigned.len(), 2);

    stepper.clients[0].request_colors().unwrap();
    stepper.frame_step(1);

    let received = stepper.client_states[0].color_roster();
    assert_eq!(received.len(), assigned.len());
    for (received, assigned) in received.iter().zip(&assigned) {
        assert_eq!(received.entity, assigned.entity);
        assert_abs_diff_eq!(received.color.r, assigned.color.r, epsilon = COLOR_EPSILON);
        assert_abs_diff_eq!(received.color.g, assigned.color.g, epsilon = COLOR_EPSILON);
        assert_abs_diff_eq!(received.color.b, assigned.color.b, epsilon = COLOR_EPSILON);
    }
    // the roster was only sent back to the client that asked for it
    assert!(stepper.client_states[1].color_roster().is_empty());
    assert_eq!(stepper.clients[1].stats().received, 0);
}

#[test]
fn test_color_request_before_assignment() {
    let mut stepper = ServerClientStepper::single();
    stepper.clients[0].request_colors().unwrap();
    stepper.frame_step(1);

    // the server answers with an empty roster
    assert_eq!(stepper.clients[0].stats().received, 1);
    assert!(stepper.client_states[0].color_roster().is_empty());
}

#[test]
fn test_single_color_broadcast() {
    let mut stepper = ServerClientStepper::with_clients(2);
    let entity = ServerClientStepper::entity(1);
    stepper.server.broadcast_color(entity, Rgb::WHITE).unwrap();
    stepper.frame_step(1);

    for state in &stepper.client_states {
        assert_eq!(
            state.color_roster(),
            vec![ColorEntry::new(entity, Rgb::WHITE)]
        );
    }
}
