//! Whole lever interaction sessions across participants

use std::time::Duration;

use sundial_core::{ParticipantId, Vec3};
use sundial_test::SceneSimulator;

#[test]
fn grabbing_the_lever_takes_ownership_and_drives_time() {
    let mut sim = SceneSimulator::lever()
        .with_players(2)
        .with_frame_dt(Duration::from_secs(1))
        .build();

    assert_eq!(sim.owner(), Some(ParticipantId::new(1)));

    // The second participant grabs the lever
    sim.player_mut(1).interact();
    assert!(sim.player(1).audio.is_playing());
    assert!(sim.player(1).toggle.is_active());

    // The grant matures on the next frame; until then the old owner
    // keeps writing
    sim.step();
    assert_eq!(sim.owner(), Some(ParticipantId::new(2)));

    // Full forward deflection: real-time rate
    sim.player_mut(1).tracking.move_hand(Vec3::new(45.0, 0.0, 0.0));
    sim.step();
    assert_eq!(sim.player(1).lever_angle(), 45.0);
    assert_eq!(sim.player(1).handle.yaw(), 45.0);
    assert_eq!(sim.player(1).elapsed(), 1.0);

    // The old owner follows via snapshots
    sim.step();
    assert_eq!(sim.player(1).elapsed(), 2.0);
    assert_eq!(sim.player(0).elapsed(), 2.0);
}

#[test]
fn reversed_lever_runs_time_backward_and_wraps() {
    let mut sim = SceneSimulator::lever()
        .with_players(2)
        .with_frame_dt(Duration::from_secs(1))
        .build();

    // The spawn owner grabs its own lever and pulls it fully backward
    sim.player_mut(0).interact();
    sim.player_mut(0).tracking.move_hand(Vec3::new(-45.0, 0.0, 0.0));
    sim.step();

    assert_eq!(sim.player(0).lever_angle(), -45.0);
    assert_eq!(sim.player(0).elapsed(), 119.0);

    sim.step();
    assert_eq!(sim.player(0).elapsed(), 118.0);
    assert_eq!(sim.player(1).elapsed(), 118.0);
}

#[test]
fn released_lever_keeps_driving_at_held_angle() {
    let mut sim = SceneSimulator::lever()
        .with_players(1)
        .with_frame_dt(Duration::from_secs(1))
        .build();

    // Half deflection, then let go
    sim.player_mut(0).interact();
    sim.player_mut(0).tracking.move_hand(Vec3::new(22.5, 0.0, 0.0));
    sim.step();
    sim.player_mut(0).interact();
    assert!(!sim.player(0).audio.is_playing());

    // The angle persists, so time keeps advancing at half rate
    sim.step_n(2);
    assert_eq!(sim.player(0).lever_angle(), 22.5);
    assert_eq!(sim.player(0).elapsed(), 1.5);
}

#[test]
fn repeated_grabs_alternate_toggle_visibility() {
    let mut sim = SceneSimulator::lever().with_players(1).build();

    assert!(!sim.player(0).toggle.is_active());
    sim.player_mut(0).interact();
    assert!(sim.player(0).toggle.is_active());
    sim.player_mut(0).interact();
    assert!(sim.player(0).toggle.is_active());
    sim.player_mut(0).interact();
    assert!(!sim.player(0).toggle.is_active());
}
