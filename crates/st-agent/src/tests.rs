//! Unit tests for st-agent.

use st_core::{AgentId, AgentRng, Vec2};

use crate::{AgentParams, SteeringAgent};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f32 = 1e-4;

fn assert_vec_close(got: Vec2, want: Vec2) {
    assert!(
        (got.x - want.x).abs() < EPS && (got.y - want.y).abs() < EPS,
        "expected {want}, got {got}",
    );
}

/// Agent 0 at `position`, at rest, size 5, max speed 5 (max force 0.5).
fn agent_at(position: Vec2) -> SteeringAgent {
    SteeringAgent::new(AgentId(0), position, Vec2::ZERO, AgentParams::default()).unwrap()
}

// ── Mover ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mover {
    use st_core::{Vec2, WorldBounds};

    use super::assert_vec_close;
    use crate::Mover;

    #[test]
    fn apply_accumulates() {
        let mut m = Mover::new(Vec2::ZERO);
        m.apply(Vec2::new(1.0, 0.0));
        m.apply(Vec2::new(0.5, 2.0));
        assert_eq!(m.acceleration(), Vec2::new(1.5, 2.0));
    }

    #[test]
    fn update_integrates_and_resets() {
        let mut m = Mover::new(Vec2::new(1.0, 1.0)).with_velocity(Vec2::new(1.0, 0.0));
        m.apply(Vec2::new(0.0, 2.0));
        m.update();
        assert_eq!(m.velocity, Vec2::new(1.0, 2.0));
        assert_eq!(m.position, Vec2::new(2.0, 3.0));
        assert_eq!(m.acceleration(), Vec2::ZERO);

        // No force: constant velocity.
        m.update();
        assert_eq!(m.position, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn update_does_not_clamp_velocity() {
        let mut m = Mover::new(Vec2::ZERO);
        m.apply(Vec2::new(1_000.0, 0.0));
        m.update();
        assert_eq!(m.velocity, Vec2::new(1_000.0, 0.0));
    }

    #[test]
    fn toroid_wraps_both_ways() {
        let bounds = WorldBounds::new(640.0, 480.0);

        let mut m = Mover::new(Vec2::new(-1.0, 500.0));
        m.toroid(bounds);
        assert_vec_close(m.position, Vec2::new(639.0, 20.0));

        let mut m = Mover::new(Vec2::new(640.0, 0.0));
        m.toroid(bounds);
        assert_vec_close(m.position, Vec2::ZERO);

        let mut m = Mover::new(Vec2::new(320.0, 240.0));
        m.toroid(bounds);
        assert_eq!(m.position, Vec2::new(320.0, 240.0));
    }

    #[test]
    fn toroid_result_always_in_bounds() {
        let bounds = WorldBounds::new(10.0, 10.0);
        for x in [-1e-7_f32, -10.0, -25.5, 9.999_999, 10.0, 1e6] {
            let mut m = Mover::new(Vec2::new(x, x));
            m.toroid(bounds);
            assert!((0.0..10.0).contains(&m.position.x), "x={x} wrapped to {}", m.position.x);
        }
    }
}

// ── Steering primitive ────────────────────────────────────────────────────────

#[cfg(test)]
mod steer {
    use super::*;

    #[test]
    fn seek_scenario_from_rest() {
        let mut a = agent_at(Vec2::ZERO);
        a.seek(Vec2::new(10.0, 0.0));
        assert_eq!(a.desired(), Vec2::new(5.0, 0.0));
        assert_eq!(a.acceleration(), Vec2::new(0.5, 0.0));

        a.update();
        assert_eq!(a.velocity(), Vec2::new(0.5, 0.0));
        assert_eq!(a.position(), Vec2::new(0.5, 0.0));
        assert_eq!(a.acceleration(), Vec2::ZERO);
    }

    #[test]
    fn force_never_exceeds_max_force() {
        let mut rng = AgentRng::new(1, AgentId(0));
        let mut a = agent_at(Vec2::new(50.0, 50.0));
        for _ in 0..500 {
            let desired = Vec2::new(rng.symmetric(100.0), rng.symmetric(100.0));
            let force = a.steer(desired);
            assert!(force.length() <= a.max_force + EPS, "force {force}");
            assert!(a.desired().length() <= a.max_speed + EPS, "desired {}", a.desired());
            a.update();
        }
    }

    #[test]
    fn small_correction_is_not_inflated() {
        let mut a = agent_at(Vec2::ZERO);
        a.mover.velocity = Vec2::new(1.0, 0.0);
        let force = a.steer(Vec2::new(1.1, 0.0));
        assert_vec_close(force, Vec2::new(0.1, 0.0));
    }

    #[test]
    fn flee_mirrors_seek() {
        let mut a = agent_at(Vec2::ZERO);
        a.flee(Vec2::new(10.0, 0.0));
        assert_eq!(a.desired(), Vec2::new(-5.0, 0.0));
        assert_eq!(a.acceleration(), Vec2::new(-0.5, 0.0));
    }

    #[test]
    fn max_force_override_is_respected() {
        let params = AgentParams::default().with_max_force(2.0);
        let mut a = SteeringAgent::new(AgentId(0), Vec2::ZERO, Vec2::ZERO, params).unwrap();
        assert_eq!(a.max_force, 2.0);
        a.seek(Vec2::new(10.0, 0.0));
        assert_eq!(a.acceleration(), Vec2::new(2.0, 0.0));
    }
}

// ── Arrival ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrive {
    use super::*;

    fn fast_agent_at(position: Vec2) -> SteeringAgent {
        SteeringAgent::new(AgentId(0), position, Vec2::ZERO, AgentParams::new(5.0, 100.0)).unwrap()
    }

    #[test]
    fn arrive_asks_for_ten_percent() {
        let mut a = fast_agent_at(Vec2::ZERO);
        a.arrive(Vec2::new(40.0, -20.0));
        assert_vec_close(a.desired(), Vec2::new(4.0, -2.0));
    }

    #[test]
    fn arrive_within_ramps_inside_radius() {
        let mut a = fast_agent_at(Vec2::new(80.0, 0.0));
        a.arrive_within(Vec2::new(100.0, 0.0), 50.0);
        assert_vec_close(a.desired(), Vec2::new(8.0, 0.0));
    }

    #[test]
    fn arrive_within_full_strength_outside_radius() {
        let mut a = fast_agent_at(Vec2::ZERO);
        a.arrive_within(Vec2::new(60.0, 0.0), 50.0);
        assert_vec_close(a.desired(), Vec2::new(60.0, 0.0));

        // Exactly at the radius the ramp factor is 1.
        let mut a = fast_agent_at(Vec2::ZERO);
        a.arrive_within(Vec2::new(50.0, 0.0), 50.0);
        assert_vec_close(a.desired(), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn arrive_within_is_linear_in_distance() {
        let target = Vec2::new(0.0, 0.0);
        let radius = 40.0;
        for d in [1.0_f32, 5.0, 10.0, 20.0, 39.0] {
            let mut a = fast_agent_at(Vec2::new(0.0, d));
            a.arrive_within(target, radius);
            // |desired| = d * (d / radius)
            let want = d * d / radius;
            assert!((a.desired().length() - want).abs() < EPS, "d={d}");
        }

        let mut a = fast_agent_at(target);
        a.arrive_within(target, radius);
        assert_eq!(a.desired(), Vec2::ZERO);
    }

    #[test]
    fn arrive_and_arrive_within_differ() {
        let mut a = fast_agent_at(Vec2::ZERO);
        let mut b = fast_agent_at(Vec2::ZERO);
        a.arrive(Vec2::new(30.0, 0.0));
        b.arrive_within(Vec2::new(30.0, 0.0), 60.0);
        assert_vec_close(a.desired(), Vec2::new(3.0, 0.0));
        assert_vec_close(b.desired(), Vec2::new(15.0, 0.0));
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander {
    use super::*;
    use crate::WanderParams;

    #[test]
    fn angle_moves_by_at_most_change() {
        let mut rng = AgentRng::new(3, AgentId(0));
        let mut a = agent_at(Vec2::new(100.0, 100.0));
        let params = WanderParams::default();
        let mut prev = a.wander_angle();
        for _ in 0..200 {
            a.wander(&mut rng, params);
            assert!((a.wander_angle() - prev).abs() <= params.change + EPS);
            prev = a.wander_angle();
        }
    }

    #[test]
    fn zero_change_uses_fixed_basis() {
        let mut rng = AgentRng::new(3, AgentId(0));
        let mut a = SteeringAgent::new(
            AgentId(0),
            Vec2::new(100.0, 100.0),
            Vec2::new(1.0, 0.0),
            AgentParams::new(5.0, 1_000.0),
        ).unwrap();
        a.wander(&mut rng, WanderParams { distance: 50.0, radius: 25.0, change: 0.0 });
        // θ = 0 → offset (sin 0, cos 0) * 25 = (0, 25); centre 50 ahead on +x.
        assert_vec_close(a.desired(), Vec2::new(50.0, 25.0));
    }

    #[test]
    fn zero_velocity_collapses_centre_onto_agent() {
        let mut rng = AgentRng::new(3, AgentId(0));
        let mut a = SteeringAgent::new(
            AgentId(0),
            Vec2::new(10.0, 10.0),
            Vec2::ZERO,
            AgentParams::new(5.0, 1_000.0),
        ).unwrap();
        a.wander(&mut rng, WanderParams::default());
        assert!((a.desired().length() - 25.0).abs() < EPS);
        assert!(a.acceleration().is_finite());
    }

    #[test]
    fn extreme_change_does_not_panic() {
        let mut rng = AgentRng::new(3, AgentId(0));
        let mut a = agent_at(Vec2::new(10.0, 10.0));
        a.wander(&mut rng, WanderParams { change: f32::MAX, ..WanderParams::default() });
        assert!(a.wander_angle().is_finite());
        assert!(a.acceleration().is_finite());

        let before = a.wander_angle();
        a.wander(&mut rng, WanderParams { change: f32::INFINITY, ..WanderParams::default() });
        assert_eq!(a.wander_angle(), before);
    }

    #[test]
    fn deterministic_for_a_seed() {
        let run = || {
            let mut rng = AgentRng::new(99, AgentId(4));
            let mut a = agent_at(Vec2::new(100.0, 100.0));
            for _ in 0..50 {
                a.wander(&mut rng, WanderParams::default());
                a.update();
            }
            a.position()
        };
        assert_eq!(run(), run());
    }
}

// ── Bounce ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounce {
    use st_core::WorldBounds;

    use super::*;

    const BOUNDS: WorldBounds = WorldBounds::new(640.0, 480.0);

    #[test]
    fn interior_is_untouched() {
        let mut a = agent_at(Vec2::new(320.0, 240.0));
        a.bounce(BOUNDS, 50.0);
        assert_eq!(a.acceleration(), Vec2::ZERO);
    }

    #[test]
    fn each_edge_pushes_inward() {
        let cases = [
            (Vec2::new(10.0, 240.0), Vec2::new(0.5, 0.0)),
            (Vec2::new(630.0, 240.0), Vec2::new(-0.5, 0.0)),
            (Vec2::new(320.0, 10.0), Vec2::new(0.0, 0.5)),
            (Vec2::new(320.0, 470.0), Vec2::new(0.0, -0.5)),
        ];
        for (pos, want) in cases {
            let mut a = agent_at(pos);
            a.bounce(BOUNDS, 50.0);
            assert_vec_close(a.acceleration(), want);
        }
    }

    #[test]
    fn corner_gets_both_axes() {
        let mut a = agent_at(Vec2::new(10.0, 10.0));
        a.bounce(BOUNDS, 50.0);
        assert_vec_close(a.acceleration(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn keeps_along_edge_component() {
        let mut a = agent_at(Vec2::new(320.0, 10.0));
        a.mover.velocity = Vec2::new(3.0, -2.0);
        a.bounce(BOUNDS, 50.0);
        assert_eq!(a.desired(), Vec2::new(3.0, 5.0).clamp_magnitude(5.0));
    }
}

// ── AgentParams / builder ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use st_core::{SteerError, Vec2, WorldBounds};

    use crate::{AgentParams, AgentStoreBuilder};

    #[test]
    fn max_force_derived_from_speed() {
        assert_eq!(AgentParams::new(5.0, 5.0).resolved_max_force(), 0.5);
        assert_eq!(AgentParams::new(5.0, 20.0).resolved_max_force(), 2.0);
        assert_eq!(AgentParams::new(5.0, 20.0).with_max_force(0.1).resolved_max_force(), 0.1);
    }

    #[test]
    fn ids_follow_insertion_order() {
        let (store, rngs) = AgentStoreBuilder::new(1)
            .spawn(Vec2::new(1.0, 1.0))
            .spawn(Vec2::new(2.0, 2.0))
            .spawn(Vec2::new(3.0, 3.0))
            .build()
            .unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(rngs.len(), 3);
        for (i, a) in store.iter().enumerate() {
            assert_eq!(a.id.index(), i);
            assert_eq!(a.position(), Vec2::new((i + 1) as f32, (i + 1) as f32));
        }
    }

    #[test]
    fn spawn_jitter_within_half_speed() {
        let (store, _) = AgentStoreBuilder::new(5)
            .default_params(AgentParams::new(5.0, 8.0))
            .scatter(200, WorldBounds::new(100.0, 50.0))
            .build()
            .unwrap();
        for a in store.iter() {
            assert!(a.velocity().x.abs() <= 4.0 && a.velocity().y.abs() <= 4.0);
            assert!((0.0..100.0).contains(&a.position().x));
            assert!((0.0..50.0).contains(&a.position().y));
            assert_eq!(a.max_force, 0.8);
        }
    }

    #[test]
    fn same_seed_same_population() {
        let build = || {
            AgentStoreBuilder::new(11)
                .scatter(20, WorldBounds::default())
                .build()
                .unwrap()
                .0
                .snapshot()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn zero_speed_agent_is_at_rest() {
        let (store, _) = AgentStoreBuilder::new(0)
            .spawn_with(Vec2::ZERO, AgentParams::new(1.0, 0.0))
            .build()
            .unwrap();
        assert_eq!(store.agents[0].velocity(), Vec2::ZERO);
    }

    #[test]
    fn rejects_negative_speed() {
        let result = AgentStoreBuilder::new(0)
            .spawn_with(Vec2::ZERO, AgentParams::new(5.0, -1.0))
            .build();
        match result {
            Err(SteerError::InvalidParameter { name, value }) => {
                assert_eq!(name, "max_speed");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected InvalidParameter, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn rejects_negative_size_and_nan_force() {
        assert!(AgentParams::new(-0.5, 5.0).validate().is_err());
        assert!(AgentParams::new(5.0, 5.0).with_max_force(f32::NAN).validate().is_err());
        assert!(AgentParams::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_position() {
        let result = AgentStoreBuilder::new(0).spawn(Vec2::new(f32::INFINITY, 0.0)).build();
        assert!(matches!(result, Err(SteerError::InvalidParameter { name: "position", .. })));
    }
}

// ── Direct construction ───────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use st_core::{AgentId, AgentRng, SteerError, Vec2};

    use crate::{AgentParams, SteeringAgent};

    #[test]
    fn new_rejects_negative_speed() {
        let result = SteeringAgent::new(AgentId(0), Vec2::ZERO, Vec2::ZERO, AgentParams::new(5.0, -5.0));
        match result {
            Err(SteerError::InvalidParameter { name, value }) => {
                assert_eq!(name, "max_speed");
                assert_eq!(value, -5.0);
            }
            other => panic!("expected InvalidParameter, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn new_rejects_non_finite_speed_and_velocity() {
        let nan_speed = SteeringAgent::new(AgentId(0), Vec2::ZERO, Vec2::ZERO, AgentParams::new(5.0, f32::NAN));
        assert!(matches!(nan_speed, Err(SteerError::InvalidParameter { name: "max_speed", .. })));

        let bad_velocity = SteeringAgent::new(
            AgentId(0),
            Vec2::ZERO,
            Vec2::new(0.0, f32::INFINITY),
            AgentParams::default(),
        );
        assert!(matches!(
            bad_velocity,
            Err(SteerError::InvalidParameter { name: "velocity", value }) if value.is_infinite()
        ));
    }

    #[test]
    fn spawn_rejects_infinite_speed_before_drawing_jitter() {
        let mut rng = AgentRng::new(1, AgentId(0));
        let result = SteeringAgent::spawn(AgentId(0), Vec2::ZERO, AgentParams::new(5.0, f32::INFINITY), &mut rng);
        assert!(matches!(result, Err(SteerError::InvalidParameter { name: "max_speed", .. })));
    }

    #[test]
    fn valid_agent_keeps_desired_within_max_speed() {
        let mut a = SteeringAgent::new(AgentId(0), Vec2::ZERO, Vec2::ZERO, AgentParams::new(5.0, 5.0)).unwrap();
        a.seek(Vec2::new(10.0, 0.0));
        assert_eq!(a.desired(), Vec2::new(5.0, 0.0));
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use st_core::{AgentId, SteerError, Vec2};

    use crate::{AgentRngs, AgentStoreBuilder};

    #[test]
    fn rng_count_matches_request() {
        let rngs = AgentRngs::new(3, 9).unwrap();
        assert_eq!(rngs.len(), 3);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn rng_count_beyond_id_range_errors() {
        let result = AgentRngs::new(u32::MAX as usize + 1, 9);
        assert!(matches!(result, Err(SteerError::Config(_))));
    }

    #[test]
    fn snapshot_mirrors_agents() {
        let (store, _) = AgentStoreBuilder::new(2)
            .spawn(Vec2::new(1.0, 2.0))
            .spawn(Vec2::new(3.0, 4.0))
            .build()
            .unwrap();
        let snap = store.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[1].id, AgentId(1));
        assert_eq!(snap[1].position, Vec2::new(3.0, 4.0));
        assert_eq!(snap[1].velocity, store.agents[1].velocity());
    }

    #[test]
    fn get_by_id() {
        let (mut store, _) = AgentStoreBuilder::new(2).spawn(Vec2::ZERO).build().unwrap();
        assert!(store.get(AgentId(0)).is_some());
        assert!(store.get(AgentId(1)).is_none());
        store.get_mut(AgentId(0)).unwrap().apply(Vec2::new(1.0, 0.0));
        assert_eq!(store.agents[0].acceleration(), Vec2::new(1.0, 0.0));
    }
}
