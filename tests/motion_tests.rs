use approx::assert_abs_diff_eq;
use particle_sandbox::*;

fn setup() -> (Integrator, WorldBounds, Particle) {
    let config = SandboxConfig::default();
    let particle = Particle::new(config.world.center(), config.particle);
    (Integrator::from_config(&config), config.world, particle)
}

/// Deterministic pseudo-random thrust in `[-2, 2]` per axis, sometimes zero.
fn scripted_thrust(seed: &mut u32) -> Vec2 {
    let mut next = || {
        *seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        ((*seed >> 8) % 5) as f32 - 2.0
    };
    let x = next();
    let y = next();
    Vec2::new(x, y)
}

#[test]
fn speed_never_exceeds_limit_and_clamp_keeps_direction() {
    let (integrator, world, mut particle) = setup();
    let mut seed = 7;
    let mut thrust = Vec2::new(1.0, 1.0);
    let mut clamped_ticks = 0;

    for tick in 0..1200 {
        // Hold each direction long enough to reach the limit.
        if tick % 90 == 89 {
            thrust = scripted_thrust(&mut seed);
        }
        particle.add_thrust(thrust);
        integrator.update_acceleration(&mut particle);

        let unclamped = particle.velocity + particle.acceleration * integrator.dt;
        integrator.integrate_velocity(&mut particle);

        assert!(particle.speed() <= integrator.max_speed + 1e-5);
        if unclamped.length() > integrator.max_speed {
            clamped_ticks += 1;
            assert_abs_diff_eq!(particle.speed(), integrator.max_speed, epsilon = 1e-5);
            assert_abs_diff_eq!(unclamped.perp_dot(particle.velocity), 0.0, epsilon = 1e-5);
            assert!(unclamped.dot(particle.velocity) > 0.0);
        }

        integrator.boundary.apply(&mut particle, &world, integrator.dt);
        integrator.integrate_position(&mut particle);
        integrator.friction.apply(&mut particle);
    }

    assert!(clamped_ticks > 0, "script never reached the speed limit");
}

#[test]
fn acceleration_is_normalized_to_fixed_magnitude() {
    let (integrator, _, mut particle) = setup();

    for thrust in [
        Vec2::new(1.0, 0.0),
        Vec2::new(-3.0, 4.0),
        Vec2::new(0.001, -0.002),
        Vec2::new(2.0, 2.0),
    ] {
        particle.add_thrust(thrust);
        integrator.update_acceleration(&mut particle);

        assert_abs_diff_eq!(
            particle.acceleration_magnitude(),
            integrator.acceleration,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(thrust.perp_dot(particle.acceleration), 0.0, epsilon = 1e-4);
        assert!(thrust.dot(particle.acceleration) > 0.0);
        assert_eq!(particle.thrust, Vec2::ZERO);
    }
}

#[test]
fn huge_thrust_still_accelerates_at_fixed_magnitude() {
    let (integrator, world, mut particle) = setup();
    let start = particle.position;
    particle.add_thrust(Vec2::new(1.0e20, 0.0));

    integrator.step(&mut particle, &world);
    assert_abs_diff_eq!(particle.acceleration.x, integrator.acceleration, epsilon = 1e-5);
    assert_eq!(particle.acceleration.y, 0.0);
    assert!(particle.position.x > start.x);
    assert!(particle.speed() <= integrator.max_speed);
}

#[test]
fn zero_thrust_decays_speed_by_friction_factor() {
    let (integrator, world, mut particle) = setup();
    particle.velocity = Vec2::new(0.3, 0.4);
    let retention = integrator.friction.retention();

    let mut previous = particle.speed();
    for _ in 0..2000 {
        integrator.step(&mut particle, &world);
        let speed = particle.speed();
        assert!(speed < previous || previous == 0.0);
        assert_abs_diff_eq!(speed, previous * retention, epsilon = 1e-6);
        previous = speed;
    }

    assert!(previous < 1e-6);
    assert!((particle.position - world.center()).abs().max_element() < world.width() / 2.0);
}

#[test]
fn particle_at_rest_in_border_band_is_never_pushed_outward() {
    let (integrator, world, mut particle) = setup();
    let distance_max = world.width() / 2.0 - particle.radius;
    particle.position.x = world.center().x + distance_max + world.border_width / 2.0;
    let start = particle.position.x;

    for _ in 0..600 {
        integrator.step(&mut particle, &world);
        assert!(particle.velocity.x <= 0.0);
        assert!(particle.position.x <= start + 1e-6);
    }
}

#[test]
fn outward_motion_is_turned_back_within_the_border() {
    let (integrator, world, mut particle) = setup();
    let overshoot = integrator.max_speed * integrator.dt;
    let outer_limit = world.right + world.border_width - particle.radius;

    particle.position.x = world.right - 0.05;
    particle.velocity.x = integrator.max_speed;

    let mut turned = false;
    for _ in 0..300 {
        particle.add_thrust(Vec2::new(1.0, 0.0));
        integrator.step(&mut particle, &world);
        assert!(particle.position.x <= outer_limit + overshoot);
        turned |= particle.velocity.x < 0.0;
    }
    assert!(turned);
}

#[test]
fn past_outer_border_is_pulled_back_inside() {
    let (integrator, world, mut particle) = setup();
    let distance_max = world.height() / 2.0 - particle.radius;
    particle.position.y = world.top - world.border_width * 1.5;

    integrator.step(&mut particle, &world);
    assert!(particle.velocity.y > 0.0);

    for _ in 0..600 {
        integrator.step(&mut particle, &world);
        assert!(particle.velocity.y >= 0.0 || particle.position.y > world.top);
    }
    assert!((world.center().y - particle.position.y).abs() <= distance_max);
}

#[test]
fn sustained_upward_thrust_hits_speed_limit_then_keeps_climbing() {
    let (integrator, world, mut particle) = setup();
    assert_eq!(particle.position, Vec2::splat(1.024));

    let mut first_clamped_tick = None;
    let mut previous_y = particle.position.y;
    for tick in 1..=60 {
        particle.add_thrust(Vec2::new(0.0, -1.0));
        integrator.step(&mut particle, &world);

        if first_clamped_tick.is_none() && particle.computed_speed >= integrator.max_speed {
            first_clamped_tick = Some(tick);
        }
        assert!(particle.position.y < previous_y, "y stalled at tick {tick}");
        assert_eq!(particle.position.x, 1.024);
        previous_y = particle.position.y;
    }

    let clamped = first_clamped_tick.expect("speed limit never reached");
    assert!((16..=22).contains(&clamped), "clamped at tick {clamped}");
    assert_abs_diff_eq!(particle.computed_speed, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(particle.velocity.y, -0.988, epsilon = 1e-5);
}
