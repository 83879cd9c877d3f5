//! Ball motion, pitch bounds, and paddle collision response
//!
//! The heart of the game: goals, wall bounces, and the angle-based
//! deflection a paddle face imparts on the ball.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, Paddle, Pitch, Side};
use crate::tuning::Tuning;

/// Outcome of the per-tick bounds pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsEvent {
    /// Ball is still in open play
    None,
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball crossed a goal line; the named side scores
    Goal(Side),
}

/// Advance the ball by its per-tick velocity. Pure integration, no bounds.
#[inline]
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}

/// Sample a serve velocity: each axis magnitude uniform in
/// `[min_speed, max_speed]`, each sign an independent coin flip.
///
/// Post-goal trajectories can point toward either side - a chaotic restart,
/// not a serve-toward-loser scheme.
pub fn serve_velocity(rng: &mut impl Rng, min_speed: f32, max_speed: f32) -> Vec2 {
    let mut vel = Vec2::new(
        rng.random_range(min_speed..=max_speed),
        rng.random_range(min_speed..=max_speed),
    );
    if rng.random_bool(0.5) {
        vel.x = -vel.x;
    }
    if rng.random_bool(0.5) {
        vel.y = -vel.y;
    }
    vel
}

/// Check the ball against the pitch borders, all offset inward by the
/// ball radius.
///
/// Crossing a goal line wins the point for the far side and ends this
/// tick's bounds logic; the caller resets the ball. Top/bottom contact
/// flips vertical velocity only - there is no position correction, so the
/// ball may sit on the border for a frame before the flipped velocity
/// carries it back. Horizontal velocity is never flipped by a wall.
pub fn keep_ball_on_pitch(ball: &mut Ball, pitch: &Pitch) -> BoundsEvent {
    let left_border = ball.radius;
    let right_border = pitch.width - ball.radius;
    let top_border = ball.radius;
    let bottom_border = pitch.height - ball.radius;

    // Out past the left goal line: the right side scores
    if ball.pos.x < left_border {
        return BoundsEvent::Goal(Side::Right);
    }
    // Out past the right goal line: the left side scores
    if ball.pos.x > right_border {
        return BoundsEvent::Goal(Side::Left);
    }

    if ball.pos.y <= top_border || ball.pos.y >= bottom_border {
        ball.vel.y = -ball.vel.y;
        return BoundsEvent::WallBounce;
    }

    BoundsEvent::None
}

/// Resolve a ball/paddle contact; returns true when the ball was deflected.
///
/// The paddle's side is derived from its x against the pitch midline.
/// Contact needs vertical edge overlap plus the ball center reaching the
/// collision plane one radius out from the ball-facing paddle face. On
/// contact the ball snaps flush to the face (so it cannot lodge inside the
/// paddle), then leaves at hit-factor x max deflect angle: center hits go
/// straight, edge hits deflect hardest. Speed gets a multiplicative boost
/// capped at the configured maximum.
///
/// One check per paddle per tick, no sub-stepping - a fast enough ball can
/// tunnel straight through a paddle.
pub fn deal_with_collision(
    paddle: &Paddle,
    ball: &mut Ball,
    pitch: &Pitch,
    tuning: &Tuning,
) -> bool {
    let right_side = paddle.x > pitch.midline();

    // Ball-center x at which the ball's near edge touches the paddle face
    let plane = if right_side {
        paddle.x - ball.radius
    } else {
        paddle.x + paddle.width + ball.radius
    };

    let vertical_overlap =
        ball.pos.y + ball.radius >= paddle.top() && ball.pos.y - ball.radius <= paddle.bottom();
    if !vertical_overlap {
        return false;
    }

    let contact = if right_side {
        ball.pos.x >= plane
    } else {
        ball.pos.x <= plane
    };
    if !contact {
        return false;
    }

    ball.pos.x = plane;

    let hit = ((ball.pos.y - paddle.center_y()) / (paddle.height * 0.5)).clamp(-1.0, 1.0);
    let angle = hit * tuning.max_deflect_angle;
    let dir_x = if right_side { -1.0 } else { 1.0 };

    let speed = (ball.speed() * tuning.paddle_boost).min(tuning.max_ball_speed);
    ball.vel = Vec2::new(angle.cos() * speed * dir_x, angle.sin() * speed);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::FRAC_PI_3;

    fn pitch() -> Pitch {
        Pitch {
            width: 620.0,
            height: 460.0,
        }
    }

    fn player_paddle() -> Paddle {
        Paddle {
            x: 10.0,
            y: 62.0,
            width: 20.0,
            height: 75.0,
        }
    }

    fn npc_paddle() -> Paddle {
        Paddle {
            x: 590.0,
            y: 62.0,
            width: 20.0,
            height: 75.0,
        }
    }

    #[test]
    fn test_serve_velocity_in_range() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..200 {
            let vel = serve_velocity(&mut rng, 2.0, 4.0);
            assert!(vel.x.abs() >= 2.0 && vel.x.abs() <= 4.0);
            assert!(vel.y.abs() >= 2.0 && vel.y.abs() <= 4.0);
        }
    }

    #[test]
    fn test_serve_velocity_covers_all_quadrants() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut quadrants = [false; 4];
        for _ in 0..200 {
            let vel = serve_velocity(&mut rng, 2.0, 4.0);
            let idx = (vel.x > 0.0) as usize * 2 + (vel.y > 0.0) as usize;
            quadrants[idx] = true;
        }
        assert_eq!(quadrants, [true; 4]);
    }

    #[test]
    fn test_goal_lines() {
        let pitch = pitch();
        let mut ball = Ball {
            pos: Vec2::new(9.0, 200.0),
            vel: Vec2::new(-3.0, 1.0),
            radius: 10.0,
        };
        // Past the left border (x < radius): right side scores
        assert_eq!(
            keep_ball_on_pitch(&mut ball, &pitch),
            BoundsEvent::Goal(Side::Right)
        );

        ball.pos.x = 611.0;
        assert_eq!(
            keep_ball_on_pitch(&mut ball, &pitch),
            BoundsEvent::Goal(Side::Left)
        );

        // Exactly on the border is still in play
        ball.pos.x = 10.0;
        assert_eq!(keep_ball_on_pitch(&mut ball, &pitch), BoundsEvent::None);
    }

    #[test]
    fn test_wall_bounce_flips_vertical_only() {
        let pitch = pitch();
        let mut ball = Ball {
            pos: Vec2::new(300.0, 10.0),
            vel: Vec2::new(2.0, -3.0),
            radius: 10.0,
        };
        assert_eq!(
            keep_ball_on_pitch(&mut ball, &pitch),
            BoundsEvent::WallBounce
        );
        assert_eq!(ball.vel, Vec2::new(2.0, 3.0));

        ball.pos.y = 450.0;
        assert_eq!(
            keep_ball_on_pitch(&mut ball, &pitch),
            BoundsEvent::WallBounce
        );
        assert_eq!(ball.vel, Vec2::new(2.0, -3.0));
    }

    #[test]
    fn test_dead_center_hit_goes_straight() {
        // Concrete scenario: ball at (15, 100) moving left at speed 3,
        // player paddle spanning y in [62, 137], center 99.5
        let tuning = Tuning::default();
        let paddle = player_paddle();
        let mut ball = Ball {
            pos: Vec2::new(15.0, 100.0),
            vel: Vec2::new(-3.0, 0.0),
            radius: 10.0,
        };

        assert!(deal_with_collision(&paddle, &mut ball, &pitch(), &tuning));
        // Snapped flush: paddle.x + width + radius
        assert_eq!(ball.pos.x, 40.0);
        // Hit factor ~0: leaves almost purely horizontal, boosted 6%
        assert!((ball.vel.x - 3.0 * 1.06).abs() < 0.01);
        assert!(ball.vel.y.abs() < 0.1);
    }

    #[test]
    fn test_edge_hit_max_deflection() {
        let tuning = Tuning::default();
        let paddle = player_paddle();
        // Ball center level with the paddle's bottom edge: hit factor +1
        let mut ball = Ball {
            pos: Vec2::new(30.0, paddle.bottom()),
            vel: Vec2::new(-3.0, 0.0),
            radius: 10.0,
        };

        assert!(deal_with_collision(&paddle, &mut ball, &pitch(), &tuning));
        let angle = ball.vel.y.atan2(ball.vel.x);
        assert!((angle - FRAC_PI_3).abs() < 1e-4);
    }

    #[test]
    fn test_right_paddle_reverses_direction() {
        let tuning = Tuning::default();
        let paddle = npc_paddle();
        let mut ball = Ball {
            pos: Vec2::new(585.0, 99.5),
            vel: Vec2::new(3.0, 0.0),
            radius: 10.0,
        };

        assert!(deal_with_collision(&paddle, &mut ball, &pitch(), &tuning));
        // Snapped to paddle.x - radius, moving leftward
        assert_eq!(ball.pos.x, 580.0);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_speed_boost_capped() {
        let tuning = Tuning::default();
        let paddle = player_paddle();
        let mut ball = Ball {
            pos: Vec2::new(20.0, 100.0),
            vel: Vec2::new(-8.9, 0.0),
            radius: 10.0,
        };

        assert!(deal_with_collision(&paddle, &mut ball, &pitch(), &tuning));
        assert!(ball.speed() <= tuning.max_ball_speed + 1e-4);
    }

    #[test]
    fn test_no_contact_without_vertical_overlap() {
        let tuning = Tuning::default();
        let paddle = player_paddle();
        let mut ball = Ball {
            pos: Vec2::new(20.0, 300.0),
            vel: Vec2::new(-3.0, 0.0),
            radius: 10.0,
        };

        assert!(!deal_with_collision(&paddle, &mut ball, &pitch(), &tuning));
        assert_eq!(ball.vel, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn test_no_contact_short_of_plane() {
        let tuning = Tuning::default();
        let paddle = player_paddle();
        let mut ball = Ball {
            pos: Vec2::new(41.0, 100.0),
            vel: Vec2::new(-3.0, 0.0),
            radius: 10.0,
        };

        assert!(!deal_with_collision(&paddle, &mut ball, &pitch(), &tuning));
    }

    proptest! {
        #[test]
        fn prop_deflected_speed_never_exceeds_cap(
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
            ball_y in 40.0f32..160.0,
        ) {
            let tuning = Tuning::default();
            let paddle = player_paddle();
            let mut ball = Ball {
                pos: Vec2::new(30.0, ball_y),
                vel: Vec2::new(vx, vy),
                radius: 10.0,
            };
            if deal_with_collision(&paddle, &mut ball, &pitch(), &tuning) {
                prop_assert!(ball.speed() <= tuning.max_ball_speed + 1e-3);
            }
        }

        #[test]
        fn prop_hit_factor_bounds_deflection(ball_y in -100.0f32..400.0) {
            let tuning = Tuning::default();
            let paddle = player_paddle();
            let mut ball = Ball {
                pos: Vec2::new(30.0, ball_y),
                vel: Vec2::new(-3.0, 0.0),
                radius: 10.0,
            };
            if deal_with_collision(&paddle, &mut ball, &pitch(), &tuning) {
                let angle = ball.vel.y.atan2(ball.vel.x);
                prop_assert!(angle.abs() <= tuning.max_deflect_angle + 1e-4);
            }
        }
    }
}
