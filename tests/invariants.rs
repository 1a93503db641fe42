//! Property tests over whole sessions driven through the public API

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use skyflap::Game;
use skyflap::consts::*;
use skyflap::persistence::MemoryStorage;
use skyflap::sim::{
    Bird, GameEvent, GamePhase, GameState, PipeField, PipePair, Rect, Score, circle_rect_overlap,
    handle_click, tick,
};

/// One step of a scripted session
#[derive(Debug, Clone, Copy)]
enum Step {
    Tick,
    Click(f32, f32),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        8 => Just(Step::Tick),
        1 => (0.0f32..CANVAS_WIDTH, 0.0f32..CANVAS_HEIGHT).prop_map(|(x, y)| Step::Click(x, y)),
        // Restart button center
        1 => Just(Step::Click(
            RESTART_BUTTON_X + RESTART_BUTTON_W / 2.0,
            RESTART_BUTTON_Y + RESTART_BUTTON_H / 2.0,
        )),
    ]
}

fn apply(state: &mut GameState, step: Step) {
    match step {
        Step::Tick => tick(state),
        Step::Click(x, y) => {
            handle_click(state, Vec2::new(x, y));
        }
    }
}

proptest! {
    #[test]
    fn pipes_stay_ordered_and_in_range(seed: u64, steps in prop::collection::vec(step_strategy(), 0..1500)) {
        let mut state = GameState::new(seed, 0);
        for step in steps {
            apply(&mut state, step);

            let xs: Vec<f32> = state.pipes.pairs.iter().map(|p| p.x).collect();
            prop_assert!(xs.windows(2).all(|w| w[0] < w[1]), "pipes out of order: {:?}", xs);
            for pair in &state.pipes.pairs {
                prop_assert!(pair.y >= 2.0 * PIPE_MAX_UPWARD_OFFSET && pair.y <= PIPE_MAX_UPWARD_OFFSET);
                prop_assert!(pair.x <= CANVAS_WIDTH);
                prop_assert!(!pair.is_offscreen());
            }
        }
    }

    #[test]
    fn only_legal_phase_changes(seed: u64, steps in prop::collection::vec(step_strategy(), 0..1500)) {
        let mut state = GameState::new(seed, 0);
        for step in steps {
            let before = state.phase;
            apply(&mut state, step);
            let after = state.phase;
            prop_assert!(
                before == after || before.can_transition_to(after),
                "illegal transition {:?} -> {:?}", before, after
            );
        }
    }

    #[test]
    fn best_tracks_maximum_score(seed: u64, initial_best in 0u32..5, steps in prop::collection::vec(step_strategy(), 0..3000)) {
        let mut game = Game::new(seed, MemoryStorage::new());
        game.state.score = Score::with_best(initial_best);
        let mut max_seen = initial_best;
        let mut last_best = initial_best;

        for step in steps {
            match step {
                Step::Tick => {
                    for event in game.frame() {
                        if let GameEvent::Scored { value, best } = event {
                            prop_assert!(best >= value);
                        }
                    }
                }
                Step::Click(x, y) => {
                    game.click(Vec2::new(x, y));
                }
            }
            let score = game.state.score;
            max_seen = max_seen.max(score.value);
            prop_assert!(score.best >= last_best);
            prop_assert!(score.best >= score.value);
            prop_assert_eq!(score.best, max_seen);
            last_best = score.best;
        }
    }

    #[test]
    fn over_is_frozen_until_restart(seed: u64, flaps in prop::collection::vec(any::<bool>(), 1..400), idle in 1usize..300) {
        let mut state = GameState::new(seed, 0);
        handle_click(&mut state, Vec2::ZERO);
        for flap in flaps {
            if flap {
                handle_click(&mut state, Vec2::ZERO);
            }
            tick(&mut state);
        }
        // Free fall always ends the round
        while state.phase != GamePhase::Over {
            tick(&mut state);
        }

        let bird = state.bird.clone();
        let pipes = state.pipes.pairs.clone();
        let fg = state.foreground;
        let score = state.score;
        state.drain_events();

        for _ in 0..idle {
            tick(&mut state);
            // Clicks outside the restart button do nothing
            prop_assert_eq!(handle_click(&mut state, Vec2::ZERO), None);
        }

        prop_assert_eq!(state.phase, GamePhase::Over);
        prop_assert_eq!(&state.bird, &bird);
        prop_assert_eq!(&state.pipes.pairs, &pipes);
        prop_assert_eq!(state.foreground, fg);
        prop_assert_eq!(state.score, score);
        prop_assert!(state.drain_events().is_empty());
    }

    #[test]
    fn same_seed_same_session(seed: u64, steps in prop::collection::vec(step_strategy(), 0..800)) {
        let mut a = GameState::new(seed, 0);
        let mut b = GameState::new(seed, 0);
        for step in steps {
            apply(&mut a, step);
            apply(&mut b, step);
        }
        prop_assert_eq!(a.phase, b.phase);
        prop_assert_eq!(&a.bird, &b.bird);
        prop_assert_eq!(&a.pipes.pairs, &b.pipes.pairs);
        prop_assert_eq!(a.score, b.score);
    }
}

#[test]
fn ready_bird_hovers_for_fifty_frames() {
    let mut state = GameState::new(3, 0);
    for _ in 0..50 {
        tick(&mut state);
        assert_eq!(state.bird.pos.y, BIRD_REST_Y);
        assert_eq!(state.phase, GamePhase::Ready);
    }
}

#[test]
fn flap_then_one_frame() {
    let mut state = GameState::new(3, 0);
    handle_click(&mut state, Vec2::ZERO);
    handle_click(&mut state, Vec2::ZERO);
    assert_eq!(state.bird.speed, -JUMP);

    tick(&mut state);
    assert_eq!(state.bird.speed, -JUMP + GRAVITY);
    assert!((state.bird.pos.y - (BIRD_REST_Y - (JUMP - GRAVITY))).abs() < 1e-5);
}

#[test]
fn hundredth_frame_spawns_one_pair_at_right_edge() {
    let mut state = GameState::new(3, 0);
    handle_click(&mut state, Vec2::ZERO);
    // Keep the bird aloft until the first spawn
    for _ in 0..99 {
        if state.bird.pos.y > 150.0 && state.bird.speed > 0.0 {
            handle_click(&mut state, Vec2::ZERO);
        }
        tick(&mut state);
        assert!(state.pipes.pairs.is_empty());
    }
    assert_eq!(state.phase, GamePhase::Playing);

    tick(&mut state);
    assert_eq!(state.pipes.pairs.len(), 1);
    // Spawned at the right edge, then moved once
    assert_eq!(state.pipes.pairs[0].x, CANVAS_WIDTH - PIPE_SPEED);
}

#[test]
fn pair_near_left_edge_scores_once() {
    let mut field = PipeField::default();
    field.pairs.push_back(PipePair { x: 1.0, y: -200.0 });
    let mut phase = GamePhase::Playing;
    let mut bird = Bird::default();
    bird.pos.x = 1000.0;
    let mut score = Score::default();
    let mut rng = Pcg32::seed_from_u64(0);
    let mut events = Vec::new();

    field.update(1, &mut phase, &bird, &mut score, &mut rng, &mut events);
    assert_eq!(field.pairs[0].x, -1.0);
    assert_eq!(score.value, 0);

    let mut frames = 1;
    while !field.pairs.is_empty() {
        frames += 1;
        field.update(frames, &mut phase, &bird, &mut score, &mut rng, &mut events);
    }
    // 1 - 2k <= -53 first holds at k = 27
    assert_eq!(frames, 27);
    assert_eq!(score.value, 1);
    assert_eq!(events, vec![GameEvent::Scored { value: 1, best: 1 }]);
}

#[test]
fn tangent_circle_does_not_collide() {
    let rect = Rect::new(100.0, 0.0, PIPE_WIDTH, PIPE_HEIGHT);
    let center = Vec2::new(100.0 - BIRD_RADIUS, 200.0);
    assert!(!circle_rect_overlap(center, BIRD_RADIUS, &rect));
    assert!(circle_rect_overlap(center + Vec2::X * 0.01, BIRD_RADIUS, &rect));
}
