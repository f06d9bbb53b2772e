//! Property tests over random boards and random play.

use find_pattern::board::ToNdIndex;
use find_pattern::{
    estimate, exist_pattern, ActionCodec, BoardState, Color, Game, Move, PatternGame,
    PatternGameBuilder, Player,
};
use ndarray::Array2;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Play `turns` random probes from a seeded board.
fn played_board(n: usize, seed: u64, turns: usize) -> (PatternGame, BoardState, Player) {
    let game = PatternGameBuilder::new().size(n).build().unwrap();
    let mut state = game.init_board_seeded(seed).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);
    let mut player = Player::A;

    for _ in 0..turns {
        let probes: Vec<_> = game
            .legal_actions(&state, player)
            .unwrap()
            .into_iter()
            .filter(|&a| a < game.codec().probe_count())
            .collect();
        if probes.is_empty() {
            break;
        }
        let action = probes[rng.gen_range(0..probes.len())];
        player = game.next_state(&mut state, player, action).unwrap();
    }
    (game, state, player)
}

proptest! {
    #[test]
    fn prop_codec_round_trip(n in 2usize..9, action in any::<usize>()) {
        let codec = ActionCodec::new(n).unwrap();
        let action = action % codec.action_size();
        let mv = codec.decode(action).unwrap();
        prop_assert_eq!(codec.encode(mv).unwrap(), action);
    }

    #[test]
    fn prop_valid_move_count(n in 2usize..6, seed in any::<u64>(), turns in 0usize..12) {
        let (game, state, player) = played_board(n, seed, turns);
        let valid = game.valid_moves(&state, player).unwrap();
        let own = state.masked_cells(player).count();
        let opp = state.masked_cells(player.opponent()).count();

        prop_assert_eq!(valid.len(), game.action_size());
        prop_assert_eq!(valid.iter().filter(|&&v| v == 1).count(), own * opp + 2);
        prop_assert_eq!(valid[n.pow(4)], 1);
        prop_assert_eq!(valid[n.pow(4) + 1], 1);
    }

    #[test]
    fn prop_valid_probes_decode_to_masked_cells(n in 2usize..5, seed in any::<u64>(), turns in 0usize..8) {
        let (game, state, player) = played_board(n, seed, turns);
        for action in game.legal_actions(&state, player).unwrap() {
            if let Move::Probe { discover, query } = game.codec().decode(action).unwrap() {
                prop_assert!(state.mask(player.opponent())[discover.to_nd_index()]);
                prop_assert!(state.mask(player)[query.to_nd_index()]);
            }
        }
    }

    #[test]
    fn prop_fresh_board_shape(n in 2usize..9, seed in any::<u64>()) {
        let game = PatternGameBuilder::new().size(n).build().unwrap();
        let state = game.init_board_seeded(seed).unwrap();
        let cells = n * n;

        prop_assert_eq!(state.masked_cells(Player::B).count(), cells.div_ceil(2));
        prop_assert_eq!(state.masked_cells(Player::A).count(), cells / 2);
        let blacks = state.pieces().iter().filter(|c| c.is_black()).count();
        prop_assert_eq!(blacks, (cells as f64 * 0.22).ceil() as usize);
        prop_assert_eq!(state.has_pattern(), exist_pattern(state.pieces()));
    }

    #[test]
    fn prop_masks_only_shrink(n in 2usize..6, seed in any::<u64>(), turns in 1usize..12) {
        let (_, fresh, _) = played_board(n, seed, 0);
        let (_, played, _) = played_board(n, seed, turns);

        prop_assert_eq!(fresh.pieces(), played.pieces());
        for p in Player::ALL {
            for (idx, &bit) in played.mask(p).indexed_iter() {
                prop_assert!(!bit || fresh.mask(p)[idx]);
            }
        }
    }

    #[test]
    fn prop_canonical_view_matches_cell_state(n in 2usize..6, seed in any::<u64>(), turns in 0usize..12) {
        let (game, state, _) = played_board(n, seed, turns);
        for viewer in Player::ALL {
            let view = game.canonical_form(&state, viewer);
            for ((r, c), &value) in view.indexed_iter() {
                prop_assert!((0.0..=1.0).contains(&value));
                if !state.mask(viewer)[[r, c]] {
                    let truth = if state.pieces()[[r, c]] == Color::Black { 1.0 } else { 0.0 };
                    prop_assert_eq!(value, truth);
                }
            }
        }
    }

    #[test]
    fn prop_estimate_bounded_and_symmetric(white in 0u32..10_000, black in 0u32..10_000) {
        let p = estimate(white, black);
        prop_assert!((0.18..=0.82).contains(&p));
        prop_assert!((p + estimate(black, white) - 1.0).abs() < 1e-12);
        prop_assert_eq!(p > 0.5, black > white);
    }

    #[test]
    fn prop_symmetries_preserve_board_values(n in 2usize..5, values in proptest::collection::vec(0.0f64..1.0, 16)) {
        let game = PatternGameBuilder::new().size(n).build().unwrap();
        let board = Array2::from_shape_fn((n, n), |(r, c)| values[r * n + c]);
        let pi = vec![1.0 / game.action_size() as f64; game.action_size()];

        let forms = game.symmetries(&board, &pi).unwrap();
        let mut expected: Vec<f64> = board.iter().copied().collect();
        expected.sort_by(f64::total_cmp);
        for (b, p) in &forms {
            let mut got: Vec<f64> = b.iter().copied().collect();
            got.sort_by(f64::total_cmp);
            prop_assert_eq!(&got, &expected);
            prop_assert_eq!(p, &pi);
        }
    }
}
