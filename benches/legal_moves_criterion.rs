use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_rules::game_state::board::Board;
use plum_rules::game_state::chess_rules::STARTING_PLACEMENT;
use plum_rules::game_state::chess_types::Color;
use plum_rules::game_state::rules_config::RulesConfig;
use plum_rules::move_generation::game_status::classify_position;
use plum_rules::move_generation::legal_move_generator::generate_legal_moves;
use plum_rules::move_generation::perft::perft;
use plum_rules::utils::placement_parser::parse_placement;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    side_to_move: Color,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        placement: STARTING_PLACEMENT,
        side_to_move: Color::Light,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "castling_rooks",
        placement: "4k3/8/8/8/8/8/8/R3K2R",
        side_to_move: Color::Light,
        expected_nodes: &[26],
    },
];

const MIDGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R";

fn bench_perft(c: &mut Criterion) {
    let config = RulesConfig::default();
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let board = parse_placement(case.placement).expect("benchmark placement should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&board, case.side_to_move, depth, config);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let counts =
                            perft(black_box(&board), case.side_to_move, black_box(depth), config);
                        assert_eq!(counts.nodes as u64, *expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_single_position(c: &mut Criterion) {
    let config = RulesConfig::default();
    let midgame = parse_placement(MIDGAME).expect("benchmark placement should parse");
    let mut group = c.benchmark_group("single_position");

    group.bench_function("generate_legal_moves_midgame", |b| {
        let mut board: Board = midgame.clone();
        b.iter(|| black_box(generate_legal_moves(&mut board, Color::Light, config).len()));
    });

    group.bench_function("classify_position_midgame", |b| {
        let mut board: Board = midgame.clone();
        b.iter(|| black_box(classify_position(&mut board, Color::Dark, config)));
    });

    group.finish();
}

criterion_group!(legal_move_benches, bench_perft, bench_single_position);
criterion_main!(legal_move_benches);
