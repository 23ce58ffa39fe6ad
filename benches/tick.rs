use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::SmallRng, SeedableRng};
use snake_grid::types::LivenessQueryableGame;
use snake_grid::{board_fixture, Board, NoFood, RandomFoodPlacer};

fn bench_tick_default_board(c: &mut Criterion) {
    let start = Board::default();
    let mut placer = RandomFoodPlacer::new(SmallRng::seed_from_u64(1));
    let mut board = start.clone();

    c.bench_function("tick default board", |b| {
        b.iter(|| {
            if board.alive_snake_count() == 0 {
                board = start.clone();
            }
            black_box(board.advance(&mut placer).unwrap())
        })
    });
}

fn bench_tick_arena(c: &mut Criterion) {
    let start = board_fixture(include_str!("../fixtures/arena.txt"));
    let mut placer = RandomFoodPlacer::new(SmallRng::seed_from_u64(2));
    let mut board = start.clone();

    c.bench_function("tick arena", |b| {
        b.iter(|| {
            if board.alive_snake_count() == 0 {
                board = start.clone();
            }
            black_box(board.advance(&mut placer).unwrap())
        })
    });
}

fn bench_load_arena(c: &mut Criterion) {
    let text = include_str!("../fixtures/arena.txt");
    c.bench_function("load arena", |b| {
        b.iter(|| black_box(text).parse::<Board>().unwrap())
    });
}

fn bench_next_square(c: &mut Criterion) {
    let board = Board::default();
    c.bench_function("next square default board", |b| {
        b.iter(|| black_box(&board).next_square(black_box(snake_grid::types::SnakeId(0))))
    });
}

fn bench_tick_without_food(c: &mut Criterion) {
    let start = board_fixture(include_str!("../fixtures/two_snakes.txt"));
    c.bench_function("tick two snakes no food", |b| {
        b.iter(|| {
            let mut board = start.clone();
            black_box(board.advance(&mut NoFood).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_tick_default_board,
    bench_tick_arena,
    bench_load_arena,
    bench_next_square,
    bench_tick_without_food
);
criterion_main!(benches);
