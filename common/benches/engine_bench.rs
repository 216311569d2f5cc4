use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    calculate_random_move, is_winner, Board, Mark, TicTacToeGame,
};

fn play_random_game(game: &mut TicTacToeGame, human: &mut SessionRng) {
    game.reset();
    while !game.status().is_terminal() {
        let result = if game.is_opponent_turn() {
            game.choose_opponent_move()
        } else {
            let pos = calculate_random_move(game.board(), human)
                .expect("an unfinished game has an empty cell");
            game.attempt_move(pos.row, pos.col, Mark::X)
        };
        if let Err(rejection) = result {
            panic!("random game stalled: {}", rejection);
        }
    }
}

fn engine_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("random_game", |b| {
        let mut game = TicTacToeGame::with_seed(42);
        let mut human = SessionRng::new(7);
        b.iter(|| play_random_game(&mut game, &mut human))
    });

    group.bench_function("win_check_empty_board", |b| {
        let board = Board::new();
        b.iter(|| is_winner(black_box(&board), black_box(Mark::X)))
    });

    group.finish();
}

criterion_group!(benches, engine_bench);
criterion_main!(benches);
