use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::catalog::tetromino;
use blockfall::core::{ActivePolyomino, Board, Catalog, PlacementEngine};
use blockfall::engine::{Session, SessionConfig};
use blockfall::types::Coordinate;

fn bench_apply_piece(c: &mut Criterion) {
    let catalog = Catalog::tetrominoes();
    let engine = PlacementEngine::new(&catalog);
    let mut board = Board::new();
    let piece = ActivePolyomino::new(tetromino::T, Coordinate::new(10, 4));

    c.bench_function("apply_then_erase", |b| {
        b.iter(|| {
            engine.apply_piece(&mut board, black_box(&piece), false, false);
            engine.apply_piece(&mut board, black_box(&piece), true, false);
        })
    });
}

fn bench_fits(c: &mut Criterion) {
    let catalog = Catalog::tetrominoes();
    let engine = PlacementEngine::new(&catalog);
    let board = Board::new();
    let piece = ActivePolyomino::new(tetromino::I, Coordinate::new(-1, 7));

    c.bench_function("fits_spawn_buffer", |b| {
        b.iter(|| engine.fits(&board, black_box(&piece)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for row in 16..20 {
                for column in 0..10 {
                    board.set_cell(row, column, Some(tetromino::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_session_moves(c: &mut Criterion) {
    let catalog = Catalog::tetrominoes();
    let mut session = match Session::new(&catalog, SessionConfig::default(), 12345) {
        Ok(session) => session,
        Err(err) => panic!("default config rejected: {}", err),
    };
    session.spawn(tetromino::T);
    session.soft_drop();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            session.move_left();
            session.move_right();
        })
    });

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            session.try_rotate(true);
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let catalog = Catalog::tetrominoes();

    c.bench_function("spawn_and_hard_drop", |b| {
        b.iter(|| {
            let mut session = Session::new(&catalog, SessionConfig::default(), 7).ok();
            if let Some(session) = session.as_mut() {
                session.spawn_next();
                black_box(session.hard_drop());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_apply_piece,
    bench_fits,
    bench_line_clear,
    bench_session_moves,
    bench_hard_drop
);
criterion_main!(benches);
