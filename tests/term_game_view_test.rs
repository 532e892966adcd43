use tui_blockfall::core::{GameController, Piece, View};
use tui_blockfall::term::{piece_color, AnchorY, FrameBuffer, GameView, TermView, Viewport};
use tui_blockfall::types::{Anchor, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameController::with_seed(10, 20, 1).snapshot();
    let view = GameView::default();

    // 10*2 by 20*1 board pixels plus the border.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn term_view_follows_board_size() {
    let snap = GameController::with_seed(6, 8, 1).snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(14, 10));

    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
}

#[test]
fn term_view_draws_active_piece_two_chars_wide() {
    let mut game = GameController::with_seed(10, 20, 2);
    game.start();
    assert!(game.spawn_at(Piece::new(PieceKind::O, 0), Anchor::new(0, 4)));

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));
    let (x0, y0) = (1 + 4 * 2, 1);
    for (x, y) in [(x0, y0), (x0 + 3, y0), (x0, y0 + 1)] {
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::O));
        assert!(cell.style.bold);
    }
    assert_eq!(fb.get(x0 + 4, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameController::with_seed(10, 20, 3);
    game.start();
    let mut snap = game.snapshot();
    snap.score = 1234;
    snap.lines = 7;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LINES"));
    assert!(all.contains("PIECES"));
    assert!(all.contains("NEXT"));

    let narrow = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&narrow).contains("SCORE"));
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let mut game = GameController::with_seed(10, 20, 4);
    game.start();
    game.pause();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("PAUSED"));

    let mut over = game.snapshot();
    over.phase = tui_blockfall::types::GamePhase::GameOver;
    let fb = GameView::default().render(&over, Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("GAME OVER"));
}

#[test]
fn term_view_collects_notifications() {
    let mut game = GameController::with_seed(10, 20, 5);
    let mut term_view = TermView::new();
    game.start();
    game.flush_to(&mut term_view);

    assert!(term_view.take_dirty());
    assert_eq!(term_view.snapshot(), &game.snapshot());

    term_view.show_score(40);
    assert_eq!(term_view.snapshot().score, 40);
    assert!(term_view.take_dirty());
    assert!(!term_view.take_dirty());
}

#[test]
fn term_view_single_column_cells() {
    let mut game = GameController::with_seed(10, 20, 6);
    game.start();
    assert!(game.spawn_at(Piece::new(PieceKind::O, 0), Anchor::new(0, 4)));

    let fb = GameView::new(1, 1).render(&game.snapshot(), Viewport::new(12, 22));
    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(11, 21).unwrap().ch, '┘');
    assert_eq!(fb.get(5, 1).unwrap().ch, '█');
    assert_eq!(fb.get(6, 2).unwrap().ch, '█');
    assert_eq!(fb.get(7, 1).unwrap().ch, '·');
}
