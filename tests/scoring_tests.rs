use tui_blockfall::core::{calculate_line_score, ScoreKeeper};

#[test]
fn test_line_score_table() {
    assert_eq!(calculate_line_score(0), 0);
    assert_eq!(calculate_line_score(1), 100);
    assert_eq!(calculate_line_score(2), 250);
    assert_eq!(calculate_line_score(3), 400);
    assert_eq!(calculate_line_score(4), 550);
}

#[test]
fn test_score_keeper_accumulates() {
    let mut score = ScoreKeeper::new();
    assert_eq!(score.count_tetromino(), 10);
    assert_eq!(score.count_lines(0), 0);
    assert_eq!(score.count_tetromino(), 10);
    assert_eq!(score.count_lines(3), 400);

    assert_eq!(score.total(), 420);
    assert_eq!(score.lines(), 3);
    assert_eq!(score.pieces(), 2);
}

#[test]
fn test_score_never_decreases() {
    let mut score = ScoreKeeper::new();
    let mut last = 0;
    for n in [0, 1, 0, 4, 2, 0] {
        score.count_tetromino();
        score.count_lines(n);
        assert!(score.total() >= last);
        last = score.total();
    }
    assert_eq!(score.total(), 60 + 100 + 550 + 250);
}
