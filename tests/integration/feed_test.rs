//! Integration tests for the scoreboard adapter

use crate::fakes::{final_body, live_fragile_body};
use courtside::feed::{EspnScoreboard, ShotSplit, Side};

#[test]
fn test_live_body_parses_to_snapshot() {
    let board = EspnScoreboard::parse(&live_fragile_body()).unwrap();
    assert_eq!(board.live.len(), 1);
    assert!(board.completed.is_empty());

    let game = &board.live[0];
    assert_eq!(game.label(), "BOS @ LAL");
    assert_eq!(game.away.name, "Boston Celtics");
    assert_eq!(game.away.three_pointers, ShotSplit::new(10, 18));
    assert_eq!(game.lead(Side::Away), 10);
}

#[test]
fn test_final_body_parses_to_completed() {
    let board = EspnScoreboard::parse(&final_body(101, 108)).unwrap();
    assert!(board.live.is_empty());
    assert_eq!(board.completed.len(), 1);
    assert_eq!(board.completed[0].event_id, "401");
    assert_eq!(board.completed[0].home_score, 108);
}
