//! Integration tests for the basketball scoreboard.

use match_scoreboard_web::{
    Basketball, BasketballAction, ClockTime, EventKind, PlayStatus, Player, ScoreboardError, Side,
    StepDirection,
};

fn game() -> Basketball {
    Basketball::new(ClockTime::from_mins(10))
}

fn assert_score_matches_log(g: &Basketball) {
    let replayed = g.replayed_score();
    assert_eq!(replayed.home, i64::from(g.score.home));
    assert_eq!(replayed.away, i64::from(g.score.away));
}

#[test]
fn points_accumulate_and_match_the_log() {
    let mut g = game();
    for (side, points) in [(Side::Home, 2), (Side::Away, 3), (Side::Home, 1), (Side::Home, 3)] {
        g.apply(BasketballAction::AddPoints { side, points }, None).unwrap();
    }
    assert_eq!(g.score.home, 6);
    assert_eq!(g.score.away, 3);
    assert_score_matches_log(&g);

    let last = g.events.as_slice().last().unwrap();
    assert_eq!(last.kind, EventKind::Points);
    assert_eq!(last.points, Some(3));
    assert_eq!(last.score, "3-3 -> 6-3");
}

#[test]
fn zero_points_are_rejected() {
    let mut g = game();
    let err = g
        .apply(BasketballAction::AddPoints { side: Side::Home, points: 0 }, None)
        .unwrap_err();
    assert_eq!(err, ScoreboardError::InvalidPoints(0));
    assert!(g.events.is_empty());
}

#[test]
fn points_past_the_score_limit_are_rejected() {
    let mut g = game();
    g.apply(BasketballAction::AddPoints { side: Side::Home, points: 3 }, None).unwrap();

    let err = g
        .apply(BasketballAction::AddPoints { side: Side::Home, points: u32::MAX }, None)
        .unwrap_err();
    assert!(matches!(err, ScoreboardError::OutOfRange { max: 999, .. }));
    assert_eq!(g.score.home, 3);
    assert_eq!(g.events.len(), 1);

    g.apply(BasketballAction::AddPoints { side: Side::Home, points: 1 }, None).unwrap();
    assert_eq!(g.score.home, 4);
    assert_score_matches_log(&g);
}

#[test]
fn timeouts_never_go_negative() {
    let mut g = game();
    for _ in 0..4 {
        g.apply(BasketballAction::UseTimeout { side: Side::Home }, None).unwrap();
    }
    assert_eq!(g.timeouts.home, 0);
    assert_eq!(g.events.len(), 4);

    g.apply(BasketballAction::UseTimeout { side: Side::Home }, None).unwrap();
    assert_eq!(g.timeouts.home, 0);
    assert_eq!(g.events.len(), 4);
    assert_eq!(g.timeouts.away, 4);
}

#[test]
fn fouls_have_no_limit() {
    let mut g = game();
    let p = Player::new(23, "Forward", 23);
    for _ in 0..7 {
        g.apply(BasketballAction::AddFoul { side: Side::Away }, Some(&p)).unwrap();
    }
    assert_eq!(g.fouls.away, 7);
    assert_eq!(g.events.count(Side::Away, EventKind::Foul), 7);
}

#[test]
fn direct_score_change_logs_the_delta() {
    let mut g = game();
    g.apply(BasketballAction::AddPoints { side: Side::Home, points: 3 }, None).unwrap();
    g.apply(BasketballAction::SetScore { side: Side::Home, score: 10 }, None).unwrap();
    g.apply(BasketballAction::EnterScore { side: Side::Home, input: "8".into() }, None)
        .unwrap();

    assert_eq!(g.score.home, 8);
    let deltas: Vec<_> = g
        .events
        .iter()
        .filter(|e| e.kind == EventKind::ScoreChange)
        .map(|e| e.points.unwrap())
        .collect();
    assert_eq!(deltas, vec![7, -2]);
    assert_score_matches_log(&g);
}

#[test]
fn unchanged_score_logs_nothing() {
    let mut g = game();
    g.apply(BasketballAction::SetScore { side: Side::Away, score: 0 }, None).unwrap();
    assert!(g.events.is_empty());
}

#[test]
fn invalid_score_entry_is_rejected_without_change() {
    let mut g = game();
    g.apply(BasketballAction::AddPoints { side: Side::Away, points: 2 }, None).unwrap();

    let err = g
        .apply(BasketballAction::EnterScore { side: Side::Away, input: "lots".into() }, None)
        .unwrap_err();
    assert!(matches!(err, ScoreboardError::NotANumber(_)));
    let err = g
        .apply(BasketballAction::SetScore { side: Side::Away, score: -4 }, None)
        .unwrap_err();
    assert!(matches!(err, ScoreboardError::OutOfRange { .. }));

    assert_eq!(g.score.away, 2);
    assert_eq!(g.events.len(), 1);
}

#[test]
fn stepper_stops_at_zero() {
    let mut g = game();
    let down = BasketballAction::StepScore { side: Side::Home, direction: StepDirection::Down };
    g.apply(down.clone(), None).unwrap();
    assert_eq!(g.score.home, 0);
    assert!(g.events.is_empty());

    g.apply(BasketballAction::StepScore { side: Side::Home, direction: StepDirection::Up }, None)
        .unwrap();
    g.apply(down, None).unwrap();
    assert_eq!(g.score.home, 0);
    assert_eq!(g.events.len(), 2);
    assert_score_matches_log(&g);
}

#[test]
fn quarter_advance_resets_the_clock() {
    let mut g = game();
    g.apply(BasketballAction::Start, None).unwrap();
    assert_eq!(g.status, PlayStatus::InProgress);
    g.clock.toggle();
    g.clock.tick();
    assert_eq!(g.clock.current.to_string(), "09:59");

    g.apply(BasketballAction::NextQuarter, None).unwrap();
    assert_eq!(g.quarter, 2);
    assert_eq!(g.clock.current.to_string(), "10:00");
    assert!(!g.clock.running);

    g.apply(BasketballAction::Finish, None).unwrap();
    g.clock.toggle();
    assert_eq!(g.clock.tick(), None);
}

#[test]
fn stat_events_do_not_touch_the_score() {
    let mut g = game();
    g.apply(BasketballAction::AddStat { kind: EventKind::Rebound, side: Side::Home }, None)
        .unwrap();
    assert_eq!(g.score.home, 0);
    assert_eq!(g.events.len(), 1);

    let err = g
        .apply(BasketballAction::AddStat { kind: EventKind::Goal, side: Side::Home }, None)
        .unwrap_err();
    assert_eq!(err, ScoreboardError::UnsupportedEvent("goal"));
}
