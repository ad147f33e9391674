//! Integration tests for the volleyball scoreboard: set and match completion.

use match_scoreboard_web::logic::volleyball::is_set_won;
use match_scoreboard_web::{EventKind, PerSide, PlayStatus, Player, Side, Volleyball, VolleyballAction};

fn point(g: &mut Volleyball, side: Side) {
    g.apply(VolleyballAction::AddPoint { side }, None).unwrap();
}

/// Play rallies until the given score is reached, alternating so neither side runs away early.
fn play_to(g: &mut Volleyball, home: u32, away: u32) {
    let (mut h, mut a) = (0, 0);
    while h < home || a < away {
        if h < home && (h <= a || a >= away) {
            point(g, Side::Home);
            h += 1;
        } else {
            point(g, Side::Away);
            a += 1;
        }
    }
}

/// Win a set for `side` 25-23 (or 15-13 in the fifth).
fn win_set(g: &mut Volleyball, side: Side) {
    let (win, lose) = if g.current_set == 5 { (15, 13) } else { (25, 23) };
    match side {
        Side::Home => play_to(g, win, lose),
        Side::Away => play_to(g, lose, win),
    }
}

#[test]
fn set_condition() {
    assert!(is_set_won(1, 25, 23));
    assert!(!is_set_won(1, 25, 24));
    assert!(is_set_won(4, 27, 25));
    assert!(!is_set_won(4, 24, 20));
    assert!(is_set_won(5, 15, 13));
    assert!(!is_set_won(5, 14, 14));
    assert!(!is_set_won(5, 15, 14));
}

#[test]
fn first_set_won_25_23() {
    let mut g = Volleyball::new();
    play_to(&mut g, 24, 23);
    assert_eq!(g.current_set, 1);
    assert!(g.set_scores.is_empty());

    point(&mut g, Side::Home);

    assert_eq!(g.set_scores, vec![PerSide::new(25, 23)]);
    assert_eq!(g.sets_won, PerSide::new(1, 0));
    assert_eq!(g.score, PerSide::new(0, 0));
    assert_eq!(g.current_set, 2);
    assert_eq!(g.events.count(Side::Home, EventKind::SetWin), 1);
    assert_eq!(g.events.as_slice().last().unwrap().score, "25-23");
}

#[test]
fn no_set_without_two_point_margin() {
    let mut g = Volleyball::new();
    play_to(&mut g, 24, 24);
    point(&mut g, Side::Away);
    assert_eq!(g.current_set, 1);
    point(&mut g, Side::Home);
    point(&mut g, Side::Home);
    assert_eq!(g.current_set, 1);
    point(&mut g, Side::Home);
    assert_eq!(g.set_scores, vec![PerSide::new(27, 25)]);
}

#[test]
fn timeouts_reset_each_set() {
    let mut g = Volleyball::new();
    for _ in 0..3 {
        g.apply(VolleyballAction::UseTimeout { side: Side::Away }, None).unwrap();
    }
    assert_eq!(g.timeouts.away, 0);
    assert_eq!(g.events.count(Side::Away, EventKind::Timeout), 2);

    win_set(&mut g, Side::Home);
    assert_eq!(g.timeouts, PerSide::new(2, 2));
}

#[test]
fn deciding_set_goes_to_15() {
    let mut g = Volleyball::new();
    win_set(&mut g, Side::Home);
    win_set(&mut g, Side::Away);
    win_set(&mut g, Side::Home);
    win_set(&mut g, Side::Away);
    assert_eq!(g.current_set, 5);
    assert_eq!(g.status, PlayStatus::NotStarted);

    play_to(&mut g, 14, 14);
    assert_eq!(g.sets_won, PerSide::new(2, 2));
    point(&mut g, Side::Away);
    point(&mut g, Side::Away);

    assert_eq!(g.status, PlayStatus::Finished);
    assert_eq!(g.sets_won, PerSide::new(2, 3));
    assert_eq!(g.current_set, 5);
    assert_eq!(g.set_scores.last(), Some(&PerSide::new(14, 16)));
}

#[test]
fn match_ends_at_three_sets_without_advancing() {
    let mut g = Volleyball::new();
    g.apply(VolleyballAction::Start, None).unwrap();
    win_set(&mut g, Side::Away);
    win_set(&mut g, Side::Away);
    assert_eq!(g.status, PlayStatus::InProgress);
    assert_eq!(g.current_set, 3);

    win_set(&mut g, Side::Away);
    assert_eq!(g.status, PlayStatus::Finished);
    assert_eq!(g.sets_won, PerSide::new(0, 3));
    assert_eq!(g.current_set, 3);
    assert_eq!(g.score, PerSide::new(23, 25));
    assert_eq!(g.set_scores.len(), 3);
}

#[test]
fn counters_match_the_log() {
    let mut g = Volleyball::new();
    win_set(&mut g, Side::Home);
    play_to(&mut g, 7, 11);

    let replayed = g.replayed_score();
    assert_eq!(replayed, PerSide::new(7, 11));
    let sets = g.replayed_sets();
    assert_eq!((sets.home, sets.away), (1, 0));
}

#[test]
fn scorer_takes_service_except_on_set_point() {
    let mut g = Volleyball::new();
    g.apply(VolleyballAction::SetServing { side: Side::Away }, None).unwrap();
    point(&mut g, Side::Home);
    assert_eq!(g.serving, Side::Home);

    // 1-0 already, so this reaches 24-23.
    play_to(&mut g, 23, 23);
    g.apply(VolleyballAction::SetServing { side: Side::Away }, None).unwrap();
    point(&mut g, Side::Home);
    assert_eq!(g.current_set, 2);
    assert_eq!(g.serving, Side::Away);
}

#[test]
fn set_win_is_attributed_to_the_scorer() {
    let mut g = Volleyball::new();
    let hitter = Player::new(11, "Outside Hitter", 11);
    play_to(&mut g, 24, 20);
    g.apply(VolleyballAction::AddPoint { side: Side::Home }, Some(&hitter)).unwrap();

    let events = g.events.as_slice();
    let n = events.len();
    assert_eq!(events[n - 2].kind, EventKind::Point);
    assert_eq!(events[n - 1].kind, EventKind::SetWin);
    assert_eq!(events[n - 1].player.as_ref().map(|p| p.id), Some(11));
}
