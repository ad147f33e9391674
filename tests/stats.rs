//! Integration tests for player/team statistics and leaders.

use match_scoreboard_web::logic::stats::{leaders, player_stats, team_totals};
use match_scoreboard_web::{
    BasketballAction, EventKind, MatchSetup, Player, Scoreboard, ScoreboardAction, Side, Sport,
    TeamSetup,
};

fn setup() -> MatchSetup {
    MatchSetup::new(
        Sport::Basketball,
        TeamSetup::new(
            "Eagles",
            vec![
                Player::new(1, "Guard", 4).captain(),
                Player::new(2, "Center", 15),
                Player::new(3, "Forward", 7),
            ],
        ),
        TeamSetup::new("Wolves", vec![Player::new(1, "Wing", 11)]),
    )
}

fn attributed(sb: &mut Scoreboard, action: BasketballAction, player_id: u64) {
    sb.request_player(ScoreboardAction::Basketball(action)).unwrap();
    sb.confirm_player(player_id).unwrap();
}

#[test]
fn counts_per_player_respect_side() {
    let mut sb = Scoreboard::new(setup());
    attributed(&mut sb, BasketballAction::AddPoints { side: Side::Home, points: 2 }, 1);
    attributed(&mut sb, BasketballAction::AddPoints { side: Side::Home, points: 3 }, 1);
    attributed(&mut sb, BasketballAction::AddFoul { side: Side::Away }, 1);
    attributed(
        &mut sb,
        BasketballAction::AddStat { kind: EventKind::Rebound, side: Side::Home },
        2,
    );

    let lines = player_stats(&sb.setup, sb.events());
    assert_eq!(lines.len(), 4);
    let guard = &lines[0];
    assert_eq!(guard.side, Side::Home);
    assert_eq!(guard.get("points"), 2);
    assert_eq!(guard.get("fouls"), 0);
    assert_eq!(lines[1].get("rebounds"), 1);
    // Same id on the other roster is a different player.
    let wing = &lines[3];
    assert_eq!(wing.side, Side::Away);
    assert_eq!(wing.get("fouls"), 1);
    assert_eq!(wing.get("points"), 0);
}

#[test]
fn team_totals_include_unattributed_events() {
    let mut sb = Scoreboard::new(setup());
    sb.apply(ScoreboardAction::Basketball(BasketballAction::AddFoul { side: Side::Home }))
        .unwrap();
    attributed(&mut sb, BasketballAction::AddFoul { side: Side::Home }, 3);

    let totals = team_totals(Sport::Basketball, sb.events());
    let fouls = totals.home.iter().find(|s| s.key == "fouls").unwrap();
    assert_eq!(fouls.count, 2);
    assert!(totals.away.iter().all(|s| s.count == 0));
}

#[test]
fn leader_ties_go_to_roster_order() {
    let mut sb = Scoreboard::new(setup());
    attributed(&mut sb, BasketballAction::AddStat { kind: EventKind::Steal, side: Side::Home }, 3);
    attributed(&mut sb, BasketballAction::AddStat { kind: EventKind::Steal, side: Side::Home }, 2);
    attributed(&mut sb, BasketballAction::AddPoints { side: Side::Home, points: 2 }, 3);
    attributed(&mut sb, BasketballAction::AddPoints { side: Side::Home, points: 2 }, 3);

    let lines = player_stats(&sb.setup, sb.events());
    let board = leaders(Sport::Basketball, &lines);
    assert_eq!(board.len(), 6);

    let steals = board.iter().find(|l| l.key == "steals").unwrap();
    assert_eq!(steals.player.id, 2);
    assert_eq!(steals.count, 1);

    let points = board.iter().find(|l| l.key == "points").unwrap();
    assert_eq!(points.player.name, "Forward");
    assert_eq!(points.count, 2);

    // Nobody has a block: first roster player is shown with zero.
    let blocks = board.iter().find(|l| l.key == "blocks").unwrap();
    assert_eq!(blocks.player.name, "Guard");
    assert_eq!(blocks.count, 0);
}

#[test]
fn football_cards_field_counts_both_colours() {
    let mut setup = setup();
    setup.sport = Sport::Football;
    let mut sb = Scoreboard::new(setup);
    for kind in [EventKind::YellowCard, EventKind::RedCard, EventKind::Goal] {
        sb.request_player(ScoreboardAction::Football(
            match_scoreboard_web::FootballAction::AddEvent { kind, side: Side::Home },
        ))
        .unwrap();
        sb.confirm_player(2).unwrap();
    }

    let stats = sb.stats();
    let keys: Vec<&str> = stats.fields.iter().map(|f| f.key).collect();
    assert_eq!(keys, ["goals", "assists", "cards", "minutes"]);
    let center = stats.players.iter().find(|l| l.player.id == 2 && l.side == Side::Home).unwrap();
    assert_eq!(center.get("cards"), 2);
    assert_eq!(center.get("goals"), 1);
    assert_eq!(center.get("minutes"), 0);
}
