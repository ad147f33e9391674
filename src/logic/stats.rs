//! Player and team statistics derived from the event log. Recomputed on every request.

use crate::models::{Event, EventKind, MatchSetup, PerSide, PlayerId, PlayerRef, Side, Sport};
use serde::Serialize;

/// One column of the stats table and the event kinds it counts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct StatField {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip)]
    pub kinds: &'static [EventKind],
}

const FOOTBALL_FIELDS: &[StatField] = &[
    StatField { key: "goals", label: "Goals", kinds: &[EventKind::Goal] },
    StatField { key: "assists", label: "Assists", kinds: &[EventKind::Assist] },
    StatField { key: "cards", label: "Cards", kinds: &[EventKind::YellowCard, EventKind::RedCard] },
    // No event records playing time, so this column stays at 0.
    StatField { key: "minutes", label: "Minutes", kinds: &[] },
];

const BASKETBALL_FIELDS: &[StatField] = &[
    StatField { key: "points", label: "Points", kinds: &[EventKind::Points] },
    StatField { key: "rebounds", label: "Rebounds", kinds: &[EventKind::Rebound] },
    StatField { key: "assists", label: "Assists", kinds: &[EventKind::Assist] },
    StatField { key: "steals", label: "Steals", kinds: &[EventKind::Steal] },
    StatField { key: "blocks", label: "Blocks", kinds: &[EventKind::Block] },
    StatField { key: "fouls", label: "Fouls", kinds: &[EventKind::Foul] },
];

const VOLLEYBALL_FIELDS: &[StatField] = &[
    StatField { key: "points", label: "Points", kinds: &[EventKind::Point] },
    StatField { key: "serves", label: "Serves", kinds: &[EventKind::Serve] },
    StatField { key: "blocks", label: "Blocks", kinds: &[EventKind::Block] },
    StatField { key: "spikes", label: "Spikes", kinds: &[EventKind::Spike] },
    StatField { key: "digs", label: "Digs", kinds: &[EventKind::Dig] },
];

/// Stats columns shown for a sport, in display order.
pub fn stat_fields(sport: Sport) -> &'static [StatField] {
    match sport {
        Sport::Football => FOOTBALL_FIELDS,
        Sport::Basketball => BASKETBALL_FIELDS,
        Sport::Volleyball => VOLLEYBALL_FIELDS,
    }
}

/// One field's count, keyed by `StatField::key`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StatCount {
    pub key: &'static str,
    pub count: usize,
}

/// Counts for one roster player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerStatLine {
    pub player: PlayerRef,
    pub side: Side,
    pub stats: Vec<StatCount>,
}

impl PlayerStatLine {
    /// Count for a field key; 0 for a key the sport does not have.
    pub fn get(&self, key: &str) -> usize {
        self.stats.iter().find(|s| s.key == key).map_or(0, |s| s.count)
    }
}

/// Best player for one field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Leader {
    pub key: &'static str,
    pub label: &'static str,
    pub player: PlayerRef,
    pub side: Side,
    pub count: usize,
}

/// Everything the stats view shows for one match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchStats {
    pub fields: &'static [StatField],
    pub players: Vec<PlayerStatLine>,
    pub teams: PerSide<Vec<StatCount>>,
    pub leaders: Vec<Leader>,
}

/// Events of the field's kinds attributed to this player on this side.
pub fn player_count(events: &[Event], side: Side, player_id: PlayerId, field: &StatField) -> usize {
    events
        .iter()
        .filter(|e| e.side == side && field.kinds.contains(&e.kind))
        .filter(|e| e.player.as_ref().is_some_and(|p| p.id == player_id))
        .count()
}

/// Per-player lines, home roster first, each roster in its own order.
pub fn player_stats(setup: &MatchSetup, events: &[Event]) -> Vec<PlayerStatLine> {
    let fields = stat_fields(setup.sport);
    [Side::Home, Side::Away]
        .into_iter()
        .flat_map(move |side| {
            setup.team(side).roster.iter().map(move |p| PlayerStatLine {
                player: p.to_ref(),
                side,
                stats: fields
                    .iter()
                    .map(|f| StatCount {
                        key: f.key,
                        count: player_count(events, side, p.id, f),
                    })
                    .collect(),
            })
        })
        .collect()
}

/// Per-side totals, attributed or not.
pub fn team_totals(sport: Sport, events: &[Event]) -> PerSide<Vec<StatCount>> {
    let totals = |side: Side| -> Vec<StatCount> {
        stat_fields(sport)
            .iter()
            .map(|f| StatCount {
                key: f.key,
                count: events
                    .iter()
                    .filter(|e| e.side == side && f.kinds.contains(&e.kind))
                    .count(),
            })
            .collect()
    };
    PerSide::new(totals(Side::Home), totals(Side::Away))
}

/// Top player per field. The sort is stable, so ties go to whoever comes first in the rosters.
pub fn leaders(sport: Sport, lines: &[PlayerStatLine]) -> Vec<Leader> {
    stat_fields(sport)
        .iter()
        .filter_map(|f| {
            let mut ranked: Vec<&PlayerStatLine> = lines.iter().collect();
            ranked.sort_by(|a, b| b.get(f.key).cmp(&a.get(f.key)));
            ranked.first().map(|line| Leader {
                key: f.key,
                label: f.label,
                player: line.player.clone(),
                side: line.side,
                count: line.get(f.key),
            })
        })
        .collect()
}

/// Player lines, team totals and leaders in one pass over the log.
pub fn match_stats(setup: &MatchSetup, events: &[Event]) -> MatchStats {
    let players = player_stats(setup, events);
    let leaders = leaders(setup.sport, &players);
    MatchStats {
        fields: stat_fields(setup.sport),
        teams: team_totals(setup.sport, events),
        players,
        leaders,
    }
}
