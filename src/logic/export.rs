//! CSV export of a match event log.

use crate::models::Event;
use serde::Serialize;

const HEADER: [&str; 9] = [
    "seq", "match_time", "timestamp", "side", "kind", "player", "number", "points", "score",
];

/// Field order must match `HEADER`.
#[derive(Serialize)]
struct EventRow<'a> {
    seq: u32,
    match_time: String,
    timestamp: String,
    side: String,
    kind: &'static str,
    player: &'a str,
    number: Option<u32>,
    points: Option<i64>,
    score: &'a str,
}

impl<'a> From<&'a Event> for EventRow<'a> {
    fn from(e: &'a Event) -> Self {
        EventRow {
            seq: e.seq,
            match_time: e.match_time.map(|t| t.to_string()).unwrap_or_default(),
            timestamp: e.timestamp.to_rfc3339(),
            side: e.side.to_string(),
            kind: e.kind.as_str(),
            player: e.player.as_ref().map_or("", |p| p.name.as_str()),
            number: e.player.as_ref().map(|p| p.number),
            points: e.points,
            score: &e.score,
        }
    }
}

/// Events in log order, one row each, with a header line (also for an empty log).
pub fn events_to_csv(events: &[Event]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for event in events {
        writer.serialize(EventRow::from(event))?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}
