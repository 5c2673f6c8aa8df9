//! Snapshot wire shape and migration.
//!
//! A snapshot is a JSON document:
//!
//! ```json
//! {
//!   "teams": [{"id": 1, "name": "Team 1", "hp": 100, "maxHp": 100, "xp": 0, "sprite": ""}],
//!   "selection": {"attackerId": null, "defenderId": null},
//!   "log": [{"timestamp": 0, "message": "..."}],
//!   "settings": {"sfx": true, "playlistUrl": ""}
//! }
//! ```
//!
//! Import is tolerant: older snapshots spelled the selection key `pick`,
//! stored log entries as bare strings, and omitted fields that later
//! versions added. Migration coerces every team field to a safe default
//! and clamps numeric fields into valid ranges instead of rejecting the
//! file - only a missing `teams` sequence (or unparseable JSON) is a
//! `ValidationError`.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::{
    EventLog, GameState, LogEntry, SelectionState, Settings, Team, TeamId, TeamRegistry,
};

/// Default for a missing or invalid `hp` field.
pub const DEFAULT_HP: i64 = 50;
/// Default for a missing or invalid `maxHp` field.
pub const DEFAULT_MAX_HP: i64 = 50;
/// Valid import range for `hp`.
pub const HP_RANGE: (i64, i64) = (0, 999);
/// Valid import range for `maxHp`.
pub const MAX_HP_RANGE: (i64, i64) = (10, 999);

/// A snapshot that cannot be coerced into a valid `GameState`.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The document is not valid JSON.
    #[error("snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document is not a JSON object.
    #[error("snapshot is not a JSON object")]
    NotAnObject,

    /// The document has no `teams` array.
    #[error("snapshot has no teams array")]
    MissingTeams,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamRecord<'a> {
    id: u32,
    name: &'a str,
    hp: i32,
    max_hp: i32,
    xp: u32,
    sprite: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectionRecord {
    attacker_id: Option<u32>,
    defender_id: Option<u32>,
}

#[derive(Serialize)]
struct SnapshotDoc<'a> {
    teams: Vec<TeamRecord<'a>>,
    selection: SelectionRecord,
    log: &'a EventLog,
    settings: &'a Settings,
}

/// Serialize a state to the snapshot document.
pub fn to_json(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&document(state))
}

/// Serialize a state to a pretty-printed snapshot, for user export.
pub fn to_json_pretty(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&document(state))
}

fn document(state: &GameState) -> impl Serialize + '_ {
    SnapshotDoc {
        teams: state
            .teams
            .iter()
            .map(|t| TeamRecord {
                id: t.id.raw(),
                name: &t.name,
                hp: t.hp(),
                max_hp: t.max_hp(),
                xp: t.xp,
                sprite: &t.sprite,
            })
            .collect(),
        selection: SelectionRecord {
            attacker_id: state.selection.attacker().map(TeamId::raw),
            defender_id: state.selection.target().map(TeamId::raw),
        },
        log: &state.log,
        settings: &state.settings,
    }
}

/// Parse and migrate a snapshot document into a valid `GameState`.
pub fn from_json(text: &str) -> Result<GameState, ValidationError> {
    let doc: Value = serde_json::from_str(text)?;
    migrate(&doc)
}

/// Coerce a parsed snapshot into a valid `GameState`.
///
/// This is the single migration point: every field has an explicit
/// default, numeric fields are clamped into valid ranges, and the team
/// invariant `0 <= hp <= max_hp` holds on the way out.
pub fn migrate(doc: &Value) -> Result<GameState, ValidationError> {
    let obj = doc.as_object().ok_or(ValidationError::NotAnObject)?;

    let records = obj
        .get("teams")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingTeams)?;

    let mut teams = TeamRegistry::new();
    for (position, record) in records.iter().enumerate() {
        teams.add(migrate_team(record, position, &teams));
    }

    let selection = migrate_selection(obj.get("selection").or_else(|| obj.get("pick")), &teams);
    let log = migrate_log(obj.get("log"));
    let settings = migrate_settings(obj.get("settings"));

    Ok(GameState::from_parts(teams, selection, log, settings))
}

fn migrate_team(record: &Value, position: usize, existing: &TeamRegistry) -> Team {
    let max_hp = int_field(record, "maxHp")
        .unwrap_or(DEFAULT_MAX_HP)
        .clamp(MAX_HP_RANGE.0, MAX_HP_RANGE.1) as i32;

    let hp = int_field(record, "hp")
        .unwrap_or(DEFAULT_HP)
        .clamp(HP_RANGE.0, HP_RANGE.1)
        .min(i64::from(max_hp)) as i32;

    let name = record
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Team {}", position + 1));

    let sprite = record
        .get("sprite")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_owned();

    let xp = int_field(record, "xp")
        .unwrap_or(0)
        .clamp(0, i64::from(u32::MAX)) as u32;

    // Prefer the stored id; fall back to the roster position, bumping
    // past collisions so ids stay unique.
    let mut id = int_field(record, "id")
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(position as u32 + 1);
    while existing.contains(TeamId::new(id)) {
        id += 1;
    }

    Team::with_stats(TeamId::new(id), name, hp, max_hp, xp, sprite)
}

fn migrate_selection(value: Option<&Value>, teams: &TeamRegistry) -> SelectionState {
    let known = |id: Option<TeamId>| id.filter(|&id| teams.contains(id));

    let attacker = known(id_field(value, &["attackerId"]));
    let target = known(id_field(value, &["defenderId", "targetId"]));

    SelectionState::from_parts(attacker, target)
}

fn migrate_log(value: Option<&Value>) -> EventLog {
    let mut log = EventLog::new();
    let Some(entries) = value.and_then(Value::as_array) else {
        return log;
    };

    for entry in entries {
        match entry {
            // Legacy snapshots stored plain strings; keep timestamp 0 so
            // re-imports are stable.
            Value::String(message) => log.push(LogEntry {
                timestamp: 0,
                message: message.clone(),
            }),
            Value::Object(map) => {
                let timestamp = map
                    .get("timestamp")
                    .and_then(coerce_int)
                    .and_then(|v| u64::try_from(v).ok())
                    .unwrap_or(0);
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_owned();
                log.push(LogEntry { timestamp, message });
            }
            _ => {}
        }
    }
    log
}

fn migrate_settings(value: Option<&Value>) -> Settings {
    let mut settings = Settings::default();
    let Some(obj) = value.and_then(Value::as_object) else {
        return settings;
    };

    // Field-wise, like teams: a wrong-typed field keeps its default
    // without dropping the rest of the object.
    for (key, field) in obj {
        match key.as_str() {
            "sfx" => {
                if let Some(sfx) = field.as_bool() {
                    settings.sfx = sfx;
                }
            }
            "playlistUrl" => {
                if let Some(url) = field.as_str() {
                    settings.playlist_url = url.to_owned();
                }
            }
            _ => {
                settings.extra.insert(key.clone(), field.clone());
            }
        }
    }
    settings
}

fn int_field(record: &Value, key: &str) -> Option<i64> {
    record.get(key).and_then(coerce_int)
}

fn id_field(value: Option<&Value>, keys: &[&str]) -> Option<TeamId> {
    let obj = value?.as_object()?;
    let raw = keys.iter().find_map(|k| obj.get(*k))?;
    let id = coerce_int(raw).and_then(|v| u32::try_from(v).ok())?;
    Some(TeamId::new(id))
}

/// Accept integer or float JSON numbers; anything else is invalid.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}
