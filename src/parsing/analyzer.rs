use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::AnalyzeError;
use crate::models::catalog::ABILITIES;
use crate::models::{AbilitySummary, AnalysisReport, CastingTimeBreakdown, ScanContext};
use crate::parsing::checklist::evaluate_checklist;
use crate::parsing::line_parser::{parse_event_line, parse_player_name, parse_target_name};

/// Combatant and target names are only looked for near the top of the log.
const HEADER_SCAN_LINES: usize = 100;

/// Analyze a combat log. `.json` files are treated as structured input,
/// everything else as line-oriented raw text. Each call runs over fresh
/// state.
pub fn analyze_file(path: &Path) -> Result<AnalysisReport, AnalyzeError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => analyze_json_file(path),
        _ => analyze_text_file(path),
    }
}

/// Never-crash wrapper around [`analyze_file`] for callers that cannot
/// handle errors: any failure is logged and replaced by the fixed mock
/// report. Such callers can detect the fallback only by recognizing the
/// mock's literal values, so prefer [`analyze_file`] where possible.
pub fn analyze_file_or_mock(path: &Path) -> AnalysisReport {
    match analyze_file(path) {
        Ok(report) => report,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "analysis failed, falling back to mock report");
            AnalysisReport::mock()
        }
    }
}

fn analyze_json_file(path: &Path) -> Result<AnalysisReport, AnalyzeError> {
    let content = fs::read_to_string(path)?;
    analyze_json(&content)
}

/// Structured handler. A finished report is recognized by its two signature
/// keys and passed through unchanged; no other structured grammar is
/// defined yet, so anything else is a format error.
pub fn analyze_json(content: &str) -> Result<AnalysisReport, AnalyzeError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if value.get("player").is_some() && value.get("abilities").is_some() {
        return Ok(serde_json::from_value(value)?);
    }
    Err(AnalyzeError::Format(
        "expected a finished report carrying `player` and `abilities` keys".to_string(),
    ))
}

fn analyze_text_file(path: &Path) -> Result<AnalysisReport, AnalyzeError> {
    let content = fs::read_to_string(path)?;
    Ok(analyze_text(&content))
}

/// Raw-text handler: header scan, event scan, aggregation, checklist.
pub fn analyze_text(content: &str) -> AnalysisReport {
    let mut ctx = ScanContext::new();

    for line in content.lines().take(HEADER_SCAN_LINES) {
        if ctx.player.is_none() {
            ctx.player = parse_player_name(line);
        }
        if ctx.boss.is_none() {
            ctx.boss = parse_target_name(line);
        }
    }

    for line in content.lines() {
        let Some(event) = parse_event_line(line) else {
            continue;
        };
        ctx.record_timestamp(event.timestamp);

        let Some(idx) = event.ability else {
            continue;
        };
        let is_damage = ABILITIES[idx].is_damage;
        let acc = &mut ctx.accumulators[idx];
        acc.casts += 1;

        // Damage, hits and crits only accrue to damage-flagged abilities,
        // and a crit is only counted when a damage amount was extracted.
        if is_damage {
            if let Some(amount) = event.damage {
                acc.damage += amount;
                acc.hits += 1;
                if event.crit {
                    acc.crits += 1;
                }
            }
        }
    }

    aggregate(ctx)
}

fn aggregate(ctx: ScanContext) -> AnalysisReport {
    let duration = ctx.duration_seconds();

    let mut abilities = Vec::new();
    let mut total_damage: u64 = 0;
    let mut total_hits: u32 = 0;
    let mut total_crits: u32 = 0;

    for (def, acc) in (0..ctx.accumulators.len()).map(|idx| ctx.ability(idx)) {
        if acc.casts == 0 {
            continue;
        }
        abilities.push(AbilitySummary {
            name: def.name.to_string(),
            casts: acc.casts,
            damage: acc.damage,
            dps: if duration > 0.0 { acc.damage as f64 / duration } else { 0.0 },
            crit_rate: if acc.hits > 0 { acc.crits as f64 / acc.hits as f64 } else { 0.0 },
        });
        if def.is_damage {
            total_damage += acc.damage;
            total_hits += acc.hits;
            total_crits += acc.crits;
        }
    }

    // Active time is currently taken to be the whole fight: the breakdown
    // carries the idle-time fields without measuring inter-cast gaps.
    let active_time = duration;
    let casting_time = CastingTimeBreakdown {
        total_time: duration,
        casting_time: active_time,
        idle_time: duration - active_time,
        efficiency: if duration > 0.0 { active_time / duration } else { 0.0 },
    };

    let checklist = evaluate_checklist(&ctx, duration, casting_time.efficiency);

    debug!(
        duration,
        total_damage,
        abilities = abilities.len(),
        "finished combat log scan"
    );

    AnalysisReport {
        player: ctx.player.unwrap_or_else(|| "unknown player".to_string()),
        boss: ctx.boss.unwrap_or_else(|| "unknown target".to_string()),
        duration,
        dps: if duration > 0.0 { total_damage as f64 / duration } else { 0.0 },
        total_damage,
        crit_rate: if total_hits > 0 { total_crits as f64 / total_hits as f64 } else { 0.0 },
        abilities,
        casting_time,
        checklist,
    }
}
