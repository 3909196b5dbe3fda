use chrono::NaiveTime;

use crate::models::catalog;
use crate::parsing::regex::*;
use crate::utils::time::parse_clock;

/// What one event line yielded: a timestamp, plus whatever the catalog and
/// the damage/crit patterns recognized on it.
#[derive(Debug, PartialEq)]
pub struct EventLine {
    pub timestamp: NaiveTime,
    /// Index into the catalog of the first ability whose token matched.
    pub ability: Option<usize>,
    pub damage: Option<u64>,
    pub crit: bool,
}

/// Parse a single event line. Lines without a recognizable `[HH:MM:SS]`
/// timestamp carry no events and return `None`.
pub fn parse_event_line(line: &str) -> Option<EventLine> {
    let caps = RE_TIMESTAMP.captures(line)?;
    let timestamp = parse_clock(&caps[1])?;

    let damage = RE_DAMAGE
        .captures(line)
        .map(|caps| caps[1].parse::<u64>().unwrap_or(0));

    Some(EventLine {
        timestamp,
        ability: catalog::match_ability(line),
        damage,
        crit: line.contains(CRIT_MARKER),
    })
}

pub fn parse_player_name(line: &str) -> Option<String> {
    RE_PLAYER.captures(line).map(|caps| caps[1].to_string())
}

pub fn parse_target_name(line: &str) -> Option<String> {
    RE_TARGET.captures(line).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_line_without_timestamp_is_ignored() {
        assert_eq!(parse_event_line("Hero casts Judgment, dealt 1000 damage"), None);
    }

    #[test]
    fn event_line_extracts_timestamp_ability_damage_and_crit() {
        let event =
            parse_event_line("[00:00:10] Hero casts Judgment, dealt 1200 damage, critical hit")
                .unwrap();
        assert_eq!(event.timestamp, NaiveTime::from_hms_opt(0, 0, 10).unwrap());
        assert_eq!(catalog::ABILITIES[event.ability.unwrap()].name, "Judgment");
        assert_eq!(event.damage, Some(1200));
        assert!(event.crit);
    }

    #[test]
    fn timestamp_with_invalid_clock_value_is_ignored() {
        // Matches the bracket pattern but is not a valid time of day.
        assert_eq!(parse_event_line("[77:00:00] Hero casts Judgment"), None);
    }

    #[test]
    fn header_lines_accept_both_colon_forms() {
        assert_eq!(parse_player_name("Player: Hero").as_deref(), Some("Hero"));
        assert_eq!(parse_player_name("Player： Hero").as_deref(), Some("Hero"));
        assert_eq!(parse_target_name("Target: Dragon").as_deref(), Some("Dragon"));
    }
}
