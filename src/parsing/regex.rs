use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Header lines accept both the ASCII and the full-width colon.
    pub static ref RE_PLAYER: Regex = Regex::new(r"Player\s*[:：]\s*(\S+)").unwrap();
    pub static ref RE_TARGET: Regex = Regex::new(r"Target\s*[:：]\s*(\S+)").unwrap();

    pub static ref RE_TIMESTAMP: Regex = Regex::new(r"\[(\d{2}:\d{2}:\d{2})\]").unwrap();
    pub static ref RE_DAMAGE: Regex = Regex::new(r"dealt\s*(\d+)\s*damage").unwrap();
}

/// Literal marker present anywhere on a line that dealt a critical hit.
pub const CRIT_MARKER: &str = "critical hit";
