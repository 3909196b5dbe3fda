/// A single entry in the ability catalog. Defined once at startup, never
/// mutated.
#[derive(Debug, Clone, Copy)]
pub struct AbilityDefinition {
    pub name: &'static str,
    /// Substring token that recognizes the ability in a log line.
    pub token: &'static str,
    /// Damage-dealing abilities feed the DPS/crit aggregates; utility and
    /// healing abilities only count casts.
    pub is_damage: bool,
}

/// The tracked combatant's ability catalog, in match-precedence order.
///
/// Matching is first-wins, one ability per line, so the broad "attack" token
/// of the melee swing must sit after every named strike it could shadow.
/// The order of this slice is a contract, not a convenience.
pub static ABILITIES: &[AbilityDefinition] = &[
    AbilityDefinition { name: "Judgment", token: "Judgment", is_damage: true },
    AbilityDefinition { name: "Crusader Strike", token: "Crusader Strike", is_damage: true },
    AbilityDefinition { name: "Consecration", token: "Consecration", is_damage: true },
    AbilityDefinition { name: "Divine Storm", token: "Divine Storm", is_damage: true },
    AbilityDefinition { name: "Melee Swing", token: "attack", is_damage: true },
    AbilityDefinition { name: "Holy Light", token: "Holy Light", is_damage: false },
    AbilityDefinition { name: "Flash of Light", token: "Flash Heal", is_damage: false },
    AbilityDefinition { name: "Divine Shield", token: "Divine Shield", is_damage: false },
];

/// Index of the first catalog entry whose token appears in the line.
pub fn match_ability(line: &str) -> Option<usize> {
    ABILITIES.iter().position(|def| line.contains(def.token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn melee_token_is_ordered_after_named_strikes() {
        let melee_idx = ABILITIES.iter().position(|d| d.name == "Melee Swing").unwrap();
        for named in ["Judgment", "Crusader Strike", "Consecration", "Divine Storm"] {
            let idx = ABILITIES.iter().position(|d| d.name == named).unwrap();
            assert!(idx < melee_idx, "{} must be matched before the melee swing", named);
        }
    }

    #[test]
    fn specific_ability_beats_generic_attack_token() {
        let idx = match_ability("Hero attacks with Crusader Strike, dealt 500 damage").unwrap();
        assert_eq!(ABILITIES[idx].name, "Crusader Strike");
    }

    #[test]
    fn plain_swing_falls_through_to_melee() {
        let idx = match_ability("Hero attacks Dragon, dealt 42 damage").unwrap();
        assert_eq!(ABILITIES[idx].name, "Melee Swing");
    }
}
