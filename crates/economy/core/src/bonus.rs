//! Artifact bonus aggregation.

use crate::state::{BonusTotals, StatVector};

/// Health granted per artifact level.
const HEALTH_PER_LEVEL: i32 = 5;

/// What the aggregator needs to know about one artifact.
///
/// Flattened view combining a menu slot's unlock state with the equip
/// grid and the instance's optional stat payload.
#[derive(Clone, Copy, Debug)]
pub struct ArtifactView {
    pub unlocked: bool,
    pub level: u32,
    pub equipped: bool,
    pub stats: Option<StatVector>,
}

/// Sums artifact contributions into an additive bonus vector.
///
/// Every unlocked artifact grants `level` attack, `level` defense and
/// `level * 5` health whether or not it is equipped - unlocked-but-stored
/// artifacts keep their passive bonus, matching live behavior. Equipped
/// artifacts with an explicit payload add its raw attack/defense/health
/// on top (the `*_bonus` payload fields do not feed this vector).
pub fn aggregate_bonus<'a, I>(artifacts: I) -> BonusTotals
where
    I: IntoIterator<Item = &'a ArtifactView>,
{
    let mut totals = BonusTotals::default();

    for view in artifacts {
        if !view.unlocked {
            continue;
        }

        let level = view.level.max(1) as i32;
        totals.attack += level;
        totals.defense += level;
        totals.health += level * HEALTH_PER_LEVEL;

        if view.equipped {
            if let Some(stats) = view.stats {
                totals.attack += stats.attack;
                totals.defense += stats.defense;
                totals.health += stats.health;
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(unlocked: bool, level: u32, equipped: bool, stats: Option<StatVector>) -> ArtifactView {
        ArtifactView {
            unlocked,
            level,
            equipped,
            stats,
        }
    }

    #[test]
    fn locked_artifacts_contribute_nothing() {
        let artifacts = [view(false, 9, true, Some(StatVector::default()))];
        assert_eq!(aggregate_bonus(&artifacts), BonusTotals::default());
    }

    #[test]
    fn unlocked_levels_sum_even_when_stored() {
        let artifacts = [view(true, 2, false, None), view(true, 3, false, None)];
        let totals = aggregate_bonus(&artifacts);
        assert_eq!(totals.attack, 5);
        assert_eq!(totals.defense, 5);
        assert_eq!(totals.health, 25);
    }

    #[test]
    fn equipped_payload_adds_raw_base_fields_only() {
        let payload = StatVector {
            attack: 7,
            defense: 4,
            health: 12,
            attack_bonus: 100,
            defense_bonus: 100,
            health_bonus: 100,
        };
        let artifacts = [view(true, 1, true, Some(payload))];
        let totals = aggregate_bonus(&artifacts);
        assert_eq!(totals.attack, 1 + 7);
        assert_eq!(totals.defense, 1 + 4);
        assert_eq!(totals.health, 5 + 12);
    }

    #[test]
    fn stored_payload_is_ignored() {
        let payload = StatVector {
            attack: 7,
            ..StatVector::default()
        };
        let artifacts = [view(true, 1, false, Some(payload))];
        assert_eq!(aggregate_bonus(&artifacts).attack, 1);
    }
}
