//! Built-in catalog tables.
//!
//! These are the shipped game tables; deployments can override the chest
//! and artifact catalogs with RON files through the loaders. Quest
//! rewards are a fixed 16-stage campaign and have no override path.

use economy_core::{
    ChestDefinition, Price, QuestDefinition, QuestReward, Rarity, RollRange, RollSpec,
    state::Currency,
};

/// The five shop chests.
pub fn builtin_chests() -> Vec<ChestDefinition> {
    fn chest(
        id: u32,
        name: &str,
        rarity: Rarity,
        price: Option<Price>,
        base: (i32, i32),
        bonus: (i32, i32),
    ) -> ChestDefinition {
        ChestDefinition {
            id,
            name: name.to_string(),
            rarity,
            price,
            roll: RollSpec::new(
                RollRange::new(base.0, base.1),
                RollRange::new(bonus.0, bonus.1),
            ),
        }
    }

    vec![
        chest(
            1,
            "Bronze Chest",
            Rarity::Common,
            Some(Price::new(Currency::Shards, 100)),
            (5, 15),
            (1, 3),
        ),
        chest(
            2,
            "Silver Chest",
            Rarity::Uncommon,
            Some(Price::new(Currency::Shards, 200)),
            (10, 25),
            (2, 5),
        ),
        chest(
            3,
            "Gold Chest",
            Rarity::Rare,
            Some(Price::new(Currency::Crystals, 2)),
            (20, 40),
            (5, 10),
        ),
        chest(
            4,
            "Mythic Chest",
            Rarity::Epic,
            Some(Price::new(Currency::Cores, 1)),
            (50, 80),
            (10, 20),
        ),
        chest(5, "Daily Chest", Rarity::Free, None, (1, 5), (0, 1)),
    ]
}

/// The 16-stage quest campaign, free and pro reward tracks.
pub fn builtin_quests() -> Vec<QuestDefinition> {
    fn quest(stage: u32, free: QuestReward, pro: QuestReward) -> QuestDefinition {
        QuestDefinition { stage, free, pro }
    }

    vec![
        quest(
            1,
            QuestReward::new(50, &[]),
            QuestReward::new(100, &["Wooden Sword"]),
        ),
        quest(
            2,
            QuestReward::new(100, &[]),
            QuestReward::new(200, &["Iron Shield"]),
        ),
        quest(
            3,
            QuestReward::new(150, &["Bronze Ring"]),
            QuestReward::new(300, &["Silver Ring"]),
        ),
        quest(
            4,
            QuestReward::new(200, &[]),
            QuestReward::new(400, &["Magic Staff"]),
        ),
        quest(
            5,
            QuestReward::new(250, &[]),
            QuestReward::new(500, &["Dragon Scale"]),
        ),
        quest(
            6,
            QuestReward::new(300, &["Hunter Bow"]),
            QuestReward::new(600, &["Elven Bow"]),
        ),
        quest(
            7,
            QuestReward::new(350, &[]),
            QuestReward::new(700, &["Rare Crystal"]),
        ),
        quest(
            8,
            QuestReward::new(400, &["Leather Armor"]),
            QuestReward::new(800, &["Steel Armor"]),
        ),
        quest(
            9,
            QuestReward::new(450, &[]),
            QuestReward::new(900, &["Fire Amulet"]),
        ),
        quest(
            10,
            QuestReward::new(500, &["Magic Scroll"]),
            QuestReward::new(1000, &["Ancient Scroll"]),
        ),
        quest(
            11,
            QuestReward::new(550, &[]),
            QuestReward::new(1100, &["Sacred Gem"]),
        ),
        quest(
            12,
            QuestReward::new(600, &["Silver Helmet"]),
            QuestReward::new(1200, &["Golden Helmet"]),
        ),
        quest(
            13,
            QuestReward::new(700, &[]),
            QuestReward::new(1400, &["Ice Crystal"]),
        ),
        quest(
            14,
            QuestReward::new(800, &["Wizard Cloak"]),
            QuestReward::new(1600, &["Enchanted Cloak"]),
        ),
        quest(
            15,
            QuestReward::new(900, &[]),
            QuestReward::new(1800, &["Phoenix Feather"]),
        ),
        quest(
            16,
            QuestReward::new(1000, &["Hero Crown"]),
            QuestReward::new(2000, &["Legendary Crown"]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_stages_in_order() {
        let quests = builtin_quests();
        assert_eq!(quests.len(), 16);
        for (idx, quest) in quests.iter().enumerate() {
            assert_eq!(quest.stage, idx as u32 + 1);
            // Pro track always pays double coins.
            assert_eq!(quest.pro.coins, quest.free.coins * 2);
        }
    }

    #[test]
    fn only_the_daily_chest_is_free() {
        let chests = builtin_chests();
        assert_eq!(chests.len(), 5);
        let free: Vec<_> = chests.iter().filter(|c| c.price.is_none()).collect();
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].name, "Daily Chest");
    }

    #[test]
    fn roll_bounds_are_well_formed() {
        for chest in builtin_chests() {
            assert!(chest.roll.base.lo <= chest.roll.base.hi);
            assert!(chest.roll.bonus.lo <= chest.roll.bonus.hi);
            assert!(chest.roll.base.lo >= 0);
            assert!(chest.roll.bonus.lo >= 0);
        }
    }
}
