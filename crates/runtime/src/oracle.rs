//! Catalog oracles backed by in-memory tables.
//!
//! The catalog store is read-only from the shop's point of view; rows
//! are held in maps keyed the way the service queries them. The default
//! catalog serves the built-in tables from `economy-content`, while
//! deployments can assemble one from loaded files.

use std::collections::HashMap;

use economy_core::{
    ArtifactDefinition, ArtifactOracle, ChestDefinition, ChestOracle, CraftArtifactDefinition,
    QuestDefinition, QuestOracle, WeaponDefinition, WeaponOracle,
};

/// One catalog serving every table the shop reads.
pub struct ShopCatalog {
    chests: HashMap<u32, ChestDefinition>,
    artifacts: HashMap<u32, ArtifactDefinition>,
    craft_pool: Vec<CraftArtifactDefinition>,
    weapons: HashMap<u32, WeaponDefinition>,
    quests: HashMap<u32, QuestDefinition>,
}

impl ShopCatalog {
    /// Empty catalog; populate with the `add_*` methods.
    pub fn new() -> Self {
        Self {
            chests: HashMap::new(),
            artifacts: HashMap::new(),
            craft_pool: Vec::new(),
            weapons: HashMap::new(),
            quests: HashMap::new(),
        }
    }

    /// Catalog preloaded with the built-in chest and quest tables.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for chest in economy_content::builtin_chests() {
            catalog.add_chest(chest);
        }
        for quest in economy_content::builtin_quests() {
            catalog.add_quest(quest);
        }
        catalog
    }

    pub fn add_chest(&mut self, chest: ChestDefinition) {
        self.chests.insert(chest.id, chest);
    }

    pub fn add_artifact(&mut self, artifact: ArtifactDefinition) {
        self.artifacts.insert(artifact.id, artifact);
    }

    pub fn add_craft_artifact(&mut self, row: CraftArtifactDefinition) {
        self.craft_pool.push(row);
    }

    pub fn add_weapon(&mut self, weapon: WeaponDefinition) {
        self.weapons.insert(weapon.id, weapon);
    }

    pub fn add_quest(&mut self, quest: QuestDefinition) {
        self.quests.insert(quest.stage, quest);
    }
}

impl Default for ShopCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ChestOracle for ShopCatalog {
    fn chest(&self, id: u32) -> Option<ChestDefinition> {
        self.chests.get(&id).cloned()
    }

    fn all_chests(&self) -> Vec<ChestDefinition> {
        let mut chests: Vec<_> = self.chests.values().cloned().collect();
        chests.sort_by_key(|chest| chest.id);
        chests
    }
}

impl ArtifactOracle for ShopCatalog {
    fn artifact(&self, id: u32) -> Option<ArtifactDefinition> {
        self.artifacts.get(&id).cloned()
    }

    fn all_artifacts(&self) -> Vec<ArtifactDefinition> {
        let mut artifacts: Vec<_> = self.artifacts.values().cloned().collect();
        artifacts.sort_by_key(|artifact| artifact.id);
        artifacts
    }

    fn craft_pool(&self) -> Vec<CraftArtifactDefinition> {
        self.craft_pool.clone()
    }
}

impl WeaponOracle for ShopCatalog {
    fn weapon(&self, id: u32) -> Option<WeaponDefinition> {
        self.weapons.get(&id).cloned()
    }

    fn all_weapons(&self) -> Vec<WeaponDefinition> {
        let mut weapons: Vec<_> = self.weapons.values().cloned().collect();
        weapons.sort_by_key(|weapon| weapon.id);
        weapons
    }
}

impl QuestOracle for ShopCatalog {
    fn quest(&self, stage: u32) -> Option<QuestDefinition> {
        self.quests.get(&stage).cloned()
    }

    fn all_quests(&self) -> Vec<QuestDefinition> {
        let mut quests: Vec<_> = self.quests.values().cloned().collect();
        quests.sort_by_key(|quest| quest.stage);
        quests
    }
}
