//! Shop orchestration.
//!
//! [`ShopService`] glues the pure rules to the catalog oracles and the
//! player store: every operation loads the records it needs, runs the
//! core rule, persists the outcome, and publishes the refreshed record
//! on the event bus. Operations take an explicit [`UserId`]; there is no
//! ambient session.
//!
//! Apart from quest claims, writes are last-write-wins (see the store
//! seam); the service checks affordability against the snapshot it
//! loaded, not against the store at commit time.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use economy_core::{
    ArtifactInstance, ArtifactKind, ArtifactOracle, ArtifactView, BonusTotals, ChestOracle,
    ClaimError, ClaimGrant, Currency, EconomyConfig, EconomyError, Equipment, Mutation, PcgRng,
    Price,
    ProgressionError, QuestOracle, QuestTier, RngOracle, SlotIndex, StatKey, StatVector,
    UserProgress, WeaponOracle, aggregate_bonus, apply_claim, evaluate_claim, level_up_artifact,
    level_up_hero, level_up_stat, roll_artifact_stats, roll_seed, unlock_artifact,
};
use tracing::{info, warn};

use crate::error::{Result, RuntimeError};
use crate::events::{EventBus, ShopEvent};
use crate::oracle::ShopCatalog;
use crate::store::{LeaderboardRow, PlayerStore};
use crate::types::{ItemKey, UserId};

/// Outcome of a chest open.
#[derive(Clone, Debug)]
pub struct ChestOpening {
    pub key: ItemKey,
    pub artifact: ArtifactInstance,
    /// What the open charged; `None` for free chests.
    pub price: Option<Price>,
}

/// Outcome of a shop purchase.
#[derive(Clone, Debug)]
pub struct Purchase {
    pub key: ItemKey,
    pub artifact: ArtifactInstance,
    pub price: Option<Price>,
}

/// Outcome of selling an inventory item.
#[derive(Clone, Debug)]
pub struct Sale {
    pub artifact: ArtifactInstance,
    /// Shards credited.
    pub credited: u64,
}

/// The game-shop service.
pub struct ShopService {
    store: Arc<dyn PlayerStore>,
    catalog: Arc<ShopCatalog>,
    rng: Arc<dyn RngOracle>,
    events: EventBus,
    config: EconomyConfig,
    /// Entropy base for loot rolls; fixed per service instance.
    base_seed: u64,
    /// Per-roll counter mixed into the base seed.
    roll_nonce: AtomicU32,
}

impl ShopService {
    pub fn new(store: Arc<dyn PlayerStore>, catalog: Arc<ShopCatalog>) -> Self {
        Self {
            store,
            catalog,
            rng: Arc::new(PcgRng),
            events: EventBus::new(),
            config: EconomyConfig::new(),
            base_seed: rand::random(),
            roll_nonce: AtomicU32::new(0),
        }
    }

    /// Fixes the roll seed, making loot deterministic. Test hook.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    pub fn with_config(mut self, config: EconomyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    /// The bus this service publishes record updates on.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    fn next_seed(&self) -> u64 {
        let nonce = self.roll_nonce.fetch_add(1, Ordering::Relaxed);
        roll_seed(self.base_seed, nonce)
    }

    // ----- reads -----

    pub fn progress(&self, uid: &UserId) -> Result<UserProgress> {
        self.store
            .load_progress(uid)?
            .ok_or_else(|| RuntimeError::not_found("user", uid))
    }

    pub fn inventory(&self, uid: &UserId) -> Result<Vec<(ItemKey, ArtifactInstance)>> {
        Ok(self.store.load_inventory(uid)?)
    }

    pub fn equipment(&self, uid: &UserId) -> Result<Equipment> {
        self.store
            .load_equipment(uid)?
            .ok_or_else(|| RuntimeError::not_found("user", uid))
    }

    /// Additive stat bonus from the artifact menu and the equip grid.
    ///
    /// Menu slot N and equip slot N describe the same artifact, so one
    /// view per slot feeds the aggregator.
    pub fn hero_bonus(&self, uid: &UserId) -> Result<BonusTotals> {
        let progress = self.progress(uid)?;
        let equipment = self.equipment(uid)?;

        let views: Vec<ArtifactView> = SlotIndex::all()
            .map(|idx| {
                let menu = progress.artifact_slots.get(idx);
                let occupant = &equipment.slot(idx).occupant;
                ArtifactView {
                    unlocked: menu.unlocked,
                    level: menu.level,
                    equipped: occupant.is_some(),
                    stats: occupant.as_ref().and_then(|item| item.stats),
                }
            })
            .collect();

        Ok(aggregate_bonus(&views))
    }

    /// Top players by raw stat value, descending.
    pub fn leaderboard(&self, stat: StatKey, limit: usize) -> Result<Vec<LeaderboardRow>> {
        Ok(self.store.top_by_stat(stat, limit)?)
    }

    // ----- account -----

    /// Creates the full record set for a new player.
    pub fn create_hero(&self, uid: &UserId, player_name: &str) -> Result<UserProgress> {
        let progress = UserProgress::new_hero(player_name);
        self.store.create_player(uid, &progress)?;
        info!(uid = %uid, player_name, "hero created");
        self.events.publish(ShopEvent::ProgressChanged {
            uid: uid.clone(),
            progress: progress.clone(),
        });
        Ok(progress)
    }

    // ----- progression -----

    pub fn level_up_stat(&self, uid: &UserId, stat: StatKey) -> Result<Mutation> {
        self.apply_mutation(uid, "level_up_stat", |progress| {
            level_up_stat(progress, stat)
        })
    }

    pub fn level_up_artifact(&self, uid: &UserId, slot: SlotIndex) -> Result<Mutation> {
        self.apply_mutation(uid, "level_up_artifact", |progress| {
            level_up_artifact(progress, slot)
        })
    }

    pub fn unlock_artifact(&self, uid: &UserId, slot: SlotIndex) -> Result<Mutation> {
        self.apply_mutation(uid, "unlock_artifact", |progress| {
            unlock_artifact(progress, slot)
        })
    }

    pub fn level_up_hero(&self, uid: &UserId) -> Result<Mutation> {
        self.apply_mutation(uid, "level_up_hero", level_up_hero)
    }

    /// Shared load / mutate / merge / publish path for the four
    /// progression mutators.
    fn apply_mutation<F>(&self, uid: &UserId, op: &'static str, mutate: F) -> Result<Mutation>
    where
        F: FnOnce(&UserProgress) -> std::result::Result<Mutation, ProgressionError>,
    {
        let progress = self.progress(uid)?;
        let mutation = match mutate(&progress) {
            Ok(mutation) => mutation,
            Err(err) => {
                warn!(
                    uid = %uid,
                    op,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    %err,
                    "progression rejected"
                );
                return Err(err.into());
            }
        };

        self.store
            .merge_progress(uid, &mutation.next, mutation.changed)?;
        info!(uid = %uid, op, spent = mutation.spent, "progression applied");
        self.events.publish(ShopEvent::ProgressChanged {
            uid: uid.clone(),
            progress: mutation.next.clone(),
        });
        Ok(mutation)
    }

    // ----- shop -----

    /// Opens a chest: charges its price, draws one craft artifact from
    /// the pool, rolls its stats, and stores it in the inventory.
    pub fn open_chest(&self, uid: &UserId, chest_id: u32) -> Result<ChestOpening> {
        let chest = self
            .catalog
            .chest(chest_id)
            .ok_or_else(|| RuntimeError::not_found("chest", chest_id))?;

        let progress = self.progress(uid)?;
        if let Some(price) = chest.price {
            require_funds(&progress, price)?;
        }

        let pool = self.catalog.craft_pool();
        if pool.is_empty() {
            return Err(RuntimeError::CatalogEmpty("craft_artifacts"));
        }

        let row = &pool[self.rng.pick(self.next_seed(), pool.len())];
        let stats = roll_artifact_stats(self.rng.as_ref(), self.next_seed(), &chest.roll);

        let artifact = ArtifactInstance {
            catalog_id: row.id,
            name: row.name.clone(),
            kind: ArtifactKind::Craft,
            stats: Some(stats),
            level: row.base_level.max(1),
        };
        let key = ItemKey::mint(row.id);

        self.store.purchase_item(uid, chest.price, &key, &artifact)?;
        info!(uid = %uid, chest = %chest.name, artifact = %artifact.name, "chest opened");
        self.publish_inventory(uid)?;
        self.publish_progress(uid)?;

        Ok(ChestOpening {
            key,
            artifact,
            price: chest.price,
        })
    }

    /// Buys a main-catalog artifact at its rarity price.
    pub fn buy_artifact(&self, uid: &UserId, artifact_id: u32) -> Result<Purchase> {
        let def = self
            .catalog
            .artifact(artifact_id)
            .ok_or_else(|| RuntimeError::not_found("artifact", artifact_id))?;

        let price = def.price();
        let artifact = ArtifactInstance {
            catalog_id: def.id,
            name: def.name.clone(),
            kind: ArtifactKind::Main,
            stats: Some(def.stats),
            level: def.base_level.max(1),
        };
        self.purchase(uid, price, artifact)
    }

    /// Buys a weapon; cost follows the raw-number SS/SC rule.
    pub fn buy_weapon(&self, uid: &UserId, weapon_id: u32) -> Result<Purchase> {
        let def = self
            .catalog
            .weapon(weapon_id)
            .ok_or_else(|| RuntimeError::not_found("weapon", weapon_id))?;

        let stats = StatVector {
            attack: def.attack,
            defense: def.defense,
            ..StatVector::default()
        };
        let artifact = ArtifactInstance {
            catalog_id: def.id,
            name: def.name.clone(),
            kind: ArtifactKind::Weapon,
            stats: Some(stats),
            level: 1,
        };
        self.purchase(uid, Some(def.price()), artifact)
    }

    fn purchase(
        &self,
        uid: &UserId,
        price: Option<Price>,
        artifact: ArtifactInstance,
    ) -> Result<Purchase> {
        let progress = self.progress(uid)?;
        if let Some(price) = price {
            require_funds(&progress, price)?;
        }

        let key = ItemKey::mint(artifact.catalog_id);
        self.store.purchase_item(uid, price, &key, &artifact)?;
        info!(uid = %uid, artifact = %artifact.name, "item purchased");
        self.publish_inventory(uid)?;
        self.publish_progress(uid)?;

        Ok(Purchase {
            key,
            artifact,
            price,
        })
    }

    /// Sells an inventory item for `level * 100` shards.
    pub fn sell_artifact(&self, uid: &UserId, key: &ItemKey) -> Result<Sale> {
        let artifact = self
            .store
            .remove_item(uid, key)?
            .ok_or_else(|| RuntimeError::not_found("item", key))?;

        let credited = self.config.sell_price(artifact.level);
        self.store
            .increment_balance(uid, Currency::Shards, credited as i64)?;
        info!(uid = %uid, artifact = %artifact.name, credited, "item sold");
        self.publish_inventory(uid)?;
        self.publish_progress(uid)?;

        Ok(Sale { artifact, credited })
    }

    // ----- equipment -----

    /// Moves an inventory item into the first unlocked empty equip slot.
    pub fn equip_artifact(&self, uid: &UserId, key: &ItemKey) -> Result<SlotIndex> {
        let mut equipment = self.equipment(uid)?;
        let artifact = self
            .store
            .get_item(uid, key)?
            .ok_or_else(|| RuntimeError::not_found("item", key))?;

        let slot = match equipment.equip(artifact) {
            Ok(slot) => slot,
            Err(err) => {
                warn!(
                    uid = %uid,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    %err,
                    "equip rejected"
                );
                return Err(err.into());
            }
        };
        // The instance lives in exactly one place; the grid owns it now.
        self.store.remove_item(uid, key)?;
        self.store.save_equipment(uid, &equipment)?;
        info!(uid = %uid, %slot, "artifact equipped");
        self.publish_inventory(uid)?;
        self.events.publish(ShopEvent::EquipmentChanged {
            uid: uid.clone(),
            equipment,
        });
        Ok(slot)
    }

    /// Returns a slot's occupant to the inventory under a fresh key.
    pub fn unequip_artifact(&self, uid: &UserId, slot: SlotIndex) -> Result<ItemKey> {
        let mut equipment = self.equipment(uid)?;
        let artifact = match equipment.unequip(slot) {
            Ok(artifact) => artifact,
            Err(err) => {
                warn!(
                    uid = %uid,
                    %slot,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    %err,
                    "unequip rejected"
                );
                return Err(err.into());
            }
        };

        let key = ItemKey::mint(artifact.catalog_id);
        self.store.insert_item(uid, &key, &artifact)?;
        self.store.save_equipment(uid, &equipment)?;
        info!(uid = %uid, %slot, "artifact unequipped");
        self.publish_inventory(uid)?;
        self.events.publish(ShopEvent::EquipmentChanged {
            uid: uid.clone(),
            equipment,
        });
        Ok(key)
    }

    /// Paid unlock of a locked equip slot.
    pub fn unlock_slot(&self, uid: &UserId, slot: SlotIndex) -> Result<()> {
        let mut equipment = self.equipment(uid)?;
        if let Err(err) = equipment.unlock(slot) {
            warn!(
                uid = %uid,
                %slot,
                code = err.error_code(),
                severity = err.severity().as_str(),
                %err,
                "slot unlock rejected"
            );
            return Err(err.into());
        }

        let progress = self.progress(uid)?;
        let cost = self.config.unlock_slot_cost;
        require_funds(&progress, Price::new(Currency::Shards, cost))?;

        self.store
            .increment_balance(uid, Currency::Shards, -(cost as i64))?;
        self.store.save_equipment(uid, &equipment)?;
        info!(uid = %uid, %slot, cost, "equip slot unlocked");
        self.publish_progress(uid)?;
        self.events.publish(ShopEvent::EquipmentChanged {
            uid: uid.clone(),
            equipment,
        });
        Ok(())
    }

    // ----- quests -----

    /// Claims a quest reward inside the store's transaction primitive.
    ///
    /// The guard and the grant application run against the records as
    /// currently stored; two concurrent claims of one key cannot both
    /// succeed.
    pub fn claim_quest(&self, uid: &UserId, stage: u32, tier: QuestTier) -> Result<ClaimGrant> {
        let quest = self
            .catalog
            .quest(stage)
            .ok_or(RuntimeError::Claim(ClaimError::UnknownStage { stage }))?;

        let result = self
            .store
            .claim_transaction(uid, &mut |progress, ledger| {
                let grant = evaluate_claim(ledger, progress, &quest, tier)?;
                apply_claim(ledger, progress, &grant);
                Ok(grant)
            });

        let grant = match result {
            Ok(grant) => grant,
            Err(err) => {
                let err = RuntimeError::from(err);
                warn!(
                    uid = %uid,
                    stage,
                    ?tier,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    %err,
                    "claim rejected"
                );
                return Err(err);
            }
        };

        info!(uid = %uid, key = %grant.key, coins = grant.coins, "quest claimed");
        self.events.publish(ShopEvent::ClaimRecorded {
            uid: uid.clone(),
            key: grant.key,
            coins: grant.coins,
        });
        self.publish_progress(uid)?;
        Ok(grant)
    }

    // ----- publishing -----

    fn publish_progress(&self, uid: &UserId) -> Result<()> {
        let progress = self.progress(uid)?;
        self.events.publish(ShopEvent::ProgressChanged {
            uid: uid.clone(),
            progress,
        });
        Ok(())
    }

    fn publish_inventory(&self, uid: &UserId) -> Result<()> {
        let items = self.store.load_inventory(uid)?;
        self.events.publish(ShopEvent::InventoryChanged {
            uid: uid.clone(),
            items,
        });
        Ok(())
    }
}

/// Snapshot affordability check. The store deducts blindly, so this is
/// the only gate; a concurrent spend between check and commit clamps at
/// zero instead of failing.
fn require_funds(progress: &UserProgress, price: Price) -> Result<()> {
    let balance = progress.wallet.balance(price.currency);
    if balance < price.amount {
        return Err(ProgressionError::InsufficientFunds {
            currency: price.currency,
            cost: price.amount,
            balance,
        }
        .into());
    }
    Ok(())
}
