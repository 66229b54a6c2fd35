//! In-memory PlayerStore implementation for tests and local runs.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use economy_core::{
    ArtifactInstance, ClaimGrant, ClaimLedger, Currency, Equipment, Price, ProgressFields,
    StatKey, UserProgress,
};

use crate::store::traits::{ClaimGuard, LeaderboardRow, PlayerStore, TxnError};
use crate::store::{StoreError, StoreResult};
use crate::types::{ItemKey, UserId};

/// Everything stored for one player.
#[derive(Clone, Debug)]
struct PlayerRecord {
    progress: UserProgress,
    inventory: BTreeMap<ItemKey, ArtifactInstance>,
    equipment: Equipment,
    claims: ClaimLedger,
    /// `artifact-reward-<stage>-<idx>` -> artifact name.
    grants: BTreeMap<String, String>,
}

impl PlayerRecord {
    fn new(progress: UserProgress) -> Self {
        Self {
            progress,
            inventory: BTreeMap::new(),
            equipment: Equipment::starting(),
            claims: ClaimLedger::new(),
            grants: BTreeMap::new(),
        }
    }
}

/// In-memory implementation of [`PlayerStore`].
///
/// The claim transaction holds the write lock across the whole guard,
/// which gives it the atomic check-then-act the contract requires.
#[derive(Default)]
pub struct InMemoryPlayerStore {
    players: RwLock<HashMap<UserId, PlayerRecord>>,
}

impl InMemoryPlayerStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<UserId, PlayerRecord>>> {
        self.players.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<UserId, PlayerRecord>>> {
        self.players.write().map_err(|_| StoreError::LockPoisoned)
    }
}

fn record_mut<'a>(
    players: &'a mut HashMap<UserId, PlayerRecord>,
    uid: &UserId,
) -> StoreResult<&'a mut PlayerRecord> {
    players.get_mut(uid).ok_or_else(|| StoreError::MissingUser {
        uid: uid.clone(),
    })
}

impl PlayerStore for InMemoryPlayerStore {
    fn create_player(&self, uid: &UserId, progress: &UserProgress) -> StoreResult<()> {
        let mut players = self.write()?;
        players.insert(uid.clone(), PlayerRecord::new(progress.clone()));
        Ok(())
    }

    fn load_progress(&self, uid: &UserId) -> StoreResult<Option<UserProgress>> {
        let players = self.read()?;
        Ok(players.get(uid).map(|record| record.progress.clone()))
    }

    fn upsert_progress(&self, uid: &UserId, progress: &UserProgress) -> StoreResult<()> {
        let mut players = self.write()?;
        match players.get_mut(uid) {
            Some(record) => record.progress = progress.clone(),
            None => {
                players.insert(uid.clone(), PlayerRecord::new(progress.clone()));
            }
        }
        Ok(())
    }

    fn merge_progress(
        &self,
        uid: &UserId,
        next: &UserProgress,
        fields: ProgressFields,
    ) -> StoreResult<()> {
        let mut players = self.write()?;
        let stored = &mut record_mut(&mut players, uid)?.progress;

        if fields.contains(ProgressFields::WALLET) {
            stored.wallet = next.wallet;
        }
        if fields.contains(ProgressFields::STATS) {
            stored.attack = next.attack;
            stored.defense = next.defense;
            stored.health = next.health;
        }
        if fields.contains(ProgressFields::HERO_LEVEL) {
            stored.hero_level = next.hero_level;
        }
        if fields.contains(ProgressFields::STAGE) {
            stored.stage = next.stage;
        }
        if fields.contains(ProgressFields::ARTIFACT_SLOTS) {
            stored.artifact_slots = next.artifact_slots;
        }
        if fields.contains(ProgressFields::PRO) {
            stored.pro = next.pro;
        }
        Ok(())
    }

    fn increment_balance(&self, uid: &UserId, currency: Currency, delta: i64) -> StoreResult<u64> {
        let mut players = self.write()?;
        let wallet = &mut record_mut(&mut players, uid)?.progress.wallet;

        if delta >= 0 {
            wallet.credit(currency, delta as u64);
        } else {
            // Clamp at zero: balances are non-negative by invariant.
            let debit = wallet.balance(currency).min(delta.unsigned_abs());
            let _ = wallet.debit(currency, debit);
        }
        Ok(wallet.balance(currency))
    }

    fn load_inventory(&self, uid: &UserId) -> StoreResult<Vec<(ItemKey, ArtifactInstance)>> {
        let players = self.read()?;
        Ok(players
            .get(uid)
            .map(|record| {
                record
                    .inventory
                    .iter()
                    .map(|(key, item)| (key.clone(), item.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn get_item(&self, uid: &UserId, key: &ItemKey) -> StoreResult<Option<ArtifactInstance>> {
        let players = self.read()?;
        Ok(players
            .get(uid)
            .and_then(|record| record.inventory.get(key).cloned()))
    }

    fn insert_item(
        &self,
        uid: &UserId,
        key: &ItemKey,
        artifact: &ArtifactInstance,
    ) -> StoreResult<()> {
        let mut players = self.write()?;
        let record = record_mut(&mut players, uid)?;
        record.inventory.insert(key.clone(), artifact.clone());
        Ok(())
    }

    fn remove_item(&self, uid: &UserId, key: &ItemKey) -> StoreResult<Option<ArtifactInstance>> {
        let mut players = self.write()?;
        let record = record_mut(&mut players, uid)?;
        Ok(record.inventory.remove(key))
    }

    fn purchase_item(
        &self,
        uid: &UserId,
        charge: Option<Price>,
        key: &ItemKey,
        artifact: &ArtifactInstance,
    ) -> StoreResult<()> {
        let mut players = self.write()?;
        let record = record_mut(&mut players, uid)?;

        if let Some(price) = charge {
            let balance = record.progress.wallet.balance(price.currency);
            let debit = balance.min(price.amount);
            let _ = record.progress.wallet.debit(price.currency, debit);
        }
        record.inventory.insert(key.clone(), artifact.clone());
        Ok(())
    }

    fn load_equipment(&self, uid: &UserId) -> StoreResult<Option<Equipment>> {
        let players = self.read()?;
        Ok(players.get(uid).map(|record| record.equipment.clone()))
    }

    fn save_equipment(&self, uid: &UserId, equipment: &Equipment) -> StoreResult<()> {
        let mut players = self.write()?;
        let record = record_mut(&mut players, uid)?;
        record.equipment = equipment.clone();
        Ok(())
    }

    fn load_claims(&self, uid: &UserId) -> StoreResult<ClaimLedger> {
        let players = self.read()?;
        Ok(players
            .get(uid)
            .map(|record| record.claims.clone())
            .unwrap_or_default())
    }

    fn load_grants(&self, uid: &UserId) -> StoreResult<Vec<(String, String)>> {
        let players = self.read()?;
        Ok(players
            .get(uid)
            .map(|record| {
                record
                    .grants
                    .iter()
                    .map(|(key, name)| (key.clone(), name.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn claim_transaction(
        &self,
        uid: &UserId,
        guard: ClaimGuard<'_>,
    ) -> Result<ClaimGrant, TxnError> {
        let mut players = self.write()?;
        let record = record_mut(&mut players, uid)?;

        // Run the guard against working copies; commit only on success so
        // a rejected claim leaves every record untouched.
        let mut progress = record.progress.clone();
        let mut claims = record.claims.clone();
        let grant = guard(&mut progress, &mut claims)?;

        record.progress = progress;
        record.claims = claims;
        for artifact in &grant.artifacts {
            record
                .grants
                .insert(artifact.record_key.clone(), artifact.name.clone());
        }
        Ok(grant)
    }

    fn top_by_stat(&self, stat: StatKey, limit: usize) -> StoreResult<Vec<LeaderboardRow>> {
        let players = self.read()?;
        let mut rows: Vec<LeaderboardRow> = players
            .iter()
            .map(|(uid, record)| LeaderboardRow {
                uid: uid.clone(),
                player_name: record.progress.player_name.clone(),
                value: record.progress.stat(stat).value,
            })
            .collect();
        rows.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.uid.cmp(&b.uid)));
        rows.truncate(limit);
        Ok(rows)
    }
}
