//! Quest-claim flows, including the concurrency guarantee.

use std::sync::Arc;

use economy_core::{ClaimError, Currency, QuestTier};
use shop_runtime::{
    InMemoryPlayerStore, PlayerStore, RuntimeError, ShopCatalog, ShopEvent, ShopService, Topic,
    UserId,
};

fn service() -> (Arc<ShopService>, Arc<InMemoryPlayerStore>) {
    let store = Arc::new(InMemoryPlayerStore::new());
    let service = Arc::new(ShopService::new(
        store.clone(),
        Arc::new(ShopCatalog::builtin()),
    ));
    (service, store)
}

/// A hero who has beaten `stage` on the easy track.
fn hero_at_stage(
    service: &ShopService,
    store: &InMemoryPlayerStore,
    uid: &str,
    stage: u32,
) -> UserId {
    let uid = UserId::from(uid);
    service.create_hero(&uid, "Quester").unwrap();
    let mut progress = service.progress(&uid).unwrap();
    progress.stage.easy = stage;
    store.upsert_progress(&uid, &progress).unwrap();
    uid
}

fn shards(service: &ShopService, uid: &UserId) -> u64 {
    service
        .progress(uid)
        .unwrap()
        .wallet
        .balance(Currency::Shards)
}

#[test]
fn claim_credits_coins_and_records_artifacts() {
    let (service, store) = service();
    let uid = hero_at_stage(&service, &store, "u1", 3);

    let grant = service.claim_quest(&uid, 3, QuestTier::Free).unwrap();
    assert_eq!(grant.coins, 150);
    assert_eq!(grant.artifacts.len(), 1);
    assert_eq!(grant.artifacts[0].record_key, "artifact-reward-3-0");
    assert_eq!(grant.artifacts[0].name, "Bronze Ring");

    assert_eq!(shards(&service, &uid), 1150);
    let grants = store.load_grants(&uid).unwrap();
    assert_eq!(
        grants,
        vec![("artifact-reward-3-0".to_string(), "Bronze Ring".to_string())]
    );
}

#[test]
fn second_claim_of_one_key_is_rejected() {
    let (service, store) = service();
    let uid = hero_at_stage(&service, &store, "u1", 1);

    service.claim_quest(&uid, 1, QuestTier::Free).unwrap();
    let err = service.claim_quest(&uid, 1, QuestTier::Free).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Claim(ClaimError::AlreadyClaimed { .. })
    ));
    // Exactly one payout.
    assert_eq!(shards(&service, &uid), 1050);
}

#[test]
fn locked_stage_rejects_without_payout() {
    let (service, store) = service();
    let uid = hero_at_stage(&service, &store, "u1", 1);

    let err = service.claim_quest(&uid, 2, QuestTier::Free).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Claim(ClaimError::StageLocked {
            stage: 2,
            reached: 1
        })
    ));
    assert_eq!(shards(&service, &uid), 1000);
    assert!(store.load_claims(&uid).unwrap().iter().next().is_none());
}

#[test]
fn stage_gate_uses_the_best_difficulty_track() {
    let (service, store) = service();
    let uid = hero_at_stage(&service, &store, "u1", 1);

    let mut progress = service.progress(&uid).unwrap();
    progress.stage.hard = 4;
    store.upsert_progress(&uid, &progress).unwrap();

    service.claim_quest(&uid, 4, QuestTier::Free).unwrap();
}

#[test]
fn pro_track_needs_the_subscription_flag() {
    let (service, store) = service();
    let uid = hero_at_stage(&service, &store, "u1", 3);

    let err = service.claim_quest(&uid, 3, QuestTier::Pro).unwrap_err();
    assert!(matches!(err, RuntimeError::Claim(ClaimError::ProRequired)));
    assert_eq!(shards(&service, &uid), 1000);

    let mut progress = service.progress(&uid).unwrap();
    progress.pro = true;
    store.upsert_progress(&uid, &progress).unwrap();

    let grant = service.claim_quest(&uid, 3, QuestTier::Pro).unwrap();
    assert_eq!(grant.coins, 300);
    assert_eq!(grant.artifacts[0].name, "Silver Ring");
}

#[test]
fn free_and_pro_tracks_claim_independently() {
    let (service, store) = service();
    let uid = hero_at_stage(&service, &store, "u1", 1);
    let mut progress = service.progress(&uid).unwrap();
    progress.pro = true;
    store.upsert_progress(&uid, &progress).unwrap();

    service.claim_quest(&uid, 1, QuestTier::Free).unwrap();
    service.claim_quest(&uid, 1, QuestTier::Pro).unwrap();
    // 50 free + 100 pro.
    assert_eq!(shards(&service, &uid), 1150);
}

#[test]
fn undefined_stage_is_an_unknown_stage_error() {
    let (service, store) = service();
    let uid = hero_at_stage(&service, &store, "u1", 16);

    let err = service.claim_quest(&uid, 99, QuestTier::Free).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Claim(ClaimError::UnknownStage { stage: 99 })
    ));
}

#[test]
fn successful_claims_publish_on_the_claims_topic() {
    let (service, store) = service();
    let mut rx = service.events().subscribe(Topic::Claims);
    let uid = hero_at_stage(&service, &store, "u1", 1);

    service.claim_quest(&uid, 1, QuestTier::Free).unwrap();
    let ShopEvent::ClaimRecorded { coins, .. } = rx.try_recv().unwrap() else {
        panic!("wrong event on claims topic");
    };
    assert_eq!(coins, 50);
}

#[test]
fn concurrent_claims_of_one_key_grant_exactly_once() {
    let (service, store) = service();
    let uid = hero_at_stage(&service, &store, "u1", 1);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        let uid = uid.clone();
        handles.push(std::thread::spawn(move || {
            service.claim_quest(&uid, 1, QuestTier::Free).is_ok()
        }));
    }

    let successes = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|claimed| *claimed)
        .count();
    assert_eq!(successes, 1);
    assert_eq!(shards(&service, &uid), 1050);
}
