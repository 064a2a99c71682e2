#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use chatgate_core::policy::{ConfigStore, PolicyConfig};

fn non_empty() -> PolicyConfig {
    PolicyConfig {
        disable_dm_for_existing_user: true,
        allowed_roles: ["system_admin".to_string()].into(),
        ..Default::default()
    }
}

#[test]
fn unset_store_reads_all_defaults() {
    let store = ConfigStore::new();
    assert_eq!(store.read(), PolicyConfig::default());
}

#[test]
fn read_yields_independent_value_equal_snapshots() {
    let store = ConfigStore::new();
    store.replace(Arc::new(non_empty()));

    let a = store.read();
    let mut b = store.read();
    assert_eq!(a, b);

    // Mutating one copy must not leak into the other or into the store.
    b.allowed_roles.insert("ops".to_string());
    assert_ne!(a, b);
    assert_eq!(store.read(), a);
}

#[test]
fn replace_swaps_whole_snapshot() {
    let store = ConfigStore::new();
    store.replace(Arc::new(non_empty()));
    assert!(store.read().disable_dm_for_existing_user);

    // Resetting to an explicit empty config is a legal replacement.
    store.replace(Arc::new(PolicyConfig::default()));
    assert_eq!(store.read(), PolicyConfig::default());
}

#[test]
fn replace_with_distinct_equal_instance_is_legal() {
    let store = ConfigStore::new();
    store.replace(Arc::new(non_empty()));
    // Value-equal but a different instance: allowed.
    store.replace(Arc::new(non_empty()));
    assert!(store.read().disable_dm_for_existing_user);
}

#[test]
fn self_replace_with_empty_instance_is_a_noop() {
    let store = ConfigStore::new();
    let empty = Arc::new(PolicyConfig::default());
    store.replace(Arc::clone(&empty));
    store.replace(empty);
    assert_eq!(store.read(), PolicyConfig::default());
}

#[test]
#[should_panic(expected = "active configuration")]
fn self_replace_with_non_empty_instance_panics() {
    let store = ConfigStore::new();
    let cfg = Arc::new(non_empty());
    store.replace(Arc::clone(&cfg));
    store.replace(cfg);
}

#[test]
fn poisoned_store_keeps_serving_the_active_snapshot() {
    let store = Arc::new(ConfigStore::new());
    let active = Arc::new(non_empty());
    store.replace(Arc::clone(&active));

    // Contract misuse on another thread panics while the write guard is
    // held and poisons the lock.
    let misuse = {
        let store = Arc::clone(&store);
        std::thread::spawn(move || store.replace(active))
    };
    assert!(misuse.join().is_err());

    // The restrictive snapshot must survive; a default here would lift
    // every restriction.
    assert_eq!(store.read(), non_empty());

    // And the store stays writable afterwards.
    store.replace(Arc::new(PolicyConfig::default()));
    assert_eq!(store.read(), PolicyConfig::default());
}

#[test]
fn concurrent_readers_never_see_a_torn_snapshot() {
    let store = Arc::new(ConfigStore::new());

    let writer = {
        let store = Arc::clone(&store);
        std::thread::spawn(move || {
            for i in 0..200 {
                let cfg = if i % 2 == 0 {
                    non_empty()
                } else {
                    PolicyConfig::default()
                };
                store.replace(Arc::new(cfg));
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..500 {
                    let cfg = store.read();
                    // Either snapshot is fine, a mix of the two is not.
                    assert!(cfg == PolicyConfig::default() || cfg == non_empty());
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
}
