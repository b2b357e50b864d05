use std::sync::{Arc, Mutex};
use std::thread;

use campus_events_core::registration::{FileStore, MemoryStore, RegistrationManager};
use campus_events_core::{CampusEventsError, EventCatalog};

fn assert_capacity_invariant<S: campus_events_core::registration::RegistrationStore>(
    manager: &RegistrationManager<S>,
) {
    for event in manager.events() {
        assert!(
            event.registered <= event.capacity,
            "event {} overbooked: {}/{}",
            event.id,
            event.registered,
            event.capacity
        );
    }
}

#[test]
fn nearly_full_workshop_fills_up_across_independent_users() {
    let catalog = EventCatalog::seeded();

    let mut alice = RegistrationManager::from_catalog(&catalog, MemoryStore::new());
    assert_eq!(alice.register(5).unwrap().registered, 49);
    assert!(matches!(
        alice.register(5),
        Err(CampusEventsError::AlreadyRegistered(5))
    ));
    assert_eq!(alice.event(5).unwrap().registered, 49);

    // A second user sees the counts the first one left behind
    let mut bob = RegistrationManager::new(alice.events().to_vec(), MemoryStore::new());
    assert_eq!(bob.register(5).unwrap().registered, 50);

    let mut carol = RegistrationManager::new(bob.events().to_vec(), MemoryStore::new());
    assert!(matches!(
        carol.register(5),
        Err(CampusEventsError::CapacityExceeded(5))
    ));
    assert!(!carol.is_registered(5));
    assert_eq!(carol.event(5).unwrap().registered, 50);
}

#[test]
fn registrations_survive_a_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = EventCatalog::seeded();

    {
        let mut session = RegistrationManager::from_catalog(&catalog, FileStore::new(dir.path()));
        session.register(2).unwrap();
        session.register(6).unwrap();
        session.unregister(2).unwrap();
    }

    let session = RegistrationManager::from_catalog(&catalog, FileStore::new(dir.path()));
    assert!(session.is_registered(6));
    assert!(!session.is_registered(2));

    let registered: Vec<_> = session.derive_view("Registered").iter().map(|e| e.id).collect();
    assert_eq!(registered, vec![6]);
}

#[test]
fn stale_and_corrupt_state_from_older_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    std::fs::write(store.path(), "[3, 1000]").unwrap();

    let manager = RegistrationManager::from_catalog(&EventCatalog::seeded(), store);
    let all: Vec<_> = manager.derive_view("All").iter().map(|e| e.id).collect();
    let registered: Vec<_> = manager.derive_view("Registered").iter().map(|e| e.id).collect();
    assert_eq!(all, vec![1, 2, 4, 5, 6]);
    assert_eq!(registered, vec![3]);

    std::fs::write(FileStore::new(dir.path()).path(), "][").unwrap();
    let manager =
        RegistrationManager::from_catalog(&EventCatalog::seeded(), FileStore::new(dir.path()));
    assert!(manager.registrations().is_empty());
    assert_eq!(manager.derive_view("All").len(), 6);
}

#[test]
fn capacity_invariant_holds_over_long_sequences() {
    let mut events = EventCatalog::seeded().list_events(None);
    // Tight capacities so the ceiling is actually hit
    for event in &mut events {
        event.capacity = 2;
        event.registered = event.id as u32 % 3;
        event.registered = event.registered.min(event.capacity);
    }

    let mut users: Vec<_> = (0..4)
        .map(|_| RegistrationManager::new(events.clone(), MemoryStore::new()))
        .collect();

    let mut seed: u64 = 0x5eed;
    for _ in 0..500 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let user = (seed >> 33) as usize % users.len();
        let id = (seed >> 40) % 7 + 1;
        let manager = &mut users[user];

        let before = manager.event(id).ok().map(|e| e.registered);
        let result = if (seed >> 20) & 1 == 0 {
            manager.register(id)
        } else {
            manager.unregister(id)
        };

        if result.is_err() {
            assert_eq!(manager.event(id).ok().map(|e| e.registered), before);
        }
        assert_capacity_invariant(manager);
    }
}

#[test]
fn shared_manager_serializes_concurrent_callers() {
    let manager = Arc::new(Mutex::new(RegistrationManager::from_catalog(
        &EventCatalog::seeded(),
        MemoryStore::new(),
    )));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                for _ in 0..50 {
                    let mut guard = manager.lock().unwrap();
                    let _ = if i % 2 == 0 {
                        guard.register(6)
                    } else {
                        guard.unregister(6)
                    };
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let manager = manager.lock().unwrap();
    let expected = if manager.is_registered(6) { 23 } else { 22 };
    assert_eq!(manager.event(6).unwrap().registered, expected);
    assert_eq!(
        manager.store().content().as_deref(),
        Some(if manager.is_registered(6) { "[6]" } else { "[]" })
    );
}
