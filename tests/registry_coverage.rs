//! Registry and dispatch behavior across the full stack matrix.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use stackgen_cli::{
    ActionRegistry, AuthType, Database, DispatchOutcome, Framework, Language, StackKey,
};

#[test]
fn every_combination_resolves_to_an_entry() {
    let registry = ActionRegistry::build();
    assert_eq!(registry.len(), 216);

    // Dispatching any combination must report a definite outcome; with an
    // eagerly built registry the defensive invalid-selection arm never fires.
    for key in StackKey::all_combinations() {
        match registry.dispatch(key) {
            DispatchOutcome::Generated | DispatchOutcome::NotImplemented(_) => {}
            DispatchOutcome::InvalidSelection(key) => {
                panic!("registry is missing an entry for {}", key)
            }
        }
    }
}

#[test]
fn unregistered_combination_reports_not_implemented_without_error() {
    let registry = ActionRegistry::build();
    let key = StackKey::new(
        Language::TypeScript,
        Framework::Nest,
        Database::PostgreSQL,
        AuthType::Jwt,
    );

    assert_eq!(registry.dispatch(key), DispatchOutcome::NotImplemented(key));
}

#[test]
fn registered_combination_invokes_its_action_exactly_once() {
    let mut registry = ActionRegistry::build();
    let key = StackKey::new(
        Language::JavaScript,
        Framework::Express,
        Database::PostgreSQL,
        AuthType::Jwt,
    );

    // The stock action for this cell only logs; rebind it with a counter so
    // the invocation count is observable.
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    registry.register(
        key,
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    assert_eq!(registry.dispatch(key), DispatchOutcome::Generated);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn fallback_dispatch_runs_no_registered_action() {
    let mut registry = ActionRegistry::build();
    let registered = StackKey::new(
        Language::JavaScript,
        Framework::Express,
        Database::PostgreSQL,
        AuthType::Jwt,
    );
    let unregistered = StackKey::new(
        Language::Go,
        Framework::Fiber,
        Database::MongoDB,
        AuthType::OAuth,
    );

    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    registry.register(
        registered,
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    assert_eq!(
        registry.dispatch(unregistered),
        DispatchOutcome::NotImplemented(unregistered)
    );
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
