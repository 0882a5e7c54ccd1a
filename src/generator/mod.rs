//! Scaffold action registry keyed by the full stack selection.
//!
//! The registry is populated eagerly for every axis combination: cells with a
//! concrete generation action run it, all remaining cells hold an explicit
//! fallback so a lookup can never come back empty. Actions are opaque to
//! dispatch; whatever files they write is their own business.

use std::collections::HashMap;

use crate::stack::{AuthType, Database, Framework, Language, StackKey};

/// A zero-argument project generation action.
pub type ScaffoldAction = Box<dyn Fn() + Send + Sync>;

enum RegistryEntry {
    Concrete(ScaffoldAction),
    Fallback,
}

/// What happened when a selection was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A concrete action ran.
    Generated,
    /// The cell holds the fallback; nothing was generated.
    NotImplemented(StackKey),
    /// The key was missing from the registry. Unreachable with an eagerly
    /// built registry, handled anyway.
    InvalidSelection(StackKey),
}

/// Mapping from every stack combination to its generation action.
pub struct ActionRegistry {
    entries: HashMap<StackKey, RegistryEntry>,
}

impl ActionRegistry {
    /// Build the registry for the whole selection matrix.
    ///
    /// Combinations with a built-in action get it; every other combination is
    /// filled with the fallback entry.
    pub fn build() -> Self {
        let mut builtin = builtin_actions();
        let mut entries = HashMap::new();

        for key in StackKey::all_combinations() {
            let entry = match builtin.remove(&key) {
                Some(action) => RegistryEntry::Concrete(action),
                None => RegistryEntry::Fallback,
            };
            entries.insert(key, entry);
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the key is bound to a concrete action.
    pub fn is_implemented(&self, key: StackKey) -> bool {
        matches!(self.entries.get(&key), Some(RegistryEntry::Concrete(_)))
    }

    /// Bind a concrete action to a key, replacing whatever was there.
    pub fn register(&mut self, key: StackKey, action: ScaffoldAction) {
        self.entries.insert(key, RegistryEntry::Concrete(action));
    }

    /// Look up the key and run whatever is bound to it.
    pub fn dispatch(&self, key: StackKey) -> DispatchOutcome {
        match self.entries.get(&key) {
            Some(RegistryEntry::Concrete(action)) => {
                log::info!("generating project for {}", key);
                action();
                DispatchOutcome::Generated
            }
            Some(RegistryEntry::Fallback) => {
                log::warn!("no scaffold action registered for {}", key);
                DispatchOutcome::NotImplemented(key)
            }
            None => {
                log::error!("selection {} is outside the known stack matrix", key);
                DispatchOutcome::InvalidSelection(key)
            }
        }
    }
}

/// The combinations that currently have a real generation action.
fn builtin_actions() -> HashMap<StackKey, ScaffoldAction> {
    let mut actions: HashMap<StackKey, ScaffoldAction> = HashMap::new();

    let express_pg = |auth_type: AuthType| {
        StackKey::new(
            Language::JavaScript,
            Framework::Express,
            Database::PostgreSQL,
            auth_type,
        )
    };

    actions.insert(
        express_pg(AuthType::Jwt),
        Box::new(|| log::info!("Running JavaScript:Express:PostgreSQL:JWT")),
    );
    actions.insert(
        express_pg(AuthType::Session),
        Box::new(|| log::info!("Running JavaScript:Express:PostgreSQL:Session")),
    );
    actions.insert(
        express_pg(AuthType::OAuth),
        Box::new(|| log::info!("Running JavaScript:Express:PostgreSQL:OAuth")),
    );

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_key() -> StackKey {
        StackKey::new(
            Language::TypeScript,
            Framework::Nest,
            Database::PostgreSQL,
            AuthType::Jwt,
        )
    }

    #[test]
    fn test_registry_covers_every_combination() {
        let registry = ActionRegistry::build();
        assert_eq!(registry.len(), 216);

        for key in StackKey::all_combinations() {
            assert!(
                registry.entries.contains_key(&key),
                "missing entry for {}",
                key
            );
        }
    }

    #[test]
    fn test_builtin_actions_are_bound() {
        let registry = ActionRegistry::build();
        for auth_type in AuthType::ALL {
            let key = StackKey::new(
                Language::JavaScript,
                Framework::Express,
                Database::PostgreSQL,
                auth_type,
            );
            assert!(registry.is_implemented(key), "expected action for {}", key);
        }
    }

    #[test]
    fn test_dispatch_runs_the_bound_action_exactly_once() {
        let mut registry = ActionRegistry::build();
        let hits = Arc::new(AtomicUsize::new(0));
        let other_hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        registry.register(
            sample_key(),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let other_key = StackKey::new(
            Language::TypeScript,
            Framework::Nest,
            Database::PostgreSQL,
            AuthType::Session,
        );
        let other_counter = Arc::clone(&other_hits);
        registry.register(
            other_key,
            Box::new(move || {
                other_counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert_eq!(registry.dispatch(sample_key()), DispatchOutcome::Generated);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(other_hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dispatch_on_fallback_cell_reports_not_implemented() {
        let registry = ActionRegistry::build();
        let key = sample_key();
        assert!(!registry.is_implemented(key));
        assert_eq!(registry.dispatch(key), DispatchOutcome::NotImplemented(key));
    }

    #[test]
    fn test_dispatch_on_missing_key_reports_invalid_selection() {
        let registry = ActionRegistry {
            entries: HashMap::new(),
        };
        let key = sample_key();
        assert_eq!(
            registry.dispatch(key),
            DispatchOutcome::InvalidSelection(key)
        );
    }
}
