//! Sketch of a database-backed user listing.
//!
//! Not mounted on the running server: the persistence session behind
//! [`UserStore`] does not exist in this process. The contract is kept so a
//! listing route can be wired up once a database lands, and deliberately not
//! expanded into a data-access layer.
#![allow(dead_code)]

use serde::Serialize;

/// One user record as the persistence layer would return it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) email: String,
}

/// Injected persistence session.
pub(crate) trait UserStore {
    fn fetch_users(&self, skip: usize, limit: usize) -> anyhow::Result<Vec<User>>;
}

/// Offset/limit listing against an injected store.
pub(crate) fn list_users(
    store: &dyn UserStore,
    skip: usize,
    limit: usize,
) -> anyhow::Result<Vec<User>> {
    store.fetch_users(skip, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct InMemoryStore {
        users: Vec<User>,
    }

    impl UserStore for InMemoryStore {
        fn fetch_users(&self, skip: usize, limit: usize) -> anyhow::Result<Vec<User>> {
            Ok(self
                .users
                .iter()
                .skip(skip)
                .take(limit)
                .cloned()
                .collect())
        }
    }

    fn store() -> InMemoryStore {
        InMemoryStore {
            users: (0..5)
                .map(|n| User {
                    id: n,
                    username: format!("user{n}"),
                    email: format!("user{n}@example.com"),
                })
                .collect(),
        }
    }

    #[test]
    fn windows_by_skip_and_limit() {
        let store = store();
        let page = list_users(&store, 1, 2).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, 1);
        assert_eq!(page[1].id, 2);
    }

    #[test]
    fn skip_past_the_end_is_empty() {
        let store = store();
        assert!(list_users(&store, 10, 100).unwrap().is_empty());
    }
}
