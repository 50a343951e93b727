//! SQLite implementation of [`ElectionStore`].
//!
//! [`SqliteStore`] owns a single connection and exposes four query families
//! that every entity operation is built from:
//!
//! - [`SqliteStore::list`]: read many rows
//! - [`SqliteStore::get_one`]: read zero or one row
//! - [`SqliteStore::insert`]: write one row, returning its rowid
//! - [`SqliteStore::execute`]: update/delete, returning the affected count
//!
//! Values always travel as bound parameters; SQL text is static.

use rusqlite::{params, Connection, OptionalExtension, Params, Row};

use crate::error::StorageError;
use crate::traits::ElectionStore;
use crate::types::{Candidate, CandidateId, NewCandidate, Party, PartyId};

const SELECT_CANDIDATES: &str = "SELECT candidates.id, candidates.first_name, candidates.last_name,
        candidates.industry_connected, candidates.party_id, parties.name AS party_name
     FROM candidates
     LEFT JOIN parties ON candidates.party_id = parties.id";

/// SQLite-backed implementation of [`ElectionStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    // -----------------------------------------------------------------------
    // Query families
    // -----------------------------------------------------------------------

    /// Runs a read query and maps every result row.
    pub fn list<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>, StorageError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params, map)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Runs a read query expected to match at most one row.
    pub fn get_one<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Option<T>, StorageError>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let row = stmt.query_row(params, map).optional()?;
        Ok(row)
    }

    /// Runs an INSERT and returns the rowid of the new row.
    pub fn insert<P: Params>(&mut self, sql: &str, params: P) -> Result<i64, StorageError> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let id = stmt.insert(params)?;
        Ok(id)
    }

    /// Runs an UPDATE or DELETE and returns the number of rows affected.
    pub fn execute<P: Params>(&mut self, sql: &str, params: P) -> Result<usize, StorageError> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let changes = stmt.execute(params)?;
        Ok(changes)
    }

    // -----------------------------------------------------------------------
    // Row mappers
    // -----------------------------------------------------------------------

    fn candidate_from_row(row: &Row<'_>) -> rusqlite::Result<Candidate> {
        Ok(Candidate {
            id: CandidateId(row.get(0)?),
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            industry_connected: row.get(3)?,
            party_id: row.get::<_, Option<i64>>(4)?.map(PartyId),
            party_name: row.get(5)?,
        })
    }

    fn party_from_row(row: &Row<'_>) -> rusqlite::Result<Party> {
        Ok(Party {
            id: PartyId(row.get(0)?),
            name: row.get(1)?,
        })
    }
}

impl ElectionStore for SqliteStore {
    fn verify(&self) -> Result<(), StorageError> {
        self.conn
            .query_row("SELECT COUNT(*) FROM candidates", [], |row| row.get::<_, i64>(0))?;
        self.conn
            .query_row("SELECT COUNT(*) FROM parties", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    // -------------------------------------------------------------------
    // Candidates
    // -------------------------------------------------------------------

    fn list_candidates(&self) -> Result<Vec<Candidate>, StorageError> {
        self.list(
            &format!("{SELECT_CANDIDATES} ORDER BY candidates.id"),
            [],
            Self::candidate_from_row,
        )
    }

    fn get_candidate(&self, id: CandidateId) -> Result<Option<Candidate>, StorageError> {
        self.get_one(
            &format!("{SELECT_CANDIDATES} WHERE candidates.id = ?1"),
            params![id.0],
            Self::candidate_from_row,
        )
    }

    fn create_candidate(&mut self, candidate: &NewCandidate) -> Result<CandidateId, StorageError> {
        let id = self.insert(
            "INSERT INTO candidates (first_name, last_name, industry_connected) VALUES (?1, ?2, ?3)",
            params![
                candidate.first_name,
                candidate.last_name,
                candidate.industry_connected,
            ],
        )?;
        Ok(CandidateId(id))
    }

    fn set_candidate_party(
        &mut self,
        id: CandidateId,
        party: PartyId,
    ) -> Result<usize, StorageError> {
        self.execute(
            "UPDATE candidates SET party_id = ?1 WHERE id = ?2",
            params![party.0, id.0],
        )
    }

    fn delete_candidate(&mut self, id: CandidateId) -> Result<usize, StorageError> {
        self.execute("DELETE FROM candidates WHERE id = ?1", params![id.0])
    }

    // -------------------------------------------------------------------
    // Parties
    // -------------------------------------------------------------------

    fn list_parties(&self) -> Result<Vec<Party>, StorageError> {
        self.list(
            "SELECT id, name FROM parties ORDER BY id",
            [],
            Self::party_from_row,
        )
    }

    fn get_party(&self, id: PartyId) -> Result<Option<Party>, StorageError> {
        self.get_one(
            "SELECT id, name FROM parties WHERE id = ?1",
            params![id.0],
            Self::party_from_row,
        )
    }

    fn create_party(&mut self, name: &str) -> Result<PartyId, StorageError> {
        let id = self.insert("INSERT INTO parties (name) VALUES (?1)", params![name])?;
        Ok(PartyId(id))
    }

    fn delete_party(&mut self, id: PartyId) -> Result<usize, StorageError> {
        self.execute("DELETE FROM parties WHERE id = ?1", params![id.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ronald() -> NewCandidate {
        NewCandidate {
            first_name: "Ronald".to_string(),
            last_name: "Firbank".to_string(),
            industry_connected: 1,
        }
    }

    #[test]
    fn create_then_get_candidate() {
        let mut store = SqliteStore::in_memory().unwrap();
        let id = store.create_candidate(&ronald()).unwrap();
        assert_eq!(id, CandidateId(1));

        let candidate = store.get_candidate(id).unwrap().unwrap();
        assert_eq!(
            candidate,
            Candidate {
                id,
                first_name: "Ronald".to_string(),
                last_name: "Firbank".to_string(),
                industry_connected: 1,
                party_id: None,
                party_name: None,
            }
        );
    }

    #[test]
    fn get_missing_candidate_is_none() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.get_candidate(CandidateId(42)).unwrap().is_none());
        assert!(store.get_party(PartyId(42)).unwrap().is_none());
    }

    #[test]
    fn list_candidates_joins_party_name() {
        let mut store = SqliteStore::in_memory().unwrap();
        let party = store.create_party("Jeffersonian").unwrap();
        let first = store.create_candidate(&ronald()).unwrap();
        let second = store
            .create_candidate(&NewCandidate {
                first_name: "Virginia".to_string(),
                last_name: "Woolf".to_string(),
                industry_connected: 0,
            })
            .unwrap();

        assert_eq!(store.set_candidate_party(second, party).unwrap(), 1);

        let rows = store.list_candidates().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, first);
        assert_eq!(rows[0].party_id, None);
        assert_eq!(rows[0].party_name, None);
        assert_eq!(rows[1].id, second);
        assert_eq!(rows[1].party_id, Some(party));
        assert_eq!(rows[1].party_name.as_deref(), Some("Jeffersonian"));
    }

    #[test]
    fn set_party_on_missing_candidate_changes_nothing() {
        let mut store = SqliteStore::in_memory().unwrap();
        let party = store.create_party("Federalist").unwrap();
        assert_eq!(store.set_candidate_party(CandidateId(7), party).unwrap(), 0);
    }

    #[test]
    fn set_party_accepts_unknown_party() {
        let mut store = SqliteStore::in_memory().unwrap();
        let id = store.create_candidate(&ronald()).unwrap();

        assert_eq!(store.set_candidate_party(id, PartyId(99)).unwrap(), 1);

        let candidate = store.get_candidate(id).unwrap().unwrap();
        assert_eq!(candidate.party_id, Some(PartyId(99)));
        assert_eq!(candidate.party_name, None);
    }

    #[test]
    fn delete_counts_rows() {
        let mut store = SqliteStore::in_memory().unwrap();
        let id = store.create_candidate(&ronald()).unwrap();

        assert_eq!(store.delete_candidate(id).unwrap(), 1);
        assert_eq!(store.delete_candidate(id).unwrap(), 0);
        assert!(store.list_candidates().unwrap().is_empty());
    }

    #[test]
    fn deleting_party_leaves_dangling_reference() {
        let mut store = SqliteStore::in_memory().unwrap();
        let party = store.create_party("Whig").unwrap();
        let id = store.create_candidate(&ronald()).unwrap();
        store.set_candidate_party(id, party).unwrap();

        assert_eq!(store.delete_party(party).unwrap(), 1);

        let candidate = store.get_candidate(id).unwrap().unwrap();
        assert_eq!(candidate.party_id, Some(party));
        assert_eq!(candidate.party_name, None);
        assert!(store.list_parties().unwrap().is_empty());
    }

    #[test]
    fn list_parties_in_id_order() {
        let mut store = SqliteStore::in_memory().unwrap();
        let a = store.create_party("Federalist").unwrap();
        let b = store.create_party("Whig").unwrap();

        let parties = store.list_parties().unwrap();
        assert_eq!(
            parties,
            vec![
                Party { id: a, name: "Federalist".to_string() },
                Party { id: b, name: "Whig".to_string() },
            ]
        );
    }

    #[test]
    fn constraint_violation_surfaces_raw_message() {
        let mut store = SqliteStore::in_memory().unwrap();
        let err = store
            .insert(
                "INSERT INTO candidates (first_name, last_name, industry_connected) VALUES (?1, ?2, ?3)",
                params!["Ronald", rusqlite::types::Null, 1],
            )
            .unwrap_err();
        assert!(
            err.to_string().contains("NOT NULL constraint failed: candidates.last_name"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn bound_parameters_are_not_interpreted() {
        let mut store = SqliteStore::in_memory().unwrap();
        let hostile = "x'); DROP TABLE candidates; --";
        let id = store
            .create_candidate(&NewCandidate {
                first_name: hostile.to_string(),
                last_name: "Tables".to_string(),
                industry_connected: 0,
            })
            .unwrap();

        let candidate = store.get_candidate(id).unwrap().unwrap();
        assert_eq!(candidate.first_name, hostile);
        store.verify().unwrap();
    }

    #[test]
    fn verify_on_fresh_store() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.verify().is_ok());
    }

    proptest! {
        #[test]
        fn candidate_ids_strictly_increase(
            ops in proptest::collection::vec(("[a-zA-Z]{1,12}", any::<bool>()), 1..20)
        ) {
            let mut store = SqliteStore::in_memory().unwrap();
            let mut last = 0i64;
            for (name, delete_after) in ops {
                let id = store
                    .create_candidate(&NewCandidate {
                        first_name: name.clone(),
                        last_name: name,
                        industry_connected: 0,
                    })
                    .unwrap();
                prop_assert!(id.0 > last);
                last = id.0;
                if delete_after {
                    store.delete_candidate(id).unwrap();
                }
            }
        }
    }
}
