//! SQLite-backed word store
//!
//! The connection is opened, used and closed within each call. An empty table is
//! seeded from the embedded seed list before the first read.

use super::{StoreError, WordEntry, WordSource};
use crate::core::CategoryFilter;
use crate::wordlists::SEED_WORDS;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

// Table name kept for compatibility with existing word databases
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS wordsmysql (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL,
    category TEXT NOT NULL
)";

const PICK_ANY: &str = "SELECT word, category FROM wordsmysql ORDER BY RANDOM() LIMIT 1";
const PICK_IN_CATEGORY: &str =
    "SELECT word, category FROM wordsmysql WHERE category = ?1 ORDER BY RANDOM() LIMIT 1";

/// Word store in a single SQLite file
#[derive(Debug, Clone)]
pub struct SqliteWordStore {
    path: PathBuf,
}

impl SqliteWordStore {
    /// Store at `path`; the file is created on first use
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let mut conn = Connection::open(&self.path)?;
        let seeded = ensure_seeded(&mut conn)?;
        if seeded > 0 {
            log::info!("Seeded {} with {seeded} words", self.path.display());
        }
        Ok(conn)
    }

    /// Create and seed the table if needed, returning how many rows were inserted
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or written.
    pub fn initialize(&self) -> Result<usize, StoreError> {
        let mut conn = Connection::open(&self.path)?;
        ensure_seeded(&mut conn)
    }

    /// All entries matching `filter`, ordered by insertion
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be read.
    pub fn list_entries(&self, filter: CategoryFilter) -> Result<Vec<WordEntry>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT word, category FROM wordsmysql
             WHERE ?1 IS NULL OR category = ?1
             ORDER BY id",
        )?;
        let rows = stmt.query_map(params![filter.category().map(|c| c.name())], |row| {
            Ok(WordEntry {
                word: row.get(0)?,
                category: row.get(1)?,
            })
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

impl WordSource for SqliteWordStore {
    fn pick_word(&self, filter: CategoryFilter) -> Result<Option<WordEntry>, StoreError> {
        let conn = self.connect()?;

        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<WordEntry> {
            Ok(WordEntry {
                word: row.get::<_, String>(0)?.to_lowercase(),
                category: row.get(1)?,
            })
        };

        let entry = match filter.category() {
            Some(category) => conn
                .query_row(PICK_IN_CATEGORY, params![category.name()], map_row)
                .optional()?,
            None => conn.query_row(PICK_ANY, [], map_row).optional()?,
        };

        Ok(entry)
    }
}

fn ensure_seeded(conn: &mut Connection) -> Result<usize, StoreError> {
    conn.execute_batch(CREATE_TABLE)?;

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM wordsmysql", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    {
        let mut insert = tx.prepare("INSERT INTO wordsmysql (word, category) VALUES (?1, ?2)")?;
        for &(word, category) in SEED_WORDS {
            insert.execute(params![word, category])?;
        }
    }
    tx.commit()?;

    Ok(SEED_WORDS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, SqliteWordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteWordStore::new(dir.path().join("words.db"));
        (dir, store)
    }

    #[test]
    fn empty_store_is_seeded_on_first_pick() {
        let (_dir, store) = temp_store();
        let entry = store.pick_word(CategoryFilter::All).unwrap().unwrap();
        assert!(SEED_WORDS.iter().any(|&(w, c)| w == entry.word && c == entry.category));
        assert_eq!(store.list_entries(CategoryFilter::All).unwrap().len(), 6);
    }

    #[test]
    fn seeding_happens_once() {
        let (_dir, store) = temp_store();
        assert_eq!(store.initialize().unwrap(), SEED_WORDS.len());
        assert_eq!(store.initialize().unwrap(), 0);
        store.pick_word(CategoryFilter::All).unwrap();
        assert_eq!(store.list_entries(CategoryFilter::All).unwrap().len(), 6);
    }

    #[test]
    fn category_filter_is_respected() {
        let (_dir, store) = temp_store();
        let filter = CategoryFilter::Only(Category::Animals);
        for _ in 0..50 {
            let entry = store.pick_word(filter).unwrap().unwrap();
            assert_eq!(entry.category, "Animals");
            assert!(entry.word == "dog" || entry.word == "cat");
        }
    }

    #[test]
    fn picked_words_are_lowercase_alphabetic() {
        let (_dir, store) = temp_store();
        store.initialize().unwrap();
        let conn = Connection::open(store.path()).unwrap();
        conn.execute(
            "INSERT INTO wordsmysql (word, category) VALUES ('RUST', 'Programming')",
            [],
        )
        .unwrap();

        for _ in 0..50 {
            let entry = store.pick_word(CategoryFilter::All).unwrap().unwrap();
            assert!(entry.word.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn missing_category_yields_none() {
        let (_dir, store) = temp_store();
        store.initialize().unwrap();
        let conn = Connection::open(store.path()).unwrap();
        conn.execute("DELETE FROM wordsmysql WHERE category = 'Countries'", [])
            .unwrap();

        let picked = store
            .pick_word(CategoryFilter::Only(Category::Countries))
            .unwrap();
        assert!(picked.is_none());
    }

    #[test]
    fn list_entries_in_insertion_order() {
        let (_dir, store) = temp_store();
        let countries = store
            .list_entries(CategoryFilter::Only(Category::Countries))
            .unwrap();
        let words: Vec<&str> = countries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["turkey", "bulgaria"]);
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file
        let store = SqliteWordStore::new(dir.path());
        assert!(store.pick_word(CategoryFilter::All).is_err());
    }
}
