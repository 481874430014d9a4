use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::ThemeName;

// ─── App meta ────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

// ─── Theme preference ────────────────────────────────────────────────────────

const THEME_KEY: &str = "theme";

pub struct ThemeRepo;

impl ThemeRepo {
    /// The stored preference. A missing key reads as light; so does a value
    /// no release ever wrote.
    pub fn load(conn: &Connection) -> Result<ThemeName> {
        let stored = MetaRepo::get(conn, THEME_KEY)?;
        Ok(match stored.as_deref() {
            Some(s) => s.parse().unwrap_or_else(|_| {
                log::warn!("ignoring unrecognized theme preference '{}'", s);
                ThemeName::Light
            }),
            None => ThemeName::Light,
        })
    }

    pub fn store(conn: &Connection, theme: ThemeName) -> Result<()> {
        MetaRepo::set(conn, THEME_KEY, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn open_test_db(dir: &tempfile::TempDir) -> Connection {
        let conn = Connection::open(dir.path().join("test.db")).unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_meta_get_set() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_test_db(&dir);

        assert_eq!(MetaRepo::get(&conn, "missing").unwrap(), None);
        MetaRepo::set(&conn, "k", "v1").unwrap();
        MetaRepo::set(&conn, "k", "v2").unwrap();
        assert_eq!(MetaRepo::get(&conn, "k").unwrap(), Some("v2".to_string()));
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_test_db(&dir);

        assert_eq!(ThemeRepo::load(&conn).unwrap(), ThemeName::Light);
    }

    #[test]
    fn test_unrecognized_theme_reads_as_light() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_test_db(&dir);

        MetaRepo::set(&conn, "theme", "sepia").unwrap();
        assert_eq!(ThemeRepo::load(&conn).unwrap(), ThemeName::Light);
    }

    #[test]
    fn test_double_toggle_restores_persisted_state() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_test_db(&dir);

        for start in [ThemeName::Light, ThemeName::Dark] {
            ThemeRepo::store(&conn, start).unwrap();
            for _ in 0..2 {
                let flipped = ThemeRepo::load(&conn).unwrap().toggled();
                ThemeRepo::store(&conn, flipped).unwrap();
            }
            assert_eq!(ThemeRepo::load(&conn).unwrap(), start);
        }
    }
}
