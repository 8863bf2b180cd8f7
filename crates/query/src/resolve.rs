//! Natural-key lookups into the meet table.
//!
//! A meet's MeetID changes whenever the dataset is recompiled, so anything
//! that must survive a reload (URLs, bookmarks) refers to a meet by
//! (Federation, Date, MeetName) or by MeetPath instead. All lookups scan in
//! table order and return the first match.

use opldb_core::schema::{MeetColumn, OplColumn};
use opldb_core::{Dataset, MeetTable, Row, RowIndex};

fn first_match<F>(meets: &MeetTable, matches: F) -> Option<RowIndex>
where
    F: Fn(&Row) -> bool,
{
    let found = meets.iter().find(|(_, row)| matches(row)).map(|(i, _)| i);
    #[cfg(feature = "debug-log")]
    log::trace!("meet lookup scanned {} rows: {:?}", meets.len(), found);
    found
}

/// Finds the first meet with the given federation, date and name.
///
/// All three fields must match exactly (case-sensitive).
pub fn meet_by_key(
    meets: &MeetTable,
    federation: &str,
    date: &str,
    meet_name: &str,
) -> Option<RowIndex> {
    first_match(meets, |row| {
        row.text(MeetColumn::Federation) == Some(federation)
            && row.text(MeetColumn::Date) == Some(date)
            && row.text(MeetColumn::MeetName) == Some(meet_name)
    })
}

/// Finds the first meet whose MeetPath equals `path`.
pub fn meet_by_path(meets: &MeetTable, path: &str) -> Option<RowIndex> {
    first_match(meets, |row| row.text(MeetColumn::MeetPath) == Some(path))
}

/// Finds the meet a lifter entry belongs to, by MeetID.
pub fn meet_of(dataset: &Dataset, entry: RowIndex) -> Option<RowIndex> {
    let meet_id = dataset.entry(entry)?.cell(OplColumn::MeetID);
    if meet_id.is_null() {
        return None;
    }
    first_match(dataset.meets(), |row| row.cell(MeetColumn::MeetID) == meet_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use opldb_core::schema::ColumnSet;
    use opldb_core::{OplTable, Value};

    fn meet(id: &str, path: &str, fed: &str, date: &str, name: &str) -> Row {
        [id, path, fed, date, "USA", "", "", name].into_iter().collect()
    }

    fn meets() -> MeetTable {
        MeetTable::new(vec![
            meet("0", "x/m1", "X", "2020-01-01", "M1"),
            meet("1", "x/m2", "X", "2020-01-01", "M2"),
            meet("2", "x/m2-dup", "X", "2020-01-01", "M2"),
        ])
        .unwrap()
    }

    #[test]
    fn test_meet_by_key() {
        let m = meets();
        assert_eq!(meet_by_key(&m, "X", "2020-01-01", "M1"), Some(0));
        assert_eq!(meet_by_key(&m, "Y", "2020-01-01", "M2"), None);
        assert_eq!(meet_by_key(&m, "x", "2020-01-01", "M1"), None);
    }

    #[test]
    fn test_meet_by_key_first_match_wins() {
        assert_eq!(meet_by_key(&meets(), "X", "2020-01-01", "M2"), Some(1));
    }

    #[test]
    fn test_meet_by_path() {
        let m = meets();
        assert_eq!(meet_by_path(&m, "x/m2-dup"), Some(2));
        assert_eq!(meet_by_path(&m, "x/m3"), None);
        assert_eq!(meet_by_path(&MeetTable::empty(), "x/m1"), None);
    }

    #[test]
    fn test_meet_of() {
        let mut cells = vec![Value::Null; OplColumn::width()];
        cells[OplColumn::MeetID.index()] = Value::from("1");
        let orphan = Row::new(vec![Value::Null; OplColumn::width()]);
        let opl = OplTable::new(vec![Row::new(cells), orphan]).unwrap();
        let dataset = Dataset::new(opl, meets());

        assert_eq!(meet_of(&dataset, 0), Some(1));
        assert_eq!(meet_of(&dataset, 1), None);
        assert_eq!(meet_of(&dataset, 5), None);
    }
}
