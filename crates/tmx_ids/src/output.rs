use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{data_types::TileIdSet, error::ExtractError};

/// Writes one id per line, ascending, replacing whatever `path` held before.
pub fn write_listing(path: impl AsRef<Path>, ids: &TileIdSet) -> Result<(), ExtractError> {
    let path = path.as_ref();
    let write_err = |source: io::Error| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(write_err)?);
    for gid in ids.iter() {
        writeln!(out, "{gid}").map_err(write_err)?;
    }
    out.flush().map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::Gid;

    #[test]
    fn one_id_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.txt");
        let ids: TileIdSet = [Gid(10), Gid(2), Gid(33)].into_iter().collect();

        write_listing(&path, &ids).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2\n10\n33\n");
    }

    #[test]
    fn empty_set_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.txt");
        std::fs::write(&path, "stale\n").unwrap();

        write_listing(&path, &TileIdSet::new()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ids.txt");

        assert!(matches!(
            write_listing(&path, &TileIdSet::new()),
            Err(ExtractError::Write { .. })
        ));
    }
}
