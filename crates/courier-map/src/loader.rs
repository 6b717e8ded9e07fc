//! Map-file loading and re-emission.
//!
//! # Map file grammar
//!
//! Repeated records, read to end of stream:
//!
//! ```text
//! <street-name>
//! <k>
//! <lat1> <lon1> <lat2> <lon2>     (repeated k times)
//! ```
//!
//! Street names may contain spaces; `<k>` is a non-negative integer;
//! coordinate tokens are whitespace-separated decimal strings, preserved
//! verbatim for indexing.  The loader is strict on structure (a bad count,
//! a bad coordinate, or a missing line is a parse error) but lenient on
//! whitespace: blank lines between records, trailing whitespace, and CRLF
//! line endings are all tolerated.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::info;

use courier_core::{CourierError, CourierResult, EdgeId, GeoCoord, NameId};

use crate::network::{StreetMap, StreetMapBuilder};

impl StreetMap {
    /// Load a street map from a file on disk.
    ///
    /// # Errors
    ///
    /// [`CourierError::Io`] if the file cannot be read,
    /// [`CourierError::Parse`] if it does not match the grammar.  No
    /// partial map is exposed on failure.
    pub fn load_path(path: impl AsRef<Path>) -> CourierResult<StreetMap> {
        let file = File::open(path)?;
        StreetMap::load_reader(BufReader::new(file))
    }

    /// Like [`load_path`](Self::load_path) but accepts any `BufRead`
    /// source.  Useful for testing (pass an `io::Cursor`).
    pub fn load_reader<R: BufRead>(reader: R) -> CourierResult<StreetMap> {
        let mut builder = StreetMapBuilder::new();
        let mut lines = reader.lines();
        let mut streets = 0usize;
        let mut segments = 0usize;

        while let Some(line) = lines.next() {
            let name_line = line?;
            let street_name = name_line.trim_end();
            if street_name.trim().is_empty() {
                continue;
            }

            let count_line = lines.next().transpose()?.ok_or_else(|| {
                CourierError::Parse(format!(
                    "unexpected end of file: street {street_name:?} has no segment count"
                ))
            })?;
            let count: usize = count_line.trim().parse().map_err(|_| {
                CourierError::Parse(format!(
                    "invalid segment count {:?} for street {street_name:?}",
                    count_line.trim()
                ))
            })?;

            let name = builder.intern_name(street_name);
            for i in 0..count {
                let coord_line = lines.next().transpose()?.ok_or_else(|| {
                    CourierError::Parse(format!(
                        "unexpected end of file: street {street_name:?} promises {count} \
                         segments but has {i}"
                    ))
                })?;
                let tokens: Vec<&str> = coord_line.split_whitespace().collect();
                if tokens.len() < 4 {
                    return Err(CourierError::Parse(format!(
                        "short coordinate line {:?} for street {street_name:?}",
                        coord_line.trim()
                    )));
                }
                let start = GeoCoord::new(tokens[0], tokens[1])?;
                let end = GeoCoord::new(tokens[2], tokens[3])?;
                builder.add_segment(&start, &end, name);
                segments += 1;
            }
            streets += 1;
        }

        let map = builder.build();
        info!(
            streets,
            segments,
            nodes = map.node_count(),
            "loaded street map"
        );
        Ok(map)
    }

    /// Re-emit the map in the input grammar: one record per street name in
    /// first-seen order, listing the forward direction of every stored
    /// segment pair.
    ///
    /// Loading a file and writing it back reproduces it byte-for-byte up
    /// to segment ordering within a street group (and up to merging of
    /// repeated records that share one name).
    pub fn write_map<W: Write>(&self, mut out: W) -> CourierResult<()> {
        let mut by_name: Vec<Vec<EdgeId>> = vec![Vec::new(); self.street_count()];
        for i in 0..self.edge_count() {
            let edge = EdgeId::new(i);
            if self.edge_is_forward(edge) {
                by_name[self.edge_name(edge).index()].push(edge);
            }
        }

        for (name_idx, edges) in by_name.iter().enumerate() {
            writeln!(out, "{}", self.name(NameId::new(name_idx)))?;
            writeln!(out, "{}", edges.len())?;
            for &edge in edges {
                let from = self.coord(self.edge_from(edge));
                let to = self.coord(self.edge_to(edge));
                writeln!(
                    out,
                    "{} {} {} {}",
                    from.lat_text(),
                    from.lon_text(),
                    to.lat_text(),
                    to.lon_text()
                )?;
            }
        }
        Ok(())
    }
}
