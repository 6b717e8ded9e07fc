//! Deliveries-file loading.
//!
//! # File format
//!
//! ```text
//! <depot-lat> <depot-lon>
//! <lat> <lon>:<item>          (one per delivery)
//! ```
//!
//! The first line is the depot.  The item is the text between the first
//! colon and the second (or the end of the line); anything after a second
//! colon is discarded.  Malformed delivery lines (missing colon, empty
//! item, wrong coordinate count, unparseable coordinate) are skipped with
//! a warning rather than aborting the run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use courier_core::{CourierError, CourierResult, DeliveryRequest, GeoCoord};

/// Load the depot and delivery list from a file on disk.
pub fn load_path(path: impl AsRef<Path>) -> CourierResult<(GeoCoord, Vec<DeliveryRequest>)> {
    let file = File::open(path)?;
    load_reader(BufReader::new(file))
}

/// Like [`load_path`] but accepts any `BufRead` source.
pub fn load_reader<R: BufRead>(reader: R) -> CourierResult<(GeoCoord, Vec<DeliveryRequest>)> {
    let mut lines = reader.lines();

    let depot_line = lines
        .next()
        .transpose()?
        .ok_or_else(|| CourierError::Parse("deliveries file is empty".to_string()))?;
    let mut tokens = depot_line.split_whitespace();
    let (lat, lon) = match (tokens.next(), tokens.next()) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(CourierError::Parse(format!(
                "depot line {:?} must be `lat lon`",
                depot_line.trim()
            )))
        }
    };
    let depot = GeoCoord::new(lat, lon)?;

    let mut requests = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_delivery(&line) {
            Some(request) => requests.push(request),
            None => warn!(line = line.trim(), "skipping malformed delivery line"),
        }
    }
    Ok((depot, requests))
}

fn parse_delivery(line: &str) -> Option<DeliveryRequest> {
    // The item field ends at a second colon; text past it is dropped.
    let mut fields = line.splitn(3, ':');
    let coords = fields.next()?;
    let item = fields.next()?;
    if item.is_empty() {
        return None;
    }
    let tokens: Vec<&str> = coords.split_whitespace().collect();
    let [lat, lon] = tokens.as_slice() else {
        return None;
    };
    let location = GeoCoord::new(lat, lon).ok()?;
    Some(DeliveryRequest::new(item, location))
}
