//! Unit tests for courier-map.
//!
//! All tests load hand-crafted map text through `io::Cursor`, so they run
//! without any map file on disk.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use courier_core::GeoCoord;

    use crate::StreetMap;

    /// Straight east-west "Main St" through A, B, C, then "Oak Ave" turning
    /// north to D, plus a disconnected "Island Rd" far away.
    pub const FIXTURE: &str = "\
Main St
2
34.0000 -118.3000 34.0000 -118.2000
34.0000 -118.2000 34.0000 -118.1000
Oak Ave
1
34.0000 -118.1000 34.1000 -118.1000
Island Rd
1
40.0000 -70.0000 40.1000 -70.0000
";

    pub fn fixture() -> StreetMap {
        StreetMap::load_reader(Cursor::new(FIXTURE)).unwrap()
    }

    pub fn load(text: &str) -> StreetMap {
        StreetMap::load_reader(Cursor::new(text.to_string())).unwrap()
    }

    pub fn coord(lat: &str, lon: &str) -> GeoCoord {
        GeoCoord::new(lat, lon).unwrap()
    }

    pub fn a() -> GeoCoord {
        coord("34.0000", "-118.3000")
    }

    pub fn b() -> GeoCoord {
        coord("34.0000", "-118.2000")
    }

    pub fn c() -> GeoCoord {
        coord("34.0000", "-118.1000")
    }

    pub fn d() -> GeoCoord {
        coord("34.1000", "-118.1000")
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use courier_core::CourierError;

    use super::helpers::{coord, fixture, load};
    use crate::StreetMap;

    #[test]
    fn counts() {
        let map = fixture();
        // 4 undirected segments → 8 directed edges; 6 distinct coords.
        assert_eq!(map.street_count(), 3);
        assert_eq!(map.edge_count(), 8);
        assert_eq!(map.node_count(), 6);
        assert!(!map.is_empty());
    }

    #[test]
    fn empty_input() {
        let map = load("");
        assert!(map.is_empty());
        assert_eq!(map.edge_count(), 0);
    }

    #[test]
    fn zero_segment_street() {
        let map = load("Ghost Rd\n0\n");
        assert_eq!(map.street_count(), 1);
        assert_eq!(map.node_count(), 0);
    }

    #[test]
    fn blank_lines_and_trailing_whitespace_tolerated() {
        let map = load("\nMain St  \n1\n34.0 -118.3 34.0 -118.2   \n\n\n");
        assert_eq!(map.street_count(), 1);
        assert_eq!(map.edge_count(), 2);
        // Trailing whitespace on the name line is not part of the name.
        assert!(map.neighbors(&coord("34.0", "-118.3")).is_some());
    }

    #[test]
    fn crlf_line_endings_tolerated() {
        let map = load("Main St\r\n1\r\n34.0 -118.3 34.0 -118.2\r\n");
        assert_eq!(map.edge_count(), 2);
        let segs = map.neighbors(&coord("34.0", "-118.3")).unwrap();
        assert_eq!(segs[0].name, "Main St");
    }

    #[test]
    fn bad_count_is_parse_error() {
        let err = StreetMap::load_reader(Cursor::new("Main St\nfour\n")).unwrap_err();
        assert!(matches!(err, CourierError::Parse(_)), "got {err:?}");
        let err = StreetMap::load_reader(Cursor::new("Main St\n-1\n")).unwrap_err();
        assert!(matches!(err, CourierError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn missing_count_is_parse_error() {
        let err = StreetMap::load_reader(Cursor::new("Main St\n")).unwrap_err();
        assert!(matches!(err, CourierError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn missing_coordinate_line_is_parse_error() {
        let err =
            StreetMap::load_reader(Cursor::new("Main St\n2\n34.0 -118.3 34.0 -118.2\n"))
                .unwrap_err();
        assert!(matches!(err, CourierError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn short_coordinate_line_is_parse_error() {
        let err =
            StreetMap::load_reader(Cursor::new("Main St\n1\n34.0 -118.3 34.0\n")).unwrap_err();
        assert!(matches!(err, CourierError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn bad_float_is_parse_error() {
        let err = StreetMap::load_reader(Cursor::new("Main St\n1\n34.0 west 34.0 -118.2\n"))
            .unwrap_err();
        assert!(matches!(err, CourierError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn duplicate_segments_are_kept() {
        let map = load("Dup St\n2\n0.0 0.0 0.0 0.1\n0.0 0.0 0.0 0.1\n");
        assert_eq!(map.node_count(), 2);
        assert_eq!(map.edge_count(), 4);
        assert_eq!(map.neighbors(&coord("0.0", "0.0")).unwrap().len(), 2);
    }
}

// ── Graph structure ───────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use courier_core::NodeId;

    use super::helpers::{b, coord, d, fixture};

    #[test]
    fn neighbors_unknown_coord_is_none() {
        let map = fixture();
        assert!(map.neighbors(&coord("1.0", "1.0")).is_none());
    }

    #[test]
    fn lookup_is_textual() {
        let map = fixture();
        // Same point, different spelling: not a key.
        assert!(map.neighbors(&coord("34.0", "-118.3")).is_none());
        assert!(map.neighbors(&coord("34.0000", "-118.3000")).is_some());
    }

    #[test]
    fn segments_start_at_their_key() {
        let map = fixture();
        for seg in map.neighbors(&b()).unwrap() {
            assert_eq!(seg.start, b());
        }
    }

    #[test]
    fn symmetry() {
        // Every stored segment's reverse is stored under its end coord.
        let map = fixture();
        for node_idx in 0..map.node_count() {
            let key = map.coord(NodeId::new(node_idx)).clone();
            for seg in map.neighbors(&key).unwrap() {
                let back = map.neighbors(&seg.end).expect("end coord must be a key");
                assert!(
                    back.contains(&seg.reversed()),
                    "missing reverse of {} → {} on {}",
                    seg.start,
                    seg.end,
                    seg.name
                );
            }
        }
    }

    #[test]
    fn endpoint_only_coords_are_keys() {
        let map = fixture();
        // D appears only as a segment end in the file, but is still a key.
        assert_eq!(map.neighbors(&d()).unwrap().len(), 1);
    }
}

// ── Round-trip emission ───────────────────────────────────────────────────────

#[cfg(test)]
mod roundtrip {
    use std::io::Cursor;

    use courier_core::NodeId;

    use super::helpers::{fixture, load};
    use crate::StreetMap;

    #[test]
    fn single_street_is_byte_identical() {
        let text = "Main St\n2\n34.0 -118.3 34.0 -118.2\n34.0 -118.2 34.0 -118.1\n";
        let map = load(text);
        let mut out = Vec::new();
        map.write_map(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);
    }

    #[test]
    fn reload_preserves_graph() {
        let map = fixture();
        let mut out = Vec::new();
        map.write_map(&mut out).unwrap();
        let reloaded = StreetMap::load_reader(Cursor::new(out)).unwrap();

        assert_eq!(reloaded.street_count(), map.street_count());
        assert_eq!(reloaded.node_count(), map.node_count());
        assert_eq!(reloaded.edge_count(), map.edge_count());
        for node_idx in 0..map.node_count() {
            let key = map.coord(NodeId::new(node_idx));
            let mut before = map.neighbors(key).unwrap();
            let mut after = reloaded.neighbors(key).unwrap();
            before.sort_by(|x, y| (&x.end, &x.name).cmp(&(&y.end, &y.name)));
            after.sort_by(|x, y| (&x.end, &x.name).cmp(&(&y.end, &y.name)));
            assert_eq!(before, after);
        }
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use courier_core::{crow_miles, CourierError};

    use super::helpers::{a, b, c, coord, d, fixture, load};
    use crate::{AStarRouter, Router};

    #[test]
    fn trivial_same_coord() {
        let map = fixture();
        let route = AStarRouter.route(&map, &a(), &a()).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.miles, 0.0);
    }

    #[test]
    fn straight_line_route() {
        let map = fixture();
        let route = AStarRouter.route(&map, &a(), &d()).unwrap();

        let names: Vec<&str> = route.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Main St", "Main St", "Oak Ave"]);

        // Contiguity and endpoints.
        assert_eq!(route.segments[0].start, a());
        assert_eq!(route.segments.last().unwrap().end, d());
        for pair in route.segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }

        // Cost equals the sum of segment lengths.
        let expected =
            crow_miles(&a(), &b()) + crow_miles(&b(), &c()) + crow_miles(&c(), &d());
        assert!((route.miles - expected).abs() < 1e-9 * expected.max(1.0));
    }

    #[test]
    fn reverse_route_mirrors_forward() {
        let map = fixture();
        let fwd = AStarRouter.route(&map, &a(), &d()).unwrap();
        let back = AStarRouter.route(&map, &d(), &a()).unwrap();
        assert_eq!(back.segments.len(), fwd.segments.len());
        assert!((back.miles - fwd.miles).abs() < 1e-12);
        assert_eq!(back.segments[0].start, d());
        assert_eq!(back.segments.last().unwrap().end, a());
    }

    #[test]
    fn unknown_start_is_bad_coord() {
        let map = fixture();
        let err = AStarRouter.route(&map, &coord("0.0", "0.0"), &a()).unwrap_err();
        assert!(matches!(err, CourierError::BadCoord(_)), "got {err:?}");
    }

    #[test]
    fn unknown_end_is_bad_coord() {
        let map = fixture();
        let err = AStarRouter.route(&map, &a(), &coord("0.0", "0.0")).unwrap_err();
        assert!(matches!(err, CourierError::BadCoord(_)), "got {err:?}");
    }

    #[test]
    fn disconnected_component_is_no_route() {
        let map = fixture();
        let island = coord("40.0000", "-70.0000");
        let err = AStarRouter.route(&map, &a(), &island).unwrap_err();
        assert!(matches!(err, CourierError::NoRoute { .. }), "got {err:?}");
    }

    #[test]
    fn picks_shorter_of_two_detours() {
        // Two two-hop paths from (0,0) to (0,0.2): a long northern detour
        // through (0.3, 0.1) and a short southern one through (-0.05, 0.1).
        let map = load(
            "North Route\n2\n\
             0.0 0.0 0.3 0.1\n\
             0.3 0.1 0.0 0.2\n\
             South Route\n2\n\
             0.0 0.0 -0.05 0.1\n\
             -0.05 0.1 0.0 0.2\n",
        );
        let start = coord("0.0", "0.0");
        let end = coord("0.0", "0.2");
        let route = AStarRouter.route(&map, &start, &end).unwrap();

        assert!(route.segments.iter().all(|s| s.name == "South Route"));
        let via = coord("-0.05", "0.1");
        let expected = crow_miles(&start, &via) + crow_miles(&via, &end);
        assert!((route.miles - expected).abs() < 1e-9);
    }

    #[test]
    fn deterministic_across_runs() {
        let map = fixture();
        let r1 = AStarRouter.route(&map, &a(), &d()).unwrap();
        let r2 = AStarRouter.route(&map, &a(), &d()).unwrap();
        assert_eq!(r1.segments, r2.segments);
        assert_eq!(r1.miles, r2.miles);
    }
}
