//! Typed handles into the street map's internal arenas.
//!
//! A loaded map stores its coordinates, interned street names, and directed
//! edges in flat arenas; `NodeId`, `NameId`, and `EdgeId` are indexes into
//! those arenas.  A handle is only meaningful for the map that issued it —
//! the durable identity of a coordinate is its textual form, which is why
//! errors and commands carry `GeoCoord`s and street-name strings, never
//! handles.
//!
//! Handles are `u32`: a street map big enough to overflow one would not fit
//! in memory long before the cast became a problem.

/// Generate one arena-handle type.
macro_rules! arena_handle {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Placeholder meaning "no handle yet".  Search state such as
            /// the router's predecessor array starts out filled with this;
            /// it compares unequal to every real slot.
            pub const INVALID: $name = $name(u32::MAX);

            /// Handle for the arena slot at `index`.
            #[inline]
            pub fn new(index: usize) -> $name {
                debug_assert!(index < u32::MAX as usize);
                $name(index as u32)
            }

            /// The arena slot this handle points at.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_handle! {
    /// Handle of an interned coordinate (a street-graph vertex).
    pub struct NodeId;
}

arena_handle! {
    /// Handle of a directed street-graph edge.
    pub struct EdgeId;
}

arena_handle! {
    /// Handle of an interned street name.
    pub struct NameId;
}
