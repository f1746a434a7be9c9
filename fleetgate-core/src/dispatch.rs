//! Static prefix dispatch table.
//!
//! Routing to the four domain handler groups is a fixed table of
//! `(prefix, group)` mounts resolved by longest-prefix match. The table is
//! data, not registration order: resolution gives the same answer however
//! the mounts are listed.

/// The four domain handler groups reachable through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerGroup {
    Auth,
    Vehicle,
    Reservation,
    Reimbursement,
}

impl HandlerGroup {
    /// Short name used in logs and placeholder responses.
    pub fn name(self) -> &'static str {
        match self {
            HandlerGroup::Auth => "auth",
            HandlerGroup::Vehicle => "vehicle",
            HandlerGroup::Reservation => "reservation",
            HandlerGroup::Reimbursement => "reimbursement",
        }
    }
}

/// One row of the dispatch table: a path prefix and the group that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mount {
    pub prefix: &'static str,
    pub group: HandlerGroup,
}

/// The mounts every deployment carries.
pub const STANDARD_MOUNTS: [Mount; 4] = [
    Mount {
        prefix: "/api/auth",
        group: HandlerGroup::Auth,
    },
    Mount {
        prefix: "/api/vehicle",
        group: HandlerGroup::Vehicle,
    },
    Mount {
        prefix: "/api/reservation",
        group: HandlerGroup::Reservation,
    },
    Mount {
        prefix: "/api/reimbursements",
        group: HandlerGroup::Reimbursement,
    },
];

/// Immutable prefix → handler group table.
#[derive(Debug, Clone)]
pub struct DispatchTable {
    mounts: Vec<Mount>,
}

impl DispatchTable {
    /// The standard table: the four `/api` prefixes of [`STANDARD_MOUNTS`].
    pub fn standard() -> Self {
        Self::new(STANDARD_MOUNTS)
    }

    /// Build a table from explicit mounts.
    pub fn new(mounts: impl IntoIterator<Item = Mount>) -> Self {
        Self {
            mounts: mounts.into_iter().collect(),
        }
    }

    /// The mounts, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Mount> {
        self.mounts.iter()
    }

    /// Resolve a request path to the handler group that owns it.
    ///
    /// A prefix matches when the path equals it or continues with `/`
    /// immediately after it, so `/api/vehicle` owns `/api/vehicle` and
    /// `/api/vehicle/list` but never `/api/vehicles`. Among matching
    /// mounts the longest prefix wins, independent of table order.
    pub fn resolve(&self, path: &str) -> Option<HandlerGroup> {
        self.mounts
            .iter()
            .filter(|mount| prefix_matches(mount.prefix, path))
            .max_by_key(|mount| mount.prefix.len())
            .map(|mount| mount.group)
    }
}

/// Segment-boundary prefix test. The root prefix `/` matches every path.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
