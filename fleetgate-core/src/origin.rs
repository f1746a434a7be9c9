//! Cross-origin admission policy.
//!
//! The gateway trusts callers that declare no origin at all (direct API
//! clients, server-to-server traffic) and admits browser traffic only when
//! the declared origin is allow-listed. Matching is exact string equality:
//! no wildcards, no suffix matching, no case folding, no trailing-slash
//! trimming.
//!
//! The decision is a pure function of the allow-list and the declared
//! origin, re-evaluated independently for every request.

/// Origins granted credentialed cross-origin access in every build.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "https://company-vehicle-management.web.app",
    "https://company-vehicle-management.firebaseapp.com",
];

/// Ordered set of origins permitted to make credentialed cross-origin
/// requests. Fixed at process start, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    origins: Vec<String>,
}

impl AllowList {
    /// Build an allow-list from origin strings. Entries are kept verbatim;
    /// the order is preserved but has no effect on matching.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact membership test.
    pub fn contains(&self, origin: &str) -> bool {
        self.origins.iter().any(|entry| entry == origin)
    }

    /// The configured origins, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    /// Decide whether a request carrying `origin` may proceed.
    ///
    /// - No origin, or an empty origin value, admits the request without a
    ///   cross-origin grant: non-browser clients do not send the header and
    ///   are trusted at this layer.
    /// - An allow-listed origin admits the request and names the origin the
    ///   grant applies to.
    /// - Any other origin is rejected; the request must fail before any
    ///   handler group runs.
    pub fn evaluate<'o>(&self, origin: Option<&'o str>) -> Decision<'o> {
        match origin {
            None | Some("") => Decision::Admit { matched: None },
            Some(origin) if self.contains(origin) => Decision::Admit {
                matched: Some(origin),
            },
            Some(origin) => Decision::Reject { origin },
        }
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS)
    }
}

/// Outcome of evaluating one request's declared origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<'o> {
    /// The request may proceed. `matched` carries the allow-listed origin
    /// the credentialed grant applies to, `None` when the caller declared
    /// no origin.
    Admit { matched: Option<&'o str> },
    /// Origin declared but not allow-listed.
    Reject { origin: &'o str },
}

impl Decision<'_> {
    /// True when the request may reach a handler group.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Decision::Admit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_origin_is_admitted() {
        let allow = AllowList::default();
        assert_eq!(allow.evaluate(None), Decision::Admit { matched: None });
    }

    #[test]
    fn empty_origin_is_treated_as_absent() {
        let allow = AllowList::default();
        assert_eq!(allow.evaluate(Some("")), Decision::Admit { matched: None });
    }

    #[test]
    fn every_default_origin_is_admitted_with_a_grant() {
        let allow = AllowList::default();
        for origin in DEFAULT_ALLOWED_ORIGINS {
            assert_eq!(
                allow.evaluate(Some(origin)),
                Decision::Admit {
                    matched: Some(origin)
                },
                "expected {origin} to be admitted"
            );
        }
    }

    #[test]
    fn unknown_origin_is_rejected() {
        let allow = AllowList::default();
        assert_eq!(
            allow.evaluate(Some("https://evil.example.com")),
            Decision::Reject {
                origin: "https://evil.example.com"
            }
        );
    }

    #[test]
    fn matching_is_exact_not_normalized() {
        let allow = AllowList::default();
        // Trailing slash, case change, and scheme change must all miss.
        for near_miss in [
            "http://localhost:3000/",
            "http://LOCALHOST:3000",
            "https://localhost:3000",
            "http://localhost:30000",
            "https://company-vehicle-management.web.app.evil.example.com",
        ] {
            assert!(
                !allow.evaluate(Some(near_miss)).is_admitted(),
                "expected {near_miss} to be rejected"
            );
        }
    }

    #[test]
    fn list_order_does_not_affect_matching() {
        let forward = AllowList::new(["https://a.example", "https://b.example"]);
        let reverse = AllowList::new(["https://b.example", "https://a.example"]);
        for origin in ["https://a.example", "https://b.example"] {
            assert!(forward.evaluate(Some(origin)).is_admitted());
            assert!(reverse.evaluate(Some(origin)).is_admitted());
        }
    }

    #[test]
    fn decisions_are_independent_across_calls() {
        let allow = AllowList::default();
        let first = allow.evaluate(Some("http://localhost:3000"));
        let second = allow.evaluate(Some("http://localhost:3000"));
        assert_eq!(first, second);
        assert!(second.is_admitted());
    }
}
