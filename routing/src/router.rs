//! Interned router identifiers.

use std::collections::BTreeSet;

/// An opaque handle to a router known to a [Routers] registry.
///
/// Handles are assigned in lexicographic order of their labels, so comparing two
/// handles orders them the same way as comparing their labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Router(u32);

impl Router {
    /// Returns the position of this router in its registry.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The fixed set of routers participating in a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Routers {
    labels: Vec<String>,
}

impl Routers {
    /// Create a registry from a collection of labels.
    ///
    /// Repeated labels refer to the same router.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    /// Number of routers.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if there are no routers.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Resolve a label to its router, if it is a member.
    pub fn lookup(&self, label: &str) -> Option<Router> {
        self.labels
            .binary_search_by(|candidate| candidate.as_str().cmp(label))
            .ok()
            .map(|index| Router(index as u32))
    }

    /// Returns the label of a router.
    ///
    /// # Panics
    ///
    /// Panics if `router` was not issued by this registry.
    pub fn label(&self, router: Router) -> &str {
        &self.labels[router.index()]
    }

    /// Iterate over all routers in identifier order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Router> + '_ {
        (0..self.labels.len()).map(|index| Router(index as u32))
    }
}
