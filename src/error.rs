//! Error types shared by the builders and graph algorithms.

/// A structural rule rejected by a build policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildViolation {
    /// An edge starts and ends at the same node.
    SelfLoop,
    /// Two edges connect the same ordered pair of nodes.
    ParallelEdge,
    /// An edge endpoint is missing from the node collection.
    DanglingEndpoint,
}

impl core::fmt::Display for BuildViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BuildViolation::SelfLoop => "edge starts and ends at the same node",
            BuildViolation::ParallelEdge => "more than one edge between the same pair of nodes",
            BuildViolation::DanglingEndpoint => "edge endpoint is not a node of the graph",
        };
        f.write_str(msg)
    }
}

/// Graph construction and algorithm errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The input does not satisfy an algorithm precondition.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A topological order could not be computed.
    #[error("sorted order could not be computed; graph has at least one cycle ({remaining_edges} edge(s) left unordered)")]
    Cycle {
        /// Number of edges still unresolved when the frontier ran dry.
        remaining_edges: usize,
    },

    /// A build policy rejected the accumulated graph.
    #[error("graph rejected by build policy: {0}")]
    Build(BuildViolation),
}

impl GraphError {
    /// Returns `true` for [`GraphError::Cycle`].
    pub fn is_cycle(&self) -> bool {
        matches!(self, GraphError::Cycle { .. })
    }
}

/// Result type for graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
