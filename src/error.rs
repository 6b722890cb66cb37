use std::fmt;

use crate::NodeId;

#[derive(Debug)]
pub enum Error {
    NoPathFound { source: NodeId, target: NodeId },
    EmptyGraph,
    UnknownNode(NodeId),
    Cancelled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoPathFound { source, target } => {
                write!(f, "no path from node {source} to node {target}")
            }
            Error::EmptyGraph => write!(f, "graph has no nodes with coordinates"),
            Error::UnknownNode(id) => write!(f, "unknown node id: {id}"),
            Error::Cancelled => write!(f, "search cancelled"),
        }
    }
}

impl std::error::Error for Error {}
