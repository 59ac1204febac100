use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
pub struct VertexOutOfRange {
    pub vertex: usize,
    pub vertex_count: usize,
}

impl VertexOutOfRange {
    pub fn new(vertex: usize, vertex_count: usize) -> Self {
        Self {
            vertex,
            vertex_count,
        }
    }

    pub fn check(vertex: usize, vertex_count: usize) -> Result<(), Self> {
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(Self::new(vertex, vertex_count))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("invalid edge {from} -> {to}: {kind}")]
pub struct EdgeError {
    pub from: usize,
    pub to: usize,
    pub kind: EdgeErrorKind,
}

impl EdgeError {
    pub fn new(from: usize, to: usize, kind: EdgeErrorKind) -> Self {
        Self { from, to, kind }
    }

    pub fn check(from: usize, to: usize, vertex_count: usize) -> Result<(), Self> {
        if from >= vertex_count {
            Err(Self::new(from, to, EdgeErrorKind::SourceAbsent))
        } else if to >= vertex_count {
            Err(Self::new(from, to, EdgeErrorKind::DestinationAbsent))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for EdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            EdgeErrorKind::SourceAbsent => "source does not exist",
            EdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}
