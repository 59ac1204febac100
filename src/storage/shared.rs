use std::fmt;

use crate::{common::Bag, core::error::VertexOutOfRange};

pub fn bag_of<T>(adj: &[Bag<T>], vertex: usize) -> &Bag<T> {
    match adj.get(vertex) {
        Some(bag) => bag,
        None => panic!("{}", VertexOutOfRange::new(vertex, adj.len())),
    }
}

pub fn fmt_adjacency<T, F>(
    f: &mut fmt::Formatter<'_>,
    adj: &[Bag<T>],
    edge_count: usize,
    mut fmt_item: F,
) -> fmt::Result
where
    F: FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    writeln!(f, "{} vertices, {} edges", adj.len(), edge_count)?;

    for (vertex, bag) in adj.iter().enumerate() {
        write!(f, "{vertex}:")?;
        for item in bag {
            f.write_str(" ")?;
            fmt_item(f, item)?;
        }
        writeln!(f)?;
    }

    Ok(())
}
