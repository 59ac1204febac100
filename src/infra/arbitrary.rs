use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::core::{error::EdgeError, Connect};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    pub fn map(self, m: usize) -> Option<Index> {
        self.get(m).map(Index)
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<E> {
    Connect(Index, Index, E),
    Disconnect(Index, Index),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult {
    Connect(Result<(), EdgeError>),
    Disconnect(Result<usize, EdgeError>),
}

impl<E> MutOp<E> {
    /// Indices are taken modulo the vertex count of the graph, so the
    /// operation always targets existing vertices of a nonempty graph.
    pub fn apply<G>(self, graph: &mut G) -> MutOpResult
    where
        G: Connect<E>,
    {
        let n = graph.vertex_count();

        match self {
            MutOp::Connect(from, to, edge) => MutOpResult::Connect(graph.try_connect(
                from.get(n).unwrap_or_default(),
                to.get(n).unwrap_or_default(),
                edge,
            )),
            MutOp::Disconnect(from, to) => MutOpResult::Disconnect(graph.try_disconnect(
                from.get(n).unwrap_or_default(),
                to.get(n).unwrap_or_default(),
            )),
        }
    }
}

pub struct MutOpsSeq<E> {
    pub vertex_count: usize,
    pub ops: Vec<MutOp<E>>,
}

impl<E> IntoIterator for MutOpsSeq<E> {
    type Item = MutOp<E>;
    type IntoIter = std::vec::IntoIter<MutOp<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<E> MutOpsSeq<E> {
    pub fn replay<G>(self, graph: &mut G)
    where
        E: fmt::Debug,
        G: Connect<E>,
    {
        println!("let mut graph = Graph::new({});", graph.vertex_count());
        println!();

        for op in self {
            let n = graph.vertex_count();

            match &op {
                MutOp::Connect(from, to, edge) => println!(
                    "graph.connect({}, {}, {edge:?});",
                    from.get(n).unwrap_or_default(),
                    to.get(n).unwrap_or_default()
                ),
                MutOp::Disconnect(from, to) => println!(
                    "graph.disconnect({}, {});",
                    from.get(n).unwrap_or_default(),
                    to.get(n).unwrap_or_default()
                ),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<E: fmt::Debug> fmt::Debug for MutOpsSeq<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq {{")?;
        writeln!(f, "    vertex_count: {},", self.vertex_count)?;
        writeln!(f, "    ops: vec![")?;

        for op in self.ops.iter() {
            writeln!(f, "        MutOp::{:?},", op)?;
        }

        writeln!(f, "    ],")?;
        writeln!(f, "}}")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    Connect,
    Disconnect,
}

impl<'a, E> Arbitrary<'a> for MutOpsSeq<E>
where
    E: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertex_count = u.int_in_range(1..=256)?;
        let r = u.nice_f64()?;

        let max_edges = vertex_count * (vertex_count + 1) / 2;
        let m_target = ((max_edges as f64 * r).round() as usize).max(1);

        let total = u.len().max(1);

        let mut m = 0usize;
        let mut ops = Vec::new();

        while !u.is_empty() {
            let re = (m as f64 / m_target as f64).min(1.0);
            let r = (total - u.len()) as f64 / total as f64;

            let op = match arbitrary_op(u, re, r) {
                Ok(op) => op,
                Err(_) => break,
            };

            match op {
                MutOp::Connect(_, _, _) => m += 1,
                MutOp::Disconnect(_, _) => m = m.saturating_sub(1),
            }

            ops.push(op);
        }

        Ok(MutOpsSeq { vertex_count, ops })
    }
}

fn arbitrary_op<'a, E>(u: &mut Unstructured<'a>, re: f64, r: f64) -> arbitrary::Result<MutOp<E>>
where
    E: Arbitrary<'a>,
{
    // The more edges are in the graph, the less is needed to add them. The
    // ratio is biased towards adding by averaging with the progress ratio.
    let we = non_linear_decrease(0.6 * re + 0.4 * r);

    u.choose_weighted(
        &[OpKind::Connect, OpKind::Disconnect],
        &[we, (1.0 - we) * 0.5],
    )
    .and_then(|kind| match kind {
        OpKind::Connect => Ok(MutOp::Connect(
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
        )),
        OpKind::Disconnect => Ok(MutOp::Disconnect(u.arbitrary()?, u.arbitrary()?)),
    })
}

trait UnstructuredExt {
    fn nice_f64(&mut self) -> arbitrary::Result<f64>;
    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T>;
}

impl<'a> UnstructuredExt for Unstructured<'a> {
    fn nice_f64(&mut self) -> arbitrary::Result<f64> {
        const RESOLUTION: u8 = 100;
        let int = self.int_in_range(0..=RESOLUTION)?;
        Ok(int as f64 / RESOLUTION as f64)
    }

    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T> {
        if choices.is_empty() || choices.len() != weights.len() {
            return Err(arbitrary::Error::EmptyChoose);
        }

        let weight_sum = weights.iter().copied().sum::<f64>();
        let bound = self.nice_f64()? * weight_sum;

        let mut acc = 0.0;
        for (choice, weight) in choices.iter().zip(weights.iter().copied()) {
            acc += weight;

            if acc >= bound {
                return Ok(choice);
            }
        }

        // Rounding errors in the accumulated sum.
        Ok(&choices[choices.len() - 1])
    }
}

// f(0) = 1, f(1) ~= 0.152
fn non_linear_decrease(x: f64) -> f64 {
    1.0 / (x + 1.0).powf(std::f64::consts::E)
}
