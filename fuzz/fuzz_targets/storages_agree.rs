#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    core::{GraphBase, Neighbors},
    infra::arbitrary::{MutOp, MutOpsSeq},
    storage::{Digraph, WeightedDigraph},
};

// Weighted and unweighted storages must agree on the structure when given the
// same operations.
fuzz_target!(|seq: MutOpsSeq<()>| {
    let mut unweighted = Digraph::new(seq.vertex_count);
    let mut weighted = WeightedDigraph::new(seq.vertex_count);

    for op in seq {
        let weighted_result = match op.clone() {
            MutOp::Connect(from, to, ()) => MutOp::Connect(from, to, 1.0).apply(&mut weighted),
            MutOp::Disconnect(from, to) => MutOp::<f64>::Disconnect(from, to).apply(&mut weighted),
        };
        let unweighted_result = op.apply(&mut unweighted);

        assert_eq!(unweighted_result, weighted_result);
        assert_eq!(unweighted.edge_count(), weighted.edge_count());

        for v in 0..unweighted.vertex_count() {
            assert!(
                unweighted.neighbors(v).eq(weighted.neighbors(v)),
                "adjacency of {v} differs"
            );
        }
    }
});
