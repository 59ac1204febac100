#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    storage::WeightedGraph,
};

fuzz_target!(|seq: MutOpsSeq<f64>| {
    let mut graph = WeightedGraph::new(seq.vertex_count);

    for op in seq {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
