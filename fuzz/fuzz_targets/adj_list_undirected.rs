#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    storage::Graph,
};

fuzz_target!(|seq: MutOpsSeq<()>| {
    let mut graph = Graph::new(seq.vertex_count);

    for op in seq {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
