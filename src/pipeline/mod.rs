pub mod graph_builder;

pub use graph_builder::{
    build_graph, BucketEntry, BucketRules, Buckets, BuildOptions, GraphBuilder, JoinStrategy,
};
