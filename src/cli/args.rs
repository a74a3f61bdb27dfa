use clap::Args;
use std::path::PathBuf;
use tracegraph_core::graph::NodeId;

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Graph document (JSON, or YAML by .yaml/.yml extension)
    pub graph: PathBuf,

    /// Node to start from
    #[arg(long, short)]
    pub start: NodeId,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Graph document (JSON, or YAML by .yaml/.yml extension)
    pub graph: PathBuf,

    /// Node to start from
    #[arg(long, short)]
    pub start: NodeId,

    /// Node to reach
    #[arg(long, short)]
    pub end: NodeId,
}
