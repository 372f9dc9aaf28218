use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

use zumen::flow::{Connection, FlowNode, NodePayload, Position, Viewport};
use zumen::graph::{GraphStore, NodeIdGenerator};

/// A CLI tool to generate random decision flow snapshots for demos and tests
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// Flow identifier used for node ids
    #[arg(long, default_value_t = 170)]
    flow_id: u32,

    /// Number of nodes to generate
    #[arg(long, default_value_t = 8)]
    nodes: usize,

    /// Chance (0.0 - 1.0) of an extra edge between two random nodes
    #[arg(long, default_value_t = 0.3)]
    extra_edges: f64,
}

const NODE_KINDS: &[&str] = &["FUNCTION", "DECISION", "SUBFLOW", "END"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.extra_edges) {
        eprintln!(
            "Error: --extra-edges ({}) must be between 0.0 and 1.0",
            cli.extra_edges
        );
        std::process::exit(1);
    }

    println!(
        "Generating flow {} with {} nodes...",
        cli.flow_id, cli.nodes
    );

    let mut store = GraphStore::new();
    let ids = NodeIdGenerator::new(cli.flow_id);

    for i in 0..cli.nodes {
        store.add_node(generate_node(&mut rng, &ids, i));
    }

    // Chain the nodes in order so every flow has a spine, then sprinkle
    // extra edges between random pairs.
    let node_ids: Vec<String> = store.nodes().iter().map(|n| n.id.clone()).collect();
    for pair in node_ids.windows(2) {
        store.add_edge(Connection::new(pair[0].clone(), pair[1].clone()));
    }
    for _ in 0..cli.nodes {
        if cli.nodes >= 2 && rng.random_bool(cli.extra_edges) {
            let a = rng.random_range(0..node_ids.len());
            let b = rng.random_range(0..node_ids.len());
            if a != b {
                store.add_edge(Connection::new(node_ids[a].clone(), node_ids[b].clone()));
            }
        }
    }

    let snapshot = store.snapshot(Viewport::default());
    let json_output = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Saved {} nodes and {} edges to '{}'",
        snapshot.nodes.len(),
        snapshot.edges.len(),
        cli.output
    );

    Ok(())
}

fn generate_node(rng: &mut ThreadRng, ids: &NodeIdGenerator, index: usize) -> FlowNode {
    let kind = NODE_KINDS[rng.random_range(0..NODE_KINDS.len())];
    let mut payload = NodePayload::named(format!("{} {}", kind, index));
    payload.node_type = Some(kind.to_string());
    payload.flow_node_id = Some(index as i64);
    payload.step = Some(format!("STEP-{}", index));

    FlowNode::new(
        ids.next(index),
        Position::new(
            rng.random_range(0.0..1200.0),
            rng.random_range(0.0..800.0),
        ),
        payload,
    )
}
