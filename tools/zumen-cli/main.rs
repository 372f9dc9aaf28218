use clap::{Parser, Subcommand};
use std::fs;
use std::process;

use zumen::export;
use zumen::flow::FlowSnapshot;
use zumen::session::{FileStorage, SessionKey, SessionStore};

/// Manage persisted decision flow sessions from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the session slot files
    #[arg(short, long, default_value = "sessions")]
    session_dir: String,

    /// Flow identifier; the session slot key is derived from it
    #[arg(short, long, default_value_t = 170)]
    flow_id: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a snapshot JSON file into the session slot
    Import {
        /// Path to the snapshot JSON file
        file: String,
    },
    /// Print the persisted snapshot as JSON
    Export {
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the persisted snapshot as flat node/edge rows
    Rows,
    /// Summarize the persisted snapshot
    Show,
    /// Remove the session slot
    Clear,
}

fn main() {
    let cli = Cli::parse();

    let storage = match FileStorage::new(&cli.session_dir) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("Failed to open session directory '{}': {}", cli.session_dir, e);
            process::exit(1);
        }
    };
    let mut session = SessionStore::new(SessionKey::for_flow(cli.flow_id), Box::new(storage));

    let result = match cli.command {
        Command::Import { file } => import(&mut session, &file),
        Command::Export { pretty } => export_json(&session, pretty),
        Command::Rows => rows(&session, cli.flow_id),
        Command::Show => show(&session),
        Command::Clear => clear(&mut session),
    };

    if let Err(message) = result {
        eprintln!("{}", message);
        process::exit(1);
    }
}

fn import(session: &mut SessionStore, file: &str) -> Result<(), String> {
    let text =
        fs::read_to_string(file).map_err(|e| format!("Failed to read '{}': {}", file, e))?;
    let snapshot: FlowSnapshot =
        serde_json::from_str(&text).map_err(|e| format!("'{}' is not a valid snapshot: {}", file, e))?;
    session
        .save(&snapshot)
        .map_err(|e| format!("Failed to save session: {}", e))?;
    println!(
        "Imported {} nodes and {} edges into slot '{}'",
        snapshot.nodes.len(),
        snapshot.edges.len(),
        session.key()
    );
    Ok(())
}

fn restore(session: &SessionStore) -> Result<FlowSnapshot, String> {
    match session.restore() {
        Ok(Some(snapshot)) => Ok(snapshot),
        Ok(None) => Err(format!("No session found at slot '{}'", session.key())),
        Err(e) => Err(format!("Failed to restore session: {}", e)),
    }
}

fn export_json(session: &SessionStore, pretty: bool) -> Result<(), String> {
    let snapshot = restore(session)?;
    let json = if pretty {
        export::to_json_pretty(&snapshot)
    } else {
        export::to_json(&snapshot)
    }
    .map_err(|e| format!("Export failed: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn rows(session: &SessionStore, flow_id: u32) -> Result<(), String> {
    let snapshot = restore(session)?;
    let table =
        export::flatten(&snapshot, flow_id).map_err(|e| format!("Row export failed: {}", e))?;
    let json =
        serde_json::to_string_pretty(&table).map_err(|e| format!("Row export failed: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn show(session: &SessionStore) -> Result<(), String> {
    let snapshot = restore(session)?;
    println!("Session slot: {}", session.key());
    println!("Nodes: {}", snapshot.nodes.len());
    println!("Edges: {}", snapshot.edges.len());
    println!(
        "Viewport: x={} y={} zoom={}",
        snapshot.viewport.x, snapshot.viewport.y, snapshot.viewport.zoom
    );
    for node in &snapshot.nodes {
        let name = node.data.node_name.as_deref().unwrap_or("<unnamed>");
        println!(
            "  node {} '{}' at ({}, {})",
            node.id, name, node.position.x, node.position.y
        );
    }
    for edge in &snapshot.edges {
        let param = if edge.edge_param.is_some() {
            " [param]"
        } else {
            ""
        };
        println!("  edge {} -> {}{}", edge.source, edge.target, param);
    }
    Ok(())
}

fn clear(session: &mut SessionStore) -> Result<(), String> {
    session
        .clear()
        .map_err(|e| format!("Failed to clear session: {}", e))?;
    println!("Cleared slot '{}'", session.key());
    Ok(())
}
