//! Tree command
//!
//! Usage: manidiff tree <A> <B> [--sort-keys] [--config <FILE>] [--json] [--keep]

use clap::Args;
use manidiff_core::{Forest, LeafNode, NodeRef, Side};
use manidiff_engine::BuildReport;
use serde_json::{json, Value};

use super::BuildArgs;

#[derive(Debug, Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Print the tree as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute tree command
pub fn execute(args: TreeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = args.build.build_manager()?;

    if let (Some(forest), Some(report)) = (manager.forest(), manager.report()) {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&tree_json(forest, report))?);
        } else {
            print_tree(forest);
            print_summary(report);
        }
    }

    args.build.finish(&mut manager)
}

fn print_tree(forest: &Forest) {
    for group in forest.roots() {
        print_node(group, 0);
    }
}

fn print_node(node: NodeRef<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.as_leaf() {
        Some(leaf) => println!("{}{} [{}]", indent, leaf.label(), leaf_marker(leaf)),
        None => {
            println!("{}{}", indent, node.label());
            for child in node.children() {
                print_node(child, depth + 1);
            }
        }
    }
}

/// Collection marker, with `=` appended when both renderings match
fn leaf_marker(leaf: &LeafNode) -> String {
    let marker = leaf.status().marker();
    if leaf.is_identical() {
        format!("{} =", marker)
    } else {
        marker.to_string()
    }
}

fn print_summary(report: &BuildReport) {
    for side in Side::ALL {
        let stats = report.stats(side);
        eprintln!(
            "{}: {} indexed, {} empty, {} invalid",
            side.marker(),
            stats.indexed,
            stats.empty_ignored,
            stats.invalid_dropped
        );
    }
}

fn tree_json(forest: &Forest, report: &BuildReport) -> Value {
    let groups: Vec<Value> = forest.roots().into_iter().map(node_json).collect();
    json!({
        "build_id": report.build_id.as_str(),
        "leaves": report.leaves,
        "groups": groups,
    })
}

fn node_json(node: NodeRef<'_>) -> Value {
    match node.as_leaf() {
        Some(leaf) => json!({
            "label": leaf.label(),
            "path_key": leaf.path_key(),
            "status": leaf.status().marker(),
            "identical": leaf.is_identical(),
            "left": leaf.locator(Side::Left).map(|p| p.display().to_string()),
            "right": leaf.locator(Side::Right).map(|p| p.display().to_string()),
        }),
        None => json!({
            "label": node.label(),
            "path_key": node.path_key(),
            "children": node.children().into_iter().map(node_json).collect::<Vec<_>>(),
        }),
    }
}
