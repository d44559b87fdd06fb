//! Wombat CLI
//!
//! Renders a JSON scene file to the terminal: lays the scene's view tree
//! out on a character grid and prints the resulting frame, with ANSI
//! styling unless asked for plain text.

mod scene;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use wombat_common::warning::clear_warnings;
use wombat_layout::calculate_layout;
use wombat_render::{render, render_ansi};

/// Wombat — box layout and rendering for the terminal
#[derive(Parser, Debug)]
#[command(name = "wombat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render a scene file
    wombat scene.json

    # Render the built-in demo scene
    wombat --demo

    # Override the canvas: 60 cells wide, unbounded height, no styling
    wombat scene.json --width 60 --height -1 --plain

    # Inspect the computed layout instead of the frame
    wombat scene.json --dump-layout
"#)]
struct Cli {
    /// Path to a JSON scene file
    #[arg(value_name = "SCENE")]
    scene: Option<PathBuf>,

    /// Render the built-in demo scene instead of a file
    #[arg(long)]
    demo: bool,

    /// Canvas width override in cells
    #[arg(long, value_name = "CELLS")]
    width: Option<i32>,

    /// Canvas height override in rows (-1 = unbounded)
    #[arg(long, value_name = "ROWS", allow_negative_numbers = true)]
    height: Option<i32>,

    /// Emit plain text without ANSI styling
    #[arg(long)]
    plain: bool,

    /// Print the computed layout tree as JSON instead of the frame
    #[arg(long)]
    dump_layout: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    let scene = if cli.demo {
        scene::demo()
    } else if let Some(ref path) = cli.scene {
        scene::load(path).with_context(|| format!("failed to load scene {}", path.display()))?
    } else {
        bail!("provide a scene file or --demo (see --help)");
    };

    let mut tree = scene.into_tree();
    let mut size = tree.size();
    if let Some(width) = cli.width {
        size.width = width;
    }
    if let Some(height) = cli.height {
        size.height = height;
    }
    tree.set_size(size);

    if cli.dump_layout {
        let layout = calculate_layout(&tree)?;
        println!("{}", serde_json::to_string_pretty(&layout.tree.to_json())?);
        return Ok(());
    }

    let rows = if cli.plain {
        render(&tree)?
    } else {
        render_ansi(&tree)?
    };
    for row in rows {
        println!("{row}");
    }
    Ok(())
}
