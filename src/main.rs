// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: replays a script of edits and prints the triangulation,
//! its prograph and its tableau.
//!
//! ```text
//! pcgraph add red flip down 3 involution
//! ```

use std::collections::HashMap;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pc_prograph::errors::{ConsistencyError, EditError};
use pc_prograph::geometry::{FaceId, VertexId};
use pc_prograph::symmetry::check_symmetry;
use pc_prograph::{Editor, EditorConfig, FlipDirection};

#[derive(Parser, Debug)]
#[command(name = "pcgraph", version, about = "Edit a sphere triangulation and follow its tableau")]
struct Args {
    /// Log every mutation (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Skip the full invariant check after each edit
    #[arg(long)]
    fast: bool,

    /// Print the state after every command, not only at the end
    #[arg(long)]
    trace: bool,

    /// Script: add red | add blue | add <label> | flip up <label> |
    /// flip down <label> | involution | reset
    #[arg(trailing_var_arg = true)]
    script: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Red,
    Blue,
    /// The face consuming the edge with this label.
    Label(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Add(Target),
    Flip(FlipDirection, usize),
    Involution,
    Reset,
}

#[derive(Debug, Error)]
enum ScriptError {
    #[error("unexpected {0:?} in script")]
    Unexpected(String),

    #[error("script ends inside a command")]
    Truncated,

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

fn parse_label(word: Option<&String>) -> Result<usize, ScriptError> {
    let word = word.ok_or(ScriptError::Truncated)?;
    word.parse()
        .map_err(|_| ScriptError::Unexpected(word.clone()))
}

fn parse(words: &[String]) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    let mut words = words.iter();
    while let Some(word) = words.next() {
        let command = match word.as_str() {
            "add" => match words.next().map(String::as_str) {
                Some("red") => Command::Add(Target::Red),
                Some("blue") => Command::Add(Target::Blue),
                Some(other) => Command::Add(Target::Label(
                    other
                        .parse()
                        .map_err(|_| ScriptError::Unexpected(other.to_string()))?,
                )),
                None => return Err(ScriptError::Truncated),
            },
            "flip" => {
                let direction = match words.next().map(String::as_str) {
                    Some("up") => FlipDirection::Up,
                    Some("down") => FlipDirection::Down,
                    Some(other) => return Err(ScriptError::Unexpected(other.to_string())),
                    None => return Err(ScriptError::Truncated),
                };
                Command::Flip(direction, parse_label(words.next())?)
            }
            "involution" => Command::Involution,
            "reset" => Command::Reset,
            other => return Err(ScriptError::Unexpected(other.to_string())),
        };
        commands.push(command);
    }
    Ok(commands)
}

fn target_face(editor: &Editor, target: Target) -> Result<FaceId, ScriptError> {
    let triangulation = editor.triangulation();
    Ok(match target {
        Target::Red => triangulation.top_face()?,
        Target::Blue => triangulation.bottom_face()?,
        Target::Label(label) => {
            let edge = editor
                .edge_by_label(label)
                .ok_or(EditError::NotFound(pc_prograph::errors::Element::Label(label)))?;
            triangulation.find_edge(edge)?.consumer
        }
    })
}

fn run(editor: &mut Editor, command: Command) -> Result<(), ScriptError> {
    match command {
        Command::Add(target) => {
            let face = target_face(editor, target)?;
            editor.add_point(face)?;
        }
        Command::Flip(direction, label) => {
            editor.select_edge_by_label(label)?;
            if let Err(e) = editor.flip_selected_edge(direction) {
                editor.cancel();
                return Err(e.into());
            }
        }
        Command::Involution => editor.apply_involution()?,
        Command::Reset => editor.reset()?,
    }
    Ok(())
}

/// Vertices numbered in order of first appearance along the labelled edges.
fn vertex_numbers(editor: &Editor) -> HashMap<VertexId, usize> {
    let mut numbers = HashMap::new();
    let triangulation = editor.triangulation();
    for &edge in &editor.labels().edges {
        if let Some(e) = triangulation.edge(edge) {
            for v in [e.tail, e.head] {
                let next = numbers.len();
                numbers.entry(v).or_insert(next);
            }
        }
    }
    numbers
}

fn print_state(editor: &Editor) {
    let triangulation = editor.triangulation();
    let numbers = vertex_numbers(editor);
    let label = |edge| editor.label_of(edge).unwrap_or(0);

    println!(
        "Triangulation: {} vertices, {} edges, {} faces",
        triangulation.vertex_count(),
        triangulation.edge_count(),
        triangulation.face_count()
    );
    for &edge in &editor.labels().edges {
        if let Some(e) = triangulation.edge(edge) {
            println!(
                "  edge {:>3}: v{} -> v{}",
                label(edge),
                numbers.get(&e.tail).copied().unwrap_or(0),
                numbers.get(&e.head).copied().unwrap_or(0)
            );
        }
    }

    let prograph = editor.prograph();
    println!("Prograph: {} nodes, {} wires", prograph.nodes().len(), prograph.wires().len());
    for (index, node) in prograph.nodes().iter().enumerate() {
        let ports: Vec<String> = node
            .kind
            .ports()
            .iter()
            .zip(node.ports)
            .map(|(port, wire)| {
                let edge = prograph.wire(wire).map(|w| label(w.edge)).unwrap_or(0);
                format!("{} {}", port, edge)
            })
            .collect();
        let infinity = if node.at_infinity { " (at infinity)" } else { "" };
        println!("  node {:>3} {:<9}[{}]{}", index, node.kind, ports.join(", "), infinity);
    }

    let tableau = editor.tableau();
    println!("Tableau ({:?}):", check_symmetry(tableau));
    println!("{}", tableau);
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let commands = match parse(&args.script) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let config = EditorConfig {
        full_validation: !args.fast,
    };
    let mut editor = match Editor::new(config) {
        Ok(editor) => editor,
        Err(e) => {
            error!(%e, "cannot build the minimal triangulation");
            return ExitCode::FAILURE;
        }
    };

    for command in commands {
        info!(?command, "running");
        match run(&mut editor, command) {
            Ok(()) => {}
            Err(ScriptError::Edit(e)) if e.is_user_error() => {
                println!("{:?} rejected: {}", command, editor.status_message());
            }
            Err(e) => {
                error!(%e, ?command, "aborting script");
                print_state(&editor);
                return ExitCode::FAILURE;
            }
        }
        if args.trace {
            println!("After {:?}:", command);
            print_state(&editor);
        }
    }

    if !args.trace {
        print_state(&editor);
    }
    println!("Statistics:\n{}", editor.statistics());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(script: &str) -> Vec<String> {
        script.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_script() {
        let commands = parse(&words("add red add 3 flip down 4 involution reset")).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Add(Target::Red),
                Command::Add(Target::Label(3)),
                Command::Flip(FlipDirection::Down, 4),
                Command::Involution,
                Command::Reset,
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(&words("flip")), Err(ScriptError::Truncated)));
        assert!(matches!(
            parse(&words("flip sideways 2")),
            Err(ScriptError::Unexpected(_))
        ));
        assert!(matches!(parse(&words("add green")), Err(ScriptError::Unexpected(_))));
    }

    #[test]
    fn test_run_script() {
        let mut editor = Editor::new(EditorConfig::default()).unwrap();
        for command in parse(&words("add red flip down 3")).unwrap() {
            run(&mut editor, command).unwrap();
        }
        assert_eq!(editor.tableau().rows()[0], vec![1, 2]);
        assert!(matches!(
            run(&mut editor, Command::Flip(FlipDirection::Down, 1)),
            Err(ScriptError::Edit(EditError::NotFlippable { .. }))
        ));
        assert_eq!(editor.selection(), pc_prograph::Selection::Idle);
    }
}
