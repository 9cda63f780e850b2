//! Application entry point and dispatch.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use mathlab_cli::output::write_json_to_file;
use mathlab_cli::presenter::{CLIResultPresenter, OutputMode};
use mathlab_cli::ui::{print_header, print_success, render_topic_grid};
use mathlab_core::{default_triangle, FractalRequest, SampleRange, Triangle};
use mathlab_store::{FileStore, ProgressStore, TopicStatus};
use mathlab_worker::interfaces::ResultPresenter;
use mathlab_worker::messages::Response;
use mathlab_worker::WorkerService;

use crate::config::{AppConfig, Command, ProfileAction};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        mathlab_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    match &config.command {
        Some(Command::Fractal {
            depth,
            triangle,
            output,
        }) => run_fractal(
            config,
            triangle.unwrap_or_else(default_triangle),
            *depth,
            output.as_deref(),
        ),
        Some(Command::Graphs {
            min,
            max,
            step,
            output,
        }) => run_graphs(config, SampleRange::new(*min, *max, *step), output.as_deref()),
        Some(Command::Serve) => run_serve(config),
        Some(Command::Profile { action }) => {
            run_profile(config, action.as_ref().unwrap_or(&ProfileAction::Show))
        }
        None => {
            <AppConfig as clap::CommandFactory>::command().print_help()?;
            Ok(())
        }
    }
}

fn presenter(config: &AppConfig) -> CLIResultPresenter {
    let mode = if config.json {
        OutputMode::Json
    } else if config.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Text
    };
    CLIResultPresenter::new(config.verbose, mode)
}

fn run_fractal(
    config: &AppConfig,
    triangle: Triangle,
    depth: u32,
    output: Option<&Path>,
) -> Result<()> {
    let service = WorkerService::spawn(config.service_config())?;
    let request = FractalRequest::new(triangle, depth);

    let start = Instant::now();
    let triangles = service.fractal(request)?;
    let duration = start.elapsed();

    presenter(config).present_fractal(&request, &triangles, duration);

    if let Some(path) = output {
        write_json_to_file(path, &Response::fractal(triangles))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn run_graphs(config: &AppConfig, range: SampleRange, output: Option<&Path>) -> Result<()> {
    let service = WorkerService::spawn(config.service_config())?;

    let start = Instant::now();
    let graphs = service.graphs(range)?;
    let duration = start.elapsed();

    presenter(config).present_graphs(&range, &graphs, duration);

    if let Some(path) = output {
        write_json_to_file(path, &Response::from(graphs))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn run_serve(config: &AppConfig) -> Result<()> {
    let service = WorkerService::spawn(config.service_config())?;
    tracing::info!("serving requests on stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading request")?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(out, "{}", service.handle_json(&line))?;
        out.flush()?;
    }
    Ok(())
}

fn run_profile(config: &AppConfig, action: &ProfileAction) -> Result<()> {
    let files = config
        .data_dir
        .clone()
        .map_or_else(FileStore::open_default, FileStore::new);
    tracing::debug!(dir = %files.dir().display(), "opening profile store");
    let store = ProgressStore::new(files);

    match action {
        ProfileAction::Show => show_profile(config, &store),
        ProfileAction::Create { name } => {
            let user = store.create_user(name)?;
            if !config.quiet {
                print_success(&format!("created and selected user {}", user.name));
            }
            Ok(())
        }
        ProfileAction::Select { name } => {
            store.select_user(name)?;
            if !config.quiet {
                print_success(&format!("selected user {}", name.trim()));
            }
            Ok(())
        }
        ProfileAction::Complete { topic } => {
            let status = store.mark_topic_task_complete(topic)?;
            if !config.quiet {
                let message = match status {
                    TopicStatus::Completed => format!("topic {topic} completed"),
                    TopicStatus::InProgress { done, total } => {
                        format!("topic {topic}: {done}/{total} tasks done")
                    }
                    TopicStatus::NotStarted => format!("topic {topic} not started"),
                };
                print_success(&message);
            }
            Ok(())
        }
    }
}

fn show_profile(config: &AppConfig, store: &ProgressStore<FileStore>) -> Result<()> {
    let profile = store.load_profile()?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let completed = store.completed_topics()?;
    if config.quiet {
        println!("{completed}");
        return Ok(());
    }

    print_header("Profile");
    if profile.users.is_empty() {
        println!("No users yet. Create one with `mathlab profile create <NAME>`.");
        return Ok(());
    }
    for user in &profile.users {
        let marker = if profile.current_user.as_deref() == Some(user.name.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{marker} {}", user.name);
    }
    match profile.current() {
        Some(user) => {
            println!();
            println!("Topics for {} ({completed} completed):", user.name);
            println!("{}", render_topic_grid(&store.topic_statuses()?));
        }
        None => println!("\nNo user selected."),
    }
    Ok(())
}
