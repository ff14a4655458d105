use std::rc::Rc;
use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use multiview::adapters::{JsonFileStore, LogHost};
use multiview::cli::{handle_help_command, handle_version_command, parse_args, CliCommand, USAGE};
use multiview::config::MultiviewConfig;
use multiview::events::ViewEvent;
use multiview::library::{media_library, StaticLibrary};
use multiview::logging::init_logging;
use multiview::models::NodeRef;
use multiview::{Multiview, ShowOptions};

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Invalid(message) => {
            eprintln!("Error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::Run(options) => options,
    };

    color_eyre::install()?;

    let mut config = MultiviewConfig::load()?;
    if options.no_animations {
        config.animations = false;
    }
    if options.state.is_some() {
        config.state_file = options.state;
    }

    if let Err(e) = init_logging(&config.log_filter) {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    // The engine is single-threaded; a current-thread runtime drives the
    // library's simulated load latency.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(run(config))
}

async fn run(config: MultiviewConfig) -> Result<()> {
    let state_dir = config
        .state_path()
        .ok_or_else(|| eyre!("could not determine the state directory"))?;
    let store = JsonFileStore::new(state_dir);

    let library = Rc::new(StaticLibrary::with_latency(Duration::from_millis(20)));
    let registry = Rc::new(media_library(library.clone())?);
    let mut engine = Multiview::new(registry, LogHost::new(), config);

    let _changes = engine.subscribe(|event| {
        if let ViewEvent::ViewChanged { path, view_type, .. } = event {
            tracing::info!("Now showing {} as {}", path, view_type);
        }
    });

    if let Some(id) = engine.load_session(&store)? {
        tracing::info!("Resuming at {}", id);
        engine.tick()?;
        engine.drive().await;
    }

    engine.navigate(NodeRef::new("albums", ""), ShowOptions::default())?;
    engine.drive().await;

    if let Some(album) = library.album_nodes().into_iter().next() {
        engine.navigate(album, ShowOptions::default())?;
        engine.drive().await;
    }

    engine.go_back()?;
    engine.execute_sub_view("previewPanel", Some(true))?;
    engine.drive().await;
    engine.settle_actions().await;

    if let Some(composition) = engine.composition() {
        println!("{} ({})", composition.view_type(), composition.view_data());
        for slot in composition.slots() {
            println!("  {}", slot);
        }
        for group in composition.layout() {
            println!(
                "  {:?}{}: {}",
                group.position,
                if group.in_scroller { " (scroller)" } else { "" },
                group.slots.join(", ")
            );
        }
    }
    for action in engine.actions().iter().filter(|a| a.visible) {
        println!("  [{}] {}", if action.enabled { "x" } else { " " }, action.title);
    }

    engine.save_session(&store)?;
    engine.shutdown();
    Ok(())
}
