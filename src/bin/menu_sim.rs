//! Headless sidebar menu simulator
//! Builds an in-memory page, attaches the menu and replays clicks.
//!
//! Run with: RUST_LOG=debug cargo run --bin menu-sim -- --clicks 3

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use sidebar_menu::app::HostElement;
    use sidebar_menu::infrastructure::memory_dom::{MemoryDocument, MemoryElement};
    use sidebar_menu::domain::Selector;
    use sidebar_menu::{MenuConfig, MenuToggle};

    #[derive(Parser, Debug)]
    #[command(name = "menu-sim", about = "Replay clicks against an in-memory sidebar menu")]
    struct Args {
        /// Number of clicks to replay
        #[arg(short, long, default_value_t = 1)]
        clicks: usize,

        /// JSON file with element names (partial configs allowed)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Leave the interactive child out of the control
        #[arg(long)]
        without_trigger: bool,

        /// Leave the sidebar panel out of the page
        #[arg(long)]
        without_panel: bool,
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            MenuConfig::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => MenuConfig::default(),
    };

    // Page skeleton matching the configured names
    let document = MemoryDocument::new();
    let control = MemoryElement::new("div").with_id(&config.control_id);
    // One nested element per compound of the trigger selector; the last is the trigger
    let selector = Selector::parse(&config.trigger_selector)?;
    let mut parent = control.clone();
    let mut trigger = control.clone();
    for compound in selector.parts() {
        let mut element = MemoryElement::new(compound.tag.as_deref().unwrap_or("a"));
        for id in &compound.ids {
            element = element.with_id(id);
        }
        for class in &compound.classes {
            element = element.with_class(class);
        }
        if !args.without_trigger {
            parent.append_child(&element);
        }
        parent = element.clone();
        trigger = element;
    }
    document.body().append_child(&control);
    if !args.without_panel {
        document
            .body()
            .append_child(&MemoryElement::new("nav").with_class(&config.panel_class));
    }

    let menu = MenuToggle::attach(&document, &config).context("attaching sidebar menu")?;

    for n in 1..=args.clicks {
        trigger.click();
        tracing::info!(
            click = n,
            state = menu.state().as_str(),
            marker = menu.control().has_class(&config.marker_class),
            display = %menu.panel().display().unwrap_or_default(),
            "Click replayed"
        );
    }

    println!("{}", menu.state());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
