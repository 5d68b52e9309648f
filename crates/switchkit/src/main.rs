//! toggle-demo: build the demo screen, replay a drag, print what gets drawn.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use switchkit::{
    AssetLoader, Bitmap, Color, DemoError, DirectoryAssets, Event, MemoryAssets, Point,
    RecordingCanvas, ToggleDemo, Widget, DEFAULT_LAYOUT,
};

#[derive(Parser)]
#[command(name = "toggle-demo")]
#[command(about = "Replay a drag on the toggle demo screen and print its draw commands")]
#[command(version)]
struct Cli {
    /// Layout manifest (defaults to the built-in single-toggle screen)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Directory of `<resource>.png` images (defaults to generated bitmaps)
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Touch-down x, relative to the toggle
    #[arg(long, default_value_t = 20.0)]
    from: f32,

    /// Release x, relative to the toggle
    #[arg(long, default_value_t = 90.0)]
    to: f32,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn generated_assets() -> MemoryAssets {
    MemoryAssets::new()
        .with_bitmap(Bitmap::solid(
            "switch_background",
            100,
            40,
            Color::rgb(0.6, 0.6, 0.6),
        ))
        .with_bitmap(Bitmap::solid("slide_button", 40, 40, Color::WHITE))
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let yaml = match &cli.layout {
        Some(path) => fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.clone(),
            source,
        })?,
        None => DEFAULT_LAYOUT.to_string(),
    };
    let assets: Box<dyn AssetLoader> = match &cli.assets {
        Some(dir) => Box::new(DirectoryAssets::new(dir)),
        None => Box::new(generated_assets()),
    };

    let mut demo = ToggleDemo::from_yaml(&yaml, assets.as_ref())?;

    let Some(bounds) = demo.toggle().map(Widget::bounds) else {
        log::warn!("nothing to drag on screen '{}'", demo.screen());
        return print_paint(&demo, cli.pretty);
    };
    let y = bounds.y + bounds.height / 2.0;
    demo.dispatch(&Event::touch_start(Point::new(bounds.x + cli.from, y)));
    demo.dispatch(&Event::touch_move(Point::new(bounds.x + cli.to, y)));
    demo.dispatch(&Event::touch_end(Point::new(bounds.x + cli.to, y)));

    for text in demo.toasts().texts() {
        eprintln!("{text}");
    }
    print_paint(&demo, cli.pretty)
}

fn print_paint(demo: &ToggleDemo, pretty: bool) -> Result<(), DemoError> {
    let mut canvas = RecordingCanvas::new();
    demo.paint(&mut canvas);
    let json = if pretty {
        serde_json::to_string_pretty(canvas.commands())?
    } else {
        serde_json::to_string(canvas.commands())?
    };
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("toggle-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
