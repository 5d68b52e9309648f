//! End-to-end tests for the toggle demo screen.

use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::time::Duration;
use switchkit::yaml::Layout;
use switchkit::{
    DirectoryAssets, DrawCommand, Event, Point, RecordingCanvas, Rect, ToggleDemo, Widget,
    DEFAULT_LAYOUT,
};

fn write_png(dir: &Path, name: &str, width: u32, height: u32, rgba: [u8; 4]) {
    let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
    img.save_with_format(dir.join(format!("{name}.png")), ImageFormat::Png)
        .unwrap();
}

/// Temporary image directory, removed on drop.
struct AssetDir(PathBuf);

impl AssetDir {
    fn empty(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("switchkit-demo-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn with_skin(name: &str) -> Self {
        let dir = Self::empty(name);
        write_png(&dir.0, "switch_background", 100, 40, [160, 160, 160, 255]);
        write_png(&dir.0, "slide_button", 40, 40, [255, 255, 255, 255]);
        dir
    }

    fn assets(&self) -> DirectoryAssets {
        DirectoryAssets::new(&self.0)
    }
}

impl Drop for AssetDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

fn center_y(bounds: Rect) -> f32 {
    bounds.y + bounds.height / 2.0
}

#[test]
fn test_drag_shows_state_toast() {
    let dir = AssetDir::with_skin("drag");
    let mut demo = ToggleDemo::from_yaml(DEFAULT_LAYOUT, &dir.assets()).unwrap();

    let bounds = demo.toggle().unwrap().bounds();
    let y = center_y(bounds);
    assert!(demo.dispatch(&Event::touch_start(Point::new(bounds.x + 20.0, y))));
    assert!(demo.dispatch(&Event::touch_move(Point::new(bounds.x + 90.0, y))));
    assert!(demo.dispatch(&Event::touch_end(Point::new(bounds.x + 90.0, y))));

    assert!(demo.toggle().unwrap().is_on());
    assert_eq!(demo.toasts().texts(), vec!["State >>> true"]);

    let mut canvas = RecordingCanvas::new();
    demo.paint(&mut canvas);
    let json = serde_json::to_string(canvas.commands()).unwrap();
    assert!(json.contains("State >>> true"));
    assert!(json.contains("slide_button"));

    demo.tick(Duration::from_millis(2000));
    assert!(demo.toasts().is_empty());
    let mut canvas = RecordingCanvas::new();
    demo.paint(&mut canvas);
    assert!(!canvas
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Text { .. })));
}

#[test]
fn test_thumb_follows_drag_then_snaps() {
    let dir = AssetDir::with_skin("snap");
    let mut demo = ToggleDemo::from_yaml(DEFAULT_LAYOUT, &dir.assets()).unwrap();
    let bounds = demo.toggle().unwrap().bounds();
    let y = center_y(bounds);

    let thumb_x = |demo: &ToggleDemo| {
        let mut canvas = RecordingCanvas::new();
        demo.paint(&mut canvas);
        let offset = canvas.bitmaps().nth(1).and_then(DrawCommand::bounds).unwrap().x - bounds.x;
        offset
    };

    demo.dispatch(&Event::touch_start(Point::new(bounds.x + 60.0, y)));
    assert_eq!(thumb_x(&demo), 40.0);
    demo.dispatch(&Event::touch_move(Point::new(bounds.x + 45.0, y)));
    assert_eq!(thumb_x(&demo), 25.0);
    demo.dispatch(&Event::touch_end(Point::new(bounds.x + 45.0, y)));
    assert_eq!(thumb_x(&demo), 0.0);
    assert!(demo.toasts().is_empty());
}

#[test]
fn test_cancel_leaves_no_toast() {
    let dir = AssetDir::with_skin("cancel");
    let mut demo = ToggleDemo::from_yaml(DEFAULT_LAYOUT, &dir.assets()).unwrap();
    let bounds = demo.toggle().unwrap().bounds();
    let y = center_y(bounds);

    demo.dispatch(&Event::touch_start(Point::new(bounds.x + 10.0, y)));
    demo.dispatch(&Event::touch_move(Point::new(bounds.x + 95.0, y)));
    assert!(demo.dispatch(&Event::touch_cancel()));

    assert!(!demo.toggle().unwrap().is_on());
    assert!(demo.toasts().is_empty());
}

#[test]
fn test_initial_state_from_layout() {
    let dir = AssetDir::with_skin("initial");
    let layout = Layout::from_yaml(&DEFAULT_LAYOUT.replace("app:state: false", "app:state: true"))
        .unwrap();
    let mut demo = ToggleDemo::on_create(&layout, &dir.assets()).unwrap();
    let bounds = demo.toggle().unwrap().bounds();
    let y = center_y(bounds);

    demo.dispatch(&Event::touch_start(Point::new(bounds.x + 90.0, y)));
    demo.dispatch(&Event::touch_end(Point::new(bounds.x + 10.0, y)));
    assert_eq!(demo.toasts().texts(), vec!["State >>> false"]);
}

#[test]
fn test_missing_image_file_is_an_error() {
    let dir = AssetDir::empty("empty");
    let err = ToggleDemo::from_yaml(DEFAULT_LAYOUT, &dir.assets()).unwrap_err();
    assert!(err.to_string().contains("switch_background"));
}

#[test]
fn test_asset_dir_removed_on_drop() {
    let dir = AssetDir::with_skin("guard");
    let path = dir.0.clone();
    assert!(path.join("slide_button.png").exists());
    drop(dir);
    assert!(!path.exists());
}
