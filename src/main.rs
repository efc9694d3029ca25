use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use gpui::{px, size, App, Application, Bounds, Focusable, WindowBounds, WindowOptions};
use tracing::info;

use swatchbook_gpui::config;
use swatchbook_gpui::error::ResultExt;
use swatchbook_gpui::loader::PalettesLoaderDelegate;
use swatchbook_gpui::logging;
use swatchbook_gpui::palettes_list::PalettesListBox;
use swatchbook_gpui::theme::Theme;

/// Browse GIMP palette libraries
#[derive(Parser, Debug)]
#[command(name = "swatchbook-gpui", version, about)]
struct Cli {
    /// Palette directory to scan instead of the configured library
    /// (repeatable)
    #[arg(long = "palette-dir", value_name = "DIR")]
    palette_dirs: Vec<PathBuf>,
}

fn main() {
    let _guard = logging::init();
    let cli = Cli::parse();

    let loaded_config = config::load_config();
    let ui_scale = loaded_config.ui_scale();

    let palette_dirs = if cli.palette_dirs.is_empty() {
        let dirs = loaded_config.expanded_palette_dirs();
        // First run: make sure the default library location exists so the
        // user has somewhere to drop palette files.
        for dir in &dirs {
            std::fs::create_dir_all(dir).warn_on_err();
        }
        dirs
    } else {
        cli.palette_dirs
    };

    info!(dirs = ?palette_dirs, ui_scale, "Starting palette panel");

    let delegate = PalettesLoaderDelegate::new(palette_dirs);
    let theme = Arc::new(Theme::default());

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(380.), px(520.)), cx);
        let window = cx
            .open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                },
                |_, cx| cx.new(|cx| PalettesListBox::new(delegate, theme, ui_scale, cx)),
            )
            .unwrap();

        window
            .update(cx, |view, window, cx| {
                view.subscribe(Box::new(|palette| {
                    info!(
                        name = %palette.name,
                        colors = palette.len(),
                        "Palette changed"
                    );
                }));
                let focus_handle = view.focus_handle(cx);
                window.focus(&focus_handle, cx);
            })
            .unwrap();

        cx.activate(true);
    });
}
