//! Background palette loading.
//!
//! One worker thread enumerates the palette library and parses each file,
//! handing finished resources to the UI through a bounded channel. The UI
//! side drains the channel from an async task; the worker never touches UI
//! state. Files that fail to parse are logged and skipped - the only
//! user-visible effect is that the row never appears.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::gpl;
use crate::palette::PaletteResource;

/// Capacity of the ready-event channel. Generous for palette libraries,
/// which are typically a few hundred files at most.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Events produced by the loader thread.
pub enum ResourceEvent {
    /// A palette finished loading and is ready to display.
    Ready(PaletteResource),
}

/// Describes how to enumerate and load one kind of resource. The list box
/// consumes the loader through this seam and knows nothing about storage
/// locations or file formats.
pub trait LoaderDelegate: Send + 'static {
    /// Directories to scan for resource files.
    fn resource_locations(&self) -> Vec<PathBuf>;

    /// Whether `path` looks like a resource this delegate can load.
    fn matches(&self, path: &Path) -> bool;

    /// Load a single resource from `path`.
    fn load_resource(&self, path: &Path) -> Result<PaletteResource>;
}

/// Delegate for GIMP `.gpl` palette files in the configured library
/// directories.
pub struct PalettesLoaderDelegate {
    dirs: Vec<PathBuf>,
}

impl PalettesLoaderDelegate {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl LoaderDelegate for PalettesLoaderDelegate {
    fn resource_locations(&self) -> Vec<PathBuf> {
        self.dirs.clone()
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some("gpl")
    }

    fn load_resource(&self, path: &Path) -> Result<PaletteResource> {
        let palette = gpl::read_palette(path)
            .with_context(|| format!("Failed to load palette {}", path.display()))?;
        Ok(PaletteResource {
            name: palette.name.clone(),
            path: path.to_path_buf(),
            palette,
        })
    }
}

/// Handle to the background loader thread.
///
/// Dropping the handle raises the stop flag; in-flight work finishes
/// harmlessly against a closed channel.
pub struct PalettesLoader {
    events: async_channel::Receiver<ResourceEvent>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl PalettesLoader {
    /// Start the loader thread for `delegate`.
    pub fn spawn(delegate: impl LoaderDelegate) -> Self {
        let (tx, rx) = async_channel::bounded(EVENT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();
        let worker = thread::spawn(move || loader_loop(delegate, tx, stop_flag));
        Self {
            events: rx,
            stop,
            worker: Some(worker),
        }
    }

    /// The ready-event stream. Closes when enumeration is exhausted or the
    /// loader is stopped.
    pub fn events(&self) -> async_channel::Receiver<ResourceEvent> {
        self.events.clone()
    }

    /// Ask the worker to stop after the file it is currently loading.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Whether the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().map_or(true, |w| w.is_finished())
    }
}

impl Drop for PalettesLoader {
    fn drop(&mut self) {
        self.stop();
        // The worker exits on its own once it sees the flag or the channel
        // closes; never block the UI thread waiting for it.
        self.worker.take();
    }
}

fn loader_loop(
    delegate: impl LoaderDelegate,
    tx: async_channel::Sender<ResourceEvent>,
    stop: Arc<AtomicBool>,
) {
    let mut loaded = 0usize;
    for dir in delegate.resource_locations() {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        let paths = match enumerate_dir(&dir, &delegate) {
            Ok(paths) => paths,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping palette directory");
                continue;
            }
        };
        for path in paths {
            if stop.load(Ordering::Relaxed) {
                info!(loaded, "Palette loader stopped");
                return;
            }
            match delegate.load_resource(&path) {
                Ok(resource) => {
                    debug!(name = %resource.name, path = %path.display(), "Palette ready");
                    loaded += 1;
                    if tx.send_blocking(ResourceEvent::Ready(resource)).is_err() {
                        debug!("Ready-event channel closed, loader exiting");
                        return;
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable palette");
                }
            }
        }
    }
    info!(loaded, "Palette enumeration complete");
}

/// Matching files in `dir`, sorted by file name so delivery order is stable
/// for a given library.
fn enumerate_dir(dir: &Path, delegate: &impl LoaderDelegate) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read palette directory {}", dir.display()))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && delegate.matches(path))
        .collect();
    paths.sort();
    Ok(paths)
}
