//! Text field demo application
//!
//! Drives a text field without a window: a scripted timeline of pointer
//! presses, key presses and frame ticks is replayed against the field and a
//! logging scene backend, printing the resulting state.
//!
//! Usage: `text_field_demo [config.toml|config.ron] [font.typeface.json]`

use std::sync::Arc;

use typeable_text::config::ConfigError;
use typeable_text::font::FontError;
use typeable_text::foundation::logging;
use typeable_text::prelude::*;

const DEFAULT_CONFIG_PATH: &str = "resources/config/text_field.toml";
const DEFAULT_FONT_PATH: &str = "resources/fonts/demo.typeface.json";
const FRAME_SECONDS: f32 = 1.0 / 60.0;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load font: {0}")]
    Font(#[from] FontError),

    #[error("Failed to create text field: {0}")]
    Field(#[from] TextFieldError),

    #[error("Scene backend failed: {0}")]
    Scene(#[from] SceneLogError),
}

#[derive(Debug, thiserror::Error)]
#[error("more than {0} live nodes")]
struct SceneLogError(usize);

/// Scene backend that only logs what a real scene graph would do
#[derive(Debug, Default)]
struct LoggingBackend {
    next_node: usize,
    live_nodes: usize,
}

impl LoggingBackend {
    const NODE_BUDGET: usize = 4096;

    fn allocate(&mut self) -> Result<usize, SceneLogError> {
        if self.live_nodes >= Self::NODE_BUDGET {
            return Err(SceneLogError(Self::NODE_BUDGET));
        }
        self.next_node += 1;
        Ok(self.next_node)
    }
}

impl SceneBackend for LoggingBackend {
    type Node = usize;
    type Error = SceneLogError;

    fn build_filled_mesh(&mut self, commands: &[PathCommand]) -> Result<usize, SceneLogError> {
        let node = self.allocate()?;
        log::trace!("Node {node}: filled mesh from {} path commands", commands.len());
        Ok(node)
    }

    fn build_rect_mesh(&mut self, rect: Rect) -> Result<usize, SceneLogError> {
        let node = self.allocate()?;
        log::trace!("Node {node}: caret bar {:.3} x {:.3}", rect.width(), rect.height());
        Ok(node)
    }

    fn add_node(&mut self, _node: usize) {
        self.live_nodes += 1;
    }

    fn remove_node(&mut self, _node: usize) {
        self.live_nodes = self.live_nodes.saturating_sub(1);
    }

    fn set_node_visible(&mut self, node: usize, visible: bool) {
        log::trace!("Node {node}: visible = {visible}");
    }

    fn set_node_position(&mut self, node: usize, position: Point2) {
        log::trace!("Node {node}: position = ({:.3}, {:.3})", position.x, position.y);
    }

    fn set_group_offset(&mut self, x: f32) {
        log::trace!("Group offset = {x:.3}");
    }
}

/// One scripted input
#[derive(Debug, Clone, Copy)]
enum Event {
    /// Press at a point in the group's parent space
    Pointer(f32, f32),
    Key(Key),
    /// Let frames run for this many seconds
    Wait(f32),
}

fn script() -> Vec<Event> {
    let mut events = vec![Event::Pointer(0.05, 0.3), Event::Wait(0.3)];
    events.extend("! hi".chars().map(|c| Event::Key(Key::Character(c))));
    events.extend([
        Event::Wait(1.2),
        Event::Key(Key::Left),
        Event::Key(Key::Left),
        Event::Key(Key::Character('\n')),
        Event::Key(Key::Backspace),
        Event::Key(Key::Delete),
        Event::Key(Key::Right),
        Event::Key(Key::Character('x')),
        Event::Wait(0.6),
        Event::Pointer(50.0, 50.0),
        Event::Wait(1.0),
    ]);
    events
}

fn load_config(path: &str) -> Result<TextFieldConfig, ConfigError> {
    match TextFieldConfig::load_from_file(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::Io(e)) if path == DEFAULT_CONFIG_PATH => {
            log::warn!("No config at {path} ({e}), using defaults");
            Ok(TextFieldConfig::default())
        }
        Err(e) => Err(e),
    }
}

fn log_state(field: &TextField) {
    let caret = field.caret();
    log::info!(
        "text = {:?} | glyphs = {} | lines = {} | caret gap {} at ({:.3}, {:.3}) | active = {} | visible = {}",
        field.text(),
        field.glyphs().len(),
        field.layout().line_count(),
        caret.text_index,
        field.caret_position().x,
        field.caret_position().y,
        caret.active,
        caret.visible
    );
}

fn run(config_path: &str, font_path: &str) -> Result<(), DemoError> {
    let config = load_config(config_path)?;
    let font = Arc::new(FontData::load(font_path)?);
    let mut field = TextField::new(font, config)?;

    let mut backend = LoggingBackend::default();
    let mut scene = TextFieldScene::new();
    let mut clock = 0.0f32;

    scene.sync(&field, &mut backend)?;
    log_state(&field);

    for event in script() {
        match event {
            Event::Pointer(x, y) => {
                let local = field.to_field_local(Point2::new(x, y));
                log::info!("Pointer down at ({x:.3}, {y:.3}), local ({:.3}, {:.3})", local.x, local.y);
                field.handle_pointer_down(local);
            }
            Event::Key(key) => {
                log::info!("Key {key:?}");
                field.handle_key(key);
            }
            Event::Wait(seconds) => {
                let until = clock + seconds;
                let mut toggles = 0;
                while clock < until {
                    clock += FRAME_SECONDS;
                    let before = field.caret_visible();
                    field.tick(clock);
                    scene.sync(&field, &mut backend)?;
                    toggles += usize::from(before != field.caret_visible());
                }
                log::info!("Waited {seconds:.2}s, caret toggled {toggles} times");
            }
        }

        scene.sync(&field, &mut backend)?;
        log_state(&field);
    }

    log::info!(
        "Final text {:?}, {} live scene nodes, {} unresolved characters",
        field.text(),
        backend.live_nodes,
        field.layout().unresolved().len()
    );

    scene.clear(&mut backend);
    Ok(())
}

fn main() {
    logging::init_with_level(log::LevelFilter::Info);

    log::info!("Starting text field demo");

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let font_path = args.next().unwrap_or_else(|| DEFAULT_FONT_PATH.to_string());

    if let Err(e) = run(&config_path, &font_path) {
        log::error!("{e}");
        std::process::exit(1);
    }

    log::info!("Text field demo finished successfully");
}
