use crate::color;
use crate::command::Command;
use crate::document::Document;
use crate::error::EditorError;
use crate::export;
use crate::input::{self, CanvasLayout, InputEvent, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::settings::EditorSettings;

pub struct PixelStudioApp {
    settings: EditorSettings,
    document: Document,
    renderer: Renderer,
    input: InputHandler,
    /// Size typed into the toolbar, applied by the "New" button
    pending_size: (usize, usize),
    /// Contents of the toolbar hex color field
    hex_input: String,
    /// Last user-facing message, shown in the status bar
    status: Option<String>,
}

impl PixelStudioApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, EditorError> {
        let settings: EditorSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: EditorSettings) -> Result<Self, EditorError> {
        let document = Document::from_settings(&settings)?;
        log::info!(
            "Starting with a {}x{} canvas",
            document.grid().width(),
            document.grid().height()
        );
        Ok(Self {
            pending_size: settings.canvas_size(),
            hex_input: color::to_hex(document.color()),
            settings,
            document,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            status: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EditorSettings {
        &mut self.settings
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn pending_size_mut(&mut self) -> &mut (usize, usize) {
        &mut self.pending_size
    }

    pub fn hex_input_mut(&mut self) -> &mut String {
        &mut self.hex_input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn execute_command(&mut self, command: Command) {
        log::debug!("Executing command: {}", command.label());
        match command.execute(&mut self.document) {
            Ok(()) => {
                if let Command::NewCanvas { width, height } = command {
                    self.settings.canvas_width = width;
                    self.settings.canvas_height = height;
                    self.status = Some(format!("New {width}x{height} canvas"));
                }
            }
            Err(err) => {
                log::warn!("{} failed: {}", command.label(), err);
                self.status = Some(format!("{} failed: {}", command.label(), err));
            }
        }
    }

    pub fn set_skip_unchanged_commits(&mut self, skip: bool) {
        self.settings.skip_unchanged_commits = skip;
        self.document.set_skip_unchanged_commits(skip);
    }

    /// Feeds this frame's pointer input into the document
    pub fn handle_input(
        &mut self,
        ctx: &egui::Context,
        canvas: &egui::Response,
        layout: &CanvasLayout,
    ) {
        for event in self.input.process_input(ctx, canvas, layout) {
            match event {
                InputEvent::PointerDown { cell } => self.document.pointer_down(cell),
                InputEvent::PointerMove { cell } => self.document.pointer_move(cell),
                InputEvent::PointerUp { cell } => {
                    self.document.pointer_up(cell);
                }
                InputEvent::PointerLeave => {
                    self.document.pointer_leave();
                }
            }
        }
    }

    /// Exports the settled canvas as PNG
    pub fn download(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.status = Some(match export::save_png(&self.document, export::DEFAULT_FILE_NAME) {
                Ok(()) => format!("Saved {}", export::DEFAULT_FILE_NAME),
                Err(err) => {
                    log::error!("Export failed: {}", err);
                    format!("Export failed: {err}")
                }
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.status = Some(match export::export_document(&self.document) {
                Ok(bytes) => {
                    log::warn!("Browser download is not available, encoded {} bytes", bytes.len());
                    "Download is not available in the browser".to_owned()
                }
                Err(err) => format!("Export failed: {err}"),
            });
        }
    }

    fn sync_settings(&mut self) {
        self.settings.tool = self.document.tool();
        self.settings.color = self.document.color();
    }
}

impl eframe::App for PixelStudioApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.sync_settings();
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in input::shortcut_commands(ctx) {
            self.execute_command(command);
        }

        panels::toolbar_panel(self, ctx);
        panels::status_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
