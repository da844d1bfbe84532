//! Star Wallpaper entry point
//!
//! Handles platform-specific initialization and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use star_wallpaper::platform::ExitFlag;
    use star_wallpaper::platform::web::install_exit_handlers;
    use star_wallpaper::renderer::{FramebufferRenderState, GpuSurface};
    use star_wallpaper::{InitError, LoopState, StarConfig, StarField};

    struct App {
        field: StarField,
        /// Dropped once the loop stops
        surface: Option<GpuSurface>,
        exit: ExitFlag,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Canvas backing size in physical pixels
        fn canvas_size(&self) -> (u32, u32) {
            let dpr = web_sys::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0);
            let width = (self.canvas.client_width().max(0) as f64 * dpr) as u32;
            let height = (self.canvas.client_height().max(0) as f64 * dpr) as u32;
            (width, height)
        }

        /// Run one frame; false once the loop has stopped
        fn frame(&mut self) -> bool {
            let (width, height) = self.canvas_size();
            let Some(surface) = self.surface.as_mut() else {
                return false;
            };

            if (width, height) != (self.canvas.width(), self.canvas.height()) {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
            }
            surface.resize(width, height);

            match self.field.frame(surface, &mut self.exit) {
                LoopState::Running => true,
                LoopState::Stopped => {
                    self.field.teardown();
                    self.surface = None;
                    let stats = self.field.stats();
                    log::info!(
                        "Stopped after {} frames ({} spawned, {} culled)",
                        stats.frames,
                        stats.spawned,
                        stats.culled
                    );
                    false
                }
            }
        }
    }

    fn page_error(what: &str) -> InitError {
        InitError::Page(what.to_string())
    }

    async fn init() -> Result<App, InitError> {
        let window = web_sys::window().ok_or_else(|| page_error("no window"))?;
        let document = window.document().ok_or_else(|| page_error("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| page_error("no canvas"))?
            .dyn_into()
            .map_err(|_| page_error("element #canvas is not a canvas"))?;

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width().max(1) as f64 * dpr) as u32;
        let height = (canvas.client_height().max(1) as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = FramebufferRenderState::new(surface, &adapter, width, height).await?;

        let config = StarConfig::default();
        match config.to_json() {
            Ok(json) => log::info!("Config: {}", json),
            Err(e) => log::warn!("Could not encode config: {}", e),
        }
        let seed = js_sys::Date::now() as u64;
        let exit = ExitFlag::new();
        install_exit_handlers(&window, &exit);

        Ok(App {
            field: StarField::new(config, seed),
            surface: Some(GpuSurface::new(render_state)),
            exit,
            canvas,
        })
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Star Wallpaper starting...");

        // A failed platform setup is fatal: the loop never starts
        let app = match init().await {
            Ok(app) => app,
            Err(e) => {
                log::error!("Initialization failed: {}", e);
                return;
            }
        };

        request_animation_frame(Rc::new(RefCell::new(app)));
        log::info!("Star Wallpaper running!");
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        let running = app.borrow_mut().frame();
        if running {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

/// Frames rendered by a native headless run (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u64 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use star_wallpaper::consts::{HEADLESS_HEIGHT, HEADLESS_WIDTH};
    use star_wallpaper::platform::FrameBudget;
    use star_wallpaper::raster::{PixelBuffer, colors};
    use star_wallpaper::{StarConfig, StarField};

    env_logger::init();
    log::info!("Star Wallpaper (native) starting...");
    log::info!("Native mode renders headless - run with `trunk serve` for the web version");

    let config = StarConfig::default();
    if let Err(e) = config.validate() {
        log::error!("Invalid config: {}", e);
        std::process::exit(1);
    }
    match config.to_json() {
        Ok(json) => log::info!("Config: {}", json),
        Err(e) => log::warn!("Could not encode config: {}", e),
    }

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut surface = PixelBuffer::new(HEADLESS_WIDTH, HEADLESS_HEIGHT);
    let mut budget = FrameBudget::new(HEADLESS_FRAMES);
    let mut field = StarField::new(config, seed);

    let freed = field.run(&mut surface, &mut budget);
    let stats = field.stats();

    log::info!(
        "Rendered {} frames: {} spawned, {} culled, {} freed at teardown",
        stats.frames,
        stats.spawned,
        stats.culled,
        freed
    );
    log::info!("Last frame has {} lit pixels", surface.count(colors::STAR));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
