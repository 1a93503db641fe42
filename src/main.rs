//! Skyflap entry point
//!
//! In the browser this wires the canvas, WebGPU, audio and the DOM HUD to
//! `skyflap::Game`. Natively it runs a headless autopilot over the same
//! simulation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent};

    use skyflap::audio::AudioManager;
    use skyflap::consts::*;
    use skyflap::persistence::LocalStorage;
    use skyflap::renderer::{
        AtlasImage, SpriteRenderState, draw_list, placeholder_atlas, sprite_vertices,
    };
    use skyflap::hud::{HudView, overlay_class};
    use skyflap::{Game, Settings};

    const ATLAS_URL: &str = "images/sprite.png";

    /// Everything the frame loop and event handlers share
    struct App {
        game: Game<LocalStorage>,
        render_state: SpriteRenderState,
        audio: AudioManager,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn step(&mut self, time: f64) {
            let events = self.game.frame();
            self.audio.play_events(&events);

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 && time > oldest {
                self.fps = (60000.0 / (time - oldest)).round() as u32;
            }
        }

        fn render(&mut self) {
            let (aw, ah) = self.render_state.atlas_size;
            let draws = draw_list(&self.game.state);
            let vertices = sprite_vertices(&draws, Vec2::new(aw as f32, ah as f32));

            match self.render_state.render(&vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(e) => log::error!("Render error: {:?}", e),
            }
        }

        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = HudView::new(&self.game.state);

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score_text));
                let _ = el.set_attribute("class", hud.score_class);
            }
            if let Some(el) = document.get_element_by_id("game-over") {
                let _ = el.set_attribute("class", hud.game_over_class);
            }
            if let Some((final_score, best_score)) = &hud.final_scores {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(final_score.as_str()));
                }
                if let Some(el) = document.get_element_by_id("best-score") {
                    el.set_text_content(Some(best_score.as_str()));
                }
            }

            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps") {
                    el.set_text_content(Some(&format!("{} FPS", self.fps)));
                }
            }
        }
    }

    /// Decode the sprite atlas through an offscreen 2D canvas
    async fn load_atlas(document: &web_sys::Document, url: &str) -> Result<AtlasImage, JsValue> {
        let img = HtmlImageElement::new()?;
        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            img.set_onload(Some(&resolve));
            img.set_onerror(Some(&reject));
        });
        img.set_src(url);
        JsFuture::from(loaded).await?;

        let width = img.natural_width();
        let height = img.natural_height();

        let scratch: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        scratch.set_width(width);
        scratch.set_height(height);
        let ctx: CanvasRenderingContext2d = scratch
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        ctx.draw_image_with_html_image_element(&img, 0.0, 0.0)?;
        let data = ctx.get_image_data(0.0, 0.0, width as f64, height as f64)?;

        log::info!("Loaded atlas {} ({}x{})", url, width, height);
        Ok(AtlasImage {
            width,
            height,
            rgba: data.data().0,
        })
    }

    /// Map a mouse event to logical canvas coordinates
    fn event_to_canvas(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let sx = if rect.width() > 0.0 { CANVAS_WIDTH as f64 / rect.width() } else { 1.0 };
        let sy = if rect.height() > 0.0 { CANVAS_HEIGHT as f64 / rect.height() } else { 1.0 };
        Vec2::new(
            ((event.client_x() as f64 - rect.left()) * sx) as f32,
            ((event.client_y() as f64 - rect.top()) * sy) as f32,
        )
    }

    fn to_js(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(to_js)?;

        log::info!("Skyflap starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Backing store at device resolution; logical size stays 320x480
        let dpr = window.device_pixel_ratio();
        let width = (CANVAS_WIDTH as f64 * dpr) as u32;
        let height = (CANVAS_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let atlas = match load_atlas(&document, ATLAS_URL).await {
            Ok(atlas) => atlas,
            Err(e) => {
                log::warn!("Could not load {}: {:?} - using flat placeholder sprites", ATLAS_URL, e);
                placeholder_atlas()
            }
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(to_js)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(to_js)?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = SpriteRenderState::new(surface, &adapter, width, height, &atlas)
            .await
            .map_err(to_js)?;

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::sync(&mut LocalStorage);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, LocalStorage),
            render_state,
            audio: AudioManager::new(&settings),
            settings,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }));
        log::info!("Game initialized with seed: {}", seed);

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", overlay_class(false));
        }
        if let Some(fps) = document.get_element_by_id("fps") {
            let show = app.borrow().settings.show_fps;
            let _ = fps.set_attribute("class", overlay_class(show));
        }

        setup_click_handler(&canvas, app.clone());
        setup_auto_mute(app.clone());

        request_animation_frame(app);
        Ok(())
    }

    fn setup_click_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            event.prevent_default();
            let pos = event_to_canvas(&canvas_clone, &event);
            let mut a = app.borrow_mut();
            a.audio.resume();
            let (_, events) = a.game.click(pos);
            a.audio.play_events(&events);
        });
        let _ = canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Silence cues while the window is unfocused
    fn setup_auto_mute(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if !app.borrow().settings.mute_on_blur {
            return;
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut a = app.borrow_mut();
                let muted = Settings {
                    muted: true,
                    ..a.settings.clone()
                };
                a.audio.apply_settings(&muted);
                log::info!("Audio muted (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut a = app.borrow_mut();
                let settings = a.settings.clone();
                a.audio.apply_settings(&settings);
            });
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One simulation step per displayed frame
    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.step(time);
            a.render();
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use glam::Vec2;

    use skyflap::Game;
    use skyflap::audio::AudioManager;
    use skyflap::consts::*;
    use skyflap::persistence::Storage;
    use skyflap::sim::{GamePhase, GameState};

    /// Where the autopilot tries to hold the bird
    pub fn target_y(state: &GameState) -> f32 {
        let bird = &state.bird;
        state
            .pipes
            .pairs
            .iter()
            .find(|p| p.x + PIPE_WIDTH > bird.pos.x - bird.radius)
            .map(|p| p.y + PIPE_HEIGHT + PIPE_GAP * 0.5)
            .unwrap_or(GROUND_Y * 0.5)
    }

    /// Flap when sinking below the target
    pub fn should_flap(state: &GameState) -> bool {
        let bird = &state.bird;
        bird.speed > 0.0 && bird.pos.y > target_y(state) + 10.0
    }

    /// Play one round headlessly; returns the final score
    pub fn run<S: Storage>(game: &mut Game<S>, audio: &AudioManager, max_frames: u64) -> u32 {
        let (_, events) = game.click(Vec2::ZERO);
        audio.play_events(&events);

        while game.state.phase != GamePhase::Over && game.state.frames < max_frames {
            if should_flap(&game.state) {
                let (_, events) = game.click(Vec2::ZERO);
                audio.play_events(&events);
            }
            let events = game.frame();
            audio.play_events(&events);
        }

        if game.state.phase != GamePhase::Over {
            log::info!("Frame cap {} reached while still flying", max_frames);
        }
        game.state.score.value
    }
}

/// Headless autopilot run
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "skyflap")]
#[command(about = "Play one Skyflap round headlessly with a simple autopilot")]
struct Args {
    /// Pipe placement seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Stop after this many frames even if the bird is still flying
    #[arg(long, default_value_t = 10_000)]
    max_frames: u64,
    /// JSON file holding the best score and settings (in-memory when absent)
    #[arg(long, env = "SKYFLAP_SAVE")]
    save: Option<std::path::PathBuf>,
}

/// Run one round over `storage`; returns (score, best)
#[cfg(not(target_arch = "wasm32"))]
fn play<S: skyflap::persistence::Storage>(args: &Args, mut storage: S) -> (u32, u32) {
    use skyflap::audio::AudioManager;
    use skyflap::{Game, Settings};

    // Cues are logged at debug level natively
    let settings = Settings::sync(&mut storage);
    let audio = AudioManager::new(&settings);

    let mut game = Game::new(args.seed, storage);
    let score = autopilot::run(&mut game, &audio, args.max_frames);
    (score, game.state.score.best)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use skyflap::persistence::{FileStorage, MemoryStorage};

    env_logger::init();
    let args = Args::parse();
    log::info!("Skyflap (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let (score, best) = match &args.save {
        Some(path) => play(&args, FileStorage::new(path)),
        None => play(&args, MemoryStorage::new()),
    };

    log::info!("Seed {}: scored {} (best {})", args.seed, score, best);
    println!("seed={} score={} best={}", args.seed, score, best);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
