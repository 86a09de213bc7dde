use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};
use wirescope_common::{InputEvent, Settings, Steps};
use wirescope_input::InputState;
use wirescope_mesh::{FlatPositionBuffer, MeshDescription};
use wirescope_pose::PoseAccumulator;
use wirescope_render_wgpu::WireframeRenderer;

#[derive(Parser)]
#[command(name = "wirescope-desktop", about = "Interactive wireframe mesh viewer")]
struct Cli {
    /// OBJ geometry file to view
    #[arg(default_value = "contingo.obj")]
    mesh: PathBuf,

    /// Settings file (JSON); built-in defaults apply when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Physical key to viewer event, the fixed keyboard layout.
fn map_key(key: KeyCode) -> Option<InputEvent> {
    match key {
        KeyCode::KeyW => Some(InputEvent::MoveUp),
        KeyCode::KeyS => Some(InputEvent::MoveDown),
        KeyCode::KeyA => Some(InputEvent::MoveLeft),
        KeyCode::KeyD => Some(InputEvent::MoveRight),
        KeyCode::KeyQ => Some(InputEvent::RotateCw),
        KeyCode::KeyE => Some(InputEvent::RotateCcw),
        KeyCode::KeyR => Some(InputEvent::ScaleUp),
        KeyCode::KeyF => Some(InputEvent::ScaleDown),
        KeyCode::Escape => Some(InputEvent::Quit),
        _ => None,
    }
}

struct GpuApp {
    settings: Settings,
    steps: Steps,
    buffer: FlatPositionBuffer,
    input: InputState,
    accumulator: PoseAccumulator,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WireframeRenderer>,
}

impl GpuApp {
    fn new(settings: Settings, buffer: FlatPositionBuffer) -> Self {
        let steps = settings.steps();
        Self {
            settings,
            steps,
            buffer,
            input: InputState::new(),
            accumulator: PoseAccumulator::new(),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("wirescope")
            .with_inner_size(PhysicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("wirescope_device"),
                required_features: WireframeRenderer::required_features(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WireframeRenderer::new(
            &device,
            surface_format,
            &self.buffer,
            self.settings.clear_color,
        );

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if let Some(viewer_event) = map_key(key) {
                    self.input
                        .set_pressed(viewer_event, key_state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                // Held keys fire once per redraw; Quit sorts last so motion
                // in the final poll still lands.
                for viewer_event in self.input.fired() {
                    self.accumulator.apply(viewer_event, self.steps);
                }
                if self.accumulator.is_terminated() {
                    tracing::info!("quit requested");
                    event_loop.exit();
                    return;
                }

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(device, queue, &view, self.accumulator.current());
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    // The mesh is ingested exactly once, before any GPU state exists; a bad
    // file exits here with a non-zero status.
    let mesh = MeshDescription::from_obj_file(&cli.mesh)
        .with_context(|| format!("loading mesh from {}", cli.mesh.display()))?;
    let buffer = mesh.flatten()?;
    tracing::info!(
        "loaded {}: {} shapes, {} triangles, {} vertices to draw",
        cli.mesh.display(),
        mesh.shapes.len(),
        mesh.triangle_count(),
        buffer.vertex_count()
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(settings, buffer);
    event_loop.run_app(&mut app)?;

    Ok(())
}
