//! Drag-look demo: hold a mouse button and drag to rotate a scene node.
//!
//! Run with:
//!   cargo run --example drag_look
//!   cargo run --example drag_look -- --button right --speed 2.0
//!
//! Controls:
//!   Hold + drag - Rotate (yaw left/right, pitch up/down, roll stays zero)
//!   Escape      - Exit
//!
//! The window title tracks the node's current yaw and pitch.

use clap::Parser;
use glam::EulerRot;
use mouselook::platform_winit::WinitPointerAdapter;
use mouselook::{ButtonSelector, InputSurface, LookConfig, LookController, SceneNode};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorIcon, WindowBuilder},
};

/// Drag-look demo arguments.
#[derive(Parser, Debug)]
#[command(name = "drag_look", about = "Hold a mouse button and drag to look around")]
struct Args {
    /// Button that activates the drag: any, left, middle or right.
    #[arg(long, default_value = "left")]
    button: ButtonSelector,

    /// Angular sensitivity; negative values invert the drag.
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Upper pitch bound in degrees.
    #[arg(long, default_value_t = 89.95)]
    max_ascent: f32,

    /// Lower pitch bound in degrees.
    #[arg(long, default_value_t = -89.95)]
    min_ascent: f32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Drag-look demo");
    println!("  Hold the {:?} button and drag to rotate", args.button);
    println!("  Escape exits");
    println!();

    let config = LookConfig::new()
        .with_button(args.button)
        .with_speed(args.speed)
        .with_ascent_range(args.min_ascent, args.max_ascent);

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let window = WindowBuilder::new()
        .with_title("Drag Look Demo")
        .with_inner_size(PhysicalSize::new(1280, 720))
        .build(&event_loop)
        .expect("Failed to create window");

    let mut surface = InputSurface::new();
    let mut adapter = WinitPointerAdapter::new();
    let mut controller = LookController::new(config);
    let mut node = SceneNode::new();
    let mut was_dragging = false;

    controller.setup(&mut surface);

    event_loop
        .run(move |event, elwt: &EventLoopWindowTarget<()>| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::KeyboardInput { event, .. } => {
                        if event.state == ElementState::Pressed
                            && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                        {
                            elwt.exit();
                        }
                    }
                    event => {
                        if let Some(pointer) = adapter.map_window_event(&event) {
                            surface.dispatch(pointer);
                        }
                    }
                },
                Event::AboutToWait => {
                    controller.update(&mut surface, &mut node);

                    if controller.is_dragging() != was_dragging {
                        was_dragging = controller.is_dragging();
                        window.set_cursor_icon(if was_dragging {
                            CursorIcon::Grabbing
                        } else {
                            CursorIcon::Default
                        });
                    }

                    if node.is_updated() {
                        node.clear_updated();
                        let (yaw, pitch, _) = node.transform.rotation.to_euler(EulerRot::YXZ);
                        window.set_title(&format!(
                            "Drag Look Demo | yaw {:.1} deg, pitch {:.1} deg",
                            yaw.to_degrees(),
                            pitch.to_degrees()
                        ));
                    }
                }
                _ => {}
            }
        })
        .expect("Event loop failed");
}
