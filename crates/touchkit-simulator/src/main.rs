//! Desktop simulator for the touchkit button toolkit.
//!
//! Renders a small thermostat-style panel in an SDL2 window via
//! `embedded-graphics-simulator`: a temperature setpoint with arrow buttons,
//! a fan speed with `-`/`+` buttons and a reset button.
//!
//! # Controls
//!
//! | Input        | Action                  |
//! |--------------|-------------------------|
//! | Mouse down   | Touch press             |
//! | Mouse up     | Touch release           |
//! | Q / Escape   | Quit                    |

use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use touchkit_core::framebuffer::FrameBuffer;
use touchkit_core::ui::styling::{BLACK, BLUE, DARK_GRAY, LIGHT_GRAY, RED, WHITE, YELLOW};
use touchkit_core::ui::{
    Align, ArrowButton, Button, ButtonConfig, ButtonRegistry, Dimension, Expansion,
    Font, GfxSurface, Int16Button, LabelButton, LabelStyle, Orientation, TouchPoint, Uint8Button,
    ValueFormat, inc_dec_handler,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u16 = 320;
const DISPLAY_HEIGHT_PX: u16 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

const DEFAULT_SETPOINT: i16 = 21;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(
        i16::try_from(point.x).unwrap_or(i16::MAX),
        i16::try_from(point.y).unwrap_or(i16::MAX),
    )
}

fn caption(x: i16, y: i16, text: &str) -> LabelButton<'static> {
    LabelButton::new(
        ButtonConfig::at(x, y).without_fill().without_outline(),
        LabelStyle::new(Font::builtin().with_size(2, 2)).with_text_color(LIGHT_GRAY),
        text,
    )
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("Simulator stopped: {}", e);
    }
}

/// Error text for setup failures
fn describe(e: impl Display) -> String {
    e.to_string()
}

fn run() -> Result<(), String> {
    info!("Starting touchkit simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );

    // --- Buttons -----------------------------------------------------------
    let setpoint = RefCell::new(Int16Button::new(
        ButtonConfig::at(110, 80)
            .with_name("setpoint")
            .with_fill(BLUE),
        LabelStyle::new(Font::builtin().with_size(3, 3))
            .with_text_color(WHITE)
            .with_corner_radius(6)
            .with_size(Dimension::FitLabel(12), Dimension::FitLabel(12))
            .with_degree_symbol(),
        -40..=125,
        DEFAULT_SETPOINT,
        ValueFormat::default().with_plus_sign(),
    ).map_err(describe)?);
    let cooler = RefCell::new(ArrowButton::new(
        ButtonConfig::at(30, 80)
            .with_name("cooler")
            .with_fill(DARK_GRAY)
            .with_expansion(Expansion::all(6)),
        Orientation::Left,
        36,
        30,
    ).map_err(describe)?);
    let warmer = RefCell::new(ArrowButton::new(
        ButtonConfig::at(190, 80)
            .with_name("warmer")
            .with_fill(DARK_GRAY)
            .with_expansion(Expansion::all(6)),
        Orientation::Right,
        36,
        30,
    ).map_err(describe)?);

    let fan = RefCell::new(Uint8Button::new(
        ButtonConfig::at(160, 170)
            .with_name("fan")
            .with_outline(DARK_GRAY),
        LabelStyle::new(Font::builtin().with_size(2, 2))
            .with_text_color(YELLOW)
            .with_size(Dimension::FitLabel(16), Dimension::Fixed(32)),
        0..=10,
        0,
        ValueFormat::default().with_zero_label("Off"),
    ).map_err(describe)?);
    let button_style = LabelStyle::new(Font::builtin().with_size(2, 2))
        .with_corner_radius(4)
        .with_size(Dimension::Fixed(40), Dimension::Fixed(32));
    let slower = RefCell::new(LabelButton::new(
        ButtonConfig::at(90, 170)
            .with_name("slower")
            .with_fill(DARK_GRAY),
        button_style,
        "-",
    ));
    let faster = RefCell::new(LabelButton::new(
        ButtonConfig::at(230, 170)
            .with_name("faster")
            .with_fill(DARK_GRAY),
        button_style,
        "+",
    ));

    let reset = RefCell::new(LabelButton::new(
        ButtonConfig::at(DISPLAY_WIDTH_PX as i16 - 8, 8)
            .with_name("reset")
            .with_align(Align::TOP_RIGHT)
            .with_fill(RED),
        LabelStyle::default()
            .with_corner_radius(4)
            .with_size(Dimension::FitLabel(12), Dimension::FitLabel(8)),
        "Reset",
    ));

    let mut captions = [caption(70, 20, "Setpoint"), caption(40, 170, "Fan")];

    // --- Registry ------------------------------------------------------------
    let touches = Cell::new(0u32);
    let mut registry: ButtonRegistry<'_> = ButtonRegistry::new().with_master_handler(|down| {
        if down {
            touches.set(touches.get() + 1);
            info!("Touch #{}", touches.get());
        }
    });
    registry
        .register(&cooler, inc_dec_handler(&setpoint, -1))
        .map_err(describe)?;
    registry
        .register(&warmer, inc_dec_handler(&setpoint, 1))
        .map_err(describe)?;
    registry
        .register(&slower, inc_dec_handler(&fan, -1))
        .map_err(describe)?;
    registry
        .register(&faster, inc_dec_handler(&fan, 1))
        .map_err(describe)?;
    registry
        .register(&reset, |_, surface| {
            setpoint
                .borrow_mut()
                .set_value_and_draw_if_changed(surface, DEFAULT_SETPOINT, false)?;
            fan.borrow_mut()
                .set_value_and_draw_if_changed(surface, 0, false)?;
            info!("Reset to defaults");
            Ok(())
        })
        .map_err(describe)?;
    // Display-only: pressing it inverts it but changes nothing
    registry.register_button(&setpoint).map_err(describe)?;
    registry.register_button(&fan).map_err(describe)?;

    // --- Display -------------------------------------------------------------
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
        u32::from(DISPLAY_WIDTH_PX),
        u32::from(DISPLAY_HEIGHT_PX),
    ));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("touchkit Simulator", &output_settings);
    let mut fb = FrameBuffer::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX);

    {
        let mut surface = GfxSurface::new(&mut fb);
        let _ = surface.target().clear(BLACK);
        for label in captions.iter_mut() {
            label.draw(&mut surface).map_err(describe)?;
        }
        registry
            .draw_if_changed(&mut surface, true)
            .map_err(describe)?;
    }
    let _ = fb.flush(&mut display);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        {
            let mut surface = GfxSurface::new(&mut fb);
            for event in window.events() {
                let result = match event {
                    SimulatorEvent::Quit => break 'running,
                    SimulatorEvent::KeyDown { keycode, .. }
                        if keycode == Keycode::Q || keycode == Keycode::Escape =>
                    {
                        break 'running;
                    }
                    SimulatorEvent::MouseButtonDown { point, .. } => {
                        registry.press(&mut surface, touch_point(point)).map(|_| ())
                    }
                    SimulatorEvent::MouseButtonUp { .. } => registry.release(&mut surface).map(|_| ()),
                    _ => Ok(()),
                };
                if let Err(e) = result {
                    error!("Draw error: {}", e);
                }
            }

            if let Err(e) = registry.draw_if_changed(&mut surface, false) {
                error!("Draw error: {}", e);
            }
        }

        let _ = fb.flush(&mut display);
        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!(
        "Simulator exiting: setpoint {}, fan {}",
        setpoint.borrow().value(),
        fan.borrow().value()
    );
    Ok(())
}
