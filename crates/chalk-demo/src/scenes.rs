#![forbid(unsafe_code)]

//! The two demo scenes.
//!
//! Both draw into a caller-supplied [`Sink`] so the tests below can check
//! them without touching stdout.

use chalk::prelude::*;
use tracing::{debug, info};

/// Sample queue families: index and capability bits.
const QUEUE_FAMILIES: [(u32, u8); 4] = [
    (0, 0b0000_1111),
    (1, 0b0000_1100),
    (2, 0b0010_0100),
    (3, 0b0100_0000),
];

/// Sample devices: name, kind and suitability score.
const DEVICES: [(&str, &str, i32); 2] = [
    ("Radeon RX 7800 XT", "discrete", 1400),
    ("llvmpipe (LLVM 17.0.6, 256 bits)", "cpu", -1000),
];

const EXTENSIONS: [&str; 3] = ["VK_KHR_surface", "VK_KHR_xcb_surface", "VK_KHR_swapchain"];

/// Draw the debug console panel and hand the sink back.
pub fn console(sink: Sink, config: &ChalkConfig, width: usize) -> chalk::Result<Sink> {
    let mut session = Session::begin(sink, "Renderer diagnostics", WindowButtons::ALL, width)?;
    info!(content_width = session.content_width(), "demo: console scene");

    session.begin_section("Window:")?;
    session.begin_frame("Surface")?;
    session.print("Size: 800x600")?;
    session.print("Resizable: no")?;
    session.end_frame()?;

    session.begin_section("Vulkan instance:")?;
    session.begin_frame("Required extensions")?;
    for extension in EXTENSIONS {
        session.print(extension)?;
    }
    session.end_frame()?;

    session.begin_section("Physical device: ")?;
    session.begin_frame("Candidates")?;
    session.begin_column();
    for (name, _, _) in DEVICES {
        session.print(name)?;
    }
    session.begin_column();
    for (_, kind, _) in DEVICES {
        session.print(kind)?;
    }
    session.begin_column();
    for (_, _, score) in DEVICES {
        session.print(&score.to_string())?;
    }
    session.flush_columns(&ColumnLayout::from_config(config).framed(true))?;

    session.begin_frame("Queue families")?;
    session.begin_column();
    for (index, _) in QUEUE_FAMILIES {
        session.print(&format!("Queue #{index}"))?;
    }
    session.begin_column();
    for (_, flags) in QUEUE_FAMILIES {
        session.print(&format!("{flags:08b}"))?;
    }
    session.flush_columns(&ColumnLayout::from_config(config).fit_to_width(false))?;
    session.end_frame()?;
    session.end_frame()?;

    session.begin_section("Swapchain")?;
    session.begin_frame("")?;
    session.vertical_print("FIFO")?;
    session.end_frame()?;

    let sink = session.end()?;
    debug!("demo: console scene done");
    Ok(sink)
}

/// Draw a pipeline diagram on a canvas sized from `config` and flush it.
pub fn canvas(sink: &mut Sink, config: &ChalkConfig) -> chalk::Result<()> {
    let mut canvas = Canvas::from_config(config);
    info!(width = %canvas.width(), height = %canvas.height(), "demo: canvas scene");

    let boxes = [
        (Pos::new(0, 0), "Vertex"),
        (Pos::new(0, 14), "Raster"),
        (Pos::new(0, 28), "Fragment"),
    ];
    for (corner, label) in boxes {
        let far = Pos::new(corner.x + 2, corner.y + 11);
        canvas.rectangle_nice_frame(corner, far, label == "Raster");
        label_at(&mut canvas, Pos::new(corner.x + 1, corner.y + 2), label);
    }
    for y in [12, 26] {
        canvas.set(Pos::new(1, y), Pixel::from('─'));
        canvas.set(Pos::new(1, y + 1), Pixel::from('▶'));
    }

    canvas.rectangle_filled(Pos::new(4, 0), Pos::new(6, 40), &Pixel::from('░'));
    canvas.rectangle_frame(Pos::new(4, 0), Pos::new(6, 39), &Pixel::from('#'));
    canvas.line(Pos::new(3, 5), Pos::new(3, 33), &Pixel::from('┈'));

    // Indexed access never grows the grid.
    if let Ok(pixel) = canvas.get_mut(Pos::new(5, 1)) {
        *pixel = Pixel::from('@');
    }

    canvas.flush(sink)?;
    Ok(())
}

fn label_at(canvas: &mut Canvas, start: Pos, text: &str) {
    for (offset, glyph) in chalk::text::glyphs(text).enumerate() {
        canvas.set(Pos::new(start.x, start.y + offset), Pixel::new(glyph));
    }
}
