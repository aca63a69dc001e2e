use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use glam::{Vec2, Vec4};
use tracing::info;

use trellis_core::{Align, Element, HostSurface, RectStyle, RenderBehavior, ScriptedHost};
use trellis_layout::{column, field, row, ColumnConfig, FieldConfig, RowConfig};
use trellis_render::{DrawCommand, DrawList};
use trellis_runtime::{App, TraceBackend};
use trellis_widgets::{button, slider, ButtonConfig, SliderConfig};

#[derive(Parser)]
#[command(name = "trellis-debug")]
#[command(about = "Headless driver that dumps the element tree and draw list as text")]
struct Args {
    /// Number of frames to drive
    #[arg(long, default_value = "4")]
    frames: u32,

    /// Initial drawable width
    #[arg(long, default_value = "800")]
    width: f32,

    /// Initial drawable height
    #[arg(long, default_value = "600")]
    height: f32,

    /// Resize the drawable to WIDTHxHEIGHT halfway through the run
    #[arg(long)]
    resize: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let resize = args.resize.as_deref().map(parse_size).transpose()?;

    info!("Building demo tree at {}x{}", args.width, args.height);

    let host = Rc::new(ScriptedHost::new(args.width, args.height));
    let root = build_demo_tree(host.as_ref());
    let mut app = App::new(root, host.clone(), TraceBackend::new());

    println!("=== INITIAL TREE ===");
    print_tree(app.root());

    for frame in 0..args.frames {
        if frame == args.frames / 2 {
            if let Some(size) = resize {
                info!("Resizing drawable to {}x{}", size.x, size.y);
                host.set_drawable_size(size.x, size.y);
            }
        }

        // Sweep the pointer across the drawable, pressing on alternate
        // frames, so widget behaviors have something to react to.
        let drawable = host.drawable_size();
        let t = (frame as f32 + 0.5) / args.frames.max(1) as f32;
        host.set_pointer(drawable.x * t, drawable.y * 0.5);
        host.set_pressed(frame % 2 == 1);

        app.update(Duration::from_millis(16));
        app.render().context("Failed to render frame")?;
    }

    println!("\n=== TREE AFTER {} FRAME(S) ===", args.frames);
    print_tree(app.root());

    println!("\n=== LAST FRAME DRAW LIST ===");
    print_draw_list(app.draw_list());

    println!(
        "\n{} frame(s) presented, {} draw command(s) executed",
        app.backend().frames(),
        app.backend().commands_executed()
    );

    Ok(())
}

fn parse_size(spec: &str) -> Result<Vec2> {
    let (w, h) = spec
        .split_once('x')
        .ok_or_else(|| anyhow::anyhow!("Expected WIDTHxHEIGHT, got: {}", spec))?;
    let width: f32 = w.parse().with_context(|| format!("Invalid width: {}", w))?;
    let height: f32 = h.parse().with_context(|| format!("Invalid height: {}", h))?;
    Ok(Vec2::new(width, height))
}

/// A field that centers a column holding two rows of buttons and a slider.
fn build_demo_tree(host: &dyn HostSurface) -> Element {
    let confirm = row(RowConfig {
        spacing: 8.0,
        align: Align::Center,
        parts: vec![
            labelled_button("ok", Vec4::new(0.2, 0.5, 0.2, 1.0)),
            labelled_button("cancel", Vec4::new(0.5, 0.2, 0.2, 1.0)),
        ],
        ..RowConfig::default()
    });
    let extras = row(RowConfig {
        spacing: 8.0,
        align: Align::Center,
        parts: vec![
            labelled_button("apply", Vec4::new(0.2, 0.3, 0.5, 1.0)),
            labelled_button("reset", Vec4::new(0.4, 0.4, 0.4, 1.0)),
        ],
        ..RowConfig::default()
    });

    let mut volume = slider(SliderConfig {
        position: Vec2::ZERO,
        size: Vec2::new(160.0, 6.0),
        angle: 0.0,
        on_change: Rc::new(|_, value| {
            if let Some(along) = value {
                info!("Slider tracking at {:.1}", along);
            }
        }),
    });
    volume.render_behavior = RenderBehavior::new(|element, canvas| {
        let end = element.position + Vec2::new(element.size.x, 0.0);
        canvas.line(element.position, end, 2.0, Vec4::new(0.8, 0.8, 0.3, 1.0));
    });

    let stack = column(ColumnConfig {
        spacing: 12.0,
        align: Align::Start,
        parts: vec![confirm, extras, volume],
        ..ColumnConfig::default()
    });

    field(
        FieldConfig {
            align_x: Align::Center,
            align_y: Align::Center,
            parts: vec![stack],
            ..FieldConfig::default()
        },
        host,
    )
}

fn labelled_button(label: &'static str, fill: Vec4) -> Element {
    let mut built = button(ButtonConfig {
        position: Vec2::ZERO,
        size: Vec2::new(64.0, 24.0),
        on_press: Rc::new(move |_, _| info!("Button '{}' pressed", label)),
    });
    built.render_behavior = RenderBehavior::new(move |element, canvas| {
        canvas.rect(element.position, element.size, RectStyle::filled(fill));
        canvas.text(element.position + Vec2::new(6.0, 6.0), label, 12.0, Vec4::ONE);
    });
    built
}

fn print_tree(root: &Element) {
    let mut output = String::new();
    render_element_tree(&mut output, root, 0, true);
    print!("{}", output);
}

fn render_element_tree(output: &mut String, element: &Element, depth: usize, is_last: bool) {
    // Generate clean tree lines
    let tree_char = if depth == 0 {
        ""
    } else if is_last {
        "└── "
    } else {
        "├── "
    };

    let indent = if depth == 0 {
        String::new()
    } else {
        "│   ".repeat(depth - 1) + tree_char
    };

    output.push_str(&format!(
        "{}pos:({:.0},{:.0}) size:({:.0},{:.0})",
        indent, element.position.x, element.position.y, element.size.x, element.size.y
    ));

    // Show attached behaviors inline
    let mut inline_props = Vec::new();
    if element.behavior.is_set() {
        inline_props.push("update");
    }
    if element.part_behavior.is_set() {
        inline_props.push("layout");
    }
    if element.render_behavior.is_set() {
        inline_props.push("draw");
    }
    if !inline_props.is_empty() {
        output.push_str(&format!(" [{}]", inline_props.join(" ")));
    }

    output.push('\n');

    let part_count = element.parts.len();
    for (i, part) in element.parts.iter().enumerate() {
        render_element_tree(output, part, depth + 1, i == part_count - 1);
    }
}

fn print_draw_list(draw_list: &DrawList) {
    for (i, command) in draw_list.commands().iter().enumerate() {
        match command {
            DrawCommand::Rect { origin, size, .. } => {
                println!(
                    "  [{}] rect pos:({:.0},{:.0}) size:({:.0},{:.0})",
                    i, origin.x, origin.y, size.x, size.y
                );
            }
            DrawCommand::Line { from, to, width, .. } => {
                println!(
                    "  [{}] line ({:.0},{:.0})->({:.0},{:.0}) width:{:.0}",
                    i, from.x, from.y, to.x, to.y, width
                );
            }
            DrawCommand::Text { origin, text, .. } => {
                println!("  [{}] text \"{}\" at ({:.0},{:.0})", i, text, origin.x, origin.y);
            }
        }
    }
    println!("  {} command(s) recorded", draw_list.len());
}
