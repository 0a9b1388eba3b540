//! Diagnostic: decode a PBCG file, print its tables, replay it against a
//! recording surface and print the resulting call trace.
//!
//! Usage: `pbcg_dump <file.pbcg> [--strict]`

use anyhow::{bail, Context};
use pbcg::io::pbcg::{PaletteRecord, PbcgImage};
use pbcg::render::RecordingSurface;
use pbcg::{Executor, PbcgReader, PbcgReaderConfiguration, Program};

fn print_image(image: &PbcgImage) {
    let h = &image.header;
    println!(
        "header: {} opaque, {} alpha, {} linear, {} radial, {} paths, {} instructions",
        h.opaque_colors,
        h.alpha_colors,
        h.linear_gradients,
        h.radial_gradients,
        h.paths,
        h.instructions
    );

    for (i, entry) in image.palette.iter().enumerate() {
        match entry {
            PaletteRecord::Color(color) => println!("  palette[{i:>3}] {color}"),
            PaletteRecord::LinearGradient(g) => println!(
                "  palette[{i:>3}] linear ({}, {}) -> ({}, {}), {} stops",
                g.x0,
                g.y0,
                g.x1,
                g.y1,
                g.stops.len()
            ),
            PaletteRecord::RadialGradient(g) => println!(
                "  palette[{i:>3}] radial ({}, {}, r{}) -> ({}, {}, r{}), {} stops",
                g.x0,
                g.y0,
                g.r0,
                g.x1,
                g.y1,
                g.r1,
                g.stops.len()
            ),
        }
    }

    for (i, path) in image.paths.iter().enumerate() {
        println!("  path[{i:>3}] {} steps", path.steps.len());
    }

    for notification in &image.notifications {
        println!("  note: {notification}");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: pbcg_dump <file.pbcg> [--strict]");
    };
    let strict = args.any(|a| a == "--strict");

    let reader = PbcgReader::from_file(&path)
        .with_context(|| format!("cannot open {path}"))?
        .with_configuration(PbcgReaderConfiguration {
            reject_trailing_data: strict,
        });
    let image = reader
        .read()
        .with_context(|| format!("failed to decode {path}"))?;
    print_image(&image);

    let program = Program::from_image(&image).context("failed to build program")?;
    println!("features: {:?}", program.features());

    let mut surface = RecordingSurface::new();
    let result = Executor::new(&program).replay(&mut surface);
    for call in surface.calls() {
        println!("  {call}");
    }

    let summary = result.context("replay failed")?;
    println!(
        "replayed {} instructions, max depth {}, {} restores at end",
        summary.executed, summary.max_depth, summary.unwound
    );
    Ok(())
}
