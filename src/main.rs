use anyhow::Context;
use clap::Parser;

use swatch::cli::CliArgs;
use swatch::color::parse_color;
use swatch::host::PositionIndex;
use swatch::matcher::find_colors;

fn main() -> anyhow::Result<()> {
    swatch::trace::init();
    let args = CliArgs::parse();

    for path in &args.paths {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let index = PositionIndex::new(&text);

        for m in find_colors(&text) {
            // The matcher already validated every literal it returns
            let Some(rgba) = parse_color(&m.literal) else {
                continue;
            };
            let pos = index.position_at(m.start);
            let preview = if args.no_color {
                String::new()
            } else {
                format!("\x1b[48;2;{};{};{}m  \x1b[0m ", rgba.r, rgba.g, rgba.b)
            };
            println!(
                "{}:{}:{}  {}{}  ->  {}",
                path.display(),
                pos.line + 1,
                pos.column + 1,
                preview,
                m.literal,
                rgba.to_css()
            );
        }
    }

    Ok(())
}
