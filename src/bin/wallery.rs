use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;

use wallery::{DEFAULT_MARGIN, ItemSpec, Strategy};

/// Arrange a set of sized pictures into a gallery wall.
#[derive(Parser, Debug)]
#[command(name = "wallery", version)]
struct Cli {
    /// Input items JSON: an array of `{ "id", "width", "height" }`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Arrangement strategy tag (`linear`, `column`, `grid`,
    /// `grid-uniform`); unrecognized tags fall back to `column`.
    #[arg(long, default_value = "column")]
    strategy: String,

    /// Margin around each picture, in wall units.
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    margin: i64,

    /// Random seed; the same seed reproduces the same arrangement.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let specs = read_items_json(&cli.in_path)?;
    let strategy = Strategy::from_tag(&cli.strategy);
    let arrangement = wallery::arrange_items(&specs, cli.margin, strategy, cli.seed)?;

    let payload =
        serde_json::to_string_pretty(&arrangement).with_context(|| "serialize arrangement")?;
    match cli.out {
        Some(path) => std::fs::write(&path, payload)
            .with_context(|| format!("write arrangement '{}'", path.display()))?,
        None => println!("{payload}"),
    }
    Ok(())
}

fn read_items_json(path: &Path) -> anyhow::Result<Vec<ItemSpec>> {
    let f = File::open(path).with_context(|| format!("open items '{}'", path.display()))?;
    let r = BufReader::new(f);
    let specs: Vec<ItemSpec> = serde_json::from_reader(r).with_context(|| "parse items JSON")?;
    Ok(specs)
}
