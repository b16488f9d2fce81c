//! CSI frame import command line tool
//!
//! Usage: `csi-frames <input.json> [--ndm N]`
//!
//! The input holds the already converted joints and section names together
//! with the parsed CSI tables. The resulting model, frame tags and
//! diagnostics are written to stdout as JSON.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use csi_frames::prelude::*;

#[derive(Debug, Deserialize)]
struct ImportInput {
    /// Joint coordinates by joint label
    joints: BTreeMap<String, [f64; 3]>,
    /// Analysis section labels available as prismatic sections
    #[serde(default)]
    sections: Vec<String>,
    /// Analysis section labels available as beam integrations
    #[serde(default)]
    integrations: Vec<String>,
    tables: CsiTables,
}

#[derive(Debug, Serialize)]
struct ImportOutput<'a> {
    model: &'a FrameModel,
    frame_tags: &'a BTreeMap<String, usize>,
    skipped: Vec<UnimplementedInstance>,
    diagnostics: &'a [UnimplementedInstance],
}

fn parse_args() -> Result<(String, ImportConfig)> {
    let mut args = std::env::args().skip(1);
    let mut path = None;
    let mut config = ImportConfig::from_env();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ndm" => {
                let value = args.next().context("--ndm requires a value")?;
                config.ndm = value
                    .parse()
                    .with_context(|| format!("invalid --ndm value '{}'", value))?;
            }
            _ if path.is_none() => path = Some(arg),
            _ => bail!("unexpected argument '{}'", arg),
        }
    }

    let path = path.context("usage: csi-frames <input.json> [--ndm N]")?;
    config.validate()?;
    Ok((path, config))
}

fn main() -> Result<()> {
    env_logger::init();

    let (path, config) = parse_args()?;
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let input: ImportInput =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path))?;

    let mut model = FrameModel::new(config.ndm);
    let mut conv = Converter::new();

    for (tag, (label, coords)) in input.joints.iter().enumerate() {
        model.add_node(tag + 1, *coords)?;
        conv.define("Joint", "node", label, tag + 1);
    }
    for (tag, label) in input.sections.iter().enumerate() {
        conv.define("AnalSect", "section", label, tag + 1);
    }
    for (tag, label) in input.integrations.iter().enumerate() {
        conv.define("AnalSect", "integration", label, tag + 1);
    }

    let mut library = Library::new();
    let skipped = create_frames(&input.tables, &mut model, &mut library, &config, &mut conv)
        .context("frame import failed")?;

    log::info!(
        "created {} frame elements, skipped {}, {} diagnostics",
        model.elements.len(),
        skipped.len(),
        conv.diagnostics().len()
    );

    let output = ImportOutput {
        model: &model,
        frame_tags: &library.frame_tags,
        skipped,
        diagnostics: conv.diagnostics(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
