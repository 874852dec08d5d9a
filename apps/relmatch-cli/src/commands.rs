use anyhow::Context;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use relmatch_core::config::{Config, ScoringOptions};
use relmatch_core::inventory::CsvInventory;
use relmatch_core::feed::JsonFeed;
use relmatch_core::traits::{InventorySource, ReleaseSource};
use relmatch_core::types::{Annotation, MatchResult};
use relmatch_engine::{apply_annotations, augment, category_of, RankingEngine};
use relmatch_kb::{KnowledgeBase, DEFAULT_WEIGHT};

use crate::annotator::CommandAnnotator;
use crate::cli::ScoreArgs;

/// Command-line flags win over the `scoring` table.
pub fn scoring_options(config: &Config, args: &ScoreArgs) -> anyhow::Result<ScoringOptions> {
    let mut opts = config.scoring()?;
    if let Some(threshold) = args.threshold {
        opts.threshold = threshold;
    }
    if args.no_regions {
        opts.region_aware = false;
    }
    opts.validate()?;
    Ok(opts)
}

fn input_path(flag: Option<&PathBuf>, config: &Config, key: &str, what: &str) -> anyhow::Result<PathBuf> {
    match flag {
        Some(p) => Ok(p.clone()),
        None => config.path(key)?.with_context(|| format!("no {what} given: pass --{what} or set {key}")),
    }
}

pub fn score(config: &Config, kb: &KnowledgeBase, args: &ScoreArgs) -> anyhow::Result<Vec<MatchResult>> {
    let opts = scoring_options(config, args)?;
    let inventory_path = input_path(args.inventory.as_ref(), config, "paths.inventory", "inventory")?;
    let releases_path = input_path(args.releases.as_ref(), config, "paths.releases", "releases")?;

    let inventory = CsvInventory::new(inventory_path).load_inventory()?;
    let releases = JsonFeed::new(releases_path).load_releases()?;

    let engine = RankingEngine::new(kb).with_threshold(opts.threshold);
    let mut results = if opts.region_aware {
        engine.score_with_regions(&inventory, &releases)
    } else {
        engine.score(&inventory.by_type, &releases)
    };
    if let Some(path) = &args.annotations {
        let annotations = load_annotations(path)?;
        results = apply_annotations(results, &releases, &annotations);
    }
    if let Some(program) = &args.annotator {
        let annotator = CommandAnnotator::new(program.clone(), args.annotator_args.clone());
        results = augment(&annotator, &releases, results);
    }

    let matched = results.iter().filter(|r| !r.matched_releases.is_empty()).count();
    info!(
        resource_types = results.len(),
        releases = releases.len(),
        matched_types = matched,
        threshold = engine.threshold(),
        region_aware = opts.region_aware,
        "scored"
    );
    Ok(results)
}

pub fn load_annotations(path: &Path) -> anyhow::Result<Vec<Annotation>> {
    let file = File::open(path).with_context(|| format!("opening annotations {}", path.display()))?;
    let annotations: Vec<Annotation> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing annotations {}", path.display()))?;
    info!(annotations = annotations.len(), path = %path.display(), "annotations loaded");
    Ok(annotations)
}

pub fn lookup<W: Write>(out: &mut W, kb: &KnowledgeBase, resource_type: &str) -> anyhow::Result<()> {
    let category = category_of(resource_type).map_or("none", |c| c.as_str());
    match kb.service(resource_type) {
        Some(entry) => {
            writeln!(out, "{}", entry.resource_type())?;
            writeln!(out, "  weight:   {:.2}", entry.weight())?;
            writeln!(out, "  category: {category}")?;
            let aliases: Vec<&str> = entry.aliases().iter().map(|a| a.name()).collect();
            writeln!(out, "  aliases:  {}", aliases.join(", "))?;
        }
        None => {
            writeln!(out, "{resource_type}: not in the knowledge base (weight {DEFAULT_WEIGHT:.2}, never matched)")?;
            writeln!(out, "  category: {category}")?;
        }
    }
    Ok(())
}
