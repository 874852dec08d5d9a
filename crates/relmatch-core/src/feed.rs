//! Release-feed snapshots stored as JSON.
//!
//! Accepts either `{ "fetchedAt": "...", "items": [...] }` or a bare array of
//! items. Every item field is optional; `id` falls back to `link`, then to
//! `title`.

use anyhow::Context;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use crate::error::Result;
use crate::traits::ReleaseSource;
use crate::types::ReleaseItem;

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    Snapshot { items: Vec<RawItem> },
    Bare(Vec<RawItem>),
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawItem {
    id: Option<String>,
    title: Option<String>,
    link: Option<String>,
    published: Option<String>,
    summary: Option<String>,
    categories: Vec<String>,
}

impl From<RawItem> for ReleaseItem {
    fn from(raw: RawItem) -> Self {
        let title = raw.title.unwrap_or_default();
        let link = raw.link.unwrap_or_default();
        let id = raw
            .id
            .filter(|s| !s.is_empty())
            .or_else(|| Some(link.clone()).filter(|s| !s.is_empty()))
            .unwrap_or_else(|| title.clone());
        ReleaseItem {
            id,
            title,
            link,
            published: raw.published.unwrap_or_default(),
            summary: raw.summary.unwrap_or_default(),
            categories: raw.categories,
        }
    }
}

pub struct JsonFeed {
    path: PathBuf,
}

impl JsonFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReleaseSource for JsonFeed {
    fn load_releases(&self) -> anyhow::Result<Vec<ReleaseItem>> {
        let file = File::open(&self.path).with_context(|| format!("opening release feed {}", self.path.display()))?;
        let items = read_feed(BufReader::new(file)).with_context(|| format!("parsing release feed {}", self.path.display()))?;
        let undated = items.iter().filter(|i| i.published_at().is_none()).count();
        tracing::info!(path = %self.path.display(), releases = items.len(), undated, "release feed loaded");
        Ok(items)
    }
}

pub fn read_feed<R: Read>(reader: R) -> Result<Vec<ReleaseItem>> {
    let doc: FeedDocument = serde_json::from_reader(reader)?;
    Ok(into_items(doc))
}

pub fn parse_feed(text: &str) -> Result<Vec<ReleaseItem>> {
    let doc: FeedDocument = serde_json::from_str(text)?;
    Ok(into_items(doc))
}

fn into_items(doc: FeedDocument) -> Vec<ReleaseItem> {
    let raw = match doc {
        FeedDocument::Snapshot { items } => items,
        FeedDocument::Bare(items) => items,
    };
    raw.into_iter().map(ReleaseItem::from).collect()
}
