//! relmatch-kb
//!
//! Static reference data used by the scorer: human-readable service aliases
//! per resource type, and region aliases per canonical region key. Built once
//! and read-only afterwards. Declaration order is kept everywhere, since
//! "first alias that matches" is part of the scoring contract.

mod regions;
mod services;

use regex::Regex;
use relmatch_core::error::{Error, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Weight reported for resource types the base does not know.
pub const DEFAULT_WEIGHT: f64 = 0.1;

/// Key of the pseudo region that stands for "everywhere".
pub const GLOBAL_REGION: &str = "global";

pub(crate) struct ServiceRow {
    pub resource_type: &'static str,
    pub aliases: &'static [&'static str],
    pub weight: f64,
}

pub(crate) struct RegionRow {
    pub key: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

/// Input row for [`KnowledgeBase::new`]: one resource type's aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceMapping {
    pub resource_type: String,
    pub aliases: Vec<String>,
    pub weight: f64,
}

impl ServiceMapping {
    pub fn new<S: Into<String>>(resource_type: impl Into<String>, aliases: impl IntoIterator<Item = S>, weight: f64) -> Self {
        Self { resource_type: resource_type.into(), aliases: aliases.into_iter().map(Into::into).collect(), weight }
    }
}

/// Input row for [`KnowledgeBase::new`]: one region's aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMapping {
    pub key: String,
    pub display_name: String,
    pub aliases: Vec<String>,
}

impl RegionMapping {
    pub fn new<S: Into<String>>(key: impl Into<String>, display_name: impl Into<String>, aliases: impl IntoIterator<Item = S>) -> Self {
        Self { key: key.into(), display_name: display_name.into(), aliases: aliases.into_iter().map(Into::into).collect() }
    }
}

/// A display name with its precompiled whole-word pattern.
#[derive(Debug, Clone)]
pub struct Alias {
    name: String,
    lower: String,
    word: Regex,
}

impl Alias {
    fn compile(name: &str) -> Result<Self> {
        let word = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(name)))
            .map_err(|e| Error::InvalidPattern(format!("alias '{name}': {e}")))?;
        Ok(Self { name: name.to_string(), lower: name.to_lowercase(), word })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive whole-word occurrence in `text`.
    pub fn occurs_as_word(&self, text: &str) -> bool {
        self.word.is_match(text)
    }

    /// Substring test against text that is already lowercase.
    pub fn contained_in_lower(&self, lower_text: &str) -> bool {
        lower_text.contains(&self.lower)
    }

    fn word_spans<'t>(&'t self, text: &'t str) -> impl Iterator<Item = (usize, usize)> + 't {
        self.word.find_iter(text).map(|m| (m.start(), m.end()))
    }
}

#[derive(Debug, Clone)]
pub struct ServiceEntry {
    resource_type: String,
    aliases: Vec<Alias>,
    weight: f64,
}

impl ServiceEntry {
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[derive(Debug, Clone)]
pub struct RegionEntry {
    key: String,
    display_name: String,
    aliases: Vec<Alias>,
}

impl RegionEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_global(&self) -> bool {
        self.key == GLOBAL_REGION
    }
}

pub struct KnowledgeBase {
    services: Vec<ServiceEntry>,
    service_index: HashMap<String, usize>,
    regions: Vec<RegionEntry>,
    /// Normalized key or alias → every region that lists it.
    region_index: HashMap<String, Vec<usize>>,
}

static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(|| {
    KnowledgeBase::from_rows(services::AZURE_SERVICES, regions::AZURE_REGIONS)
        .expect("built-in knowledge base tables compile")
});

/// The built-in Azure knowledge base, constructed on first use.
pub fn builtin() -> &'static KnowledgeBase {
    &BUILTIN
}

impl KnowledgeBase {
    pub fn new(services: Vec<ServiceMapping>, regions: Vec<RegionMapping>) -> Result<Self> {
        let mut kb = Self {
            services: Vec::with_capacity(services.len()),
            service_index: HashMap::with_capacity(services.len()),
            regions: Vec::with_capacity(regions.len()),
            region_index: HashMap::new(),
        };
        for s in services {
            let aliases = s.aliases.iter().map(|a| Alias::compile(a)).collect::<Result<Vec<_>>>()?;
            kb.push_service(ServiceEntry { resource_type: normalize_resource_type(&s.resource_type), aliases, weight: s.weight });
        }
        for r in regions {
            let aliases = r.aliases.iter().map(|a| Alias::compile(a)).collect::<Result<Vec<_>>>()?;
            kb.push_region(RegionEntry { key: r.key, display_name: r.display_name, aliases });
        }
        Ok(kb)
    }

    fn from_rows(services: &[ServiceRow], regions: &[RegionRow]) -> Result<Self> {
        Self::new(
            services.iter().map(|s| ServiceMapping::new(s.resource_type, s.aliases.iter().copied(), s.weight)).collect(),
            regions.iter().map(|r| RegionMapping::new(r.key, r.display_name, r.aliases.iter().copied())).collect(),
        )
    }

    fn push_service(&mut self, entry: ServiceEntry) {
        // A repeated key replaces the earlier mapping but keeps its position.
        match self.service_index.get(&entry.resource_type) {
            Some(&i) => self.services[i] = entry,
            None => {
                self.service_index.insert(entry.resource_type.clone(), self.services.len());
                self.services.push(entry);
            }
        }
    }

    fn push_region(&mut self, entry: RegionEntry) {
        let idx = self.regions.len();
        let names = std::iter::once(entry.key.as_str()).chain(entry.aliases.iter().map(Alias::name));
        for name in names {
            let slot = self.region_index.entry(normalize_region(name)).or_default();
            if !slot.contains(&idx) {
                slot.push(idx);
            }
        }
        self.regions.push(entry);
    }

    pub fn services(&self) -> &[ServiceEntry] {
        &self.services
    }

    pub fn regions(&self) -> &[RegionEntry] {
        &self.regions
    }

    /// Mapping for a resource type, compared after normalization.
    pub fn service(&self, resource_type: &str) -> Option<&ServiceEntry> {
        self.service_index.get(&normalize_resource_type(resource_type)).map(|&i| &self.services[i])
    }

    /// Aliases in declaration order; empty for unknown types.
    pub fn aliases(&self, resource_type: &str) -> &[Alias] {
        self.service(resource_type).map(ServiceEntry::aliases).unwrap_or(&[])
    }

    pub fn weight(&self, resource_type: &str) -> f64 {
        self.service(resource_type).map_or(DEFAULT_WEIGHT, ServiceEntry::weight)
    }

    pub fn region(&self, name: &str) -> Option<&RegionEntry> {
        self.region_index.get(&normalize_region(name)).and_then(|ids| ids.first()).map(|&i| &self.regions[i])
    }

    /// Two region spellings are equivalent when they normalize to the same
    /// string or when one region entry lists both.
    pub fn regions_equivalent(&self, a: &str, b: &str) -> bool {
        let na = normalize_region(a);
        let nb = normalize_region(b);
        if na == nb {
            return true;
        }
        match (self.region_index.get(&na), self.region_index.get(&nb)) {
            (Some(xs), Some(ys)) => xs.iter().any(|x| ys.contains(x)),
            _ => false,
        }
    }

    /// Concrete regions mentioned in `texts`, in declaration order.
    ///
    /// Overlapping alias hits within one text resolve to the longest alias, so
    /// "East US 2" does not also count as "East US". Mentions of the global
    /// pseudo region claim their span but are not returned.
    pub fn mentioned_regions<'a, I>(&self, texts: I) -> Vec<&RegionEntry>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut hit = vec![false; self.regions.len()];
        for text in texts {
            let mut spans: Vec<(usize, usize, usize)> = Vec::new();
            for (idx, region) in self.regions.iter().enumerate() {
                for alias in &region.aliases {
                    spans.extend(alias.word_spans(text).map(|(s, e)| (s, e, idx)));
                }
            }
            spans.sort_by(|a, b| (b.1 - b.0).cmp(&(a.1 - a.0)).then(a.0.cmp(&b.0)).then(a.2.cmp(&b.2)));
            let mut taken: Vec<(usize, usize)> = Vec::new();
            for (start, end, idx) in spans {
                if taken.iter().any(|&(s, e)| start < e && s < end) {
                    continue;
                }
                taken.push((start, end));
                hit[idx] = true;
            }
        }
        self.regions.iter().zip(hit).filter(|(r, h)| *h && !r.is_global()).map(|(r, _)| r).collect()
    }
}

/// Lowercase and keep only `[a-z0-9./]`.
pub fn normalize_resource_type(resource_type: &str) -> String {
    resource_type
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '.' || *c == '/')
        .collect()
}

/// Lowercase and keep only `[a-z0-9]`.
pub fn normalize_region(region: &str) -> String {
    region.chars().flat_map(char::to_lowercase).filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit()).collect()
}
