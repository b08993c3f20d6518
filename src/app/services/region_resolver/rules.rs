//! Building blocks shared by the per-country resolvers

use super::Resolution;
use crate::app::models::EntryRecord;
use std::collections::HashMap;

/// Static map from observed administrative names to region codes
///
/// Keys are trimmed on construction, matching the trimmed cells produced
/// by the record codec.
#[derive(Debug)]
pub struct RegionTable {
    codes: HashMap<&'static str, &'static str>,
}

impl RegionTable {
    pub fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        let codes = pairs
            .iter()
            .map(|(name, code)| (name.trim(), *code))
            .collect();
        Self { codes }
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.codes.get(name.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Look up `name`; a missing name or a miss is an unknown region
    pub fn resolve(&self, entry: &EntryRecord, name: Option<&str>) -> Resolution {
        match name {
            Some(name) => match self.get(name) {
                Some(code) => Resolution::code(code),
                None => Resolution::unknown(entry, Some(name)),
            },
            None => Resolution::unknown(entry, None),
        }
    }
}

/// First present value in priority order
pub fn first_present<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates.iter().copied().flatten().next()
}

/// Use the source's first-level admin code unchanged
pub fn passthrough(entry: &EntryRecord) -> Resolution {
    match entry.admin_code_1.as_deref() {
        Some(code) => Resolution::code(code),
        None => Resolution::NoRegion,
    }
}
