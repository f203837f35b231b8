//! The ellipsoid parameter source: a keyed table of named ellipsoids,
//! read from INI-style text
//!
//! ```text
//! # Comments start with '#' or ';'
//! [Krassovsky_1940]
//! A = 6378245
//! B = 6356863.019
//! F1 = 298.3
//! Id = 1
//! ```
//!
//! Keys are case insensitive. All four keys are required in every section.
use super::constants::ELLIPSOID_LIST;
use super::Ellipsoid;
use crate::Error;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EllipsoidRegistry {
    ellipsoids: BTreeMap<String, Ellipsoid>,
}

impl EllipsoidRegistry {
    /// A registry holding the built-in ellipsoids only
    #[must_use]
    pub fn builtin() -> EllipsoidRegistry {
        let mut ellipsoids = BTreeMap::new();
        for (name, a, b, rf, id) in ELLIPSOID_LIST {
            ellipsoids.insert(name.to_string(), Ellipsoid::derive(a, b, rf, id));
        }
        EllipsoidRegistry { ellipsoids }
    }

    /// Parse INI-style text. Fails on the first malformed line or section.
    pub fn parse(text: &str) -> Result<EllipsoidRegistry, Error> {
        let mut sections: Vec<(String, BTreeMap<String, String>)> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let n = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[') {
                let Some(name) = name.strip_suffix(']') else {
                    return Err(Error::Syntax(format!("line {n}: unclosed section header")));
                };
                sections.push((name.trim().to_string(), BTreeMap::new()));
                continue;
            }

            let Some((key, value)) = line.split_once(['=', ':']) else {
                return Err(Error::Syntax(format!("line {n}: expected 'key = value'")));
            };
            let Some((_, entries)) = sections.last_mut() else {
                return Err(Error::Syntax(format!("line {n}: key outside of section")));
            };
            entries.insert(key.trim().to_lowercase(), value.trim().to_string());
        }

        let mut ellipsoids = BTreeMap::new();
        for (name, entries) in &sections {
            let ellps = ellipsoid_from_section(name, entries)?;
            ellipsoids.insert(name.clone(), ellps);
        }
        debug!("EllipsoidRegistry: parsed {} ellipsoids", ellipsoids.len());
        Ok(EllipsoidRegistry { ellipsoids })
    }

    /// Read and parse a registry file
    pub fn from_file(path: &Path) -> Result<EllipsoidRegistry, Error> {
        let text = std::fs::read_to_string(path)?;
        debug!("EllipsoidRegistry: reading {}", path.display());
        EllipsoidRegistry::parse(&text)
    }

    /// Add the entries of `other`, replacing entries of the same name
    #[must_use]
    pub fn merged(mut self, other: EllipsoidRegistry) -> EllipsoidRegistry {
        self.ellipsoids.extend(other.ellipsoids);
        self
    }

    pub fn get(&self, name: &str) -> Result<Ellipsoid, Error> {
        self.ellipsoids
            .get(name)
            .copied()
            .ok_or_else(|| {
                Error::NotFound(name.to_string(), ": unknown ellipsoid".to_string())
            })
    }

    /// The ellipsoid names, in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ellipsoids.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ellipsoids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ellipsoids.is_empty()
    }
}

fn ellipsoid_from_section(
    name: &str,
    entries: &BTreeMap<String, String>,
) -> Result<Ellipsoid, Error> {
    let a = real(name, entries, "a")?;
    let b = real(name, entries, "b")?;
    let rf = real(name, entries, "f1")?;
    let id = field(name, entries, "id")?;
    let id = id
        .parse::<i32>()
        .map_err(|_| Error::BadParam(format!("{name}.id"), id.to_string()))?;
    Ellipsoid::new(a, b, rf, id)
}

fn field<'a>(
    name: &str,
    entries: &'a BTreeMap<String, String>,
    key: &str,
) -> Result<&'a str, Error> {
    let Some(value) = entries.get(key) else {
        warn!("EllipsoidRegistry: [{name}] lacks '{key}'");
        return Err(Error::MissingParam(format!("{name}.{key}")));
    };
    Ok(value)
}

fn real(name: &str, entries: &BTreeMap<String, String>, key: &str) -> Result<f64, Error> {
    let value = field(name, entries, key)?;
    value
        .parse::<f64>()
        .map_err(|_| Error::BadParam(format!("{name}.{key}"), value.to_string()))
}

// ----- Tests ---------------------------------------------------------------------
