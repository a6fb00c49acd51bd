//! # Planning Demands
//!
//! A [`Demand`] asks the planner for one named subnet with room for a number of hosts.
//! On the command line a demand is written `name:hosts`, e.g. `office:200`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Demand {
    pub name: String,
    pub hosts: u32,
}

impl Demand {
    pub fn new(name: impl Into<String>, hosts: u32) -> Self {
        Self {
            name: name.into(),
            hosts,
        }
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.hosts)
    }
}

impl FromStr for Demand {
    type Err = ParseError;

    /// Parses `name:hosts`. The split happens on the last colon, so names may contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Demand(s.to_string());

        let (name, hosts) = s.trim().rsplit_once(':').ok_or_else(invalid)?;
        let name = name.trim();
        let hosts = hosts.trim();

        if name.is_empty() || hosts.is_empty() || !hosts.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hosts = hosts.parse::<u32>().map_err(|_| invalid())?;

        Ok(Demand::new(name, hosts))
    }
}

/// Parses a comma-separated list of demands (e.g., "office:200, lab:50").
///
/// Empty items are skipped, so trailing commas are fine.
pub fn parse_demands(s: &str) -> Result<Vec<Demand>, ParseError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Demand::from_str)
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
