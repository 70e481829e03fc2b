//! Load and validate topology descriptions.

use crate::Error;
use distvec_routing::{Link, Routers};
use serde::Deserialize;
use tracing::debug;

/// Marks the end of the router section in the text format.
const START: &str = "START";

/// Marks the end of the link section in the text format.
const UPDATE: &str = "UPDATE";

/// A validated topology: unique routers and links that only reference them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Description {
    pub names: Vec<String>,
    pub links: Vec<Link>,
}

impl Description {
    /// Returns the registry of declared routers.
    pub fn routers(&self) -> Routers {
        Routers::new(self.names.iter().cloned())
    }

    fn router(&mut self, name: &str) -> Result<(), Error> {
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(Error::InvalidRouter(name.to_string()));
        }
        if self.names.iter().any(|existing| existing == name) {
            return Err(Error::DuplicateRouter(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(())
    }

    fn link(&mut self, a: &str, b: &str, cost: u32) -> Result<(), Error> {
        for router in [a, b] {
            if !self.names.iter().any(|name| name == router) {
                return Err(Error::UnknownRouter {
                    a: a.to_string(),
                    b: b.to_string(),
                    router: router.to_string(),
                });
            }
        }
        self.links.push(Link::new(a, b, cost));
        Ok(())
    }
}

/// Section of the text format being read.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Routers,
    Links,
}

/// Parse the line-oriented text format.
///
/// Blank lines are skipped and lines are trimmed. Input may end before `START` (no links)
/// or before `UPDATE`. Anything after `UPDATE` is ignored.
pub fn text(content: &str) -> Result<Description, Error> {
    let mut description = Description::default();
    let mut section = Section::Routers;
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let at = |source: Error| Error::Line {
            line: index + 1,
            source: Box::new(source),
        };
        match section {
            Section::Routers if line == START => section = Section::Links,
            Section::Routers => description.router(line).map_err(at)?,
            Section::Links if line == UPDATE => break,
            Section::Links => {
                let fields: Vec<&str> = line.split_whitespace().collect();
                let [a, b, cost] = fields[..] else {
                    return Err(at(Error::MalformedLink(line.to_string())));
                };
                let cost = cost.parse::<u32>().map_err(|_| {
                    at(Error::InvalidCost {
                        a: a.to_string(),
                        b: b.to_string(),
                        cost: cost.to_string(),
                    })
                })?;
                description.link(a, b, cost).map_err(at)?;
            }
        }
    }
    debug!(
        routers = description.names.len(),
        links = description.links.len(),
        "parsed text topology"
    );
    Ok(description)
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct File {
    routers: Vec<String>,
    #[serde(default)]
    links: Vec<FileLink>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FileLink {
    a: String,
    b: String,
    cost: i64,
}

/// Parse a YAML topology:
///
/// ```yaml
/// routers: [A, B, C]
/// links:
///   - { a: A, b: B, cost: 1 }
///   - { a: B, b: C, cost: 1 }
/// ```
pub fn yaml(content: &str) -> Result<Description, Error> {
    let file: File = serde_yaml::from_str(content)?;
    let mut description = Description::default();
    for name in &file.routers {
        description.router(name)?;
    }
    for link in &file.links {
        let cost = u32::try_from(link.cost).map_err(|_| Error::InvalidCost {
            a: link.a.clone(),
            b: link.b.clone(),
            cost: link.cost.to_string(),
        })?;
        description.link(&link.a, &link.b, cost)?;
    }
    debug!(
        routers = description.names.len(),
        links = description.links.len(),
        "parsed yaml topology"
    );
    Ok(description)
}
