//! Mirror selection.
//!
//! The same file tree is served from two hosts. Every generated page links to
//! the same directory on the *other* host, so a run has to know which side it
//! is generating for.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MirrorError {
    #[error("unknown mirror '{0}' (valid options: 'eu' or 'na')")]
    Unknown(String),
}

/// Which mirror this run generates pages for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    Eu,
    Na,
}

/// Fixed per-mirror settings.
///
/// `display_name` and `base_url` describe the *other* mirror (the link
/// target); `tag` names this one and appears in every page title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorProfile {
    pub display_name: &'static str,
    pub tag: &'static str,
    pub base_url: &'static str,
}

impl Mirror {
    pub fn profile(self) -> MirrorProfile {
        match self {
            Mirror::Eu => MirrorProfile {
                display_name: "NA Site",
                tag: "EU",
                base_url: "https://files-na.femboy.kz",
            },
            Mirror::Na => MirrorProfile {
                display_name: "EU site",
                tag: "NA",
                base_url: "https://files.femboy.kz",
            },
        }
    }
}

impl FromStr for Mirror {
    type Err = MirrorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eu" => Ok(Mirror::Eu),
            "na" => Ok(Mirror::Na),
            _ => Err(MirrorError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Mirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mirror::Eu => write!(f, "eu"),
            Mirror::Na => write!(f, "na"),
        }
    }
}

impl MirrorProfile {
    /// URL of the same directory on the other mirror.
    ///
    /// `segments` is the directory's path below the tree root, one component
    /// per entry. Segments are percent-encoded and joined with `/` whatever
    /// the host platform's separator is. An empty slice is the root.
    pub fn link_for(&self, segments: &[String]) -> String {
        if segments.is_empty() {
            return format!("{}/", self.base_url);
        }
        let rel: Vec<String> = segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect();
        format!("{}/{}/", self.base_url, rel.join("/"))
    }
}
