//! Line-level rewrite engine
//!
//! Rewrites `rev:` lines and additional-dependency pins in place, touching
//! only the substring that has to change. Indentation, quoting style,
//! comments, trailing text and the line terminator pass through untouched.
//! Lines that do not match the recognized shapes are skipped; that is how
//! `repo: local` blocks and custom pin syntax are ignored.

use regex::Regex;
use serde::Serialize;

use crate::core::index::{normalize_name, VersionIndex};

/// Shape of a pinned revision line: indentation, the `rev:` key, an
/// optionally quoted token, an optional `# frozen: <tag>` annotation,
/// trailing text, line terminator.
const REV_LINE: &str = r"^(?P<indent>\s+)rev:(?P<sep>[ \t]*)(?P<rev>[^\s#]+)(?P<gap>[ \t]*)(?:# frozen: (?P<frozen>\S+)\b)?(?P<rest>.*?)(?P<eol>\r?\n?)$";

/// Shape of a repository declaration line; tracked during the scan so each
/// `rev:` line is associated with the repository URL above it.
const REPO_LINE: &str = r"^\s*-\s*repo:\s*(?P<url>[^\s#]+)";

/// Shape of a list-item line carrying a single non-space token
const DEP_ITEM: &str = r"^(?P<indent>\s+)-(?P<sep>[ \t]*)(?P<item>\S+)(?P<gap>[ \t]*)(?P<rest>.*?)(?P<eol>\r?\n?)$";

/// Shape of a version pin inside a list item: package name directly followed
/// by a comparator. Names bearing extras syntax (`name[extra]`) do not match
/// and are never rewritten.
const DEP_PIN: &str = r"^(?P<package>[A-Za-z0-9_-]+)(?P<limit>[><=]\S+)$";

/// A full-length commit hash, as opposed to a human-meaningful tag
const FROZEN_HASH: &str = r"^[0-9a-f]{40}$";

/// A `rev:` line that was rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevUpdate {
    /// Repository URL the line belongs to
    pub repo: String,

    /// Revision the line used to pin (quotes stripped)
    pub old: String,

    /// Revision it pins now
    pub new: String,
}

/// An additional-dependency pin that was rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinUpdate {
    /// Normalized package name
    pub package: String,

    /// Pin as it was written (quotes stripped)
    pub old: String,

    /// Pin as it is written now
    pub new: String,
}

/// Rewrite every `rev:` line whose repository has a resolved revision in the
/// index and whose current pin differs from it.
///
/// With `frozen` enabled, a commit-hash pin annotated with a
/// `# frozen: <tag>` comment is compared through the annotated tag instead
/// of the hash, so an up-to-date frozen pin is left untouched.
pub fn sync_revisions(lines: &mut [String], index: &VersionIndex, frozen: bool) -> Vec<RevUpdate> {
    let rev_re = Regex::new(REV_LINE).expect("invalid rev line pattern");
    let repo_re = Regex::new(REPO_LINE).expect("invalid repo line pattern");
    let hash_re = Regex::new(FROZEN_HASH).expect("invalid frozen hash pattern");

    let mut updates = Vec::new();
    let mut current_repo: Option<String> = None;

    for line in lines.iter_mut() {
        if let Some(caps) = repo_re.captures(line) {
            let (url, _) = unquote(&caps["url"]);
            current_repo = Some(url);
            continue;
        }

        let Some(repo) = current_repo.as_deref() else {
            continue;
        };
        let Some(pin) = index.repo_pin(repo) else {
            continue;
        };

        if let Some((rebuilt, old)) = rewrite_rev_line(line, &pin.rev, frozen, &rev_re, &hash_re) {
            tracing::debug!("pinning {} to {}", repo, pin.rev);
            updates.push(RevUpdate {
                repo: repo.to_string(),
                old,
                new: pin.rev.clone(),
            });
            *line = rebuilt;
        }
    }

    updates
}

/// Rewrite a single `rev:` line against the resolved revision `target`.
///
/// Returns the rebuilt line and the old revision, or `None` when the line
/// does not have the expected shape or is already in sync.
fn rewrite_rev_line(
    line: &str,
    target: &str,
    frozen: bool,
    rev_re: &Regex,
    hash_re: &Regex,
) -> Option<(String, String)> {
    let caps = rev_re.captures(line)?;

    let (current, quote) = unquote(&caps["rev"]);

    let mut effective = current.clone();
    if frozen && hash_re.is_match(&effective) {
        if let Some(annotation) = caps.name("frozen") {
            effective = annotation.as_str().to_string();
        }
    }

    if effective == target {
        return None;
    }

    let token = render_scalar(target, quote);

    // The annotation marker is re-emitted only when further trailing text
    // follows it; an annotation standing alone disappears with the stale
    // value it described.
    let mut trailer = String::new();
    if !caps["rest"].is_empty() {
        trailer.push_str(&caps["gap"]);
        if caps.name("frozen").is_some() {
            trailer.push('#');
        }
        trailer.push_str(&caps["rest"]);
    }

    let rebuilt = format!(
        "{}rev:{}{}{}{}",
        &caps["indent"], &caps["sep"], token, trailer, &caps["eol"]
    );
    Some((rebuilt, current))
}

/// Rewrite every additional-dependency pin whose package has a resolved
/// version in the index to an exact `name==version` pin.
pub fn sync_additional_dependencies(
    lines: &mut [String],
    index: &VersionIndex,
) -> Vec<PinUpdate> {
    let dep_re = Regex::new(DEP_ITEM).expect("invalid dependency line pattern");
    let pin_re = Regex::new(DEP_PIN).expect("invalid dependency pin pattern");

    let mut updates = Vec::new();

    for line in lines.iter_mut() {
        let Some((rebuilt, update)) = rewrite_dependency_line(line, index, &dep_re, &pin_re)
        else {
            continue;
        };
        if rebuilt != *line {
            tracing::debug!("pinning {} to {}", update.package, update.new);
            *line = rebuilt;
            updates.push(update);
        }
    }

    updates
}

/// Rewrite a single list-item pin line against the version index.
///
/// Returns the rebuilt line (which may equal the input when the pin is
/// already exact) or `None` when the line is not a recognizable pin or the
/// package is not in the lockfile.
fn rewrite_dependency_line(
    line: &str,
    index: &VersionIndex,
    dep_re: &Regex,
    pin_re: &Regex,
) -> Option<(String, PinUpdate)> {
    let caps = dep_re.captures(line)?;

    let (item, quote) = unquote(&caps["item"]);
    let pin = pin_re.captures(&item)?;

    let package = normalize_name(&pin["package"]);
    let version = index.package_version(&package)?;

    let quote = quote.map(String::from).unwrap_or_default();
    let body = format!(
        "{}-{}{}{}=={}{}  {}",
        &caps["indent"], &caps["sep"], quote, package, version, quote, &caps["rest"]
    );
    let rebuilt = format!("{}{}", body.trim_end(), &caps["eol"]);

    let update = PinUpdate {
        new: format!("{package}=={version}"),
        package,
        old: item,
    };
    Some((rebuilt, update))
}

/// Split a scalar token into its value and quoting style
fn unquote(token: &str) -> (String, Option<char>) {
    for quote in ['\'', '"'] {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            return (token[1..token.len() - 1].to_string(), Some(quote));
        }
    }
    (token.to_string(), None)
}

/// Render a revision token in the required quoting style.
///
/// Bare tokens go through a single-key mapping emission so values the YAML
/// scanner would read as something other than a string (`1.0`, `true`) come
/// back quoted.
fn render_scalar(value: &str, quote: Option<char>) -> String {
    #[derive(Serialize)]
    struct Rev<'a> {
        rev: &'a str,
    }

    match quote {
        Some('\'') => format!("'{}'", value.replace('\'', "''")),
        Some(quote) => format!("{quote}{value}{quote}"),
        None => serde_yaml_ng::to_string(&Rev { rev: value })
            .ok()
            .and_then(|doc| {
                doc.split_once(':')
                    .map(|(_, rendered)| rendered.trim().to_string())
            })
            .unwrap_or_else(|| value.to_string()),
    }
}
