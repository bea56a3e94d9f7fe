//! Pattern-text processing: normalization, zero-directory family expansion,
//! set simplification, and the directory projection used for pruning. All of
//! this runs once per selector construction; queries never touch it.

/// Role of a pattern set during evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PatternRole {
    Include,
    Exclude,
}

impl PatternRole {
    pub(crate) const fn is_exclude(self) -> bool {
        matches!(self, Self::Exclude)
    }
}

/// Longest prefix before `:` still interpreted as a Windows drive letter
/// rather than a syntax name.
const DRIVE_LETTER_THRESHOLD: usize = 1;

/// Returns whether the pattern carries no syntax qualifier and therefore
/// follows the legacy zero-or-more-directories semantics.
pub(crate) fn is_legacy(pattern: &str) -> bool {
    match pattern.find(':') {
        None => true,
        Some(index) => index <= DRIVE_LETTER_THRESHOLD,
    }
}

/// Splits a syntax-qualified pattern into its syntax name and expression.
///
/// Returns `None` for legacy patterns, including the drive-letter case.
pub(crate) fn split_syntax(pattern: &str) -> Option<(&str, &str)> {
    let index = pattern.find(':')?;
    if index <= DRIVE_LETTER_THRESHOLD {
        return None;
    }
    Some((&pattern[..index], &pattern[index + 1..]))
}

/// Returns the qualifier prefix and glob expression of a pattern, or `None`
/// when the pattern belongs to a syntax whose text cannot be reasoned about
/// as a path (regex and friends).
fn glob_parts(pattern: &str) -> Option<(&str, &str)> {
    match split_syntax(pattern) {
        None => Some(("", pattern)),
        Some(("glob", expression)) => Some((&pattern[..pattern.len() - expression.len()], expression)),
        Some(_) => None,
    }
}

/// Rewrites raw include/exclude strings into an ordered, deduplicated set of
/// canonical patterns.
///
/// Empty entries are dropped. Legacy patterns go through the separator and
/// trailing-slash rewrites and contribute their whole zero-directory family;
/// syntax-qualified patterns are kept verbatim. A malformed qualifier is not
/// an error: it reads as a legacy pattern.
pub(crate) fn normalize_patterns<I>(patterns: I, role: PatternRole) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut normalized = Vec::new();
    for raw in patterns {
        let raw = raw.as_ref();
        if raw.is_empty() {
            continue;
        }
        if is_legacy(raw) {
            let pattern = legacy_transform(raw);
            push_unique(&mut normalized, pattern.clone());
            add_variants_with_one_dir_removed(&mut normalized, &pattern, 0);
        } else {
            push_unique(&mut normalized, raw.to_owned());
        }
    }
    simplify(normalized, role)
}

/// Applies the legacy text rewrites: `/` as the only separator, trailing `/`
/// completed with `**`, and duplicate recursive-wildcard runs collapsed to a
/// fixed point.
fn legacy_transform(raw: &str) -> String {
    let mut pattern = raw.replace(std::path::MAIN_SEPARATOR, "/");
    if pattern.ends_with('/') {
        pattern.push_str("**");
    }
    // The collapses below assume "**" may match zero directories.
    while pattern.ends_with("/**/**") {
        pattern.truncate(pattern.len() - 3);
    }
    while pattern.starts_with("**/**/") {
        pattern.drain(..3);
    }
    while pattern.contains("/**/**/") {
        pattern = pattern.replace("/**/**/", "/**/");
    }
    pattern
}

/// Adds every variant of `pattern` with one standalone `**` token removed,
/// recursing into each reduced string to cover multi-token patterns.
///
/// A token only counts when it is bounded by `/` or a string edge; `***` and
/// `**name` shapes are left alone. The removal consumes the trailing slash,
/// or the leading slash when the token ends the string, so the reduced text
/// stays a well-formed path pattern. Each reduction strictly shortens the
/// string, which bounds the recursion.
pub(crate) fn add_variants_with_one_dir_removed(patterns: &mut Vec<String>, pattern: &str, mut end: usize) {
    let bytes = pattern.as_bytes();
    let length = bytes.len();
    while let Some(offset) = pattern[end..].find("**") {
        let mut start = end + offset;
        end = start + 2;
        if end < length {
            if bytes[end] != b'/' {
                continue;
            }
            if start == 0 {
                // Nothing precedes the token; drop the slash after it too.
                end += 1;
            }
        }
        if start > 0 {
            start -= 1;
            if bytes[start] != b'/' {
                continue;
            }
        }
        let reduced = format!("{}{}", &pattern[..start], &pattern[end..]);
        push_unique(patterns, reduced.clone());
        add_variants_with_one_dir_removed(patterns, &reduced, start);
    }
}

/// Collapses a pattern set dominated by the bare recursive wildcard.
///
/// For excludes the wildcard alone survives (everything is excluded); for
/// includes the set empties, which the selector reads as "include
/// everything". Insertion order is preserved otherwise.
pub(crate) fn simplify(mut patterns: Vec<String>, role: PatternRole) -> Vec<String> {
    if patterns.iter().any(|pattern| pattern == "**") {
        patterns.clear();
        if role.is_exclude() {
            patterns.push(String::from("**"));
        }
    }
    patterns
}

/// Projects file patterns onto the coarser directory patterns used to skip
/// whole subtrees during traversal.
///
/// The projection must stay an over-approximation: a directory may only be
/// ruled out when no pattern could select anything beneath it.
///
/// Excludes contribute a directory only through their `D/**` form; excluding
/// a single file never prunes the directory holding it. Includes contribute
/// the chain of parents leading into the pattern, since each level has to be
/// entered before the next one is reachable. An include whose expression
/// starts with the recursive wildcard anchors its first named segment at an
/// arbitrary depth, which makes every directory a potential ancestor of a
/// selected path; the same holds for syntaxes that give no path structure to
/// inspect, so both cases disable include-side pruning entirely.
pub(crate) fn directory_patterns(patterns: &[String], role: PatternRole) -> Vec<String> {
    let mut directories = Vec::new();
    for pattern in patterns {
        let Some((qualifier, expression)) = glob_parts(pattern) else {
            if role.is_exclude() {
                continue;
            }
            return Vec::new();
        };
        match role {
            PatternRole::Exclude => {
                if let Some(parent) = expression.strip_suffix("/**") {
                    if !parent.is_empty() {
                        push_unique(&mut directories, format!("{qualifier}{parent}"));
                    }
                }
            }
            PatternRole::Include => {
                if expression == "**" || expression.starts_with("**/") {
                    return Vec::new();
                }
                for (index, _) in expression.match_indices('/') {
                    if index > 0 {
                        push_unique(&mut directories, format!("{qualifier}{}", &expression[..index]));
                    }
                }
                if expression.ends_with("/**") {
                    push_unique(&mut directories, format!("{qualifier}{expression}"));
                }
            }
        }
    }
    simplify(directories, role)
}

fn push_unique(patterns: &mut Vec<String>, pattern: String) {
    if !patterns.iter().any(|existing| *existing == pattern) {
        patterns.push(pattern);
    }
}
