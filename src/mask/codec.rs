use crate::mask::memo::{MemoCache, MemoStats};

/// Byte length of the leading `M0,0H<n>V<n>H0V0Z` boundary, where `<n>` is `\d*\.?\d*`.
///
/// Only this exact grammar is recognized: signs, exponents and whitespace are rejected.
pub(crate) fn boundary_len(path: &str) -> Option<usize> {
    let b = path.as_bytes();
    let mut i = expect(b, 0, b"M0,0H")?;
    i = skip_number(b, i);
    i = expect(b, i, b"V")?;
    i = skip_number(b, i);
    expect(b, i, b"H0V0Z")
}

fn expect(b: &[u8], at: usize, lit: &[u8]) -> Option<usize> {
    let end = at.checked_add(lit.len())?;
    (b.get(at..end)? == lit).then_some(end)
}

fn skip_number(b: &[u8], mut i: usize) -> usize {
    while b.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    if b.get(i) == Some(&b'.') {
        i += 1;
        while b.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
    }
    i
}

/// Leading canvas boundary of `path`, or `""` when it does not start with one.
pub fn canvas_boundary_of(path: &str) -> &str {
    match boundary_len(path) {
        Some(n) => &path[..n],
        None => {
            tracing::debug!(path_len = path.len(), "no canvas boundary at start of mask path");
            ""
        }
    }
}

/// `path` without its leading canvas boundary, whitespace-trimmed.
pub fn strip_canvas_boundary(path: &str) -> &str {
    let rest = match boundary_len(path) {
        Some(n) => &path[n..],
        None => path,
    };
    rest.trim()
}

/// Memoized split of composite mask paths into canvas boundary and hole.
#[derive(Debug)]
pub struct PathCodec {
    boundary: MemoCache,
    hole: MemoCache,
}

impl Default for PathCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCodec {
    pub fn new() -> Self {
        Self {
            boundary: MemoCache::new("canvas_boundary"),
            hole: MemoCache::new("hole"),
        }
    }

    pub fn extract_canvas_boundary(&self, path: &str) -> String {
        self.boundary
            .get_or_compute(path, |p| canvas_boundary_of(p).to_string())
    }

    pub fn extract_hole(&self, path: &str) -> String {
        self.hole
            .get_or_compute(path, |p| strip_canvas_boundary(p).to_string())
    }

    /// Both halves at once; `boundary + hole` reproduces a builder-made path.
    pub fn split(&self, path: &str) -> (String, String) {
        (self.extract_canvas_boundary(path), self.extract_hole(path))
    }

    pub fn clear(&self) {
        self.boundary.clear();
        self.hole.clear();
    }

    /// Counters for the boundary and hole caches, in that order.
    pub fn stats(&self) -> (MemoStats, MemoStats) {
        (self.boundary.stats(), self.hole.stats())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/codec.rs"]
mod tests;
