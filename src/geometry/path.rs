use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A coordinate's position within a (possibly nested) geometry, as an
/// ordered list of indices from the outside in.
///
/// Rendered as a dotted string at the boundary (`"0.3"` = ring 0, point 3),
/// which is the form selection sets and consuming renderers match against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StructuralPath(Vec<usize>);

impl StructuralPath {
    /// A single-segment path, used to root the traversal of one constituent
    /// of a multi-geometry.
    #[must_use]
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Extends this path one level deeper.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        Self(segments)
    }

    /// The path's index segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for StructuralPath {
    fn from(segments: Vec<usize>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for StructuralPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for StructuralPath {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s
            .split('.')
            .map(str::parse::<usize>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(segments))
    }
}
