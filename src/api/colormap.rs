use crate::error::{HistogramError, HistogramResult};

/// Colormap key selecting the diverging ramp used by difference charts.
pub const DIFF_COLORMAP_KEY: &str = "diff";

/// Source of ordered display colors, one per bucket.
///
/// `key` is an indicator name, or [`DIFF_COLORMAP_KEY`] for difference charts.
/// Any `Fn(&str, usize) -> Vec<String>` is a colormap.
pub trait Colormap {
    fn colors(&self, key: &str, count: usize) -> Vec<String>;
}

impl<F> Colormap for F
where
    F: Fn(&str, usize) -> Vec<String>,
{
    fn colors(&self, key: &str, count: usize) -> Vec<String> {
        self(key, count)
    }
}

/// Colormap returning the same color for every bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformColormap {
    pub color: String,
}

impl UniformColormap {
    #[must_use]
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl Colormap for UniformColormap {
    fn colors(&self, _key: &str, count: usize) -> Vec<String> {
        vec![self.color.clone(); count]
    }
}

pub(super) fn bucket_colors<C: Colormap + ?Sized>(
    colormap: &C,
    key: &str,
    count: usize,
) -> HistogramResult<Vec<String>> {
    let colors = colormap.colors(key, count);
    if colors.len() != count {
        return Err(HistogramError::ColormapLength {
            key: key.to_owned(),
            expected: count,
            actual: colors.len(),
        });
    }
    Ok(colors)
}
