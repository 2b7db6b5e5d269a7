//! Tagged samples and tagged vectors: the metadata carried between
//! receive-pipeline stages to mark acquisition landmarks (STS/LTS
//! boundaries, frame start) without a side-channel.

use num_complex::Complex64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    None,
    StsStart,
    StsEnd,
    LtsStart,
    Lts1,
    Lts2,
    StartOfFrame,
}

impl Default for Tag {
    fn default() -> Self {
        Tag::None
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TaggedSample {
    pub sample: Complex64,
    pub tag: Tag,
}

impl TaggedSample {
    pub fn new(sample: Complex64, tag: Tag) -> Self {
        TaggedSample { sample, tag }
    }
}

impl Default for TaggedSample {
    fn default() -> Self {
        TaggedSample {
            sample: Complex64::new(0.0, 0.0),
            tag: Tag::None,
        }
    }
}

/// A fixed-`N` group of samples carrying one tag for the whole group.
/// `N` is a const generic rather than a runtime length: every group a
/// given stage emits is the same size (e.g. 48 for one data symbol's
/// worth of demapped subcarriers), so the size belongs in the type.
#[derive(Debug, Clone, Copy)]
pub struct TaggedVector<const N: usize> {
    pub samples: [Complex64; N],
    pub tag: Tag,
}

impl<const N: usize> TaggedVector<N> {
    pub fn new(samples: [Complex64; N], tag: Tag) -> Self {
        TaggedVector { samples, tag }
    }

    pub fn untagged(samples: [Complex64; N]) -> Self {
        TaggedVector { samples, tag: Tag::None }
    }
}

impl<const N: usize> Default for TaggedVector<N> {
    fn default() -> Self {
        TaggedVector {
            samples: [Complex64::new(0.0, 0.0); N],
            tag: Tag::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tag_is_none() {
        assert_eq!(Tag::default(), Tag::None);
        assert_eq!(TaggedSample::default().tag, Tag::None);
    }

    #[test]
    fn tagged_vector_preserves_size_and_tag() {
        let v: TaggedVector<48> = TaggedVector::new([Complex64::new(1.0, 0.0); 48], Tag::StartOfFrame);
        assert_eq!(v.samples.len(), 48);
        assert_eq!(v.tag, Tag::StartOfFrame);
    }
}
