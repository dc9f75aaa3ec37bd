use crate::clip::Clip;

/// Ordered collection of exclusively owned clips.
///
/// Dropping the list drops every member and with it every format buffer.
#[derive(Debug, Clone, Default)]
pub struct ClipList {
    clips: Vec<Clip>,
}

impl ClipList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, clip: Clip) {
        self.clips.push(clip);
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clip> {
        self.clips.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Clip> {
        self.clips.iter_mut()
    }
}

impl From<Vec<Clip>> for ClipList {
    fn from(clips: Vec<Clip>) -> Self {
        Self { clips }
    }
}

impl FromIterator<Clip> for ClipList {
    fn from_iter<I: IntoIterator<Item = Clip>>(iter: I) -> Self {
        Self {
            clips: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ClipList {
    type Item = Clip;
    type IntoIter = std::vec::IntoIter<Clip>;

    fn into_iter(self) -> Self::IntoIter {
        self.clips.into_iter()
    }
}

impl<'a> IntoIterator for &'a mut ClipList {
    type Item = &'a mut Clip;
    type IntoIter = std::slice::IterMut<'a, Clip>;

    fn into_iter(self) -> Self::IntoIter {
        self.clips.iter_mut()
    }
}
