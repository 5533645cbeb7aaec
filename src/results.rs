use std::collections::HashSet;

/// Presentation links collected across listing pages.
///
/// Keeps first-seen order so iteration is reproducible.
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    links: Vec<String>,
    seen: HashSet<String>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `link`, returning `false` if it was already present
    pub fn insert(&mut self, link: String) -> bool {
        if self.seen.contains(&link) {
            return false;
        }
        self.seen.insert(link.clone());
        self.links.push(link);
        true
    }

    pub fn contains(&self, link: &str) -> bool {
        self.seen.contains(link)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.links.iter()
    }

    /// Newline-joined links, as written by the link-list flow
    pub fn to_text(&self) -> String {
        self.links.join("\n")
    }
}

impl Extend<String> for LinkSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for link in iter {
            self.insert(link);
        }
    }
}

impl<'a> IntoIterator for &'a LinkSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

/// Tally of one orchestrated download run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// User the files were namespaced under
    pub username: String,
    /// Size of the collected link set
    pub links_found: usize,
    /// Links handed to the converter
    pub attempted: usize,
    /// PDFs written to disk
    pub saved: usize,
    /// Links whose file name could not be derived
    pub skipped: usize,
}
