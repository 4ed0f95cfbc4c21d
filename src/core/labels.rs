use log::warn;

/// Labels offered when neither the settings file nor the command line provide any
pub const DEFAULT_LABELS: [&str; 4] = [
    "Aortic_enlargement",
    "Lung_Opacity",
    "Pleural_effusion",
    "nofinding",
];

/// Ordered label enumeration; a label's position is its YOLO class index.
///
/// The set is fixed once the application starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Build a label set, rejecting an empty enumeration
    pub fn new<I, S>(labels: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(Into::into)
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        if labels.is_empty() {
            return Err(anyhow::anyhow!("Label set must contain at least one label"));
        }
        Ok(Self { labels })
    }

    /// Parse a comma separated list such as `cat,dog,bird`
    pub fn parse(list: &str) -> anyhow::Result<Self> {
        Self::new(list.split(','))
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label selected before the user picks one
    pub fn first(&self) -> &str {
        // `new` rejects empty sets
        self.labels.first().map(String::as_str).unwrap_or_default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Class index written to the annotation file, `-1` for labels outside the set
    pub fn class_index(&self, label: &str) -> i32 {
        match self.position(label) {
            Some(idx) => idx as i32,
            None => {
                warn!("Label {:?} is not in the label set, exporting class index -1", label);
                -1
            }
        }
    }

    pub fn label_at(&self, class_index: i32) -> Option<&str> {
        usize::try_from(class_index)
            .ok()
            .and_then(|idx| self.labels.get(idx))
            .map(String::as_str)
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}
