use super::Bucket;
use std::collections::HashMap;
use std::fmt;

/// An abstract request to classify the current image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A bucket button was clicked or activated
    Button(usize),
    /// A character key was pressed
    Hotkey(char),
}

/// A hotkey declared by more than one bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyConflict {
    pub key: char,
    /// Index of the bucket that owns the key
    pub kept: usize,
    /// Index of the bucket that can no longer be reached by the key
    pub shadowed: usize,
}

impl fmt::Display for HotkeyConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hotkey '{}' of bucket {} is already bound to bucket {}",
            self.key,
            self.shadowed + 1,
            self.kept + 1
        )
    }
}

/// Dispatch table from selection events to bucket indices.
///
/// Buttons map one-to-one onto buckets. Hotkeys are case-sensitive and the
/// first bucket registering a key owns it.
#[derive(Debug, Default)]
pub struct InputRouter {
    bucket_count: usize,
    hotkeys: HashMap<char, usize>,
    conflicts: Vec<HotkeyConflict>,
}

impl InputRouter {
    pub fn new(buckets: &[Bucket]) -> Self {
        let mut hotkeys = HashMap::new();
        let mut conflicts = Vec::new();

        for (index, bucket) in buckets.iter().enumerate() {
            let Some(key) = bucket.hotkey else {
                continue;
            };

            match hotkeys.get(&key) {
                Some(&kept) => conflicts.push(HotkeyConflict {
                    key,
                    kept,
                    shadowed: index,
                }),
                None => {
                    hotkeys.insert(key, index);
                }
            }
        }

        Self {
            bucket_count: buckets.len(),
            hotkeys,
            conflicts,
        }
    }

    /// Resolves an event to a bucket index. `None` means the event is not consumed.
    pub fn resolve(&self, event: SelectionEvent) -> Option<usize> {
        match event {
            SelectionEvent::Button(index) => (index < self.bucket_count).then_some(index),
            SelectionEvent::Hotkey(key) => self.hotkeys.get(&key).copied(),
        }
    }

    pub fn conflicts(&self) -> &[HotkeyConflict] {
        &self.conflicts
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }
}
