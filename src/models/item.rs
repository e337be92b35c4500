//! Launcher items: the `{"items": [...]}` document read by the script filter.

use serde::Serialize;
use std::collections::HashSet;

pub const ICON_PATH: &str = "icon.png";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub path: String,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            path: ICON_PATH.to_string(),
        }
    }
}

/// Alternate action triggered while holding a modifier key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModAction {
    pub subtitle: String,
    pub arg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mods {
    pub cmd: ModAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub arg: String,
    pub icon: Icon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods: Option<Mods>,
}

impl Item {
    pub fn new(
        uid: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        arg: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            arg: arg.into(),
            icon: Icon::default(),
            mods: None,
        }
    }

    pub fn with_cmd(mut self, subtitle: impl Into<String>, arg: impl Into<String>) -> Self {
        self.mods = Some(Mods {
            cmd: ModAction {
                subtitle: subtitle.into(),
                arg: arg.into(),
            },
        });
        self
    }
}

/// Item batch. `push` keeps uids unique within the batch by suffixing
/// repeats with `-2`, `-3`, ...
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemList {
    pub items: Vec<Item>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(item: Item) -> Self {
        let mut list = Self::new();
        list.push(item);
        list
    }

    pub fn push(&mut self, mut item: Item) {
        if self.seen.contains(&item.uid) {
            let base = item.uid.clone();
            let mut n = 2;
            while self.seen.contains(&format!("{base}-{n}")) {
                n += 1;
            }
            item.uid = format!("{base}-{n}");
        }
        self.seen.insert(item.uid.clone());
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<Item> for ItemList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut list = ItemList::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}
