//! Display entries for menus built on top of rendered tables.
//!
//! A menu engine owns focus and input handling; this module only describes
//! what each entry looks like. Entries are plain data and every operation is
//! a free function matching on the variant.
//!
//! ```rust
//! use tabula_render::menu::{render_entries, MenuEntry};
//!
//! let entries = vec![
//!     MenuEntry::Item("Servers".into()),
//!     MenuEntry::action("Quit", 'q'),
//! ];
//! assert_eq!(render_entries(&entries), vec!["Servers", "[q] Quit"]);
//! ```

/// Indentation added per submenu level.
pub const INDENT: &str = "  ";

/// One displayable menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    /// A selectable text label.
    Item(String),
    /// A labelled command bound to a key.
    Action { label: String, key: char },
    /// A pre-rendered table line, shown verbatim. May carry escape codes.
    Row(String),
    /// A nested group of entries.
    SubMenu {
        label: String,
        entries: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    pub fn action(label: impl Into<String>, key: char) -> Self {
        MenuEntry::Action {
            label: label.into(),
            key,
        }
    }

    pub fn submenu(label: impl Into<String>, entries: Vec<MenuEntry>) -> Self {
        MenuEntry::SubMenu {
            label: label.into(),
            entries,
        }
    }
}

/// Wraps each rendered table line in a [`MenuEntry::Row`].
pub fn table_rows<I, S>(lines: I) -> Vec<MenuEntry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    lines.into_iter().map(|l| MenuEntry::Row(l.into())).collect()
}

/// The text identifying an entry, without key hints or nesting.
pub fn entry_label(entry: &MenuEntry) -> &str {
    match entry {
        MenuEntry::Item(label) => label,
        MenuEntry::Action { label, .. } => label,
        MenuEntry::Row(text) => text,
        MenuEntry::SubMenu { label, .. } => label,
    }
}

/// Renders entries to display lines.
///
/// Actions show their key as `[k] label`, submenus show their label followed
/// by their entries indented by [`INDENT`]. Rows are passed through untouched.
pub fn render_entries(entries: &[MenuEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    push_entries(&mut lines, entries, 0);
    lines
}

fn push_entries(lines: &mut Vec<String>, entries: &[MenuEntry], depth: usize) {
    let indent = INDENT.repeat(depth);
    for entry in entries {
        match entry {
            MenuEntry::Item(label) => lines.push(format!("{}{}", indent, label)),
            MenuEntry::Action { label, key } => {
                lines.push(format!("{}[{}] {}", indent, key, label))
            }
            MenuEntry::Row(text) => lines.push(format!("{}{}", indent, text)),
            MenuEntry::SubMenu { label, entries } => {
                lines.push(format!("{}{} >", indent, label));
                push_entries(lines, entries, depth + 1);
            }
        }
    }
}
