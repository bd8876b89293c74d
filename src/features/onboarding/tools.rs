//! Fixed catalog of tools offered on step two. Selection state lives in the
//! route's signals keyed by tool id; the catalog itself never changes at
//! runtime.

pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const CATALOG: &[Tool] = &[
    Tool { id: "figma", name: "Figma", icon: "🎨" },
    Tool { id: "sketch", name: "Sketch", icon: "✏️" },
    Tool { id: "photoshop", name: "Photoshop", icon: "📸" },
    Tool { id: "illustrator", name: "Illustrator", icon: "🖌️" },
    Tool { id: "vscode", name: "VS Code", icon: "💻" },
    Tool { id: "github", name: "GitHub", icon: "🐙" },
    Tool { id: "slack", name: "Slack", icon: "💬" },
    Tool { id: "notion", name: "Notion", icon: "📝" },
    Tool { id: "asana", name: "Asana", icon: "📋" },
    Tool { id: "trello", name: "Trello", icon: "📊" },
    Tool { id: "zoom", name: "Zoom", icon: "🎥" },
    Tool { id: "dropbox", name: "Dropbox", icon: "📦" },
];

#[cfg(test)]
mod tests {
    use super::CATALOG;

    #[test]
    fn catalog_ids_are_unique_and_populated() {
        assert_eq!(CATALOG.len(), 12);
        for (index, tool) in CATALOG.iter().enumerate() {
            assert!(!tool.id.is_empty() && !tool.name.is_empty());
            for other in &CATALOG[index + 1..] {
                assert_ne!(tool.id, other.id);
            }
        }
    }
}
