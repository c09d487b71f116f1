/// Color tokens handed to the rendering sink. Only the presenter reads these.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub alert: &'static str,
    pub warn: &'static str,
    pub nominal: &'static str,
    pub streak_complete: &'static str,
    pub ghost: &'static str,
    pub baseline: &'static str,
    pub line: &'static str,
}

impl Palette {
    pub fn get(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "orbit" => Some(Self::orbit()),
            "mono" => Some(Self {
                name: "mono",
                alert: "#FFFFFF",
                warn: "#BBBBBB",
                nominal: "#777777",
                streak_complete: "#FFFFFF",
                ghost: "#555555",
                baseline: "#EEEEEE",
                line: "#333333",
            }),
            _ => None,
        }
    }

    fn orbit() -> Self {
        Self {
            name: "orbit",
            alert: "var(--color-alert)",
            warn: "var(--color-warn)",
            nominal: "var(--color-accent-2)",
            streak_complete: "var(--color-accent-1)",
            ghost: "#9D4EDD",
            baseline: "#00F0FF",
            line: "#333",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::orbit()
    }
}
