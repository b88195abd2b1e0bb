use anyhow::Result;
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};

pub fn hex_to_color(hex: &str) -> Color {
    let h = hex.trim_start_matches('#');
    if h.len() != 6 { return Color::Reset; }
    let r = u8::from_str_radix(&h[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&h[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&h[4..6], 16).unwrap_or(0);
    Color::Rgb(r, g, b)
}

fn default_border_style() -> String { "rounded".to_owned() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
    // Backgrounds
    pub bg_primary: String, pub bg_secondary: String, pub bg_popup: String,
    // Borders
    pub border_normal: String, pub border_focused: String,
    // Text
    pub text_primary: String, pub text_muted: String, pub text_accent: String,
    // Calendar highlights
    pub today_bg: String, pub today_fg: String,
    pub cursor_bg: String, pub cursor_fg: String,
    /// Range endpoints (check-in / check-out cells).
    pub endpoint_bg: String, pub endpoint_fg: String,
    /// Days strictly inside the selected range.
    pub in_range_bg: String, pub in_range_fg: String,
    // Special
    pub price_fg: String, pub star_fg: String,
    pub success: String, pub warning: String, pub error: String,
    /// Border style: "rounded" | "double" | "thick" | "plain"
    #[serde(default = "default_border_style")]
    pub border_style: String,
}

impl ThemeConfig {
    // ── Color accessors ───────────────────────────────────────────────────────
    pub fn bg(&self)            -> Color { hex_to_color(&self.bg_primary) }
    pub fn bg2(&self)           -> Color { hex_to_color(&self.bg_secondary) }
    pub fn popup_bg(&self)      -> Color { hex_to_color(&self.bg_popup) }
    pub fn border(&self)        -> Color { hex_to_color(&self.border_normal) }
    pub fn border_active(&self) -> Color { hex_to_color(&self.border_focused) }
    pub fn fg(&self)            -> Color { hex_to_color(&self.text_primary) }
    pub fn fg_dim(&self)        -> Color { hex_to_color(&self.text_muted) }
    pub fn accent(&self)        -> Color { hex_to_color(&self.text_accent) }
    pub fn price(&self)         -> Color { hex_to_color(&self.price_fg) }
    pub fn star(&self)          -> Color { hex_to_color(&self.star_fg) }
    pub fn success(&self)       -> Color { hex_to_color(&self.success) }
    pub fn warning(&self)       -> Color { hex_to_color(&self.warning) }
    pub fn error(&self)         -> Color { hex_to_color(&self.error) }

    pub fn today_highlight(&self)    -> (Color, Color) {
        (hex_to_color(&self.today_bg), hex_to_color(&self.today_fg))
    }
    pub fn cursor_highlight(&self)   -> (Color, Color) {
        (hex_to_color(&self.cursor_bg), hex_to_color(&self.cursor_fg))
    }
    pub fn endpoint_highlight(&self) -> (Color, Color) {
        (hex_to_color(&self.endpoint_bg), hex_to_color(&self.endpoint_fg))
    }
    pub fn in_range_highlight(&self) -> (Color, Color) {
        (hex_to_color(&self.in_range_bg), hex_to_color(&self.in_range_fg))
    }

    pub fn border_type(&self) -> BorderType {
        match self.border_style.as_str() {
            "double" => BorderType::Double,
            "thick"  => BorderType::Thick,
            "plain"  => BorderType::Plain,
            _        => BorderType::Rounded,
        }
    }

    // ── Persistence ───────────────────────────────────────────────────────────
    pub fn load() -> Result<Self> {
        let path = crate::config::config_dir().join("theme.toml");
        if path.exists() {
            Ok(toml::from_str(&std::fs::read_to_string(&path)?)?)
        } else {
            let t = ThemeConfig::default();
            t.save()?;
            Ok(t)
        }
    }

    pub fn save(&self) -> Result<()> {
        let dir = crate::config::config_dir();
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join("theme.toml"), toml::to_string_pretty(self)?)?;
        Ok(())
    }

    // ── Theme catalogue ───────────────────────────────────────────────────────
    pub fn all_themes() -> Vec<ThemeConfig> {
        vec![
            ThemeConfig::default(),    // seafoam — the WanderRest house style
            ThemeConfig::catppuccin(),
            ThemeConfig::nord(),
            ThemeConfig::gruvbox(),
            ThemeConfig::dracula(),
        ]
    }

    // ── Built-in themes ───────────────────────────────────────────────────────

    pub fn catppuccin() -> Self { Self {
        name: "catppuccin-mocha".into(),
        bg_primary: "#1e1e2e".into(), bg_secondary: "#181825".into(), bg_popup: "#313244".into(),
        border_normal: "#45475a".into(), border_focused: "#89b4fa".into(),
        text_primary: "#cdd6f4".into(), text_muted: "#6c7086".into(), text_accent: "#89b4fa".into(),
        today_bg: "#cba6f7".into(), today_fg: "#1e1e2e".into(),
        cursor_bg: "#89b4fa".into(), cursor_fg: "#1e1e2e".into(),
        endpoint_bg: "#94e2d5".into(), endpoint_fg: "#1e1e2e".into(),
        in_range_bg: "#313244".into(), in_range_fg: "#94e2d5".into(),
        price_fg: "#a6e3a1".into(), star_fg: "#f9e2af".into(),
        success: "#a6e3a1".into(), warning: "#f9e2af".into(), error: "#f38ba8".into(),
        border_style: "rounded".into(),
    }}

    pub fn nord() -> Self { Self {
        name: "nord".into(),
        bg_primary: "#2e3440".into(), bg_secondary: "#3b4252".into(), bg_popup: "#434c5e".into(),
        border_normal: "#4c566a".into(), border_focused: "#88c0d0".into(),
        text_primary: "#eceff4".into(), text_muted: "#4c566a".into(), text_accent: "#88c0d0".into(),
        today_bg: "#ebcb8b".into(), today_fg: "#2e3440".into(),
        cursor_bg: "#81a1c1".into(), cursor_fg: "#2e3440".into(),
        endpoint_bg: "#88c0d0".into(), endpoint_fg: "#2e3440".into(),
        in_range_bg: "#3b4252".into(), in_range_fg: "#88c0d0".into(),
        price_fg: "#a3be8c".into(), star_fg: "#ebcb8b".into(),
        success: "#a3be8c".into(), warning: "#ebcb8b".into(), error: "#bf616a".into(),
        border_style: "rounded".into(),
    }}

    pub fn gruvbox() -> Self { Self {
        name: "gruvbox".into(),
        bg_primary: "#282828".into(), bg_secondary: "#1d2021".into(), bg_popup: "#3c3836".into(),
        border_normal: "#504945".into(), border_focused: "#d79921".into(),
        text_primary: "#ebdbb2".into(), text_muted: "#7c6f64".into(), text_accent: "#d79921".into(),
        today_bg: "#d79921".into(), today_fg: "#282828".into(),
        cursor_bg: "#689d6a".into(), cursor_fg: "#282828".into(),
        endpoint_bg: "#8ec07c".into(), endpoint_fg: "#282828".into(),
        in_range_bg: "#3c3836".into(), in_range_fg: "#8ec07c".into(),
        price_fg: "#b8bb26".into(), star_fg: "#fabd2f".into(),
        success: "#b8bb26".into(), warning: "#fabd2f".into(), error: "#fb4934".into(),
        border_style: "rounded".into(),
    }}

    pub fn dracula() -> Self { Self {
        name: "dracula".into(),
        bg_primary: "#282a36".into(), bg_secondary: "#21222c".into(), bg_popup: "#44475a".into(),
        border_normal: "#6272a4".into(), border_focused: "#bd93f9".into(),
        text_primary: "#f8f8f2".into(), text_muted: "#6272a4".into(), text_accent: "#bd93f9".into(),
        today_bg: "#f1fa8c".into(), today_fg: "#282a36".into(),
        cursor_bg: "#ff79c6".into(), cursor_fg: "#282a36".into(),
        endpoint_bg: "#8be9fd".into(), endpoint_fg: "#282a36".into(),
        in_range_bg: "#44475a".into(), in_range_fg: "#8be9fd".into(),
        price_fg: "#50fa7b".into(), star_fg: "#f1fa8c".into(),
        success: "#50fa7b".into(), warning: "#f1fa8c".into(), error: "#ff5555".into(),
        border_style: "rounded".into(),
    }}
}

impl Default for ThemeConfig {
    /// Seafoam — teal-on-slate, after the storefront's house palette.
    fn default() -> Self { Self {
        name: "seafoam".into(),
        bg_primary: "#111827".into(), bg_secondary: "#0b1120".into(), bg_popup: "#1f2937".into(),
        border_normal: "#374151".into(), border_focused: "#14b8a6".into(),
        text_primary: "#f3f4f6".into(), text_muted: "#6b7280".into(), text_accent: "#2dd4bf".into(),
        today_bg: "#f59e0b".into(), today_fg: "#111827".into(),
        cursor_bg: "#2dd4bf".into(), cursor_fg: "#111827".into(),
        endpoint_bg: "#0d9488".into(), endpoint_fg: "#f0fdfa".into(),
        in_range_bg: "#134e4a".into(), in_range_fg: "#99f6e4".into(),
        price_fg: "#34d399".into(), star_fg: "#fbbf24".into(),
        success: "#34d399".into(), warning: "#fbbf24".into(), error: "#f87171".into(),
        border_style: "rounded".into(),
    }}
}
