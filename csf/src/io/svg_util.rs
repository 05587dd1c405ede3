use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    ///Scale factor from cloud coordinates to canvas coordinates
    pub scale: f64,
    ///Blank margin around the cloud on every side, in canvas units
    pub padding: u32,
    ///Color theme of the rendered cloud
    #[serde(default)]
    pub theme: SvgCloudThemes,
    ///Marks the anchor point with a dot
    pub draw_anchor: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            scale: 5.0,
            padding: 10,
            theme: SvgCloudThemes::default(),
            draw_anchor: false,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
pub enum SvgCloudThemes {
    #[default]
    Amber,
    Gray,
}

impl SvgCloudThemes {
    pub fn get_theme(&self) -> SvgCloudTheme {
        match self {
            SvgCloudThemes::Amber => AMBER_THEME,
            SvgCloudThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgCloudTheme {
    pub stroke_width: f64,
    pub background: &'static str,
    pub rect_fill: &'static str,
}

pub static AMBER_THEME: SvgCloudTheme = SvgCloudTheme {
    stroke_width: 1.0,
    background: "#FFFFFF",
    rect_fill: "#FFA500",
};

pub static GRAY_THEME: SvgCloudTheme = SvgCloudTheme {
    stroke_width: 1.0,
    background: "#FFFFFF",
    rect_fill: "#8F8F8F",
};

pub fn change_brightness(color: &str, fraction: f64) -> String {
    let hex = color.trim_start_matches('#');
    let scale = |i: usize| {
        let channel = u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
        (channel as f64 * fraction) as u8
    };
    format!("#{:02X}{:02X}{:02X}", scale(0), scale(2), scale(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_brightness_darkens_each_channel() {
        assert_eq!(change_brightness("#FFA500", 0.0), "#000000");
        assert_eq!(change_brightness("#FFA500", 1.0), "#FFA500");
        assert_eq!(change_brightness("#804020", 0.5), "#402010");
    }
}
