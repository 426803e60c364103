// settings.rs

/// Fixed naming and timing rules shared by both converters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterSettings {
    /// Name of the output folder created beside the input directory.
    pub output_dir_name: String,
    /// Frame duration used when the operator gives no usable value.
    pub default_duration_ms: u32,
    /// Zero padding of the frame number in `frame0001.png`.
    pub frame_number_width: usize,
    pub gif_extension: String,
    pub image_extensions: Vec<String>,
    /// Draw progress bars on the terminal.
    pub show_progress: bool,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            output_dir_name: String::from("output"),
            default_duration_ms: 100,
            frame_number_width: 4,
            gif_extension: String::from("gif"),
            image_extensions: vec![
                String::from("png"),
                String::from("jpg"),
                String::from("jpeg"),
            ],
            show_progress: true,
        }
    }
}

impl ConverterSettings {
    /// Accepts only a run of ASCII digits that fits in a `u32`; anything else
    /// falls back to the default duration.
    pub fn parse_duration(&self, input: &str) -> u32 {
        let input = input.trim();
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return self.default_duration_ms;
        }
        input.parse().unwrap_or(self.default_duration_ms)
    }

    /// `frame0001.png` for index 0.
    pub fn frame_file_name(&self, index: usize) -> String {
        format!("frame{:0width$}.png", index + 1, width = self.frame_number_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_accepts_digits_only() {
        let settings = ConverterSettings::default();
        assert_eq!(settings.parse_duration("250"), 250);
        assert_eq!(settings.parse_duration("  40 "), 40);
        assert_eq!(settings.parse_duration(""), 100);
        assert_eq!(settings.parse_duration("abc"), 100);
        assert_eq!(settings.parse_duration("-5"), 100);
        assert_eq!(settings.parse_duration("1.5"), 100);
        assert_eq!(settings.parse_duration("99999999999"), 100);
    }

    #[test]
    fn frame_names_are_one_based_and_padded() {
        let settings = ConverterSettings::default();
        assert_eq!(settings.frame_file_name(0), "frame0001.png");
        assert_eq!(settings.frame_file_name(41), "frame0042.png");
        assert_eq!(settings.frame_file_name(12344), "frame12345.png");
    }
}
