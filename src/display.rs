use std::path::{Path, PathBuf};

use thousands::Separable;

use crate::round::Round;

pub trait Display {
    fn to_display(&self) -> String;
}

impl Display for f64 {
    fn to_display(&self) -> String {
        self.specific_round(2).separate_with_commas()
    }
}

impl Display for u32 {
    fn to_display(&self) -> String {
        self.separate_with_commas()
    }
}

impl Display for u64 {
    fn to_display(&self) -> String {
        self.separate_with_commas()
    }
}

impl Display for usize {
    fn to_display(&self) -> String {
        self.separate_with_commas()
    }
}

impl Display for PathBuf {
    fn to_display(&self) -> String {
        self.as_path().to_display()
    }
}

impl Display for Path {
    fn to_display(&self) -> String {
        self.to_str()
            .unwrap_or("Path with invalid(s) character(s)")
            .to_string()
    }
}

/// Weight in grams, one decimal.
pub fn grams(weight: f64) -> String {
    format!("{:.1}g", weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_to_display() {
        assert_eq!(1.23456.to_display(), "1.23");
        assert_eq!(0.0.to_display(), "0");
        assert_eq!(1234.5.to_display(), "1,234.5");
    }

    #[test]
    fn test_u32_to_display() {
        assert_eq!(12345u32.to_display(), "12,345");
        assert_eq!(0u32.to_display(), "0");
    }

    #[test]
    fn test_u64_to_display() {
        assert_eq!(4294967296u64.to_display(), "4,294,967,296");
    }

    #[test]
    fn test_usize_to_display() {
        assert_eq!(9876543usize.to_display(), "9,876,543");
    }

    #[test]
    fn test_path_to_display() {
        let path = PathBuf::from("/tmp/collection.json");
        assert_eq!(path.to_display(), "/tmp/collection.json");
        assert_eq!(path.as_path().to_display(), "/tmp/collection.json");
    }

    #[test]
    fn test_grams() {
        assert_eq!(grams(78.60000000000001), "78.6g");
        assert_eq!(grams(21.2), "21.2g");
        assert_eq!(grams(7.0), "7.0g");
    }
}
