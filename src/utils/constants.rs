use once_cell::sync::Lazy;

use crate::models::ColorSetSource;

pub const DEFAULT_STORAGE_ROOT: &str = "./mod-data";

pub const DEFAULT_COLORS: &str = "\
#E6194B
#3CB44B
#FFE119
#4363D8
#F58231
#911EB4
#42D4F4
#F032E6
#BFEF45
#469990
#9A6324
#800000
#808000
#000075
";

pub const PASTEL_COLORS: &str = "\
#FFB3BA,#FFDFBA,#FFFFBA,#BAFFC9,#BAE1FF
#E0BBE4,#957DAD,#D291BC,#FEC8D8,#FFDFD3
";

pub static BUILTIN_SOURCES: Lazy<Vec<ColorSetSource>> = Lazy::new(|| {
    vec![
        ColorSetSource::new("Default", "colors.txt", DEFAULT_COLORS),
        ColorSetSource::new("Pastel", "pastel_colors.txt", PASTEL_COLORS),
    ]
});
