//! Static option tables the prompt assembler draws from. Every record is
//! used both as a display label and as a prose fragment, so descriptions
//! are written to read naturally mid-sentence once lower-cased.

/// Sentinel id meaning "no selection" for the film stock and lens filter
/// categories. The assembler omits the matching clause entirely.
pub const NONE_ID: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Body,
    Lens,
    LightingStyle,
    LightingType,
    ShotSize,
    FilmStock,
    LensFilter,
    Palette,
    Weather,
    Period,
    Engine,
    AspectRatio,
    Quality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn rec(id: &'static str, name: &'static str, description: &'static str) -> OptionRecord {
    OptionRecord {
        id,
        name,
        description,
    }
}

pub const CAMERA_BODIES: &[OptionRecord] = &[
    rec("sony-a7r-v", "Sony A7R V", "High resolution, professional detail"),
    rec("canon-eos-r5", "Canon EOS R5", "Classic color science, versatile"),
    rec("nikon-z9", "Nikon Z9", "Robust, high-speed performance"),
    rec(
        "fujifilm-gfx100",
        "Fujifilm GFX100 II",
        "Medium format depth and texture",
    ),
    rec(
        "leica-m11",
        "Leica M11",
        "Iconic rangefinder look, street photography",
    ),
    rec(
        "hasselblad-x2d",
        "Hasselblad X2D 100C",
        "Ultimate color accuracy, medium format",
    ),
];

// The 50mm leads: it is the documented default selection.
pub const LENSES: &[OptionRecord] = &[
    rec(
        "50mm-f12",
        "50mm f/1.2",
        "The \"Nifty Fifty\", human-eye perspective",
    ),
    rec(
        "35mm-f14",
        "35mm f/1.4",
        "Classic storytelling, wide but natural",
    ),
    rec(
        "85mm-f12",
        "85mm f/1.2",
        "Ultimate portrait lens, creamy bokeh",
    ),
    rec(
        "24-70mm-f28",
        "24-70mm f/2.8",
        "The versatile workhorse zoom",
    ),
    rec(
        "16-35mm-f28",
        "16-35mm f/2.8",
        "Ultra-wide for landscapes and architecture",
    ),
    rec(
        "100mm-macro",
        "100mm f/2.8 Macro",
        "Extreme detail for close-ups",
    ),
    rec(
        "70-200mm-f28",
        "70-200mm f/2.8",
        "Compression and isolation for sports/wildlife",
    ),
];

pub const LIGHTING_STYLES: &[OptionRecord] = &[
    rec("cinematic", "Cinematic", "High contrast, dramatic shadows"),
    rec(
        "soft-glamour",
        "Soft Glamour",
        "Flattering, even light, minimal shadows",
    ),
    rec(
        "moody-noir",
        "Moody Noir",
        "Dark, atmospheric, heavy shadows",
    ),
    rec("high-key", "High Key", "Bright, airy, optimistic"),
    rec("low-key", "Low Key", "Dark background, focused light"),
    rec(
        "golden-hour",
        "Golden Hour",
        "Warm, directional, long shadows",
    ),
    rec("blue-hour", "Blue Hour", "Cool, ethereal, twilight glow"),
];

pub const LIGHTING_TYPES: &[OptionRecord] = &[
    rec(
        "rembrandt",
        "Rembrandt Lighting",
        "Classic triangle of light on the cheek",
    ),
    rec(
        "butterfly",
        "Butterfly Lighting",
        "Symmetrical shadow under the nose",
    ),
    rec(
        "rim-light",
        "Rim Lighting",
        "Backlit edges to separate subject from background",
    ),
    rec(
        "split-lighting",
        "Split Lighting",
        "Subject lit on exactly one side",
    ),
    rec(
        "volumetric",
        "Volumetric Lighting",
        "Visible light beams, \"God rays\"",
    ),
    rec(
        "neon-cyberpunk",
        "Neon / Cyberpunk",
        "Vibrant, multi-colored artificial light",
    ),
    rec(
        "natural-window",
        "Natural Window Light",
        "Soft, directional, organic",
    ),
    rec(
        "studio-strobes",
        "Studio Strobes",
        "Powerful, controlled artificial flashes for crisp detail",
    ),
    rec(
        "natural-diffused",
        "Natural Diffused Light",
        "Soft, even illumination from an overcast sky or large softbox",
    ),
];

// Wide shot leads as the default framing.
pub const SHOT_SIZES: &[OptionRecord] = &[
    rec(
        "wide-shot",
        "Wide Shot (WS)",
        "Balances both the subject and the surrounding imagery, keeping the entire subject in frame while giving context",
    ),
    rec(
        "establishing-shot",
        "Establishing Shot",
        "A shot at the head of a scene that clearly shows the location the action is set in",
    ),
    rec(
        "extreme-wide",
        "Extreme Wide Shot (EWS)",
        "Makes the subject appear small against their location, emphasizing the vastness of the environment",
    ),
    rec(
        "full-shot",
        "Full Shot (FS)",
        "Lets the subject fill the frame from head to toe while still allowing some features of the scenery",
    ),
    rec(
        "medium-wide",
        "Medium Wide Shot (MWS)",
        "Frames the subject from roughly the knees up, splitting the difference between a full shot and a medium shot",
    ),
    rec(
        "cowboy-shot",
        "Cowboy Shot (CS)",
        "Frames the subject from mid-thighs up, used to include action and emotion while showing the subject from the waist down",
    ),
    rec(
        "medium-shot",
        "Medium Shot (MS)",
        "Frames the subject from the waist up, balancing composition between the subject and their surroundings",
    ),
    rec(
        "medium-closeup",
        "Medium Close-Up (MCU)",
        "Frames the subject from the chest up, perfect for capturing facial expressions and slight gestures",
    ),
    rec(
        "closeup",
        "Close-Up (CU)",
        "Fills the frame with a part of the subject, typically the face, to reveal emotions and reactions",
    ),
    rec(
        "extreme-closeup",
        "Extreme Close-Up (ECU)",
        "Fills the frame with tiny details like eyes or textures, capturing nuances that would otherwise be missed",
    ),
    rec(
        "low-angle",
        "Low Angle",
        "Looking up at subject, powerful and heroic",
    ),
    rec(
        "high-angle",
        "High Angle",
        "Looking down at subject, vulnerable or overview",
    ),
    rec(
        "birds-eye",
        "Bird's Eye",
        "Directly from above, map-like perspective",
    ),
];

pub const FILM_STOCKS: &[OptionRecord] = &[
    rec("none", "None (Digital)", "Clean digital rendering"),
    rec(
        "kodak-portra-400",
        "Kodak Portra 400",
        "Warm, natural skin tones with gentle saturation",
    ),
    rec(
        "kodak-ektar-100",
        "Kodak Ektar 100",
        "Ultra-fine grain and punchy, vivid color",
    ),
    rec(
        "fuji-velvia-50",
        "Fujifilm Velvia 50",
        "Deeply saturated landscape color and rich contrast",
    ),
    rec(
        "ilford-hp5",
        "Ilford HP5 Plus",
        "Classic black-and-white grain with wide latitude",
    ),
    rec(
        "cinestill-800t",
        "CineStill 800T",
        "Tungsten-balanced halation glow, nocturnal cinematic color",
    ),
    rec(
        "kodak-trix-400",
        "Kodak Tri-X 400",
        "Gritty monochrome reportage texture",
    ),
];

pub const LENS_FILTERS: &[OptionRecord] = &[
    rec("none", "None", "No filtration"),
    rec(
        "polarizer",
        "Circular Polarizer",
        "Cuts glare and reflections while deepening blue skies",
    ),
    rec(
        "nd-filter",
        "ND Filter",
        "Enables long exposures that smooth water and motion",
    ),
    rec(
        "black-pro-mist",
        "Black Pro-Mist 1/4",
        "Softens highlights into a dreamy cinematic halation",
    ),
    rec(
        "uv-haze",
        "UV Haze Filter",
        "Clears distant atmospheric haze for crisper landscapes",
    ),
    rec(
        "starburst",
        "Starburst Filter",
        "Turns point light sources into radiant star flares",
    ),
];

pub const COLOR_PALETTES: &[OptionRecord] = &[
    rec(
        "natural",
        "Natural",
        "True-to-life color rendition with neutral balance",
    ),
    rec(
        "teal-orange",
        "Teal & Orange",
        "Blockbuster complementary grade, warm skin against cool shadows",
    ),
    rec(
        "muted-pastel",
        "Muted Pastel",
        "Desaturated soft hues, gentle filmic tonality",
    ),
    rec(
        "vibrant",
        "Vibrant",
        "Bold, saturated primaries with high color energy",
    ),
    rec(
        "monochrome",
        "Monochrome",
        "Full black-and-white tonal range, emphasis on form and texture",
    ),
    rec(
        "earthy",
        "Earthy Tones",
        "Warm browns, ochres and olive greens, organic warmth",
    ),
    rec(
        "cool-blue",
        "Cool Blue",
        "Steely blue cast, clinical and contemplative mood",
    ),
];

pub const WEATHER_EFFECTS: &[OptionRecord] = &[
    rec("clear", "Clear Skies", "Crisp air and unobstructed light"),
    rec(
        "overcast",
        "Overcast",
        "A giant natural softbox of diffused grey light",
    ),
    rec(
        "light-rain",
        "Light Rain",
        "Wet reflective surfaces and glistening droplets",
    ),
    rec(
        "fog",
        "Dense Fog",
        "Layered depth, muted distance and soft mystery",
    ),
    rec(
        "snowfall",
        "Snowfall",
        "Falling flakes and a bright, high-albedo blanket",
    ),
    rec(
        "storm",
        "Storm",
        "Brooding clouds, dramatic sky and charged tension",
    ),
    rec(
        "golden-haze",
        "Golden Haze",
        "Sun-lit dust and warm atmospheric glow",
    ),
];

pub const TIME_PERIODS: &[OptionRecord] = &[
    rec(
        "modern-day",
        "Modern Day",
        "Contemporary setting, current fashion and technology",
    ),
    rec(
        "1950s",
        "1950s Americana",
        "Chrome, diners and kodachrome optimism",
    ),
    rec(
        "1980s",
        "1980s Retro",
        "Neon, analog grain and synthwave nostalgia",
    ),
    rec(
        "victorian",
        "Victorian Era",
        "Gaslit streets, ornate dress and early industrial texture",
    ),
    rec(
        "film-noir",
        "1940s Film Noir",
        "Trench coats, venetian blinds and cigarette smoke",
    ),
    rec(
        "far-future",
        "Far Future",
        "Sleek megastructures and post-human technology",
    ),
];

pub const ENGINE_OPTIMIZATIONS: &[OptionRecord] = &[
    rec(
        "universal",
        "Universal",
        "Balanced phrasing for any generation engine",
    ),
    rec(
        "midjourney",
        "Midjourney v6",
        "Flag-style parameters with aspect ratio and stylization",
    ),
    rec(
        "stable-diffusion",
        "Stable Diffusion XL",
        "Weighted keyword emphasis syntax",
    ),
    rec(
        "dall-e",
        "DALL-E 3",
        "Natural-language descriptive prompts",
    ),
    rec(
        "flux",
        "FLUX.1",
        "Detailed prose with technical camera specifics",
    ),
];

pub const ASPECT_RATIOS: &[OptionRecord] = &[
    rec("16:9", "16:9", "Widescreen Cinematic"),
    rec("1:1", "1:1", "Square (Social Media)"),
    rec("4:3", "4:3", "Classic Photography"),
    rec("3:2", "3:2", "35mm Film Standard"),
    rec("9:16", "9:16", "Portrait (Stories/Reels)"),
];

pub const QUALITY_OPTIONS: &[OptionRecord] = &[
    rec("1K", "Standard", "Fast generation, 1024px"),
    rec("2K", "HD", "High definition, 2048px"),
    rec("4K", "4K Ultra", "Maximum detail, 4096px"),
];

pub const ALL_CATEGORIES: [Category; 13] = [
    Category::Body,
    Category::Lens,
    Category::LightingStyle,
    Category::LightingType,
    Category::ShotSize,
    Category::FilmStock,
    Category::LensFilter,
    Category::Palette,
    Category::Weather,
    Category::Period,
    Category::Engine,
    Category::AspectRatio,
    Category::Quality,
];

pub fn records(category: Category) -> &'static [OptionRecord] {
    match category {
        Category::Body => CAMERA_BODIES,
        Category::Lens => LENSES,
        Category::LightingStyle => LIGHTING_STYLES,
        Category::LightingType => LIGHTING_TYPES,
        Category::ShotSize => SHOT_SIZES,
        Category::FilmStock => FILM_STOCKS,
        Category::LensFilter => LENS_FILTERS,
        Category::Palette => COLOR_PALETTES,
        Category::Weather => WEATHER_EFFECTS,
        Category::Period => TIME_PERIODS,
        Category::Engine => ENGINE_OPTIMIZATIONS,
        Category::AspectRatio => ASPECT_RATIOS,
        Category::Quality => QUALITY_OPTIONS,
    }
}

pub fn find(category: Category, id: &str) -> Option<&'static OptionRecord> {
    records(category).iter().find(|record| record.id == id)
}

/// Each category's default selection is its first record.
pub fn default_record(category: Category) -> &'static OptionRecord {
    &records(category)[0]
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Body => "body",
            Category::Lens => "lens",
            Category::LightingStyle => "style",
            Category::LightingType => "light",
            Category::ShotSize => "shot",
            Category::FilmStock => "film",
            Category::LensFilter => "filter",
            Category::Palette => "palette",
            Category::Weather => "weather",
            Category::Period => "period",
            Category::Engine => "engine",
            Category::AspectRatio => "aspect",
            Category::Quality => "quality",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        ALL_CATEGORIES
            .into_iter()
            .find(|category| category.label() == label.trim().to_lowercase())
    }
}
