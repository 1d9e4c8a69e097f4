use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{self, Category};

/// Which prose sections the assembler includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptMode {
    #[default]
    Both,
    TechnicalOnly,
    CreativeOnly,
}

impl PromptMode {
    pub fn from_label(label: &str) -> Option<PromptMode> {
        match label.trim().to_lowercase().as_str() {
            "both" => Some(PromptMode::Both),
            "technical" => Some(PromptMode::TechnicalOnly),
            "creative" => Some(PromptMode::CreativeOnly),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromptMode::Both => "both",
            PromptMode::TechnicalOnly => "technical",
            PromptMode::CreativeOnly => "creative",
        }
    }
}

/// The aperture stops the randomizer picks from.
const APERTURE_STOPS: &[f32] = &[1.2, 1.4, 1.8, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0];

/// The full set of user-editable parameters a prompt is assembled from.
/// Ids are free state and may momentarily desync from the catalog; the
/// assembler degrades gracefully when a lookup fails.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub body: String,
    pub lens: String,
    pub lighting_style: String,
    pub lighting_type: String,
    pub shot_size: String,
    pub film_stock: String,
    pub lens_filter: String,
    pub palette: String,
    pub weather: String,
    pub period: String,
    pub engine: String,
    pub aspect_ratio: String,
    pub quality: String,
    pub exposure: f32,
    pub aperture: f32,
    pub shutter_speed: String,
    pub subject: String,
    pub mode: PromptMode,
}

impl Default for SelectionState {
    fn default() -> Self {
        let default_id = |category| catalog::default_record(category).id.to_string();
        SelectionState {
            body: default_id(Category::Body),
            lens: default_id(Category::Lens),
            lighting_style: default_id(Category::LightingStyle),
            lighting_type: default_id(Category::LightingType),
            shot_size: default_id(Category::ShotSize),
            film_stock: default_id(Category::FilmStock),
            lens_filter: default_id(Category::LensFilter),
            palette: default_id(Category::Palette),
            weather: default_id(Category::Weather),
            period: default_id(Category::Period),
            engine: default_id(Category::Engine),
            aspect_ratio: default_id(Category::AspectRatio),
            quality: default_id(Category::Quality),
            exposure: 0.0,
            aperture: 2.8,
            shutter_speed: "1/125".to_string(),
            subject: String::new(),
            mode: PromptMode::Both,
        }
    }
}

impl SelectionState {
    pub fn id_for(&self, category: Category) -> &str {
        match category {
            Category::Body => &self.body,
            Category::Lens => &self.lens,
            Category::LightingStyle => &self.lighting_style,
            Category::LightingType => &self.lighting_type,
            Category::ShotSize => &self.shot_size,
            Category::FilmStock => &self.film_stock,
            Category::LensFilter => &self.lens_filter,
            Category::Palette => &self.palette,
            Category::Weather => &self.weather,
            Category::Period => &self.period,
            Category::Engine => &self.engine,
            Category::AspectRatio => &self.aspect_ratio,
            Category::Quality => &self.quality,
        }
    }

    /// Sets a category selection, refusing ids the catalog does not know.
    pub fn select(&mut self, category: Category, id: &str) -> bool {
        if catalog::find(category, id).is_none() {
            return false;
        }
        let slot = match category {
            Category::Body => &mut self.body,
            Category::Lens => &mut self.lens,
            Category::LightingStyle => &mut self.lighting_style,
            Category::LightingType => &mut self.lighting_type,
            Category::ShotSize => &mut self.shot_size,
            Category::FilmStock => &mut self.film_stock,
            Category::LensFilter => &mut self.lens_filter,
            Category::Palette => &mut self.palette,
            Category::Weather => &mut self.weather,
            Category::Period => &mut self.period,
            Category::Engine => &mut self.engine,
            Category::AspectRatio => &mut self.aspect_ratio,
            Category::Quality => &mut self.quality,
        };
        *slot = id.to_string();
        true
    }

    /// Re-rolls the photographic categories plus exposure and aperture.
    /// Engine, aspect ratio, quality, shutter speed, subject and mode are
    /// deliberate choices and stay put.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let pick = |rng: &mut R, category| {
            catalog::records(category)
                .choose(rng)
                .map(|record| record.id.to_string())
                .unwrap_or_default()
        };
        self.body = pick(rng, Category::Body);
        self.lens = pick(rng, Category::Lens);
        self.lighting_style = pick(rng, Category::LightingStyle);
        self.lighting_type = pick(rng, Category::LightingType);
        self.shot_size = pick(rng, Category::ShotSize);
        self.film_stock = pick(rng, Category::FilmStock);
        self.lens_filter = pick(rng, Category::LensFilter);
        self.palette = pick(rng, Category::Palette);
        self.weather = pick(rng, Category::Weather);
        self.period = pick(rng, Category::Period);
        self.exposure = (rng.gen_range(0..9) - 4) as f32 * 0.5;
        self.aperture = *APERTURE_STOPS.choose(rng).unwrap_or(&2.8);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::ALL_CATEGORIES;

    #[test]
    fn defaults_are_each_category_first_record() {
        let state = SelectionState::default();
        for category in ALL_CATEGORIES {
            assert_eq!(state.id_for(category), catalog::default_record(category).id);
        }
        assert_eq!(state.exposure, 0.0);
        assert_eq!(state.mode, PromptMode::Both);
    }

    #[test]
    fn select_rejects_unknown_ids() {
        let mut state = SelectionState::default();
        assert!(!state.select(Category::Body, "box-brownie"));
        assert_eq!(state.body, "sony-a7r-v");
        assert!(state.select(Category::Body, "leica-m11"));
        assert_eq!(state.body, "leica-m11");
    }

    #[test]
    fn randomize_only_produces_catalog_ids_and_legal_values() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut state = SelectionState::default();
            state.randomize(&mut rng);
            for category in [
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
            ] {
                assert!(catalog::find(category, state.id_for(category)).is_some());
            }
            assert!((-2.0..=2.0).contains(&state.exposure));
            assert_eq!((state.exposure * 2.0).fract(), 0.0);
            assert!(APERTURE_STOPS.contains(&state.aperture));
            // Untouched by randomize.
            assert_eq!(state.engine, "universal");
            assert_eq!(state.shutter_speed, "1/125");
        }
    }

    #[test]
    fn prompt_mode_labels_round_trip() {
        for mode in [
            PromptMode::Both,
            PromptMode::TechnicalOnly,
            PromptMode::CreativeOnly,
        ] {
            assert_eq!(PromptMode::from_label(mode.label()), Some(mode));
        }
        assert_eq!(PromptMode::from_label("verbose"), None);
    }
}
