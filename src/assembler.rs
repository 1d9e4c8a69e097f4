//! Pure prompt construction. The clause wording, ordering and omission
//! rules here are the contract the rest of the app (and anything pasted
//! into a generation engine) depends on, so changes are not cosmetic.

use crate::catalog::{self, Category, OptionRecord, NONE_ID};
use crate::selection::{PromptMode, SelectionState};

/// Returned unless the refinement pipeline supplies its own.
pub const DEFAULT_NEGATIVE_PROMPT: &str = "cartoon, anime, 3d render, illustration, painting, drawing, low quality, blurry, distorted, watermark, signature, text, bad anatomy, extra limbs, missing fingers, low resolution, grainy, overexposed, underexposed";

const SUBJECT_FALLBACK: &str = "A professional photographic scene";

const TECHNICAL_SUFFIX: &str = " Technical specifications: 8k resolution, photorealistic textures, professional color science, tack-sharp focus, cinematic composition, high dynamic range (HDR), subtle film grain, natural skin tones, and sophisticated post-processing.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    pub main_text: String,
    pub negative_text: String,
}

fn lookup(category: Category, id: &str) -> Option<&'static OptionRecord> {
    catalog::find(category, id)
}

/// A record's description lower-cased for embedding mid-sentence.
fn lowered(record: &OptionRecord) -> String {
    record.description.to_lowercase()
}

fn subject_clause(selection: &SelectionState) -> String {
    let subject = selection.subject.trim();
    if subject.is_empty() {
        SUBJECT_FALLBACK.to_string()
    } else {
        subject.to_string()
    }
}

fn composition_clause(selection: &SelectionState) -> Option<String> {
    let shot = lookup(Category::ShotSize, &selection.shot_size)?;
    let period = lookup(Category::Period, &selection.period)?;
    Some(format!(
        " The shot is framed as a {}, which {}. Set in a {} ({}) context.",
        shot.name,
        lowered(shot),
        period.name,
        lowered(period)
    ))
}

fn gear_clause(selection: &SelectionState) -> Option<String> {
    let body = lookup(Category::Body, &selection.body)?;
    let lens = lookup(Category::Lens, &selection.lens)?;
    Some(format!(
        " Captured with the {} ({}) paired with a {} lens at f/{}, {}s. Utilizing its {} to achieve superior micro-contrast and edge-to-edge sharpness.",
        body.name,
        body.description,
        lens.name,
        selection.aperture,
        selection.shutter_speed,
        lowered(lens)
    ))
}

fn lighting_clause(selection: &SelectionState) -> Option<String> {
    let style = lookup(Category::LightingStyle, &selection.lighting_style)?;
    let light = lookup(Category::LightingType, &selection.lighting_type)?;
    Some(format!(
        " The scene is masterfully illuminated with a {} style, creating {}, and further refined by {} which adds {} and professional-grade light falloff.",
        style.name,
        lowered(style),
        light.name,
        lowered(light)
    ))
}

fn film_clause(selection: &SelectionState) -> Option<String> {
    if selection.film_stock == NONE_ID {
        return None;
    }
    let film = lookup(Category::FilmStock, &selection.film_stock)?;
    Some(format!(
        " Emulating the aesthetic of {} film stock, characterized by {}.",
        film.name,
        lowered(film)
    ))
}

fn filter_clause(selection: &SelectionState) -> Option<String> {
    if selection.lens_filter == NONE_ID {
        return None;
    }
    let filter = lookup(Category::LensFilter, &selection.lens_filter)?;
    Some(format!(
        " Enhanced with a {} which {}.",
        filter.name,
        lowered(filter)
    ))
}

fn atmosphere_clause(selection: &SelectionState) -> Option<String> {
    let weather = lookup(Category::Weather, &selection.weather)?;
    let palette = lookup(Category::Palette, &selection.palette)?;
    Some(format!(
        " Atmospheric conditions: {} ({}). Color science: {} ({}).",
        weather.name,
        lowered(weather),
        palette.name,
        lowered(palette)
    ))
}

fn exposure_clause(selection: &SelectionState) -> Option<String> {
    if selection.exposure == 0.0 {
        return None;
    }
    let (sign, mood) = if selection.exposure > 0.0 {
        ("+", "bright, airy highlights and high-key aesthetics")
    } else {
        ("", "deep, moody shadows and rich blacks")
    };
    Some(format!(
        " Exposure compensation set to {}{} EV for {}.",
        sign, selection.exposure, mood
    ))
}

fn engine_suffix(selection: &SelectionState) -> String {
    match selection.engine.as_str() {
        "midjourney" => format!(
            " --ar {} --v 6.0 --stylize 250",
            selection.aspect_ratio.replace(':', "/")
        ),
        "stable-diffusion" => {
            " (masterpiece:1.2), (photorealistic:1.2), (highly detailed:1.2)".to_string()
        }
        _ => String::new(),
    }
}

/// Builds the prompt pair from the current selection. Pure and total: a
/// stale id simply drops the clause that needed it.
///
/// Clause order is fixed: subject, composition, gear, lighting, film,
/// filter, atmosphere, exposure, technical suffix, engine suffix.
pub fn assemble(selection: &SelectionState) -> AssembledPrompt {
    let technical = selection.mode != PromptMode::CreativeOnly;
    let creative = selection.mode != PromptMode::TechnicalOnly;

    let mut main = format!("Professional photography: {}.", subject_clause(selection));
    let mut push = |clause: Option<String>, included: bool| {
        if included {
            if let Some(text) = clause {
                main.push_str(&text);
            }
        }
    };
    push(composition_clause(selection), creative);
    push(gear_clause(selection), technical);
    push(lighting_clause(selection), creative);
    push(film_clause(selection), creative);
    push(filter_clause(selection), technical);
    push(atmosphere_clause(selection), creative);
    push(exposure_clause(selection), technical);

    main.push_str(TECHNICAL_SUFFIX);
    main.push_str(&engine_suffix(selection));

    AssembledPrompt {
        main_text: main,
        negative_text: DEFAULT_NEGATIVE_PROMPT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pier_scene() -> SelectionState {
        SelectionState {
            subject: "a lone figure on a pier at dusk".to_string(),
            ..SelectionState::default()
        }
    }

    #[test]
    fn default_scenario_matches_documented_output() {
        let prompt = assemble(&pier_scene());
        assert!(prompt.main_text.starts_with(
            "Professional photography: a lone figure on a pier at dusk. The shot is framed as a Wide Shot (WS), which"
        ));
        // Fixed clause order: composition, gear, lighting.
        let composition = prompt.main_text.find("The shot is framed").unwrap();
        let gear = prompt.main_text.find("Captured with the Sony A7R V").unwrap();
        let lighting = prompt.main_text.find("masterfully illuminated").unwrap();
        assert!(composition < gear && gear < lighting);
        // Exposure 0 emits no clause; universal engine emits no suffix.
        assert!(!prompt.main_text.contains("Exposure compensation"));
        assert!(prompt
            .main_text
            .ends_with("and sophisticated post-processing."));
        assert_eq!(prompt.negative_text, DEFAULT_NEGATIVE_PROMPT);
    }

    #[test]
    fn assembly_is_deterministic() {
        let mut selection = pier_scene();
        selection.exposure = 1.5;
        selection.film_stock = "cinestill-800t".to_string();
        assert_eq!(assemble(&selection), assemble(&selection));
    }

    #[test]
    fn empty_subject_uses_the_fallback_phrase() {
        let mut selection = SelectionState::default();
        selection.subject = "   ".to_string();
        let prompt = assemble(&selection);
        assert!(prompt
            .main_text
            .starts_with("Professional photography: A professional photographic scene."));
    }

    #[test]
    fn negative_exposure_reads_moody() {
        let mut selection = pier_scene();
        selection.exposure = -1.5;
        let prompt = assemble(&selection);
        assert!(prompt.main_text.contains(
            " Exposure compensation set to -1.5 EV for deep, moody shadows and rich blacks."
        ));
    }

    #[test]
    fn positive_exposure_reads_bright_and_carries_a_plus_sign() {
        let mut selection = pier_scene();
        selection.exposure = 0.5;
        let prompt = assemble(&selection);
        assert!(prompt.main_text.contains(
            " Exposure compensation set to +0.5 EV for bright, airy highlights and high-key aesthetics."
        ));
    }

    #[test]
    fn film_and_filter_clauses_track_the_none_sentinel() {
        let mut selection = pier_scene();
        let prompt = assemble(&selection);
        assert!(!prompt.main_text.contains("film stock"));
        assert!(!prompt.main_text.contains("Enhanced with"));

        selection.film_stock = "kodak-portra-400".to_string();
        selection.lens_filter = "black-pro-mist".to_string();
        let prompt = assemble(&selection);
        assert!(prompt.main_text.contains(
            "Emulating the aesthetic of Kodak Portra 400 film stock, characterized by warm, natural skin tones with gentle saturation."
        ));
        assert!(prompt.main_text.contains(
            "Enhanced with a Black Pro-Mist 1/4 which softens highlights into a dreamy cinematic halation."
        ));
    }

    #[test]
    fn technical_mode_drops_creative_clauses() {
        let mut selection = pier_scene();
        selection.mode = PromptMode::TechnicalOnly;
        selection.film_stock = "ilford-hp5".to_string();
        selection.exposure = 1.0;
        let prompt = assemble(&selection);
        assert!(!prompt.main_text.contains("The shot is framed"));
        assert!(!prompt.main_text.contains("masterfully illuminated"));
        assert!(!prompt.main_text.contains("film stock"));
        assert!(!prompt.main_text.contains("Atmospheric conditions"));
        assert!(prompt.main_text.contains("Captured with the"));
        assert!(prompt.main_text.contains("Exposure compensation"));
    }

    #[test]
    fn creative_mode_drops_technical_clauses() {
        let mut selection = pier_scene();
        selection.mode = PromptMode::CreativeOnly;
        selection.lens_filter = "polarizer".to_string();
        selection.exposure = -2.0;
        let prompt = assemble(&selection);
        assert!(!prompt.main_text.contains("Captured with the"));
        assert!(!prompt.main_text.contains("Enhanced with"));
        assert!(!prompt.main_text.contains("Exposure compensation"));
        assert!(prompt.main_text.contains("The shot is framed"));
        assert!(prompt.main_text.contains("Atmospheric conditions"));
    }

    #[test]
    fn both_mode_includes_every_applicable_clause() {
        let mut selection = pier_scene();
        selection.film_stock = "fuji-velvia-50".to_string();
        selection.lens_filter = "nd-filter".to_string();
        selection.exposure = 2.0;
        let prompt = assemble(&selection);
        for needle in [
            "The shot is framed",
            "Captured with the",
            "masterfully illuminated",
            "film stock",
            "Enhanced with",
            "Atmospheric conditions",
            "Exposure compensation",
        ] {
            assert!(prompt.main_text.contains(needle), "missing: {needle}");
        }
    }

    #[test]
    fn midjourney_suffix_uses_flag_syntax_with_the_aspect_ratio() {
        let mut selection = pier_scene();
        selection.engine = "midjourney".to_string();
        let prompt = assemble(&selection);
        assert!(prompt.main_text.ends_with(" --ar 16/9 --v 6.0 --stylize 250"));

        selection.aspect_ratio = "9:16".to_string();
        let prompt = assemble(&selection);
        assert!(prompt.main_text.ends_with(" --ar 9/16 --v 6.0 --stylize 250"));
    }

    #[test]
    fn stable_diffusion_suffix_uses_weighted_keywords() {
        let mut selection = pier_scene();
        selection.engine = "stable-diffusion".to_string();
        let prompt = assemble(&selection);
        assert!(prompt
            .main_text
            .ends_with(" (masterpiece:1.2), (photorealistic:1.2), (highly detailed:1.2)"));
    }

    #[test]
    fn other_engines_emit_no_suffix() {
        for engine in ["universal", "dall-e", "flux"] {
            let mut selection = pier_scene();
            selection.engine = engine.to_string();
            let prompt = assemble(&selection);
            assert!(
                prompt
                    .main_text
                    .ends_with("and sophisticated post-processing."),
                "unexpected suffix for {engine}"
            );
        }
    }

    #[test]
    fn stale_ids_drop_their_clause_instead_of_failing() {
        let mut selection = pier_scene();
        selection.body = "polaroid-sx70".to_string();
        let prompt = assemble(&selection);
        assert!(!prompt.main_text.contains("Captured with the"));
        assert!(prompt.main_text.contains("The shot is framed"));

        selection.weather = "meteor-shower".to_string();
        let prompt = assemble(&selection);
        assert!(!prompt.main_text.contains("Atmospheric conditions"));
        assert!(prompt
            .main_text
            .ends_with("and sophisticated post-processing."));
    }
}
