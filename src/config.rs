use std::env;

use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_pro_model: String,
    pub gemini_temperature: f32,
    pub gemini_top_k: i32,
    pub gemini_top_p: f32,
    pub gemini_max_output_tokens: i32,
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<f32>().ok())
        .unwrap_or(default)
}

fn env_i32(name: &str, default: i32) -> i32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<i32>().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn load() -> Self {
        Config {
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            gemini_api_key: env_string("GEMINI_API_KEY", ""),
            gemini_model: env_string("GEMINI_MODEL", "gemini-3-flash-preview"),
            gemini_pro_model: env_string("GEMINI_PRO_MODEL", "gemini-3.1-pro-preview"),
            gemini_temperature: env_f32("GEMINI_TEMPERATURE", 0.7),
            gemini_top_k: env_i32("GEMINI_TOP_K", 40),
            gemini_top_p: env_f32("GEMINI_TOP_P", 0.95),
            gemini_max_output_tokens: env_i32("GEMINI_MAX_OUTPUT_TOKENS", 2048),
        }
    }
}

// Stage 1 of the refinement pipeline. {base_prompt} is substituted at call time.
pub const EMBELLISH_PROMPT: &str = r#"You are a world-class photography prompt engineer and AI content policy expert. Take the following base prompt and "juice it up" with extreme detail, professional photography terminology, and atmospheric depth.

CRITICAL SAFETY & POLICY INSTRUCTIONS:
1. SUBJECT ANONYMITY: Refer to the person as "this person" or "the subject". Do not use specific names or overly descriptive personal identifiers if they feel too intimate.
2. CLOTHING CENSORSHIP: If the base prompt mentions "bikini", "swimwear", "lingerie", "undergarments", or any potentially suggestive clothing, you MUST OMIT the clothing description entirely. Do not replace it with "resort wear" or other fashion terms. Instead, focus the prompt on the environment, lighting physics, skin textures (in a clinical/photographic sense), and the subject's expression/pose.
3. FILTER AVOIDANCE: Avoid any keywords that could be interpreted as suggestive, violent, or sensitive. Use clinical, technical, and artistic terminology (e.g., "anatomical precision", "sub-surface scattering", "chiaroscuro").
4. SUBJECT INTEGRITY: Maintain the core essence of the scene, but strictly follow the censorship rules above.

Base Prompt: {base_prompt}

Also, generate a concise negative prompt that reinforces these safety standards.

Output your response in the following JSON format:
{
  "prompt": "the refined main prompt",
  "negative": "the refined negative prompt"
}"#;

// Stage 2: an independent re-check of stage 1's output against the same rules.
pub const SAFETY_AUDIT_PROMPT: &str = r#"Review the following AI image generation prompt for strict safety compliance.

RULES:
1. NO mention of bikinis, lingerie, or undergarments.
2. NO suggestive or intimate clothing descriptions.
3. NO specific personal names.
4. The subject must be referred to as "the subject" or "this person".

If the prompt violates these rules, rewrite it to be 100% safe while preserving the artistic and technical quality. Focus on the environment and lighting.

Prompt to Audit: {prompt}

Output ONLY the sanitized prompt text."#;

pub const IMAGE_ANALYSIS_PROMPT: &str = "Analyze this photograph. Provide a concise, highly descriptive scene description (subject) that captures the core elements, mood, and composition. Also, suggest the most likely camera gear (body, lens), lighting style, and shot size used. Return the result in JSON format: { \"subject\": \"...\", \"suggestedBodyId\": \"...\", \"suggestedLensId\": \"...\", \"suggestedStyleId\": \"...\", \"suggestedShotSizeId\": \"...\" }. Use the IDs from a standard professional photography context if possible, but prioritize the 'subject' string.";
