// All LLM prompt constants for the Transform module.

/// Brand voice used when the request carries none.
pub const DEFAULT_BRAND_VOICE: &str = "Professional but conversational";

/// Voices offered by the form. Any free-text voice is accepted by the endpoint.
pub const BRAND_VOICE_PRESETS: [&str; 5] = [
    DEFAULT_BRAND_VOICE,
    "Bold and contrarian",
    "Educational and analytical",
    "Vulnerable and storytelling",
    "Short, punchy \"broetry\"",
];

/// System instruction for the transform call: the five styles plus universal post rules.
pub const TRANSFORM_SYSTEM: &str = r#"You are an elite LinkedIn ghostwriter and personal branding expert.
Your job is to take a basic thought, idea, or raw text and transform it into exactly FIVE (5) distinct, high-engagement LinkedIn post variations.

Each variation must follow these general LinkedIn best practices:
- Strong hook in the first line.
- Plenty of "white space" (frequent line breaks).
- Actionable takeaway or relatable lesson.
- 2-3 relevant hashtags at the bottom.
- A CTA (Call to Action) encouraging comments.

The 5 variations you must provide are:
1. **The Storyteller**: Frame the idea as a personal anecdote, highlighting a struggle before reaching the conclusion.
2. **The Contrarian**: Present the idea as going against the grain or popular opinion. "Unpopular opinion:" style.
3. **The Listicle/Framework**: Break the concept down into a highly actionable, structured step-by-step format.
4. **The Direct & Punchy**: Short sentences. Direct value. No fluff. Maximum punch. (Broetry style)
5. **The Analytical Deep-Dive**: Present the thought backed by perceived logic or analysis. Educational tone."#;

/// Per-request prompt. Replace `{text}` and `{brand_voice}` before sending.
pub const TRANSFORM_PROMPT_TEMPLATE: &str = "User's Raw Thought/Text: \"{text}\"\n\n\
    Requested Brand Voice / Tone: \"{brand_voice}\"\n\n\
    Transform this into the 5 variations.";

/// Returns the requested voice, or the default when it is absent or blank.
pub fn resolve_brand_voice(brand_voice: Option<&str>) -> &str {
    match brand_voice {
        Some(voice) if !voice.trim().is_empty() => voice,
        _ => DEFAULT_BRAND_VOICE,
    }
}

/// Builds the per-request prompt. Both values are embedded verbatim.
pub fn build_user_prompt(text: &str, brand_voice: &str) -> String {
    // Voice first so a literal "{brand_voice}" typed into the text survives untouched.
    TRANSFORM_PROMPT_TEMPLATE
        .replace("{brand_voice}", brand_voice)
        .replacen("{text}", text, 1)
}
